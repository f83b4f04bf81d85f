/*!
 * Desktop viewer for gtv-rs - global temperature variance heat map
 *
 * A cross-platform window that:
 * - Fetches the dataset once in the background
 * - Paints the heat map, axes and legend
 * - Shows a tooltip for the cell under the pointer
 * - Exports the current chart to SVG, PNG or HTML
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::Result;
use eframe::egui;
use gtv_rs::api::DEFAULT_DATASET_URL;
use gtv_rs::layout::HeatMapLayout;
use gtv_rs::palette::Rgb8;
use gtv_rs::viz::{self, OutputFormat};
use gtv_rs::{Client, HeatMapConfig, HeatMapRenderer, TooltipController, TooltipState};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1040.0, 620.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Global Temperature Heat Map - gtv-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Global Temperature Heat Map",
        options,
        Box::new(|_cc| Ok(Box::new(GtvApp::new()))),
    )
}

const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(51, 51, 51);
const TICK_LEN: f32 = 6.0;

/// Main application state
struct GtvApp {
    url: String,
    locale: String,

    is_loading: bool,
    status_message: String,
    error_message: String,

    chart: Option<Chart>,
    /// Tooltip for the cell under the pointer, replaced every frame.
    tooltip: TooltipState,
    load_receiver: Option<mpsc::Receiver<LoadResult>>,
}

/// A rendered dataset and the tooltip controller bound to its scales.
struct Chart {
    layout: HeatMapLayout,
    tooltips: TooltipController,
}

enum LoadResult {
    Loaded(Box<HeatMapLayout>),
    Error(String),
}

impl GtvApp {
    fn new() -> Self {
        Self {
            url: DEFAULT_DATASET_URL.to_string(),
            locale: "en".to_string(),
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            chart: None,
            tooltip: TooltipState::Hidden,
            load_receiver: None,
        }
    }

    fn validate_inputs(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            anyhow::bail!("Please enter the dataset URL");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("Dataset URL must start with http:// or https://");
        }
        Ok(())
    }

    fn start_load(&mut self) {
        if let Err(err) = self.validate_inputs() {
            self.error_message = format!("Validation error: {}", err);
            return;
        }

        self.is_loading = true;
        self.chart = None;
        self.tooltip = TooltipState::Hidden;
        self.error_message.clear();
        self.status_message = "Fetching dataset...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.load_receiver = Some(receiver);

        let url = self.url.trim().to_string();
        let config = HeatMapConfig::default().with_locale(&self.locale);

        // The only blocking step; nothing is drawn until it completes.
        thread::spawn(move || {
            let result = match Client::with_url(&url).fetch_dataset() {
                Ok(dataset) => match HeatMapRenderer::new(&config).render(&dataset) {
                    Ok(layout) => LoadResult::Loaded(Box::new(layout)),
                    Err(err) => LoadResult::Error(format!("Failed to render: {}", err)),
                },
                Err(err) => {
                    log::error!("{err}");
                    LoadResult::Error(format!("Failed to fetch data: {}", err))
                }
            };
            let _ = sender.send(result);
        });
    }

    fn check_load_result(&mut self) {
        if let Some(receiver) = &self.load_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading = false;
            self.load_receiver = None;

            match result {
                LoadResult::Loaded(layout) => {
                    self.status_message = format!(
                        "Loaded {} monthly records. {}",
                        layout.cells.len(),
                        layout.description
                    );
                    let tooltips = TooltipController::for_layout(&layout);
                    self.chart = Some(Chart {
                        layout: *layout,
                        tooltips,
                    });
                }
                LoadResult::Error(error) => {
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }
    }

    fn export_chart(&mut self) {
        let Some(chart) = self.chart.as_ref() else {
            return;
        };
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(dir)
            .set_file_name("heat-map.svg")
            .add_filter("SVG image", &["svg"])
            .add_filter("PNG image", &["png"])
            .add_filter("HTML page", &["html"])
            .save_file()
        else {
            return;
        };

        let path = if OutputFormat::from_path(&path).is_none() {
            path.with_extension(OutputFormat::Svg.extension())
        } else {
            path
        };

        match viz::render_to_file(&chart.layout, &path) {
            Ok(()) => {
                self.status_message = format!("Chart written to {}", path.display());
                self.error_message.clear();
            }
            Err(err) => self.error_message = format!("Failed to export chart: {}", err),
        }
    }
}

impl eframe::App for GtvApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed background load
        self.check_load_result();

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Monthly Global Land-Surface Temperature");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Dataset URL:");
                ui.add(egui::TextEdit::singleline(&mut self.url).desired_width(520.0));

                egui::ComboBox::from_label("Locale")
                    .selected_text(&self.locale)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.locale, "en".to_string(), "English (en)");
                        ui.selectable_value(&mut self.locale, "de".to_string(), "German (de)");
                        ui.selectable_value(&mut self.locale, "fr".to_string(), "French (fr)");
                        ui.selectable_value(&mut self.locale, "es".to_string(), "Spanish (es)");
                        ui.selectable_value(&mut self.locale, "it".to_string(), "Italian (it)");
                    });
            });

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Load"))
                    .clicked()
                {
                    self.start_load();
                }

                if ui
                    .add_enabled(self.chart.is_some(), egui::Button::new("Export..."))
                    .clicked()
                {
                    self.export_chart();
                }

                if self.is_loading {
                    ui.spinner();
                    ui.label("Fetching...");
                }
            });

            if !self.status_message.is_empty() {
                ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
            }

            if !self.error_message.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.error_message);
            }

            ui.add_space(8.0);

            if let Some(chart) = &self.chart {
                self.tooltip = egui::ScrollArea::both()
                    .show(ui, |ui| paint_chart(ui, &chart.layout, &chart.tooltips))
                    .inner;
            }

            if let Some(tip) = self.tooltip.tooltip() {
                ui.label(format!("{}: {}", tip.lines[0], tip.lines[1]));
            }
        });
    }
}

fn color32(c: Rgb8) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

/// Paint one frame of the heat map and return the tooltip state for the current pointer.
fn paint_chart(
    ui: &mut egui::Ui,
    layout: &HeatMapLayout,
    tooltips: &TooltipController,
) -> TooltipState {
    let canvas = layout.canvas;
    let (response, painter) = ui.allocate_painter(
        egui::vec2(canvas.width as f32, canvas.height as f32),
        egui::Sense::hover(),
    );
    let origin = response.rect.min;
    let to_screen = |x: f64, y: f64| origin + egui::vec2(x as f32, y as f32);
    let (ox, oy) = canvas.plot_origin;
    let stroke = egui::Stroke::new(1.0, AXIS_COLOR);
    let tick_font = egui::FontId::proportional(11.0);

    painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);
    painter.text(
        to_screen(ox, canvas.description_y),
        egui::Align2::LEFT_CENTER,
        &layout.description,
        egui::FontId::proportional(16.0),
        AXIS_COLOR,
    );

    for cell in &layout.cells {
        let rect = egui::Rect::from_min_max(
            to_screen(ox + cell.x, oy + cell.y),
            to_screen(ox + cell.x + cell.width, oy + cell.y + cell.height),
        );
        painter.rect_filled(rect, 0.0, color32(cell.color));
    }

    // y axis
    painter.line_segment(
        [to_screen(ox, oy), to_screen(ox, oy + layout.config.height)],
        stroke,
    );
    for tick in &layout.y_ticks {
        let p = to_screen(ox, oy + tick.offset);
        painter.line_segment([p - egui::vec2(TICK_LEN, 0.0), p], stroke);
        painter.text(
            p - egui::vec2(TICK_LEN + 3.0, 0.0),
            egui::Align2::RIGHT_CENTER,
            &tick.label,
            tick_font.clone(),
            AXIS_COLOR,
        );
    }

    // x axis
    let axis_y = oy + layout.config.height;
    painter.line_segment(
        [to_screen(ox, axis_y), to_screen(ox + layout.config.width, axis_y)],
        stroke,
    );
    for tick in &layout.x_ticks {
        let p = to_screen(ox + tick.offset, axis_y);
        painter.line_segment([p, p + egui::vec2(0.0, TICK_LEN)], stroke);
        painter.text(
            p + egui::vec2(0.0, TICK_LEN + 2.0),
            egui::Align2::CENTER_TOP,
            &tick.label,
            tick_font.clone(),
            AXIS_COLOR,
        );
    }

    // legend
    let (lx, ly) = canvas.legend_origin;
    let bar_h = layout.config.legend_height;
    for seg in layout.legend_segments.iter().filter(|s| s.width > 0.0) {
        let rect = egui::Rect::from_min_max(
            to_screen(lx + seg.x, ly),
            to_screen(lx + seg.x + seg.width, ly + bar_h),
        );
        painter.rect_filled(rect, 0.0, color32(seg.color));
    }
    painter.line_segment(
        [
            to_screen(lx, ly + bar_h),
            to_screen(lx + layout.config.legend_width, ly + bar_h),
        ],
        stroke,
    );
    for tick in &layout.legend_ticks {
        let p = to_screen(lx + tick.offset, ly + bar_h);
        painter.line_segment([p, p + egui::vec2(0.0, TICK_LEN)], stroke);
        painter.text(
            p + egui::vec2(0.0, TICK_LEN + 2.0),
            egui::Align2::CENTER_TOP,
            &tick.label,
            tick_font.clone(),
            AXIS_COLOR,
        );
    }

    // Each frame's pointer position replaces the previous tooltip.
    let state = match response.hover_pos() {
        Some(pos) => {
            let local = pos - origin;
            match layout.cell_at(local.x as f64 - ox, local.y as f64 - oy) {
                Some(cell) => tooltips.on_hover(&cell.record()),
                None => tooltips.on_unhover(),
            }
        }
        None => tooltips.on_unhover(),
    };

    if let TooltipState::Visible(tip) = &state {
        let galley = painter.layout_no_wrap(
            tip.text(),
            egui::FontId::monospace(12.0),
            egui::Color32::WHITE,
        );
        let pad = egui::vec2(8.0, 6.0);
        let pos = to_screen(ox + tip.anchor_x, oy + tip.anchor_y);
        let rect = egui::Rect::from_min_size(pos, galley.size() + pad * 2.0);
        painter.rect_filled(rect, 4.0, egui::Color32::from_black_alpha(204));
        painter.galley(pos + pad, galley, egui::Color32::WHITE);
    }

    state
}

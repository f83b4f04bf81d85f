//! Heat map geometry: turns a dataset plus scales into cells, axis ticks, legend
//! segments and the description line. Nothing here draws; surfaces consume the
//! resulting [`HeatMapLayout`].

use crate::config::HeatMapConfig;
use crate::error::{HeatMapError, Result};
use crate::format::{UNIT, format_decimal, map_locale, month_name};
use crate::models::{Dataset, MonthlyRecord};
use crate::palette::Rgb8;
use crate::scale::{ScaleBuilder, Scales, year_ticks};
use log::info;
use serde::Serialize;
use std::collections::BTreeSet;

/// Height reserved above the plot for the description line.
pub const DESCRIPTION_BAND_PX: f64 = 32.0;
/// Room below an axis line for tick marks and labels.
pub const AXIS_LABEL_BAND_PX: f64 = 24.0;
/// Gap between the x-axis labels and the legend bar.
pub const LEGEND_GAP_PX: f64 = 10.0;
/// Approximate number of year ticks along the x axis.
pub const YEAR_TICK_COUNT: usize = 10;

/// One rectangle of the grid, with the record it encodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub year: i32,
    /// Zero-based month index (January = 0).
    pub month_index: u32,
    /// Absolute temperature (base + variance).
    pub temperature: f64,
    pub variance: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bucket: usize,
    pub color: Rgb8,
}

impl Cell {
    /// The record this cell was computed from.
    pub fn record(&self) -> MonthlyRecord {
        MonthlyRecord {
            year: self.year,
            month: self.month_index + 1,
            variance: self.variance,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Axis tick: domain value, pixel offset along its axis, and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

/// One color bucket of the legend bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSegment {
    pub color: Rgb8,
    pub start_temp: f64,
    pub end_temp: f64,
    pub x: f64,
    pub width: f64,
}

/// Absolute positions of the chart parts on the output canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Vertical center of the description line.
    pub description_y: f64,
    /// Top-left corner of the plot area.
    pub plot_origin: (f64, f64),
    /// Top-left corner of the legend bar.
    pub legend_origin: (f64, f64),
}

/// Everything a drawing surface needs, in plot-local pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatMapLayout {
    pub config: HeatMapConfig,
    pub scales: Scales,
    pub base_temperature: f64,
    pub description: String,
    pub cells: Vec<Cell>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub legend_segments: Vec<LegendSegment>,
    pub legend_ticks: Vec<Tick>,
    pub canvas: Canvas,
}

impl HeatMapLayout {
    /// Topmost cell under a point given in plot coordinates.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        self.cells.iter().rev().find(|c| c.contains(x, y))
    }
}

/// `"{minYear} - {maxYear}: base temperature {baseTemperature}℃"`.
pub fn describe(dataset: &Dataset) -> Result<String> {
    let (min_year, max_year) = dataset.year_extent().ok_or(HeatMapError::EmptyDataset)?;
    Ok(format!(
        "{min_year} - {max_year}: base temperature {}{UNIT}",
        dataset.base_temperature
    ))
}

/// Computes a [`HeatMapLayout`] for a dataset under one configuration.
#[derive(Debug, Clone, Copy)]
pub struct HeatMapRenderer<'a> {
    config: &'a HeatMapConfig,
}

impl<'a> HeatMapRenderer<'a> {
    pub fn new(config: &'a HeatMapConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, dataset: &Dataset) -> Result<HeatMapLayout> {
        let config = self.config;
        let scales = ScaleBuilder::new(config).build(dataset)?;
        let (_, decimal_sep) = map_locale(&config.locale);

        let years: BTreeSet<i32> = dataset.monthly_variance.iter().map(|r| r.year).collect();
        let months: BTreeSet<u32> = dataset.monthly_variance.iter().map(|r| r.month).collect();
        let cell_w = config.width / years.len() as f64;
        let cell_h = config.height / months.len() as f64;

        let cells: Vec<Cell> = dataset
            .monthly_variance
            .iter()
            .map(|r| {
                let temperature = dataset.temperature(r);
                let bucket = scales.temp_to_color.bucket(temperature);
                Cell {
                    year: r.year,
                    month_index: r.month_index(),
                    temperature,
                    variance: r.variance,
                    x: scales.year_x(r.year),
                    y: scales.month_y(r.month),
                    width: cell_w,
                    height: cell_h,
                    bucket,
                    color: scales.temp_to_color.outputs()[bucket],
                }
            })
            .collect();

        let x_ticks = year_ticks(scales.extent.min_year, scales.extent.max_year, YEAR_TICK_COUNT)
            .into_iter()
            .map(|y| Tick {
                value: y as f64,
                offset: scales.year_x(y),
                label: y.to_string(),
            })
            .collect();

        let y_ticks = (0..12u32)
            .filter_map(|i| {
                month_name(i).map(|name| Tick {
                    value: i as f64,
                    offset: scales.month_to_y.map(i as f64),
                    label: name.to_string(),
                })
            })
            .collect();

        let legend_segments = legend_segments(&scales);
        let legend_ticks = scales
            .temp_to_color
            .thresholds()
            .iter()
            .map(|t| Tick {
                value: *t,
                offset: scales.temp_to_legend_x.map(*t),
                label: format_decimal(*t, decimal_sep),
            })
            .collect();

        let canvas = canvas(config, cell_w);
        let description = describe(dataset)?;

        info!(
            "laid out {} cells over {} years and {} months",
            cells.len(),
            years.len(),
            months.len()
        );

        Ok(HeatMapLayout {
            config: config.clone(),
            scales,
            base_temperature: dataset.base_temperature,
            description,
            cells,
            x_ticks,
            y_ticks,
            legend_segments,
            legend_ticks,
            canvas,
        })
    }
}

/// Legend bar tiling: bucket `i` runs from the previous threshold (or `minTemp`) to its
/// own threshold (or `maxTemp`).
fn legend_segments(scales: &Scales) -> Vec<LegendSegment> {
    let thresholds = scales.temp_to_color.thresholds();
    let colors = scales.temp_to_color.outputs();
    let (min_temp, max_temp) = (scales.extent.min_temp, scales.extent.max_temp);
    let (_, legend_width) = scales.temp_to_legend_x.range();
    let last = colors.len() - 1;

    // Every temperature is equal: the whole bar belongs to the bucket they land in.
    if max_temp == min_temp {
        return colors
            .iter()
            .enumerate()
            .map(|(i, color)| LegendSegment {
                color: *color,
                start_temp: min_temp,
                end_temp: max_temp,
                x: if i == 0 { 0.0 } else { legend_width },
                width: if i == 0 { legend_width } else { 0.0 },
            })
            .collect();
    }

    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let start_temp = if i == 0 { min_temp } else { thresholds[i - 1] };
            let end_temp = if i == last { max_temp } else { thresholds[i] };
            let x = scales.temp_to_legend_x.map(start_temp);
            LegendSegment {
                color: *color,
                start_temp,
                end_temp,
                x,
                width: scales.temp_to_legend_x.map(end_temp) - x,
            }
        })
        .collect()
}

fn canvas(config: &HeatMapConfig, cell_w: f64) -> Canvas {
    let m = &config.margin;
    let plot_origin = (m.left, DESCRIPTION_BAND_PX + m.top);
    let legend_y =
        plot_origin.1 + config.height + m.bottom.max(AXIS_LABEL_BAND_PX) + LEGEND_GAP_PX;
    // `year → x` puts the last year's left edge at `width`, so its column overhangs.
    let plot_right = m.left + config.width + cell_w + m.right;
    let legend_right = m.left + config.legend_width + m.right;
    Canvas {
        width: plot_right.max(legend_right).ceil(),
        height: (legend_y + config.legend_height + AXIS_LABEL_BAND_PX + m.bottom).ceil(),
        description_y: DESCRIPTION_BAND_PX / 2.0,
        plot_origin,
        legend_origin: (m.left, legend_y),
    }
}

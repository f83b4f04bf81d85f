//! Visualization: draw a computed [`HeatMapLayout`] to **SVG**, **PNG** or **HTML**.
//!
//! - SVG/PNG go through plotters; cells, axes and legend are drawn in canvas pixels
//! - HTML is written by [`crate::html`] so cells can carry data attributes
//! - Format is chosen from the output file extension

pub mod legend;
pub mod types;
pub mod util;

pub use types::OutputFormat;

use crate::html;
use crate::layout::HeatMapLayout;
use anyhow::{Context, Result, anyhow, bail};
use log::info;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

use legend::draw_legend;
use util::{AXIS_COLOR, TICK_LEN_PX, px, to_rgb};

/// Write the heat map to `out_path`; `.svg`, `.png` and `.html` are supported.
pub fn render_to_file<P: AsRef<Path>>(layout: &HeatMapLayout, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    let format = OutputFormat::from_path(out_path).ok_or_else(|| {
        anyhow!(
            "unsupported output format for {}, expected .svg, .png or .html",
            out_path.display()
        )
    })?;
    let size = canvas_size(layout)?;

    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(out_path, size).into_drawing_area();
            draw_heatmap(root, layout)?;
        }
        OutputFormat::Png => {
            let root = BitMapBackend::new(out_path, size).into_drawing_area();
            draw_heatmap(root, layout)?;
        }
        OutputFormat::Html => {
            std::fs::write(out_path, html::render_page(layout))
                .with_context(|| format!("write {}", out_path.display()))?;
        }
    }
    info!("wrote {} to {}", format.extension(), out_path.display());
    Ok(())
}

/// Render the heat map as an SVG document in memory.
pub fn render_svg_string(layout: &HeatMapLayout) -> Result<String> {
    let size = canvas_size(layout)?;
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        draw_heatmap(root, layout)?;
    }
    Ok(buf)
}

fn canvas_size(layout: &HeatMapLayout) -> Result<(u32, u32)> {
    let (w, h) = (layout.canvas.width, layout.canvas.height);
    if !(w.is_finite() && h.is_finite() && w >= 1.0 && h >= 1.0) {
        bail!("canvas has no drawable area ({w}×{h})");
    }
    Ok((w as u32, h as u32))
}

/// Helper that draws to any Plotters backend.
fn draw_heatmap<DB>(root: DrawingArea<DB, Shift>, layout: &HeatMapLayout) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let canvas = &layout.canvas;
    let (ox, oy) = canvas.plot_origin;
    let (plot_w, plot_h) = (layout.config.width, layout.config.height);

    let description_style: TextStyle = TextStyle::from((FontFamily::SansSerif, 16))
        .pos(Pos::new(HPos::Left, VPos::Center));
    root.draw(&Text::new(
        layout.description.as_str(),
        (px(ox, 0.0), px(canvas.description_y, 0.0)),
        description_style,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;

    for cell in &layout.cells {
        root.draw(&Rectangle::new(
            [
                (px(ox, cell.x), px(oy, cell.y)),
                (px(ox, cell.x + cell.width), px(oy, cell.y + cell.height)),
            ],
            to_rgb(cell.color).filled(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    let tick_style = |h: HPos, v: VPos| -> TextStyle<'static> {
        TextStyle::from((FontFamily::SansSerif, 12)).pos(Pos::new(h, v))
    };

    // y axis: month names left of the plot
    let axis_x = px(ox, 0.0);
    root.draw(&PathElement::new(
        vec![(axis_x, px(oy, 0.0)), (axis_x, px(oy, plot_h))],
        AXIS_COLOR.stroke_width(1),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    for tick in &layout.y_ticks {
        let y = px(oy, tick.offset);
        root.draw(&PathElement::new(
            vec![(axis_x - TICK_LEN_PX, y), (axis_x, y)],
            AXIS_COLOR.stroke_width(1),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        root.draw(&Text::new(
            tick.label.as_str(),
            (axis_x - TICK_LEN_PX - 3, y),
            tick_style(HPos::Right, VPos::Center),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    // x axis: years below the plot
    let axis_y = px(oy, plot_h);
    root.draw(&PathElement::new(
        vec![(px(ox, 0.0), axis_y), (px(ox, plot_w), axis_y)],
        AXIS_COLOR.stroke_width(1),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    for tick in &layout.x_ticks {
        let x = px(ox, tick.offset);
        root.draw(&PathElement::new(
            vec![(x, axis_y), (x, axis_y + TICK_LEN_PX)],
            AXIS_COLOR.stroke_width(1),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        root.draw(&Text::new(
            tick.label.as_str(),
            (x, axis_y + TICK_LEN_PX + 2),
            tick_style(HPos::Center, VPos::Top),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
    }

    draw_legend(&root, layout)?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

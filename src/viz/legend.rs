//! Legend bar: one filled segment per color bucket plus a tick axis at the thresholds.

use anyhow::Result;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::util::{AXIS_COLOR, TICK_LEN_PX, px, to_rgb};
use crate::layout::HeatMapLayout;

/// Draw the legend at `layout.canvas.legend_origin`.
///
/// Segments are laid out by the renderer; this only snaps them to pixels. Zero-width
/// segments (all temperatures equal) are skipped.
pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &HeatMapLayout,
) -> Result<()> {
    let (lx, ly) = layout.canvas.legend_origin;
    let bar_h = layout.config.legend_height;
    let font_px: u32 = 11;

    for seg in layout.legend_segments.iter().filter(|s| s.width > 0.0) {
        area.draw(&Rectangle::new(
            [
                (px(lx, seg.x), px(ly, 0.0)),
                (px(lx, seg.x + seg.width), px(ly, bar_h)),
            ],
            to_rgb(seg.color).filled(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    // Axis along the bottom edge of the bar.
    let axis_y = px(ly, bar_h);
    area.draw(&PathElement::new(
        vec![
            (px(lx, 0.0), axis_y),
            (px(lx, layout.config.legend_width), axis_y),
        ],
        AXIS_COLOR.stroke_width(1),
    ))
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let label_style: TextStyle =
        TextStyle::from((FontFamily::SansSerif, font_px)).pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &layout.legend_ticks {
        let x = px(lx, tick.offset);
        area.draw(&PathElement::new(
            vec![(x, axis_y), (x, axis_y + TICK_LEN_PX)],
            AXIS_COLOR.stroke_width(1),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        area.draw(&Text::new(
            tick.label.as_str(),
            (x, axis_y + TICK_LEN_PX + 2),
            label_style.clone(),
        ))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    Ok(())
}

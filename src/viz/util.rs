//! Utility functions for visualization: color conversion and pixel snapping.

use crate::palette::Rgb8;
use plotters::prelude::*;

/// Axis lines, tick marks and labels.
pub const AXIS_COLOR: RGBColor = RGBColor(51, 51, 51);

/// Length of a tick mark in pixels.
pub const TICK_LEN_PX: i32 = 6;

#[inline]
pub fn to_rgb(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

/// Canvas position → backend pixel. Rounds to the nearest pixel so adjacent cells
/// share edges instead of leaving hairline gaps.
#[inline]
pub fn px(origin: f64, offset: f64) -> i32 {
    (origin + offset).round() as i32
}

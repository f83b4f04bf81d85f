//! Hover tooltip as a two-state machine.
//!
//! `on_hover` and `on_unhover` are pure: they compute the next state from the event
//! alone, so whatever event loop a surface runs simply stores the returned value. A new
//! hover always replaces the previous tooltip.

use crate::config::HeatMapConfig;
use crate::format::{format_temperature, map_locale, month_name};
use crate::layout::HeatMapLayout;
use crate::models::MonthlyRecord;
use crate::scale::Scales;

/// Content and anchor of a visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub year: i32,
    /// Zero-based month index of the hovered cell.
    pub month_index: u32,
    pub temperature: f64,
    pub variance: f64,
    /// Anchor in plot coordinates (same space as the cells).
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// `"{year} - {Month}"`, absolute temperature, variance.
    pub lines: [String; 3],
}

impl Tooltip {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible(Tooltip),
}

impl TooltipState {
    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Visible(_))
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            TooltipState::Visible(t) => Some(t),
            TooltipState::Hidden => None,
        }
    }
}

/// Computes tooltip states from hover events, using the chart's own scales.
#[derive(Debug, Clone)]
pub struct TooltipController {
    scales: Scales,
    base_temperature: f64,
    offset_x: f64,
    offset_y: f64,
    decimal_sep: char,
}

impl TooltipController {
    pub fn new(scales: Scales, base_temperature: f64, config: &HeatMapConfig) -> Self {
        let (_, decimal_sep) = map_locale(&config.locale);
        Self {
            scales,
            base_temperature,
            offset_x: config.tooltip_offset_x,
            offset_y: config.tooltip_offset_y,
            decimal_sep,
        }
    }

    pub fn for_layout(layout: &HeatMapLayout) -> Self {
        Self::new(layout.scales.clone(), layout.base_temperature, &layout.config)
    }

    /// Pointer entered a cell.
    ///
    /// The month label names the same row the cell is drawn in: record month 12 is
    /// "December", matching the y-axis tick beside it.
    pub fn on_hover(&self, record: &MonthlyRecord) -> TooltipState {
        let month_index = record.month_index();
        let temperature = record.temperature(self.base_temperature);
        let month = month_name(month_index).unwrap_or("?");
        TooltipState::Visible(Tooltip {
            year: record.year,
            month_index,
            temperature,
            variance: record.variance,
            anchor_x: self.scales.year_x(record.year) + self.offset_x,
            anchor_y: self.scales.month_y(record.month) + self.offset_y,
            lines: [
                format!("{} - {}", record.year, month),
                format_temperature(temperature, self.decimal_sep),
                format_temperature(record.variance, self.decimal_sep),
            ],
        })
    }

    /// Pointer left the cell.
    pub fn on_unhover(&self) -> TooltipState {
        TooltipState::Hidden
    }
}

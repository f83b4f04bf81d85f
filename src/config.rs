//! Immutable layout configuration shared by the scale builder, the renderer and every
//! drawing surface.

use crate::error::{HeatMapError, Result};
use crate::palette::{DEFAULT_COLORS, Rgb8};

/// Space around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 70.0,
        }
    }
}

/// Heat map layout: plot size (excluding margins), legend size, palette and tooltip offsets.
///
/// The defaults reproduce the reference chart: an 800×400 frame minus margins gives a
/// 710×360 plot, a 300×20 legend and a five-color cold-to-hot palette.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatMapConfig {
    /// Plot width in pixels; `year → x` maps onto `[0, width]`.
    pub width: f64,
    /// Plot height in pixels; `month → y` maps onto `[0, height]`.
    pub height: f64,
    pub margin: Margin,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Ordered cold-to-hot colors, one per threshold bucket. At least two.
    pub colors: Vec<Rgb8>,
    /// Tooltip anchor offset from the hovered cell's top-left corner.
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
    /// Locale tag for temperature labels (decimal separator), e.g. "en" or "de".
    pub locale: String,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        let margin = Margin::default();
        Self {
            width: 800.0 - margin.left - margin.right,
            height: 400.0 - margin.top - margin.bottom,
            margin,
            legend_width: 300.0,
            legend_height: 20.0,
            colors: DEFAULT_COLORS.to_vec(),
            tooltip_offset_x: 80.0,
            tooltip_offset_y: -40.0,
            locale: "en".to_string(),
        }
    }
}

impl HeatMapConfig {
    pub fn with_plot_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_legend_width(mut self, legend_width: f64) -> Self {
        self.legend_width = legend_width;
        self
    }

    pub fn with_colors(mut self, colors: Vec<Rgb8>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Reject configurations the scales cannot be derived from.
    pub fn validate(&self) -> Result<()> {
        if self.colors.len() < 2 {
            return Err(HeatMapError::InvalidConfig(format!(
                "palette needs at least 2 colors, got {}",
                self.colors.len()
            )));
        }
        let dims = [
            ("width", self.width),
            ("height", self.height),
            ("legend width", self.legend_width),
            ("legend height", self.legend_height),
        ];
        for (name, v) in dims {
            if !(v.is_finite() && v > 0.0) {
                return Err(HeatMapError::InvalidConfig(format!(
                    "{name} must be a positive number, got {v}"
                )));
            }
        }
        let m = &self.margin;
        if [m.top, m.right, m.bottom, m.left]
            .iter()
            .any(|v| !(v.is_finite() && *v >= 0.0))
        {
            return Err(HeatMapError::InvalidConfig(
                "margins must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

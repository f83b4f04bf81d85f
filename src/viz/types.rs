//! Public types for the visualization module.

use std::path::Path;

/// Output surfaces a heat map can be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Vector image via plotters.
    Svg,
    /// Raster image via plotters-bitmap.
    Png,
    /// Self-contained page with inline SVG, cell data attributes and a hover tooltip.
    Html,
}

impl OutputFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "png" => Some(OutputFormat::Png),
            "html" | "htm" => Some(OutputFormat::Html),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Html => "html",
        }
    }
}

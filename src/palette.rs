//! Colors used by the threshold scale, independent of any drawing backend.

use crate::error::{HeatMapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HeatMapError::InvalidConfig(format!(
                "invalid color '{s}', expected #RRGGBB"
            )));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(HeatMapError::InvalidConfig(format!(
                "invalid color '{s}', expected #RRGGBB"
            ))),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Cold-to-hot palette of the reference chart.
/// Order: blue, pale yellow, orange, rust, dark red.
pub const DEFAULT_COLORS: [Rgb8; 5] = [
    Rgb8::new(0x62, 0xA1, 0xDB), // #62A1DB
    Rgb8::new(0xE7, 0xD8, 0x7D), // #E7D87D
    Rgb8::new(0xDD, 0x9F, 0x40), // #DD9F40
    Rgb8::new(0xB4, 0x45, 0x1F), // #B4451F
    Rgb8::new(0xB0, 0x11, 0x11), // #B01111
];

/// Parse a list of hex colors separated by comma or semicolon.
pub fn parse_palette(s: &str) -> Result<Vec<Rgb8>> {
    s.split([',', ';'])
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(Rgb8::from_hex)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_display() {
        let c = Rgb8::from_hex("#62a1db").unwrap();
        assert_eq!(c, DEFAULT_COLORS[0]);
        assert_eq!(c.to_string(), "#62A1DB");
    }

    #[test]
    fn rejects_short_or_non_hex() {
        assert!(Rgb8::from_hex("#FFF").is_err());
        assert!(Rgb8::from_hex("#GG0000").is_err());
        assert!(Rgb8::from_hex("#ÄÄ0000").is_err());
    }

    #[test]
    fn palette_list_accepts_mixed_separators() {
        let p = parse_palette("#000000, #FFFFFF;#FF0000,").unwrap();
        assert_eq!(
            p,
            vec![
                Rgb8::new(0, 0, 0),
                Rgb8::new(255, 255, 255),
                Rgb8::new(255, 0, 0)
            ]
        );
    }
}

//! Label formatting: month names, temperatures and locale-dependent separators.

use chrono::Month;
use num_format::{Locale, ToFormattedString};

/// Unit suffix appended to every temperature label.
pub const UNIT: &str = "℃";

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Full English month name for a zero-based index (0 = January).
pub fn month_name(index: u32) -> Option<&'static str> {
    let number = u8::try_from(index.checked_add(1)?).ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}

/// Fixed one-decimal rendering with the locale's decimal separator.
///
/// Halves round away from zero (`0.25` → `0.3`, `-0.25` → `-0.3`).
pub fn format_decimal(v: f64, decimal_sep: char) -> String {
    let rounded = (v * 10.0).round() / 10.0;
    let s = format!("{:.1}", rounded);
    if decimal_sep == '.' {
        s
    } else {
        s.replace('.', &decimal_sep.to_string())
    }
}

/// `9.9℃`-style label.
pub fn format_temperature(v: f64, decimal_sep: char) -> String {
    format!("{}{}", format_decimal(v, decimal_sep), UNIT)
}

/// Whole number with the locale's thousands separator (`3,153` vs `3.153`).
pub fn format_count(n: usize, locale_tag: &str) -> String {
    let (locale, _) = map_locale(locale_tag);
    n.to_formatted_string(locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(10), Some("November"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
        assert_eq!(month_name(u32::MAX), None);
    }

    #[test]
    fn temperatures_use_locale_separator() {
        assert_eq!(format_temperature(9.89, '.'), "9.9℃");
        assert_eq!(format_temperature(9.89, ','), "9,9℃");
        assert_eq!(format_temperature(-0.32, '.'), "-0.3℃");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_temperature(0.25, '.'), "0.3℃");
        assert_eq!(format_temperature(-0.25, '.'), "-0.3℃");
        assert_eq!(format_temperature(1.75, '.'), "1.8℃");
        assert_eq!(format_decimal(0.25, ','), "0,3");
    }

    #[test]
    fn counts_are_grouped() {
        assert_eq!(format_count(3153, "en"), "3,153");
        assert_eq!(format_count(3153, "de"), "3.153");
    }
}

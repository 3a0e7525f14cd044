//! Locale-aware decimal parsing and significant-figure rounding
//!
//! Numeric conventions are carried as an explicit [`DecimalFormat`] value and
//! threaded into the parsing routine, so no process-wide locale state is
//! touched and tables with different conventions could be processed in one
//! run without interference.

/// Decimal and grouping separators for one numeric convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFormat {
    /// Character separating the integer and fractional parts
    pub decimal_separator: char,
    /// Thousands separator, stripped before parsing
    pub group_separator: Option<char>,
}

impl DecimalFormat {
    /// Point-decimal convention: `1,234.5`
    pub fn point() -> Self {
        DecimalFormat {
            decimal_separator: '.',
            group_separator: Some(','),
        }
    }

    /// Comma-decimal convention: `1.234,5`
    pub fn comma() -> Self {
        DecimalFormat {
            decimal_separator: ',',
            group_separator: Some('.'),
        }
    }

    /// Map a locale identifier such as `de_DE.UTF-8` or `en-US` to a format
    ///
    /// Only the language code is consulted. Returns `None` for languages with
    /// no known mapping.
    pub fn for_locale(label: &str) -> Option<Self> {
        let language = label
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();

        match language.as_str() {
            "c" | "posix" | "en" | "ja" | "ko" | "zh" => Some(DecimalFormat::point()),
            "de" | "da" | "es" | "it" | "nl" | "pt" | "fi" | "sv" | "tr" => {
                Some(DecimalFormat::comma())
            }
            // French groups with a non-breaking space
            "fr" => Some(DecimalFormat {
                decimal_separator: ',',
                group_separator: Some('\u{a0}'),
            }),
            _ => None,
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        DecimalFormat::comma()
    }
}

/// Parse a decimal number under the given format
///
/// Grouping separators are stripped and the decimal separator is mapped to
/// `.` before parsing, so `1.234,56` under [`DecimalFormat::comma`] yields
/// 1234.56. Returns `None` if the cleaned string is not a valid number.
pub fn parse_decimal(raw: &str, format: &DecimalFormat) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if Some(c) == format.group_separator {
            continue;
        }
        if c == format.decimal_separator {
            cleaned.push('.');
        } else {
            cleaned.push(c);
        }
    }

    cleaned.parse::<f64>().ok()
}

/// Round `x` to `sig` significant figures
///
/// Zero rounds to exactly `0.0` regardless of `sig`. Ties round half away
/// from zero (the behavior of `f64::round`).
pub fn round_sig(x: f64, sig: u32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let decimals = sig as i32 - 1 - x.abs().log10().floor() as i32;
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (x * factor).round() / factor
    } else {
        // 0.01-style factors are inexact; divide by the positive power instead
        let factor = 10f64.powi(-decimals);
        (x / factor).round() * factor
    }
}

/// Format a rounded value for cell output
///
/// Exact zero renders as `0.0`; any other value uses the shortest decimal
/// representation that round-trips, so `1200.0` renders as `1200` and
/// `0.123` stays `0.123`.
pub fn format_value(x: f64) -> String {
    if x == 0.0 {
        return "0.0".to_string();
    }
    format!("{}", x)
}

//! Exact-grammar recognition of the three supported textual color forms.
//!
//! The grammars are deliberately strict: one space after each comma, no
//! alpha channel, no 3-digit hex shorthand. Values are only checked for
//! digit count, never for range, so `rgb(999, 999, 999)` parses and
//! propagates unclamped.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::Component;
use crate::{Hsl, Rgb};

/// The `rgb(R, G, B)` functional syntax with 1-3 digit channels.
static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\((\d{1,3}), (\d{1,3}), (\d{1,3})\)$").expect("rgb grammar")
});

/// The `hsl(H, S%, L%)` functional syntax with 1-3 digit values.
static HSL_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\((\d{1,3}), (\d{1,3})%, (\d{1,3})%\)$").expect("hsl grammar")
});

/// The `#rrggbb` notation with exactly six hex digits, either case.
static HEX_NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#[0-9a-f]{6}$").expect("hex grammar"));

/// Whether the string is a canonical `rgb(R, G, B)` value, the only form
/// accepted for storage.
pub fn is_valid_rgb(input: &str) -> bool {
    RGB_FUNCTION.is_match(input)
}

pub(crate) fn parse_rgb(input: &str) -> Option<Rgb> {
    let caps = RGB_FUNCTION.captures(input)?;
    Some(Rgb::new(
        decimal(&caps[1]),
        decimal(&caps[2]),
        decimal(&caps[3]),
    ))
}

pub(crate) fn parse_hsl(input: &str) -> Option<Hsl> {
    let caps = HSL_FUNCTION.captures(input)?;
    Some(Hsl::new(
        decimal(&caps[1]),
        decimal(&caps[2]),
        decimal(&caps[3]),
    ))
}

pub(crate) fn parse_hex(input: &str) -> Option<Rgb> {
    if !HEX_NOTATION.is_match(input) {
        return None;
    }

    let digits = input.as_bytes();
    Some(Rgb::new(
        hex_pair(&digits[1..3]),
        hex_pair(&digits[3..5]),
        hex_pair(&digits[5..7]),
    ))
}

/// Decode a 1-3 digit decimal capture. The grammars guarantee digits only.
fn decimal(digits: &str) -> Component {
    digits
        .bytes()
        .fold(0u32, |value, b| value * 10 + u32::from(b - b'0')) as Component
}

/// Decode two hex digits, high nibble first.
fn hex_pair(digits: &[u8]) -> Component {
    digits.iter().fold(0u32, |value, &b| {
        let nibble = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => 0,
        };
        (value << 4) | u32::from(nibble)
    }) as Component
}

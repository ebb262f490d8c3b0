// SPDX-License-Identifier: MPL-2.0
//! Hex color parsing and color interpolation.
//!
//! Colors travel through configuration files as CSS-style hex strings
//! (`#fff`, `#f1bb7b`, `#f1bb7b80`) and are interpolated channel by channel
//! in sRGB space while a switch animates.

use crate::error::ColorError;
use iced::Color;

/// Parses a CSS-style hex color.
///
/// Accepted forms are `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa`.
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use iced_switch_button::domain::color;
///
/// let white = color::parse_hex("#fff").unwrap();
/// assert_eq!(white, iced::Color::WHITE);
/// ```
pub fn parse_hex(input: &str) -> Result<Color, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }
    let digits = trimmed.strip_prefix('#').ok_or(ColorError::MissingHash)?;

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit(bad));
    }

    // Every char is now an ASCII hex digit, so byte indexing is safe.
    let nibble = |i: usize| -> u8 {
        let c = digits.as_bytes()[i] as char;
        c.to_digit(16).map_or(0, |d| d as u8)
    };
    let byte = |i: usize| -> u8 { nibble(i) * 16 + nibble(i + 1) };
    let short = |i: usize| -> u8 { nibble(i) * 17 };

    let (r, g, b, a) = match digits.len() {
        3 => (short(0), short(1), short(2), 255),
        4 => (short(0), short(1), short(2), short(3)),
        6 => (byte(0), byte(2), byte(4), 255),
        8 => (byte(0), byte(2), byte(4), byte(6)),
        len => return Err(ColorError::InvalidLength(len)),
    };

    Ok(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Linearly interpolates between two colors.
///
/// `t` is clamped to [0, 1]: `0.0` yields `from`, `1.0` yields `to`.
#[must_use]
pub fn lerp(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: f32, b: f32| a * (1.0 - t) + b * t;
    Color {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: mix(from.a, to.a),
    }
}

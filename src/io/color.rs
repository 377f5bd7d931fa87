//! Background color parsing
//!
//! Accepts the notations a color picker or stylesheet would hand over:
//! named colors, hexadecimal (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and
//! functional `rgb(r, g, b)` / `rgba(r, g, b, a)` with alpha in `0..=1`.

use crate::io::error::{PatternError, invalid_color};
use image::Rgba;
use std::fmt;
use std::str::FromStr;

const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("red", [255, 0, 0, 255]),
    ("lime", [0, 255, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("aqua", [0, 255, 255, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
    ("silver", [192, 192, 192, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("olive", [128, 128, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("purple", [128, 0, 128, 255]),
    ("teal", [0, 128, 128, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("brown", [165, 42, 42, 255]),
    ("transparent", [0, 0, 0, 0]),
];

/// An 8-bit straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Rgba<u8>);

impl Color {
    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgba([r, g, b, 255]))
    }

    /// Channel values as an image pixel
    pub const fn rgba(self) -> Rgba<u8> {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 255, 255)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0.0;
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn hex_digit(input: &str, digit: char) -> Result<u8, PatternError> {
    digit
        .to_digit(16)
        .map(|value| value as u8)
        .ok_or_else(|| invalid_color(input, "non-hexadecimal digit"))
}

fn parse_hex(input: &str, digits: &str) -> Result<Color, PatternError> {
    let values = digits
        .chars()
        .map(|digit| hex_digit(input, digit))
        .collect::<Result<Vec<_>, _>>()?;

    let channels: Vec<u8> = match values.len() {
        // Short forms repeat each digit: #abc == #aabbcc
        3 | 4 => values.iter().map(|v| v * 17).collect(),
        6 | 8 => values
            .chunks_exact(2)
            .map(|pair| match pair {
                [high, low] => high * 16 + low,
                _ => 0,
            })
            .collect(),
        _ => return Err(invalid_color(input, "expected 3, 4, 6 or 8 hex digits")),
    };

    match channels.as_slice() {
        [r, g, b] => Ok(Color(Rgba([*r, *g, *b, 255]))),
        [r, g, b, a] => Ok(Color(Rgba([*r, *g, *b, *a]))),
        _ => Err(invalid_color(input, "expected 3, 4, 6 or 8 hex digits")),
    }
}

fn parse_channel(input: &str, text: &str) -> Result<u8, PatternError> {
    text.trim()
        .parse::<u8>()
        .map_err(|_parse_error| invalid_color(input, "color channels must be integers 0-255"))
}

fn parse_alpha(input: &str, text: &str) -> Result<u8, PatternError> {
    let alpha = text
        .trim()
        .parse::<f64>()
        .map_err(|_parse_error| invalid_color(input, "alpha must be a number"))?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(invalid_color(input, "alpha must be between 0 and 1"));
    }
    Ok((alpha * 255.0).round() as u8)
}

fn parse_functional(input: &str, body: &str, with_alpha: bool) -> Result<Color, PatternError> {
    let parts: Vec<&str> = body.split(',').collect();
    match (parts.as_slice(), with_alpha) {
        ([r, g, b], false) => Ok(Color(Rgba([
            parse_channel(input, r)?,
            parse_channel(input, g)?,
            parse_channel(input, b)?,
            255,
        ]))),
        ([r, g, b, a], true) => Ok(Color(Rgba([
            parse_channel(input, r)?,
            parse_channel(input, g)?,
            parse_channel(input, b)?,
            parse_alpha(input, a)?,
        ]))),
        _ => Err(invalid_color(input, "wrong number of color components")),
    }
}

impl FromStr for Color {
    type Err = PatternError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(invalid_color(input, "empty color"));
        }

        if let Some(digits) = normalized.strip_prefix('#') {
            return parse_hex(input, digits);
        }

        if let Some(body) = normalized
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(input, body, true);
        }

        if let Some(body) = normalized
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(input, body, false);
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, channels)| Self(Rgba(*channels)))
            .ok_or_else(|| invalid_color(input, "unknown color name"))
    }
}

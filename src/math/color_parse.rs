use csscolorparser::Color;

use super::hex::parse_hex_rgb;
use super::named::NamedColors;
use crate::types::RgbColor;

/// Parse a color in one of the strict forms the contrast engine accepts:
/// `#RGB` / `#RRGGBB` (hash optional), `rgb(r, g, b)` / `rgba(r, g, b, a)`,
/// or one of the standard named colors.
///
/// Returns None for anything else. Alpha is dropped.
pub fn parse_color(text: &str) -> Option<RgbColor> {
    parse_color_with(text, NamedColors::standard())
}

/// Same as [`parse_color`], resolving names against `named`.
pub fn parse_color_with(text: &str, named: &NamedColors) -> Option<RgbColor> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(color) = named.lookup(trimmed) {
        return Some(color);
    }

    if let Some((r, g, b)) = parse_hex_rgb(trimmed) {
        return Some(RgbColor::new(r, g, b));
    }

    parse_functional(trimmed)
}

/// `rgb(...)` / `rgba(...)` in legacy comma form (`r, g, b[, a]`) or space form
/// (`r g b[ / a]`). Exactly three channels, clamped to 0-255; an alpha
/// component must be a number or percentage and is then dropped.
fn parse_functional(text: &str) -> Option<RgbColor> {
    let lower = text.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba")
        .or_else(|| lower.strip_prefix("rgb"))?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;

    let (channels, alpha): (Vec<&str>, Option<&str>) = if args.contains(',') {
        let mut tokens: Vec<&str> = args.split(',').map(str::trim).collect();
        if tokens.iter().any(|t| t.is_empty()) || !(3..=4).contains(&tokens.len()) {
            return None;
        }
        let alpha = tokens.get(3).copied();
        tokens.truncate(3);
        (tokens, alpha)
    } else {
        let (channels, alpha) = match args.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (args, None),
        };
        (channels.split_whitespace().collect(), alpha)
    };

    if channels.len() != 3 || alpha.is_some_and(|a| !is_alpha(a)) {
        return None;
    }

    Some(RgbColor::new(
        parse_channel(channels[0])?,
        parse_channel(channels[1])?,
        parse_channel(channels[2])?,
    ))
}

fn is_alpha(token: &str) -> bool {
    let number = token.strip_suffix('%').unwrap_or(token);
    matches!(number.parse::<f64>(), Ok(v) if v.is_finite())
}

fn parse_channel(token: &str) -> Option<u8> {
    let value: f64 = token.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Parse any CSS Color 4 value (hsl, hwb, lab, oklch, the full named palette...).
/// Returns None for: transparent, inherit, currentColor, initial, unset, unrecognized.
///
/// Not used by the strict API; callers opt in explicitly.
pub fn parse_css_color(value: &str) -> Option<RgbColor> {
    let trimmed = value.trim();

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => return None,
        _ => {}
    }

    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, _a] = color.to_rgba8();
            Some(RgbColor::new(r, g, b))
        }
        Err(_) => None,
    }
}

/// Anything a contrast calculation can take as one side of the pair.
pub trait ColorSource {
    fn resolve(&self) -> Option<RgbColor>;
}

impl ColorSource for RgbColor {
    fn resolve(&self) -> Option<RgbColor> {
        Some(*self)
    }
}

impl ColorSource for str {
    fn resolve(&self) -> Option<RgbColor> {
        parse_color(self)
    }
}

impl ColorSource for String {
    fn resolve(&self) -> Option<RgbColor> {
        parse_color(self)
    }
}

impl<T: ColorSource + ?Sized> ColorSource for &T {
    fn resolve(&self) -> Option<RgbColor> {
        (**self).resolve()
    }
}

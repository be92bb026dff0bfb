//! Color parsing and format conversion.
//!
//! Token values are opaque CSS text; whenever the editor needs to show a
//! color in a particular notation (picker fields, code export) it goes
//! through [`convert`]. Parsing accepts hex, `rgb()`/`rgba()`,
//! `hsl()`/`hsla()` and `oklch()`. Conversion never throws: input the
//! engine cannot parse is logged and returned unchanged so rendering
//! degrades instead of halting.

mod space;

use thiserror::Error;

/// A parsed color: sRGB components plus alpha, all 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Color {
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Whether the alpha term is rendered. Fully opaque colors never carry
    /// an explicit alpha suffix in any output format.
    pub fn has_alpha(&self) -> bool {
        self.alpha < 1.0
    }
}

/// Output notations supported by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Oklch,
}

impl ColorFormat {
    pub const ALL: &[ColorFormat] = &[Self::Hex, Self::Rgb, Self::Hsl, Self::Oklch];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }
}

impl std::str::FromStr for ColorFormat {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            "oklch" => Ok(Self::Oklch),
            other => Err(ColorParseError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ColorParseError {
    #[error("unrecognized color syntax: {0:?}")]
    Unrecognized(String),
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("invalid component {component:?} in {input:?}")]
    InvalidComponent { input: String, component: String },
    #[error("unknown color format: {0:?}")]
    UnknownFormat(String),
}

/// Parse a CSS color value.
pub fn parse(text: &str) -> Result<Color, ColorParseError> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(text, hex);
    }

    let lower = text.to_ascii_lowercase();
    if let Some(inner) = functional_body(&lower, &["rgba", "rgb"]) {
        return parse_rgb(text, inner);
    }
    if let Some(inner) = functional_body(&lower, &["hsla", "hsl"]) {
        return parse_hsl(text, inner);
    }
    if let Some(inner) = functional_body(&lower, &["oklch"]) {
        return parse_oklch(text, inner);
    }

    Err(ColorParseError::Unrecognized(text.to_string()))
}

/// Render `color` in the requested notation.
///
/// Numeric components carry at most 4 fractional digits with trailing zeros
/// trimmed; exact zero renders as `0`. The alpha term appears only when
/// alpha < 1.
pub fn format(color: Color, format: ColorFormat) -> String {
    match format {
        ColorFormat::Hex => {
            let r = channel_byte(color.r);
            let g = channel_byte(color.g);
            let b = channel_byte(color.b);
            if color.has_alpha() {
                format!("#{r:02x}{g:02x}{b:02x}{:02x}", channel_byte(color.alpha))
            } else {
                format!("#{r:02x}{g:02x}{b:02x}")
            }
        }
        ColorFormat::Rgb => {
            let r = channel_byte(color.r);
            let g = channel_byte(color.g);
            let b = channel_byte(color.b);
            if color.has_alpha() {
                format!("rgba({r}, {g}, {b}, {})", fmt_num(color.alpha))
            } else {
                format!("rgb({r}, {g}, {b})")
            }
        }
        ColorFormat::Hsl => {
            let (h, s, l) = space::rgb_to_hsl(color.r, color.g, color.b);
            let base = format!(
                "hsl({} {}% {}%",
                fmt_num(h),
                fmt_num(s * 100.0),
                fmt_num(l * 100.0)
            );
            if color.has_alpha() {
                format!("{base} / {})", fmt_num(color.alpha))
            } else {
                format!("{base})")
            }
        }
        ColorFormat::Oklch => {
            let (l, c, h) = space::srgb_to_oklch(color.r, color.g, color.b);
            let base = format!("oklch({} {} {}", fmt_num(l), fmt_num(c), fmt_num(h));
            if color.has_alpha() {
                format!("{base} / {})", fmt_num(color.alpha))
            } else {
                format!("{base})")
            }
        }
    }
}

/// Re-render a token value in the requested notation.
///
/// Soft failure: unparsable input is reported via `tracing::warn!` and
/// returned unchanged so downstream rendering degrades gracefully.
pub fn convert(value: &str, format: ColorFormat) -> String {
    match parse(value) {
        Ok(color) => self::format(color, format),
        Err(err) => {
            tracing::warn!(value, %err, "color conversion fell back to raw value");
            value.to_string()
        }
    }
}

// --- numeric formatting ---

/// Up to 4 fractional digits, trailing zeros trimmed, exact zero as `0`.
fn fmt_num(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let rendered = format!("{value:.4}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn channel_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// --- parsing helpers ---

/// Strip `name(` … `)` for the first matching function name.
fn functional_body<'a>(lower: &'a str, names: &[&str]) -> Option<&'a str> {
    for name in names {
        if let Some(rest) = lower.strip_prefix(name)
            && let Some(inner) = rest.trim_start().strip_prefix('(')
        {
            return inner.trim_end().strip_suffix(')').map(str::trim);
        }
    }
    None
}

/// Split a functional body into components and an optional alpha term.
/// Accepts both modern space syntax with `/ alpha` and legacy commas with
/// alpha as the fourth component.
fn split_components(inner: &str) -> (Vec<&str>, Option<&str>) {
    let (body, mut alpha) = match inner.split_once('/') {
        Some((body, a)) => (body, Some(a.trim())),
        None => (inner, None),
    };

    let mut parts: Vec<&str> = if body.contains(',') {
        body.split(',').map(str::trim).filter(|p| !p.is_empty()).collect()
    } else {
        body.split_whitespace().collect()
    };

    if alpha.is_none() && parts.len() == 4 {
        alpha = parts.pop();
    }

    (parts, alpha)
}

fn component_error(input: &str, component: &str) -> ColorParseError {
    ColorParseError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    }
}

fn parse_alpha(input: &str, raw: Option<&str>) -> Result<f64, ColorParseError> {
    let Some(raw) = raw else {
        return Ok(1.0);
    };
    let value = if let Some(pct) = raw.strip_suffix('%') {
        pct.trim()
            .parse::<f64>()
            .map_err(|_| component_error(input, raw))?
            / 100.0
    } else {
        raw.parse::<f64>()
            .map_err(|_| component_error(input, raw))?
    };
    Ok(value.clamp(0.0, 1.0))
}

/// An rgb channel: 0–255 integer/float, or a percentage.
fn parse_rgb_channel(input: &str, raw: &str) -> Result<f64, ColorParseError> {
    let value = if let Some(pct) = raw.strip_suffix('%') {
        pct.trim()
            .parse::<f64>()
            .map_err(|_| component_error(input, raw))?
            / 100.0
    } else {
        raw.parse::<f64>()
            .map_err(|_| component_error(input, raw))?
            / 255.0
    };
    Ok(value.clamp(0.0, 1.0))
}

/// A hue angle in degrees, optional `deg` suffix, normalized to 0..360.
fn parse_hue(input: &str, raw: &str) -> Result<f64, ColorParseError> {
    let raw = raw.strip_suffix("deg").unwrap_or(raw).trim();
    let value = raw
        .parse::<f64>()
        .map_err(|_| component_error(input, raw))?;
    Ok(value.rem_euclid(360.0))
}

/// A percentage component; a bare number is treated as a percentage, which
/// is how these values appear in channel-only token text.
fn parse_percent(input: &str, raw: &str) -> Result<f64, ColorParseError> {
    let raw = raw.strip_suffix('%').unwrap_or(raw).trim();
    let value = raw
        .parse::<f64>()
        .map_err(|_| component_error(input, raw))?;
    Ok((value / 100.0).clamp(0.0, 1.0))
}

fn parse_hex(input: &str, digits: &str) -> Result<Color, ColorParseError> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(input.to_string()));
    }
    let nibble = |i: usize| -> f64 {
        // Valid per the check above.
        let d = u8::from_str_radix(&digits[i..=i], 16).unwrap_or(0);
        f64::from(d * 16 + d) / 255.0
    };
    let byte = |i: usize| -> f64 {
        let d = u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
        f64::from(d) / 255.0
    };

    match digits.len() {
        3 => Ok(Color::opaque(nibble(0), nibble(1), nibble(2))),
        4 => Ok(Color::rgba(nibble(0), nibble(1), nibble(2), nibble(3))),
        6 => Ok(Color::opaque(byte(0), byte(2), byte(4))),
        8 => Ok(Color::rgba(byte(0), byte(2), byte(4), byte(6))),
        _ => Err(ColorParseError::InvalidHex(input.to_string())),
    }
}

fn parse_rgb(input: &str, inner: &str) -> Result<Color, ColorParseError> {
    let (parts, alpha) = split_components(inner);
    if parts.len() != 3 {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    }
    Ok(Color::rgba(
        parse_rgb_channel(input, parts[0])?,
        parse_rgb_channel(input, parts[1])?,
        parse_rgb_channel(input, parts[2])?,
        parse_alpha(input, alpha)?,
    ))
}

fn parse_hsl(input: &str, inner: &str) -> Result<Color, ColorParseError> {
    let (parts, alpha) = split_components(inner);
    if parts.len() != 3 {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    }
    let h = parse_hue(input, parts[0])?;
    let s = parse_percent(input, parts[1])?;
    let l = parse_percent(input, parts[2])?;
    let (r, g, b) = space::hsl_to_rgb(h, s, l);
    Ok(Color::rgba(r, g, b, parse_alpha(input, alpha)?))
}

fn parse_oklch(input: &str, inner: &str) -> Result<Color, ColorParseError> {
    let (parts, alpha) = split_components(inner);
    if parts.len() != 3 {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    }
    let l = if parts[0].ends_with('%') {
        parse_percent(input, parts[0])?
    } else {
        parts[0]
            .parse::<f64>()
            .map_err(|_| component_error(input, parts[0]))?
            .clamp(0.0, 1.0)
    };
    let c = parts[1]
        .parse::<f64>()
        .map_err(|_| component_error(input, parts[1]))?
        .max(0.0);
    let h = parse_hue(input, parts[2])?;
    let (r, g, b) = space::oklch_to_srgb(l, c, h);
    Ok(Color::rgba(r, g, b, parse_alpha(input, alpha)?))
}

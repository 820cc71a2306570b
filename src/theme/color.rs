use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Per-unit factor of [`Rgb::darker`]; [`Rgb::brighter`] uses its inverse.
pub const DARKER: f64 = 0.7;

/// sRGB color with unclamped `0..=255` float channels.
///
/// Channels stay fractional through shading math and are only rounded and clamped when printed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Convert hue (degrees), saturation and lightness (both `0..=1`).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::new(l * 255.0, l * 255.0, l * 255.0);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                return p + (q - p) * 6.0 * t;
            }
            if t < 1.0 / 2.0 {
                return q;
            }
            if t < 2.0 / 3.0 {
                return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
            }
            p
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Self::new(
            hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_rgb(p, q, h) * 255.0,
            hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
        )
    }

    /// Scale every channel by `0.7^k`.
    pub fn darker(self, k: f64) -> Self {
        self.scaled(DARKER.powf(k))
    }

    /// Scale every channel by `(1/0.7)^k`.
    pub fn brighter(self, k: f64) -> Self {
        self.scaled((1.0 / DARKER).powf(k))
    }

    fn scaled(self, f: f64) -> Self {
        Self::new(self.r * f, self.g * f, self.b * f)
    }

    /// Linear blend towards `other`.
    pub fn mix(self, other: Rgb, t: f64) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Perceived brightness in `0..=255`.
    pub fn luminance(self) -> f64 {
        (self.r * 299.0 + self.g * 587.0 + self.b * 114.0) / 1000.0
    }

    /// `true` for backgrounds that want darker accents.
    pub fn is_light(self) -> bool {
        self.luminance() > 128.0
    }

    /// Rounded, clamped 8-bit channels.
    pub fn to_rgb8(self) -> [u8; 3] {
        fn to_u8(x: f64) -> u8 {
            x.round().clamp(0.0, 255.0) as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgb({r}, {g}, {b})")
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `hsl(h, s%, l%)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = function_args(s, "rgb") {
            let [r, g, b] = parse_triple(args, s)?;
            return Ok(Self::new(r, g, b));
        }
        if let Some(args) = function_args(s, "hsl") {
            let [h, sat, l] = parse_triple(args, s)?;
            return Ok(Self::from_hsl(h, sat / 100.0, l / 100.0));
        }
        Err(format!(
            "unsupported color \"{s}\" (expected #rgb, #rrggbb, rgb() or hsl())"
        ))
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_triple(args: &str, whole: &str) -> Result<[f64; 3], String> {
    let parts: Vec<f64> = args
        .split(',')
        .map(|p| p.trim().trim_end_matches('%').parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid color components in \"{whole}\""))?;
    match parts.as_slice() {
        &[a, b, c] => Ok([a, b, c]),
        _ => Err(format!("expected three components in \"{whole}\"")),
    }
}

fn parse_hex(s: &str) -> Result<Rgb, String> {
    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err(format!("invalid hex color \"#{s}\""));
    }
    let (r, g, b) = match s.len() {
        3 => {
            let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            (nib(0)?, nib(1)?, nib(2)?)
        }
        6 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        ),
        _ => return Err("hex color must be #RGB or #RRGGBB (case-insensitive)".to_owned()),
    };
    Ok(Rgb::new(f64::from(r), f64::from(g), f64::from(b)))
}

/// Theme color as written in settings files. Keeps the author's spelling for round trips.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct ColorDef {
    source: String,
    rgb: Rgb,
}

impl ColorDef {
    /// Parse a color string.
    pub fn parse(s: &str) -> Result<Self, String> {
        Ok(Self {
            source: s.trim().to_owned(),
            rgb: s.parse()?,
        })
    }

    /// Color from a packed `0xRRGGBB` value, spelled `#rrggbb`.
    pub fn from_hex(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self {
            source: format!("#{:06x}", value & 0x00ff_ffff),
            rgb: Rgb::new(f64::from(r), f64::from(g), f64::from(b)),
        }
    }

    /// Parsed channels.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Spelling as written in the settings file.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl From<ColorDef> for String {
    fn from(value: ColorDef) -> Self {
        value.source
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A percentage such as `"50%"`. Plain numbers are read as percent values too (`50` is 50%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Percent(f64);

impl Percent {
    /// Build from a percent value (`0..=100`).
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Fraction in `0..=1`.
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl From<Percent> for String {
    fn from(value: Percent) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self(v)),
            Repr::Str(s) => s
                .trim()
                .strip_suffix('%')
                .and_then(|v| v.trim().parse::<f64>().ok())
                .map(Self)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid percentage \"{s}\""))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/color.rs"]
mod tests;

//! Color parsing and conversion between representations.
//!
//! [`Rgb`] (f64 channels in 0..=255) is the hub: every other space converts
//! to and from it. Channels are clamped after every transform; rounding to
//! integer channels happens only when formatting output, so chained
//! conversions do not compound error.

pub mod blindness;
pub mod contrast;
pub mod spaces;

use anyhow::{Result, anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// An sRGB color with unrounded channels in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Rgb {
        Rgb { r, g, b }.clamped()
    }

    /// Clamp all channels into 0..=255.
    pub fn clamped(self) -> Rgb {
        Rgb {
            r: self.r.clamp(0.0, 255.0),
            g: self.g.clamp(0.0, 255.0),
            b: self.b.clamp(0.0, 255.0),
        }
    }

    /// Channels normalized to 0..=1.
    pub fn normalized(self) -> (f64, f64, f64) {
        (self.r / 255.0, self.g / 255.0, self.b / 255.0)
    }

    /// Integer channels, rounded. This is the only place rounding happens.
    pub fn rounded(self) -> (u8, u8, u8) {
        let c = self.clamped();
        (
            c.r.round() as u8,
            c.g.round() as u8,
            c.b.round() as u8,
        )
    }

    /// Lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.rounded();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_css(self) -> String {
        let (r, g, b) = self.rounded();
        format!("rgb({}, {}, {})", r, g, b)
    }
}

static RGB_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,[^)]*)?\)$").unwrap()
});

static HSL_FN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsla?\(\s*(-?[\d.]+)\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%\s*(?:,[^)]*)?\)$").unwrap()
});

/// Parse a `#rgb` / `#rrggbb` hex string (leading `#` optional).
pub fn parse_hex(s: &str) -> Result<Rgb> {
    let hex = s.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => bail!("Invalid hex color: {}", s),
    };
    let byte = |i: usize| -> Result<f64> {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(f64::from)
            .map_err(|_| anyhow!("Invalid hex color: {}", s))
    };
    Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
}

/// Parse any supported color input: hex, `rgb(r, g, b)`, or `hsl(h, s%, l%)`.
pub fn parse(s: &str) -> Result<Rgb> {
    let s = s.trim();
    if let Some(caps) = RGB_FN.captures(&s.to_ascii_lowercase()) {
        let ch = |i: usize| -> Result<f64> {
            let v: f64 = caps[i].parse()?;
            if v > 255.0 {
                bail!("RGB channel out of range in {}", s);
            }
            Ok(v)
        };
        return Ok(Rgb::new(ch(1)?, ch(2)?, ch(3)?));
    }
    if let Some(caps) = HSL_FN.captures(&s.to_ascii_lowercase()) {
        let h: f64 = caps[1].parse()?;
        let sat: f64 = caps[2].parse::<f64>()? / 100.0;
        let l: f64 = caps[3].parse::<f64>()? / 100.0;
        return Ok(spaces::hsl_to_rgb(spaces::Hsl {
            h,
            s: sat.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }));
    }
    parse_hex(s)
}

/// Every representation of one color plus accessibility metrics, as the
/// color tool reports it.
#[derive(Debug, Clone, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: spaces::Hsl,
    pub hsv: spaces::Hsv,
    pub cmyk: spaces::Cmyk,
    pub lab: spaces::Lab,
    pub lch: spaces::Lch,
    pub oklab: spaces::Oklab,
    pub oklch: spaces::Oklch,
    pub accessibility: contrast::Accessibility,
}

impl ColorReport {
    pub fn for_color(rgb: Rgb) -> ColorReport {
        let lab = spaces::rgb_to_lab(rgb);
        let oklab = spaces::rgb_to_oklab(rgb);
        ColorReport {
            hex: rgb.to_hex(),
            rgb,
            hsl: spaces::rgb_to_hsl(rgb),
            hsv: spaces::rgb_to_hsv(rgb),
            cmyk: spaces::rgb_to_cmyk(rgb),
            lab,
            lch: spaces::lab_to_lch(lab),
            oklab,
            oklch: spaces::oklab_to_oklch(oklab),
            accessibility: contrast::Accessibility::of(rgb),
        }
    }
}

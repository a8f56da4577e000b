//! WCAG contrast metrics.

use serde::Serialize;

use super::Rgb;
use super::spaces::srgb_to_linear;

const AA_THRESHOLD: f64 = 4.5;
const AAA_THRESHOLD: f64 = 7.0;

/// WCAG relative luminance of a color, 0..=1.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.normalized();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Contrast ratio between two colors, 1..=21. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail at one WCAG level for a given ratio.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WcagCheck {
    pub ratio: f64,
    pub aa: bool,
    pub aaa: bool,
}

impl WcagCheck {
    pub fn for_ratio(ratio: f64) -> WcagCheck {
        WcagCheck {
            ratio,
            aa: ratio >= AA_THRESHOLD,
            aaa: ratio >= AAA_THRESHOLD,
        }
    }
}

/// Accessibility summary of a background color: contrast against black and
/// white text, with AA/AAA verdicts for each.
#[derive(Debug, Clone, Serialize)]
pub struct Accessibility {
    pub luminance: f64,
    pub vs_black: WcagCheck,
    pub vs_white: WcagCheck,
    /// AA passes with at least one of black or white text.
    pub readable: bool,
}

impl Accessibility {
    pub fn of(rgb: Rgb) -> Accessibility {
        let black = Rgb::new(0.0, 0.0, 0.0);
        let white = Rgb::new(255.0, 255.0, 255.0);
        let vs_black = WcagCheck::for_ratio(contrast_ratio(rgb, black));
        let vs_white = WcagCheck::for_ratio(contrast_ratio(rgb, white));
        Accessibility {
            luminance: relative_luminance(rgb),
            readable: vs_black.aa || vs_white.aa,
            vs_black,
            vs_white,
        }
    }
}

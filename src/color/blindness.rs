//! Color-vision-deficiency simulation.
//!
//! Each deficiency is a fixed 3×3 matrix applied to (r, g, b) normalized to
//! 0..=1, then clamped and rescaled to 0..=255. The map is per-pixel and
//! order independent, so buffers can be processed in place.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl Deficiency {
    pub const ALL: [Deficiency; 5] = [
        Deficiency::Normal,
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
        Deficiency::Achromatopsia,
    ];

    pub fn parse(s: &str) -> Result<Deficiency> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Deficiency::Normal),
            "protanopia" | "protan" => Ok(Deficiency::Protanopia),
            "deuteranopia" | "deutan" => Ok(Deficiency::Deuteranopia),
            "tritanopia" | "tritan" => Ok(Deficiency::Tritanopia),
            "achromatopsia" | "mono" => Ok(Deficiency::Achromatopsia),
            other => Err(anyhow!("Unknown deficiency type: {}", other)),
        }
    }

    /// Row-major simulation matrix. `Normal` is the exact identity, which
    /// makes `simulate(color, Normal) == color` hold bit for bit.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        match self {
            Deficiency::Normal => [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            Deficiency::Protanopia => [
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ],
            Deficiency::Deuteranopia => {
                [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]]
            }
            Deficiency::Tritanopia => [
                [0.95, 0.05, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ],
            Deficiency::Achromatopsia => [
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ],
        }
    }
}

impl std::fmt::Display for Deficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Deficiency::Normal => "normal",
            Deficiency::Protanopia => "protanopia",
            Deficiency::Deuteranopia => "deuteranopia",
            Deficiency::Tritanopia => "tritanopia",
            Deficiency::Achromatopsia => "achromatopsia",
        };
        f.write_str(s)
    }
}

/// Simulate how one color appears under the given deficiency.
pub fn simulate(rgb: Rgb, kind: Deficiency) -> Rgb {
    if kind == Deficiency::Normal {
        return rgb;
    }
    let m = kind.matrix();
    let (r, g, b) = rgb.normalized();
    let apply = |row: [f64; 3]| (row[0] * r + row[1] * g + row[2] * b).clamp(0.0, 1.0) * 255.0;
    Rgb::new(apply(m[0]), apply(m[1]), apply(m[2]))
}

/// Simulate over an RGBA pixel buffer in place. Alpha bytes are untouched.
/// The buffer length must be a multiple of 4.
pub fn simulate_buffer(pixels: &mut [u8], kind: Deficiency) -> Result<()> {
    if pixels.len() % 4 != 0 {
        return Err(anyhow!(
            "RGBA buffer length {} is not a multiple of 4",
            pixels.len()
        ));
    }
    if kind == Deficiency::Normal {
        return Ok(());
    }
    for px in pixels.chunks_exact_mut(4) {
        let rgb = Rgb::new(f64::from(px[0]), f64::from(px[1]), f64::from(px[2]));
        let (r, g, b) = simulate(rgb, kind).rounded();
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
    Ok(())
}

//! Conversions between sRGB and the other supported color spaces.
//!
//! Normalized channels are clamped to 0..=1 after each transform. Hue is
//! in degrees, normalized to [0, 360). Lab/LCH use the D65 white point;
//! OKLab/OKLCH follow Björn Ottosson's published matrices.

use serde::Serialize;

use super::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub h: f64,
    /// Saturation, 0..=1.
    pub s: f64,
    /// Lightness, 0..=1.
    pub l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

// ── HSL / HSV ───────────────────────────────────────────────────────────────

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;
    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }
    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = hue_from_max(r, g, b, max, delta);
    Hsl {
        h,
        s: clamp01(s),
        l: clamp01(l),
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = normalize_hue(hsl.h);
    let s = clamp01(hsl.s);
    let l = clamp01(hsl.l);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = sector_rgb(h, c, x);
    Rgb::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let h = if delta == 0.0 {
        0.0
    } else {
        hue_from_max(r, g, b, max, delta)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    Hsv {
        h,
        s: clamp01(s),
        v: clamp01(max),
    }
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = normalize_hue(hsv.h);
    let s = clamp01(hsv.s);
    let v = clamp01(hsv.v);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = sector_rgb(h, c, x);
    Rgb::new((r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0)
}

fn hue_from_max(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    normalize_hue(h)
}

fn sector_rgb(h: f64, c: f64, x: f64) -> (f64, f64, f64) {
    match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    }
}

// ── CMYK ────────────────────────────────────────────────────────────────────

pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let (r, g, b) = rgb.normalized();
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return Cmyk {
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 1.0,
        };
    }
    Cmyk {
        c: clamp01((1.0 - r - k) / (1.0 - k)),
        m: clamp01((1.0 - g - k) / (1.0 - k)),
        y: clamp01((1.0 - b - k) / (1.0 - k)),
        k: clamp01(k),
    }
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let c = clamp01(cmyk.c);
    let m = clamp01(cmyk.m);
    let y = clamp01(cmyk.y);
    let k = clamp01(cmyk.k);
    Rgb::new(
        255.0 * (1.0 - c) * (1.0 - k),
        255.0 * (1.0 - m) * (1.0 - k),
        255.0 * (1.0 - y) * (1.0 - k),
    )
}

// ── sRGB transfer function ──────────────────────────────────────────────────

/// sRGB channel (0..=1) to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to sRGB channel (0..=1).
pub fn linear_to_srgb(c: f64) -> f64 {
    let c = clamp01(c);
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn rgb_to_linear(rgb: Rgb) -> (f64, f64, f64) {
    let (r, g, b) = rgb.normalized();
    (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

fn linear_to_rgb(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(
        linear_to_srgb(r) * 255.0,
        linear_to_srgb(g) * 255.0,
        linear_to_srgb(b) * 255.0,
    )
}

// ── CIE Lab / LCH (D65) ─────────────────────────────────────────────────────

const D65: (f64, f64, f64) = (0.95047, 1.0, 1.08883);
const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let (r, g, b) = rgb_to_linear(rgb);
    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let f = |t: f64| {
        if t > LAB_EPSILON {
            t.cbrt()
        } else {
            (LAB_KAPPA * t + 16.0) / 116.0
        }
    };
    let fx = f(x / D65.0);
    let fy = f(y / D65.1);
    let fz = f(z / D65.2);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let finv = |t: f64| {
        let t3 = t * t * t;
        if t3 > LAB_EPSILON {
            t3
        } else {
            (116.0 * t - 16.0) / LAB_KAPPA
        }
    };
    let x = finv(fx) * D65.0;
    let y = finv(fy) * D65.1;
    let z = finv(fz) * D65.2;

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;
    linear_to_rgb(r, g, b)
}

pub fn lab_to_lch(lab: Lab) -> Lch {
    Lch {
        l: lab.l,
        c: (lab.a * lab.a + lab.b * lab.b).sqrt(),
        h: normalize_hue(lab.b.atan2(lab.a).to_degrees()),
    }
}

pub fn lch_to_lab(lch: Lch) -> Lab {
    let rad = lch.h.to_radians();
    Lab {
        l: lch.l,
        a: lch.c * rad.cos(),
        b: lch.c * rad.sin(),
    }
}

pub fn lch_to_rgb(lch: Lch) -> Rgb {
    lab_to_rgb(lch_to_lab(lch))
}

// ── OKLab / OKLCH ───────────────────────────────────────────────────────────

pub fn rgb_to_oklab(rgb: Rgb) -> Oklab {
    let (r, g, b) = rgb_to_linear(rgb);
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    Oklab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

pub fn oklab_to_rgb(ok: Oklab) -> Rgb {
    let l_ = ok.l + 0.3963377774 * ok.a + 0.2158037573 * ok.b;
    let m_ = ok.l - 0.1055613458 * ok.a - 0.0638541728 * ok.b;
    let s_ = ok.l - 0.0894841775 * ok.a - 1.2914855480 * ok.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
    let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
    let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;
    linear_to_rgb(r, g, b)
}

pub fn oklab_to_oklch(ok: Oklab) -> Oklch {
    Oklch {
        l: ok.l,
        c: (ok.a * ok.a + ok.b * ok.b).sqrt(),
        h: normalize_hue(ok.b.atan2(ok.a).to_degrees()),
    }
}

pub fn oklch_to_oklab(ok: Oklch) -> Oklab {
    let rad = ok.h.to_radians();
    Oklab {
        l: ok.l,
        a: ok.c * rad.cos(),
        b: ok.c * rad.sin(),
    }
}

pub fn oklch_to_rgb(ok: Oklch) -> Rgb {
    oklab_to_rgb(oklch_to_oklab(ok))
}

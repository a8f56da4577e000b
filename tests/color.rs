use devbelt::color::contrast::{Accessibility, contrast_ratio, relative_luminance};
use devbelt::color::spaces::*;
use devbelt::color::{ColorReport, Rgb, parse, parse_hex};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn rgb_close(a: Rgb, b: Rgb, tolerance: f64) {
    assert_close(a.r, b.r, tolerance);
    assert_close(a.g, b.g, tolerance);
    assert_close(a.b, b.b, tolerance);
}

#[test]
fn hex_round_trips_for_primaries() {
    for hex in ["#000000", "#ffffff", "#ff0080", "#3498db"] {
        let rgb = parse_hex(hex).unwrap();
        assert_eq!(rgb.to_hex(), hex);
    }
}

#[test]
fn short_hex_expands() {
    assert_eq!(parse_hex("#fff").unwrap().to_hex(), "#ffffff");
    assert_eq!(parse_hex("abc").unwrap().to_hex(), "#aabbcc");
}

#[test]
fn invalid_hex_is_rejected() {
    assert!(parse_hex("#12345").is_err());
    assert!(parse_hex("#gggggg").is_err());
}

#[test]
fn parses_functional_notation() {
    let rgb = parse("rgb(52, 152, 219)").unwrap();
    assert_eq!(rgb.to_hex(), "#3498db");
    let red = parse("hsl(0, 100%, 50%)").unwrap();
    assert_eq!(red.to_hex(), "#ff0000");
    assert!(parse("rgb(300, 0, 0)").is_err());
}

#[test]
fn hsl_round_trip() {
    for hex in ["#3498db", "#ff0080", "#123456", "#808080"] {
        let rgb = parse_hex(hex).unwrap();
        rgb_close(hsl_to_rgb(rgb_to_hsl(rgb)), rgb, 0.5);
    }
}

#[test]
fn hsv_round_trip() {
    for hex in ["#3498db", "#ff0080", "#00ff00"] {
        let rgb = parse_hex(hex).unwrap();
        rgb_close(hsv_to_rgb(rgb_to_hsv(rgb)), rgb, 0.5);
    }
}

#[test]
fn cmyk_round_trip_and_black() {
    let rgb = parse_hex("#3498db").unwrap();
    rgb_close(cmyk_to_rgb(rgb_to_cmyk(rgb)), rgb, 0.5);
    let black = rgb_to_cmyk(Rgb::new(0.0, 0.0, 0.0));
    assert_eq!(black.k, 1.0);
    assert_eq!(black.c, 0.0);
}

#[test]
fn lab_round_trip() {
    for hex in ["#3498db", "#ff0080", "#ffffff", "#000000"] {
        let rgb = parse_hex(hex).unwrap();
        rgb_close(lab_to_rgb(rgb_to_lab(rgb)), rgb, 0.5);
    }
}

#[test]
fn lch_round_trip_through_lab() {
    let rgb = parse_hex("#3498db").unwrap();
    let lab = rgb_to_lab(rgb);
    let back = lch_to_lab(lab_to_lch(lab));
    assert_close(back.l, lab.l, 1e-9);
    assert_close(back.a, lab.a, 1e-9);
    assert_close(back.b, lab.b, 1e-9);
}

#[test]
fn oklab_round_trip() {
    for hex in ["#3498db", "#ff0080", "#ffffff"] {
        let rgb = parse_hex(hex).unwrap();
        rgb_close(oklab_to_rgb(rgb_to_oklab(rgb)), rgb, 0.5);
        rgb_close(oklch_to_rgb(oklab_to_oklch(rgb_to_oklab(rgb))), rgb, 0.5);
    }
}

#[test]
fn white_oklab_lightness_is_one() {
    let ok = rgb_to_oklab(Rgb::new(255.0, 255.0, 255.0));
    assert_close(ok.l, 1.0, 1e-3);
    assert_close(ok.a, 0.0, 1e-3);
}

#[test]
fn hue_is_normalized() {
    let red = hsl_to_rgb(Hsl {
        h: -360.0,
        s: 1.0,
        l: 0.5,
    });
    assert_eq!(red.to_hex(), "#ff0000");
}

#[test]
fn channels_are_clamped() {
    let rgb = Rgb::new(300.0, -5.0, 128.0);
    assert_eq!(rgb.r, 255.0);
    assert_eq!(rgb.g, 0.0);
}

#[test]
fn black_on_white_is_max_contrast() {
    let black = parse_hex("#000000").unwrap();
    let white = parse_hex("#ffffff").unwrap();
    assert_close(contrast_ratio(black, white), 21.0, 1e-9);
    assert_close(contrast_ratio(white, black), 21.0, 1e-9);
}

#[test]
fn luminance_endpoints() {
    assert_eq!(relative_luminance(parse_hex("#000000").unwrap()), 0.0);
    assert_close(relative_luminance(parse_hex("#ffffff").unwrap()), 1.0, 1e-12);
}

#[test]
fn every_color_is_readable_with_black_or_white_text() {
    for hex in ["#000000", "#ffffff", "#3498db", "#ff0080", "#808080"] {
        let a = Accessibility::of(parse_hex(hex).unwrap());
        assert!(a.readable, "{hex} should pass AA with black or white text");
    }
}

#[test]
fn mid_blue_wcag_verdicts() {
    // #3498db: dark text reads better than light text.
    let a = Accessibility::of(parse_hex("#3498db").unwrap());
    assert!(a.vs_black.ratio > a.vs_white.ratio);
    assert!(a.vs_black.aa);
    assert!(!a.vs_white.aa);
}

#[test]
fn report_covers_all_representations() {
    let report = ColorReport::for_color(parse_hex("#3498db").unwrap());
    assert_eq!(report.hex, "#3498db");
    let json = serde_json::to_value(&report).unwrap();
    for key in [
        "hex", "rgb", "hsl", "hsv", "cmyk", "lab", "lch", "oklab", "oklch", "accessibility",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

use devbelt::color::blindness::{Deficiency, simulate, simulate_buffer};
use devbelt::color::{Rgb, parse_hex};

#[test]
fn normal_vision_is_the_identity() {
    for hex in ["#000000", "#ffffff", "#ff0080", "#3498db"] {
        let rgb = parse_hex(hex).unwrap();
        assert_eq!(simulate(rgb, Deficiency::Normal), rgb);
    }
}

#[test]
fn achromatopsia_is_grayscale() {
    let out = simulate(parse_hex("#3498db").unwrap(), Deficiency::Achromatopsia);
    assert_eq!(out.r, out.g);
    assert_eq!(out.g, out.b);
}

#[test]
fn protanopia_drops_pure_red() {
    // The protanopia matrix maps pure red onto the green axis.
    let out = simulate(Rgb::new(255.0, 0.0, 0.0), Deficiency::Protanopia);
    assert!(out.r < 200.0);
    assert!(out.b < 1.0);
}

#[test]
fn white_and_black_are_stable_under_all_deficiencies() {
    // Every matrix has rows summing to 1, so the gray axis is preserved.
    for kind in Deficiency::ALL {
        let white = simulate(Rgb::new(255.0, 255.0, 255.0), kind);
        assert_eq!(white.to_hex(), "#ffffff", "{kind}");
        let black = simulate(Rgb::new(0.0, 0.0, 0.0), kind);
        assert_eq!(black.to_hex(), "#000000", "{kind}");
    }
}

#[test]
fn buffer_simulation_preserves_alpha() {
    let mut pixels = vec![255u8, 0, 0, 77, 52, 152, 219, 200];
    simulate_buffer(&mut pixels, Deficiency::Deuteranopia).unwrap();
    assert_eq!(pixels[3], 77);
    assert_eq!(pixels[7], 200);
}

#[test]
fn buffer_matches_per_pixel_simulation() {
    let mut pixels = vec![52u8, 152, 219, 255];
    simulate_buffer(&mut pixels, Deficiency::Tritanopia).unwrap();
    let expected = simulate(Rgb::new(52.0, 152.0, 219.0), Deficiency::Tritanopia).rounded();
    assert_eq!((pixels[0], pixels[1], pixels[2]), expected);
}

#[test]
fn buffer_with_normal_vision_is_untouched() {
    let original = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let mut pixels = original.clone();
    simulate_buffer(&mut pixels, Deficiency::Normal).unwrap();
    assert_eq!(pixels, original);
}

#[test]
fn ragged_buffer_is_rejected() {
    let mut pixels = vec![0u8; 7];
    assert!(simulate_buffer(&mut pixels, Deficiency::Protanopia).is_err());
}

#[test]
fn parses_aliases() {
    assert_eq!(Deficiency::parse("protan").unwrap(), Deficiency::Protanopia);
    assert_eq!(Deficiency::parse("NORMAL").unwrap(), Deficiency::Normal);
    assert!(Deficiency::parse("xyz").is_err());
}

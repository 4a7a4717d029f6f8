use wilkins_core::color::{Foreground, HexColor, contrast_color, hsl_to_hex, luminance};

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[test]
fn output_is_always_seven_char_hex() {
    for hue in (0..360).step_by(15) {
        for sat in (0..=100).step_by(10) {
            for light in (0..=100).step_by(10) {
                let hex = hsl_to_hex(f64::from(hue), f64::from(sat), f64::from(light));
                assert!(is_hex_color(hex.as_str()), "{hue}/{sat}/{light} -> {hex}");
            }
        }
    }
}

#[test]
fn zero_saturation_is_neutral_gray_for_any_hue() {
    for hue in [0.0, 45.0, 120.0, 200.0, 270.0, 359.0] {
        let hex = hsl_to_hex(hue, 0.0, 50.0);
        let (r, g, b) = hex.rgb();
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(hex.as_str(), "#808080");
    }
}

#[test]
fn primary_hues_convert_to_expected_channels() {
    assert_eq!(hsl_to_hex(0.0, 100.0, 50.0).as_str(), "#ff0000");
    assert_eq!(hsl_to_hex(120.0, 100.0, 50.0).as_str(), "#00ff00");
    assert_eq!(hsl_to_hex(240.0, 100.0, 50.0).as_str(), "#0000ff");
    assert_eq!(hsl_to_hex(0.0, 0.0, 100.0).as_str(), "#ffffff");
    assert_eq!(hsl_to_hex(0.0, 0.0, 0.0).as_str(), "#000000");
}

#[test]
fn bright_backgrounds_get_dark_text() {
    let white: HexColor = "#FFFFFF".parse().unwrap();
    assert_eq!(contrast_color(&white), Foreground::Dark);
    assert_eq!(contrast_color(&white).hex(), Foreground::DARK_HEX);

    let pale_tint = hsl_to_hex(50.0, 50.0, 93.0);
    assert!(luminance(&pale_tint) > 0.5);
    assert_eq!(contrast_color(&pale_tint), Foreground::Dark);
}

#[test]
fn dark_backgrounds_get_light_text() {
    let navy: HexColor = "#1a1a2e".parse().unwrap();
    assert_eq!(contrast_color(&navy), Foreground::Light);
}

#[test]
fn luminance_at_threshold_is_light() {
    // 0.299 + 0.587 + 0.114 = 1, so a gray of 127.5 would sit exactly on 0.5;
    // the nearest grays straddle it.
    let below: HexColor = "#7f7f7f".parse().unwrap();
    let above: HexColor = "#808080".parse().unwrap();
    assert!(luminance(&below) < 0.5);
    assert!(luminance(&above) > 0.5);
    assert_eq!(contrast_color(&below), Foreground::Light);
    assert_eq!(contrast_color(&above), Foreground::Dark);
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["", "#fff", "123456", "#12345g", "#1234567"] {
        assert!(bad.parse::<HexColor>().is_err(), "{bad} should not parse");
    }
}

#[test]
fn hex_is_normalized_to_lowercase_and_printed_uppercase() {
    let hex: HexColor = "#AbCdEf".parse().unwrap();
    assert_eq!(hex.as_str(), "#abcdef");
    assert_eq!(hex.to_uppercase(), "#ABCDEF");
}

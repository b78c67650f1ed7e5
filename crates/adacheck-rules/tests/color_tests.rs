//! Integration tests for color parsing and the WCAG contrast math.

use adacheck_rules::{Rgb, contrast_ratio, parse_color, relative_luminance};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_parse_hex_6() {
    assert_eq!(parse_color("#ff0000"), Rgb::new(255, 0, 0));
}

#[test]
fn test_parse_hex_3_duplicates_digits() {
    assert_eq!(parse_color("#777"), Rgb::new(119, 119, 119));
    assert_eq!(parse_color("#fff"), Rgb::WHITE);
}

#[test]
fn test_parse_hex_mixed_case_and_whitespace() {
    assert_eq!(parse_color("  #FfA500 "), Rgb::new(255, 165, 0));
}

#[test]
fn test_parse_hex_invalid_falls_back_to_black() {
    assert_eq!(parse_color("#ggg"), Rgb::BLACK);
    assert_eq!(parse_color("#ffff"), Rgb::BLACK);
    assert_eq!(parse_color("#"), Rgb::BLACK);
}

#[test]
fn test_parse_rgb_function() {
    assert_eq!(parse_color("rgb(0, 128, 0)"), Rgb::new(0, 128, 0));
    assert_eq!(parse_color("RGB(10,20,30)"), Rgb::new(10, 20, 30));
}

#[test]
fn test_parse_rgb_clamps_channels() {
    assert_eq!(parse_color("rgb(300, 999, 255)"), Rgb::new(255, 255, 255));
}

#[test]
fn test_parse_named_colors() {
    assert_eq!(parse_color("lightgreen"), Rgb::new(144, 238, 144));
    assert_eq!(parse_color("Gray"), Rgb::new(128, 128, 128));
    assert_eq!(parse_color("grey"), Rgb::new(128, 128, 128));
    assert_eq!(parse_color("green"), Rgb::new(0, 128, 0));
    assert_eq!(parse_color("white"), Rgb::WHITE);
}

#[test]
fn test_parse_unknown_is_black() {
    assert_eq!(parse_color("not-a-color"), Rgb::BLACK);
    assert_eq!(parse_color(""), Rgb::BLACK);
    assert_eq!(parse_color("hsl(0, 100%, 50%)"), Rgb::BLACK);
    // Outside the small named table
    assert_eq!(parse_color("orange"), Rgb::BLACK);
}

#[test]
fn test_black_white_contrast_is_21() {
    assert!(approx(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0));
    assert!(approx(contrast_ratio(Rgb::WHITE, Rgb::BLACK), 21.0));
}

#[test]
fn test_same_color_contrast_is_1() {
    let teal = Rgb::new(0, 128, 128);
    assert!(approx(contrast_ratio(teal, teal), 1.0));
}

#[test]
fn test_gray_777_on_white_is_below_aa() {
    let ratio = contrast_ratio(parse_color("#777"), Rgb::WHITE);
    assert!(ratio < 4.5);
    assert_eq!(format!("{ratio:.2}"), "4.48");
}

#[test]
fn test_luminance_uses_low_channel_linear_segment() {
    // 10/255 = 0.0392 sits below the 0.03928 threshold
    let l = relative_luminance(Rgb::new(10, 10, 10));
    assert!(approx(l, (10.0 / 255.0) / 12.92));
}

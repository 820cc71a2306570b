use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: Rgb = "#ff0000".parse().unwrap();
    assert_eq!(c, Rgb::new(255.0, 0.0, 0.0));
    let c: Rgb = "#0f8".parse().unwrap();
    assert_eq!(c, Rgb::new(0.0, 255.0, 136.0));
    assert!("#12345".parse::<Rgb>().is_err());
    assert!("#zzzzzz".parse::<Rgb>().is_err());
}

#[test]
fn parses_functional_forms() {
    let c: Rgb = "rgb(10, 20, 30)".parse().unwrap();
    assert_eq!(c, Rgb::new(10.0, 20.0, 30.0));
    let c: Rgb = "hsl(0, 100%, 50%)".parse().unwrap();
    assert_eq!(c.to_rgb8(), [255, 0, 0]);
    assert!("rgb(1, 2)".parse::<Rgb>().is_err());
    assert!("teal".parse::<Rgb>().is_err());
}

#[test]
fn hsl_primary_hues() {
    assert_eq!(Rgb::from_hsl(120.0, 1.0, 0.5).to_rgb8(), [0, 255, 0]);
    assert_eq!(Rgb::from_hsl(240.0, 1.0, 0.5).to_rgb8(), [0, 0, 255]);
    assert_eq!(Rgb::from_hsl(480.0, 1.0, 0.5).to_rgb8(), [0, 255, 0]);
    assert_eq!(Rgb::from_hsl(0.0, 0.0, 0.5).to_rgb8(), [128, 128, 128]);
}

#[test]
fn darker_scales_by_point_seven_per_unit() {
    let c = Rgb::new(200.0, 100.0, 10.0);
    assert_eq!(c.darker(0.0), c);
    let d = c.darker(1.0);
    assert!((d.r - 140.0).abs() < 1e-9);
    assert!((d.g - 70.0).abs() < 1e-9);
    let back = d.brighter(1.0);
    assert!((back.r - 200.0).abs() < 1e-9);
}

#[test]
fn display_rounds_and_clamps() {
    assert_eq!(Rgb::new(10.4, 10.5, 300.0).to_string(), "rgb(10, 11, 255)");
    assert_eq!(Rgb::new(-3.0, 0.0, 0.0).to_string(), "rgb(0, 0, 0)");
}

#[test]
fn light_detection_uses_perceived_luminance() {
    assert!(Rgb::new(253.0, 246.0, 227.0).is_light());
    assert!(!Rgb::new(0.0, 43.0, 54.0).is_light());
}

#[test]
fn color_def_round_trips_its_spelling() {
    let c: ColorDef = serde_json::from_value(json!("#FDF6E3")).unwrap();
    assert_eq!(c.rgb().to_rgb8(), [253, 246, 227]);
    assert_eq!(serde_json::to_value(&c).unwrap(), json!("#FDF6E3"));
    assert!(serde_json::from_value::<ColorDef>(json!("nope")).is_err());
}

#[test]
fn percent_accepts_strings_and_numbers() {
    let p: Percent = serde_json::from_value(json!("50%")).unwrap();
    assert_eq!(p.fraction(), 0.5);
    let p: Percent = serde_json::from_value(json!(25)).unwrap();
    assert_eq!(p.fraction(), 0.25);
    assert_eq!(p.to_string(), "25%");
    assert!(serde_json::from_value::<Percent>(json!("50")).is_err());
}

#[test]
fn color_def_from_packed_hex() {
    let c = ColorDef::from_hex(0x00fd_f6e3);
    assert_eq!(c.as_str(), "#fdf6e3");
    assert_eq!(c.rgb().to_rgb8(), [0xfd, 0xf6, 0xe3]);
    assert_eq!(ColorDef::from_hex(0x0000_2b36).as_str(), "#002b36");
}

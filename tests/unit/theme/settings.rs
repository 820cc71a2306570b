use super::*;

const NORMAL: &str = r##"{
    "type": "normal",
    "backgroundColor": "#ffffff",
    "foregroundColor": "#00000f",
    "strongColor": "rgb(255, 0, 0)",
    "weakColor": "#aaa",
    "contribColors": ["#efefef", "#d8e887", "#8cc665", "#44a340", "#1e6823"]
}"##;

#[test]
fn parses_normal_settings_with_defaults() {
    let s = Settings::from_reader(NORMAL.as_bytes()).unwrap();
    assert!(matches!(s.colors, ColorSettings::Normal(_)));
    assert!(!s.growing_animation);
    assert!(!s.animation_enabled(false));
    assert!(s.animation_enabled(true));
    assert_eq!(s.file_name(), DEFAULT_FILE_NAME);
    assert_eq!(s.contrib_label(), "contributions");
    assert_eq!(s.weak_color.as_str(), "#aaa");
}

#[test]
fn optional_fields_override_defaults() {
    let json = NORMAL.replacen(
        "\"type\": \"normal\",",
        r#""type": "normal", "growingAnimation": true, "fileName": "out/x.svg",
           "l10n": {"contrib": "コントリビューション"},"#,
        1,
    );
    let s = Settings::from_reader(json.as_bytes()).unwrap();
    assert!(s.animation_enabled(false));
    assert_eq!(s.file_name(), "out/x.svg");
    assert_eq!(s.contrib_label(), "コントリビューション");
}

#[test]
fn unknown_type_and_missing_fields_are_rejected() {
    let json = NORMAL.replace("\"normal\"", "\"pie_lang_only\"");
    assert!(Settings::from_reader(json.as_bytes()).is_err());

    let json = NORMAL.replace("\"type\": \"normal\",", "\"type\": \"season\",");
    let err = Settings::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, ContribError::Serde(_)));
}

#[test]
fn bad_colors_and_bitmap_rows_fail_at_load() {
    let json = NORMAL.replace("#efefef", "#zzzzzz");
    assert!(Settings::from_reader(json.as_bytes()).is_err());

    let bitmap = r##"{
        "type": "bitmap",
        "backgroundColor": "#fff", "foregroundColor": "#000",
        "strongColor": "#f00", "weakColor": "#888",
        "contribPatterns": [{"top": {"width": 2, "bitmap": ["nope"]},
                             "left": {"width": 2, "bitmap": []},
                             "right": {"width": 2, "bitmap": []}}]
    }"##;
    assert!(Settings::from_reader(bitmap.as_bytes()).is_err());
}

#[test]
fn rainbow_fields_parse_units() {
    let json = r##"{
        "type": "rainbow",
        "backgroundColor": "#fff", "foregroundColor": "#000",
        "strongColor": "#f00", "weakColor": "#888",
        "hueRatio": -2.5, "saturation": "50%",
        "contribLightness": ["95%", "80%", "65%", "50%", "35%"],
        "duration": "10s"
    }"##;
    let s = Settings::from_reader(json.as_bytes()).unwrap();
    let ColorSettings::Rainbow(r) = &s.colors else {
        panic!("expected rainbow");
    };
    assert_eq!(r.hue_ratio, -2.5);
    assert_eq!(r.saturation.fraction(), 0.5);
    assert_eq!(r.contrib_lightness[4].fraction(), 0.35);
    assert_eq!(r.duration.as_secs(), 10.0);
}

#[test]
fn settings_file_accepts_one_or_many() {
    let one = SettingsFile::from_reader(NORMAL.as_bytes()).unwrap();
    assert_eq!(one.into_vec().len(), 1);

    let many = format!("[{NORMAL}, {NORMAL}]");
    let many = SettingsFile::from_reader(many.as_bytes()).unwrap();
    assert!(matches!(many, SettingsFile::Many(ref v) if v.len() == 2));

    assert!(SettingsFile::from_reader("[1]".as_bytes()).is_err());
    assert!(SettingsFile::from_reader("{".as_bytes()).is_err());
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let err = SettingsFile::from_path("definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ContribError::Io(_)));
}

#[test]
fn bitmap_levels_are_indexed_from_zero() {
    let pattern = r#"{"width": 1, "bitmap": [1]}"#;
    let json = format!(
        r##"{{"contribPatterns": [
            {{"top": {pattern}, "left": {pattern}, "right": {pattern}}},
            {{"top": {pattern}, "left": {pattern}, "right": {pattern}}}
        ]}}"##
    );
    let bitmap: BitmapColors = serde_json::from_str(&json).unwrap();
    let levels: Vec<u8> = bitmap.levels().map(|(l, _)| l.get()).collect();
    assert_eq!(levels, [0, 1]);
    assert!(bitmap.require(ContributionLevel::new(1).unwrap()).is_ok());
    assert!(bitmap.require(ContributionLevel::new(2).unwrap()).is_err());
}

use super::*;
use crate::foundation::core::PanelKind;
use crate::geometry::transform::Transform;

fn bar(week: i64, day_of_week: u32, height: f64) -> BarPlacement {
    BarPlacement {
        week,
        day_of_week,
        base_x: 100.0,
        base_y: 500.0,
        height,
    }
}

#[test]
fn clock_value_parses_units() {
    let c: ClockValue = serde_json::from_str("\"10s\"").unwrap();
    assert_eq!(c.as_secs(), 10.0);
    let c: ClockValue = serde_json::from_str("\"500ms\"").unwrap();
    assert_eq!(c.as_secs(), 0.5);
    let c: ClockValue = serde_json::from_str("2.5").unwrap();
    assert_eq!(c.to_string(), "2.5s");
    assert!(serde_json::from_str::<ClockValue>("\"-1s\"").is_err());
    assert!(serde_json::from_str::<ClockValue>("\"soon\"").is_err());
}

#[test]
fn grow_runs_from_base_sliver_to_top() {
    let cfg = LayoutConfig::default();
    let spec = grow_translate(&bar(0, 0, 50.0), &cfg);
    assert_eq!(spec.target, AnimTarget::Translate);
    assert_eq!(spec.values.to_string(), "100 497;100 450");
    assert_eq!(spec.dur.to_string(), "3s");
    assert_eq!(spec.repeat, Repeat::Once);
    assert!(spec.begin.is_none());
}

#[test]
fn panel_height_growth_is_scaled() {
    let cfg = LayoutConfig::default();
    let panel = PanelShape {
        kind: PanelKind::Left,
        width: 18.0,
        height: 25.0,
        side_scale: 2.0,
        transform: Transform::identity(),
    };
    let spec = grow_panel_height(&panel, &bar(0, 0, 50.0), &cfg);
    assert_eq!(spec.target, AnimTarget::Attribute("height"));
    assert_eq!(spec.values.to_string(), "1.5;25");
}

#[test]
fn wave_has_step_count_plus_one_values_and_starts_after_grow() {
    let cfg = LayoutConfig::default();
    let spec = wave(&bar(3, 2, 100.0), &cfg);
    assert_eq!(spec.values.len(), 17);
    assert_eq!(spec.begin.map(|b| b.to_string()), Some("3s".to_owned()));
    assert_eq!(spec.dur.to_string(), "4s");
    assert_eq!(spec.repeat, Repeat::Indefinite);
    // The cycle closes on itself.
    assert_eq!(spec.values.values()[0], spec.values.values()[16]);
}

#[test]
fn wave_amplitude_is_capped() {
    let cfg = LayoutConfig::default();
    // Phase 0: sample 4 sits at the sine peak.
    let spec = wave(&bar(0, 0, 1000.0), &cfg);
    assert_eq!(spec.values.values()[4], "100 -496");
    // Small bars use 8% of their height.
    let spec = wave(&bar(0, 0, 10.0), &cfg);
    assert_eq!(spec.values.values()[4], "100 490.8");
}

#[test]
fn wave_phase_follows_the_diagonal() {
    let cfg = LayoutConfig::default();
    let a = wave(&bar(1, 3, 40.0), &cfg);
    let b = wave(&bar(4, 0, 40.0), &cfg);
    let c = wave(&bar(20, 0, 40.0), &cfg);
    assert_eq!(a.values, b.values);
    // Diagonal 20 wraps to phase 4.
    assert_eq!(a.values, c.values);
    let d = wave(&bar(0, 0, 40.0), &cfg);
    assert_ne!(a.values, d.values);
}

use egui_brush::{Bounds, BrushConfig};

#[test]
fn serialize_deserialize_brush_config() {
    let config = BrushConfig::default()
        .with_drag_mode(true)
        .with_min_size(4.0)
        .with_bounds(Bounds::new(0.0, 900.0, 0.0, 600.0));
    let serialized = serde_json::to_string(&config).unwrap();
    let deserialized: BrushConfig = serde_json::from_str(&serialized).unwrap();
    assert_eq!(config, deserialized);
}

#[test]
fn missing_fields_use_defaults() {
    let config: BrushConfig = serde_json::from_str(r#"{"drag_mode": true}"#).unwrap();
    assert_eq!(BrushConfig::default().with_drag_mode(true), config);
}

#[test]
fn inverted_bounds_are_normalized_on_load() {
    let config: BrushConfig = serde_json::from_str(
        r#"{"bounds": {"left": 100, "right": 0, "upper": 100, "lower": 0}}"#,
    )
    .unwrap();
    assert_eq!(Some(&Bounds::new(0.0, 100.0, 0.0, 100.0)), config.bounds());
}

#[test]
fn null_bounds_leave_brush_unconstrained() {
    let config: BrushConfig = serde_json::from_str(r#"{"bounds": null, "min_size": 2}"#).unwrap();
    assert_eq!(None, config.bounds());
    assert_eq!(2.0, config.min_size);
}

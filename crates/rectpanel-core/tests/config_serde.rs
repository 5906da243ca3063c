#![cfg(feature = "serde")]

//! Panel configuration loaded from JSON.

use rectpanel_core::{BoundedRect, ClampBasis, Dimensions, PanelConfig, Zone};

#[test]
fn empty_object_yields_defaults() {
    let config: PanelConfig = serde_json::from_str("{}").expect("defaults");
    assert_eq!(config, PanelConfig::default());
}

#[test]
fn partial_config_overrides_fields() {
    let json = r#"{
        "initial": { "x": 10, "y": 20, "w": 50, "h": 60 },
        "clamp_basis": "displayed_origin"
    }"#;
    let config: PanelConfig = serde_json::from_str(json).expect("valid json");
    assert_eq!(config.initial, Dimensions::new(10.0, 20.0, 50.0, 60.0));
    assert_eq!(config.max, Dimensions::DEFAULT_MAX);
    assert_eq!(config.clamp_basis, ClampBasis::DisplayedOrigin);

    let rect = BoundedRect::new(config).expect("valid config");
    assert_eq!(rect.displayed_bounds(), config.initial);
}

#[test]
fn zones_use_kebab_case_names() {
    let zone: Zone = serde_json::from_str("\"north-west\"").expect("zone");
    assert_eq!(zone, Zone::NorthWest);
    assert_eq!(
        serde_json::to_string(&Zone::SouthEast).expect("serialize"),
        "\"south-east\""
    );
}

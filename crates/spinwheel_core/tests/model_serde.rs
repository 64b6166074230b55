use spinwheel_core::{Category, SpinOutcome, WheelConfig, WorkContext};
use uuid::Uuid;

#[test]
fn spin_outcome_uses_expected_wire_fields() {
    let spin_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let outcome = SpinOutcome {
        spin_id,
        chosen: Category::Fitness,
        landed: Category::Nutrition,
        tip_text: "Nutrition fuels fitness.".to_string(),
        final_rotation_degrees: 2190.0,
    };

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["spin_id"], spin_id.to_string());
    assert_eq!(json["chosen_category"], "fitness");
    assert_eq!(json["landed_category"], "nutrition");
    assert_eq!(json["tip_text"], "Nutrition fuels fitness.");
    assert_eq!(json["final_rotation_degrees"], 2190.0);

    let decoded: SpinOutcome = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, outcome);
}

#[test]
fn wheel_config_fills_missing_fields_with_defaults() {
    let config: WheelConfig =
        serde_json::from_str(r#"{ "spin_duration_ms": 500, "extra_turns": 2 }"#).unwrap();
    assert_eq!(config.spin_duration_ms, 500);
    assert_eq!(config.extra_turns, 2);
    assert_eq!(config.snap_duration_ms, WheelConfig::default().snap_duration_ms);
    config.validate().unwrap();
}

#[test]
fn work_context_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(WorkContext::Offshore).unwrap(),
        serde_json::json!("offshore")
    );
    let decoded: Category = serde_json::from_value(serde_json::json!("energy")).unwrap();
    assert_eq!(decoded, Category::Energy);
}

use super::*;

#[test]
fn zero_fields_mean_unset() {
    assert!(GridPlacement::AUTO.is_auto());
    assert!(GridPlacement::default().is_auto());
    assert!(!GridPlacement::span(2).is_auto());
    assert!(!GridPlacement::lines(-1, 0).is_auto());
}

#[test]
fn constructors_fill_the_expected_fields() {
    assert_eq!(GridPlacement::lines(2, 4), GridPlacement::new(2, 4, 0));
    assert_eq!(GridPlacement::span(3), GridPlacement::new(0, 0, 3));
}

#[test]
fn serializes_as_a_plain_triple() {
    let json = serde_json::to_value(GridPlacement::new(1, -1, 0)).unwrap();
    assert_eq!(json, serde_json::json!({ "start": 1, "end": -1, "span": 0 }));
}

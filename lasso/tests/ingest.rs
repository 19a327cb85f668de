use lasso::{Dataset, Point};
use serde_json::json;

#[test]
fn dataset_accepts_pairs_and_objects() {
    let doc = json!([[0.0, 1.0], { "x": 2.0, "y": 3.0, "id": 42 }, { "x": 4.0, "y": 5.0 }]);
    let ds = Dataset::from_json_str(&doc.to_string()).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.ids(), &[0, 42, 2]);
    assert_eq!(ds.points()[1], Point::new(2.0, 3.0));
}

#[test]
fn dataset_accepts_wrapped_document() {
    let doc = json!({ "points": [{ "x": 1.5, "y": -2.0, "id": 7 }] });
    let ds = Dataset::from_json_str(&doc.to_string()).unwrap();
    assert_eq!(ds.get(0), Some((7, Point::new(1.5, -2.0))));

    // Export uses the wrapped form and reads back unchanged.
    let again = Dataset::from_json_str(&ds.to_json_value().to_string()).unwrap();
    assert_eq!(again, ds);
}

#[test]
fn malformed_dataset_is_a_json_error() {
    let err = Dataset::from_json_str(r#"[{"x": 1.0}]"#).unwrap_err();
    assert_eq!(err.code(), "invalid_json");
    let err = Dataset::from_json_str("not json").unwrap_err();
    assert_eq!(err.code(), "invalid_json");
}

#[test]
fn dataset_cap_exceeded() {
    let too_many = lasso::limits::MAX_DATASET_POINTS + 1;
    let err = Dataset::from_points(vec![Point::default(); too_many]).unwrap_err();
    assert_eq!(err.code(), "limit_exceeded");

    let flat = vec![0.0; too_many * 2];
    let err = Dataset::from_pairs(&flat).unwrap_err();
    assert_eq!(err.code(), "limit_exceeded");
}

#[test]
fn dataset_at_cap_is_accepted() {
    let ds = Dataset::from_points(vec![Point::default(); lasso::limits::MAX_DATASET_POINTS]).unwrap();
    assert_eq!(ds.len(), lasso::limits::MAX_DATASET_POINTS);
}

use std::io::Write;

use inhaler_scoring::catalog;
use inhaler_scoring::config::{load_scale, parse_scale};
use inhaler_scoring::{Band, ScaleConfigError, ScoreSelection};

const CURB65_LIKE: &str = r#"{
  "id": "curb65",
  "name": "CURB-65",
  "criteria": [
    { "id": "confusion", "label": "Confusión", "points": 1 },
    { "id": "urea", "label": "Urea > 7 mmol/l", "points": 1 },
    { "id": "fr", "label": "FR ≥ 30", "points": 1 },
    { "id": "pa", "label": "PAS < 90 o PAD ≤ 60", "points": 1 },
    { "id": "edad", "label": "Edad ≥ 65", "points": 1 }
  ],
  "thresholds": [
    { "upper_bound": 1, "label": "Riesgo bajo", "band": "low" },
    { "upper_bound": 2, "label": "Riesgo intermedio", "band": "medium" },
    { "label": "Riesgo alto", "band": "high" }
  ]
}"#;

#[test]
fn external_definition_reuses_the_generic_evaluator() {
    let scale = parse_scale(CURB65_LIKE).expect("parse scale");
    assert_eq!(scale.criteria.len(), 5);

    let result = scale.evaluate(&ScoreSelection::from_toggles(["confusion", "edad"]));
    assert_eq!(result.score, 2);
    assert_eq!(result.interpretation.band, Band::Medium);
    assert_eq!(result.interpretation.label, "Riesgo intermedio");
}

#[test]
fn duplicate_criterion_ids_are_rejected() {
    let json = r#"{
      "id": "x", "name": "X",
      "criteria": [
        { "id": "a", "label": "A", "points": 1 },
        { "id": "a", "label": "A again", "points": 2 }
      ],
      "thresholds": [{ "label": "todo", "band": "low" }]
    }"#;
    let err = parse_scale(json).unwrap_err();
    assert!(matches!(err, ScaleConfigError::DuplicateCriterion { .. }));
}

#[test]
fn points_beyond_score_range_are_rejected() {
    let json = r#"{
      "id": "x", "name": "X",
      "criteria": [
        { "id": "a", "label": "A", "points": 2147483647 },
        { "id": "b", "label": "B", "points": 1 }
      ],
      "thresholds": [{ "label": "todo", "band": "low" }]
    }"#;
    let err = parse_scale(json).unwrap_err();
    assert!(matches!(err, ScaleConfigError::PointsOverflow { .. }));
}

#[test]
fn largest_reachable_score_is_accepted() {
    let json = r#"{
      "id": "x", "name": "X",
      "criteria": [
        { "id": "a", "label": "A", "points": 2147483646 },
        { "id": "b", "label": "B", "points": 1 }
      ],
      "thresholds": [{ "label": "todo", "band": "high" }]
    }"#;
    let scale = parse_scale(json).expect("scale fits in range");
    let result = scale.evaluate(&ScoreSelection::from_toggles(["a", "b"]));
    assert_eq!(result.score, i32::MAX);
}

#[test]
fn bad_threshold_table_fails_to_parse() {
    let json = r#"{
      "id": "x", "name": "X",
      "criteria": [{ "id": "a", "label": "A", "points": 1 }],
      "thresholds": [{ "upper_bound": 3, "label": "bajo", "band": "low" }]
    }"#;
    let err = parse_scale(json).unwrap_err();
    assert!(matches!(err, ScaleConfigError::Json(_)));
    assert!(err.to_string().contains("unbounded"));
}

#[test]
fn loads_definition_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(CURB65_LIKE.as_bytes()).expect("write scale");
    let scale = load_scale(file.path()).expect("load scale");
    assert_eq!(scale.id, "curb65");
}

#[test]
fn missing_file_reports_path() {
    let err = load_scale(std::path::Path::new("/nonexistent/curb65.json")).unwrap_err();
    assert!(matches!(err, ScaleConfigError::Io { .. }));
    assert!(err.to_string().contains("curb65.json"));
}

#[test]
fn catalog_lists_all_linked_scales() {
    let ids: Vec<&str> = catalog::CATALOG.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec!["wells-tvp", "curb65", "hiponatremia"]);
    assert!(catalog::find("wells-tvp").and_then(|e| e.builtin()).is_some());
    assert!(catalog::find("hiponatremia").and_then(|e| e.builtin()).is_none());
}

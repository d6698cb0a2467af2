#![cfg(feature = "serde")]

//! Integration tests for serde support on operator metadata.

use closure_algebra::operator::{FlattenPolicy, OperatorKind};
use rstest::rstest;

// =============================================================================
// OperatorKind
// =============================================================================

#[rstest]
fn test_operator_kind_json_roundtrip() {
    for kind in OperatorKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        let restored: OperatorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, restored);
    }
}

#[rstest]
#[case(OperatorKind::Pipe, "\"pipe\"")]
#[case(OperatorKind::BindFront, "\"bind_front\"")]
#[case(OperatorKind::NotEqual, "\"not_equal\"")]
fn test_operator_kind_uses_snake_case_names(#[case] kind: OperatorKind, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
}

#[rstest]
fn test_serialized_name_matches_display() {
    for kind in OperatorKind::ALL {
        assert_eq!(serde_json::to_string(&kind).unwrap(), format!("\"{kind}\""));
    }
}

#[rstest]
fn test_unknown_operator_is_rejected() {
    assert!(serde_json::from_str::<OperatorKind>("\"compose\"").is_err());
}

// =============================================================================
// FlattenPolicy
// =============================================================================

#[rstest]
fn test_flatten_policy_table_roundtrip() {
    let table: Vec<(OperatorKind, FlattenPolicy)> = OperatorKind::ALL
        .into_iter()
        .map(|kind| (kind, kind.flatten_policy()))
        .collect();

    let json = serde_json::to_string(&table).unwrap();
    let restored: Vec<(OperatorKind, FlattenPolicy)> = serde_json::from_str(&json).unwrap();

    assert_eq!(table, restored);
    assert!(json.contains("\"prefer_join\""));
    assert!(json.contains("\"nested_only\""));
}

//! Content: tests for the montage table format.

use super::data::ClipDef;
use super::loader::parse_data_file;
use crate::animation::ClipId;

#[test]
fn test_parse_clip_table() {
    let source = r#"(
        schema_version: 1,
        items: [
            (id: Jab, path: "animations/punch_jab.anim.ron"),
            (id: DodgeLeft, path: "animations/dodge_left.anim.ron"),
        ],
    )"#;
    let defs: Vec<ClipDef> = parse_data_file(source).unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].id, ClipId::Jab);
    assert_eq!(defs[0].path, "animations/punch_jab.anim.ron");
    assert_eq!(defs[1].id, ClipId::DodgeLeft);
}

#[test]
fn test_unknown_clip_id_is_a_parse_error() {
    let source = r#"(
        schema_version: 1,
        items: [(id: Moonwalk, path: "animations/moonwalk.anim.ron")],
    )"#;
    let result: Result<Vec<ClipDef>, _> = parse_data_file(source);
    assert!(result.is_err());
}

#[test]
fn test_missing_wrapper_is_a_parse_error() {
    let result: Result<Vec<ClipDef>, _> = parse_data_file("[(id: Jab, path: \"x\")]");
    assert!(result.is_err());
}

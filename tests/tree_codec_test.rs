//! Tests for the level-order tree codec

use rstest::rstest;

use rskata::domain::tree::{self, TreeNode};
use rskata::domain::DomainError;

// ============================================================
// Empty / Absent Root Tests
// ============================================================

#[test]
fn given_no_tokens_when_building_then_yields_empty_tree() {
    let tokens: Vec<String> = Vec::new();
    let root = TreeNode::from_level_order(&tokens).unwrap();
    assert!(root.is_none());
}

#[rstest]
#[case::null_marker("null")]
#[case::hash_marker("#")]
#[case::empty_marker("")]
fn given_absent_first_token_when_building_then_yields_empty_tree(#[case] marker: &str) {
    let root = TreeNode::from_level_order(&[marker]).unwrap();
    assert!(root.is_none(), "marker {:?} should yield no tree", marker);
}

// ============================================================
// Shape Tests
// ============================================================

#[test]
fn given_single_token_when_building_then_yields_lone_root() {
    let root = TreeNode::from_level_order(&["1"]).unwrap().unwrap();
    assert_eq!(root.val, 1);
    assert!(root.left.is_none());
    assert!(root.right.is_none());
}

#[test]
fn given_three_tokens_when_building_then_fills_both_child_slots() {
    let root = TreeNode::from_level_order(&["1", "2", "3"])
        .unwrap()
        .unwrap();
    assert_eq!(root.val, 1);
    assert_eq!(root.left.as_ref().unwrap().val, 2);
    assert_eq!(root.right.as_ref().unwrap().val, 3);
    assert!(root.left.as_ref().unwrap().is_leaf());
    assert!(root.right.as_ref().unwrap().is_leaf());
}

#[rstest]
#[case::long_marker(&["1", "null", "2", "null", "3"])]
#[case::short_marker(&["1", "#", "2", "#", "3"])]
fn given_absent_left_slots_when_building_then_produces_right_skewed_zigzag(
    #[case] tokens: &[&str],
) {
    // 1 -> right 2 -> right 3, matching breadth-first slot consumption
    let root = TreeNode::from_level_order(tokens).unwrap().unwrap();
    assert_eq!(root.val, 1);
    assert!(root.left.is_none());
    let right = root.right.as_ref().unwrap();
    assert_eq!(right.val, 2);
    assert!(right.left.is_none());
    let grandchild = right.right.as_ref().unwrap();
    assert_eq!(grandchild.val, 3);
    assert!(grandchild.is_leaf());
}

// ============================================================
// Truncation Leniency Tests
// ============================================================

#[test]
fn given_truncated_tokens_when_building_then_stops_without_error() {
    // Right-slot token missing: not a failure, the slot stays empty
    let root = TreeNode::from_level_order(&["1", "2"]).unwrap().unwrap();
    assert_eq!(root.val, 1);
    assert_eq!(root.left.as_ref().unwrap().val, 2);
    assert!(root.right.is_none());
}

#[test]
fn given_tokens_ending_mid_level_when_building_then_later_parents_stay_childless() {
    let root = TreeNode::from_level_order(&["1", "2", "3", "4"])
        .unwrap()
        .unwrap();
    let left = root.left.as_ref().unwrap();
    assert_eq!(left.left.as_ref().unwrap().val, 4);
    assert!(left.right.is_none());
    // Parent 3 was still pending when the tokens ran out
    assert!(root.right.as_ref().unwrap().is_leaf());
}

// ============================================================
// Parse Failure Tests
// ============================================================

#[test]
fn given_non_numeric_token_when_building_then_fails_with_parse_error() {
    let err = TreeNode::from_level_order(&["1", "x"]).unwrap_err();
    assert!(matches!(err, DomainError::Parse { .. }), "got: {err}");
}

#[test]
fn given_non_numeric_root_when_building_then_fails_with_parse_error() {
    let err = TreeNode::from_level_order(&["abc"]).unwrap_err();
    assert!(matches!(err, DomainError::Parse { .. }));
}

#[test]
fn given_out_of_range_token_when_building_then_fails_with_parse_error() {
    let err = TreeNode::from_level_order(&["99999999999"]).unwrap_err();
    assert!(matches!(err, DomainError::Parse { .. }));
}

// ============================================================
// Reference Fixture Tests
// ============================================================

#[test]
fn given_reference_fixture_when_inspecting_then_is_complete_four_level_tree() {
    let root = TreeNode::reference_fixture();
    assert_eq!(root.node_count(), 15);
    assert_eq!(root.depth(), 4);
    assert_eq!(root.level_order(), (0..15).collect::<Vec<i32>>());
}

#[test]
fn given_repeated_invocations_when_building_fixture_then_structure_is_identical() {
    assert_eq!(TreeNode::reference_fixture(), TreeNode::reference_fixture());
}

// ============================================================
// Round-Trip Tests
// ============================================================

#[rstest]
#[case::one_level(1)]
#[case::two_levels(3)]
#[case::three_levels(7)]
#[case::four_levels(15)]
fn given_fully_specified_tokens_when_building_then_level_order_recovers_them(#[case] len: i32) {
    let tokens: Vec<String> = (0..len).map(|n| n.to_string()).collect();
    let root = TreeNode::from_level_order(&tokens).unwrap().unwrap();
    assert_eq!(root.level_order(), (0..len).collect::<Vec<i32>>());
}

// ============================================================
// Cross-Encoding Tests
// ============================================================

#[test]
fn given_nullable_values_when_building_then_tree_equals_text_token_tree() {
    let from_values =
        TreeNode::from_level_order_values(&[Some(1), None, Some(2), None, Some(3)]).unwrap();
    let from_tokens = TreeNode::from_level_order(&["1", "null", "2", "null", "3"]).unwrap();
    assert_eq!(from_values, from_tokens);
}

#[test]
fn given_absent_first_value_when_building_then_yields_empty_tree() {
    let root = TreeNode::from_level_order_values(&[None, Some(1)]).unwrap();
    assert!(root.is_none());
}

// ============================================================
// Display Tests
// ============================================================

#[test]
fn given_node_when_rendering_then_uses_bracketed_value_form() {
    let root = TreeNode::reference_fixture();
    assert_eq!(tree::render(Some(&root)), "TreeNode[val=0]");
    assert_eq!(tree::render(None), "null");
}

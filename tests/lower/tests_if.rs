//! If statements: `if (x == 0) goto ret;`

use jcpg::cpg::{ControlStructureType, EdgeLabel, NodeKind, operators};

use crate::helpers::fixtures::{World, if_method};
use crate::helpers::graph_assert::{
    assert_cfg, ast_child_at, call_named, has_edge, identifiers_named, node, only_node_of_kind,
};

#[test]
fn test_if_condition_shape() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let if_node = only_node_of_kind(&delta, NodeKind::ControlStructure);
    assert_eq!(
        node(&delta, if_node).control_structure_type,
        Some(ControlStructureType::If)
    );

    let equals = call_named(&delta, operators::EQUALS);
    assert!(has_edge(&delta, if_node, equals, EdgeLabel::Ast));
    assert!(has_edge(&delta, if_node, equals, EdgeLabel::Condition));

    let left = ast_child_at(&delta, equals, 1);
    let right = ast_child_at(&delta, equals, 2);
    assert_eq!(node(&delta, left).kind, NodeKind::Identifier);
    assert_eq!(node(&delta, left).name, "x");
    assert_eq!(node(&delta, right).kind, NodeKind::Literal);
    assert_eq!(node(&delta, right).code, "0");
}

#[test]
fn test_condition_and_ast_share_one_target() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let if_node = only_node_of_kind(&delta, NodeKind::ControlStructure);
    let conditions = delta.out_neighbors(if_node, EdgeLabel::Condition);
    assert_eq!(conditions.len(), 1);
    assert!(has_edge(&delta, if_node, conditions[0], EdgeLabel::Ast));
    assert_eq!(node(&delta, conditions[0]).kind, NodeKind::Call);
}

#[test]
fn test_condition_internal_cfg() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let equals = call_named(&delta, operators::EQUALS);
    let left = ast_child_at(&delta, equals, 1);
    let right = ast_child_at(&delta, equals, 2);
    assert_cfg(&delta, left, right);
    assert_cfg(&delta, right, equals);
}

#[test]
fn test_condition_call_reaches_both_successors() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let equals = call_named(&delta, operators::EQUALS);

    // Fallthrough successor is the store `a = 1`, entered at its target
    // identifier; branch successor is the return.
    let store_target = identifiers_named(&delta, "a")
        .into_iter()
        .find(|&id| node(&delta, id).argument_index == 1)
        .expect("store target identifier");
    let ret = only_node_of_kind(&delta, NodeKind::Return);

    assert_cfg(&delta, equals, store_target);
    assert_cfg(&delta, equals, ret);
}

#[test]
fn test_method_cfg_enters_at_condition_left() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let equals = call_named(&delta, operators::EQUALS);
    let left = ast_child_at(&delta, equals, 1);
    let stub = world.stub(&method);
    assert_cfg(&delta, stub.method, left);
}

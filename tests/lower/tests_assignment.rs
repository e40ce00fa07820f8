//! Plain assignment: `int a; a = 5;`

use jcpg::cpg::{EdgeLabel, NodeKind, operators};

use crate::helpers::fixtures::{World, assignment_method};
use crate::helpers::graph_assert::{
    assert_cfg, ast_child_at, call_named, has_edge, node, only_node_of_kind,
};

#[test]
fn test_declares_one_local() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let local = only_node_of_kind(&delta, NodeKind::Local);
    let local_node = node(&delta, local);
    assert_eq!(local_node.name, "a");
    assert_eq!(local_node.type_full_name, "int");
}

#[test]
fn test_assignment_call_shape() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let assign = call_named(&delta, operators::ASSIGNMENT);
    assert_eq!(node(&delta, assign).code, "a = 5");

    let target = ast_child_at(&delta, assign, 1);
    let source = ast_child_at(&delta, assign, 2);
    let target_node = node(&delta, target);
    let source_node = node(&delta, source);

    assert_eq!(target_node.kind, NodeKind::Identifier);
    assert_eq!(target_node.name, "a");
    assert_eq!(source_node.kind, NodeKind::Literal);
    assert_eq!(source_node.code, "5");

    assert!(has_edge(&delta, assign, target, EdgeLabel::Argument));
    assert!(has_edge(&delta, assign, source, EdgeLabel::Argument));
}

#[test]
fn test_assignment_internal_cfg() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let assign = call_named(&delta, operators::ASSIGNMENT);
    let target = ast_child_at(&delta, assign, 1);
    let source = ast_child_at(&delta, assign, 2);

    // IDENTIFIER → LITERAL → assignment call
    assert_cfg(&delta, target, source);
    assert_cfg(&delta, source, assign);
}

#[test]
fn test_statement_hangs_off_entry_block() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let block = world.stub(&method).body_block.unwrap();
    let assign = call_named(&delta, operators::ASSIGNMENT);
    assert!(has_edge(&delta, block, assign, EdgeLabel::Ast));

    let local = only_node_of_kind(&delta, NodeKind::Local);
    assert!(has_edge(&delta, block, local, EdgeLabel::Ast));
}

#[test]
fn test_method_cfg_enters_at_assignment_target() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let assign = call_named(&delta, operators::ASSIGNMENT);
    let target = ast_child_at(&delta, assign, 1);
    let stub = world.stub(&method);
    assert_cfg(&delta, stub.method, target);
}

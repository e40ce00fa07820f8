//! Field stores: `this.f = y;` and `App.S = y;`

use jcpg::cpg::{EdgeLabel, NodeKind, operators};

use crate::helpers::fixtures::{CLASS, World, field_store_method, static_field_store_method};
use crate::helpers::graph_assert::{ast_child_at, call_named, has_edge, node};

#[test]
fn test_instance_field_store_shape() {
    let world = World::new();
    let method = field_store_method();
    let delta = world.lower(&method);

    let assign = call_named(&delta, operators::ASSIGNMENT);
    let access = ast_child_at(&delta, assign, 1);
    assert_eq!(node(&delta, access).name, operators::FIELD_ACCESS);
    assert_eq!(node(&delta, access).kind, NodeKind::Call);

    let base = ast_child_at(&delta, access, 1);
    let field = ast_child_at(&delta, access, 2);
    let base_node = node(&delta, base);
    let field_node = node(&delta, field);
    assert_eq!(base_node.kind, NodeKind::Identifier);
    assert_eq!(base_node.name, "this");
    assert_eq!(field_node.kind, NodeKind::FieldIdentifier);
    assert_eq!(field_node.canonical_name, "<example.App: int f>");
    assert!(has_edge(&delta, access, base, EdgeLabel::Argument));
    assert!(has_edge(&delta, access, field, EdgeLabel::Argument));

    let source = ast_child_at(&delta, assign, 2);
    let source_node = node(&delta, source);
    assert_eq!(source_node.kind, NodeKind::Identifier);
    assert_eq!(source_node.name, "y");
    assert_eq!(source_node.argument_index, 2);
}

#[test]
fn test_static_field_base_is_declaring_class() {
    let world = World::new();
    let method = static_field_store_method();
    let delta = world.lower(&method);

    let access = call_named(&delta, operators::FIELD_ACCESS);
    let base = ast_child_at(&delta, access, 1);
    let base_node = node(&delta, base);
    assert_eq!(base_node.kind, NodeKind::Identifier);
    assert_eq!(base_node.name, CLASS);

    let field = ast_child_at(&delta, access, 2);
    assert_eq!(node(&delta, field).canonical_name, "<example.App: int S>");
}

#[test]
fn test_field_store_cfg_threads_through_access_call() {
    let world = World::new();
    let method = field_store_method();
    let delta = world.lower(&method);

    let assign = call_named(&delta, operators::ASSIGNMENT);
    let access = ast_child_at(&delta, assign, 1);
    let source = ast_child_at(&delta, assign, 2);

    // left root → right entry → assignment
    assert!(has_edge(&delta, access, source, EdgeLabel::Cfg));
    assert!(has_edge(&delta, source, assign, EdgeLabel::Cfg));
}

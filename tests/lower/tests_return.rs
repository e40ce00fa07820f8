//! Returns: value and void.

use jcpg::cpg::{EdgeLabel, NodeKind};

use crate::helpers::fixtures::{World, assignment_method, return_int_method};
use crate::helpers::graph_assert::{assert_cfg, has_edge, identifiers_named, node, only_node_of_kind};

#[test]
fn test_return_value_shape() {
    let world = World::new();
    let method = return_int_method();
    let delta = world.lower(&method);

    let ret = only_node_of_kind(&delta, NodeKind::Return);
    assert_eq!(node(&delta, ret).code, "return a");

    // The operand identifier is AST and ARGUMENT child of the return.
    let children = delta.out_neighbors(ret, EdgeLabel::Ast);
    assert_eq!(children.len(), 1);
    let operand = children[0];
    assert_eq!(node(&delta, operand).kind, NodeKind::Identifier);
    assert_eq!(node(&delta, operand).name, "a");
    assert!(has_edge(&delta, ret, operand, EdgeLabel::Argument));

    // operand → RETURN → METHOD_RETURN
    assert_cfg(&delta, operand, ret);
    let stub = world.stub(&method);
    assert_cfg(&delta, ret, stub.method_return.unwrap());
}

#[test]
fn test_return_hangs_off_entry_block() {
    let world = World::new();
    let method = return_int_method();
    let delta = world.lower(&method);

    let ret = only_node_of_kind(&delta, NodeKind::Return);
    let block = world.stub(&method).body_block.unwrap();
    assert!(has_edge(&delta, block, ret, EdgeLabel::Ast));
}

#[test]
fn test_return_has_single_cfg_successor() {
    let world = World::new();
    let method = return_int_method();
    let delta = world.lower(&method);

    let ret = only_node_of_kind(&delta, NodeKind::Return);
    let stub = world.stub(&method);
    assert_eq!(
        delta.out_neighbors(ret, EdgeLabel::Cfg),
        vec![stub.method_return.unwrap()]
    );
}

#[test]
fn test_return_void_targets_method_return() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let ret = only_node_of_kind(&delta, NodeKind::Return);
    let stub = world.stub(&method);
    assert_eq!(
        delta.out_neighbors(ret, EdgeLabel::Cfg),
        vec![stub.method_return.unwrap()]
    );
    // A void return carries no operand.
    assert!(delta.out_neighbors(ret, EdgeLabel::Ast).is_empty());
}

#[test]
fn test_return_operand_identifier_refs_local() {
    let world = World::new();
    let method = return_int_method();
    let delta = world.lower(&method);

    let local = only_node_of_kind(&delta, NodeKind::Local);
    for ident in identifiers_named(&delta, "a") {
        assert!(has_edge(&delta, ident, local, EdgeLabel::Ref));
    }
}

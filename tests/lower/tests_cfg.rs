//! CFG threading between statements.

use jcpg::cpg::{EdgeLabel, NodeKind, operators};

use crate::helpers::fixtures::{
    World, array_store_method, assignment_method, goto_method, if_method, invoke_static_method,
};
use crate::helpers::graph_assert::{assert_cfg, ast_child_at, call_named, calls_named, node, only_node_of_kind};

#[test]
fn test_method_points_at_every_head_entry() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let stub = world.stub(&method);
    let entries = delta.out_neighbors(stub.method, EdgeLabel::Cfg);
    // One head: the if statement, entered at its condition's left
    // operand.
    let equals = call_named(&delta, operators::EQUALS);
    let left = ast_child_at(&delta, equals, 1);
    assert_eq!(entries, vec![left]);
}

#[test]
fn test_goto_reaches_its_successor() {
    let world = World::new();
    let method = goto_method();
    let delta = world.lower(&method);

    let goto = only_node_of_kind(&delta, NodeKind::ControlStructure);
    let ret = only_node_of_kind(&delta, NodeKind::Return);
    assert_cfg(&delta, goto, ret);

    let stub = world.stub(&method);
    assert_cfg(&delta, stub.method, goto);
}

#[test]
fn test_array_store_is_entered_at_index_access() {
    let world = World::new();
    let method = array_store_method();
    let delta = world.lower(&method);

    // Predecessor `i = 0` must thread into the `indexAccess` call of
    // the following array store, not the store's association entry.
    let init = calls_named(&delta, operators::ASSIGNMENT)
        .into_iter()
        .find(|&call| node(&delta, call).code == "i = 0")
        .expect("init assignment");
    let access = call_named(&delta, operators::INDEX_ACCESS);
    assert_cfg(&delta, init, access);
}

#[test]
fn test_array_store_internal_shape() {
    let world = World::new();
    let method = array_store_method();
    let delta = world.lower(&method);

    let access = call_named(&delta, operators::INDEX_ACCESS);
    let base = ast_child_at(&delta, access, 1);
    let index = ast_child_at(&delta, access, 2);
    assert_eq!(node(&delta, base).name, "a");
    assert_eq!(node(&delta, index).name, "i");

    // base → index → indexAccess, then on to the stored value and the
    // assignment itself.
    assert_cfg(&delta, base, index);
    assert_cfg(&delta, index, access);

    let store = calls_named(&delta, operators::ASSIGNMENT)
        .into_iter()
        .find(|&call| node(&delta, call).code == "a[i] = x")
        .expect("store assignment");
    let value = ast_child_at(&delta, store, 2);
    assert_eq!(node(&delta, value).name, "x");
    assert_cfg(&delta, access, value);
    assert_cfg(&delta, value, store);
}

#[test]
fn test_assignment_chain_between_statements() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    // assignment call → following return
    let assign = call_named(&delta, operators::ASSIGNMENT);
    let ret = only_node_of_kind(&delta, NodeKind::Return);
    assert_cfg(&delta, assign, ret);
}

#[test]
fn test_invoke_statement_threads_from_call_node() {
    let world = World::new();
    let method = invoke_static_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "max");
    let ret = only_node_of_kind(&delta, NodeKind::Return);
    assert_cfg(&delta, call, ret);
}

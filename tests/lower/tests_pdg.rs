//! PDG edges: REF and re-asserted ARGUMENT.

use jcpg::cpg::{CpgStore, EdgeLabel, NodeKind, operators};

use crate::helpers::fixtures::{World, assignment_method, binop_method, if_method, invoke_static_method};
use crate::helpers::graph_assert::{ast_child_at, call_named, identifiers_named, node, only_node_of_kind};

#[test]
fn test_identifier_refs_its_local_exactly_once() {
    let world = World::new();
    let method = assignment_method();
    let delta = world.lower(&method);

    let local = only_node_of_kind(&delta, NodeKind::Local);
    let idents = identifiers_named(&delta, "a");
    assert_eq!(idents.len(), 1);
    assert_eq!(delta.out_neighbors(idents[0], EdgeLabel::Ref), vec![local]);
}

#[test]
fn test_every_use_site_refs_the_same_local() {
    let world = World::new();
    let method = binop_method();
    let delta = world.lower(&method);

    let locals = delta.nodes_of_kind(NodeKind::Local);
    let b_local = locals
        .iter()
        .copied()
        .find(|&id| node(&delta, id).name == "b")
        .unwrap();
    // `b` is defined once and returned once.
    let idents = identifiers_named(&delta, "b");
    assert_eq!(idents.len(), 2);
    for ident in idents {
        assert_eq!(delta.out_neighbors(ident, EdgeLabel::Ref), vec![b_local]);
    }
}

#[test]
fn test_invocation_arguments_are_reasserted() {
    let world = World::new();
    let method = invoke_static_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "max");
    let first = ast_child_at(&delta, call, 1);
    let second = ast_child_at(&delta, call, 2);

    // Construction-time edges plus the PDG re-assertion: physical
    // duplicates stay in the log.
    let args = delta.out_neighbors(call, EdgeLabel::Argument);
    assert_eq!(args.len(), 4);
    assert_eq!(args.iter().filter(|&&a| a == first).count(), 2);
    assert_eq!(args.iter().filter(|&&a| a == second).count(), 2);

    // A consumer collapses them on apply.
    let mut store = CpgStore::new();
    store.apply(&delta);
    let mut deduped = store.out_neighbors(call, EdgeLabel::Argument);
    deduped.sort_unstable();
    let mut expected = vec![first, second];
    expected.sort_unstable();
    assert_eq!(deduped, expected);
}

#[test]
fn test_condition_arguments_are_reasserted_idempotently() {
    let world = World::new();
    let method = if_method();
    let delta = world.lower(&method);

    let equals = call_named(&delta, operators::EQUALS);
    let left = ast_child_at(&delta, equals, 1);
    let right = ast_child_at(&delta, equals, 2);

    // Re-assertion targets exactly the construction-time argument set.
    let mut targets = delta.out_neighbors(equals, EdgeLabel::Argument);
    targets.sort_unstable();
    targets.dedup();
    let mut expected = vec![left, right];
    expected.sort_unstable();
    assert_eq!(targets, expected);
}

//! Parallel lowering over the shared indices.

use std::collections::HashSet;

use jcpg::cpg::NodeId;
use jcpg::ir::Method;
use jcpg::lower_methods;
use once_cell::sync::Lazy;

use crate::helpers::fixtures::{
    World, assignment_method, if_method, invoke_static_method, return_int_method,
};

static METHODS: Lazy<Vec<Method>> = Lazy::new(|| {
    vec![
        assignment_method(),
        if_method(),
        invoke_static_method(),
        return_int_method(),
    ]
});

#[test]
fn test_parallel_lowering_yields_one_delta_per_method() {
    let world = World::new();
    for method in METHODS.iter() {
        world.register(method);
    }

    let deltas = lower_methods(&METHODS, &world.ctx());
    assert_eq!(deltas.len(), METHODS.len());
    for delta in &deltas {
        assert!(!delta.is_empty());
    }
}

#[test]
fn test_parallel_lowering_never_reuses_node_ids() {
    let world = World::new();
    for method in METHODS.iter() {
        world.register(method);
    }

    let deltas = lower_methods(&METHODS, &world.ctx());
    let mut seen: HashSet<NodeId> = HashSet::new();
    for delta in &deltas {
        for (id, _) in delta.nodes() {
            assert!(seen.insert(id), "node id {id} appeared in two deltas");
        }
    }
}

#[test]
fn test_parallel_call_index_collects_all_sites() {
    let world = World::new();
    let methods = vec![invoke_static_method(), invoke_static_method()];
    // Same shape, distinct full names are not needed: both register
    // under one name, the second stub replacing the first. The call
    // index still records one site per lowering.
    for method in &methods {
        world.register(method);
    }
    let _deltas = lower_methods(&methods, &world.ctx());
    assert_eq!(world.calls.len(), 2);
}

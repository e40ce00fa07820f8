//! Failure policies: unknown shapes and missing stubs degrade, never
//! abort.

use jcpg::cpg::{EdgeLabel, NodeKind, operators};
use jcpg::ir::{Method, StmtKind, ValueKind};
use jcpg::{SourcePos, lower_method};

use crate::helpers::fixtures::{CLASS, World, assignment_method};
use crate::helpers::graph_assert::{call_named, node, only_node_of_kind};

/// A statement kind outside the closed set contributes no AST but the
/// rest of the body still lowers.
#[test]
fn test_unknown_statement_is_skipped() {
    let mut m = Method::new(CLASS, "odd", "void");
    let weird = m.body.add_stmt(
        StmtKind::Other {
            code: "breakpoint".into(),
        },
        SourcePos::new(3, 0),
    );
    let ret = m.body.add_stmt(StmtKind::ReturnVoid, SourcePos::new(4, 0));
    m.stmt_order = vec![weird, ret];
    m.graph.add_head(weird);
    m.graph.add_edge(weird, ret);

    let world = World::new();
    let delta = world.lower(&m);

    assert!(delta.nodes_of_kind(NodeKind::Unknown).is_empty());
    let ret_node = only_node_of_kind(&delta, NodeKind::Return);
    let stub = world.stub(&m);
    // The skipped head has no entry node, so the method has no CFG
    // edge out; the return still reaches the method-return stub.
    assert!(delta.out_neighbors(stub.method, EdgeLabel::Cfg).is_empty());
    assert_eq!(
        delta.out_neighbors(ret_node, EdgeLabel::Cfg),
        vec![stub.method_return.unwrap()]
    );
}

/// A value kind outside the closed set lowers to `UNKNOWN`.
#[test]
fn test_unknown_value_lowers_to_unknown_node() {
    let mut m = Method::new(CLASS, "oddValue", "void");
    let a = m.body.add_local("a", "int");
    let lhs = m.body.local_value(a);
    let rhs = m.body.add_value(
        ValueKind::Other {
            code: "phi(a, b)".into(),
        },
        "int",
    );
    let store = m
        .body
        .add_stmt(StmtKind::Assign { left: lhs, right: rhs }, SourcePos::new(3, 0));
    let ret = m.body.add_stmt(StmtKind::ReturnVoid, SourcePos::new(4, 0));
    m.stmt_order = vec![store, ret];
    m.graph.add_head(store);
    m.graph.add_edge(store, ret);

    let world = World::new();
    let delta = world.lower(&m);

    let unknown = only_node_of_kind(&delta, NodeKind::Unknown);
    assert_eq!(node(&delta, unknown).code, "phi(a, b)");
    let assign = call_named(&delta, operators::ASSIGNMENT);
    assert!(delta.out_neighbors(assign, EdgeLabel::Ast).contains(&unknown));
}

/// Without a registered stub the body still lowers; only the edges that
/// need skeleton nodes are skipped.
#[test]
fn test_missing_stub_degrades_gracefully() {
    let world = World::new();
    let method = assignment_method();
    // Deliberately no `register` call.
    let delta = lower_method(&method, &world.ctx());

    assert_eq!(delta.nodes_of_kind(NodeKind::Local).len(), 1);
    let assign = call_named(&delta, operators::ASSIGNMENT);
    assert!(delta.node(assign).is_some());

    // No block, method, or method-return edges anywhere.
    assert!(delta.edges().all(|(_, _, label)| label != EdgeLabel::Contains));
    let ret = only_node_of_kind(&delta, NodeKind::Return);
    assert!(delta.out_neighbors(ret, EdgeLabel::Cfg).is_empty());
}

/// A stub without a body block skips AST attachment but keeps lowering.
#[test]
fn test_stub_without_block_skips_block_edges() {
    use jcpg::index::MethodStub;

    let world = World::new();
    let method = assignment_method();
    let stub = MethodStub {
        method: world.ids.next_id(),
        body_block: None,
        method_return: None,
        parameters: Vec::new(),
    };
    let method_node = stub.method;
    world.methods.register(&method.full_name(), stub);
    let delta = lower_method(&method, &world.ctx());

    // Containment still runs from the method node.
    assert!(!delta.out_neighbors(method_node, EdgeLabel::Contains).is_empty());
    // But nothing could attach to a block.
    let assign = call_named(&delta, operators::ASSIGNMENT);
    assert!(delta.in_neighbors(assign, EdgeLabel::Ast).is_empty());
}

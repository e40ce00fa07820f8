//! Invocations: static, virtual (receiver), and dynamic dispatch.

use jcpg::cpg::{DispatchType, EdgeLabel, NodeKind};

use crate::helpers::fixtures::{
    World, invoke_dynamic_method, invoke_static_method, invoke_virtual_method,
};
use crate::helpers::graph_assert::{
    assert_cfg, ast_child_at, call_named, has_edge, node, only_node_of_kind,
};

#[test]
fn test_static_invocation_call_shape() {
    let world = World::new();
    let method = invoke_static_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "max");
    let call_node = node(&delta, call);
    assert_eq!(call_node.method_full_name, "java.lang.Math.max:int(int,int)");
    assert_eq!(call_node.signature, "int(int,int)");
    assert_eq!(call_node.dispatch_type, Some(DispatchType::Static));
    assert_eq!(call_node.type_full_name, "int");

    let first = ast_child_at(&delta, call, 1);
    let second = ast_child_at(&delta, call, 2);
    assert_eq!(node(&delta, first).code, "3");
    assert_eq!(node(&delta, second).code, "4");
    assert!(has_edge(&delta, call, first, EdgeLabel::Argument));
    assert!(has_edge(&delta, call, second, EdgeLabel::Argument));
}

#[test]
fn test_static_invocation_has_no_receiver() {
    let world = World::new();
    let method = invoke_static_method();
    let delta = world.lower(&method);

    assert!(delta.edges().all(|(_, _, label)| label != EdgeLabel::Receiver));
}

#[test]
fn test_virtual_invocation_receiver() {
    let world = World::new();
    let method = invoke_virtual_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "append");
    assert_eq!(node(&delta, call).dispatch_type, Some(DispatchType::Dynamic));

    let receivers = delta.out_neighbors(call, EdgeLabel::Receiver);
    assert_eq!(receivers.len(), 1);
    let receiver = receivers[0];
    let receiver_node = node(&delta, receiver);
    assert_eq!(receiver_node.kind, NodeKind::Identifier);
    assert_eq!(receiver_node.name, "sb");
    assert_eq!(receiver_node.argument_index, 0);
    assert!(has_edge(&delta, call, receiver, EdgeLabel::Argument));
    assert!(has_edge(&delta, call, receiver, EdgeLabel::Ast));
}

#[test]
fn test_dynamic_invocation_bootstrap_args() {
    let world = World::new();
    let method = invoke_dynamic_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "makeConcat");
    assert_eq!(node(&delta, call).dispatch_type, Some(DispatchType::Dynamic));

    // The bootstrap argument takes the first free argument slot.
    let bootstrap = ast_child_at(&delta, call, 1);
    assert_eq!(node(&delta, bootstrap).kind, NodeKind::Literal);
    assert!(has_edge(&delta, call, bootstrap, EdgeLabel::Argument));
}

#[test]
fn test_method_cfg_enters_at_call() {
    let world = World::new();
    let method = invoke_static_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "max");
    let stub = world.stub(&method);
    assert_cfg(&delta, stub.method, call);

    // Control continues from the call to the following return.
    let ret = only_node_of_kind(&delta, NodeKind::Return);
    assert_cfg(&delta, call, ret);
}

#[test]
fn test_call_lands_in_call_index() {
    let world = World::new();
    let method = invoke_static_method();
    let delta = world.lower(&method);

    let call = call_named(&delta, "max");
    let sites = world.calls.calls_in(&method.full_name());
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].call, call);
}

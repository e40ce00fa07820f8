//! The PDG pass.
//!
//! Adds edges only. REF edges connect every identifier to the
//! declaration it names (the first `LOCAL` or `METHOD_PARAMETER_IN` in
//! its association); ARGUMENT edges are re-asserted for if-conditions
//! and invocation statements. The re-assertion duplicates edges already
//! emitted at call construction; the delta-log contract leaves dedup to
//! the consumer.

use tracing::trace;

use crate::cpg::{EdgeLabel, NodeKind};
use crate::ir::{StmtKind, ValueKind};

use super::assoc::IrKey;
use super::error::LowerError;
use super::MethodLowering;

pub(super) fn run(l: &mut MethodLowering<'_>) {
    let method = l.method;

    // Identity references bound by the head statements.
    for &head in method.graph.heads() {
        for value in method.body.stmt(head).kind.use_values() {
            let key = match &method.body.value(value).kind {
                ValueKind::Local(local) => IrKey::Local(*local),
                _ => IrKey::Value(value),
            };
            emit_ref_edges(l, key);
        }
    }

    // Declared body locals.
    for (local, _) in method.body.locals() {
        emit_ref_edges(l, IrKey::Local(local));
    }

    for &stmt in &method.stmt_order {
        match l.body().stmt(stmt).kind {
            StmtKind::If { condition, .. } => reassert_arguments(l, IrKey::Value(condition)),
            StmtKind::Invoke { expr } => reassert_arguments(l, IrKey::Value(expr)),
            _ => {}
        }
    }
}

/// `identifier -REF→ declaration` for every identifier recorded under
/// `key`.
fn emit_ref_edges(l: &mut MethodLowering<'_>, key: IrKey) {
    let nodes = l.assoc.get(key).to_vec();
    let Some(target) = nodes.iter().copied().find(|&node| {
        matches!(
            l.node_kind(node),
            Some(NodeKind::Local | NodeKind::MethodParameterIn)
        )
    }) else {
        trace!("{}", LowerError::MissingAssociation(format!("{key:?}")));
        return;
    };
    for node in nodes {
        if l.node_kind(node) == Some(NodeKind::Identifier) {
            l.edge(node, target, EdgeLabel::Ref);
        }
    }
}

/// `call -ARGUMENT→ n` for every other node associated with the same
/// expression.
fn reassert_arguments(l: &mut MethodLowering<'_>, key: IrKey) {
    let nodes = l.assoc.get(key).to_vec();
    let Some(call) = nodes
        .iter()
        .copied()
        .find(|&node| l.node_kind(node) == Some(NodeKind::Call))
    else {
        return;
    };
    for node in nodes {
        if node != call {
            l.edge(call, node, EdgeLabel::Argument);
        }
    }
}

//! The CFG pass.
//!
//! Adds edges only. The method node points at every head statement's
//! entry node, then each statement threads control to its successors
//! under a kind-specific rule. Entry nodes come from association index
//! 0, which the AST pass arranged per statement kind; intra-expression
//! edges were already emitted during expression lowering.
//!
//! A missing association (e.g. a successor whose lowering was skipped)
//! silently drops the edge.

use tracing::trace;

use crate::cpg::{EdgeLabel, NodeId, NodeKind, operators};
use crate::ir::{StmtId, StmtKind, ValueKind};

use super::error::LowerError;
use super::MethodLowering;

pub(super) fn run(l: &mut MethodLowering<'_>) {
    let method = l.method;

    if let Some(method_node) = l.method_node() {
        for &head in method.graph.heads() {
            match entry_of(l, head) {
                Some(entry) => l.edge(method_node, entry, EdgeLabel::Cfg),
                None => trace!(
                    "{}",
                    LowerError::MissingAssociation(format!("head statement {head:?}"))
                ),
            }
        }
    }

    for &stmt in &method.stmt_order {
        thread_stmt(l, stmt);
    }
}

fn thread_stmt(l: &mut MethodLowering<'_>, stmt: StmtId) {
    let method = l.method;
    let succs = method.graph.succs_of(stmt);
    match &l.body().stmt(stmt).kind {
        // Control leaves an if at its condition call.
        StmtKind::If { .. } => {
            let Some(source) = first_of_kind(l, stmt, NodeKind::Call) else {
                trace!(
                    "{}",
                    LowerError::MissingAssociation(format!("if statement {stmt:?}"))
                );
                return;
            };
            for &succ in succs {
                if let Some(entry) = entry_of(l, succ) {
                    l.edge(source, entry, EdgeLabel::Cfg);
                }
            }
        }
        StmtKind::LookupSwitch {
            lookups,
            targets,
            default,
            ..
        } => {
            let cases: Vec<(i64, StmtId)> = lookups
                .iter()
                .copied()
                .zip(targets.iter().copied())
                .collect();
            thread_switch(l, stmt, &cases, *default);
        }
        StmtKind::TableSwitch {
            targets, default, ..
        } => {
            let cases: Vec<(i64, StmtId)> = targets
                .iter()
                .copied()
                .enumerate()
                .map(|(ordinal, target)| (ordinal as i64, target))
                .collect();
            thread_switch(l, stmt, &cases, *default);
        }
        // Both return kinds run to the method-return stub and nowhere else.
        StmtKind::Return { .. } | StmtKind::ReturnVoid => {
            let Some(ret) = first_of_kind(l, stmt, NodeKind::Return) else {
                return;
            };
            match l.method_return() {
                Some(method_return) => l.edge(ret, method_return, EdgeLabel::Cfg),
                None => trace!(
                    "{}",
                    LowerError::MissingMethodStub {
                        method: l.full_name.clone(),
                        part: "METHOD_RETURN",
                    }
                ),
            }
        }
        StmtKind::Identity { .. } | StmtKind::Assign { .. } => {
            let Some(source) = assignment_call(l, stmt) else {
                trace!(
                    "{}",
                    LowerError::MissingAssociation(format!("assignment {stmt:?}"))
                );
                return;
            };
            for &succ in succs {
                if let Some(entry) = store_aware_entry(l, succ) {
                    l.edge(source, entry, EdgeLabel::Cfg);
                }
            }
        }
        // Control terminates at a throw.
        StmtKind::Throw { .. } => {}
        _ => {
            let Some(source) = entry_of(l, stmt) else {
                return;
            };
            for &succ in succs {
                if let Some(entry) = entry_of(l, succ) {
                    l.edge(source, entry, EdgeLabel::Cfg);
                }
            }
        }
    }
}

/// `cond → jumpTarget → target entry` for the default and every case
/// target distinct from it. Case jump targets are matched back by the
/// lookup value carried in `argument_index`, the default by name.
fn thread_switch(l: &mut MethodLowering<'_>, stmt: StmtId, cases: &[(i64, StmtId)], default: StmtId) {
    let Some(cond) = entry_of(l, stmt) else {
        trace!(
            "{}",
            LowerError::MissingAssociation(format!("switch statement {stmt:?}"))
        );
        return;
    };

    if let Some(jump) = find_jump_target(l, stmt, |name, _| name == "default") {
        l.edge(cond, jump, EdgeLabel::Cfg);
        if let Some(entry) = entry_of(l, default) {
            l.edge(jump, entry, EdgeLabel::Cfg);
        }
    }

    for &(value, target) in cases {
        if target == default {
            continue;
        }
        let Some(jump) = find_jump_target(l, stmt, |name, idx| name != "default" && idx == value as i32)
        else {
            continue;
        };
        l.edge(cond, jump, EdgeLabel::Cfg);
        if let Some(entry) = entry_of(l, target) {
            l.edge(jump, entry, EdgeLabel::Cfg);
        }
    }
}

/// Association index 0 of a statement.
fn entry_of(l: &MethodLowering<'_>, stmt: StmtId) -> Option<NodeId> {
    l.assoc.get(stmt).first().copied()
}

/// Entry of a successor as seen from an assignment: an array store is
/// entered at the `indexAccess` call on its left side, resolved through
/// the array-ref key.
fn store_aware_entry(l: &MethodLowering<'_>, succ: StmtId) -> Option<NodeId> {
    if let StmtKind::Identity { left, .. } | StmtKind::Assign { left, .. } =
        &l.body().stmt(succ).kind
    {
        if matches!(l.body().value(*left).kind, ValueKind::ArrayRef { .. }) {
            return l.assoc.get(*left).first().copied();
        }
    }
    entry_of(l, succ)
}

fn first_of_kind(l: &MethodLowering<'_>, stmt: StmtId, kind: NodeKind) -> Option<NodeId> {
    l.assoc
        .get(stmt)
        .iter()
        .copied()
        .find(|&node| l.node_kind(node) == Some(kind))
}

/// The `CALL(assignment)` within a statement's association. The left
/// side may itself be a call (field or index access), so kind alone is
/// not enough.
fn assignment_call(l: &MethodLowering<'_>, stmt: StmtId) -> Option<NodeId> {
    l.assoc.get(stmt).iter().copied().find(|&node| {
        l.builder
            .node(node)
            .is_some_and(|n| n.kind == NodeKind::Call && n.name == operators::ASSIGNMENT)
    })
}

fn find_jump_target(
    l: &MethodLowering<'_>,
    stmt: StmtId,
    matches: impl Fn(&str, i32) -> bool,
) -> Option<NodeId> {
    l.assoc.get(stmt).iter().copied().find(|&node| {
        l.builder.node(node).is_some_and(|n| {
            n.kind == NodeKind::JumpTarget && matches(&n.name, n.argument_index)
        })
    })
}

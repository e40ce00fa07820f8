//! The AST pass.
//!
//! Builds the method's parameter and local declarations, then dispatches
//! over the body statements in textual order, emitting each statement's
//! node shape and recording the produced nodes in the association map.
//! The later passes only read that map; nothing here may depend on CFG
//! or PDG state.

use tracing::warn;

use crate::cpg::{ControlStructureType, EdgeLabel, EvaluationStrategy, NodeId, operators};
use crate::index::evaluation_strategy;
use crate::ir::{StmtId, StmtKind, ValueId, ValueKind, identity_ref_name};

use super::error::LowerError;
use super::expr;
use super::factory;
use super::MethodLowering;

pub(super) fn run(l: &mut MethodLowering<'_>) {
    build_parameters(l);
    build_locals(l);

    let method = l.method;
    for &stmt in &method.stmt_order {
        l.current_pos = l.body().stmt(stmt).pos;
        l.child_idx += 1;
        let idx = l.child_idx;
        lower_stmt(l, stmt, idx);
    }
}

/// Parameter pre-pass.
///
/// One `METHOD_PARAMETER_IN` per parameter local, paired with a
/// `METHOD_PARAMETER_OUT` when the classifier says by-reference. The
/// nodes hang off the method via AST and are persisted into the stub so
/// they count as stub-owned in the containment sweep.
fn build_parameters(l: &mut MethodLowering<'_>) {
    let method = l.method;
    let mut param_nodes = Vec::new();
    for (i, &param) in method.params.iter().enumerate() {
        let idx = (i + 1) as i32;
        let data = l.body().local(param);
        let strategy = evaluation_strategy(&data.type_full_name, false);
        let p_in = l.emit(factory::parameter_in(
            data.name.clone(),
            idx,
            data.type_full_name.clone(),
            strategy,
            method.pos,
        ));
        if let Some(method_node) = l.method_node() {
            l.edge(method_node, p_in, EdgeLabel::Ast);
        }
        l.assoc.append(param, p_in);
        param_nodes.push(p_in);

        if strategy == EvaluationStrategy::ByReference {
            let p_out = l.emit(factory::parameter_out(
                data.name.clone(),
                idx,
                data.type_full_name.clone(),
                method.pos,
            ));
            if let Some(method_node) = l.method_node() {
                l.edge(method_node, p_out, EdgeLabel::Ast);
            }
            l.edge(p_in, p_out, EdgeLabel::ParameterLink);
            l.assoc.append(param, p_out);
            param_nodes.push(p_out);
        }
    }
    l.ctx.methods.store_parameters(&l.full_name, &param_nodes);
}

/// Locals pre-pass.
///
/// A `LOCAL` per declared body local, plus one per identity reference
/// found among the head statements' use boxes (named by stripping the
/// type suffix from its textual form). All hang off the entry block.
///
/// Runs after the parameter pre-pass so that for a parameter local the
/// first associated node is its `METHOD_PARAMETER_IN`, which is what
/// REF edges must target.
fn build_locals(l: &mut MethodLowering<'_>) {
    let method = l.method;
    for (local, data) in method.body.locals() {
        l.child_idx += 1;
        let node = l.emit(factory::local(
            data.name.clone(),
            data.type_full_name.clone(),
            l.child_idx,
        ));
        l.attach_to_block(node);
        l.assoc.append(local, node);
        l.locals.insert(data.name.clone(), node);
    }
    for &head in method.graph.heads() {
        for value in method.body.stmt(head).kind.use_values() {
            let data = l.body().value(value);
            if let ValueKind::IdentityRef { code } = &data.kind {
                l.child_idx += 1;
                let name = identity_ref_name(code);
                let node = l.emit(factory::local(
                    name,
                    data.type_full_name.clone(),
                    l.child_idx,
                ));
                l.attach_to_block(node);
                l.assoc.append(value, node);
                l.locals.insert(name.into(), node);
            }
        }
    }
}

fn lower_stmt(l: &mut MethodLowering<'_>, stmt: StmtId, idx: i32) {
    let kind = &l.body().stmt(stmt).kind;
    match kind {
        StmtKind::Identity { left, right } | StmtKind::Assign { left, right } => {
            lower_assignment(l, stmt, *left, *right, idx);
        }
        StmtKind::If { condition, .. } => lower_if(l, stmt, *condition, idx),
        StmtKind::Goto { .. } => lower_goto(l, stmt, idx),
        StmtKind::LookupSwitch {
            key,
            lookups,
            targets,
            default,
        } => {
            let cases: Vec<(i64, StmtId)> = lookups
                .iter()
                .copied()
                .zip(targets.iter().copied())
                .collect();
            lower_switch(l, stmt, *key, &cases, *default, idx);
        }
        StmtKind::TableSwitch {
            key,
            targets,
            default,
        } => {
            let cases: Vec<(i64, StmtId)> = targets
                .iter()
                .copied()
                .enumerate()
                .map(|(ordinal, target)| (ordinal as i64, target))
                .collect();
            lower_switch(l, stmt, *key, &cases, *default, idx);
        }
        StmtKind::Invoke { expr } => lower_invoke_stmt(l, stmt, *expr, idx),
        StmtKind::Return { value } => lower_return(l, stmt, *value, idx),
        StmtKind::ReturnVoid => lower_return_void(l, stmt, idx),
        StmtKind::Throw { value } | StmtKind::Monitor { value, .. } => {
            lower_unknown_unary(l, stmt, *value, idx);
        }
        StmtKind::Other { .. } => {
            warn!(
                "{}",
                LowerError::UnknownStatement(kind.kind_name().to_string())
            );
        }
    }
}

/// Identity and assignment statements: `CALL(assignment)` with the
/// lowered left side at argument index 1 and the right side at 2.
/// Association `[left, right, assignment]`, so a CFG predecessor enters
/// at the left side's root.
fn lower_assignment(l: &mut MethodLowering<'_>, stmt: StmtId, left: ValueId, right: ValueId, idx: i32) {
    let left_ty = l.body().value(left).type_full_name.clone();
    let assign = l.emit(factory::operator_call(
        operators::ASSIGNMENT,
        l.body().stmt_code(stmt),
        idx,
        left_ty,
        l.current_pos,
    ));
    l.attach_to_block(assign);

    let (left_root, _) = lower_assign_left(l, left);
    let (right_root, right_entry) = expr::lower_op(l, right, 2);

    l.edge(assign, left_root, EdgeLabel::Ast);
    l.edge(assign, left_root, EdgeLabel::Argument);
    l.edge(assign, right_root, EdgeLabel::Ast);
    l.edge(assign, right_root, EdgeLabel::Argument);
    l.edge(left_root, right_entry, EdgeLabel::Cfg);
    l.edge(right_root, assign, EdgeLabel::Cfg);

    l.assoc.append_all(stmt, &[left_root, right_root, assign]);
}

/// The assignable shapes: local, field ref, array ref. Anything else
/// degrades to `UNKNOWN`.
fn lower_assign_left(l: &mut MethodLowering<'_>, left: ValueId) -> (NodeId, NodeId) {
    let data = l.body().value(left);
    match &data.kind {
        ValueKind::Local(local) => {
            let node = expr::lower_local(l, *local, 1);
            (node, node)
        }
        ValueKind::StaticField(_) | ValueKind::InstanceField { .. } | ValueKind::ArrayRef { .. } => {
            expr::lower_op(l, left, 1)
        }
        other => {
            warn!("{}", LowerError::UnknownValue(other.kind_name().to_string()));
            let node = l.emit(factory::unknown(
                l.body().value_code(left),
                1,
                data.type_full_name.clone(),
                l.current_pos,
            ));
            (node, node)
        }
    }
}

/// If statements: the condition is both AST child and CONDITION target.
/// Association `[conditionEntry, conditionRoot, if]`, so a predecessor
/// enters at the condition's evaluation entry.
fn lower_if(l: &mut MethodLowering<'_>, stmt: StmtId, condition: ValueId, idx: i32) {
    let if_node = l.emit(factory::control_structure(
        ControlStructureType::If,
        l.body().stmt_code(stmt),
        idx,
        l.current_pos,
    ));
    l.attach_to_block(if_node);
    let (root, entry) = expr::lower_op(l, condition, 1);
    l.edge(if_node, root, EdgeLabel::Ast);
    l.edge(if_node, root, EdgeLabel::Condition);
    l.assoc.append_all(stmt, &[entry, root, if_node]);
}

fn lower_goto(l: &mut MethodLowering<'_>, stmt: StmtId, idx: i32) {
    let node = l.emit(factory::control_structure(
        ControlStructureType::Goto,
        l.body().stmt_code(stmt),
        idx,
        l.current_pos,
    ));
    l.attach_to_block(node);
    l.assoc.append(stmt, node);
}

/// Switch statements (both kinds): a `SWITCH` control structure whose
/// AST children are the condition and one `JUMP_TARGET` per case target
/// distinct from the default, plus the default target at argument index
/// `targets.len() + 2`. The condition is inserted at association index 0
/// after the switch is first recorded, so the CFG pass finds it there.
fn lower_switch(
    l: &mut MethodLowering<'_>,
    stmt: StmtId,
    key: ValueId,
    cases: &[(i64, StmtId)],
    default: StmtId,
    idx: i32,
) {
    let switch = l.emit(factory::control_structure(
        ControlStructureType::Switch,
        l.body().stmt_code(stmt),
        idx,
        l.current_pos,
    ));
    l.attach_to_block(switch);
    l.assoc.append(stmt, switch);

    let (root, _) = expr::lower_op(l, key, 1);
    l.edge(switch, root, EdgeLabel::Ast);
    l.edge(switch, root, EdgeLabel::Condition);

    let mut order = 1;
    for &(value, target) in cases {
        if target == default {
            continue;
        }
        order += 1;
        let target_pos = l.body().stmt(target).pos;
        let jump = l.emit(factory::jump_target(
            format!("case {value}"),
            value as i32,
            order,
            format!("case {value}:"),
            target_pos,
        ));
        l.edge(switch, jump, EdgeLabel::Ast);
        l.assoc.append(stmt, jump);
    }

    order += 1;
    let default_pos = l.body().stmt(default).pos;
    let default_jump = l.emit(factory::jump_target(
        "default",
        cases.len() as i32 + 2,
        order,
        "default:",
        default_pos,
    ));
    l.edge(switch, default_jump, EdgeLabel::Ast);
    l.assoc.append(stmt, default_jump);

    l.assoc.insert_at(stmt, &[root], 0);
}

/// Invocation statements: the whole lowered shape (call first) lands at
/// association index 0, so CFG threading finds the call directly from
/// the statement key.
fn lower_invoke_stmt(l: &mut MethodLowering<'_>, stmt: StmtId, expr: ValueId, idx: i32) {
    let (call, _) = expr::lower_op(l, expr, idx);
    l.attach_to_block(call);
    let produced = l.assoc.get(expr).to_vec();
    l.assoc.insert_at(stmt, &produced, 0);
}

/// Value returns: `RETURN` with the operand as AST+ARGUMENT child and an
/// operand → return CFG edge. Association `[operand, return]`.
fn lower_return(l: &mut MethodLowering<'_>, stmt: StmtId, value: ValueId, idx: i32) {
    let ret = l.emit(factory::return_node(
        l.body().stmt_code(stmt),
        idx,
        l.current_pos,
    ));
    l.attach_to_block(ret);
    let (root, _) = expr::lower_op(l, value, idx + 1);
    l.edge(ret, root, EdgeLabel::Ast);
    l.edge(ret, root, EdgeLabel::Argument);
    l.edge(root, ret, EdgeLabel::Cfg);
    l.assoc.append_all(stmt, &[root, ret]);
}

fn lower_return_void(l: &mut MethodLowering<'_>, stmt: StmtId, idx: i32) {
    let ret = l.emit(factory::return_node(
        l.body().stmt_code(stmt),
        idx,
        l.current_pos,
    ));
    l.attach_to_block(ret);
    l.assoc.append(stmt, ret);
}

/// Throw and monitor statements: an `UNKNOWN` of type `void` over the
/// lowered operand. The AST edge runs `unknown → operand`, kept verbatim
/// from the source model. Association `[unknown, operand]`, so the
/// default CFG rule reads the unknown at index 0.
fn lower_unknown_unary(l: &mut MethodLowering<'_>, stmt: StmtId, value: ValueId, idx: i32) {
    let (root, _) = expr::lower_op(l, value, idx);
    let unknown = l.emit(factory::unknown(
        l.body().stmt_code(stmt),
        idx,
        "void",
        l.current_pos,
    ));
    l.edge(root, unknown, EdgeLabel::Cfg);
    l.edge(unknown, root, EdgeLabel::Ast);
    l.attach_to_block(unknown);
    l.assoc.append_all(stmt, &[unknown, root]);
}

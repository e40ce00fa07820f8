//! Expression lowering.
//!
//! `lower_op` recursively converts a value into a node subgraph and
//! returns `(root, cfg_entry)`: the root is the node a parent hangs its
//! AST/ARGUMENT edges on, the entry is where control enters the
//! subgraph. Intra-expression CFG edges are emitted here, so callers
//! only thread control between statement roots.

use tracing::{trace, warn};

use crate::cpg::{DispatchType, EdgeLabel, NodeId, operators};
use crate::ir::{FieldSignature, InvokeExpr, LocalId, ValueId, ValueKind, identity_ref_name};

use super::error::LowerError;
use super::factory;
use super::MethodLowering;

/// Lower a value at child index `idx`, returning `(root, cfg_entry)`.
pub(super) fn lower_op(l: &mut MethodLowering<'_>, value: ValueId, idx: i32) -> (NodeId, NodeId) {
    let data = l.body().value(value);
    match &data.kind {
        ValueKind::Local(local) => {
            let node = lower_local(l, *local, idx);
            (node, node)
        }
        ValueKind::IdentityRef { code } => {
            let node = l.emit(factory::identifier(
                identity_ref_name(code),
                code.clone(),
                idx,
                data.type_full_name.clone(),
                l.current_pos,
            ));
            l.assoc.append(value, node);
            (node, node)
        }
        ValueKind::Constant { code } => {
            let node = l.emit(factory::literal(
                code.clone(),
                idx,
                data.type_full_name.clone(),
                l.current_pos,
            ));
            (node, node)
        }
        ValueKind::CaughtException => {
            let node = l.emit(factory::identifier(
                "@caughtexception",
                "@caughtexception",
                idx,
                data.type_full_name.clone(),
                l.current_pos,
            ));
            (node, node)
        }
        ValueKind::New | ValueKind::NewArray { .. } => {
            let node = l.emit(factory::type_ref(
                data.type_full_name.clone(),
                l.body().value_code(value),
                idx,
                l.current_pos,
            ));
            (node, node)
        }
        ValueKind::StaticField(field) => lower_field_access(l, value, None, field, idx),
        ValueKind::InstanceField { base, field } => {
            lower_field_access(l, value, Some(*base), field, idx)
        }
        ValueKind::Binop { op, left, right } => {
            lower_binop(l, value, operators::binop_name(*op), *left, *right, idx)
        }
        ValueKind::Condition { op, left, right } => {
            lower_binop(l, value, operators::cmp_name(*op), *left, *right, idx)
        }
        ValueKind::Cast { operand } => lower_unary(l, value, operators::CAST, *operand, idx),
        ValueKind::InstanceOf { operand, .. } => {
            lower_unary(l, value, operators::INSTANCE_OF, *operand, idx)
        }
        ValueKind::Length { operand } => lower_unary(l, value, operators::LENGTH_OF, *operand, idx),
        ValueKind::Neg { operand } => lower_unary(l, value, operators::MINUS, *operand, idx),
        ValueKind::ArrayRef { base, index } => lower_array_ref(l, value, *base, *index, idx),
        ValueKind::Invoke(expr) => lower_invoke(l, value, expr, idx),
        ValueKind::Other { .. } => {
            warn!("{}", LowerError::UnknownValue(data.kind.kind_name().to_string()));
            let node = l.emit(factory::unknown(
                l.body().value_code(value),
                idx,
                data.type_full_name.clone(),
                l.current_pos,
            ));
            (node, node)
        }
    }
}

/// Lower a use of a declared local to an `IDENTIFIER`, recording it
/// under the local's key so the PDG pass can attach its REF edge.
pub(super) fn lower_local(l: &mut MethodLowering<'_>, local: LocalId, idx: i32) -> NodeId {
    let data = l.body().local(local);
    let node = l.emit(factory::identifier(
        data.name.clone(),
        data.name.clone(),
        idx,
        data.type_full_name.clone(),
        l.current_pos,
    ));
    l.assoc.append(local, node);
    node
}

/// Field access: a `fieldAccess` call over the receiver (declaring
/// class for static fields, base local otherwise) and the canonical
/// field identifier. Both children are recorded under the field-ref key.
fn lower_field_access(
    l: &mut MethodLowering<'_>,
    value: ValueId,
    base: Option<ValueId>,
    field: &FieldSignature,
    idx: i32,
) -> (NodeId, NodeId) {
    let call = l.emit(factory::operator_call(
        operators::FIELD_ACCESS,
        l.body().value_code(value),
        idx,
        field.type_full_name.clone(),
        l.current_pos,
    ));
    let receiver = match base {
        Some(base) => lower_op(l, base, 1).0,
        None => l.emit(factory::identifier(
            field.declaring_class.clone(),
            field.declaring_class.clone(),
            1,
            field.declaring_class.clone(),
            l.current_pos,
        )),
    };
    let field_node = l.emit(factory::field_identifier(field.canonical(), 2, l.current_pos));
    l.edge(call, receiver, EdgeLabel::Ast);
    l.edge(call, receiver, EdgeLabel::Argument);
    l.edge(call, field_node, EdgeLabel::Ast);
    l.edge(call, field_node, EdgeLabel::Argument);
    l.assoc.append(value, receiver);
    l.assoc.append(value, field_node);
    (call, call)
}

/// Binary operators and conditions: `CALL(op)` over two children at
/// argument indices 1 and 2, with internal CFG `left → right → call`.
/// Call and operands are recorded under the expression key (call first),
/// which the PDG pass reads to re-assert the argument edges.
fn lower_binop(
    l: &mut MethodLowering<'_>,
    value: ValueId,
    name: &'static str,
    left: ValueId,
    right: ValueId,
    idx: i32,
) -> (NodeId, NodeId) {
    let (left_root, left_entry) = lower_op(l, left, 1);
    let (right_root, right_entry) = lower_op(l, right, 2);
    let ty = l.body().value(value).type_full_name.clone();
    let call = l.emit(factory::operator_call(
        name,
        l.body().value_code(value),
        idx,
        ty,
        l.current_pos,
    ));
    l.edge(call, left_root, EdgeLabel::Ast);
    l.edge(call, left_root, EdgeLabel::Argument);
    l.edge(call, right_root, EdgeLabel::Ast);
    l.edge(call, right_root, EdgeLabel::Argument);
    l.edge(left_root, right_entry, EdgeLabel::Cfg);
    l.edge(right_root, call, EdgeLabel::Cfg);
    l.assoc.append_all(value, &[call, left_root, right_root]);
    (call, left_entry)
}

/// Unary operators: `CALL(op)` over one child at argument index 1,
/// with internal CFG `child → call`.
fn lower_unary(
    l: &mut MethodLowering<'_>,
    value: ValueId,
    name: &'static str,
    operand: ValueId,
    idx: i32,
) -> (NodeId, NodeId) {
    let (child_root, child_entry) = lower_op(l, operand, 1);
    let ty = l.body().value(value).type_full_name.clone();
    let call = l.emit(factory::operator_call(
        name,
        l.body().value_code(value),
        idx,
        ty,
        l.current_pos,
    ));
    l.edge(call, child_root, EdgeLabel::Ast);
    l.edge(call, child_root, EdgeLabel::Argument);
    l.edge(child_root, call, EdgeLabel::Cfg);
    (call, child_entry)
}

/// Array access: an `indexAccess` call over `(base, index)` with the
/// binop shape. The call is recorded under the array-ref key so a CFG
/// predecessor of an array store can enter at the index evaluation.
fn lower_array_ref(
    l: &mut MethodLowering<'_>,
    value: ValueId,
    base: ValueId,
    index: ValueId,
    idx: i32,
) -> (NodeId, NodeId) {
    let (base_root, base_entry) = lower_op(l, base, 1);
    let (index_root, index_entry) = lower_op(l, index, 2);
    let ty = l.body().value(value).type_full_name.clone();
    let call = l.emit(factory::operator_call(
        operators::INDEX_ACCESS,
        l.body().value_code(value),
        idx,
        ty,
        l.current_pos,
    ));
    l.edge(call, base_root, EdgeLabel::Ast);
    l.edge(call, base_root, EdgeLabel::Argument);
    l.edge(call, index_root, EdgeLabel::Ast);
    l.edge(call, index_root, EdgeLabel::Argument);
    l.edge(base_root, index_entry, EdgeLabel::Cfg);
    l.edge(index_root, call, EdgeLabel::Cfg);
    l.assoc.insert_at(value, &[call], 0);
    (call, base_entry)
}

/// Invocation: a dispatched `CALL` with its arguments (bootstrap
/// arguments included for dynamic invokes) at indices 1..n and an
/// optional receiver at index 0. The call and its children are recorded
/// under the invocation key; the call also lands in the process-wide
/// call registry.
fn lower_invoke(
    l: &mut MethodLowering<'_>,
    value: ValueId,
    expr: &InvokeExpr,
    idx: i32,
) -> (NodeId, NodeId) {
    let dispatch = if expr.is_static_dispatch() {
        DispatchType::Static
    } else {
        DispatchType::Dynamic
    };
    let call = l.emit(factory::invoke_call(
        expr.name.clone(),
        l.body().value_code(value),
        expr.full_name(),
        expr.signature(),
        dispatch,
        idx,
        expr.return_type.clone(),
        l.current_pos,
    ));
    l.assoc.append(value, call);

    for (i, &arg) in expr.args.iter().chain(expr.bootstrap_args.iter()).enumerate() {
        let arg_idx = (i + 1) as i32;
        let arg_data = l.body().value(arg);
        let node = match &arg_data.kind {
            ValueKind::Local(local) => Some(lower_local(l, *local, arg_idx)),
            ValueKind::Constant { code } => Some(l.emit(factory::literal(
                code.clone(),
                arg_idx,
                arg_data.type_full_name.clone(),
                l.current_pos,
            ))),
            other => {
                trace!(
                    kind = other.kind_name(),
                    "argument shape not handled at the call layer; skipping"
                );
                None
            }
        };
        if let Some(node) = node {
            l.edge(call, node, EdgeLabel::Ast);
            l.edge(call, node, EdgeLabel::Argument);
            l.assoc.append(value, node);
        }
    }

    if let Some(receiver) = expr.receiver {
        let node = match &l.body().value(receiver).kind {
            ValueKind::Local(local) => lower_local(l, *local, 0),
            _ => lower_op(l, receiver, 0).0,
        };
        l.edge(call, node, EdgeLabel::Receiver);
        l.edge(call, node, EdgeLabel::Argument);
        l.edge(call, node, EdgeLabel::Ast);
        l.assoc.append(value, node);
    }

    l.ctx.calls.add(&l.full_name, value, call);
    (call, call)
}

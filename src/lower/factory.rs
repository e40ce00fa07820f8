//! Node factory.
//!
//! One constructor per produced node kind. Constructors only build the
//! property record; ids are assigned when the record is handed to the
//! delta builder.

use smol_str::SmolStr;

use crate::base::SourcePos;
use crate::cpg::{
    ControlStructureType, CpgNode, DispatchType, EvaluationStrategy, NodeKind,
};

pub(crate) fn identifier(
    name: impl Into<SmolStr>,
    code: impl Into<SmolStr>,
    idx: i32,
    ty: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        name: name.into(),
        code: code.into(),
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        ..CpgNode::new(NodeKind::Identifier)
    }
}

pub(crate) fn literal(
    code: impl Into<SmolStr>,
    idx: i32,
    ty: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        code: code.into(),
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        ..CpgNode::new(NodeKind::Literal)
    }
}

/// Operator call: `name` is one of the literal `<operator>.…` strings.
pub(crate) fn operator_call(
    name: &'static str,
    code: impl Into<SmolStr>,
    idx: i32,
    ty: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        name: SmolStr::new_static(name),
        code: code.into(),
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        method_full_name: SmolStr::new_static(name),
        dispatch_type: Some(DispatchType::Static),
        ..CpgNode::new(NodeKind::Call)
    }
}

/// Invocation call with resolved callee coordinates.
pub(crate) fn invoke_call(
    name: impl Into<SmolStr>,
    code: impl Into<SmolStr>,
    method_full_name: impl Into<SmolStr>,
    signature: impl Into<SmolStr>,
    dispatch_type: DispatchType,
    idx: i32,
    ty: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        name: name.into(),
        code: code.into(),
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        method_full_name: method_full_name.into(),
        signature: signature.into(),
        dispatch_type: Some(dispatch_type),
        ..CpgNode::new(NodeKind::Call)
    }
}

pub(crate) fn local(name: impl Into<SmolStr>, ty: impl Into<SmolStr>, order: i32) -> CpgNode {
    let name = name.into();
    CpgNode {
        code: name.clone(),
        name,
        order,
        type_full_name: ty.into(),
        ..CpgNode::new(NodeKind::Local)
    }
}

pub(crate) fn parameter_in(
    name: impl Into<SmolStr>,
    idx: i32,
    ty: impl Into<SmolStr>,
    strategy: EvaluationStrategy,
    pos: SourcePos,
) -> CpgNode {
    let name = name.into();
    CpgNode {
        code: name.clone(),
        name,
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        evaluation_strategy: Some(strategy),
        ..CpgNode::new(NodeKind::MethodParameterIn)
    }
}

/// Out-parameter counterpart of a by-reference in-parameter.
pub(crate) fn parameter_out(
    name: impl Into<SmolStr>,
    idx: i32,
    ty: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    let name = name.into();
    CpgNode {
        code: name.clone(),
        name,
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        evaluation_strategy: Some(EvaluationStrategy::BySharing),
        ..CpgNode::new(NodeKind::MethodParameterOut)
    }
}

pub(crate) fn control_structure(
    kind: ControlStructureType,
    code: impl Into<SmolStr>,
    idx: i32,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        code: code.into(),
        order: idx,
        argument_index: idx,
        pos,
        control_structure_type: Some(kind),
        ..CpgNode::new(NodeKind::ControlStructure)
    }
}

/// Case label; `argument_index` encodes the lookup value.
pub(crate) fn jump_target(
    name: impl Into<SmolStr>,
    argument_index: i32,
    order: i32,
    code: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        name: name.into(),
        code: code.into(),
        order,
        argument_index,
        pos,
        ..CpgNode::new(NodeKind::JumpTarget)
    }
}

pub(crate) fn field_identifier(canonical: impl Into<SmolStr>, idx: i32, pos: SourcePos) -> CpgNode {
    let canonical = canonical.into();
    CpgNode {
        code: canonical.clone(),
        canonical_name: canonical,
        order: idx,
        argument_index: idx,
        pos,
        ..CpgNode::new(NodeKind::FieldIdentifier)
    }
}

pub(crate) fn return_node(code: impl Into<SmolStr>, idx: i32, pos: SourcePos) -> CpgNode {
    CpgNode {
        code: code.into(),
        order: idx,
        argument_index: idx,
        pos,
        ..CpgNode::new(NodeKind::Return)
    }
}

/// Reference to a type as a value (allocation expressions).
pub(crate) fn type_ref(
    ty: impl Into<SmolStr>,
    code: impl Into<SmolStr>,
    idx: i32,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        code: code.into(),
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        ..CpgNode::new(NodeKind::TypeRef)
    }
}

pub(crate) fn unknown(
    code: impl Into<SmolStr>,
    idx: i32,
    ty: impl Into<SmolStr>,
    pos: SourcePos,
) -> CpgNode {
    CpgNode {
        code: code.into(),
        order: idx,
        argument_index: idx,
        type_full_name: ty.into(),
        pos,
        ..CpgNode::new(NodeKind::Unknown)
    }
}

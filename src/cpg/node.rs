//! CPG nodes and their property records.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use smol_str::SmolStr;

use crate::base::SourcePos;

/// Stable handle of a CPG node.
///
/// Ids are issued by [`IdGen`] and shared across stub nodes, type nodes,
/// and body nodes, so edges can cross all three without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u64);

impl NodeId {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Rebuild a handle from its raw value, e.g. when re-reading an
    /// exported delta. The caller is responsible for its validity.
    pub fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Process-wide node id source.
///
/// Cheap to clone (shared atomic counter); safe to use from parallel
/// method lowerings.
#[derive(Debug, Clone)]
pub struct IdGen {
    next: Arc<AtomicU64>,
}

impl IdGen {
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn next_id(&self) -> NodeId {
        NodeId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for IdGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Node kinds produced or referenced by the lowering core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Method,
    Block,
    MethodReturn,
    MethodParameterIn,
    MethodParameterOut,
    Local,
    Identifier,
    Literal,
    Call,
    ControlStructure,
    JumpTarget,
    FieldIdentifier,
    Return,
    TypeRef,
    Type,
    Unknown,
}

impl NodeKind {
    /// Schema label of the kind.
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::Method => "METHOD",
            NodeKind::Block => "BLOCK",
            NodeKind::MethodReturn => "METHOD_RETURN",
            NodeKind::MethodParameterIn => "METHOD_PARAMETER_IN",
            NodeKind::MethodParameterOut => "METHOD_PARAMETER_OUT",
            NodeKind::Local => "LOCAL",
            NodeKind::Identifier => "IDENTIFIER",
            NodeKind::Literal => "LITERAL",
            NodeKind::Call => "CALL",
            NodeKind::ControlStructure => "CONTROL_STRUCTURE",
            NodeKind::JumpTarget => "JUMP_TARGET",
            NodeKind::FieldIdentifier => "FIELD_IDENTIFIER",
            NodeKind::Return => "RETURN",
            NodeKind::TypeRef => "TYPE_REF",
            NodeKind::Type => "TYPE",
            NodeKind::Unknown => "UNKNOWN",
        }
    }
}

/// How a call resolves its callee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum DispatchType {
    Static,
    Dynamic,
}

impl DispatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            DispatchType::Static => "STATIC_DISPATCH",
            DispatchType::Dynamic => "DYNAMIC_DISPATCH",
        }
    }
}

/// Parameter-passing semantics, computed from the parameter's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationStrategy {
    ByValue,
    ByReference,
    BySharing,
}

impl EvaluationStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationStrategy::ByValue => "BY_VALUE",
            EvaluationStrategy::ByReference => "BY_REFERENCE",
            EvaluationStrategy::BySharing => "BY_SHARING",
        }
    }
}

/// Variant of a `CONTROL_STRUCTURE` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlStructureType {
    If,
    Switch,
    Goto,
}

impl ControlStructureType {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlStructureType::If => "IF",
            ControlStructureType::Switch => "SWITCH",
            ControlStructureType::Goto => "GOTO",
        }
    }
}

/// Property record of a CPG node.
///
/// The record is flat: every kind shares the common properties and
/// leaves the kind-specific ones at their defaults. `order` is the
/// 1-based AST sibling position; `argument_index` the call-argument
/// slot (0 is the receiver).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct CpgNode {
    pub kind: NodeKind,
    pub name: SmolStr,
    pub code: SmolStr,
    pub order: i32,
    pub argument_index: i32,
    pub type_full_name: SmolStr,
    pub pos: SourcePos,
    // Call properties
    pub method_full_name: SmolStr,
    pub signature: SmolStr,
    pub dispatch_type: Option<DispatchType>,
    // Parameter properties
    pub evaluation_strategy: Option<EvaluationStrategy>,
    // Control-structure properties
    pub control_structure_type: Option<ControlStructureType>,
    // Field-identifier properties
    pub canonical_name: SmolStr,
}

impl CpgNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: SmolStr::default(),
            code: SmolStr::default(),
            order: -1,
            argument_index: -1,
            type_full_name: SmolStr::default(),
            pos: SourcePos::NONE,
            method_full_name: SmolStr::default(),
            signature: SmolStr::default(),
            dispatch_type: None,
            evaluation_strategy: None,
            control_structure_type: None,
            canonical_name: SmolStr::default(),
        }
    }
}

impl Default for CpgNode {
    fn default() -> Self {
        Self::new(NodeKind::Unknown)
    }
}

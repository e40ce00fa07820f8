//! The closed set of statement shapes.

use smol_str::SmolStr;

use super::body::{StmtId, ValueId};

/// Direction of a monitor statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorOp {
    Enter,
    Exit,
}

/// The closed set of statement shapes.
///
/// Branch targets are statement handles into the same body; the actual
/// control-flow successors come from the precomputed [`BodyGraph`],
/// not from these fields.
///
/// [`BodyGraph`]: crate::ir::BodyGraph
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// Binds `this` or a parameter placeholder to a local:
    /// `l0 := @parameter0: int`.
    Identity { left: ValueId, right: ValueId },
    Assign { left: ValueId, right: ValueId },
    If {
        condition: ValueId,
        target: StmtId,
    },
    Goto { target: StmtId },
    LookupSwitch {
        key: ValueId,
        /// Literal lookup value per case target, parallel to `targets`.
        lookups: Vec<i64>,
        targets: Vec<StmtId>,
        default: StmtId,
    },
    TableSwitch {
        key: ValueId,
        targets: Vec<StmtId>,
        default: StmtId,
    },
    Invoke { expr: ValueId },
    Return { value: ValueId },
    ReturnVoid,
    Throw { value: ValueId },
    Monitor { op: MonitorOp, value: ValueId },
    /// Fallthrough for shapes outside the closed set.
    Other { code: SmolStr },
}

impl StmtKind {
    /// Short tag for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            StmtKind::Identity { .. } => "IdentityStmt",
            StmtKind::Assign { .. } => "AssignStmt",
            StmtKind::If { .. } => "IfStmt",
            StmtKind::Goto { .. } => "GotoStmt",
            StmtKind::LookupSwitch { .. } => "LookupSwitchStmt",
            StmtKind::TableSwitch { .. } => "TableSwitchStmt",
            StmtKind::Invoke { .. } => "InvokeStmt",
            StmtKind::Return { .. } => "ReturnStmt",
            StmtKind::ReturnVoid => "ReturnVoidStmt",
            StmtKind::Throw { .. } => "ThrowStmt",
            StmtKind::Monitor { .. } => "MonitorStmt",
            StmtKind::Other { .. } => "Other",
        }
    }

    /// The values this statement directly uses (its use boxes).
    ///
    /// The PDG pass scans these on head statements to find identity
    /// references that need REF edges.
    pub fn use_values(&self) -> Vec<ValueId> {
        match self {
            StmtKind::Identity { right, .. } | StmtKind::Assign { right, .. } => vec![*right],
            StmtKind::If { condition, .. } => vec![*condition],
            StmtKind::LookupSwitch { key, .. } | StmtKind::TableSwitch { key, .. } => vec![*key],
            StmtKind::Invoke { expr } => vec![*expr],
            StmtKind::Return { value }
            | StmtKind::Throw { value }
            | StmtKind::Monitor { value, .. } => vec![*value],
            StmtKind::Goto { .. } | StmtKind::ReturnVoid | StmtKind::Other { .. } => Vec::new(),
        }
    }
}

//! The closed set of value shapes.
//!
//! Every right-hand side, condition, operand, and argument in the IR is
//! one of these variants. The set is closed: decompiler output that does
//! not fit any listed shape arrives as [`ValueKind::Other`] and the
//! lowering core degrades it to an `UNKNOWN` node.

use smol_str::SmolStr;

use super::body::{LocalId, ValueId};

/// Canonical identity of a field: declaring class, name, and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSignature {
    pub declaring_class: SmolStr,
    pub name: SmolStr,
    pub type_full_name: SmolStr,
}

impl FieldSignature {
    pub fn new(
        declaring_class: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        ty: impl Into<SmolStr>,
    ) -> Self {
        Self {
            declaring_class: declaring_class.into(),
            name: name.into(),
            type_full_name: ty.into(),
        }
    }

    /// Canonical signature text, e.g. `<com.example.App: int count>`.
    pub fn canonical(&self) -> String {
        format!(
            "<{}: {} {}>",
            self.declaring_class, self.type_full_name, self.name
        )
    }
}

/// How an invocation dispatches its callee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeKind {
    Static,
    Virtual,
    Special,
    Interface,
    /// `invokedynamic`; carries bootstrap arguments.
    Dynamic,
}

/// A method invocation expression.
#[derive(Debug, Clone)]
pub struct InvokeExpr {
    pub kind: InvokeKind,
    pub name: SmolStr,
    pub declaring_class: SmolStr,
    pub return_type: SmolStr,
    pub param_types: Vec<SmolStr>,
    /// Base object for instance dispatch; absent for static calls.
    pub receiver: Option<ValueId>,
    pub args: Vec<ValueId>,
    /// Bootstrap arguments of a dynamic invoke; empty otherwise.
    pub bootstrap_args: Vec<ValueId>,
}

impl InvokeExpr {
    /// Fully-qualified callee name:
    /// `<declaringClass>.<name>:<retType>(<paramTypes,>)`.
    pub fn full_name(&self) -> String {
        format!(
            "{}.{}:{}",
            self.declaring_class,
            self.name,
            self.signature()
        )
    }

    /// Callee signature: `<retType>(<paramTypes,>)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.return_type, self.param_types.join(","))
    }

    pub fn is_static_dispatch(&self) -> bool {
        matches!(self.kind, InvokeKind::Static)
    }
}

/// Binary operators over two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Ushr,
    /// `lcmp`
    Cmp,
    /// `fcmpg` / `dcmpg`
    Cmpg,
    /// `fcmpl` / `dcmpl`
    Cmpl,
}

impl BinOp {
    /// Jimple-style operator text, used for `code` rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Xor => "^",
            BinOp::Shl => "<<",
            BinOp::Shr => ">>",
            BinOp::Ushr => ">>>",
            BinOp::Cmp => "cmp",
            BinOp::Cmpg => "cmpg",
            BinOp::Cmpl => "cmpl",
        }
    }
}

/// Relational operators of a condition expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Lt => "<",
            CmpOp::Le => "<=",
            CmpOp::Gt => ">",
            CmpOp::Ge => ">=",
        }
    }
}

/// The closed set of value shapes.
#[derive(Debug, Clone)]
pub enum ValueKind {
    /// Use of a declared local.
    Local(LocalId),
    /// `this`/parameter placeholder on the right of an identity
    /// statement; `code` is its textual form, e.g. `@parameter0: int`.
    IdentityRef { code: SmolStr },
    Constant { code: SmolStr },
    Invoke(InvokeExpr),
    Binop {
        op: BinOp,
        left: ValueId,
        right: ValueId,
    },
    /// Relational comparison as it appears in an `if` statement.
    Condition {
        op: CmpOp,
        left: ValueId,
        right: ValueId,
    },
    /// Cast to the value's own `type_full_name`.
    Cast { operand: ValueId },
    ArrayRef { base: ValueId, index: ValueId },
    InstanceOf {
        operand: ValueId,
        check_type: SmolStr,
    },
    Length { operand: ValueId },
    Neg { operand: ValueId },
    /// Allocation of the value's own `type_full_name`.
    New,
    NewArray { element_type: SmolStr },
    CaughtException,
    StaticField(FieldSignature),
    InstanceField {
        base: ValueId,
        field: FieldSignature,
    },
    /// Fallthrough for shapes outside the closed set.
    Other { code: SmolStr },
}

impl ValueKind {
    /// Short tag for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValueKind::Local(_) => "Local",
            ValueKind::IdentityRef { .. } => "IdentityRef",
            ValueKind::Constant { .. } => "Constant",
            ValueKind::Invoke(_) => "InvokeExpr",
            ValueKind::Binop { .. } => "BinopExpr",
            ValueKind::Condition { .. } => "ConditionExpr",
            ValueKind::Cast { .. } => "CastExpr",
            ValueKind::ArrayRef { .. } => "ArrayRef",
            ValueKind::InstanceOf { .. } => "InstanceOfExpr",
            ValueKind::Length { .. } => "LengthExpr",
            ValueKind::Neg { .. } => "NegExpr",
            ValueKind::New => "NewExpr",
            ValueKind::NewArray { .. } => "NewArrayExpr",
            ValueKind::CaughtException => "CaughtExceptionRef",
            ValueKind::StaticField(_) => "StaticFieldRef",
            ValueKind::InstanceField { .. } => "InstanceFieldRef",
            ValueKind::Other { .. } => "Other",
        }
    }
}

/// Name of the synthetic local an identity reference binds, obtained by
/// stripping the type suffix from its textual form:
/// `@parameter0: int` → `@parameter0`.
pub fn identity_ref_name(code: &str) -> &str {
    code.split(':').next().unwrap_or(code).trim_end()
}

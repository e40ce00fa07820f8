//! # Input model
//!
//! A three-address, typed, Jimple-like representation of a single JVM
//! method body, as produced by an external bytecode decompiler. Operand
//! stacks are already eliminated; every non-trivial expression is bound
//! to a named temporary.
//!
//! All entities live in per-body arenas ([`Body`]) and are referred to
//! by index handles ([`LocalId`], [`ValueId`], [`StmtId`]). The handles
//! double as the reference-identity keys the lowering core uses to
//! cross-reference its passes.
//!
//! This model is read-only for the lowering core: the core never
//! mutates a [`Method`] it is given.

mod body;
mod method;
mod pretty;
mod stmt;
mod value;

pub use body::{Body, LocalData, LocalId, StmtData, StmtId, ValueData, ValueId};
pub use method::{BodyGraph, Method};
pub use stmt::{MonitorOp, StmtKind};
pub use value::{
    BinOp, CmpOp, FieldSignature, InvokeExpr, InvokeKind, ValueKind, identity_ref_name,
};

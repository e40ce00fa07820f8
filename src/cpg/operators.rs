//! Literal operator names.
//!
//! These strings are part of the CPG schema contract and must match
//! exactly; consumers dispatch on them.

use crate::ir::{BinOp, CmpOp};

pub const ASSIGNMENT: &str = "<operator>.assignment";
pub const INDEX_ACCESS: &str = "<operator>.indexAccess";
pub const FIELD_ACCESS: &str = "<operator>.fieldAccess";
pub const CAST: &str = "<operator>.cast";
pub const INSTANCE_OF: &str = "<operator>.instanceOf";
pub const LENGTH_OF: &str = "<operator>.lengthOf";
pub const MINUS: &str = "<operator>.minus";

pub const ADDITION: &str = "<operator>.addition";
pub const SUBTRACTION: &str = "<operator>.subtraction";
pub const MULTIPLICATION: &str = "<operator>.multiplication";
pub const DIVISION: &str = "<operator>.division";
pub const MODULO: &str = "<operator>.modulo";
pub const AND: &str = "<operator>.and";
pub const OR: &str = "<operator>.or";
pub const XOR: &str = "<operator>.xor";
pub const SHIFT_LEFT: &str = "<operator>.shiftLeft";
pub const ARITHMETIC_SHIFT_RIGHT: &str = "<operator>.arithmeticShiftRight";
pub const LOGICAL_SHIFT_RIGHT: &str = "<operator>.logicalShiftRight";
pub const COMPARE: &str = "<operator>.compare";

pub const EQUALS: &str = "<operator>.equals";
pub const NOT_EQUALS: &str = "<operator>.notEquals";
pub const LESS_THAN: &str = "<operator>.lessThan";
pub const LESS_EQUALS_THAN: &str = "<operator>.lessEqualsThan";
pub const GREATER_THAN: &str = "<operator>.greaterThan";
pub const GREATER_EQUALS_THAN: &str = "<operator>.greaterEqualsThan";

/// Operator name of a binary expression.
pub fn binop_name(op: BinOp) -> &'static str {
    match op {
        BinOp::Add => ADDITION,
        BinOp::Sub => SUBTRACTION,
        BinOp::Mul => MULTIPLICATION,
        BinOp::Div => DIVISION,
        BinOp::Rem => MODULO,
        BinOp::And => AND,
        BinOp::Or => OR,
        BinOp::Xor => XOR,
        BinOp::Shl => SHIFT_LEFT,
        BinOp::Shr => ARITHMETIC_SHIFT_RIGHT,
        BinOp::Ushr => LOGICAL_SHIFT_RIGHT,
        BinOp::Cmp | BinOp::Cmpg | BinOp::Cmpl => COMPARE,
    }
}

/// Operator name of a relational condition.
pub fn cmp_name(op: CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => EQUALS,
        CmpOp::Ne => NOT_EQUALS,
        CmpOp::Lt => LESS_THAN,
        CmpOp::Le => LESS_EQUALS_THAN,
        CmpOp::Gt => GREATER_THAN,
        CmpOp::Ge => GREATER_EQUALS_THAN,
    }
}

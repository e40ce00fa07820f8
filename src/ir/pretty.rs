//! Jimple-like source text for values and statements.
//!
//! Every CPG node carries a `code` property with source-like text; the
//! IR is the only place that can render it, since values reference
//! their operands through arena handles.

use super::body::{Body, StmtId, ValueId};
use super::stmt::{MonitorOp, StmtKind};
use super::value::{InvokeExpr, ValueKind};

impl Body {
    /// Render the source-like text of a value.
    pub fn value_code(&self, id: ValueId) -> String {
        let value = self.value(id);
        match &value.kind {
            ValueKind::Local(local) => self.local(*local).name.to_string(),
            ValueKind::IdentityRef { code } => code.to_string(),
            ValueKind::Constant { code } => code.to_string(),
            ValueKind::Invoke(expr) => self.invoke_code(expr),
            ValueKind::Binop { op, left, right } => format!(
                "{} {} {}",
                self.value_code(*left),
                op.symbol(),
                self.value_code(*right)
            ),
            ValueKind::Condition { op, left, right } => format!(
                "{} {} {}",
                self.value_code(*left),
                op.symbol(),
                self.value_code(*right)
            ),
            ValueKind::Cast { operand } => {
                format!("({}) {}", value.type_full_name, self.value_code(*operand))
            }
            ValueKind::ArrayRef { base, index } => {
                format!("{}[{}]", self.value_code(*base), self.value_code(*index))
            }
            ValueKind::InstanceOf {
                operand,
                check_type,
            } => format!("{} instanceof {}", self.value_code(*operand), check_type),
            ValueKind::Length { operand } => format!("lengthof {}", self.value_code(*operand)),
            ValueKind::Neg { operand } => format!("-{}", self.value_code(*operand)),
            ValueKind::New => format!("new {}", value.type_full_name),
            ValueKind::NewArray { element_type } => format!("new {element_type}[]"),
            ValueKind::CaughtException => "@caughtexception".to_string(),
            ValueKind::StaticField(field) => field.canonical(),
            ValueKind::InstanceField { base, field } => {
                format!("{}.{}", self.value_code(*base), field.canonical())
            }
            ValueKind::Other { code } => code.to_string(),
        }
    }

    /// Render the source-like text of a statement.
    pub fn stmt_code(&self, id: StmtId) -> String {
        match &self.stmt(id).kind {
            StmtKind::Identity { left, right } => {
                format!("{} := {}", self.value_code(*left), self.value_code(*right))
            }
            StmtKind::Assign { left, right } => {
                format!("{} = {}", self.value_code(*left), self.value_code(*right))
            }
            StmtKind::If { condition, .. } => format!("if ({})", self.value_code(*condition)),
            StmtKind::Goto { .. } => "goto".to_string(),
            StmtKind::LookupSwitch { key, .. } | StmtKind::TableSwitch { key, .. } => {
                format!("switch ({})", self.value_code(*key))
            }
            StmtKind::Invoke { expr } => self.value_code(*expr),
            StmtKind::Return { value } => format!("return {}", self.value_code(*value)),
            StmtKind::ReturnVoid => "return".to_string(),
            StmtKind::Throw { value } => format!("throw {}", self.value_code(*value)),
            StmtKind::Monitor { op, value } => {
                let keyword = match op {
                    MonitorOp::Enter => "entermonitor",
                    MonitorOp::Exit => "exitmonitor",
                };
                format!("{} {}", keyword, self.value_code(*value))
            }
            StmtKind::Other { code } => code.to_string(),
        }
    }

    fn invoke_code(&self, expr: &InvokeExpr) -> String {
        let args = expr
            .args
            .iter()
            .map(|&arg| self.value_code(arg))
            .collect::<Vec<_>>()
            .join(", ");
        match expr.receiver {
            Some(receiver) => format!("{}.{}({})", self.value_code(receiver), expr.name, args),
            None => format!("{}.{}({})", expr.declaring_class, expr.name, args),
        }
    }
}

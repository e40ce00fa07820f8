//! CPG edge labels.

use std::fmt;

/// Labels of the overlaid sub-graphs.
///
/// `AST` carries hierarchy, `CFG` successors, and the PDG layer is
/// expressed through `ARGUMENT` and `REF`. The remaining labels attach
/// conditions, receivers, types, containment, and parameter pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeLabel {
    Ast,
    Cfg,
    Argument,
    Receiver,
    Ref,
    Condition,
    EvalType,
    Contains,
    ParameterLink,
}

impl EdgeLabel {
    /// Schema label of the edge.
    pub fn label(self) -> &'static str {
        match self {
            EdgeLabel::Ast => "AST",
            EdgeLabel::Cfg => "CFG",
            EdgeLabel::Argument => "ARGUMENT",
            EdgeLabel::Receiver => "RECEIVER",
            EdgeLabel::Ref => "REF",
            EdgeLabel::Condition => "CONDITION",
            EdgeLabel::EvalType => "EVAL_TYPE",
            EdgeLabel::Contains => "CONTAINS",
            EdgeLabel::ParameterLink => "PARAMETER_LINK",
        }
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Error kinds surfaced while lowering.
//!
//! Every kind has a warn-and-continue policy: the pass logs the error,
//! skips the node or edge it could not produce, and keeps going. None
//! of them aborts a lowering run.

use thiserror::Error;

/// A recoverable problem encountered inside a pass.
#[derive(Debug, Error)]
pub enum LowerError {
    /// A statement kind outside the closed set; the statement
    /// contributes no AST.
    #[error("statement kind outside the closed set: {0}")]
    UnknownStatement(String),

    /// A value kind outside the closed set; lowered to `UNKNOWN`.
    #[error("value kind outside the closed set: {0}")]
    UnknownValue(String),

    /// A CFG or PDG lookup hit a key the AST pass never populated;
    /// the dependent edge is skipped.
    #[error("no graph nodes associated with {0}")]
    MissingAssociation(String),

    /// No type node registered for the name; the `EVAL_TYPE` edge is
    /// omitted.
    #[error("no type node registered for `{0}`")]
    MissingTypeNode(String),

    /// The stub provider is missing part of the method skeleton;
    /// dependent edges are skipped.
    #[error("method stub for `{method}` is missing its {part}")]
    MissingMethodStub { method: String, part: &'static str },
}

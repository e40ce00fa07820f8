//! Methods and their precomputed successor graphs.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::base::SourcePos;

use super::body::{Body, LocalId, StmtId};

/// Precomputed intra-procedural control flow over body statements.
///
/// Built by the external decompiler frontend; the lowering core only
/// reads it. Heads are the entry statements (no predecessor), normally
/// the synthetic identity statements binding `this` and parameters.
#[derive(Debug, Clone, Default)]
pub struct BodyGraph {
    heads: Vec<StmtId>,
    succs: FxHashMap<StmtId, Vec<StmtId>>,
}

impl BodyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_head(&mut self, head: StmtId) {
        self.heads.push(head);
    }

    pub fn add_edge(&mut self, from: StmtId, to: StmtId) {
        self.succs.entry(from).or_default().push(to);
    }

    pub fn heads(&self) -> &[StmtId] {
        &self.heads
    }

    /// Successors of `stmt`, empty if it is terminal.
    pub fn succs_of(&self, stmt: StmtId) -> &[StmtId] {
        self.succs.get(&stmt).map_or(&[], |v| v.as_slice())
    }
}

/// A method whose body has been decompiled into [`Body`] statements.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: SmolStr,
    pub declaring_class: SmolStr,
    pub return_type: SmolStr,
    /// Parameter locals in declaration order.
    pub params: Vec<LocalId>,
    pub body: Body,
    /// Body statements in textual order.
    pub stmt_order: Vec<StmtId>,
    pub graph: BodyGraph,
    pub pos: SourcePos,
}

impl Method {
    pub fn new(
        declaring_class: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        return_type: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            declaring_class: declaring_class.into(),
            return_type: return_type.into(),
            params: Vec::new(),
            body: Body::new(),
            stmt_order: Vec::new(),
            graph: BodyGraph::new(),
            pos: SourcePos::NONE,
        }
    }

    /// Parameter types in declaration order.
    pub fn param_types(&self) -> Vec<&str> {
        self.params
            .iter()
            .map(|&p| self.body.local(p).type_full_name.as_str())
            .collect()
    }

    /// Fully-qualified name:
    /// `<declaringClass>.<name>:<retType>(<paramTypes,>)`.
    pub fn full_name(&self) -> String {
        format!("{}.{}:{}", self.declaring_class, self.name, self.signature())
    }

    /// Signature: `<retType>(<paramTypes,>)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.return_type, self.param_types().join(","))
    }
}

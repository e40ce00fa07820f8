//! # The lowering core
//!
//! Converts one decompiled method body into a CPG fragment: an AST pass
//! creates the nodes and hierarchy, a CFG pass threads successor edges
//! through them, and a PDG pass adds reference and argument dependence
//! edges. All three share a per-method [`AssociationMap`] binding IR
//! entities to the nodes produced for them; a final containment sweep
//! attaches every produced node to its method.
//!
//! The core is single-threaded per method and shares nothing across
//! methods except the read-safe indices in [`LowerContext`], so whole
//! programs can be lowered in parallel with [`lower_methods`].

mod assoc;
mod ast;
mod cfg;
mod error;
mod expr;
mod factory;
mod pdg;

use std::panic::{self, AssertUnwindSafe};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use crate::base::SourcePos;
use crate::cpg::{CpgNode, DeltaGraph, DeltaGraphBuilder, EdgeLabel, IdGen, NodeId, NodeKind};
use crate::index::{CallIndex, MethodIndex, MethodStub, TypeIndex};
use crate::ir::{Body, Method};

pub use assoc::{AssociationMap, IrKey};
pub use error::LowerError;

/// The external collaborators of a lowering run.
///
/// Everything the core reads or appends outside its own delta lives
/// here, passed explicitly; the core keeps no ambient state.
#[derive(Debug, Clone)]
pub struct LowerContext<'a> {
    pub methods: &'a MethodIndex,
    pub types: &'a TypeIndex,
    pub calls: &'a CallIndex,
    pub ids: IdGen,
}

/// Per-method lowering state shared by the three passes.
pub(crate) struct MethodLowering<'a> {
    pub(crate) method: &'a Method,
    pub(crate) ctx: &'a LowerContext<'a>,
    pub(crate) builder: DeltaGraphBuilder,
    pub(crate) assoc: AssociationMap,
    /// Declared-variable nodes by name; excluded from containment.
    pub(crate) locals: IndexMap<SmolStr, NodeId>,
    pub(crate) stub: Option<MethodStub>,
    pub(crate) full_name: String,
    /// Position of the statement currently being lowered.
    pub(crate) current_pos: SourcePos,
    /// Running 1-based child index under the method's entry block.
    pub(crate) child_idx: i32,
}

impl<'a> MethodLowering<'a> {
    fn new(method: &'a Method, ctx: &'a LowerContext<'a>) -> Self {
        let full_name = method.full_name();
        let stub = ctx.methods.stub(&full_name);
        if stub.is_none() {
            warn!("{}", LowerError::MissingMethodStub {
                method: full_name.clone(),
                part: "skeleton",
            });
        }
        Self {
            method,
            ctx,
            builder: DeltaGraphBuilder::new(ctx.ids.clone()),
            assoc: AssociationMap::new(),
            locals: IndexMap::new(),
            stub,
            full_name,
            current_pos: method.pos,
            child_idx: 0,
        }
    }

    pub(crate) fn body(&self) -> &'a Body {
        &self.method.body
    }

    pub(crate) fn method_node(&self) -> Option<NodeId> {
        self.stub.as_ref().map(|stub| stub.method)
    }

    pub(crate) fn block(&self) -> Option<NodeId> {
        self.stub.as_ref().and_then(|stub| stub.body_block)
    }

    pub(crate) fn method_return(&self) -> Option<NodeId> {
        self.stub.as_ref().and_then(|stub| stub.method_return)
    }

    /// Add `node` to the delta and attach its `EVAL_TYPE` edge if the
    /// type registry already knows the type. A miss omits the edge; a
    /// later pass can backfill.
    pub(crate) fn emit(&mut self, node: CpgNode) -> NodeId {
        let ty = node.type_full_name.clone();
        let id = self.builder.add_node(node);
        if !ty.is_empty() {
            match self.ctx.types.type_node(&ty) {
                Some(type_node) => self.builder.add_edge(id, type_node, EdgeLabel::EvalType),
                None => trace!("{}", LowerError::MissingTypeNode(ty.to_string())),
            }
        }
        id
    }

    pub(crate) fn edge(&mut self, src: NodeId, dst: NodeId, label: EdgeLabel) {
        self.builder.add_edge(src, dst, label);
    }

    /// AST-attach a statement-level node to the method's entry block.
    pub(crate) fn attach_to_block(&mut self, node: NodeId) {
        match self.block() {
            Some(block) => self.edge(block, node, EdgeLabel::Ast),
            None => trace!("{}", LowerError::MissingMethodStub {
                method: self.full_name.clone(),
                part: "body BLOCK",
            }),
        }
    }

    pub(crate) fn node_kind(&self, id: NodeId) -> Option<NodeKind> {
        self.builder.node(id).map(|node| node.kind)
    }

    /// Emit `METHOD -CONTAINS→ n` for every produced node except the
    /// stub-owned skeleton and the declared locals, then drop the map.
    ///
    /// Exclusion is by node identity: a node is dropped when its id
    /// appears in an excluded set, never by comparing property records.
    fn containment_sweep(&mut self) {
        let Some(method_node) = self.method_node() else {
            self.assoc.clear();
            return;
        };
        // Re-fetch the stub: the parameter pre-pass persisted nodes
        // into it after our initial snapshot.
        let owned: FxHashSet<NodeId> = self
            .ctx
            .methods
            .stub(&self.full_name)
            .map(|stub| stub.owned_nodes().into_iter().collect())
            .unwrap_or_default();
        let declared: FxHashSet<NodeId> = self.locals.values().copied().collect();

        let mut produced: IndexSet<NodeId> = IndexSet::new();
        for (_key, nodes) in self.assoc.sorted_entries() {
            produced.extend(nodes.iter().copied());
        }
        debug!(
            method = %self.full_name,
            produced = produced.len(),
            "containment sweep"
        );
        for node in produced {
            if owned.contains(&node) || declared.contains(&node) {
                continue;
            }
            self.builder.add_edge(method_node, node, EdgeLabel::Contains);
        }
        self.assoc.clear();
    }
}

/// Lower one method body into a delta graph.
///
/// Never fails: recoverable problems are logged and skipped per their
/// policies, and a panic inside a pass is caught here, returning the
/// partial delta built so far.
pub fn lower_method(method: &Method, ctx: &LowerContext<'_>) -> DeltaGraph {
    let mut lowering = MethodLowering::new(method, ctx);
    debug!(method = %lowering.full_name, "lowering method body");
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        ast::run(&mut lowering);
        cfg::run(&mut lowering);
        pdg::run(&mut lowering);
        lowering.containment_sweep();
    }));
    if outcome.is_err() {
        warn!(
            method = %lowering.full_name,
            "pass aborted; returning the partial delta graph"
        );
    }
    lowering.builder.build()
}

/// Lower several methods in parallel, one delta per method.
///
/// Methods share only the indices in `ctx`, which are safe to read and
/// append concurrently.
pub fn lower_methods(methods: &[Method], ctx: &LowerContext<'_>) -> Vec<DeltaGraph> {
    use rayon::prelude::*;

    methods
        .par_iter()
        .map(|method| lower_method(method, ctx))
        .collect()
}

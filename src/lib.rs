//! # jcpg-base
//!
//! Core library for lowering JVM bytecode method bodies into Code
//! Property Graph (CPG) overlays: AST, CFG, and PDG on a shared node set.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → optional JSON export of delta graphs
//!   ↓
//! lower       → the three lowering passes + containment sweep
//!   ↓
//! index       → shared collaborators (method stubs, types, calls)
//!   ↓
//! cpg         → produced model: nodes, edges, delta graphs, store
//!   ↓
//! ir          → input model: Jimple-like statements and values
//!   ↓
//! base        → primitives (source positions)
//! ```
//!
//! The entry point is [`lower::lower_method`]: given an [`ir::Method`]
//! whose body and successor graph are already built, it runs the
//! AST → CFG → PDG passes over a per-method association map and returns
//! an ordered [`cpg::DeltaGraph`] of node and edge additions.

// ============================================================================
// MODULES (dependency order: base → ir → cpg → index → lower)
// ============================================================================

/// Foundation types: source positions
pub mod base;

/// Input model: Jimple-like method bodies, statements, values
pub mod ir;

/// Produced model: CPG nodes, edges, delta graphs, in-memory store
pub mod cpg;

/// Shared collaborators: method stubs, type registry, call registry
pub mod index;

/// The lowering core: AST, CFG, and PDG passes
pub mod lower;

/// Delta-graph interchange formats: JSON
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::SourcePos;
pub use cpg::{
    CpgNode, CpgStore, DeltaGraph, DeltaGraphBuilder, EdgeLabel, IdGen, NodeId, NodeKind,
};
pub use lower::{LowerContext, lower_method, lower_methods};

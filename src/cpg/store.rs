//! Minimal in-memory CPG backend.
//!
//! Applies delta graphs as bulk transactions. The lowering core is
//! allowed to emit redundant edges; the store dedups them on apply, so
//! edge queries have set semantics. Stub and type nodes created outside
//! a delta are registered directly.

use indexmap::{IndexMap, IndexSet};

use super::delta::{DeltaGraph, DeltaOp};
use super::edge::EdgeLabel;
use super::node::{CpgNode, NodeId, NodeKind};

/// In-memory node/edge store with consumer-side edge dedup.
#[derive(Debug, Clone, Default)]
pub struct CpgStore {
    nodes: IndexMap<NodeId, CpgNode>,
    edges: IndexSet<(NodeId, NodeId, EdgeLabel)>,
}

impl CpgStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node created outside a delta (method stubs, types).
    pub fn register(&mut self, id: NodeId, node: CpgNode) {
        self.nodes.insert(id, node);
    }

    /// Apply a delta graph in op order. Duplicate edges collapse.
    pub fn apply(&mut self, delta: &DeltaGraph) {
        for op in delta.ops() {
            match *op {
                DeltaOp::AddNode(id) => {
                    if let Some(node) = delta.node(id) {
                        self.nodes.insert(id, node.clone());
                    }
                }
                DeltaOp::AddEdge { src, dst, label } => {
                    self.edges.insert((src, dst, label));
                }
            }
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&CpgNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &CpgNode)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.kind == kind)
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn has_edge(&self, src: NodeId, dst: NodeId, label: EdgeLabel) -> bool {
        self.edges.contains(&(src, dst, label))
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, EdgeLabel)> + '_ {
        self.edges.iter().copied()
    }

    pub fn out_neighbors(&self, src: NodeId, label: EdgeLabel) -> Vec<NodeId> {
        self.edges()
            .filter(|&(s, _, l)| s == src && l == label)
            .map(|(_, d, _)| d)
            .collect()
    }

    pub fn in_neighbors(&self, dst: NodeId, label: EdgeLabel) -> Vec<NodeId> {
        self.edges()
            .filter(|&(_, d, l)| d == dst && l == label)
            .map(|(s, _, _)| s)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

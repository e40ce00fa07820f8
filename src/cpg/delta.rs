//! The delta-graph log the lowering core returns.
//!
//! The builder is an append-only recorder: nodes are registered in an
//! insertion-ordered table and every addition (node or edge) lands in an
//! ordered op log. Nothing is deduplicated here; a consumer that needs
//! set semantics dedups at application time (see [`CpgStore`]).
//!
//! [`CpgStore`]: crate::cpg::CpgStore

use indexmap::IndexMap;

use super::edge::EdgeLabel;
use super::node::{CpgNode, IdGen, NodeId, NodeKind};

/// One recorded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaOp {
    AddNode(NodeId),
    AddEdge {
        src: NodeId,
        dst: NodeId,
        label: EdgeLabel,
    },
}

/// Append-only recorder of node and edge additions.
#[derive(Debug)]
pub struct DeltaGraphBuilder {
    ids: IdGen,
    nodes: IndexMap<NodeId, CpgNode>,
    ops: Vec<DeltaOp>,
}

impl DeltaGraphBuilder {
    pub fn new(ids: IdGen) -> Self {
        Self {
            ids,
            nodes: IndexMap::new(),
            ops: Vec::new(),
        }
    }

    /// Assign a fresh id to `node`, record the addition, and return the id.
    pub fn add_node(&mut self, node: CpgNode) -> NodeId {
        let id = self.ids.next_id();
        self.nodes.insert(id, node);
        self.ops.push(DeltaOp::AddNode(id));
        id
    }

    /// Record an edge addition. Duplicates are recorded as-is.
    pub fn add_edge(&mut self, src: NodeId, dst: NodeId, label: EdgeLabel) {
        self.ops.push(DeltaOp::AddEdge { src, dst, label });
    }

    /// Property record of a node added to this builder.
    pub fn node(&self, id: NodeId) -> Option<&CpgNode> {
        self.nodes.get(&id)
    }

    /// Freeze the log into an immutable delta graph.
    pub fn build(self) -> DeltaGraph {
        DeltaGraph {
            nodes: self.nodes,
            ops: self.ops,
        }
    }
}

/// Immutable, ordered log of node and edge additions for one method.
///
/// Consumers apply the ops in order as one bulk transaction. The query
/// accessors exist for consumers and tests; they do not change the log.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaGraph {
    nodes: IndexMap<NodeId, CpgNode>,
    ops: Vec<DeltaOp>,
}

impl DeltaGraph {
    /// The recorded operations, in emission order.
    pub fn ops(&self) -> &[DeltaOp] {
        &self.ops
    }

    pub fn node(&self, id: NodeId) -> Option<&CpgNode> {
        self.nodes.get(&id)
    }

    /// Added nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &CpgNode)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    /// Added nodes of one kind, in insertion order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.kind == kind)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Added edges in emission order, duplicates included.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, EdgeLabel)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DeltaOp::AddEdge { src, dst, label } => Some((src, dst, label)),
            DeltaOp::AddNode(_) => None,
        })
    }

    /// Targets of `label` edges out of `src`, in emission order.
    pub fn out_neighbors(&self, src: NodeId, label: EdgeLabel) -> Vec<NodeId> {
        self.edges()
            .filter(|&(s, _, l)| s == src && l == label)
            .map(|(_, d, _)| d)
            .collect()
    }

    /// Sources of `label` edges into `dst`, in emission order.
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
        self.ops
            .iter()
            .filter(|op| matches!(op, DeltaOp::AddEdge { .. }))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

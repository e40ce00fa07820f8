//! Type-node registry.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::cpg::NodeId;

/// Process-wide registry of `TYPE` nodes, keyed by type full name.
///
/// Type resolution is an external concern: the lowering core only asks
/// whether a node exists for a name. A miss means the `EVAL_TYPE` edge
/// is omitted and may be backfilled by a later pass.
#[derive(Debug, Default)]
pub struct TypeIndex {
    inner: RwLock<FxHashMap<SmolStr, NodeId>>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, full_name: &str, node: NodeId) {
        self.inner.write().insert(SmolStr::new(full_name), node);
    }

    pub fn type_node(&self, full_name: &str) -> Option<NodeId> {
        self.inner.read().get(full_name).copied()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

//! The per-method association map.
//!
//! Binds each IR entity to the ordered list of CPG nodes produced for
//! it. The AST pass populates it; the CFG and PDG passes query it
//! instead of reconstructing shapes. Keys are the arena id handles of
//! the IR, i.e. reference identity, never structural equality.

use rustc_hash::FxHashMap;

use crate::cpg::NodeId;
use crate::ir::{LocalId, StmtId, ValueId};

/// Identity key of an IR entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IrKey {
    Stmt(StmtId),
    Value(ValueId),
    Local(LocalId),
}

impl From<StmtId> for IrKey {
    fn from(id: StmtId) -> Self {
        IrKey::Stmt(id)
    }
}

impl From<ValueId> for IrKey {
    fn from(id: ValueId) -> Self {
        IrKey::Value(id)
    }
}

impl From<LocalId> for IrKey {
    fn from(id: LocalId) -> Self {
        IrKey::Local(id)
    }
}

/// Mapping from IR entity to the ordered nodes produced for it.
#[derive(Debug, Default)]
pub struct AssociationMap {
    entries: FxHashMap<IrKey, Vec<NodeId>>,
}

impl AssociationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` to the entry of `key`, creating the entry if absent.
    pub fn append(&mut self, key: impl Into<IrKey>, node: NodeId) {
        self.entries.entry(key.into()).or_default().push(node);
    }

    /// Append several nodes to the entry of `key`.
    pub fn append_all(&mut self, key: impl Into<IrKey>, nodes: &[NodeId]) {
        self.entries
            .entry(key.into())
            .or_default()
            .extend_from_slice(nodes);
    }

    /// Insert `nodes` at position `at` within the entry of `key`.
    ///
    /// Used to place a statement's primary node at index 0 so the CFG
    /// pass finds it. If no entry exists this behaves like append; an
    /// `at` past the end clamps to the end.
    pub fn insert_at(&mut self, key: impl Into<IrKey>, nodes: &[NodeId], at: usize) {
        let entry = self.entries.entry(key.into()).or_default();
        let at = at.min(entry.len());
        entry.splice(at..at, nodes.iter().copied());
    }

    /// The nodes associated with `key`, empty if none.
    pub fn get(&self, key: impl Into<IrKey>) -> &[NodeId] {
        self.entries
            .get(&key.into())
            .map_or(&[], |nodes| nodes.as_slice())
    }

    /// All entries, sorted by key for deterministic iteration.
    pub fn sorted_entries(&self) -> Vec<(IrKey, &[NodeId])> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(&key, nodes)| (key, nodes.as_slice()))
            .collect();
        entries.sort_by_key(|&(key, _)| key);
        entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

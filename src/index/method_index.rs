//! Method stub provider.
//!
//! A program-wide pass creates the skeleton of every method before any
//! body is lowered: the `METHOD` node itself, its body `BLOCK`, its
//! `METHOD_RETURN`, and any pre-existing parameter nodes. The lowering
//! core queries those stubs by method full name and persists the
//! parameter nodes it creates back into the stub.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::cpg::{IdGen, NodeId};

/// Pre-created skeleton nodes of one method.
///
/// `body_block` and `method_return` are optional: a stub provider that
/// failed to create them degrades the lowering (dependent edges are
/// skipped) but never aborts it.
#[derive(Debug, Clone)]
pub struct MethodStub {
    pub method: NodeId,
    pub body_block: Option<NodeId>,
    pub method_return: Option<NodeId>,
    pub parameters: Vec<NodeId>,
}

impl MethodStub {
    /// Allocate a full skeleton (method, block, method-return) from `ids`.
    pub fn allocate(ids: &IdGen) -> Self {
        Self {
            method: ids.next_id(),
            body_block: Some(ids.next_id()),
            method_return: Some(ids.next_id()),
            parameters: Vec::new(),
        }
    }

    /// Every node owned by the stub pass, for containment exclusion.
    pub fn owned_nodes(&self) -> Vec<NodeId> {
        let mut owned = vec![self.method];
        owned.extend(self.body_block);
        owned.extend(self.method_return);
        owned.extend(self.parameters.iter().copied());
        owned
    }
}

/// Process-wide registry of method stubs, keyed by method full name.
#[derive(Debug, Default)]
pub struct MethodIndex {
    inner: RwLock<FxHashMap<SmolStr, MethodStub>>,
}

impl MethodIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, full_name: &str, stub: MethodStub) {
        self.inner.write().insert(SmolStr::new(full_name), stub);
    }

    /// The `METHOD` node of a method, if its stub exists.
    pub fn method_node(&self, full_name: &str) -> Option<NodeId> {
        self.inner.read().get(full_name).map(|stub| stub.method)
    }

    /// A snapshot of the method's stub.
    pub fn stub(&self, full_name: &str) -> Option<MethodStub> {
        self.inner.read().get(full_name).cloned()
    }

    /// Persist parameter nodes created during lowering into the stub.
    pub fn store_parameters(&self, full_name: &str, params: &[NodeId]) {
        if let Some(stub) = self.inner.write().get_mut(full_name) {
            stub.parameters.extend_from_slice(params);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

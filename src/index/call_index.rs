//! Process-wide call registry.
//!
//! Every lowered invocation registers its `CALL` node here so a later
//! inter-procedural pass can link call sites to method stubs without
//! re-walking the bodies.

use parking_lot::RwLock;
use smol_str::SmolStr;

use crate::cpg::NodeId;
use crate::ir::ValueId;

/// One registered call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Full name of the method containing the call.
    pub method_full_name: SmolStr,
    /// The invocation expression within that method's body.
    pub expr: ValueId,
    /// The produced `CALL` node.
    pub call: NodeId,
}

/// Append-only registry of call sites.
#[derive(Debug, Default)]
pub struct CallIndex {
    inner: RwLock<Vec<CallSite>>,
}

impl CallIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, method_full_name: &str, expr: ValueId, call: NodeId) {
        self.inner.write().push(CallSite {
            method_full_name: SmolStr::new(method_full_name),
            expr,
            call,
        });
    }

    /// Snapshot of the call sites registered from one method.
    pub fn calls_in(&self, method_full_name: &str) -> Vec<CallSite> {
        self.inner
            .read()
            .iter()
            .filter(|site| site.method_full_name == method_full_name)
            .cloned()
            .collect()
    }

    /// Snapshot of all registered call sites.
    pub fn all(&self) -> Vec<CallSite> {
        self.inner.read().clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

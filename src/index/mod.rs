//! # Shared collaborators
//!
//! The lowering core keeps no ambient state: the method-stub provider,
//! type-node registry, and call registry are explicit parameters. All
//! three wrap their state in locks so one shared reference services
//! method lowerings running in parallel.

mod call_index;
mod method_index;
mod strategy;
mod type_index;

pub use call_index::{CallIndex, CallSite};
pub use method_index::{MethodIndex, MethodStub};
pub use strategy::{evaluation_strategy, is_primitive};
pub use type_index::TypeIndex;

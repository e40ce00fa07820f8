//! Foundation types for the jcpg toolchain.
//!
//! This module provides the primitives used throughout the lowering core:
//! - [`SourcePos`] - line/column positions carried by IR entities and CPG nodes
//!
//! This module has NO dependencies on other jcpg modules.

mod position;

pub use position::SourcePos;

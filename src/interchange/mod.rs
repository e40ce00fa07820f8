//! Delta-graph interchange formats.
//!
//! Serializes [`DeltaGraph`]s for out-of-process consumers (remote graph
//! backends, debugging tools). Only JSON is supported: a delta is a flat
//! record of node payloads plus the ordered op log, which maps onto JSON
//! without loss.
//!
//! [`DeltaGraph`]: crate::cpg::DeltaGraph

mod error;
mod json;

pub use error::InterchangeError;
pub use json::{delta_from_json_ops, delta_to_json, delta_to_json_pretty};

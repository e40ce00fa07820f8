//! JSON export and import of delta graphs.

use crate::cpg::{DeltaGraph, DeltaOp};

use super::error::InterchangeError;

/// Serialize a delta graph to compact JSON.
pub fn delta_to_json(delta: &DeltaGraph) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string(delta)?)
}

/// Serialize a delta graph to human-readable JSON.
pub fn delta_to_json_pretty(delta: &DeltaGraph) -> Result<String, InterchangeError> {
    Ok(serde_json::to_string_pretty(delta)?)
}

/// Read a delta graph back from its JSON form, checking that every
/// `AddNode` op has a payload in the node table.
pub fn delta_from_json_ops(json: &str) -> Result<DeltaGraph, InterchangeError> {
    let delta: DeltaGraph = serde_json::from_str(json)?;
    for op in delta.ops() {
        if let DeltaOp::AddNode(id) = *op {
            if delta.node(id).is_none() {
                return Err(InterchangeError::Inconsistent(format!(
                    "op refers to node {id} with no payload"
                )));
            }
        }
    }
    Ok(delta)
}

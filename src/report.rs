//! Serializable summary of one source/target comparison.

use serde::Serialize;

use crate::distance::{distance, similarity};
use crate::error::LevResult;

/// Distance and similarity for a single pair of strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    pub source: String,
    pub target: String,
    pub distance: usize,
    pub similarity: f64,
}

impl DistanceReport {
    pub fn compute(source: &str, target: &str) -> Self {
        Self {
            source: source.to_owned(),
            target: target.to_owned(),
            distance: distance(source, target),
            similarity: similarity(source, target),
        }
    }

    /// Render the report as a single-line JSON object.
    pub fn to_json(&self) -> LevResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

use super::Condition;
use serde::{Deserialize, Serialize};

/// Result of analyzing one observation file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoistureSummary {
    pub observations: usize,
    pub average: f64,
    pub condition: Condition,
    pub suggestion: String,
}

use serde::{Deserialize, Serialize};

/// Soil condition derived from the average moisture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Drought,
    Flood,
    Normal,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Drought => "Drought",
            Condition::Flood => "Flood",
            Condition::Normal => "Normal",
        }
    }

    /// Analysis line shown in the console report.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Drought => "Drought Condition Detected!",
            Condition::Flood => "Flood Condition Detected!",
            Condition::Normal => "Normal Soil Moisture Levels.",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

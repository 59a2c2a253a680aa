use serde::{Deserialize, Serialize};

/// Lifecycle stage of the single conversion the window drives.
///
/// Transitions belong to the conversion engine behind the action handler;
/// the presentation layer only reads this value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", content = "detail", rename_all = "snake_case")]
pub enum ConversionStatus {
    NotStarted,
    /// Fraction complete, expected in `0.0..=1.0`.
    InProgress(f64),
    Failed(String),
    Completed,
}

impl ConversionStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, ConversionStatus::InProgress(_))
    }

    /// Fraction complete while a conversion is running.
    pub fn progress(&self) -> Option<f64> {
        match self {
            ConversionStatus::InProgress(fraction) => Some(*fraction),
            _ => None,
        }
    }
}

impl Default for ConversionStatus {
    fn default() -> Self {
        ConversionStatus::NotStarted
    }
}

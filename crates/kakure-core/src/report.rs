//! Serializable snapshot of a finished training run.

use serde::Serialize;

use crate::training::TrainingOutcome;

/// The export surface of one training run, in probability space.
///
/// `decoded` is the label string of the full decoded sequence, including
/// the synthetic time-0 state as its first character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    /// Final 3x3 transition probabilities, `[to][from]`.
    pub transition: Vec<Vec<f64>>,
    /// Final 3x2 emission probabilities, `[state][symbol]`.
    pub emission: Vec<Vec<f64>>,
    /// Decoded state labels, one character per time step.
    pub decoded: String,
    /// Accuracy against reference labels, when a reference was supplied.
    pub accuracy: Option<f64>,
}

impl TrainingReport {
    /// Build a report from a training outcome and an optional accuracy.
    pub fn new(outcome: &TrainingOutcome, accuracy: Option<f64>) -> Self {
        Self {
            transition: outcome.transition.clone(),
            emission: outcome.emission.clone(),
            decoded: outcome.decoded.iter().map(|s| s.to_string()).collect(),
            accuracy,
        }
    }
}

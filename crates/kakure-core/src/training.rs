//! # Training Loop
//!
//! Orchestrates the decode / re-estimate cycle. The iteration count is
//! caller-supplied and fixed; there is no internal convergence check, which
//! keeps the loop deterministic and leaves early stopping to the caller.

use tracing::debug;

use crate::alphabet::{HiddenState, ObsSymbol};
use crate::error::Result;
use crate::estimator::reestimate;
use crate::params::ModelParams;
use crate::viterbi::decode;

/// Everything a training run produces, back in probability space.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    /// Decoded state sequence, length `T + 1` including the synthetic
    /// time-0 state.
    pub decoded: Vec<HiddenState>,
    /// Final 3x3 transition probabilities, indexed `[to][from]`.
    pub transition: Vec<Vec<f64>>,
    /// Final 3x2 emission probabilities, indexed `[state][symbol]`.
    pub emission: Vec<Vec<f64>>,
}

/// Run `iterations` rounds of hard-EM over the observation sequence.
///
/// The parameters are decoded once up front; each round then re-estimates
/// them from the current decoded path and decodes again. `iterations == 0`
/// decodes with the initial parameters and performs no learning.
pub fn train(
    params: ModelParams,
    obs: &[ObsSymbol],
    iterations: usize,
) -> Result<TrainingOutcome> {
    let mut params = params;
    let mut decoded = decode(&params, obs)?.best_path()?;
    debug!(steps = obs.len(), "initial decode complete");

    for round in 0..iterations {
        params = reestimate(&decoded, obs)?;
        decoded = decode(&params, obs)?.best_path()?;
        debug!(round = round + 1, iterations, "hard-EM round complete");
    }

    let (transition, emission) = params.to_probabilities();
    Ok(TrainingOutcome {
        decoded,
        transition,
        emission,
    })
}

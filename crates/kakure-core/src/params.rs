//! # Model Parameters
//!
//! Owned transition and emission matrices, held in cost space for the
//! lifetime of a training run. The training loop owns exactly one
//! `ModelParams` value and hands out shared references to the decoder and
//! re-estimator; nothing retains the matrices across calls.

use crate::alphabet::{HiddenState, ObsSymbol};
use crate::cost::{to_cost, to_probability};
use crate::error::{KakureError, Result};

/// Transition and emission parameters of the model, stored in cost space.
///
/// The transition matrix is indexed `[to][from]` and each column (fixed
/// from-state) sums to 1 in probability space. The emission matrix is
/// indexed `[state][symbol]` and each row sums to 1 in probability space.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    transition: Vec<Vec<f64>>,
    emission: Vec<Vec<f64>>,
}

impl ModelParams {
    /// Build parameters from probability-space matrices.
    ///
    /// Validates shapes (3x3 transition, 3x2 emission) and that every value
    /// lies in (0, 1], then converts to cost space.
    pub fn from_probabilities(
        transition: Vec<Vec<f64>>,
        emission: Vec<Vec<f64>>,
    ) -> Result<Self> {
        validate_shape(&transition, HiddenState::COUNT, HiddenState::COUNT, "transition")?;
        validate_shape(&emission, HiddenState::COUNT, ObsSymbol::COUNT, "emission")?;

        Ok(Self {
            transition: costs_of(transition)?,
            emission: costs_of(emission)?,
        })
    }

    /// Build parameters directly from cost-space matrices.
    ///
    /// Used by the re-estimator, whose smoothed counts are already known to
    /// come from valid probabilities.
    pub(crate) fn from_costs(transition: Vec<Vec<f64>>, emission: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(transition.len(), HiddenState::COUNT);
        debug_assert_eq!(emission.len(), HiddenState::COUNT);
        Self {
            transition,
            emission,
        }
    }

    /// Cost of transitioning from `from` to `to`.
    pub fn transition_cost(&self, to: HiddenState, from: HiddenState) -> f64 {
        self.transition[to.index()][from.index()]
    }

    /// Cost of `state` emitting `symbol`.
    pub fn emission_cost(&self, state: HiddenState, symbol: ObsSymbol) -> f64 {
        self.emission[state.index()][symbol.index()]
    }

    /// Convert both matrices back to probability space for reporting.
    pub fn to_probabilities(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        (probs_of(&self.transition), probs_of(&self.emission))
    }
}

fn validate_shape(m: &[Vec<f64>], rows: usize, cols: usize, name: &str) -> Result<()> {
    if m.len() != rows {
        return Err(KakureError::BadShape(format!(
            "{name} matrix must have {rows} rows, got {}",
            m.len()
        )));
    }
    for (r, row) in m.iter().enumerate() {
        if row.len() != cols {
            return Err(KakureError::BadShape(format!(
                "{name} matrix row {r} must have {cols} values, got {}",
                row.len()
            )));
        }
        for &v in row {
            if v <= 0.0 {
                return Err(KakureError::NonPositiveProbability(v));
            }
            if v > 1.0 {
                return Err(KakureError::BadShape(format!(
                    "{name} matrix row {r} holds {v}, which is not a probability"
                )));
            }
        }
    }
    Ok(())
}

fn costs_of(m: Vec<Vec<f64>>) -> Result<Vec<Vec<f64>>> {
    m.into_iter()
        .map(|row| row.into_iter().map(to_cost).collect())
        .collect()
}

fn probs_of(m: &[Vec<f64>]) -> Vec<Vec<f64>> {
    m.iter()
        .map(|row| row.iter().map(|&c| to_probability(c)).collect())
        .collect()
}

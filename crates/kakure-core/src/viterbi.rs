//! # Viterbi Decoding
//!
//! Minimum-cost dynamic program over the hidden states. `decode` fills a
//! cost table and a backpointer table; [`DecodeTables::best_path`] walks the
//! backpointers from the cheapest terminal state to recover the full state
//! sequence, including the synthetic time-0 state.

use crate::alphabet::{HiddenState, ObsSymbol};
use crate::cost::uniform_prior_cost;
use crate::error::{KakureError, Result};
use crate::params::ModelParams;

/// Cost and backpointer tables produced by one decode pass.
///
/// Both tables have shape `[state][t]` with `T + 1` columns for a length-`T`
/// observation sequence. Column 0 of `costs` is the uniform prior over the
/// states; column 0 of `backptr` is unused.
#[derive(Debug, Clone)]
pub struct DecodeTables {
    /// Minimum cumulative cost of reaching each state at each time step.
    pub costs: Vec<Vec<f64>>,
    /// Predecessor state that achieved the minimum at each time step.
    pub backptr: Vec<Vec<usize>>,
}

/// Decode the observation sequence against the given parameters.
///
/// `costs[s][t]` ends up holding the minimum total cost of any state
/// sequence of length `t` that ends in state `s` and explains
/// `obs[0..t]`. Ties are broken toward the lowest state index.
pub fn decode(params: &ModelParams, obs: &[ObsSymbol]) -> Result<DecodeTables> {
    if obs.is_empty() {
        return Err(KakureError::EmptySequence);
    }

    let n = obs.len();
    let prior = uniform_prior_cost(HiddenState::COUNT);
    let mut costs = vec![vec![prior; n + 1]; HiddenState::COUNT];
    let mut backptr = vec![vec![0usize; n + 1]; HiddenState::COUNT];

    for (t, &symbol) in obs.iter().enumerate() {
        let col = t + 1;
        for &to in HiddenState::all() {
            let mut best = f64::INFINITY;
            let mut best_prev = None;

            for &from in HiddenState::all() {
                let cand = costs[from.index()][col - 1] + params.transition_cost(to, from);
                if cand < best {
                    best = cand;
                    best_prev = Some(from.index());
                }
            }

            let Some(prev) = best_prev else {
                return Err(KakureError::DecodingDeadEnd {
                    state: to.index(),
                    step: col,
                });
            };

            costs[to.index()][col] = best + params.emission_cost(to, symbol);
            backptr[to.index()][col] = prev;
        }
    }

    Ok(DecodeTables { costs, backptr })
}

impl DecodeTables {
    /// Number of observation steps covered by the tables.
    pub fn steps(&self) -> usize {
        self.costs[0].len() - 1
    }

    /// Minimum cost over the final column.
    pub fn final_cost(&self) -> f64 {
        let n = self.steps();
        self.costs
            .iter()
            .map(|row| row[n])
            .fold(f64::INFINITY, f64::min)
    }

    /// Reconstruct the minimum-cost state sequence, length `T + 1`.
    ///
    /// Picks the cheapest terminal state (lowest index on ties) and follows
    /// the backpointers down to the synthetic time-0 state.
    pub fn best_path(&self) -> Result<Vec<HiddenState>> {
        let n = self.steps();

        let mut best = f64::INFINITY;
        let mut last = None;
        for (s, row) in self.costs.iter().enumerate() {
            if row[n] < best {
                best = row[n];
                last = Some(s);
            }
        }
        let Some(mut state) = last else {
            return Err(KakureError::DecodingDeadEnd { state: 0, step: n });
        };

        let mut path = vec![0usize; n + 1];
        path[n] = state;
        for t in (1..=n).rev() {
            state = self.backptr[state][t];
            path[t - 1] = state;
        }

        Ok(path
            .into_iter()
            .map(|s| HiddenState::from_index(s).unwrap_or(HiddenState::S0))
            .collect())
    }
}

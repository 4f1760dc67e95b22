//! # Parameter Re-estimation
//!
//! Count-based hard-EM update. The decoded state sequence is treated as the
//! truth for one iteration: transitions are tallied over consecutive decoded
//! pairs and emissions over (decoded state, observed symbol) pairs, then
//! normalized with additive (Laplace) smoothing so no probability ever
//! reaches zero. A state the path never visits comes out exactly uniform.

use crate::alphabet::{HiddenState, ObsSymbol};
use crate::cost::to_cost;
use crate::error::{KakureError, Result};
use crate::params::ModelParams;

/// Re-estimate model parameters from one decoded path.
///
/// `decoded` must be one element longer than `obs`: it includes the
/// synthetic time-0 state that emits nothing.
pub fn reestimate(decoded: &[HiddenState], obs: &[ObsSymbol]) -> Result<ModelParams> {
    if decoded.len() != obs.len() + 1 {
        return Err(KakureError::LengthMismatch {
            expected: obs.len() + 1,
            actual: decoded.len(),
        });
    }

    let transition = smoothed_transitions(decoded)?;
    let emission = smoothed_emissions(decoded, obs)?;

    Ok(ModelParams::from_costs(transition, emission))
}

/// Tally consecutive decoded pairs and smooth with one pseudocount per
/// target state: `(count + 1) / (total + 3)`.
fn smoothed_transitions(decoded: &[HiddenState]) -> Result<Vec<Vec<f64>>> {
    let mut counts = [[0usize; HiddenState::COUNT]; HiddenState::COUNT]; // [to][from]
    for pair in decoded.windows(2) {
        counts[pair[1].index()][pair[0].index()] += 1;
    }

    let mut outgoing = [0usize; HiddenState::COUNT];
    for from in 0..HiddenState::COUNT {
        for to in 0..HiddenState::COUNT {
            outgoing[from] += counts[to][from];
        }
    }

    let mut matrix = vec![vec![0.0; HiddenState::COUNT]; HiddenState::COUNT];
    for to in 0..HiddenState::COUNT {
        for from in 0..HiddenState::COUNT {
            let p = (counts[to][from] + 1) as f64 / (outgoing[from] + HiddenState::COUNT) as f64;
            matrix[to][from] = to_cost(p)?;
        }
    }
    Ok(matrix)
}

/// Tally (emitting state, symbol) pairs and smooth with one pseudocount per
/// symbol: `(count + 1) / (total + 2)` for heads, complement for tails.
fn smoothed_emissions(decoded: &[HiddenState], obs: &[ObsSymbol]) -> Result<Vec<Vec<f64>>> {
    let mut heads = [0usize; HiddenState::COUNT];
    let mut emitted = [0usize; HiddenState::COUNT];
    for (t, &symbol) in obs.iter().enumerate() {
        let state = decoded[t + 1].index();
        emitted[state] += 1;
        if symbol == ObsSymbol::Heads {
            heads[state] += 1;
        }
    }

    let mut matrix = vec![vec![0.0; ObsSymbol::COUNT]; HiddenState::COUNT];
    for state in 0..HiddenState::COUNT {
        let p_heads = (heads[state] + 1) as f64 / (emitted[state] + ObsSymbol::COUNT) as f64;
        matrix[state][ObsSymbol::Heads.index()] = to_cost(p_heads)?;
        matrix[state][ObsSymbol::Tails.index()] = to_cost(1.0 - p_heads)?;
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    use crate::alphabet::HiddenState::{S0, S1, S2};
    use crate::alphabet::ObsSymbol::{Heads, Tails};

    #[test]
    fn test_length_mismatch_rejected() {
        let err = reestimate(&[S0, S1], &[Heads, Tails]).unwrap_err();
        assert!(matches!(err, KakureError::LengthMismatch { .. }));
    }

    #[test]
    fn test_unvisited_state_comes_out_uniform() {
        // S1 and S2 never appear, so their outgoing transition distributions
        // must be exactly uniform and their emissions exactly 1/2.
        let decoded = [S0, S0, S0, S0];
        let obs = [Heads, Heads, Tails];
        let params = reestimate(&decoded, &obs).unwrap();
        let (transition, emission) = params.to_probabilities();

        for from in [S1, S2] {
            for to in 0..HiddenState::COUNT {
                assert!((transition[to][from.index()] - 1.0 / 3.0).abs() < TOL);
            }
        }
        for state in [S1, S2] {
            assert!((emission[state.index()][0] - 0.5).abs() < TOL);
            assert!((emission[state.index()][1] - 0.5).abs() < TOL);
        }
    }

    #[test]
    fn test_smoothing_floor_and_normalization() {
        let decoded = [S0, S1, S1, S2, S0, S1];
        let obs = [Heads, Tails, Heads, Heads, Tails];
        let params = reestimate(&decoded, &obs).unwrap();
        let (transition, emission) = params.to_probabilities();

        for from in 0..HiddenState::COUNT {
            let mut column_sum = 0.0;
            for to in 0..HiddenState::COUNT {
                let p = transition[to][from];
                assert!(p > 0.0 && p < 1.0, "transition {to}<-{from} = {p}");
                column_sum += p;
            }
            assert!((column_sum - 1.0).abs() < TOL);
        }

        for state in 0..HiddenState::COUNT {
            let row = &emission[state];
            assert!(row.iter().all(|&p| p > 0.0 && p < 1.0));
            assert!((row[0] + row[1] - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_transition_counts() {
        // Pairs: S0->S1 twice, S1->S0 once, S0 emits nothing at time 0.
        let decoded = [S0, S1, S0, S1];
        let obs = [Heads, Heads, Heads];
        let params = reestimate(&decoded, &obs).unwrap();
        let (transition, _) = params.to_probabilities();

        // From S0: two observed moves, both to S1 -> (2+1)/(2+3).
        assert!((transition[S1.index()][S0.index()] - 3.0 / 5.0).abs() < TOL);
        assert!((transition[S0.index()][S0.index()] - 1.0 / 5.0).abs() < TOL);
        // From S1: one observed move, to S0 -> (1+1)/(1+3).
        assert!((transition[S0.index()][S1.index()] - 2.0 / 4.0).abs() < TOL);
    }

    #[test]
    fn test_emission_counts() {
        // S1 emits at t=0,1,2: two heads, one tail -> P(H|S1) = (2+1)/(3+2).
        let decoded = [S0, S1, S1, S1];
        let obs = [Heads, Tails, Heads];
        let params = reestimate(&decoded, &obs).unwrap();
        let (_, emission) = params.to_probabilities();

        assert!((emission[S1.index()][0] - 3.0 / 5.0).abs() < TOL);
        assert!((emission[S1.index()][1] - 2.0 / 5.0).abs() < TOL);
    }
}

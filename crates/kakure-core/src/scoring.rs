//! Accuracy scoring of a decoded sequence against reference labels.

use crate::alphabet::HiddenState;
use crate::error::{KakureError, Result};

/// Fraction of positions where the decoded sequence matches the reference.
///
/// The decoded sequence carries the synthetic time-0 state, so position
/// `t + 1` of `decoded` is compared against position `t` of `reference`.
pub fn accuracy(decoded: &[HiddenState], reference: &[HiddenState]) -> Result<f64> {
    if reference.is_empty() {
        return Err(KakureError::EmptySequence);
    }
    if decoded.len() != reference.len() + 1 {
        return Err(KakureError::LengthMismatch {
            expected: reference.len() + 1,
            actual: decoded.len(),
        });
    }

    let mut matches = 0usize;
    for (got, want) in decoded[1..].iter().zip(reference) {
        if got == want {
            matches += 1;
        }
    }

    Ok(matches as f64 / reference.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::HiddenState::{S0, S1, S2};

    #[test]
    fn test_perfect_match() {
        let reference = [S1, S1, S0, S2];
        let decoded = [S0, S1, S1, S0, S2];
        assert_eq!(accuracy(&decoded, &reference).unwrap(), 1.0);
    }

    #[test]
    fn test_no_match() {
        let reference = [S1, S1, S1];
        let decoded = [S0, S2, S0, S2];
        assert_eq!(accuracy(&decoded, &reference).unwrap(), 0.0);
    }

    #[test]
    fn test_partial_match_in_bounds() {
        let reference = [S1, S1, S0, S2];
        let decoded = [S0, S1, S2, S0, S0];
        let acc = accuracy(&decoded, &reference).unwrap();
        assert_eq!(acc, 0.5);
        assert!((0.0..=1.0).contains(&acc));
    }

    #[test]
    fn test_initial_state_is_excluded() {
        // Same state everywhere except the synthetic slot must still be 1.0.
        let reference = [S2, S2];
        let decoded = [S0, S2, S2];
        assert_eq!(accuracy(&decoded, &reference).unwrap(), 1.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = accuracy(&[S0, S1], &[S1, S1]).unwrap_err();
        assert!(matches!(err, KakureError::LengthMismatch { .. }));
    }
}

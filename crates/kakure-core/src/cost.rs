//! # Log-Cost Algebra
//!
//! Conversions between probability space and the additive cost space the
//! decoder works in. A cost is the negative base-2 logarithm of a
//! probability, so multiplying probabilities becomes adding costs and the
//! most likely path becomes the minimum-cost path.

use crate::error::{KakureError, Result};

/// Convert a probability in (0, 1] to its cost `-log2(p)`.
///
/// Fails for non-positive inputs: the cost of zero diverges and negative
/// probabilities have no meaning.
pub fn to_cost(p: f64) -> Result<f64> {
    if p <= 0.0 {
        return Err(KakureError::CostOfNonPositive(p));
    }
    Ok(-p.log2())
}

/// Convert a cost back to its probability `2^(-c)`.
pub fn to_probability(c: f64) -> f64 {
    (-c).exp2()
}

/// Cost of a uniform prior over `n` outcomes, `-log2(1/n)`.
pub fn uniform_prior_cost(n: usize) -> f64 {
    (n as f64).log2()
}

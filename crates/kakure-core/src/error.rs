use thiserror::Error;

/// Errors that can occur during Kakure core operations.
#[derive(Debug, Error)]
pub enum KakureError {
    /// The observation sequence is empty.
    #[error("observation sequence is empty")]
    EmptySequence,

    /// Two sequences that must have matching lengths do not.
    #[error("sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// The length required by the operation.
        expected: usize,
        /// The length actually supplied.
        actual: usize,
    },

    /// A matrix does not have the required shape or contains malformed values.
    #[error("malformed matrix: {0}")]
    BadShape(String),

    /// A probability outside (0, 1] was supplied for initial parameters.
    #[error("probability must be in (0, 1], got {0}")]
    NonPositiveProbability(f64),

    /// A cost-space conversion was asked for the log of a non-positive value.
    #[error("cannot take the cost of a non-positive value: {0}")]
    CostOfNonPositive(f64),

    /// A decoding step found no finite-cost candidate for some state.
    #[error("no finite-cost path into state {state} at step {step}")]
    DecodingDeadEnd {
        /// Index of the state with no viable predecessor.
        state: usize,
        /// Time step (column) at which decoding got stuck.
        step: usize,
    },
}

/// Result type alias for Kakure operations.
pub type Result<T> = std::result::Result<T, KakureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = KakureError::EmptySequence;
        assert_eq!(err.to_string(), "observation sequence is empty");

        let err = KakureError::LengthMismatch {
            expected: 5,
            actual: 4,
        };
        assert!(err.to_string().contains("expected 5"));

        let err = KakureError::DecodingDeadEnd { state: 2, step: 7 };
        assert!(err.to_string().contains("state 2"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KakureError>();
    }
}

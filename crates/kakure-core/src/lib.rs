//! # Kakure Core
//!
//! Hard-EM (Viterbi) training engine for a small hidden Markov model with
//! three hidden states and two observable symbols. Each training round
//! decodes the single most likely state path under the current parameters,
//! then re-estimates transitions and emissions from counts along that path
//! with additive smoothing. All arithmetic happens in cost space
//! (`-log2` of probabilities), so likelihood maximization becomes
//! minimum-cost search.
//!
//! ## Quick Start
//!
//! ```rust
//! use kakure_core::{train, ModelParams, ObsSymbol};
//!
//! let transition = vec![vec![1.0 / 3.0; 3]; 3];
//! let emission = vec![vec![0.5, 0.5], vec![0.85, 0.15], vec![0.1, 0.9]];
//! let params = ModelParams::from_probabilities(transition, emission).unwrap();
//!
//! let obs: Vec<ObsSymbol> = "HTTH".chars().filter_map(ObsSymbol::from_char).collect();
//! let outcome = train(params, &obs, 5).unwrap();
//!
//! assert_eq!(outcome.decoded.len(), obs.len() + 1);
//! ```
pub mod alphabet;
pub mod cost;
pub mod error;
pub mod estimator;
pub mod params;
pub mod report;
pub mod scoring;
pub mod training;
pub mod viterbi;

// Re-export primary API
pub use alphabet::{HiddenState, ObsSymbol};
pub use error::{KakureError, Result};
pub use estimator::reestimate;
pub use params::ModelParams;
pub use report::TrainingReport;
pub use scoring::accuracy;
pub use training::{train, TrainingOutcome};
pub use viterbi::{decode, DecodeTables};

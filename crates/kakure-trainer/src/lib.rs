//! # Kakure Trainer
//!
//! The I/O collaborator around `kakure-core`: text-format loaders for
//! observations, reference labels, and initial parameter tables, plus
//! console and JSON reporting. The `train` binary wires these around the
//! core training loop.

pub mod data;
pub mod report;

pub use data::{parse_observations, parse_reference, parse_sensory, parse_transition};
pub use report::{decoded_labels, format_matrix};

//! # State and Observation Alphabets
//!
//! Defines the fixed alphabets of the model: three hidden states and two
//! observable symbols. The cardinalities are exposed as constants so that
//! every matrix shape in the crate is tied to a single definition.

use std::fmt;

/// Hidden states of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiddenState {
    S0,
    S1,
    S2,
}

impl HiddenState {
    /// Total number of hidden states.
    pub const COUNT: usize = 3;

    /// Get all states in index order.
    pub fn all() -> &'static [HiddenState] {
        &[HiddenState::S0, HiddenState::S1, HiddenState::S2]
    }

    /// Get the state index for matrix operations.
    pub fn index(&self) -> usize {
        match self {
            HiddenState::S0 => 0,
            HiddenState::S1 => 1,
            HiddenState::S2 => 2,
        }
    }

    /// Get state from index.
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(HiddenState::S0),
            1 => Some(HiddenState::S1),
            2 => Some(HiddenState::S2),
            _ => None,
        }
    }

    /// Get state from its label character (`'1'`, `'2'`, `'3'`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(HiddenState::S0),
            '2' => Some(HiddenState::S1),
            '3' => Some(HiddenState::S2),
            _ => None,
        }
    }
}

impl fmt::Display for HiddenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HiddenState::S0 => write!(f, "1"),
            HiddenState::S1 => write!(f, "2"),
            HiddenState::S2 => write!(f, "3"),
        }
    }
}

/// Observable symbols emitted by the hidden states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObsSymbol {
    Heads,
    Tails,
}

impl ObsSymbol {
    /// Total number of observable symbols.
    pub const COUNT: usize = 2;

    /// Get the symbol index for matrix operations.
    pub fn index(&self) -> usize {
        match self {
            ObsSymbol::Heads => 0,
            ObsSymbol::Tails => 1,
        }
    }

    /// Get symbol from index.
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(ObsSymbol::Heads),
            1 => Some(ObsSymbol::Tails),
            _ => None,
        }
    }

    /// Get symbol from its source character (`'H'`, `'T'`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'H' => Some(ObsSymbol::Heads),
            'T' => Some(ObsSymbol::Tails),
            _ => None,
        }
    }
}

impl fmt::Display for ObsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObsSymbol::Heads => write!(f, "H"),
            ObsSymbol::Tails => write!(f, "T"),
        }
    }
}

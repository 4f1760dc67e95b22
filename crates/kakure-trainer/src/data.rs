//! Text-format loaders for the trainer inputs.
//!
//! Observations and reference labels use character alphabets (`H`/`T` and
//! `1`/`2`/`3`); every other character, including whitespace and newlines,
//! is ignored. The transition and sensory files are whitespace-separated
//! probability tables.

use kakure_core::{HiddenState, KakureError, ObsSymbol, Result};

/// Parse an observation sequence. `'H'` and `'T'` map to the two symbols;
/// anything else is skipped.
pub fn parse_observations(text: &str) -> Result<Vec<ObsSymbol>> {
    let obs: Vec<ObsSymbol> = text.chars().filter_map(ObsSymbol::from_char).collect();
    if obs.is_empty() {
        return Err(KakureError::EmptySequence);
    }
    Ok(obs)
}

/// Parse a reference label sequence. `'1'`, `'2'`, `'3'` map to the three
/// states; anything else is skipped.
pub fn parse_reference(text: &str) -> Result<Vec<HiddenState>> {
    let labels: Vec<HiddenState> = text.chars().filter_map(HiddenState::from_char).collect();
    if labels.is_empty() {
        return Err(KakureError::EmptySequence);
    }
    Ok(labels)
}

/// Parse the 3x3 transition table: three non-empty lines of three
/// whitespace-separated probabilities each, `[to][from]` convention.
pub fn parse_transition(text: &str) -> Result<Vec<Vec<f64>>> {
    let rows: Vec<Vec<f64>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_row)
        .collect::<Result<_>>()?;

    if rows.len() != HiddenState::COUNT {
        return Err(KakureError::BadShape(format!(
            "transition file must have {} rows, got {}",
            HiddenState::COUNT,
            rows.len()
        )));
    }
    Ok(rows)
}

/// Parse the sensory file: three probabilities, one per state, giving
/// P(H | state). Expanded to the full 3x2 emission matrix with P(T | state)
/// as the complement.
pub fn parse_sensory(text: &str) -> Result<Vec<Vec<f64>>> {
    let values = parse_row(text)?;
    if values.len() != HiddenState::COUNT {
        return Err(KakureError::BadShape(format!(
            "sensory file must have {} values, got {}",
            HiddenState::COUNT,
            values.len()
        )));
    }
    Ok(values.into_iter().map(|p| vec![p, 1.0 - p]).collect())
}

fn parse_row(line: &str) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| KakureError::BadShape(format!("not a number: {token:?}")))
        })
        .collect()
}

//! GridState - what the store hands back for one grid
//!
//! The token layout travels as an opaque string; this module is the only
//! place that knows it is a JSON array of tokens.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::error::GridError;
use crate::domain::{Token, TokenGrid};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    pub tokens: String,
    #[serde(deserialize_with = "number_or_string")]
    pub rows: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub cols: u32,
}

impl GridState {
    pub fn from_grid(grid: &TokenGrid) -> Result<Self, GridError> {
        Ok(Self {
            tokens: encode_tokens(grid)?,
            rows: grid.rows(),
            cols: grid.cols(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, GridError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serialize tokens in paint order.
pub fn encode_tokens(grid: &TokenGrid) -> Result<String, GridError> {
    let tokens: Vec<&Token> = grid.tokens().map(|(_, t)| t).collect();
    Ok(serde_json::to_string(&tokens)?)
}

pub fn decode_tokens(tokens: &str) -> Result<Vec<Token>, GridError> {
    // A never-saved grid stores an empty string.
    if tokens.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(tokens)?)
}

impl TokenGrid {
    /// Rebuild a grid from stored state. Tokens that overlap or fall off the
    /// grid are reported rather than silently dropped.
    pub fn from_state(state: &GridState) -> Result<Self, GridError> {
        let mut grid = TokenGrid::new(state.rows, state.cols)?;
        for token in decode_tokens(&state.tokens)? {
            grid.add_token(token)?;
        }
        Ok(grid)
    }
}

// The key-value store returns numeric attributes as strings.
fn number_or_string<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

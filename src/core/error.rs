//! Error kinds surfaced to embedding code
//!
//! Rejected drops are not errors (the model simply leaves the token where it
//! was). These variants cover API misuse and bad persisted state.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        col: i32,
        row: i32,
        cols: u32,
        rows: u32,
    },

    #[error("cell ({col}, {row}) is already occupied")]
    OccupiedCell { col: u32, row: u32 },

    #[error("grid dimensions {rows} rows x {cols} cols are out of range")]
    InvalidDimensions { rows: u32, cols: u32 },

    #[error("invalid view setting `{field}`: {value}")]
    InvalidSettings { field: &'static str, value: f64 },

    #[error("malformed token state: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no stored state for grid `{0}`")]
    NotFound(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

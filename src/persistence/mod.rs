//! Persistence boundary: token-state codec and the store interface

pub mod state;
pub mod store;

pub use state::{decode_tokens, encode_tokens, GridState};
pub use store::{GridStore, MemoryStore};

use crate::core::error::StoreError;
use crate::domain::TokenGrid;

/// Fetch and rebuild a grid.
pub fn load_grid<S: GridStore + ?Sized>(store: &S, grid_id: &str) -> Result<TokenGrid, StoreError> {
    let state = store.load_state(grid_id)?;
    Ok(TokenGrid::from_state(&state)?)
}

/// Write both the dimensions and the current layout.
pub fn save_grid<S: GridStore + ?Sized>(
    store: &mut S,
    grid_id: &str,
    grid: &TokenGrid,
) -> Result<(), StoreError> {
    store.save_dimensions(grid_id, grid.rows(), grid.cols())?;
    store.save_tokens(grid_id, &encode_tokens(grid)?)
}

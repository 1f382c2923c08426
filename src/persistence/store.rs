//! GridStore - the persistence collaborator as seen from the view
//!
//! The real backend is an HTTP service over a key-value table. The view only
//! needs these three calls, so the trait is all it depends on.

use std::collections::HashMap;

use log::debug;

use crate::core::error::StoreError;

use super::state::GridState;

pub trait GridStore {
    fn load_state(&self, grid_id: &str) -> Result<GridState, StoreError>;
    fn save_tokens(&mut self, grid_id: &str, tokens: &str) -> Result<(), StoreError>;
    fn save_dimensions(&mut self, grid_id: &str, rows: u32, cols: u32) -> Result<(), StoreError>;
}

/// In-process store keyed by grid id.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    grids: HashMap<String, GridState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    // Saving one half before the other creates the record; unset
    // dimensions read back as 0 and fail when turned into a grid.
    fn entry(&mut self, grid_id: &str) -> &mut GridState {
        self.grids.entry(grid_id.to_string()).or_insert_with(|| GridState {
            tokens: String::new(),
            rows: 0,
            cols: 0,
        })
    }
}

impl GridStore for MemoryStore {
    fn load_state(&self, grid_id: &str) -> Result<GridState, StoreError> {
        self.grids
            .get(grid_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(grid_id.to_string()))
    }

    fn save_tokens(&mut self, grid_id: &str, tokens: &str) -> Result<(), StoreError> {
        debug!("saving {} bytes of token state for `{grid_id}`", tokens.len());
        self.entry(grid_id).tokens = tokens.to_string();
        Ok(())
    }

    fn save_dimensions(&mut self, grid_id: &str, rows: u32, cols: u32) -> Result<(), StoreError> {
        let state = self.entry(grid_id);
        state.rows = rows;
        state.cols = cols;
        Ok(())
    }
}

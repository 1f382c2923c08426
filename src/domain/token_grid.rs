//! TokenGrid - token positions on a fixed rows x cols grid
//!
//! Two views of the same data:
//!   tokens[]  - insertion order, which is also paint order (back to front)
//!   cells[]   - dense row-major lookup, cell -> TokenId, for O(1) hit tests
//!
//! Every mutation goes through `add_token` / `move_token`, which update both
//! together so that each token sits in exactly one cell and each occupied cell
//! points back at exactly one token.

use crate::core::error::GridError;
use crate::domain::token::{Token, TokenId};

mod indexing;
mod moves;

pub struct TokenGrid {
    rows: u32,
    cols: u32,
    tokens: Vec<Token>,
    cells: Vec<Option<TokenId>>,
}

/// Upper bound on `rows * cols`; the occupancy table is allocated up front.
pub const MAX_CELLS: usize = 1 << 20;

impl TokenGrid {
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        let cell_count = (rows as usize)
            .checked_mul(cols as usize)
            .filter(|&n| n > 0 && n <= MAX_CELLS)
            .ok_or(GridError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            tokens: Vec::new(),
            cells: vec![None; cell_count],
        })
    }

    /// The starter layout: 15x15 with one circle and one square.
    pub fn demo() -> Self {
        let mut grid = Self {
            rows: 15,
            cols: 15,
            tokens: Vec::with_capacity(2),
            cells: vec![None; 15 * 15],
        };
        // Both cells are in bounds and distinct, so neither insert can fail.
        let _ = grid.add_token(Token::circle(1, 1, "#990099"));
        let _ = grid.add_token(Token::square(14, 13, "#009900"));
        grid
    }

    /// Insert a token at its own coordinates.
    pub fn add_token(&mut self, token: Token) -> Result<TokenId, GridError> {
        let (col, row) = token.cell();
        let idx = self.checked_index(col as i32, row as i32)?;
        if self.cells[idx].is_some() {
            return Err(GridError::OccupiedCell { col, row });
        }

        let id = TokenId(self.tokens.len());
        self.tokens.push(token);
        self.cells[idx] = Some(id);
        Ok(id)
    }

    /// Occupant of a cell, if any.
    pub fn token_at(&self, col: i32, row: i32) -> Result<Option<TokenId>, GridError> {
        let idx = self.checked_index(col, row)?;
        Ok(self.cells[idx])
    }

    #[inline]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0)
    }

    /// All tokens in paint order.
    pub fn tokens(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        self.tokens.iter().enumerate().map(|(i, t)| (TokenId(i), t))
    }

    #[inline]
    pub fn len(&self) -> usize { self.tokens.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }
}

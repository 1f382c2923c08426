//! Token - a movable occupant of exactly one grid cell

use serde::{Deserialize, Serialize};

/// Stable handle to a token: its position in insertion (paint) order.
/// Tokens are never removed, so ids stay valid for the life of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenId(pub(crate) usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenShape {
    Circle,
    Square,
}

/// Persisted field names follow the stored layout: `x`/`y` are the cell
/// column/row and `type` is the shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "x")]
    col: u32,
    #[serde(rename = "y")]
    row: u32,
    color: String,
    #[serde(rename = "type")]
    shape: TokenShape,
}

impl Token {
    pub fn new(col: u32, row: u32, color: impl Into<String>, shape: TokenShape) -> Self {
        Self {
            col,
            row,
            color: color.into(),
            shape,
        }
    }

    pub fn circle(col: u32, row: u32, color: impl Into<String>) -> Self {
        Self::new(col, row, color, TokenShape::Circle)
    }

    pub fn square(col: u32, row: u32, color: impl Into<String>) -> Self {
        Self::new(col, row, color, TokenShape::Square)
    }

    #[inline]
    pub fn col(&self) -> u32 { self.col }

    #[inline]
    pub fn row(&self) -> u32 { self.row }

    #[inline]
    pub fn cell(&self) -> (u32, u32) { (self.col, self.row) }

    #[inline]
    pub fn color(&self) -> &str { &self.color }

    #[inline]
    pub fn shape(&self) -> TokenShape { self.shape }

    // Only the grid may relocate a token; it keeps the lookup table in sync.
    pub(crate) fn set_cell(&mut self, col: u32, row: u32) {
        self.col = col;
        self.row = row;
    }
}

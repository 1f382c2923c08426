//! Domain types: tokens and the grid that owns them

pub mod token;
pub mod token_grid;

pub use token::{Token, TokenId, TokenShape};
pub use token_grid::TokenGrid;

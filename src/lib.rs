//! Token Grid - pannable grid of draggable tokens for the browser canvas
//!
//! Architecture:
//! - core/         - Errors, logging
//! - domain/       - Tokens and the grid that owns them
//! - view/         - Camera, gesture state machine, renderer, GridView
//! - persistence/  - Token-state codec and store interface
//! - api/          - wasm-bindgen facade and DOM wiring

pub mod core;
pub mod domain;
pub mod view;
pub mod persistence;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::install(log::LevelFilter::Info);
    log::info!("token-grid {} initialized", version());
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::GridCanvas;
pub use crate::core::{GridError, StoreError};
pub use domain::{Token, TokenGrid, TokenId, TokenShape};
pub use persistence::{GridState, GridStore, MemoryStore};
pub use view::{Camera, Gesture, GridView, InputEvent, RecordingSurface, Surface, ViewSettings};

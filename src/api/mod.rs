//! Browser API - `wasm_bindgen` facade and DOM event wiring

pub mod dom;
pub mod wasm;

pub use wasm::GridCanvas;

//! Core: error kinds and console logging

pub mod error;
pub mod logging;

pub use error::{GridError, StoreError};

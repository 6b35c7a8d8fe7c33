//! Error handling for the guard
//!
//! This module defines the crate error type and its HTTP rendering.

pub mod error;

// Re-export commonly used types
pub use error::*;

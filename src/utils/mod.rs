//! Utility modules for the role guard
//!
//! - **error**: Error types and their HTTP rendering

pub mod error; // Error handling

//! Validation trait definition

/// Checks a configuration structure, returning a human-readable reason on failure
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

//! Integration tests

mod config_validation_tests;
mod guard_tests;
mod server_tests;

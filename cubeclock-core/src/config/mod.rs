//! Configuration management
//!
//! Defines all configuration types and their validation.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::ConfigError;

//! Spring error types

use thiserror::Error;

/// Errors raised while building springs or loading spring configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpringError {
    /// A physical parameter is out of range (`strength <= 0`, `dampness < 0`,
    /// or not finite)
    #[error("Invalid spring parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// A configuration document could not be parsed
    #[error("Spring config error: {0}")]
    Config(String),

    /// A named preset does not exist
    #[error("Unknown spring preset: {0}")]
    UnknownPreset(String),
}

/// Result type for spring operations
pub type Result<T> = std::result::Result<T, SpringError>;

//! Error types for the misprint library.
//!
//! All fallible operations return [`MisprintError`] through the [`Result`]
//! alias. The correction core only ever raises
//! [`MisprintError::InvalidArgument`]; the remaining variants belong to the
//! word source, configuration and command-line layers.
//!
//! # Examples
//!
//! ```
//! use misprint::error::{MisprintError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MisprintError::invalid_argument("empty word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for misprint operations.
#[derive(Error, Debug)]
pub enum MisprintError {
    /// Null/empty words or tokens, or a distance the word cannot support.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration values that cannot be honoured.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors (word lists, interactive input, output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with MisprintError.
pub type Result<T> = std::result::Result<T, MisprintError>;

impl MisprintError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        MisprintError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        MisprintError::InvalidConfig(msg.into())
    }

    /// Whether this error was raised for bad caller input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MisprintError::InvalidArgument(_))
    }
}

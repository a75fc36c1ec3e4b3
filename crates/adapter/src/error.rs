//! Error types for the adapter crate.

use derive_more::{Display, Error};

/// Errors surfaced by the adapter's fallible ambient operations.
///
/// The adapter operations themselves are total; only configuration loading
/// can fail.
#[derive(Debug, Display, Error)]
pub enum AdapterError {
    /// Configuration could not be loaded or failed validation.
    #[display("configuration error: {message}")]
    Configuration { message: String },
}

impl AdapterError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

//! Unified error type for lumina.

use thiserror::Error;

/// Errors that can occur during image generation.
#[derive(Debug, Error)]
pub enum LuminaError {
    /// The service rejected the request or reported a failure.
    ///
    /// Displays the service-provided message alone; `status` is kept for
    /// callers that need to distinguish rejection classes.
    #[error("{message}")]
    Service {
        /// HTTP status code (0 for replayed/non-HTTP failures).
        status: u16,
        /// Human-readable message from the service.
        message: String,
    },

    /// The call succeeded but no part of the response carried image data.
    #[error("No image data received from the model.")]
    NoImageData,

    /// A generation request is already outstanding.
    #[error("A generation request is already in progress.")]
    InFlight,

    /// A network error occurred.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No API key configured.
    #[error("No API key for {provider}. Set {env_var} or add it to config file.")]
    MissingApiKey {
        /// The provider name.
        provider: String,
        /// The environment variable name.
        env_var: String,
    },
}

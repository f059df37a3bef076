//! Application-level errors: requests and config

use thiserror::Error;

/// Request and config failures.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("request failed: {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("HTTP error: status {status}, message: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("cannot encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("cannot decode response: {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

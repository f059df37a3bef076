//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed command invocations.
/// They are raised before any network access happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown resource: {0} (expected 'products' or 'products/<id>')")]
    UnknownResource(String),

    #[error("{command} does not support resource: {resource}")]
    UnsupportedResource { command: String, resource: String },

    #[error("missing resource path (expected 'products' or 'products/<id>')")]
    MissingResource,

    #[error("missing arguments, usage: {usage}")]
    MissingArguments { usage: &'static str },

    #[error("unexpected arguments for {command}: {args}")]
    UnexpectedArguments { command: String, args: String },

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid product id: {0:?}")]
    InvalidProductId(String),
}

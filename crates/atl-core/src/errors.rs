//! Cross-cutting error types for Atelier.
//!
//! Transport errors live in `atl-api` and configuration errors in `atl-config`.
//! The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Atelier crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A collection name did not match any known entity kind.
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// A model name did not match any admin export model.
    #[error("Unknown export model: {0}")]
    UnknownModel(String),

    /// Data failed local validation before being sent.
    #[error("Validation error: {0}")]
    Validation(String),
}

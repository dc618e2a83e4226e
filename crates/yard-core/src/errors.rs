//! Cross-cutting error types for Switchyard.
//!
//! Domain-specific errors (e.g., `ExportError`, `AnalyticsError`) are defined in
//! their respective crates. `anyhow` is only used at the binary edge and for
//! the `Other` catch-all below.

use thiserror::Error;

/// Errors that can be raised by any Switchyard crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} on {event}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        event: String,
    },

    /// Data failed validation (unknown enum value, malformed input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

//! Dialog error types.

use thiserror::Error;
use yard_core::errors::CoreError;

use crate::schema::ValidationErrors;

/// Error returned by an externally supplied submission handler.
pub type SubmitError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum DialogError {
    /// One or more rules failed; the dialog stays open with field errors.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The submission handler failed; the dialog stays open and the form keeps
    /// its values. Not retried.
    #[error("submission failed: {0}")]
    Submission(#[source] SubmitError),

    /// `set_field` named a field the form does not have.
    #[error("unknown field '{field}' on {form}")]
    UnknownField { form: &'static str, field: String },

    /// Lifecycle violation or typed-output conversion failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

//! # yard-forms
//!
//! Schema-driven form validation and dialog lifecycle control for the
//! Switchyard console dialogs, independent of any rendering technology.
//!
//! - [`Rule`] / [`Schema`]: composable predicates over a form snapshot, each
//!   bound to one field and reporting pass/fail plus a message
//! - [`schemas`]: the add-API-key, invite-member, and update-member forms
//! - [`Dialog`]: the open → edit → submit → close controller driving
//!   [`yard_core::lifecycle::DialogState`]
//!
//! Validation never fails by panicking or by returning an error from the
//! rules themselves: a failing rule produces a [`FieldError`] that the caller
//! renders next to the field (and, for summary fields, in a banner).

mod dialog;
mod error;
mod form;
mod rule;
mod schema;
pub mod schemas;

pub use dialog::Dialog;
pub use error::{DialogError, SubmitError};
pub use form::{DialogForm, FormValues, ValidationMode};
pub use rule::Rule;
pub use schema::{FieldError, Schema, ValidationErrors};

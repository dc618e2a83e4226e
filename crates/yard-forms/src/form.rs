use yard_core::errors::CoreError;

use crate::schema::Schema;

/// Raw, string-valued form state as edited by the user.
///
/// Fields hold exactly what the input widgets hold (an unselected menu is an
/// empty string); typed values are only produced by [`DialogForm::output`]
/// once the schema passes.
pub trait FormValues: Clone + Default + PartialEq + std::fmt::Debug + 'static {
    /// Field names in display order.
    const FIELDS: &'static [&'static str];

    /// Current value of `field`, or `None` if the form has no such field.
    fn get(&self, field: &str) -> Option<&str>;

    /// Overwrite `field`. Returns `false` if the form has no such field.
    fn set(&mut self, field: &str, value: String) -> bool;
}

/// When field edits trigger validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Every edit re-validates the edited field.
    OnChange,
    /// Nothing is validated until the first submit attempt; after that, every
    /// edit re-validates the edited field.
    OnSubmit,
}

/// A dialog's form definition: its values, rules, and typed result.
pub trait DialogForm {
    type Values: FormValues;
    type Output;

    /// Name used in logs and errors.
    const NAME: &'static str;
    const TITLE: &'static str;
    const SUBMIT_LABEL: &'static str;
    /// Submit button label while the handler runs.
    const BUSY_LABEL: &'static str;

    /// Values the form resets to on open, close, and successful submit.
    fn defaults(&self) -> Self::Values;

    fn schema(&self) -> &Schema<Self::Values>;

    fn mode(&self) -> ValidationMode;

    /// Fields re-checked when `field` changes, in addition to `field` itself.
    fn dependents(&self, _field: &str) -> &'static [&'static str] {
        &[]
    }

    /// Fields re-checked when the caller replaces the form's context (existing
    /// entries, current role, ...).
    fn context_dependents(&self) -> &'static [&'static str] {
        &[]
    }

    /// Whether a context change while open resets the form to
    /// [`Self::defaults`].
    fn resets_on_context_change(&self) -> bool {
        false
    }

    /// Convert validated values into the handler's input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if a value cannot be parsed. Only
    /// reachable when called with values the schema rejects.
    fn output(&self, values: &Self::Values) -> Result<Self::Output, CoreError>;
}

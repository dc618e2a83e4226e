//! Dialog controller: owns one form's values and errors and drives the
//! lifecycle state machine from `yard-core`.

use std::future::Future;

use yard_core::lifecycle::{DialogEvent, DialogState};

use crate::error::{DialogError, SubmitError};
use crate::form::{DialogForm, FormValues, ValidationMode};
use crate::schema::ValidationErrors;

/// A modal dialog around a [`DialogForm`].
///
/// Each instance owns its form state exclusively. Submission calls an
/// externally supplied async handler with the typed output; the dialog
/// never talks to the network itself.
#[derive(Debug)]
pub struct Dialog<F: DialogForm> {
    form: F,
    state: DialogState,
    values: F::Values,
    errors: ValidationErrors,
    submit_attempted: bool,
}

impl<F: DialogForm> Dialog<F> {
    /// Create a closed dialog.
    pub fn new(form: F) -> Self {
        let values = form.defaults();
        Self {
            form,
            state: DialogState::Closed,
            values,
            errors: ValidationErrors::default(),
            submit_attempted: false,
        }
    }

    pub const fn form(&self) -> &F {
        &self.form
    }

    pub const fn state(&self) -> DialogState {
        self.state
    }

    pub const fn values(&self) -> &F::Values {
        &self.values
    }

    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// True while the submission handler runs; buttons should be disabled.
    pub const fn is_busy(&self) -> bool {
        matches!(self.state, DialogState::Submitting)
    }

    pub const fn title(&self) -> &'static str {
        F::TITLE
    }

    pub const fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            F::BUSY_LABEL
        } else {
            F::SUBMIT_LABEL
        }
    }

    /// Open (or re-open) the dialog with the form reset to its defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Core`] while a submission is in flight.
    pub fn open(&mut self) -> Result<(), DialogError> {
        self.transition(DialogEvent::Open)?;
        self.reset();
        Ok(())
    }

    /// Close the dialog, discarding edits and errors.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Core`] while a submission is in flight.
    pub fn close(&mut self) -> Result<(), DialogError> {
        self.transition(DialogEvent::Close)?;
        self.reset();
        Ok(())
    }

    /// Apply a user edit.
    ///
    /// In [`ValidationMode::OnChange`] (or after the first submit attempt)
    /// the edited field is re-validated, along with dependent fields that
    /// already hold a value or an error.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::UnknownField`] for a field the form does not
    /// have, and [`DialogError::Core`] when the dialog is closed or submitting.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), DialogError> {
        let next = self.state.apply(DialogEvent::FieldChanged)?;
        if !self.values.set(field, value.into()) {
            return Err(DialogError::UnknownField {
                form: F::NAME,
                field: field.to_string(),
            });
        }
        self.enter(DialogEvent::FieldChanged, next);

        if self.validates_on_change() {
            self.revalidate(field);
            for dependent in self.form.dependents(field) {
                if self.is_touched(dependent) {
                    self.revalidate(dependent);
                }
            }
        }
        Ok(())
    }

    /// Mutate the form's context (existing entries, current role, ...).
    ///
    /// While open, the form either resets to its new defaults or re-checks
    /// its context-dependent fields that already hold a value.
    pub fn update_form(&mut self, update: impl FnOnce(&mut F)) {
        update(&mut self.form);
        if !self.is_open() || self.is_busy() {
            return;
        }
        if self.form.resets_on_context_change() {
            self.enter(DialogEvent::Open, DialogState::Pristine);
            self.reset();
            return;
        }
        for field in self.form.context_dependents() {
            if self.values.get(field).is_some_and(|v| !v.is_empty()) {
                self.revalidate(field);
            }
        }
    }

    /// Validate every field and replace the displayed errors.
    ///
    /// Returns `true` when the form passes.
    pub fn validate(&mut self) -> bool {
        match self.form.schema().validate(&self.values) {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// First half of a submit: validate and, on success, enter `submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Validation`] (dialog stays open, errors are
    /// displayed) or [`DialogError::Core`] if the dialog is not open.
    pub fn begin_submit(&mut self) -> Result<F::Output, DialogError> {
        let next = self.state.apply(DialogEvent::Submit)?;
        self.submit_attempted = true;

        if !self.validate() {
            tracing::debug!(form = F::NAME, errors = %self.errors, "submit blocked by validation");
            return Err(DialogError::Validation(self.errors.clone()));
        }

        let output = self.form.output(&self.values)?;
        self.enter(DialogEvent::Submit, next);
        Ok(output)
    }

    /// Second half of a submit: record the handler's outcome.
    ///
    /// Success resets the form and closes the dialog. Failure leaves it open
    /// with the entered values and hands the error back to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::Submission`] carrying the handler's error, or
    /// [`DialogError::Core`] if no submission was in flight.
    pub fn finish_submit<E>(&mut self, outcome: Result<(), E>) -> Result<(), DialogError>
    where
        E: Into<SubmitError>,
    {
        match outcome {
            Ok(()) => {
                self.transition(DialogEvent::SubmitSucceeded)?;
                self.reset();
                Ok(())
            }
            Err(err) => {
                self.transition(DialogEvent::SubmitFailed)?;
                let err: SubmitError = err.into();
                tracing::error!(form = F::NAME, error = %err, "dialog submission failed");
                Err(DialogError::Submission(err))
            }
        }
    }

    /// Validate, run `handler` with the typed output, and record the outcome.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_submit`] and [`Self::finish_submit`].
    pub async fn submit<H, Fut, E>(&mut self, handler: H) -> Result<(), DialogError>
    where
        H: FnOnce(F::Output) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Into<SubmitError>,
    {
        let output = self.begin_submit()?;
        let outcome = handler(output).await;
        self.finish_submit(outcome)
    }

    fn validates_on_change(&self) -> bool {
        match self.form.mode() {
            ValidationMode::OnChange => true,
            ValidationMode::OnSubmit => self.submit_attempted,
        }
    }

    fn is_touched(&self, field: &str) -> bool {
        self.errors.get(field).is_some() || self.values.get(field).is_some_and(|v| !v.is_empty())
    }

    fn revalidate(&mut self, field: &str) {
        let error = self.form.schema().validate_field(field, &self.values);
        self.errors.replace(field, error);
    }

    fn reset(&mut self) {
        self.values = self.form.defaults();
        self.errors.clear();
        self.submit_attempted = false;
    }

    fn transition(&mut self, event: DialogEvent) -> Result<(), DialogError> {
        let next = self.state.apply(event)?;
        self.enter(event, next);
        Ok(())
    }

    fn enter(&mut self, event: DialogEvent, next: DialogState) {
        if next != self.state {
            tracing::debug!(form = F::NAME, from = %self.state, %event, to = %next, "dialog transition");
        }
        self.state = next;
    }
}

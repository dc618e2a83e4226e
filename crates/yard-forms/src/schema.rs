//! Ordered rule sets and their validation results.

use std::fmt;

use serde::Serialize;

use crate::form::FormValues;
use crate::rule::Rule;

/// A single failed rule, rendered next to its field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    /// Name of the rule that failed (`required`, `one_of`, ...).
    pub rule: &'static str,
    pub message: String,
    /// Also shown in the dialog's form-level banner.
    pub summary: bool,
}

/// Field errors produced by [`Schema::validate`], at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error currently attached to `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Message for `field`, if it has an error.
    #[must_use]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages for the form-level banner.
    #[must_use]
    pub fn summary(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.summary)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Replace the error for `field` (or clear it with `None`), keeping the
    /// remaining fields untouched.
    pub(crate) fn replace(&mut self, field: &str, error: Option<FieldError>) {
        self.errors.retain(|e| e.field != field);
        if let Some(error) = error {
            self.errors.push(error);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// An ordered list of rules over a form snapshot.
///
/// For each field, the first failing rule (in the order rules were added) is
/// the one reported.
#[derive(Debug)]
pub struct Schema<V> {
    rules: Vec<Rule<V>>,
    summary_fields: Vec<&'static str>,
}

impl<V: FormValues> Default for Schema<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FormValues> Schema<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: Vec::new(),
            summary_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule<V>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Surface `field`'s errors in the form-level banner as well.
    #[must_use]
    pub fn summarize(mut self, field: &'static str) -> Self {
        self.summary_fields.push(field);
        self
    }

    /// Check one field. Returns the first failing rule's error.
    pub fn validate_field(&self, field: &str, values: &V) -> Option<FieldError> {
        self.rules
            .iter()
            .filter(|rule| rule.field() == field)
            .find(|rule| !rule.passes(values))
            .map(|rule| FieldError {
                field: rule.field(),
                rule: rule.name(),
                message: rule.message().to_string(),
                summary: self.summary_fields.contains(&rule.field()),
            })
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the collected [`ValidationErrors`] when any field fails.
    pub fn validate(&self, values: &V) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = V::FIELDS
            .iter()
            .filter_map(|field| self.validate_field(field, values))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule<V>> {
        self.rules.iter()
    }
}

//! Field rules: required, enumerated value, pattern, email, and custom
//! cross-field or contextual predicates.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::form::FormValues;

/// WHATWG-style email shape, as used by browser `type=email` inputs.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("static pattern")
});

type Predicate<V> = Box<dyn Fn(&str, &V) -> bool + Send + Sync>;

/// A named check on one field of a form snapshot.
///
/// The predicate receives the field's current value and the whole snapshot,
/// so cross-field rules ("key matches the selected provider") are ordinary
/// rules. Context (existing keys, current role) is captured by the closure.
pub struct Rule<V> {
    field: &'static str,
    name: &'static str,
    message: String,
    skip_empty: bool,
    check: Predicate<V>,
}

impl<V: FormValues> Rule<V> {
    /// Fails when the field is empty. Whitespace counts as a value and is
    /// left to the field's shape rules.
    pub fn required(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            name: "required",
            message: message.into(),
            skip_empty: false,
            check: Box::new(|value: &str, _: &V| !value.is_empty()),
        }
    }

    /// Fails when a non-empty value is not one of `allowed`.
    ///
    /// The default message lists the allowed values.
    pub fn one_of(field: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            field,
            name: "one_of",
            message: format!(
                "{field} must be one of the following values: {}",
                allowed.join(", ")
            ),
            skip_empty: true,
            check: Box::new(move |value: &str, _: &V| allowed.iter().any(|a| *a == value)),
        }
    }

    /// Fails when a non-empty value does not match `pattern`.
    pub fn pattern(field: &'static str, pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            field,
            name: "pattern",
            message: message.into(),
            skip_empty: true,
            check: Box::new(move |value: &str, _: &V| pattern.is_match(value)),
        }
    }

    /// Fails when a non-empty value is not an email address.
    pub fn email(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            name: "email",
            message: message.into(),
            skip_empty: true,
            check: Box::new(|value: &str, _: &V| EMAIL.is_match(value)),
        }
    }

    /// Arbitrary predicate over the field value and the whole snapshot.
    ///
    /// Runs on empty values too; use [`Rule::skip_empty`] to opt out.
    pub fn custom<P>(field: &'static str, name: &'static str, message: impl Into<String>, check: P) -> Self
    where
        P: Fn(&str, &V) -> bool + Send + Sync + 'static,
    {
        Self {
            field,
            name,
            message: message.into(),
            skip_empty: false,
            check: Box::new(check),
        }
    }

    /// Replace the failure message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Treat an empty value as passing.
    #[must_use]
    pub const fn skip_empty(mut self) -> Self {
        self.skip_empty = true;
        self
    }

    /// Evaluate the rule. `true` means the value passes.
    pub fn passes(&self, values: &V) -> bool {
        let value = values.get(self.field).unwrap_or_default();
        if self.skip_empty && value.is_empty() {
            return true;
        }
        (self.check)(value, values)
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("field", &self.field)
            .field("name", &self.name)
            .field("message", &self.message)
            .field("skip_empty", &self.skip_empty)
            .finish_non_exhaustive()
    }
}

//! Dialog lifecycle state machine.
//!
//! ```text
//! closed ──open──▶ pristine ──field_changed──▶ dirty
//!                     │  ▲                      │
//!                     │  └──────── open ────────┤
//!                     └──submit──▶ submitting ◀─┘ submit
//!                                  │        │
//!                 submit_succeeded │        │ submit_failed
//!                                  ▼        ▼
//!                               closed    dirty
//! ```
//!
//! `close` is accepted from every state except `submitting`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Where a dialog is in its open/edit/submit lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Closed,
    /// Open with the form at its reset values.
    Pristine,
    /// Open with at least one edited field.
    Dirty,
    /// The submission handler is running.
    Submitting,
}

/// Inputs that drive [`DialogState`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DialogEvent {
    Open,
    FieldChanged,
    Submit,
    SubmitSucceeded,
    SubmitFailed,
    Close,
}

impl DialogState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Closed => &[Self::Pristine, Self::Closed],
            Self::Pristine | Self::Dirty => {
                &[Self::Pristine, Self::Dirty, Self::Submitting, Self::Closed]
            }
            Self::Submitting => &[Self::Closed, Self::Dirty],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Compute the state that follows `event`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] when `event` is not accepted in
    /// the current state (e.g. editing or closing while submitting).
    pub fn apply(self, event: DialogEvent) -> Result<Self, CoreError> {
        let next = match (self, event) {
            (Self::Closed | Self::Pristine | Self::Dirty, DialogEvent::Open) => Some(Self::Pristine),
            (Self::Pristine | Self::Dirty, DialogEvent::FieldChanged) => Some(Self::Dirty),
            (Self::Pristine | Self::Dirty, DialogEvent::Submit) => Some(Self::Submitting),
            (Self::Submitting, DialogEvent::SubmitSucceeded) => Some(Self::Closed),
            (Self::Submitting, DialogEvent::SubmitFailed) => Some(Self::Dirty),
            (Self::Closed | Self::Pristine | Self::Dirty, DialogEvent::Close) => Some(Self::Closed),
            _ => None,
        };
        next.ok_or_else(|| CoreError::InvalidTransition {
            entity_type: "dialog".to_string(),
            from: self.to_string(),
            event: event.to_string(),
        })
    }

    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Pristine => "pristine",
            Self::Dirty => "dirty",
            Self::Submitting => "submitting",
        }
    }
}

impl fmt::Display for DialogState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DialogEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::FieldChanged => "field_changed",
            Self::Submit => "submit",
            Self::SubmitSucceeded => "submit_succeeded",
            Self::SubmitFailed => "submit_failed",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for DialogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [DialogState; 4] = [
        DialogState::Closed,
        DialogState::Pristine,
        DialogState::Dirty,
        DialogState::Submitting,
    ];

    const ALL_EVENTS: [DialogEvent; 6] = [
        DialogEvent::Open,
        DialogEvent::FieldChanged,
        DialogEvent::Submit,
        DialogEvent::SubmitSucceeded,
        DialogEvent::SubmitFailed,
        DialogEvent::Close,
    ];

    #[test]
    fn happy_path() {
        let state = DialogState::Closed
            .apply(DialogEvent::Open)
            .and_then(|s| s.apply(DialogEvent::FieldChanged))
            .and_then(|s| s.apply(DialogEvent::Submit))
            .and_then(|s| s.apply(DialogEvent::SubmitSucceeded))
            .unwrap();
        assert_eq!(state, DialogState::Closed);
    }

    #[test]
    fn failed_submit_returns_to_dirty() {
        let state = DialogState::Submitting.apply(DialogEvent::SubmitFailed).unwrap();
        assert_eq!(state, DialogState::Dirty);
        assert!(state.is_open());
    }

    #[test]
    fn reopen_resets_to_pristine() {
        assert_eq!(
            DialogState::Dirty.apply(DialogEvent::Open).unwrap(),
            DialogState::Pristine
        );
    }

    #[test]
    fn submitting_rejects_edits_and_close() {
        for event in [DialogEvent::FieldChanged, DialogEvent::Close, DialogEvent::Submit, DialogEvent::Open] {
            let err = DialogState::Submitting.apply(event).unwrap_err();
            assert!(matches!(err, CoreError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn closed_rejects_edits() {
        assert!(DialogState::Closed.apply(DialogEvent::FieldChanged).is_err());
        assert!(DialogState::Closed.apply(DialogEvent::Submit).is_err());
    }

    #[test]
    fn apply_agrees_with_allowed_next_states() {
        for state in ALL_STATES {
            for event in ALL_EVENTS {
                if let Ok(next) = state.apply(event) {
                    assert!(
                        state.can_transition_to(next),
                        "{state} --{event}--> {next} missing from allowed_next_states"
                    );
                }
            }
        }
    }
}

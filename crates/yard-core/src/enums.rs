//! Provider and role enums for Switchyard.
//!
//! All enums use lowercase serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the wire/form representation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// Upstream LLM provider an API key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Openai,
    Anthropic,
    Gemini,
}

static OPENAI_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sk-(proj-)?[A-Za-z0-9_-]{20,}$").expect("static pattern"));
static ANTHROPIC_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sk-ant-[A-Za-z0-9_-]{20,}$").expect("static pattern"));
static GEMINI_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^AIza[0-9A-Za-z_-]{30,}$").expect("static pattern"));

impl Provider {
    /// Every provider, in menu order.
    pub const ALL: [Self; 3] = [Self::Openai, Self::Anthropic, Self::Gemini];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Openai => "openai",
            Self::Anthropic => "anthropic",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable label for selection menus.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Openai => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Gemini => "Gemini",
        }
    }

    /// Pattern a key issued by this provider must match.
    ///
    /// - openai: `sk-` or `sk-proj-` followed by at least 20 key characters
    /// - anthropic: `sk-ant-` followed by at least 20 key characters
    /// - gemini: `AIza` followed by at least 30 key characters
    ///
    /// # Panics
    ///
    /// Never in practice: the patterns are compile-time constants.
    #[must_use]
    pub fn key_pattern(self) -> &'static Regex {
        match self {
            Self::Openai => &OPENAI_KEY,
            Self::Anthropic => &ANTHROPIC_KEY,
            Self::Gemini => &GEMINI_KEY,
        }
    }

    /// Check whether `key` has the shape of a key issued by this provider.
    ///
    /// `sk-ant-` keys fit the generic openai `sk-` shape, so openai also
    /// rejects anything carrying the anthropic prefix.
    #[must_use]
    pub fn accepts_key(self, key: &str) -> bool {
        match self {
            Self::Openai => {
                self.key_pattern().is_match(key) && !Self::Anthropic.key_pattern().is_match(key)
            }
            Self::Anthropic | Self::Gemini => self.key_pattern().is_match(key),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown provider: {s}")))
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Project membership role.
///
/// Invitations may grant any role; role updates on existing members are
/// limited to [`Role::ASSIGNABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Member,
    Viewer,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Admin, Self::Member, Self::Viewer];

    /// Roles an existing member can be moved between.
    pub const ASSIGNABLE: [Self; 2] = [Self::Admin, Self::Member];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown role: {s}")))
    }
}

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Provider;

/// A provider API key registered on a project.
///
/// At most one key is stored per provider. Listings returned by the backend
/// may omit the secret, in which case `key` is empty.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ApiKey {
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
}

impl ApiKey {
    #[must_use]
    pub fn new(provider: Provider, key: impl Into<String>) -> Self {
        Self {
            provider,
            key: key.into(),
        }
    }

    /// A listing entry that only records which provider has a key.
    #[must_use]
    pub const fn listed(provider: Provider) -> Self {
        Self {
            provider,
            key: String::new(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("provider", &self.provider)
            .field("key", &if self.key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

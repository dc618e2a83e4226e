//! Errors raised while loading or checking Switchyard settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `YARD_*` variable could not be read into
    /// [`YardConfig`](crate::YardConfig).
    #[error("failed to load switchyard settings: {0}")]
    Figment(#[from] figment::Error),

    /// A command needs `key` from `[section]` and it is unset.
    #[error("[{section}] {key} is not set (add it to .switchyard/config.toml or export {env})")]
    NotConfigured {
        section: &'static str,
        key: &'static str,
        env: &'static str,
    },

    #[error("bad value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

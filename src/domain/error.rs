//! Domain error types.

/// Top-level error type for secini.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("value not found for {key}: check section and variable names")]
    NotFound { key: String },

    #[error("cannot convert {key} = {value:?}: {reason}")]
    Parse {
        key: String,
        value: String,
        reason: String,
    },

    #[error("value of {key} = {value:?} is out of range for the requested type")]
    Range { key: String, value: String },

    #[error("invalid request for {key}: {reason}")]
    InvalidRequest { key: String, reason: String },
}

impl ConfigError {
    /// True when the error came from a lookup rather than from loading.
    pub fn is_lookup(&self) -> bool {
        !matches!(self, ConfigError::Io(_))
    }
}

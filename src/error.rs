use std::io;

use thiserror::Error;

pub type Result<T, E = WordCloudError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum WordCloudError {
    /// A configuration value is out of range.
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("unsupported language: {0:?} (expected \"english\" or \"chinese\")")]
    UnsupportedLanguage(String),

    #[error("unable to parse configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("font data is invalid: {0}")]
    Font(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl WordCloudError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WordCloudError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

use thiserror::Error;

/// Failures while resolving a required secret.
///
/// Secrets-file problems never show up here: those are absorbed as warnings
/// and the file is treated as absent.
#[derive(Debug, Error)]
pub enum SecretsError {
    /// `get_secret` was called with an empty key
    #[error("secret key must not be empty")]
    EmptyKey,

    /// Nothing resolved the secret and there is no terminal to ask on
    #[error(
        "no value found for '{key}' in the environment, secrets file or config, \
         and no interactive terminal is available to prompt for it"
    )]
    NonInteractive { key: String },

    /// The prompt was cancelled or its input stream closed
    #[error("failed to read '{key}' from the terminal: {reason}")]
    Prompt { key: String, reason: String },

    /// The prompt returned an empty answer
    #[error("an empty value was entered for '{key}'")]
    EmptyValue { key: String },
}

pub type Result<T> = std::result::Result<T, SecretsError>;

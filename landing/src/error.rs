//! Error types for the site.
//!
//! None of these are fatal: a bad config falls back to the built-in defaults and
//! a failed submission only flips the contact form into its error state.

use thiserror::Error;

/// Problems with the embedded `site.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("site.toml is invalid: {0}")]
    Invalid(String),
}

/// Why a contact form POST did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no browser window available")]
    NoWindow,

    #[error("could not build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("form backend answered HTTP {0}")]
    Rejected(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_carries_status() {
        let err = SubmitError::Rejected(503);
        assert_eq!(err.to_string(), "form backend answered HTTP 503");
    }

    #[test]
    fn invalid_config_names_the_problem() {
        let err = ConfigError::Invalid("form.endpoint is empty".into());
        assert_eq!(err.to_string(), "site.toml is invalid: form.endpoint is empty");
    }
}

//! Error types for dictionary loading and configuration.

use thiserror::Error;

use crate::locale::LocaleCode;

/// Failure to obtain a locale dictionary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("failed to fetch {locale} dictionary: {detail}")]
    Network {
        /// Locale being fetched.
        locale: LocaleCode,
        /// Transport error detail.
        detail: String,
    },
    /// The server answered with a non-success status.
    #[error("{locale} dictionary request returned status {status}")]
    Status {
        /// Locale being fetched.
        locale: LocaleCode,
        /// HTTP status code.
        status: u16,
    },
    /// The payload was not a JSON object.
    #[error("failed to parse {locale} dictionary")]
    Parse {
        /// Locale being fetched.
        locale: LocaleCode,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Locale the failed request was for.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        match self {
            Self::Network { locale, .. }
            | Self::Status { locale, .. }
            | Self::Parse { locale, .. } => *locale,
        }
    }
}

/// Site configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field {field}: {reason}")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The configuration blob could not be decoded.
    #[error("failed to decode site configuration")]
    Decode {
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for dictionary loading results.
pub type FetchResult<T> = Result<T, FetchError>;

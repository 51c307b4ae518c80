//! Error types for biodiversity-catalog
//!
//! Every error carries a message fit to show the visitor in a notification.

use thiserror::Error;

/// Errors that can occur while loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status
    #[error("Store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected records
    #[error("Decode error: {0}")]
    Decode(String),

    /// The store configuration is unusable
    #[error("Invalid store configuration: {0}")]
    Config(String),

    /// A category name outside the known set
    #[error("Unknown species category: {0}")]
    UnknownCategory(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::Config(err.to_string())
    }
}

impl CatalogError {
    /// Create a new Status error
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Create a new Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new UnknownCategory error
    pub fn unknown_category(value: impl Into<String>) -> Self {
        Self::UnknownCategory(value.into())
    }

    /// The text shown to the visitor.
    ///
    /// Store errors surface the store's own message, the way the hosted
    /// client reports them; everything else uses the display form.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_user_message_is_store_message() {
        let err = CatalogError::status(400, "column campus.zoom does not exist");
        assert_eq!(err.user_message(), "column campus.zoom does not exist");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn test_config_error() {
        let err = CatalogError::config("missing key");
        assert!(matches!(err, CatalogError::Config(_)));
        assert!(err.user_message().contains("missing key"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}

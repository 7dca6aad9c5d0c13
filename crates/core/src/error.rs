//! Error types for sheetrec.

use thiserror::Error;

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for record conversion.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for the public `get` operation.
pub type GetResult<T> = Result<T, GetError>;

/// Errors retrieving sheet metadata or sheet values.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Document identifier is empty or blank.
    #[error("Invalid document id: {0:?}")]
    InvalidDocumentId(String),

    /// Transport-level failure (connection, timeout, TLS).
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success HTTP status, including auth failures.
    #[error("HTTP {status} - {message}")]
    Status { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("Client error: {0}")]
    Client(String),
}

/// Structural defects in a sheet's header row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The header row is not a sequence of cells.
    #[error("Sheet '{sheet}': header row is not an array")]
    HeaderRowNotArray { sheet: String },

    /// A header cell is not text.
    #[error("Sheet '{sheet}': header at column {column} is {found}, expected text")]
    NonTextHeader {
        sheet: String,
        column: usize,
        found: String,
    },

    /// A header cell is blank after trimming.
    #[error("Sheet '{sheet}': header at column {column} is empty")]
    EmptyHeader { sheet: String, column: usize },

    /// Two header cells share the same raw text.
    #[error("Sheet '{sheet}': duplicate header '{name}'")]
    DuplicateHeader { sheet: String, name: String },
}

impl ConversionError {
    /// Name of the sheet whose header row is invalid.
    #[must_use]
    pub fn sheet(&self) -> &str {
        match self {
            Self::HeaderRowNotArray { sheet }
            | Self::NonTextHeader { sheet, .. }
            | Self::EmptyHeader { sheet, .. }
            | Self::DuplicateHeader { sheet, .. } => sheet,
        }
    }
}

/// Errors surfaced by the public `get` operation.
#[derive(Debug, Error)]
pub enum GetError {
    /// Fetching the document failed.
    #[error("Failed to fetch spreadsheet: {0}")]
    Fetch(#[from] FetchError),

    /// Converting the fetched sheets failed.
    #[error("Failed to convert spreadsheet: {0}")]
    Conversion(#[from] ConversionError),

    /// Client configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GetError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = FetchError::Status {
            status: 403,
            message: "The caller does not have permission".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 403 - The caller does not have permission");
    }

    #[test]
    fn test_invalid_document_id_carries_id() {
        let err = FetchError::InvalidDocumentId("   ".to_string());
        assert_eq!(err.to_string(), r#"Invalid document id: "   ""#);
    }

    #[test]
    fn test_conversion_error_names_sheet() {
        let err = ConversionError::DuplicateHeader {
            sheet: "People".to_string(),
            name: "Name".to_string(),
        };
        assert_eq!(err.sheet(), "People");
        assert!(err.to_string().contains("People"));
        assert!(err.to_string().contains("Name"));
    }

    #[test]
    fn test_get_error_carries_inner_message() {
        let inner = ConversionError::EmptyHeader {
            sheet: "Sheet1".to_string(),
            column: 0,
        };
        let message = inner.to_string();
        let err: GetError = inner.into();
        assert!(matches!(err, GetError::Conversion(_)));
        assert!(err.to_string().contains(&message));

        let err: GetError = FetchError::Request("connection refused".to_string()).into();
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_config_error() {
        let err = GetError::config("SHEETS_ACCESS_TOKEN is not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: SHEETS_ACCESS_TOKEN is not set"
        );
    }
}

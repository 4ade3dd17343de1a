use thiserror::Error;

/// Errors that can occur during BeerXML import operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input is not well-formed XML
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A required element is absent from the document
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    /// A numeric field holds text that is not a finite decimal number
    #[error("Invalid number '{value}' in field {path}")]
    InvalidNumber { path: String, value: String },

    /// An enumerated field holds an unknown value
    #[error("Invalid value '{value}' in field {path}, expected one of: {expected}")]
    InvalidValue {
        path: String,
        value: String,
        expected: String,
    },

    /// A node has a shape the importer cannot use
    #[error("Unexpected shape at {path}: expected {expected}")]
    UnexpectedShape { path: String, expected: String },

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to read the input document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize the import result
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ImportError {
    pub(crate) fn missing(path: impl Into<String>) -> Self {
        ImportError::MissingField { path: path.into() }
    }

    pub(crate) fn shape(path: impl Into<String>, expected: impl Into<String>) -> Self {
        ImportError::UnexpectedShape {
            path: path.into(),
            expected: expected.into(),
        }
    }
}

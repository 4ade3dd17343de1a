//! UniFFI bindings for beerxml-import
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! The model records are exported directly; only errors and options need FFI wrappers.

use std::fmt;

use crate::{BeerXmlImport, ImportError, ImportOptions, YeastMode};

/// FFI-compatible yeast handling
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiYeastMode {
    #[default]
    First,
    All,
}

impl From<FfiYeastMode> for YeastMode {
    fn from(mode: FfiYeastMode) -> Self {
        match mode {
            FfiYeastMode::First => YeastMode::First,
            FfiYeastMode::All => YeastMode::All,
        }
    }
}

/// Configuration for importing BeerXML
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiImportConfig {
    /// Yeast handling (first yeast only if not specified)
    pub yeast_mode: Option<FfiYeastMode>,
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiImportError {
    /// The document is not well-formed XML
    MalformedXml { message: String },
    /// A required field is missing
    MissingField { path: String },
    /// A field holds a value that cannot be used
    InvalidValue { path: String, message: String },
    /// Any other failure
    Other { message: String },
}

impl fmt::Display for FfiImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiImportError::MalformedXml { message } => write!(f, "Malformed XML: {}", message),
            FfiImportError::MissingField { path } => write!(f, "Missing required field: {}", path),
            FfiImportError::InvalidValue { path, message } => {
                write!(f, "Invalid value in {}: {}", path, message)
            }
            FfiImportError::Other { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for FfiImportError {}

impl From<ImportError> for FfiImportError {
    fn from(err: ImportError) -> Self {
        let message = err.to_string();
        match err {
            ImportError::Xml(e) => FfiImportError::MalformedXml {
                message: e.to_string(),
            },
            ImportError::MissingField { path } => FfiImportError::MissingField { path },
            ImportError::InvalidNumber { path, .. }
            | ImportError::InvalidValue { path, .. }
            | ImportError::UnexpectedShape { path, .. } => {
                FfiImportError::InvalidValue { path, message }
            }
            ImportError::BuilderError(_)
            | ImportError::ConfigError(_)
            | ImportError::Io(_)
            | ImportError::Json(_) => FfiImportError::Other { message },
        }
    }
}

/// Import a BeerXML document
///
/// # Arguments
/// * `xml` - The BeerXML document text
/// * `config` - Optional configuration for the import
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn import_beer_xml(
    xml: String,
    config: Option<FfiImportConfig>,
) -> Result<BeerXmlImport, FfiImportError> {
    let config = config.unwrap_or_default();
    let options = ImportOptions {
        yeast_mode: config.yeast_mode.unwrap_or_default().into(),
    };

    Ok(crate::import_beer_xml_with_options(&xml, &options)?)
}

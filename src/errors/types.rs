//! Error type definitions for proc-tabulator
//!
//! This module defines all error types used throughout the application,
//! split into the top-level [`AppError`] surfaced by the web layer and the
//! [`TableError`] raised while assembling table components.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur while serving a
/// request. It uses `thiserror` to provide automatic error trait
/// implementations and proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Table component assembly errors
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// External command or service errors
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering errors
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Errors raised while building column descriptors and table configurations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Table id cannot be used to namespace generated client functions
    #[error("Invalid table identifier '{id}': must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdentifier { id: String },

    /// Two columns share a field name
    #[error("Duplicate column field '{field}' in table '{table}'")]
    DuplicateField { table: String, field: String },

    /// Initial sort references a column that does not exist
    #[error("Initial sort column '{field}' is not defined in table '{table}'")]
    UnknownSortColumn { table: String, field: String },

    /// A named option is not one the widget supports
    #[error("Unsupported {kind} '{value}'")]
    UnsupportedOption { kind: String, value: String },

    /// An option value is out of range
    #[error("Invalid value for {option}: {message}")]
    InvalidValue { option: String, message: String },

    /// Configuration could not be serialised
    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    /// Client markup or script could not be rendered
    #[error("Render failed: {message}")]
    Render { message: String },
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an external service error
    pub fn external_service<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }
}

impl TableError {
    /// Create an invalid identifier error
    pub fn invalid_identifier<S: Into<String>>(id: S) -> Self {
        Self::InvalidIdentifier { id: id.into() }
    }

    /// Create a duplicate field error
    pub fn duplicate_field<T: Into<String>, F: Into<String>>(table: T, field: F) -> Self {
        Self::DuplicateField {
            table: table.into(),
            field: field.into(),
        }
    }

    /// Create an unknown sort column error
    pub fn unknown_sort_column<T: Into<String>, F: Into<String>>(table: T, field: F) -> Self {
        Self::UnknownSortColumn {
            table: table.into(),
            field: field.into(),
        }
    }

    /// Create an unsupported option error
    pub fn unsupported<K: Into<String>, V: Into<String>>(kind: K, value: V) -> Self {
        Self::UnsupportedOption {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value<O: Into<String>, M: Into<String>>(option: O, message: M) -> Self {
        Self::InvalidValue {
            option: option.into(),
            message: message.into(),
        }
    }
}

impl From<askama::Error> for TableError {
    fn from(err: askama::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::external_service("ps", "exited with status 1");
        assert_eq!(
            err.to_string(),
            "External service error: ps - exited with status 1"
        );

        let err = TableError::unsupported("sorter", "fuzzy");
        assert_eq!(err.to_string(), "Unsupported sorter 'fuzzy'");
    }

    #[test]
    fn test_table_error_converts_into_app_error() {
        let err: AppError = TableError::invalid_identifier("bad-id").into();
        assert!(matches!(
            err,
            AppError::Table(TableError::InvalidIdentifier { ref id }) if id == "bad-id"
        ));
    }
}

//! Error types for the dxfrec library

use std::io;
use thiserror::Error;

/// Main error type for dxfrec operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading or writing a stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed tag/value framing (non-integer code line, truncated pair)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A recognized group code carried a value that failed to parse for its
    /// expected scalar type
    #[error("Malformed value for group code {code} at line {line}")]
    MalformedValue {
        /// The group code whose value was malformed
        code: i32,
        /// Line number of the offending value line
        line: usize,
    },

    /// A field was assigned (or found holding) a value outside its
    /// documented range or enumeration
    #[error("Value out of domain for {field}: {value}")]
    OutOfDomain {
        /// Name of the rejected field
        field: &'static str,
        /// Offending value, rendered as text
        value: String,
    },

    /// Unsupported CAD file version string
    #[error("Unsupported CAD version: {0:?}")]
    UnsupportedVersion(String),

    /// Unknown record type name at a group-code-0 introducer
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxfrec operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnsupportedVersion("AC9999".to_string());
        assert_eq!(err.to_string(), "Unsupported CAD version: \"AC9999\"");
    }

    #[test]
    fn test_malformed_value_display() {
        let err = DxfError::MalformedValue { code: 40, line: 12 };
        assert_eq!(
            err.to_string(),
            "Malformed value for group code 40 at line 12"
        );
    }

    #[test]
    fn test_out_of_domain_display() {
        let err = DxfError::OutOfDomain {
            field: "thickness",
            value: "-1.5".to_string(),
        };
        assert!(err.to_string().contains("thickness"));
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}

//! Error types for code generation.

use datadoc_schema::CountError;
use thiserror::Error;

/// Error type for code generation operations.
///
/// The two definition errors are fatal for the enclosing definition and
/// propagate immediately; whether the overall run continues with the
/// next definition is the caller's choice.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// More than one `attr_type` attribute on a single enum.
    #[error("multiple enum type definitions on enum '{enum_name}'")]
    EnumTypeConflict {
        /// Name of the offending enum.
        enum_name: String,
    },

    /// A struct field's count token is numeric and equals 0 or is -2 or
    /// lower.
    #[error("invalid element count '{token}' on field '{field}'")]
    IllegalElementCount {
        /// Name of the offending field.
        field: String,
        /// The offending count token.
        token: String,
    },

    /// Output sink failure.
    #[error("format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates an illegal element count error for the given field.
    #[must_use]
    pub fn illegal_count(field: impl Into<String>, source: CountError) -> Self {
        Self::IllegalElementCount {
            field: field.into(),
            token: source.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CodegenError::EnumTypeConflict {
            enum_name: "Enum".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "multiple enum type definitions on enum 'Enum'"
        );

        let error = CodegenError::illegal_count(
            "Data",
            CountError {
                token: "-2".to_string(),
            },
        );
        assert_eq!(
            error.to_string(),
            "invalid element count '-2' on field 'Data'"
        );
    }
}

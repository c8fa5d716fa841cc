/// Result type alias for idnconv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for idnconv operations.
///
/// Each variant is one failure kind of the conversion surface; the libidn2
/// status-code translation in the FFI bridge produces exactly one of these
/// per failed call. Variants carry a human-readable description rather than
/// the raw library status code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input is not valid text for the requested conversion
    #[error("invalid input encoding: {message}")]
    InvalidEncoding { message: String },

    /// Input contains a character forbidden by IDNA2008 rules
    #[error("disallowed code point: {message}")]
    DisallowedCodePoint { message: String },

    /// Label or domain exceeds the output limits of the encoder
    #[error("punycode overflow: {message}")]
    PunycodeOverflow { message: String },

    /// Unrecognized option flags or an invalid argument combination
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Any libidn2 failure not otherwise classified
    #[error("libidn2 operation '{operation}' failed: {message}")]
    LibraryFailure { operation: String, message: String },
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid-encoding error
    #[must_use]
    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Error::InvalidEncoding {
            message: message.into(),
        }
    }

    /// Create a disallowed-code-point error
    #[must_use]
    pub fn disallowed_code_point(message: impl Into<String>) -> Self {
        Error::DisallowedCodePoint {
            message: message.into(),
        }
    }

    /// Create a punycode-overflow error
    #[must_use]
    pub fn punycode_overflow(message: impl Into<String>) -> Self {
        Error::PunycodeOverflow {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a library failure error for an FFI operation
    #[must_use]
    pub fn library_failure(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::LibraryFailure {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_description() {
        let err = Error::disallowed_code_point("string has disallowed character");
        assert_eq!(
            err.to_string(),
            "disallowed code point: string has disallowed character"
        );
    }

    #[test]
    fn test_library_failure_display_includes_operation() {
        let err = Error::library_failure("idn2_to_ascii_8z", "memory allocation error");
        assert_eq!(
            err.to_string(),
            "libidn2 operation 'idn2_to_ascii_8z' failed: memory allocation error"
        );
    }

    #[test]
    fn test_helper_constructors_produce_matching_variants() {
        assert!(matches!(
            Error::invalid_encoding("x"),
            Error::InvalidEncoding { .. }
        ));
        assert!(matches!(
            Error::punycode_overflow("x"),
            Error::PunycodeOverflow { .. }
        ));
        assert!(matches!(
            Error::invalid_argument("x"),
            Error::InvalidArgument { .. }
        ));
    }
}

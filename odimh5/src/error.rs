/// Error types for the odimh5 library

use thiserror::Error;

/// Result type alias for odimh5 operations
pub type Result<T> = std::result::Result<T, OdimError>;

/// Main error type for odimh5 operations
#[derive(Error, Debug)]
pub enum OdimError {
    /// The underlying HDF5 store reported an error
    #[error("backend error: {0}")]
    Backend(#[from] hdf5::Error),

    /// An attribute's text form, a composite value, or the file itself could
    /// not be decoded
    #[error("invalid format for '{attribute}': {detail}")]
    Format {
        attribute: String,
        detail: String,
    },

    /// A mandatory attribute access found no value
    #[error("missing mandatory attribute: {0}")]
    MissingAttribute(String),

    /// A feature the library deliberately does not implement
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Caller-side misuse (invalid index, malformed source key, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error not originating from the HDF5 layer (e.g. path manipulation)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OdimError {
    pub fn format(attribute: impl Into<String>, detail: impl Into<String>) -> Self {
        OdimError::Format {
            attribute: attribute.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_offending_attribute() {
        let err = OdimError::format("how/elangles", "non-numeric token 'x'");
        assert_eq!(
            err.to_string(),
            "invalid format for 'how/elangles': non-numeric token 'x'"
        );
    }

    #[test]
    fn missing_attribute_names_the_attribute() {
        let err = OdimError::MissingAttribute("what/source".to_string());
        assert_eq!(err.to_string(), "missing mandatory attribute: what/source");
    }

    #[test]
    fn unsupported_and_invalid_argument_messages() {
        assert_eq!(
            OdimError::Unsupported("translation target i64".to_string()).to_string(),
            "unsupported: translation target i64"
        );
        assert_eq!(
            OdimError::InvalidArgument("empty node id".to_string()).to_string(),
            "invalid argument: empty node id"
        );
    }
}

//! Error type for table operations.

use thiserror::Error;

/// Errors returned by [`HashTable`](crate::HashTable) and
/// [`TableConfig`](crate::TableConfig).
///
/// A missing key is not an error: lookups return `Option`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// An argument passed to `assign` was empty or absent
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the rejected argument
        argument: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Construction parameters are out of range
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// What is wrong with the configuration
        message: String,
    },
}

impl TableError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(argument: &'static str, reason: S) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_argument() {
        let err = TableError::invalid_argument("key", "must not be empty");
        assert_eq!(err.to_string(), "invalid argument `key`: must not be empty");

        let err = TableError::invalid_configuration("capacity must be positive");
        assert_eq!(
            err.to_string(),
            "invalid configuration: capacity must be positive"
        );
    }
}

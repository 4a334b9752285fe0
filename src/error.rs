//! Error types and handling for the configuration map
//! Author: kartik4091
//! Created: 2025-06-03

use std::{collections::TryReserveError, io, result::Result as StdResult};

use thiserror::Error;

/// Custom result type for configuration map operations
pub type Result<T> = StdResult<T, Error>;

/// Core error type for configuration map operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Key was empty or otherwise unusable; rejected before hashing.
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Lookup walked the whole chain (or hit an empty bucket) without a match.
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Allocation failure: {0}")]
    AllocationFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl Error {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Error::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// True for misses the caller is expected to recover from with a default.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound(_))
    }
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::AllocationFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_error_maps_to_allocation_failure() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert!(matches!(Error::from(err), Error::AllocationFailure(_)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::KeyNotFound("user".into()).to_string(), "Key not found: user");
        assert_eq!(
            Error::parse(3, "missing '='").to_string(),
            "Parse error on line 3: missing '='"
        );
        assert!(Error::KeyNotFound("x".into()).is_not_found());
        assert!(!Error::InvalidKey(String::new()).is_not_found());
    }
}

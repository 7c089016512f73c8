use core::fmt;

/// Why two values could not be diffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// A map key is not equal to itself (a `NaN` float), so it cannot be
    /// aligned with anything.
    IncomparableKey {
        /// The offending key, inspected.
        key: String,
    },
    /// The same key appears twice on one side of a comparison.
    DuplicateKey {
        /// The offending key, inspected.
        key: String,
    },
    /// The values are nested deeper than the configured limit.
    DepthLimitExceeded {
        /// The limit that was hit.
        limit: usize,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffError::IncomparableKey { key } => {
                write!(f, "cannot align container: key {key} is not equal to itself")
            }
            DiffError::DuplicateKey { key } => {
                write!(f, "cannot align container: key {key} appears more than once")
            }
            DiffError::DepthLimitExceeded { limit } => {
                write!(f, "values are nested deeper than {limit} levels")
            }
        }
    }
}

impl core::error::Error for DiffError {}

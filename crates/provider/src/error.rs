//! Error types for the rnd-provider crate.

use rnd_calendar::CalendarError;
use rnd_sarima::SarimaError;

/// Failure to address a child series.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressingError {
    /// Returned when a child index is not in `0..count`.
    #[error("index {index} out of range: configuration has {count} series")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of series in the configuration.
        count: usize,
    },

    /// Returned when a child moniker carries a negative or non-numeric index.
    #[error("invalid series index '{index}'")]
    InvalidIndex {
        /// The index text as found in the moniker.
        index: String,
    },

    /// Returned when the children of a child series are requested.
    #[error("no hierarchy: series have no children")]
    NoHierarchy,

    /// Returned when a child moniker has no `#<index>` suffix.
    #[error("malformed series moniker '{moniker}'")]
    MalformedMoniker {
        /// The moniker that could not be split.
        moniker: String,
    },
}

/// Error type for all fallible operations in the rnd-provider crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// Returned when a specification is rejected at construction.
    #[error("invalid specification: {reason}")]
    InvalidSpecification {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration key cannot be decoded.
    #[error("invalid configuration key '{key}': {reason}")]
    InvalidKey {
        /// The offending key.
        key: String,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a child series cannot be addressed.
    #[error(transparent)]
    Addressing(#[from] AddressingError),
}

impl From<SarimaError> for ProviderError {
    fn from(e: SarimaError) -> Self {
        ProviderError::InvalidSpecification {
            reason: e.to_string(),
        }
    }
}

impl From<CalendarError> for ProviderError {
    fn from(e: CalendarError) -> Self {
        ProviderError::InvalidSpecification {
            reason: e.to_string(),
        }
    }
}

//! Error types for the rnd-sarima crate.

/// Error type for all fallible operations in the rnd-sarima crate.
///
/// Only model construction can fail; randomization and simulation are
/// infallible once a [`SarimaModel`](crate::SarimaModel) exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SarimaError {
    /// Returned when a coefficient vector does not match its order.
    #[error("{part} has {got} coefficients, expected {expected}")]
    CoefficientLength {
        /// Which polynomial the coefficients belong to.
        part: &'static str,
        /// Length implied by the model order.
        expected: usize,
        /// Length actually provided.
        got: usize,
    },

    /// Returned when a coefficient is NaN or infinite.
    #[error("{part} contains non-finite coefficients")]
    NonFiniteCoefficient {
        /// Which polynomial the coefficients belong to.
        part: &'static str,
    },

    /// Returned when the seasonal period is zero.
    #[error("seasonal period must be at least 1")]
    ZeroPeriod,
}

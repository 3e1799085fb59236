//! Error types for the rnd-calendar crate.

/// Error type for all fallible operations in the rnd-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a periods-per-year value has no matching [`Frequency`](crate::Frequency).
    #[error("unsupported frequency: {periods_per_year} periods per year (must be one of 1, 2, 3, 4, 6, 12)")]
    UnsupportedFrequency {
        /// The rejected number of periods per year.
        periods_per_year: u16,
    },

    /// Returned when a position within the year is out of range for its frequency.
    #[error("invalid position {position} for frequency with {periods_per_year} periods per year")]
    InvalidPosition {
        /// The 0-based position that was provided.
        position: u16,
        /// Number of periods per year of the frequency.
        periods_per_year: u16,
    },

    /// Returned when a period cannot be mapped onto a calendar date.
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The offending year.
        year: i32,
    },
}

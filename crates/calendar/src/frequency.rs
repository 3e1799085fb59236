//! Regular sampling frequencies, expressed as periods per year.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Sampling frequency of a regular time series.
///
/// The discriminant is the number of periods per year, which is also the
/// seasonal period used by seasonal models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Frequency {
    /// One observation per year.
    Yearly = 1,
    /// Two observations per year.
    HalfYearly = 2,
    /// Three observations per year (four-month periods).
    QuadriMonthly = 3,
    /// Four observations per year.
    Quarterly = 4,
    /// Six observations per year (two-month periods).
    BiMonthly = 6,
    /// Twelve observations per year.
    Monthly = 12,
}

impl Frequency {
    /// All supported frequencies in ascending order.
    pub const ALL: [Frequency; 6] = [
        Frequency::Yearly,
        Frequency::HalfYearly,
        Frequency::QuadriMonthly,
        Frequency::Quarterly,
        Frequency::BiMonthly,
        Frequency::Monthly,
    ];

    /// Looks up the frequency with `periods_per_year` observations per year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedFrequency`] for any value other
    /// than 1, 2, 3, 4, 6 or 12.
    ///
    /// # Example
    ///
    /// ```
    /// use rnd_calendar::Frequency;
    ///
    /// assert_eq!(Frequency::from_periods_per_year(4).unwrap(), Frequency::Quarterly);
    /// assert!(Frequency::from_periods_per_year(5).is_err());
    /// ```
    pub fn from_periods_per_year(periods_per_year: u16) -> Result<Self, CalendarError> {
        Self::ALL
            .into_iter()
            .find(|f| f.periods_per_year() == periods_per_year)
            .ok_or(CalendarError::UnsupportedFrequency { periods_per_year })
    }

    /// Returns the number of periods per year.
    pub fn periods_per_year(self) -> u16 {
        self as u16
    }

    /// Returns the seasonal period (same as the number of periods per year).
    pub fn seasonal_period(self) -> usize {
        self as usize
    }

    /// Returns the number of calendar months covered by one period.
    pub fn months_per_period(self) -> u32 {
        12 / self as u32
    }
}

impl TryFrom<u16> for Frequency {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_periods_per_year(value)
    }
}

impl From<Frequency> for u16 {
    fn from(f: Frequency) -> Self {
        f.periods_per_year()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Yearly => "yearly",
            Frequency::HalfYearly => "half-yearly",
            Frequency::QuadriMonthly => "quadri-monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::BiMonthly => "bi-monthly",
            Frequency::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

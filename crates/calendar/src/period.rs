//! A single period of a regular-frequency calendar.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CalendarError;
use crate::frequency::Frequency;

/// One period (e.g. a month or a quarter) of a given [`Frequency`].
///
/// `position` is 0-based within the year: for a monthly frequency,
/// position 0 is January and position 11 is December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    frequency: Frequency,
    year: i32,
    position: u16,
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.frequency, self.year, self.position).cmp(&(other.frequency, other.year, other.position))
    }
}

impl Period {
    /// Creates a new period.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidPosition`] if `position` is not in
    /// `0..frequency.periods_per_year()`.
    pub fn new(frequency: Frequency, year: i32, position: u16) -> Result<Self, CalendarError> {
        if position >= frequency.periods_per_year() {
            return Err(CalendarError::InvalidPosition {
                position,
                periods_per_year: frequency.periods_per_year(),
            });
        }
        Ok(Self {
            frequency,
            year,
            position,
        })
    }

    /// Returns the first period of `year`.
    pub fn start_of_year(frequency: Frequency, year: i32) -> Self {
        Self {
            frequency,
            year,
            position: 0,
        }
    }

    /// Returns the frequency.
    pub fn frequency(self) -> Frequency {
        self.frequency
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the 0-based position within the year.
    pub fn position(self) -> u16 {
        self.position
    }

    /// Returns the following period, wrapping into the next year.
    pub fn next(self) -> Self {
        self.plus(1)
    }

    /// Returns the period `n` steps after this one.
    pub fn plus(self, n: usize) -> Self {
        let ppy = usize::from(self.frequency.periods_per_year());
        let offset = usize::from(self.position) + n;
        Self {
            frequency: self.frequency,
            year: self.year + (offset / ppy) as i32,
            position: (offset % ppy) as u16,
        }
    }

    /// Returns the calendar date on which this period starts.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the year cannot be
    /// represented by [`NaiveDate`].
    pub fn start_date(self) -> Result<NaiveDate, CalendarError> {
        let month = u32::from(self.position) * self.frequency.months_per_period() + 1;
        NaiveDate::from_ymd_opt(self.year, month, 1)
            .ok_or(CalendarError::YearOutOfRange { year: self.year })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.position + 1;
        match self.frequency {
            Frequency::Yearly => write!(f, "{}", self.year),
            Frequency::HalfYearly => write!(f, "{}-H{n}", self.year),
            Frequency::QuadriMonthly => write!(f, "{}-T{n}", self.year),
            Frequency::Quarterly => write!(f, "{}-Q{n}", self.year),
            Frequency::BiMonthly => write!(f, "{}-B{n}", self.year),
            Frequency::Monthly => write!(f, "{}-{n:02}", self.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_position() {
        assert!(Period::new(Frequency::Quarterly, 2000, 3).is_ok());
        assert_eq!(
            Period::new(Frequency::Quarterly, 2000, 4),
            Err(CalendarError::InvalidPosition {
                position: 4,
                periods_per_year: 4
            })
        );
    }

    #[test]
    fn next_wraps_year() {
        let dec = Period::new(Frequency::Monthly, 2000, 11).unwrap();
        let jan = dec.next();
        assert_eq!(jan.year(), 2001);
        assert_eq!(jan.position(), 0);
    }

    #[test]
    fn plus_many_years() {
        let p = Period::start_of_year(Frequency::Quarterly, 2000).plus(9);
        assert_eq!((p.year(), p.position()), (2002, 1));
    }

    #[test]
    fn start_dates() {
        let q3 = Period::new(Frequency::Quarterly, 2000, 2).unwrap();
        assert_eq!(q3.start_date(), Ok(NaiveDate::from_ymd_opt(2000, 7, 1).unwrap()));

        let b2 = Period::new(Frequency::BiMonthly, 2010, 1).unwrap();
        assert_eq!(b2.start_date(), Ok(NaiveDate::from_ymd_opt(2010, 3, 1).unwrap()));

        let y = Period::start_of_year(Frequency::Yearly, 1999);
        assert_eq!(y.start_date(), Ok(NaiveDate::from_ymd_opt(1999, 1, 1).unwrap()));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Period::new(Frequency::Monthly, 2000, 0).unwrap().to_string(), "2000-01");
        assert_eq!(Period::new(Frequency::Quarterly, 2000, 3).unwrap().to_string(), "2000-Q4");
        assert_eq!(Period::start_of_year(Frequency::Yearly, 2000).to_string(), "2000");
        assert_eq!(Period::new(Frequency::HalfYearly, 2001, 1).unwrap().to_string(), "2001-H2");
    }

    #[test]
    fn ordering_follows_time() {
        let a = Period::new(Frequency::Monthly, 2000, 11).unwrap();
        assert!(a < a.next());
        assert!(Period::start_of_year(Frequency::Monthly, 1999) < a);
    }
}

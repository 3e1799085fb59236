//! Period sequence generation.

use crate::period::Period;

/// Generates `n` consecutive periods starting at `start`.
///
/// # Example
///
/// ```
/// use rnd_calendar::{Frequency, Period, period_sequence};
///
/// let start = Period::new(Frequency::Quarterly, 2000, 3).unwrap();
/// let periods = period_sequence(start, 3);
/// assert_eq!(periods[1].year(), 2001);
/// ```
pub fn period_sequence(start: Period, n: usize) -> Vec<Period> {
    let mut periods = Vec::with_capacity(n);
    if n == 0 {
        return periods;
    }
    periods.push(start);
    let mut current = start;
    for _ in 1..n {
        current = current.next();
        periods.push(current);
    }
    periods
}

use chrono::{Datelike, NaiveDate};
use rnd_calendar::{CalendarError, Frequency, Period, period_sequence};

#[test]
fn monthly_two_years_from_anchor() {
    let start = Period::start_of_year(Frequency::Monthly, 2000);
    let periods = period_sequence(start, 24);
    assert_eq!(periods.len(), 24);

    assert_eq!(periods[0].to_string(), "2000-01");
    assert_eq!(periods[11].to_string(), "2000-12");
    assert_eq!(periods[12].to_string(), "2001-01");
    assert_eq!(periods[23].to_string(), "2001-12");
}

#[test]
fn start_dates_are_first_of_month_and_increasing() {
    for freq in Frequency::ALL {
        let start = Period::start_of_year(freq, 2000);
        let dates: Vec<NaiveDate> = period_sequence(start, 30)
            .into_iter()
            .map(|p| p.start_date().unwrap())
            .collect();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        for w in dates.windows(2) {
            assert!(w[0] < w[1], "{freq}: {} !< {}", w[0], w[1]);
            assert_eq!(w[1].day(), 1);
        }
    }
}

#[test]
fn quarterly_spans_years() {
    let start = Period::new(Frequency::Quarterly, 1999, 2).unwrap();
    let labels: Vec<String> = period_sequence(start, 4)
        .iter()
        .map(|p| p.to_string())
        .collect();
    assert_eq!(labels, ["1999-Q3", "1999-Q4", "2000-Q1", "2000-Q2"]);
}

#[test]
fn frequency_lookup_errors() {
    assert_eq!(
        Frequency::from_periods_per_year(52),
        Err(CalendarError::UnsupportedFrequency {
            periods_per_year: 52
        })
    );
}

//! # Calendar Conversion
//!
//! Converts proleptic-Gregorian calendar dates to integer Julian Day Numbers and
//! back. All arithmetic is integer-only so the result is exact and independent
//! of any floating point behaviour on the target.
//!
//! The range of interest for a watch face is roughly 1900–2100. Dates far
//! outside that window are not rejected, they are simply not exercised.

use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Local calendar date and time-of-day as supplied by the host clock.
///
/// Only the date portion feeds the Julian Day Number; the time fields are
/// carried along for the wall-clock formatter.
///
/// # Example
/// ```
/// use sky_clock_lib::calendar::CalendarDate;
///
/// let date = CalendarDate::new(2015, 6, 21, 13, 5, 0);
/// assert_eq!(date.julian_day_number(), 2_457_195);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Astronomical year (e.g. 2015)
    pub year: i32,
    /// 1 = Jan … 12 = Dec
    pub month: u32,
    /// Day of month, 1–31
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Julian Day Number of the date portion (time-of-day is ignored).
    pub fn julian_day_number(&self) -> i64 {
        to_julian_day_number(self.year, self.month, self.day)
    }

    /// Time-of-day as a chrono value, `None` when the fields are out of range.
    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, self.second)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Convert a Gregorian calendar date to its Julian Day Number.
///
/// Uses the Fliegel–Van Flandern integer formula with a March-based year, so
/// January and February count as months 10 and 11 of the previous year.
///
/// ```
/// use sky_clock_lib::calendar::to_julian_day_number;
///
/// assert_eq!(to_julian_day_number(2000, 1, 1), 2_451_545);
/// ```
pub fn to_julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Inverse of [`to_julian_day_number`]: JDN → (year, month, day).
pub fn from_julian_day_number(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as i32, month as u32, day as u32)
}

/// 1-based day of the year (1 = Jan 1st, 366 = Dec 31st of a leap year).
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    (to_julian_day_number(year, month, day) - to_julian_day_number(year, 1, 1) + 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_reference_fixed_points() {
        assert_eq!(to_julian_day_number(2000, 1, 1), 2_451_545);
        assert_eq!(to_julian_day_number(2015, 6, 21), 2_457_195);
        assert_eq!(to_julian_day_number(1900, 1, 1), 2_415_021);
    }

    #[test]
    fn test_monotonic_one_day_steps() {
        let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();
        let mut previous = to_julian_day_number(date.year(), date.month(), date.day());

        while date < end {
            date = date.succ_opt().unwrap();
            let jdn = to_julian_day_number(date.year(), date.month(), date.day());
            assert_eq!(jdn, previous + 1, "JDN must advance by one day at {date}");
            previous = jdn;
        }
    }

    #[test]
    fn test_inverse_matches_chrono() {
        let mut date = NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();
        for _ in 0..800 {
            let jdn = to_julian_day_number(date.year(), date.month(), date.day());
            assert_eq!(
                from_julian_day_number(jdn),
                (date.year(), date.month(), date.day()),
                "inverse failed for {date}"
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2015, 1, 1), 1);
        assert_eq!(day_of_year(2015, 3, 1), 60);
        assert_eq!(day_of_year(2016, 3, 1), 61);
        assert_eq!(day_of_year(2016, 12, 31), 366);
    }

    #[test]
    fn test_from_naive_datetime_ignores_time_for_jdn() {
        let dt = NaiveDate::from_ymd_opt(2015, 6, 21)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let date = CalendarDate::from(dt);
        assert_eq!(date, CalendarDate::new(2015, 6, 21, 23, 59, 59));
        assert_eq!(date.julian_day_number(), 2_457_195);
        assert_eq!(date.time(), NaiveTime::from_hms_opt(23, 59, 59));
    }

    #[test]
    fn test_time_out_of_range() {
        let date = CalendarDate::new(2015, 6, 21, 25, 0, 0);
        assert!(date.time().is_none());
    }
}

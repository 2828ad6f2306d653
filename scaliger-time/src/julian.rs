//! Civil date ↔ Julian Day conversion.
//!
//! The Julian Day (JD) counts days from mean noon UT of 1 January 4713 BC on the
//! proleptic Julian calendar. Dates up to 1582 October 10 use the Julian
//! calendar; later dates use the Gregorian calendar. The cutover only selects
//! the branch; the ten skipped days of October 1582 are not modelled.
//!
//! Algorithms follow Duffett-Smith and Meeus.

use crate::parsing::format_iso8601;
use crate::{TimeError, TimeResult};
use scaliger_core::constants::{
    DAYS_PER_JULIAN_YEAR, GREGORIAN_START_JD, HOURS_PER_DAY, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD,
};
use scaliger_core::math::{fraction, truncate};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar date, normally proleptic Gregorian.
///
/// `year` uses astronomical numbering: year `0` is 1 BC, year `-N` is `N + 1`
/// BC. The fractional part of `day` is the time of day, e.g. 7h30m UT on the
/// 3rd is `3.3125`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    pub year: i64,
    pub month: u8,
    pub day: f64,
}

impl CivilDate {
    pub fn new(year: i64, month: u8, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Builds a date after checking `month ∈ [1, 12]` and a finite
    /// `day ∈ [0, 32)`. Day `0.0` is allowed ("January 0.0" is the usual
    /// way of naming the last instant of the previous year).
    pub fn try_new(year: i64, month: u8, day: f64) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid_date(
                year,
                month as i32,
                day,
                "month out of range",
            ));
        }
        if !day.is_finite() || !(0.0..32.0).contains(&day) {
            return Err(TimeError::invalid_date(
                year,
                month as i32,
                day,
                "day out of range",
            ));
        }
        Ok(Self::new(year, month, day))
    }

    pub fn from_julian(jd: f64) -> Self {
        julian_to_civil(jd)
    }

    pub fn to_julian(&self) -> f64 {
        civil_to_julian(*self)
    }

    pub fn is_gregorian(&self) -> bool {
        is_gregorian(self)
    }

    /// Integer day of month.
    pub fn day_of_month(&self) -> u8 {
        self.day.floor() as u8
    }

    /// Time of day in decimal hours, from the fractional part of `day`.
    pub fn hours(&self) -> f64 {
        (self.day - self.day.floor()) * HOURS_PER_DAY
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_iso8601(self))
    }
}

impl From<CivilDate> for f64 {
    fn from(date: CivilDate) -> Self {
        civil_to_julian(date)
    }
}

/// `true` when `date` falls after 1582 October 10 and is therefore computed on
/// the Gregorian calendar.
pub fn is_gregorian(date: &CivilDate) -> bool {
    match date.year.cmp(&1582) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => match date.month.cmp(&10) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => date.day > 10.0,
        },
    }
}

/// Converts a civil date to a Julian Day.
pub fn civil_to_julian(date: CivilDate) -> f64 {
    // January and February count as months 13 and 14 of the previous year.
    let (y, m) = if date.month > 2 {
        (date.year as f64, date.month as f64)
    } else {
        (date.year as f64 - 1.0, date.month as f64 + 12.0)
    };

    // Truncation toward zero needs a nudge for negative years. The test is on
    // the month-adjusted `y`, not `date.year`: testing `date.year < 0` puts
    // January and February of year 0 one day off.
    let t = if y < 0.0 { 0.75 } else { 0.0 };

    let b = if is_gregorian(&date) {
        let a = truncate(y / 100.0);
        2.0 - a + truncate(a / 4.0)
    } else {
        0.0
    };

    b + truncate(DAYS_PER_JULIAN_YEAR * y - t) + truncate(30.6001 * (m + 1.0)) + date.day
        + 1720994.5
}

/// Converts a Julian Day to a civil date.
pub fn julian_to_civil(jd: f64) -> CivilDate {
    let i = truncate(jd + 0.5);
    let f = fraction(jd + 0.5);

    let b = if i > GREGORIAN_START_JD {
        let a = truncate((i - 1867216.25) / 36524.25);
        i + 1.0 + a - truncate(a / 4.0)
    } else {
        i
    };
    let c = b + 1524.0;
    let d = truncate((c - 122.1) / DAYS_PER_JULIAN_YEAR);
    let e = truncate(DAYS_PER_JULIAN_YEAR * d);
    let g = truncate((c - e) / 30.6001);

    let day = c - e + f - truncate(30.6001 * g);
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    CivilDate::new(year as i64, month as u8, day)
}

/// Julian Day at the most recent Greenwich midnight at or before `jd`.
pub fn julian_midnight(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Julian Day of January 0.0 of `year` on the Gregorian calendar.
pub fn julian_date_zero(year: i64) -> f64 {
    let y = year as f64 - 1.0;
    let a = truncate(y / 100.0);
    truncate(DAYS_PER_JULIAN_YEAR * y) - a + truncate(a / 4.0) + 1721424.5
}

/// Decimal hours elapsed since the Greenwich midnight preceding `jd`, in `[0, 24)`.
pub fn extract_utc(jd: f64) -> f64 {
    (jd - julian_midnight(jd)) * HOURS_PER_DAY
}

/// Current system time as a Julian Day.
pub fn now_julian() -> f64 {
    let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs_f64(),
        Err(before) => -before.duration().as_secs_f64(),
    };
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY_F64
}

//! Civil calendar ↔ Julian Day conversion and sidereal time.
//!
//! The Julian Day is a plain `f64` throughout: integer at noon UT, half-integer
//! at midnight. [`CivilDate`] carries the time of day in the fractional part of
//! its `day` field.
//!
//! ```
//! use scaliger_time::{civil_to_julian, julian_to_civil, julian_to_sidereal};
//! use scaliger_time::{CivilDate, SiderealOptions};
//!
//! let jd = civil_to_julian(CivilDate::new(2010, 1, 1.0));
//! assert_eq!(jd, 2455197.5);
//! assert_eq!(julian_to_civil(jd), CivilDate::new(2010, 1, 1.0));
//!
//! let lst = julian_to_sidereal(jd, &SiderealOptions::new().with_longitude(-75.0));
//! assert!((0.0..24.0).contains(&lst));
//! ```

pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use julian::{
    civil_to_julian, extract_utc, is_gregorian, julian_date_zero, julian_midnight,
    julian_to_civil, now_julian, CivilDate,
};
pub use parsing::{
    date_string_to_julian, format_iso8601, julian_to_date_string, parse_iso8601,
    parse_julian_day,
};
pub use sidereal::{
    civil_to_sidereal, equation_of_equinoxes, julian_to_sidereal, mean_gmst, SiderealKind,
    SiderealOptions,
};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    /// Calendar fields outside their documented domain.
    #[error("Invalid date {year}-{month:02}-{day}: {message}")]
    InvalidDate {
        year: i64,
        month: i32,
        day: f64,
        message: String,
    },

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl TimeError {
    pub fn invalid_date(year: i64, month: i32, day: f64, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_error() {
        let err = TimeError::invalid_date(2000, 13, 1.5, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date 2000-13-1.5: month out of range"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = TimeError::ParseError("Invalid month: 'xx'".to_string());
        assert_eq!(err.to_string(), "Parse error: Invalid month: 'xx'");
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<TimeError>();
        _assert_sync::<TimeError>();
    }
}

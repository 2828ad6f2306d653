//! Date strings of the form `[±]Y-MM-DD[Thh:mm[:ss[.fff]]][Z]`.
//!
//! Years use astronomical numbering and may have any number of digits, so
//! `-1000-07-12T12:00:00Z` is 12 July 1001 BC at noon. Only UTC is accepted:
//! a trailing `Z` is optional and numeric offsets are rejected.

use crate::julian::{civil_to_julian, julian_to_civil, CivilDate};
use crate::{TimeError, TimeResult};
use scaliger_core::constants::{HOURS_PER_DAY, SECONDS_PER_DAY_F64};

const MAX_DATE_STRING_LENGTH: usize = 40;

/// Half a second, in days. Added before truncating to whole seconds.
const HALF_SECOND_DAYS: f64 = 0.5 / SECONDS_PER_DAY_F64;

pub fn parse_iso8601(s: &str) -> TimeResult<CivilDate> {
    parse_date_time(s).map_err(|err| {
        tracing::debug!(input = s, error = %err, "rejected date string");
        err
    })
}

fn parse_date_time(s: &str) -> TimeResult<CivilDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeError::ParseError("Empty date string".to_string()));
    }
    if s.len() > MAX_DATE_STRING_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }

    let s = s.strip_suffix('Z').unwrap_or(s);

    let (date_part, time_part) = match s.find(['T', ' ']) {
        Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
        None => (s, None),
    };

    let (year, month, day) = parse_date_part(date_part)?;
    let hours = match time_part {
        Some(time) => parse_time_part(time)?,
        None => 0.0,
    };

    Ok(CivilDate::new(
        year,
        month,
        day as f64 + hours / HOURS_PER_DAY,
    ))
}

fn parse_date_part(date: &str) -> TimeResult<(i64, u8, u8)> {
    let (sign, unsigned) = match date.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, date.strip_prefix('+').unwrap_or(date)),
    };

    let components: Vec<&str> = unsigned.split('-').collect();
    if components.len() != 3 {
        return Err(TimeError::ParseError(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            date
        )));
    }

    let year = parse_digits(components[0], "year", 9)? as i64 * sign;
    let month = parse_digits(components[1], "month", 2)? as u8;
    let day = parse_digits(components[2], "day", 2)? as u8;

    if !(1..=12).contains(&month) {
        return Err(TimeError::ParseError(format!(
            "Month out of range: {}",
            month
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(TimeError::ParseError(format!("Day out of range: {}", day)));
    }

    Ok((year, month, day))
}

/// Returns the time of day in decimal hours.
fn parse_time_part(time: &str) -> TimeResult<f64> {
    if time.contains(['+', '-']) {
        return Err(TimeError::ParseError(format!(
            "UTC offsets are not supported: '{}'",
            time
        )));
    }

    let components: Vec<&str> = time.split(':').collect();
    if !(2..=3).contains(&components.len()) {
        return Err(TimeError::ParseError(format!(
            "Invalid time format: '{}'. Expected HH:MM[:SS]",
            time
        )));
    }

    let hour = parse_digits(components[0], "hour", 2)?;
    let minute = parse_digits(components[1], "minute", 2)?;
    let second = match components.get(2) {
        Some(text) => parse_seconds(text)?,
        None => 0.0,
    };

    if hour > 23 {
        return Err(TimeError::ParseError(format!(
            "Hour out of range: {}",
            hour
        )));
    }
    if minute > 59 {
        return Err(TimeError::ParseError(format!(
            "Minute out of range: {}",
            minute
        )));
    }

    Ok(hour as f64 + minute as f64 / 60.0 + second / 3600.0)
}

fn parse_digits(text: &str, field: &str, max_len: usize) -> TimeResult<u32> {
    if text.is_empty() || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::ParseError(format!(
            "Invalid {}: '{}'",
            field, text
        )));
    }
    text.parse::<u32>()
        .map_err(|_| TimeError::ParseError(format!("Invalid {}: '{}'", field, text)))
}

fn parse_seconds(text: &str) -> TimeResult<f64> {
    let valid_chars = !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    let second = if valid_chars {
        text.parse::<f64>().ok()
    } else {
        None
    };
    match second {
        Some(s) if (0.0..60.0).contains(&s) => Ok(s),
        Some(s) => Err(TimeError::ParseError(format!(
            "Second out of range: {}",
            s
        ))),
        None => Err(TimeError::ParseError(format!("Invalid second: '{}'", text))),
    }
}

/// Formats `date` as `YYYY-MM-DDThh:mm:ssZ`, rounded to the nearest second.
///
/// The date is normalized through its Julian Day, so rounding up at the end of
/// a day carries into the next calendar day (and month, and year).
pub fn format_iso8601(date: &CivilDate) -> String {
    let rounded = julian_to_civil(civil_to_julian(*date) + HALF_SECOND_DAYS);
    let day = rounded.day.floor();
    let seconds = (((rounded.day - day) * SECONDS_PER_DAY_F64).floor() as u32).min(86_399);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        rounded.year,
        rounded.month,
        day as i64,
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

pub fn date_string_to_julian(s: &str) -> TimeResult<f64> {
    parse_iso8601(s).map(civil_to_julian)
}

pub fn julian_to_date_string(jd: f64) -> String {
    format_iso8601(&julian_to_civil(jd))
}

/// Parses a Julian Day number. Only finite values are accepted.
pub fn parse_julian_day(s: &str) -> TimeResult<f64> {
    match s.trim().parse::<f64>() {
        Ok(jd) if jd.is_finite() => Ok(jd),
        _ => {
            tracing::debug!(input = s, "rejected Julian Day");
            Err(TimeError::ParseError(format!("Invalid Julian Day: '{}'", s)))
        }
    }
}

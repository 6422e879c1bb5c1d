//! ISO 8601 date and duration validators.
//!
//! - [`IsoDate`] accepts calendar dates with optional time and offset,
//!   from `YYYY` up to `YYYY-MM-DDTHH:MM:SS.sss+HH:MM`.
//! - [`IsoDuration`] accepts `PnYnMnWnDTnHnMnS` durations. The parser
//!   returns a [`DurationError`] instead of panicking on malformed input.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// ISO DATE
// ============================================================================

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Returns `true` if `input` is an ISO 8601 calendar date or date-time.
#[must_use]
pub fn is_iso_date(input: &str) -> bool {
    let bytes = input.as_bytes();
    match bytes.len() {
        4 if bytes.iter().all(u8::is_ascii_digit) => {
            return NaiveDate::parse_from_str(&format!("{input}-01-01"), "%Y-%m-%d").is_ok();
        }
        7 => return NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d").is_ok(),
        10 => return NaiveDate::parse_from_str(input, "%Y-%m-%d").is_ok(),
        0..=9 => return false,
        _ => {}
    }

    if DateTime::parse_from_rfc3339(input).is_ok() {
        return true;
    }

    // chrono's `%:z` does not take a bare `Z`
    let normalized = match input.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+00:00"),
        None => input.to_owned(),
    };
    OFFSET_DATETIME_FORMATS
        .iter()
        .any(|fmt| DateTime::parse_from_str(&normalized, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(input, fmt).is_ok())
}

crate::validator! {
    /// Validates ISO 8601 date strings.
    ///
    /// ```rust
    /// use chainval_validator::foundation::Validate;
    /// use chainval_validator::validators::iso_date;
    ///
    /// assert!(iso_date().validate("2023-12-25").is_ok());
    /// assert!(iso_date().validate("2023-12-25T14:30:00.123Z").is_ok());
    /// assert!(iso_date().validate("2023-13-01").is_err());
    /// ```
    pub IsoDate for str;
    rule(input) { is_iso_date(input) }
    error(input) { ValidationError::invalid_format("", "iso_date") }
    fn iso_date();
}

// ============================================================================
// ISO DURATION
// ============================================================================

/// Why a duration string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The string does not start with `P`.
    #[error("duration must start with 'P'")]
    MissingPrefix,
    /// `P` (or `PT`) with no components.
    #[error("duration has no components")]
    Empty,
    /// A number was not followed by a designator.
    #[error("number at offset {0} has no designator")]
    MissingDesignator(usize),
    /// A malformed number.
    #[error("invalid number at offset {0}")]
    InvalidNumber(usize),
    /// A designator that is unknown or out of order.
    #[error("unexpected designator '{designator}' at offset {offset}")]
    UnexpectedDesignator {
        /// The offending character.
        designator: char,
        /// Byte offset into the input.
        offset: usize,
    },
}

/// A parsed ISO 8601 duration. Components keep their fractional parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

/// Parses `PnYnMnWnDTnHnMnS`.
///
/// Designators must appear in order and at most once; `T` must be followed by
/// at least one time component. Decimal fractions use `.` or `,`.
///
/// ```rust
/// use chainval_validator::validators::parse_duration;
///
/// let d = parse_duration("P1DT12H").unwrap();
/// assert_eq!((d.days, d.hours), (1.0, 12.0));
/// assert!(parse_duration("1D").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let rest = input.strip_prefix('P').ok_or(DurationError::MissingPrefix)?;

    let mut duration = Duration::default();
    let mut in_time = false;
    // index of the next designator allowed in the current section
    let mut cursor = 0usize;
    let mut components = 0usize;
    let mut time_components = 0usize;
    let mut number_start: Option<usize> = None;

    for (i, ch) in rest.char_indices() {
        let offset = i + 1;
        if ch.is_ascii_digit() || ch == '.' || ch == ',' {
            if number_start.is_none() {
                number_start = Some(i);
            }
            continue;
        }

        if ch == 'T' && !in_time {
            if number_start.is_some() {
                return Err(DurationError::MissingDesignator(offset));
            }
            in_time = true;
            cursor = 0;
            continue;
        }

        let start = number_start
            .take()
            .ok_or(DurationError::UnexpectedDesignator { designator: ch, offset })?;
        let amount = parse_amount(&rest[start..i]).ok_or(DurationError::InvalidNumber(start + 1))?;

        let order: &[char] = if in_time { &['H', 'M', 'S'] } else { &['Y', 'M', 'W', 'D'] };
        let slot = order[cursor..]
            .iter()
            .position(|&d| d == ch)
            .map(|p| p + cursor)
            .ok_or(DurationError::UnexpectedDesignator { designator: ch, offset })?;
        cursor = slot + 1;

        let field = match (in_time, ch) {
            (false, 'Y') => &mut duration.years,
            (false, 'M') => &mut duration.months,
            (false, 'W') => &mut duration.weeks,
            (false, _) => &mut duration.days,
            (true, 'H') => &mut duration.hours,
            (true, 'M') => &mut duration.minutes,
            (true, _) => &mut duration.seconds,
        };
        *field = amount;
        components += 1;
        if in_time {
            time_components += 1;
        }
    }

    if let Some(start) = number_start {
        return Err(DurationError::MissingDesignator(start + 1));
    }
    if components == 0 || (in_time && time_components == 0) {
        return Err(DurationError::Empty);
    }
    Ok(duration)
}

fn parse_amount(text: &str) -> Option<f64> {
    let text = text.replace(',', ".");
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if int.is_empty() || text.matches('.').count() > 1 {
        return None;
    }
    if text.contains('.') && frac.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Validates ISO 8601 duration strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration;

impl Validate for IsoDuration {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        parse_duration(input).map(|_| ()).map_err(|e| {
            ValidationError::invalid_format("", "iso_duration").with_param("reason", e.to_string())
        })
    }
}

#[must_use]
pub const fn iso_duration() -> IsoDuration {
    IsoDuration
}

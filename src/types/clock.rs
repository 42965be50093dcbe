// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock arithmetic over a 24-hour ring.
//!
//! A [`ClockValue`] counts seconds since a fixed reference midnight. It is
//! both a wall-clock time of day (hours, minutes and seconds are taken modulo
//! one day) and a monotonic counter that can roll over into following days.
//!
//! Two notions of "distance" coexist:
//!
//! - **Raw ordering** ([`ClockValue::is_before`], `Ord`) compares the full
//!   seconds counter, so `00:00:10 + 1 day` is never before `23:00:00`.
//! - **Ring difference** ([`ClockValue::difference_from`]) ignores days and
//!   measures the forward distance around the clock face.
//!
//! # Examples
//!
//! ```
//! use traffic_signal::types::ClockValue;
//!
//! let mut time = ClockValue::new(23, 59, 30).unwrap();
//! time.advance(60).unwrap();
//!
//! assert_eq!(time.to_string(), "00:00:30 + 1 day");
//! assert_eq!(time.days_elapsed(), 1);
//!
//! let late = ClockValue::new(23, 59, 0).unwrap();
//! let early = ClockValue::new(0, 1, 0).unwrap();
//! assert_eq!(late.difference_from(&early), 120);
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{ParseError, ValueError};

/// Number of seconds in one day.
pub const SECONDS_PER_DAY: u64 = 86_400;

const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Largest hour accepted by [`ClockValue::new`]; hour 24 is midnight of the following day.
const MAX_HOURS: u8 = 24;
const MAX_MINUTES: u8 = 59;
const MAX_SECONDS: u8 = 59;

/// A time of day with day wraparound.
///
/// Equality, hashing and ordering only look at the seconds elapsed since the
/// reference midnight.
///
/// # Examples
///
/// ```
/// use traffic_signal::types::ClockValue;
///
/// let time = ClockValue::new(9, 5, 3).unwrap();
/// assert_eq!(time.to_string(), "09:05:03");
/// assert_eq!(time.hours(), 9);
/// assert_eq!(time.minutes(), 5);
/// assert_eq!(time.seconds(), 3);
///
/// // Out-of-range fields are rejected
/// assert!(ClockValue::new(25, 0, 0).is_err());
/// assert!(ClockValue::new(10, 60, 0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockValue {
    seconds_since_reference: u64,
}

impl ClockValue {
    /// The reference midnight.
    pub const MIDNIGHT: Self = Self {
        seconds_since_reference: 0,
    };

    /// Creates a clock value from hour, minute and second fields.
    ///
    /// Hours may be 24, which denotes midnight of the following day and thus
    /// yields a value with one elapsed day.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::OutOfRange`] if hours exceed 24, or minutes or
    /// seconds exceed 59.
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, ValueError> {
        check_field("hours", hours, MAX_HOURS)?;
        check_field("minutes", minutes, MAX_MINUTES)?;
        check_field("seconds", seconds, MAX_SECONDS)?;

        Ok(Self {
            seconds_since_reference: u64::from(hours) * SECONDS_PER_HOUR
                + u64::from(minutes) * SECONDS_PER_MINUTE
                + u64::from(seconds),
        })
    }

    /// Creates a clock value from a raw count of seconds since the reference midnight.
    #[must_use]
    pub const fn from_seconds(seconds_since_reference: u64) -> Self {
        Self {
            seconds_since_reference,
        }
    }

    /// Returns the raw number of seconds since the reference midnight.
    #[must_use]
    pub const fn seconds_since_reference(&self) -> u64 {
        self.seconds_since_reference
    }

    /// Returns the seconds elapsed since the most recent midnight.
    #[must_use]
    pub const fn second_of_day(&self) -> u64 {
        self.seconds_since_reference % SECONDS_PER_DAY
    }

    /// Returns the hour of the day (0-23).
    #[must_use]
    pub const fn hours(&self) -> u64 {
        self.second_of_day() / SECONDS_PER_HOUR
    }

    /// Returns the minute of the hour (0-59).
    #[must_use]
    pub const fn minutes(&self) -> u64 {
        self.seconds_since_reference % SECONDS_PER_HOUR / SECONDS_PER_MINUTE
    }

    /// Returns the second of the minute (0-59).
    #[must_use]
    pub const fn seconds(&self) -> u64 {
        self.seconds_since_reference % SECONDS_PER_MINUTE
    }

    /// Returns how many whole days have passed since the reference midnight.
    #[must_use]
    pub const fn days_elapsed(&self) -> u64 {
        self.seconds_since_reference / SECONDS_PER_DAY
    }

    /// Returns the same wall-clock time on the reference day.
    #[must_use]
    pub const fn time_of_day(&self) -> Self {
        Self::from_seconds(self.second_of_day())
    }

    /// Moves the clock forward by `delta_seconds`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NonPositiveAdvance`] if `delta_seconds` is zero,
    /// or [`ValueError::ClockOverflow`] if the counter would overflow. The
    /// value is left untouched on error.
    pub fn advance(&mut self, delta_seconds: u64) -> Result<(), ValueError> {
        if delta_seconds == 0 {
            return Err(ValueError::NonPositiveAdvance);
        }

        self.seconds_since_reference = self
            .seconds_since_reference
            .checked_add(delta_seconds)
            .ok_or(ValueError::ClockOverflow)?;
        Ok(())
    }

    /// Returns true if `self` is strictly earlier than `other` in raw seconds.
    ///
    /// Days are taken into account: a value on the following day is never
    /// before a value on the reference day.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns the forward distance in seconds from `self` to `other` on the 24-hour ring.
    ///
    /// Days are ignored, so the result is always in `[0, 86399]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use traffic_signal::types::ClockValue;
    ///
    /// let ten = ClockValue::new(10, 0, 0).unwrap();
    /// let ten_past = ClockValue::new(10, 1, 0).unwrap();
    ///
    /// assert_eq!(ten.difference_from(&ten_past), 60);
    /// assert_eq!(ten_past.difference_from(&ten), 86_340);
    /// assert_eq!(ten.difference_from(&ten), 0);
    /// ```
    #[must_use]
    pub const fn difference_from(&self, other: &Self) -> u64 {
        (other.second_of_day() + SECONDS_PER_DAY - self.second_of_day()) % SECONDS_PER_DAY
    }
}

fn check_field(field: &'static str, actual: u8, max: u8) -> Result<(), ValueError> {
    if actual > max {
        return Err(ValueError::OutOfRange {
            field,
            min: 0,
            max,
            actual,
        });
    }
    Ok(())
}

impl fmt::Display for ClockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )?;

        match self.days_elapsed() {
            0 => Ok(()),
            1 => write!(f, " + 1 day"),
            days => write!(f, " + {days} days"),
        }
    }
}

impl FromStr for ClockValue {
    type Err = ParseError;

    /// Parses the canonical text form, `HH:MM:SS` optionally followed by
    /// ` + 1 day` or ` + N days`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (clock, days) = match s.split_once('+') {
            Some((clock, suffix)) => (clock.trim_end(), parse_day_suffix(suffix)?),
            None => (s, 0),
        };

        let parts: Vec<&str> = clock.split(':').collect();
        let [hours, minutes, seconds] = parts.as_slice() else {
            return Err(invalid(format!("expected HH:MM:SS format, got: {clock}")));
        };

        let mut value = Self::new(
            parse_field("hours", hours)?,
            parse_field("minutes", minutes)?,
            parse_field("seconds", seconds)?,
        )
        .map_err(|e| invalid(e.to_string()))?;

        if days > 0 {
            let extra = days
                .checked_mul(SECONDS_PER_DAY)
                .ok_or_else(|| invalid(format!("day count too large: {days}")))?;
            value
                .advance(extra)
                .map_err(|e| invalid(e.to_string()))?;
        }

        Ok(value)
    }
}

fn invalid(message: String) -> ParseError {
    ParseError::InvalidValue {
        field: "clock",
        message,
    }
}

fn parse_field(name: &str, text: &str) -> Result<u8, ParseError> {
    text.parse()
        .map_err(|_| invalid(format!("invalid {name}: {text}")))
}

fn parse_day_suffix(suffix: &str) -> Result<u64, ParseError> {
    let suffix = suffix.trim();
    let count = suffix
        .strip_suffix("days")
        .or_else(|| suffix.strip_suffix("day"))
        .ok_or_else(|| invalid(format!("invalid day suffix: {suffix}")))?
        .trim();

    count
        .parse()
        .map_err(|_| invalid(format!("invalid day count: {count}")))
}

impl TryFrom<String> for ClockValue {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockValue> for String {
    fn from(value: ClockValue) -> Self {
        value.to_string()
    }
}

impl From<NaiveTime> for ClockValue {
    /// Converts a chrono time of day. A leap second is folded into second 59.
    fn from(time: NaiveTime) -> Self {
        Self::from_seconds(u64::from(time.num_seconds_from_midnight()))
    }
}

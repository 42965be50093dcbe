// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Daily inactive window.
//!
//! The window is an interval on the 24-hour ring and may wrap past midnight
//! (for example `22:00:00` to `03:59:00`). Both bounds are inclusive.
//!
//! The steady cycle is counted from the last second of the end minute, and a
//! running light keeps its caution through that minute, so a window ending at
//! `03:59:00` hands over to GREEN at `04:00:00`.

use crate::error::ValueError;
use crate::types::{ClockValue, SECONDS_PER_DAY};

/// Seconds past the configured end that a running light stays in caution.
pub const WINDOW_END_HOLD_SECS: u64 = 59;

/// A validated inactive window.
///
/// Both bounds are times of day on the reference day, and they differ.
///
/// # Examples
///
/// ```
/// use traffic_signal::controller::InactiveWindow;
/// use traffic_signal::types::ClockValue;
///
/// let window = InactiveWindow::new(
///     ClockValue::new(22, 0, 0).unwrap(),
///     ClockValue::new(3, 59, 0).unwrap(),
/// )
/// .unwrap();
///
/// assert!(window.wraps_midnight());
/// assert!(window.contains(&ClockValue::new(23, 15, 0).unwrap()));
/// assert!(window.contains(&ClockValue::new(3, 59, 0).unwrap()));
/// assert!(!window.contains(&ClockValue::new(3, 59, 1).unwrap()));
/// assert_eq!(window.cycle_anchor(), ClockValue::new(3, 59, 59).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawInactiveWindow")]
pub struct InactiveWindow {
    start: ClockValue,
    end: ClockValue,
}

#[derive(serde::Deserialize)]
struct RawInactiveWindow {
    start: ClockValue,
    end: ClockValue,
}

impl InactiveWindow {
    /// Creates an inactive window.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotSameDay`] if either bound has rolled over into
    /// a later day, or [`ValueError::EmptyInactiveWindow`] if the bounds are equal.
    pub fn new(start: ClockValue, end: ClockValue) -> Result<Self, ValueError> {
        ensure_same_day("inactive window start", &start)?;
        ensure_same_day("inactive window end", &end)?;

        if start == end {
            return Err(ValueError::EmptyInactiveWindow);
        }

        Ok(Self { start, end })
    }

    /// Returns the first second of the window.
    #[must_use]
    pub const fn start(&self) -> ClockValue {
        self.start
    }

    /// Returns the configured end marker.
    #[must_use]
    pub const fn end(&self) -> ClockValue {
        self.end
    }

    /// Returns a copy with a new start, validated against the current end.
    ///
    /// # Errors
    ///
    /// Same as [`InactiveWindow::new`].
    pub fn with_start(&self, start: ClockValue) -> Result<Self, ValueError> {
        Self::new(start, self.end)
    }

    /// Returns a copy with a new end, validated against the current start.
    ///
    /// # Errors
    ///
    /// Same as [`InactiveWindow::new`].
    pub fn with_end(&self, end: ClockValue) -> Result<Self, ValueError> {
        Self::new(self.start, end)
    }

    /// Returns true if the window crosses midnight.
    #[must_use]
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Returns the ring distance from the start to the end.
    #[must_use]
    pub const fn span_secs(&self) -> u64 {
        self.start.difference_from(&self.end)
    }

    /// Returns true if `time` lies between the start and the end, both
    /// inclusive. Days are ignored.
    #[must_use]
    pub const fn contains(&self, time: &ClockValue) -> bool {
        self.start.difference_from(time) <= self.span_secs()
    }

    /// Returns true if a running light shows caution at `time`: inside the
    /// window or within the rest of its end minute.
    ///
    /// When the end minute reaches back to the start, a running light never
    /// leaves caution.
    #[must_use]
    pub const fn holds_caution(&self, time: &ClockValue) -> bool {
        self.start.difference_from(time) <= self.span_secs() + WINDOW_END_HOLD_SECS
    }

    /// Returns the second the steady cycle is counted from: the last second
    /// of the end minute. GREEN runs from the second after it.
    #[must_use]
    pub const fn cycle_anchor(&self) -> ClockValue {
        ClockValue::from_seconds(
            (self.end.second_of_day() + WINDOW_END_HOLD_SECS) % SECONDS_PER_DAY,
        )
    }
}

impl Default for InactiveWindow {
    /// Inactive from 22:00:00 through 03:59:00.
    fn default() -> Self {
        Self {
            start: ClockValue::from_seconds(22 * 3_600),
            end: ClockValue::from_seconds(3 * 3_600 + 59 * 60),
        }
    }
}

impl TryFrom<RawInactiveWindow> for InactiveWindow {
    type Error = ValueError;

    fn try_from(raw: RawInactiveWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// Rejects times that have rolled over past the reference day.
pub(crate) fn ensure_same_day(field: &'static str, time: &ClockValue) -> Result<(), ValueError> {
    match time.days_elapsed() {
        0 => Ok(()),
        days => Err(ValueError::NotSameDay { field, days }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(h: u8, m: u8, s: u8) -> ClockValue {
        ClockValue::new(h, m, s).unwrap()
    }

    fn night() -> InactiveWindow {
        InactiveWindow::new(clock(22, 0, 0), clock(3, 59, 0)).unwrap()
    }

    fn day() -> InactiveWindow {
        InactiveWindow::new(clock(4, 0, 0), clock(21, 59, 0)).unwrap()
    }

    #[test]
    fn rejects_equal_bounds() {
        assert_eq!(
            InactiveWindow::new(clock(22, 0, 0), clock(22, 0, 0)),
            Err(ValueError::EmptyInactiveWindow)
        );
    }

    #[test]
    fn rejects_start_on_later_day() {
        let mut start = clock(22, 0, 0);
        start.advance(SECONDS_PER_DAY).unwrap();

        assert_eq!(
            InactiveWindow::new(start, clock(3, 59, 0)),
            Err(ValueError::NotSameDay {
                field: "inactive window start",
                days: 1
            })
        );
    }

    #[test]
    fn rejects_end_on_later_day() {
        let mut end = clock(3, 59, 0);
        end.advance(SECONDS_PER_DAY).unwrap();

        assert!(matches!(
            InactiveWindow::new(clock(22, 0, 0), end),
            Err(ValueError::NotSameDay {
                field: "inactive window end",
                ..
            })
        ));
    }

    #[test]
    fn wrapping_window_membership() {
        let window = night();
        assert!(window.wraps_midnight());
        assert!(window.contains(&clock(22, 0, 0)));
        assert!(window.contains(&clock(0, 0, 0)));
        assert!(window.contains(&clock(3, 59, 0)));
        assert!(!window.contains(&clock(3, 59, 1)));
        assert!(!window.contains(&clock(3, 59, 59)));
        assert!(!window.contains(&clock(4, 0, 0)));
        assert!(!window.contains(&clock(21, 59, 59)));
    }

    #[test]
    fn daytime_window_membership() {
        let window = day();
        assert!(!window.wraps_midnight());
        assert!(window.contains(&clock(4, 0, 0)));
        assert!(window.contains(&clock(12, 0, 0)));
        assert!(window.contains(&clock(21, 59, 0)));
        assert!(!window.contains(&clock(21, 59, 30)));
        assert!(!window.contains(&clock(22, 0, 0)));
        assert!(!window.contains(&clock(3, 59, 59)));
    }

    #[test]
    fn caution_hold_covers_end_minute() {
        let window = night();
        assert!(window.holds_caution(&clock(23, 0, 0)));
        assert!(window.holds_caution(&clock(3, 59, 30)));
        assert!(window.holds_caution(&clock(3, 59, 59)));
        assert!(!window.holds_caution(&clock(4, 0, 0)));
        assert!(!window.holds_caution(&clock(21, 59, 59)));
    }

    #[test]
    fn membership_ignores_days() {
        let mut time = clock(23, 0, 0);
        time.advance(2 * SECONDS_PER_DAY).unwrap();
        assert!(night().contains(&time));
    }

    #[test]
    fn end_just_before_start_leaves_a_gap() {
        let window = InactiveWindow::new(clock(10, 0, 0), clock(9, 59, 30)).unwrap();
        assert_eq!(window.span_secs(), SECONDS_PER_DAY - 30);
        assert!(window.contains(&clock(9, 59, 30)));
        assert!(!window.contains(&clock(9, 59, 45)));

        // A running light never leaves caution
        assert!(window.holds_caution(&clock(9, 59, 45)));
    }

    #[test]
    fn anchor_is_last_second_of_end_minute() {
        assert_eq!(night().cycle_anchor(), clock(3, 59, 59));
        assert_eq!(day().cycle_anchor(), clock(21, 59, 59));

        let late = InactiveWindow::new(clock(1, 0, 0), clock(23, 59, 30)).unwrap();
        assert_eq!(late.cycle_anchor(), clock(0, 0, 29));
    }

    #[test]
    fn with_start_and_end_validate() {
        let window = night();
        assert_eq!(
            window.with_start(clock(3, 59, 0)),
            Err(ValueError::EmptyInactiveWindow)
        );
        assert_eq!(
            window.with_end(clock(22, 0, 0)),
            Err(ValueError::EmptyInactiveWindow)
        );

        let moved = window.with_end(clock(5, 0, 0)).unwrap();
        assert_eq!(moved.start(), clock(22, 0, 0));
        assert_eq!(moved.end(), clock(5, 0, 0));
    }

    #[test]
    fn deserialize_validates_bounds() {
        let window: InactiveWindow =
            serde_json::from_str(r#"{"start": "22:00:00", "end": "03:59:00"}"#).unwrap();
        assert_eq!(window, night());

        assert!(
            serde_json::from_str::<InactiveWindow>(r#"{"start": "22:00:00", "end": "22:00:00"}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<InactiveWindow>(
                r#"{"start": "22:00:00 + 1 day", "end": "03:59:00"}"#
            )
            .is_err()
        );
    }
}

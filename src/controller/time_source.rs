// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-clock sources used to seed a run.
//!
//! [`LightController::run`](crate::LightController::run) asks its time
//! source for the current time of day when no start time is given. The
//! controller defaults to [`SystemTimeSource`]; tests and simulations swap in
//! a [`FixedTimeSource`].

use std::fmt;

use chrono::Local;

use crate::types::ClockValue;

/// Provides the current time of day.
pub trait TimeSource: Send + Sync {
    /// Returns the current time of day on the reference day.
    fn time_of_day(&self) -> ClockValue;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn time_of_day(&self) -> ClockValue {
        ClockValue::from(Local::now().time())
    }
}

/// Always reports the same time of day.
///
/// # Examples
///
/// ```
/// use traffic_signal::controller::{FixedTimeSource, TimeSource};
/// use traffic_signal::types::ClockValue;
///
/// let source = FixedTimeSource::new(ClockValue::new(4, 0, 0).unwrap());
/// assert_eq!(source.time_of_day().to_string(), "04:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource(ClockValue);

impl FixedTimeSource {
    /// Creates a source frozen at the time of day of `time`.
    #[must_use]
    pub const fn new(time: ClockValue) -> Self {
        Self(time.time_of_day())
    }
}

impl TimeSource for FixedTimeSource {
    fn time_of_day(&self) -> ClockValue {
        self.0
    }
}

impl fmt::Display for FixedTimeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed at {}", self.0)
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Steady-state phase duration.

use std::fmt;
use std::time::Duration;

use crate::error::ValueError;

/// How long GREEN and RED each last, in whole seconds.
///
/// The caution (YELLOW) duration is derived as half of it, with a floor of
/// one second. Negative durations cannot be represented; raw signed input is
/// validated through [`TryFrom<i64>`].
///
/// # Examples
///
/// ```
/// use traffic_signal::types::PhaseDuration;
///
/// let duration = PhaseDuration::from_secs(60);
/// assert_eq!(duration.caution_secs(), 30);
/// assert_eq!(duration.cycle_secs(), 150);
///
/// // Zero still yields a one-second caution phase
/// assert_eq!(PhaseDuration::ZERO.caution_secs(), 1);
///
/// assert!(PhaseDuration::try_from(-5_i64).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64")]
pub struct PhaseDuration(u32);

impl PhaseDuration {
    /// A zero-second phase duration.
    pub const ZERO: Self = Self(0);

    /// Creates a phase duration from whole seconds.
    #[must_use]
    pub const fn from_secs(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Returns the caution duration in seconds: `max(1, seconds / 2)`.
    #[must_use]
    pub const fn caution_secs(&self) -> u32 {
        let half = self.0 / 2;
        if half == 0 { 1 } else { half }
    }

    /// Returns the length of one GREEN, YELLOW, RED cycle in seconds.
    #[must_use]
    pub const fn cycle_secs(&self) -> u64 {
        2 * self.0 as u64 + self.caution_secs() as u64
    }

    /// Returns the steady-state duration.
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }

    /// Returns the caution duration.
    #[must_use]
    pub const fn caution_duration(&self) -> Duration {
        Duration::from_secs(self.caution_secs() as u64)
    }
}

impl TryFrom<i64> for PhaseDuration {
    type Error = ValueError;

    fn try_from(seconds: i64) -> Result<Self, Self::Error> {
        if seconds < 0 {
            return Err(ValueError::NegativeDuration(seconds));
        }
        u32::try_from(seconds)
            .map(Self)
            .map_err(|_| ValueError::DurationTooLong {
                max: u32::MAX,
                actual: seconds,
            })
    }
}

impl fmt::Display for PhaseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

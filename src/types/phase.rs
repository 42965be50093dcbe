// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Displayed light phase.

use std::fmt;

/// The phase a traffic light displays.
///
/// The steady-state cycle is `Green -> Yellow -> Red -> Green`. `Yellow` is
/// also shown continuously during the inactive window.
///
/// # Examples
///
/// ```
/// use traffic_signal::types::Phase;
///
/// assert_eq!(Phase::Green.next(), Phase::Yellow);
/// assert_eq!(Phase::Red.next(), Phase::Green);
/// assert_eq!(Phase::Yellow.to_string(), "YELLOW");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    /// Traffic may proceed.
    Green,
    /// Caution, either between green and red or during the inactive window.
    Yellow,
    /// Traffic must stop. A freshly built controller starts here.
    #[default]
    Red,
}

impl Phase {
    /// Returns the successor in the steady-state cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
            Self::Red => Self::Green,
        }
    }

    /// Returns the upper-case name of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

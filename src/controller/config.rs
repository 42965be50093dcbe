// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Controller configuration.

use crate::error::{ParseError, ValueError};
use crate::types::{ClockValue, PhaseDuration};

use super::InactiveWindow;

/// The whole configuration of a light controller.
///
/// A `LightConfig` is always valid: every constructor and `with_*` method
/// validates the complete (duration, start, end) triple before returning,
/// so swapping one in via
/// [`LightController::reconfigure`](crate::LightController::reconfigure)
/// can never leave a half-applied state.
///
/// # Examples
///
/// ```
/// use traffic_signal::controller::LightConfig;
/// use traffic_signal::types::{ClockValue, PhaseDuration};
///
/// let config = LightConfig::new(
///     PhaseDuration::from_secs(60),
///     ClockValue::new(22, 0, 0).unwrap(),
///     ClockValue::new(3, 59, 0).unwrap(),
/// )
/// .unwrap();
///
/// // Load the same configuration from JSON
/// let json = r#"{
///     "phase_duration": 60,
///     "inactive_window": { "start": "22:00:00", "end": "03:59:00" }
/// }"#;
/// assert_eq!(LightConfig::from_json(json).unwrap(), config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LightConfig {
    phase_duration: PhaseDuration,
    inactive_window: InactiveWindow,
}

impl LightConfig {
    /// Creates a configuration from its three parts.
    ///
    /// # Errors
    ///
    /// Returns the window validation error, see [`InactiveWindow::new`].
    pub fn new(
        phase_duration: PhaseDuration,
        window_start: ClockValue,
        window_end: ClockValue,
    ) -> Result<Self, ValueError> {
        Ok(Self::from_parts(
            phase_duration,
            InactiveWindow::new(window_start, window_end)?,
        ))
    }

    /// Creates a configuration from an already validated window.
    #[must_use]
    pub const fn from_parts(phase_duration: PhaseDuration, inactive_window: InactiveWindow) -> Self {
        Self {
            phase_duration,
            inactive_window,
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] for malformed documents and for values
    /// that fail validation.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the GREEN/RED duration.
    #[must_use]
    pub const fn phase_duration(&self) -> PhaseDuration {
        self.phase_duration
    }

    /// Returns the inactive window.
    #[must_use]
    pub const fn inactive_window(&self) -> InactiveWindow {
        self.inactive_window
    }

    /// Returns a copy with a different phase duration.
    #[must_use]
    pub const fn with_phase_duration(mut self, phase_duration: PhaseDuration) -> Self {
        self.phase_duration = phase_duration;
        self
    }

    /// Returns a copy with a different window start.
    ///
    /// # Errors
    ///
    /// See [`InactiveWindow::new`].
    pub fn with_inactive_start(mut self, start: ClockValue) -> Result<Self, ValueError> {
        self.inactive_window = self.inactive_window.with_start(start)?;
        Ok(self)
    }

    /// Returns a copy with a different window end.
    ///
    /// # Errors
    ///
    /// See [`InactiveWindow::new`].
    pub fn with_inactive_end(mut self, end: ClockValue) -> Result<Self, ValueError> {
        self.inactive_window = self.inactive_window.with_end(end)?;
        Ok(self)
    }
}

impl Default for LightConfig {
    /// 60 second phases, inactive from 22:00:00 through 03:59:59.
    fn default() -> Self {
        Self {
            phase_duration: PhaseDuration::from_secs(60),
            inactive_window: InactiveWindow::default(),
        }
    }
}

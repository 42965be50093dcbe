// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signal event types.

use crate::types::{ClockValue, Phase};

use super::ControllerId;

/// Events emitted by a running light controller.
///
/// They mirror the status lines written to the log: one
/// [`PhaseChanged`](Self::PhaseChanged) per transition and one
/// [`Interrupted`](Self::Interrupted) when the cycle is stopped.
///
/// # Examples
///
/// ```
/// use traffic_signal::event::{ControllerId, SignalEvent};
/// use traffic_signal::types::{ClockValue, Phase};
///
/// let controller = ControllerId::new();
/// let at = ClockValue::new(4, 0, 0).unwrap();
///
/// let event = SignalEvent::phase_changed(controller, Phase::Green, at, false);
/// assert_eq!(event.phase(), Some(Phase::Green));
/// assert_eq!(event.time(), at);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SignalEvent {
    /// The light switched to a new phase.
    PhaseChanged {
        /// The controller that switched.
        controller: ControllerId,
        /// The phase now displayed.
        phase: Phase,
        /// Simulated time at which the phase began.
        time: ClockValue,
        /// Whether the phase is the inactive-window caution overlay.
        caution: bool,
    },

    /// The cycle was stopped.
    Interrupted {
        /// The controller that was stopped.
        controller: ControllerId,
        /// Simulated time when the interruption was observed.
        time: ClockValue,
    },
}

impl SignalEvent {
    /// Creates a phase changed event.
    #[must_use]
    pub const fn phase_changed(
        controller: ControllerId,
        phase: Phase,
        time: ClockValue,
        caution: bool,
    ) -> Self {
        Self::PhaseChanged {
            controller,
            phase,
            time,
            caution,
        }
    }

    /// Creates an interrupted event.
    #[must_use]
    pub const fn interrupted(controller: ControllerId, time: ClockValue) -> Self {
        Self::Interrupted { controller, time }
    }

    /// Returns the controller that emitted this event.
    #[must_use]
    pub const fn controller(&self) -> ControllerId {
        match self {
            Self::PhaseChanged { controller, .. } | Self::Interrupted { controller, .. } => {
                *controller
            }
        }
    }

    /// Returns the simulated time attached to this event.
    #[must_use]
    pub const fn time(&self) -> ClockValue {
        match self {
            Self::PhaseChanged { time, .. } | Self::Interrupted { time, .. } => *time,
        }
    }

    /// Returns the new phase for a phase change, `None` for an interruption.
    #[must_use]
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::PhaseChanged { phase, .. } => Some(*phase),
            Self::Interrupted { .. } => None,
        }
    }

    /// Returns `true` if this is an interruption event.
    #[must_use]
    pub const fn is_interruption(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}

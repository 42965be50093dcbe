// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Phase arithmetic shared by prediction and the running cycle.
//!
//! Within one cycle, counted as the forward ring distance from the window's
//! cycle anchor:
//!
//! ```text
//! [0, d)          GREEN
//! [d, d + c)      YELLOW
//! [d + c, 2d + c) RED
//! ```
//!
//! where `d` is the phase duration and `c` the caution duration.

use crate::error::ValueError;
use crate::types::{ClockValue, Phase};

use super::LightConfig;
use super::window::ensure_same_day;

/// One transition of the running cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    /// Phase to display.
    pub phase: Phase,
    /// Seconds to hold the phase.
    pub hold_secs: u32,
    /// Whether the phase is the inactive-window overlay.
    pub caution: bool,
}

/// Returns the phase displayed at `time`.
pub(crate) fn phase_at(config: &LightConfig, time: &ClockValue) -> Result<Phase, ValueError> {
    ensure_same_day("prediction time", time)?;

    let window = config.inactive_window();
    if window.contains(time) {
        return Ok(Phase::Yellow);
    }

    let duration = config.phase_duration();
    let green = u64::from(duration.as_secs());
    let caution = u64::from(duration.caution_secs());
    let position = window.cycle_anchor().difference_from(time) % duration.cycle_secs();

    Ok(if position < green {
        Phase::Green
    } else if position < green + caution {
        Phase::Yellow
    } else {
        Phase::Red
    })
}

/// Returns the transition the running cycle makes at `time`.
///
/// While the window holds caution the light repeats caution steps. Outside
/// it advances one phase from `current`, restarting at GREEN when it leaves
/// the window.
pub(crate) fn next_step(
    config: &LightConfig,
    current: Phase,
    in_caution: bool,
    time: &ClockValue,
) -> Step {
    let duration = config.phase_duration();

    if config.inactive_window().holds_caution(time) {
        return Step {
            phase: Phase::Yellow,
            hold_secs: duration.caution_secs(),
            caution: true,
        };
    }

    let phase = if in_caution {
        Phase::Green
    } else {
        current.next()
    };
    let hold_secs = match phase {
        Phase::Yellow => duration.caution_secs(),
        Phase::Green | Phase::Red => duration.as_secs(),
    };

    Step {
        phase,
        hold_secs,
        caution: false,
    }
}

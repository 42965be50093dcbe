// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for traffic light control.
//!
//! Each type ensures its values are valid at construction time, so the
//! controller never has to re-check them.
//!
//! # Types
//!
//! - [`ClockValue`] - Time of day with day rollover and ring arithmetic
//! - [`Phase`] - GREEN, YELLOW or RED
//! - [`PhaseDuration`] - Non-negative GREEN/RED duration with derived caution time

mod clock;
mod duration;
mod phase;

pub use clock::{ClockValue, SECONDS_PER_DAY};
pub use duration::PhaseDuration;
pub use phase::Phase;

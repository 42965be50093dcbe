// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event system for phase transitions.
//!
//! A running [`LightController`](crate::LightController) publishes a
//! [`SignalEvent`] for every transition and for its interruption. The
//! [`EventBus`] uses tokio's broadcast channel so any number of subscribers
//! can follow along.
//!
//! # Examples
//!
//! ```
//! use traffic_signal::event::{ControllerId, EventBus, SignalEvent};
//! use traffic_signal::types::{ClockValue, Phase};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let at = ClockValue::new(4, 0, 0).unwrap();
//! bus.publish(SignalEvent::phase_changed(ControllerId::new(), Phase::Green, at, false));
//! ```

mod controller_id;
mod event_bus;
mod signal_event;

pub use controller_id::ControllerId;
pub use event_bus::EventBus;
pub use signal_event::SignalEvent;

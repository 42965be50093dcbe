// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Traffic Signal - a traffic light controller with a daily inactive window.
//!
//! The light cycles GREEN, YELLOW and RED on fixed durations. During a daily
//! inactive window (for example overnight) it is held in caution, showing
//! YELLOW continuously.
//!
//! # Features
//!
//! - **Clock arithmetic**: [`ClockValue`] models a time of day with day
//!   rollover, raw ordering and ring distance
//! - **Prediction**: [`LightController::predict_phase`] computes the phase at
//!   any time of day as a pure function
//! - **Real-time cycle**: [`LightController::run`] drives the light on a
//!   background tokio task, stopped cooperatively by [`LightController::stop`]
//! - **Events**: transitions are logged through `tracing` and broadcast as
//!   [`SignalEvent`](event::SignalEvent)s
//!
//! # Quick Start
//!
//! ## Predicting phases
//!
//! ```
//! use traffic_signal::{ClockValue, LightController, Phase, PhaseDuration};
//!
//! # fn main() -> traffic_signal::Result<()> {
//! let controller = LightController::new(
//!     PhaseDuration::from_secs(60),
//!     ClockValue::new(22, 0, 0)?,
//!     ClockValue::new(3, 59, 0)?,
//! )?;
//!
//! assert_eq!(controller.predict_phase(&ClockValue::new(23, 15, 0)?)?, Phase::Yellow);
//! assert_eq!(controller.predict_phase(&ClockValue::new(4, 0, 0)?)?, Phase::Green);
//! assert_eq!(controller.predict_phase(&ClockValue::new(4, 1, 30)?)?, Phase::Red);
//! # Ok(())
//! # }
//! ```
//!
//! ## Running the light
//!
//! ```no_run
//! use traffic_signal::{ClockValue, LightController, PhaseDuration};
//!
//! #[tokio::main]
//! async fn main() -> traffic_signal::Result<()> {
//!     let controller = LightController::new(
//!         PhaseDuration::from_secs(60),
//!         ClockValue::new(22, 0, 0)?,
//!         ClockValue::new(3, 59, 0)?,
//!     )?;
//!
//!     let mut events = controller.subscribe();
//!     controller.run(Some(ClockValue::new(4, 0, 0)?))?;
//!
//!     while let Ok(event) = events.recv().await {
//!         println!("{event:?}");
//!         if event.phase() == Some(traffic_signal::Phase::Red) {
//!             break;
//!         }
//!     }
//!
//!     controller.stop()?;
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod error;
pub mod event;
pub mod types;

pub use controller::{LightConfig, LightController, RunSummary, StoppedRuntime};
pub use error::{Error, ParseError, Result, ValueError};
pub use types::{ClockValue, Phase, PhaseDuration};

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Traffic light controller.
//!
//! The [`LightController`] cycles GREEN, YELLOW and RED on fixed durations
//! and is held in caution (YELLOW) during a daily [`InactiveWindow`].
//!
//! # Phase layout
//!
//! Outside the inactive window the phase follows from the forward distance
//! between the window's [cycle anchor](InactiveWindow::cycle_anchor) and the
//! time, modulo the cycle length:
//!
//! | Offset from cycle start | Phase  |
//! |-------------------------|--------|
//! | `[0, d)`                | GREEN  |
//! | `[d, d + c)`            | YELLOW |
//! | `[d + c, 2d + c)`       | RED    |
//!
//! with `d` the phase duration and `c = max(1, d / 2)` the caution duration.
//!
//! # Running in real time
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use traffic_signal::LightController;
//! use traffic_signal::controller::LightConfig;
//!
//! #[tokio::main]
//! async fn main() -> traffic_signal::Result<()> {
//!     let controller = LightController::from_config(LightConfig::default());
//!     let mut events = controller.subscribe();
//!
//!     // Seeded from the system clock
//!     controller.run(None)?;
//!
//!     if let Ok(event) = events.recv().await {
//!         println!("{event:?}");
//!     }
//!
//!     tokio::time::sleep(Duration::from_secs(5)).await;
//!     let summary = controller.stop()?.finished().await?;
//!     println!("{} transitions", summary.transitions);
//!     Ok(())
//! }
//! ```

mod config;
mod cycle;
mod light_controller;
mod runtime;
mod time_source;
mod window;

pub use config::LightConfig;
pub use light_controller::LightController;
pub use runtime::{RunSummary, StoppedRuntime};
pub use time_source::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use window::{InactiveWindow, WINDOW_END_HOLD_SECS};

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intersection example.
//!
//! Builds a light with one-minute phases that rests in caution overnight,
//! predicts its phase just before the window opens, then drives it in real
//! time for a moment and stops it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example intersection
//!
//! # Show debug logs
//! RUST_LOG=debug cargo run --example intersection
//! ```

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use traffic_signal::{ClockValue, LightController, PhaseDuration};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let controller = LightController::new(
        PhaseDuration::from_secs(60),
        ClockValue::new(22, 0, 0)?,
        ClockValue::new(3, 59, 0)?,
    )?;
    println!(
        "Inactive window: {} - {} (phase {}, caution {}s)",
        controller.inactive_window().start(),
        controller.inactive_window().end(),
        controller.phase_duration(),
        controller.caution_secs(),
    );

    let start = ClockValue::new(21, 58, 30)?;
    println!("Predicted phase at {start}: {}", controller.predict_phase(&start)?);

    let mut events = controller.subscribe();
    controller.run(Some(start))?;
    tokio::time::sleep(Duration::from_secs(1)).await;

    let summary = controller.stop()?.finished().await?;

    while let Ok(event) = events.try_recv() {
        match event.phase() {
            Some(phase) => println!("  {} -> {phase}", event.time()),
            None => println!("  {} -> stopped", event.time()),
        }
    }

    println!(
        "Stopped after {} transition(s), showing {} at {}",
        summary.transitions, summary.final_phase, summary.final_time
    );

    Ok(())
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Background light cycle.
//!
//! A run is one tokio task driving a private simulated clock. Each loop
//! iteration applies one [`Step`](super::cycle::Step): it publishes the new
//! phase, advances the simulated clock by the hold time and sleeps that long
//! in wall-clock time. Cancellation arrives over a `watch` channel and is
//! checked before every transition and raced against every sleep.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::event::{ControllerId, EventBus, SignalEvent};
use crate::types::{ClockValue, Phase};

use super::LightConfig;
use super::cycle::{self, Step};

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of phase transitions made.
    pub transitions: u64,
    /// Phase displayed when the run ended.
    pub final_phase: Phase,
    /// Simulated time when the run ended.
    pub final_time: ClockValue,
    /// `true` when the run ended because it was stopped.
    pub interrupted: bool,
}

/// Handle to a run that has been told to stop.
///
/// Dropping it is fine: the task still observes the cancellation and exits
/// on its own. Await [`StoppedRuntime::finished`] to wait for it.
#[derive(Debug)]
pub struct StoppedRuntime {
    task: JoinHandle<RunSummary>,
}

impl StoppedRuntime {
    /// Waits for the cycle task to exit and returns its summary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RuntimeFault`] if the task panicked or was aborted.
    pub async fn finished(self) -> Result<RunSummary> {
        self.task
            .await
            .map_err(|e| Error::RuntimeFault(e.to_string()))
    }

    /// Returns true once the cycle task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// The controller's handle to its live run.
pub(crate) struct ActiveRuntime {
    cancel: watch::Sender<bool>,
    task: JoinHandle<RunSummary>,
}

impl ActiveRuntime {
    pub(crate) fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signals cancellation without waiting for the task.
    pub(crate) fn cancel(self) -> StoppedRuntime {
        // The task may already be gone
        let _ = self.cancel.send(true);
        StoppedRuntime { task: self.task }
    }
}

/// State moved into the cycle task.
pub(crate) struct CycleTask {
    id: ControllerId,
    config: LightConfig,
    clock: ClockValue,
    phase: Phase,
    in_caution: bool,
    transitions: u64,
    phase_tx: Arc<watch::Sender<Phase>>,
    events: EventBus,
    cancel: watch::Receiver<bool>,
}

impl CycleTask {
    /// Spawns a cycle starting at `start` on the given runtime.
    pub(crate) fn spawn(
        handle: &tokio::runtime::Handle,
        id: ControllerId,
        config: LightConfig,
        start: ClockValue,
        phase_tx: Arc<watch::Sender<Phase>>,
        events: EventBus,
    ) -> ActiveRuntime {
        let (cancel, cancel_rx) = watch::channel(false);
        let phase = *phase_tx.borrow();

        let task = Self {
            id,
            config,
            clock: start,
            phase,
            in_caution: false,
            transitions: 0,
            phase_tx,
            events,
            cancel: cancel_rx,
        };

        ActiveRuntime {
            cancel,
            task: handle.spawn(task.run()),
        }
    }

    fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    async fn run(mut self) -> RunSummary {
        let interrupted = loop {
            if self.is_cancelled() {
                break true;
            }

            let step = cycle::next_step(&self.config, self.phase, self.in_caution, &self.clock);
            self.apply(&step);

            if step.hold_secs > 0
                && let Err(e) = self.clock.advance(u64::from(step.hold_secs))
            {
                tracing::warn!(
                    controller = %self.id.short(),
                    time = %self.clock,
                    error = %e,
                    "Simulated clock cannot advance, ending light cycle"
                );
                break false;
            }

            let hold = Duration::from_secs(u64::from(step.hold_secs));
            tokio::select! {
                biased;
                _ = self.cancel.changed() => break true,
                () = tokio::time::sleep(hold) => {}
            }
        };

        if interrupted {
            tracing::info!(
                controller = %self.id.short(),
                time = %self.clock,
                "Light cycle interrupted manually"
            );
            self.events
                .publish(SignalEvent::interrupted(self.id, self.clock));
        }

        RunSummary {
            transitions: self.transitions,
            final_phase: self.phase,
            final_time: self.clock,
            interrupted,
        }
    }

    fn apply(&mut self, step: &Step) {
        self.phase = step.phase;
        self.in_caution = step.caution;
        self.transitions += 1;
        self.phase_tx.send_replace(step.phase);

        tracing::info!(
            controller = %self.id.short(),
            phase = %step.phase,
            time = %self.clock,
            caution = step.caution,
            "Light phase changed"
        );
        self.events.publish(SignalEvent::phase_changed(
            self.id,
            step.phase,
            self.clock,
            step.caution,
        ));
    }
}

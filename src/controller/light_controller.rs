// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The light controller.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tokio::sync::{broadcast, watch};

use crate::error::{Error, Result, ValueError};
use crate::event::{ControllerId, EventBus, SignalEvent};
use crate::types::{ClockValue, Phase, PhaseDuration};

use super::cycle;
use super::runtime::{ActiveRuntime, CycleTask, StoppedRuntime};
use super::{InactiveWindow, LightConfig, SystemTimeSource, TimeSource};

/// A single traffic light.
///
/// The controller owns a validated [`LightConfig`] and offers two views of
/// the light:
///
/// - [`predict_phase`](Self::predict_phase) computes the phase at any time of
///   day without side effects, and
/// - [`run`](Self::run) / [`stop`](Self::stop) drive the light forward in real
///   time on a background tokio task.
///
/// All methods take `&self`, so a controller can be shared behind an `Arc`.
/// Dropping the controller cancels an active run.
///
/// # Examples
///
/// ```
/// use traffic_signal::LightController;
/// use traffic_signal::types::{ClockValue, Phase, PhaseDuration};
///
/// let controller = LightController::new(
///     PhaseDuration::from_secs(60),
///     ClockValue::new(22, 0, 0).unwrap(),
///     ClockValue::new(3, 59, 0).unwrap(),
/// )
/// .unwrap();
///
/// let phase = controller.predict_phase(&ClockValue::new(4, 1, 30).unwrap()).unwrap();
/// assert_eq!(phase, Phase::Red);
/// ```
pub struct LightController {
    id: ControllerId,
    config: RwLock<LightConfig>,
    phase_tx: Arc<watch::Sender<Phase>>,
    runtime: Mutex<Option<ActiveRuntime>>,
    events: EventBus,
    time_source: Arc<dyn TimeSource>,
}

impl LightController {
    /// Creates a controller.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if either window bound is not on the
    /// reference day or the bounds are equal.
    pub fn new(
        phase_duration: PhaseDuration,
        window_start: ClockValue,
        window_end: ClockValue,
    ) -> Result<Self> {
        Ok(Self::from_config(LightConfig::new(
            phase_duration,
            window_start,
            window_end,
        )?))
    }

    /// Creates a controller from a validated configuration.
    #[must_use]
    pub fn from_config(config: LightConfig) -> Self {
        let (phase_tx, _) = watch::channel(Phase::Red);

        Self {
            id: ControllerId::new(),
            config: RwLock::new(config),
            phase_tx: Arc::new(phase_tx),
            runtime: Mutex::new(None),
            events: EventBus::new(),
            time_source: Arc::new(SystemTimeSource),
        }
    }

    /// Replaces the source used to seed [`run`](Self::run) without a start time.
    #[must_use]
    pub fn with_time_source(mut self, time_source: impl TimeSource + 'static) -> Self {
        self.time_source = Arc::new(time_source);
        self
    }

    /// Returns the controller's identifier.
    #[must_use]
    pub const fn id(&self) -> ControllerId {
        self.id
    }

    /// Returns a snapshot of the configuration.
    #[must_use]
    pub fn config(&self) -> LightConfig {
        *self.config.read()
    }

    /// Returns the GREEN/RED duration.
    #[must_use]
    pub fn phase_duration(&self) -> PhaseDuration {
        self.config.read().phase_duration()
    }

    /// Returns the YELLOW duration in seconds.
    #[must_use]
    pub fn caution_secs(&self) -> u32 {
        self.phase_duration().caution_secs()
    }

    /// Returns the inactive window.
    #[must_use]
    pub fn inactive_window(&self) -> InactiveWindow {
        self.config.read().inactive_window()
    }

    /// Replaces the whole configuration at once.
    ///
    /// An active run keeps the configuration it was started with; the new
    /// one applies to predictions and to the next run.
    pub fn reconfigure(&self, config: LightConfig) {
        *self.config.write() = config;
        tracing::debug!(controller = %self.id.short(), ?config, "Light reconfigured");
    }

    /// Sets the GREEN/RED duration.
    ///
    /// Negative raw values are rejected earlier, by
    /// [`PhaseDuration::try_from`].
    pub fn set_phase_duration(&self, phase_duration: PhaseDuration) {
        let mut config = self.config.write();
        *config = config.with_phase_duration(phase_duration);
        tracing::debug!(controller = %self.id.short(), %phase_duration, "Phase duration changed");
    }

    /// Moves the start of the inactive window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `start` is not on the reference day or
    /// equals the current end. The configuration is unchanged on error.
    pub fn set_inactive_window_start(&self, start: ClockValue) -> Result<()> {
        self.update(|config| config.with_inactive_start(start))
    }

    /// Moves the end of the inactive window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `end` is not on the reference day or
    /// equals the current start. The configuration is unchanged on error.
    pub fn set_inactive_window_end(&self, end: ClockValue) -> Result<()> {
        self.update(|config| config.with_inactive_end(end))
    }

    fn update(
        &self,
        change: impl FnOnce(LightConfig) -> std::result::Result<LightConfig, ValueError>,
    ) -> Result<()> {
        let mut config = self.config.write();
        match change(*config) {
            Ok(proposed) => {
                *config = proposed;
                tracing::debug!(controller = %self.id.short(), config = ?proposed, "Light reconfigured");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(controller = %self.id.short(), error = %e, "Rejected light configuration");
                Err(e.into())
            }
        }
    }

    /// Predicts the phase displayed at `time`.
    ///
    /// This is a pure function of `time` and the current configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] if `time` is not on the reference day.
    pub fn predict_phase(&self, time: &ClockValue) -> Result<Phase> {
        Ok(cycle::phase_at(&self.config.read(), time)?)
    }

    /// Returns the phase last set by the running cycle.
    ///
    /// A controller that has never run shows [`Phase::Red`].
    #[must_use]
    pub fn current_phase(&self) -> Phase {
        *self.phase_tx.borrow()
    }

    /// Returns a receiver that observes every change of [`current_phase`](Self::current_phase).
    #[must_use]
    pub fn watch_phase(&self) -> watch::Receiver<Phase> {
        self.phase_tx.subscribe()
    }

    /// Subscribes to transition and interruption events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SignalEvent> {
        self.events.subscribe()
    }

    /// Returns true while a run is active.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.runtime
            .lock()
            .as_ref()
            .is_some_and(|runtime| !runtime.is_finished())
    }

    /// Starts the light cycle on a background task.
    ///
    /// The simulated clock starts at `start`, or at the time source's current
    /// time of day when `None`. Returns as soon as the task is spawned.
    ///
    /// # Errors
    ///
    /// - [`Error::NoAsyncRuntime`] if called outside a tokio runtime
    /// - [`Error::RuntimeAlreadyActive`] if a run is already active
    pub fn run(&self, start: Option<ClockValue>) -> Result<()> {
        let handle =
            tokio::runtime::Handle::try_current().map_err(|_| Error::NoAsyncRuntime)?;

        let mut runtime = self.runtime.lock();
        if runtime.as_ref().is_some_and(|active| !active.is_finished()) {
            return Err(Error::RuntimeAlreadyActive);
        }

        let start = start.unwrap_or_else(|| self.time_source.time_of_day());
        let config = self.config();

        tracing::info!(
            controller = %self.id.short(),
            start = %start,
            phase_duration = %config.phase_duration(),
            "Starting light cycle"
        );

        *runtime = Some(CycleTask::spawn(
            &handle,
            self.id,
            config,
            start,
            Arc::clone(&self.phase_tx),
            self.events.clone(),
        ));
        Ok(())
    }

    /// Stops the light cycle.
    ///
    /// Publishes the cancellation and returns without waiting; the task
    /// makes no further transition once it observes it. Await
    /// [`StoppedRuntime::finished`] on the result to wait for the task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveRuntime`] if [`run`](Self::run) was never
    /// called, the run was already stopped, or it already ended on its own.
    pub fn stop(&self) -> Result<StoppedRuntime> {
        let Some(active) = self
            .runtime
            .lock()
            .take()
            .filter(|active| !active.is_finished())
        else {
            tracing::warn!(controller = %self.id.short(), "Stop requested without an active run");
            return Err(Error::NoActiveRuntime);
        };

        tracing::debug!(controller = %self.id.short(), "Stopping light cycle");
        Ok(active.cancel())
    }
}

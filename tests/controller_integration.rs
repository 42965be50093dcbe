// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for phase prediction and the real-time light cycle.

use std::sync::Arc;

use traffic_signal::controller::{FixedTimeSource, LightConfig};
use traffic_signal::event::SignalEvent;
use traffic_signal::{ClockValue, Error, LightController, Phase, PhaseDuration, ValueError};

fn clock(h: u8, m: u8, s: u8) -> ClockValue {
    ClockValue::new(h, m, s).unwrap()
}

fn night_controller() -> LightController {
    LightController::new(PhaseDuration::from_secs(60), clock(22, 0, 0), clock(3, 59, 0)).unwrap()
}

fn day_controller() -> LightController {
    LightController::new(PhaseDuration::from_secs(60), clock(4, 0, 0), clock(21, 59, 0)).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

mod construction {
    use super::*;

    #[test]
    fn negative_duration_is_rejected() {
        assert_eq!(
            PhaseDuration::try_from(-5_i64),
            Err(ValueError::NegativeDuration(-5))
        );
    }

    #[test]
    fn equal_bounds_are_rejected() {
        let result =
            LightController::new(PhaseDuration::from_secs(60), clock(22, 0, 0), clock(22, 0, 0));
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::EmptyInactiveWindow))
        ));
    }

    #[test]
    fn overflowed_start_is_rejected() {
        let mut start = clock(22, 0, 0);
        start.advance(86_400).unwrap();

        let result = LightController::new(PhaseDuration::from_secs(60), start, clock(3, 59, 0));
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::NotSameDay { .. }))
        ));
    }

    #[test]
    fn overflowed_end_is_rejected() {
        let mut end = clock(3, 59, 0);
        end.advance(86_400).unwrap();

        let result = LightController::new(PhaseDuration::from_secs(60), clock(22, 0, 0), end);
        assert!(matches!(
            result,
            Err(Error::Value(ValueError::NotSameDay { .. }))
        ));
    }

    #[test]
    fn from_json_config() {
        let config = LightConfig::from_json(
            r#"{"phase_duration": 60, "inactive_window": {"start": "04:00:00", "end": "21:59:00"}}"#,
        )
        .unwrap();
        let controller = LightController::from_config(config);

        assert_eq!(controller.predict_phase(&clock(22, 0, 0)).unwrap(), Phase::Green);
    }
}

// ============================================================================
// Prediction
// ============================================================================

mod prediction {
    use super::*;

    #[test]
    fn night_window() {
        let controller = night_controller();

        let cases = [
            (clock(21, 58, 30), Phase::Yellow),
            (clock(23, 15, 0), Phase::Yellow),
            (clock(4, 0, 0), Phase::Green),
            (clock(4, 1, 0), Phase::Yellow),
            (clock(4, 1, 20), Phase::Yellow),
            (clock(4, 1, 30), Phase::Red),
            (clock(4, 2, 0), Phase::Red),
        ];
        for (time, expected) in cases {
            assert_eq!(controller.predict_phase(&time).unwrap(), expected, "at {time}");
        }
    }

    #[test]
    fn day_window() {
        let controller = day_controller();

        let cases = [
            (clock(22, 0, 0), Phase::Green),
            (clock(22, 0, 30), Phase::Green),
            (clock(22, 1, 0), Phase::Yellow),
            (clock(22, 1, 20), Phase::Yellow),
            (clock(22, 1, 30), Phase::Red),
            (clock(22, 2, 0), Phase::Red),
            (clock(22, 2, 30), Phase::Green),
            (clock(4, 0, 0), Phase::Yellow),
        ];
        for (time, expected) in cases {
            assert_eq!(controller.predict_phase(&time).unwrap(), expected, "at {time}");
        }
    }

    #[test]
    fn end_minute_is_outside_window() {
        let controller = night_controller();

        assert_eq!(controller.predict_phase(&clock(3, 59, 0)).unwrap(), Phase::Yellow);
        for time in [clock(3, 59, 1), clock(3, 59, 30), clock(3, 59, 59)] {
            assert_ne!(controller.predict_phase(&time).unwrap(), Phase::Yellow, "at {time}");
        }
        assert_eq!(controller.predict_phase(&clock(4, 0, 59)).unwrap(), Phase::Yellow);

        let narrow =
            LightController::new(PhaseDuration::from_secs(60), clock(10, 0, 0), clock(9, 59, 30))
                .unwrap();
        assert_ne!(narrow.predict_phase(&clock(9, 59, 45)).unwrap(), Phase::Yellow);
    }

    #[test]
    fn later_day_is_rejected() {
        let controller = night_controller();
        let mut time = clock(4, 0, 0);
        time.advance(86_400).unwrap();

        assert!(matches!(
            controller.predict_phase(&time),
            Err(Error::Value(ValueError::NotSameDay { .. }))
        ));
    }

    #[test]
    fn concurrent_predictions_agree() {
        let controller = Arc::new(night_controller());
        let expected = controller.predict_phase(&clock(14, 7, 9)).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let controller = Arc::clone(&controller);
                std::thread::spawn(move || controller.predict_phase(&clock(14, 7, 9)).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}

// ============================================================================
// Runtime
// ============================================================================

mod runtime {
    use super::*;

    async fn next_phase(rx: &mut tokio::sync::broadcast::Receiver<SignalEvent>) -> (Phase, ClockValue) {
        let event = rx.recv().await.unwrap();
        (event.phase().unwrap(), event.time())
    }

    #[test]
    fn stop_without_run_fails() {
        assert!(matches!(
            night_controller().stop(),
            Err(Error::NoActiveRuntime)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_twice_fails() {
        let controller = night_controller();
        controller.run(Some(clock(4, 0, 0))).unwrap();

        assert!(controller.stop().is_ok());
        assert!(matches!(controller.stop(), Err(Error::NoActiveRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn cycle_matches_prediction() {
        let controller = night_controller();
        let mut rx = controller.subscribe();
        controller.run(Some(clock(4, 0, 0))).unwrap();

        let expected = [
            (Phase::Green, clock(4, 0, 0)),
            (Phase::Yellow, clock(4, 1, 0)),
            (Phase::Red, clock(4, 1, 30)),
            (Phase::Green, clock(4, 2, 30)),
        ];
        for (phase, time) in expected {
            assert_eq!(next_phase(&mut rx).await, (phase, time));
            assert_eq!(controller.predict_phase(&time).unwrap(), phase);
        }

        let summary = controller.stop().unwrap().finished().await.unwrap();
        assert!(summary.interrupted);
        assert_eq!(summary.transitions, 4);
        assert_eq!(summary.final_phase, Phase::Green);
        assert_eq!(summary.final_time, clock(4, 3, 30));
    }

    #[tokio::test(start_paused = true)]
    async fn no_transition_after_stop() {
        let controller = night_controller();
        let mut rx = controller.subscribe();
        controller.run(Some(clock(4, 0, 0))).unwrap();

        next_phase(&mut rx).await;
        controller.stop().unwrap().finished().await.unwrap();

        let last = rx.recv().await.unwrap();
        assert!(last.is_interruption());
        assert_eq!(last.controller(), controller.id());
        assert!(rx.try_recv().is_err());
        assert_eq!(controller.current_phase(), Phase::Green);
    }

    #[tokio::test(start_paused = true)]
    async fn caution_through_window_then_green() {
        let controller = night_controller();
        let mut rx = controller.subscribe();
        controller.run(Some(clock(3, 59, 0))).unwrap();

        assert_eq!(next_phase(&mut rx).await, (Phase::Yellow, clock(3, 59, 0)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Yellow, clock(3, 59, 30)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Green, clock(4, 0, 0)));

        controller.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn entering_window_switches_to_caution() {
        let controller = night_controller();
        let mut rx = controller.subscribe();
        // 21:57:30 is one second into a GREEN phase
        controller.run(Some(clock(21, 57, 30))).unwrap();

        assert_eq!(next_phase(&mut rx).await, (Phase::Green, clock(21, 57, 30)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Yellow, clock(21, 58, 30)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Red, clock(21, 59, 0)));

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            SignalEvent::phase_changed(controller.id(), Phase::Yellow, clock(22, 0, 0), true)
        );

        controller.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_skips_steady_phases() {
        let controller = LightController::new(PhaseDuration::ZERO, clock(22, 0, 0), clock(3, 59, 0))
            .unwrap()
            .with_time_source(FixedTimeSource::new(clock(12, 0, 0)));
        let mut rx = controller.subscribe();
        controller.run(None).unwrap();

        assert_eq!(next_phase(&mut rx).await, (Phase::Green, clock(12, 0, 0)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Yellow, clock(12, 0, 0)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Red, clock(12, 0, 1)));
        assert_eq!(next_phase(&mut rx).await, (Phase::Green, clock(12, 0, 1)));

        controller.stop().unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn restart_after_stop() {
        let controller = day_controller();
        let mut rx = controller.subscribe();

        controller.run(Some(clock(22, 0, 0))).unwrap();
        assert_eq!(next_phase(&mut rx).await, (Phase::Green, clock(22, 0, 0)));
        controller.stop().unwrap().finished().await.unwrap();
        assert!(rx.recv().await.unwrap().is_interruption());

        controller.run(Some(clock(22, 1, 0))).unwrap();
        assert_eq!(next_phase(&mut rx).await, (Phase::Yellow, clock(22, 1, 0)));
        controller.stop().unwrap();
    }
}

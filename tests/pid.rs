use line_tracker::control::{FixedStepClock, MonotonicClock, PidController, PidGains};

fn proportional_only() -> PidGains {
    PidGains {
        kp: 1.0,
        ki: 0.0,
        kd: 0.0,
    }
}

#[test]
fn pure_proportional_ignores_elapsed_time() {
    for step in [0.0, 0.001, 0.033, 2.5] {
        let mut pid =
            PidController::with_clock(proportional_only(), 10.0, FixedStepClock::new(0.0, step));
        assert_eq!(pid.update(7.0), 3.0, "step={step}");
    }
    let mut pid = PidController::with_clock(proportional_only(), 10.0, MonotonicClock::new());
    assert_eq!(pid.update(7.0), 3.0);
    let mut pid = PidController::new(proportional_only(), 10.0);
    assert_eq!(pid.update_at(7.0, 1234.5), 3.0);
}

#[test]
fn integral_accumulates_error_times_dt() {
    let (e, d) = (2.5, 0.04);
    let clock = FixedStepClock::new(3.0, d);
    let mut pid = PidController::with_clock(PidGains::default(), 10.0, clock);
    for n in 1..=50 {
        pid.update(10.0 - e);
        let expected = n as f64 * e * d;
        assert!(
            (pid.state().integral - expected).abs() < 1e-9,
            "after {n} updates integral={} expected={expected}",
            pid.state().integral
        );
    }
}

#[test]
fn integral_is_not_clamped() {
    let gains = PidGains {
        kp: 0.0,
        ki: 1.0,
        kd: 0.0,
    };
    let mut pid = PidController::with_clock(gains, 100.0, FixedStepClock::new(0.0, 1.0));
    let mut last = 0.0;
    for _ in 0..1000 {
        let out = pid.update(0.0);
        assert!(out > last);
        last = out;
    }
    assert!((last - 100_000.0).abs() < 1e-6);
}

#[test]
fn derivative_reacts_to_error_change() {
    let gains = PidGains {
        kp: 0.0,
        ki: 0.0,
        kd: 1.0,
    };
    let mut pid = PidController::with_clock(gains, 0.0, FixedStepClock::new(0.0, 0.5));
    // error 0 -> -4 over 0.5 s
    assert!((pid.update(4.0) + 8.0).abs() < 1e-12);
    // unchanged error: no derivative contribution
    assert_eq!(pid.update(4.0), 0.0);
}

#[test]
fn explicit_timestamps_floor_dt() {
    let gains = PidGains {
        kp: 0.0,
        ki: 1.0,
        kd: 0.0,
    };
    let mut pid = PidController::with_clock(gains, 1.0, FixedStepClock::new(10.0, 0.0));
    // Same instant as construction: dt floors to 1 ms.
    let out = pid.update_at(0.0, 10.0);
    assert!((out - 0.001).abs() < 1e-12);
    // Clock going backwards is treated the same way.
    let out = pid.update_at(0.0, 9.0);
    assert!((out - 0.002).abs() < 1e-12);
    assert_eq!(pid.state().last_timestamp, 9.0);
}

#[test]
fn combined_terms_match_hand_computation() {
    let gains = PidGains {
        kp: 0.4,
        ki: 0.01,
        kd: 0.1,
    };
    let mut pid = PidController::with_clock(gains, 160.0, FixedStepClock::new(0.0, 0.1));
    // e1 = 40, integral = 4, derivative = 400
    let out1 = pid.update(120.0);
    assert!((out1 - (16.0 + 0.04 + 40.0)).abs() < 1e-9, "out1={out1}");
    // e2 = 10, integral = 5, derivative = -300
    let out2 = pid.update(150.0);
    assert!((out2 - (4.0 + 0.05 - 30.0)).abs() < 1e-9, "out2={out2}");
}

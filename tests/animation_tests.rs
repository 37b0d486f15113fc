use std::time::Duration;

use savings_lib::animation::{drive, ease_out_cubic, NoFrames, Phase, SimulatedFrames};
use savings_lib::{
    default_themes, CalculatorSession, ManualClock, ValueAnimator, TRANSITION_DURATION,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// At zero elapsed the previous value shows; from the full duration on, the target.
#[test]
fn test_transition_endpoints() {
    let mut counter = ValueAnimator::new(31_380.0);
    counter.set_target(93_960.0, ms(2_000));

    assert_eq!(counter.value_at(ms(2_000)), 31_380.0);
    assert_eq!(counter.value_at(ms(2_500)), 93_960.0);
    assert_eq!(counter.value_at(ms(2_501)), 93_960.0);
    assert_eq!(counter.phase(), Phase::Animating);

    let frame = counter.tick(ms(2_500));
    assert!(frame.done);
    assert_eq!(counter.phase(), Phase::Idle);
}

/// Intermediate samples follow `prev + (target - prev) * ease_out_cubic(p)`.
#[test]
fn test_transition_curve() {
    let mut counter = ValueAnimator::new(100.0);
    counter.set_target(200.0, Duration::ZERO);
    for step in 1..10u64 {
        let at = ms(step * 50);
        let p = (step * 50) as f64 / 500.0;
        let expected = 100.0 + 100.0 * ease_out_cubic(p);
        assert!(
            (counter.value_at(at) - expected).abs() < 1e-9,
            "at {:?}: expected {}, got {}",
            at,
            expected,
            counter.value_at(at)
        );
    }
}

/// Retargeting mid-flight restarts from the value on screen, not the old start.
#[test]
fn test_retarget_mid_flight_does_not_snap() {
    let mut counter = ValueAnimator::new(0.0);
    counter.set_target(100.0, Duration::ZERO);
    let on_screen = counter.value_at(ms(100));
    assert!(on_screen > 0.0 && on_screen < 100.0);

    counter.set_target(50.0, ms(100));
    assert_eq!(counter.value_at(ms(100)), on_screen);
    // The fresh start time means the new transition also takes the full duration.
    assert!(counter.value_at(ms(100) + TRANSITION_DURATION - ms(1)) != 50.0);
    assert_eq!(counter.value_at(ms(100) + TRANSITION_DURATION), 50.0);
}

/// Independent animators do not influence each other.
#[test]
fn test_counters_are_independent() {
    let mut a = ValueAnimator::new(0.0);
    let mut b = ValueAnimator::new(0.0);
    a.set_target(10.0, Duration::ZERO);
    b.set_target(10.0, ms(250));
    assert_eq!(a.value_at(ms(500)), 10.0);
    assert!(b.value_at(ms(500)) < 10.0);
}

/// Headless driving at 60 Hz emits roughly 30 frames over 500 ms.
#[test]
fn test_drive_simulated_frames() {
    let mut counter = ValueAnimator::new(0.0);
    counter.set_target(7.0, Duration::ZERO);
    let mut values = Vec::new();
    let count = drive(
        &mut counter,
        SimulatedFrames::at_default_rate(Duration::ZERO),
        |v| values.push(v),
    );
    assert!((29..=31).contains(&count), "unexpected frame count {}", count);
    assert_eq!(values.last(), Some(&7.0));
    assert!(values.windows(2).all(|w| w[1] >= w[0]));
}

/// Without frame callbacks the counter jumps to the target.
#[test]
fn test_drive_falls_back_to_jump() {
    let mut counter = ValueAnimator::new(0.0);
    counter.set_target(7.0, Duration::ZERO);
    let mut values = Vec::new();
    drive(&mut counter, NoFrames, |v| values.push(v));
    assert_eq!(values, vec![7.0]);
    assert_eq!(counter.phase(), Phase::Idle);
}

/// A session animates only the counters whose value changed.
#[test]
fn test_session_retargets_changed_counters() {
    let clock = ManualClock::new();
    let mut session =
        CalculatorSession::new(default_themes::margin_explorer(), &clock).expect("valid theme");

    session.set_margin(5.0);
    let first = session.snapshot();
    assert!(!first.settled);
    // Saved days do not depend on the margin, so that counter is already final.
    assert_eq!(first.saved_days, "7");
    assert_eq!(first.compensation_factor, "20x");

    clock.advance(ms(250));
    let mid = session.snapshot();
    assert!(!mid.settled);

    clock.advance(ms(250));
    let last = session.snapshot();
    assert!(last.settled);
    assert_eq!(last.required_revenue, "6\u{a0}Mio.\u{a0}€");
}

/// Text entry of an empty or zero field falls back to the lower bound.
#[test]
fn test_session_text_entry_fallback() {
    let clock = ManualClock::new();
    let mut session =
        CalculatorSession::new(default_themes::standard(), &clock).expect("valid theme");

    session.enter_cases_text("");
    assert_eq!(session.inputs().cases_per_year, 10);

    session.enter_claim_text("12.500");
    assert_eq!(session.inputs().avg_claim_amount, 12_500.0);

    session.enter_claim_text("kein Betrag");
    assert_eq!(session.inputs().avg_claim_amount, 100.0);
}

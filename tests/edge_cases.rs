//! Edge case and boundary condition tests for the motor controller

use rs_hbridge::{
    hal::{MockBridge, MockButton, MockLink},
    CommandOutcome, ControlLoop, InputMux, MotorCommand, MotorController, MotorDirection,
    MotorState, RampProfile,
};

fn controller_with(profile: RampProfile) -> MotorController<MockBridge> {
    MotorController::new(MockBridge::new()).with_profile(profile)
}

fn control_loop() -> ControlLoop<MockBridge, MockLink, MockButton, MockButton> {
    let controller = controller_with(RampProfile::new(1000, 255));
    let inputs = InputMux::new(MockLink::new(), MockButton::new(), MockButton::new());
    ControlLoop::new(controller, inputs)
}

// ============================================================================
// Ramp Boundary Tests
// ============================================================================

#[test]
fn zero_duration_ramp_is_instant() {
    let mut c = controller_with(RampProfile::new(0, 255));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    c.tick(0).unwrap();
    assert_eq!(c.state(), MotorState::Running);
    assert_eq!(c.duty(), 255);
}

#[test]
fn one_ms_before_completion_is_still_ramping() {
    let mut c = controller_with(RampProfile::new(1000, 255));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    c.tick(999).unwrap();
    assert_eq!(c.state(), MotorState::Ramping);
    assert_eq!(c.duty(), 254);

    c.tick(1000).unwrap();
    assert_eq!(c.state(), MotorState::Running);
    assert_eq!(c.duty(), 255);
}

#[test]
fn max_duty_written_exactly_once() {
    let mut c = controller_with(RampProfile::new(1000, 255));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    c.tick(1000).unwrap();
    c.tick(1500).unwrap();
    c.tick(9999).unwrap();

    let max_writes = c
        .bridge()
        .duty_writes
        .iter()
        .filter(|&&d| d == 255)
        .count();
    assert_eq!(max_writes, 1);
}

#[test]
fn overshooting_the_ramp_clamps() {
    // A long poll gap can jump straight past the ramp end.
    let mut c = controller_with(RampProfile::new(1000, 255));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    c.tick(60_000).unwrap();
    assert_eq!(c.duty(), 255);
    assert_eq!(c.state(), MotorState::Running);
}

#[test]
fn zero_max_duty_ramp_never_energizes() {
    let mut c = controller_with(RampProfile::new(1000, 0));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    c.tick(500).unwrap();
    c.tick(1000).unwrap();
    assert_eq!(c.state(), MotorState::Running);
    assert!(c.bridge().duty_writes.iter().all(|&d| d == 0));
}

#[test]
fn ten_bit_duty_scale() {
    let mut c = controller_with(RampProfile::new(2000, 1023));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    c.tick(1000).unwrap();
    assert_eq!(c.duty(), 511);

    c.tick(2000).unwrap();
    assert_eq!(c.duty(), 1023);
}

#[test]
fn stale_timestamp_does_not_underflow() {
    let mut c = controller_with(RampProfile::new(1000, 255));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 5000)
        .unwrap();

    // now < ramp start: elapsed saturates to zero
    c.tick(4000).unwrap();
    assert_eq!(c.duty(), 0);
    assert_eq!(c.state(), MotorState::Ramping);

    c.tick(5500).unwrap();
    assert_eq!(c.duty(), 127);
}

// ============================================================================
// Command/State Grid
// ============================================================================

#[test]
fn every_ignored_pair_leaves_no_writes() {
    // (command, state) pairs that must be absorbed without actuator traffic.
    let mut c = controller_with(RampProfile::new(1000, 255));

    // Stop while Stopped
    c.apply(MotorCommand::Stop, 0).unwrap();
    assert_eq!(c.bridge().write_count, 0);

    // Start while Ramping
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();
    c.bridge_mut().clear_history();
    let outcome = c
        .apply(MotorCommand::Start(MotorDirection::Forward), 10)
        .unwrap();
    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(c.bridge().write_count, 0);

    // Start while Running
    c.tick(1000).unwrap();
    c.bridge_mut().clear_history();
    let outcome = c
        .apply(MotorCommand::Start(MotorDirection::Backward), 1100)
        .unwrap();
    assert_eq!(outcome, CommandOutcome::Ignored);
    assert_eq!(c.bridge().write_count, 0);
}

#[test]
fn reversal_requires_intervening_stop() {
    let mut c = controller_with(RampProfile::new(1000, 255));
    c.apply(MotorCommand::Start(MotorDirection::Forward), 0)
        .unwrap();

    // Direct reversal is absorbed at every stage of the run
    for t in [10, 500, 1000, 2000] {
        c.tick(t).unwrap();
        let outcome = c
            .apply(MotorCommand::Start(MotorDirection::Backward), t)
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Ignored);
    }

    // After a stop the reversal goes through
    c.apply(MotorCommand::Stop, 2100).unwrap();
    let outcome = c
        .apply(MotorCommand::Start(MotorDirection::Backward), 2200)
        .unwrap();
    assert_eq!(outcome, CommandOutcome::Started(MotorDirection::Backward));
}

#[test]
fn repeated_starts_and_stops_stay_consistent() {
    let mut c = controller_with(RampProfile::new(100, 255));

    for i in 0..10u64 {
        let t0 = i * 1000;
        c.apply(MotorCommand::Start(MotorDirection::Forward), t0)
            .unwrap();
        c.tick(t0 + 100).unwrap();
        assert_eq!(c.state(), MotorState::Running);

        c.apply(MotorCommand::Stop, t0 + 200).unwrap();
        assert_eq!(c.state(), MotorState::Stopped);
        assert_eq!(c.duty(), 0);
    }
}

// ============================================================================
// Input Edge Cases
// ============================================================================

#[test]
fn held_button_emits_one_start_across_many_cycles() {
    let mut ctl = control_loop();
    ctl.inputs_mut().forward_mut().input_mut().press();

    let mut events = 0;
    for t in 0..50u64 {
        events += ctl.poll_once(t * 5).unwrap().len();
    }
    assert_eq!(events, 1);
}

#[test]
fn both_buttons_pressed_same_cycle_forward_wins() {
    // Forward is polled first, so its press starts the motor; the backward
    // press in the same cycle is absorbed.
    let mut ctl = control_loop();
    ctl.inputs_mut().forward_mut().input_mut().press();
    ctl.inputs_mut().backward_mut().input_mut().press();

    let report = ctl.poll_once(0).unwrap();
    assert_eq!(report.len(), 2);
    assert_eq!(
        report[0].outcome,
        CommandOutcome::Started(MotorDirection::Forward)
    );
    assert_eq!(report[1].outcome, CommandOutcome::Ignored);
    assert_eq!(
        ctl.controller().direction(),
        Some(MotorDirection::Forward)
    );
}

#[test]
fn full_cycle_can_carry_three_events() {
    let mut ctl = control_loop();
    ctl.inputs_mut().link_mut().queue_str("s");
    ctl.inputs_mut().forward_mut().input_mut().press();
    ctl.inputs_mut().backward_mut().input_mut().press();

    let report = ctl.poll_once(0).unwrap();
    assert_eq!(report.len(), 3);
}

#[test]
fn noisy_button_without_debounce_stops_the_motor() {
    // Raw edge forwarding: a bounce on release-then-press still lands a
    // Stop first, leaving the motor stopped until the re-press cycle.
    let mut ctl = control_loop();
    ctl.inputs_mut().forward_mut().input_mut().press();
    ctl.poll_once(0).unwrap();

    ctl.inputs_mut().forward_mut().input_mut().release();
    ctl.poll_once(5).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Stopped);

    ctl.inputs_mut().forward_mut().input_mut().press();
    ctl.poll_once(10).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Ramping);
}

#[test]
fn debounce_window_filters_the_same_noise() {
    let controller = controller_with(RampProfile::new(1000, 255));
    let inputs = InputMux::new(MockLink::new(), MockButton::new(), MockButton::new())
        .with_debounce_ms(20);
    let mut ctl = ControlLoop::new(controller, inputs);

    ctl.inputs_mut().forward_mut().input_mut().press();
    ctl.poll_once(0).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Ramping);

    // 5ms bounce is inside the window: the spurious release never fires
    ctl.inputs_mut().forward_mut().input_mut().release();
    ctl.poll_once(5).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Ramping);

    ctl.inputs_mut().forward_mut().input_mut().press();
    ctl.poll_once(10).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Ramping);

    // A real release after the window still stops
    ctl.inputs_mut().forward_mut().input_mut().release();
    ctl.poll_once(100).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Stopped);
}

#[test]
fn link_bytes_drain_one_per_cycle_in_order() {
    let mut ctl = control_loop();
    ctl.inputs_mut().link_mut().queue_str("fsb");

    ctl.poll_once(0).unwrap();
    assert_eq!(
        ctl.controller().direction(),
        Some(MotorDirection::Forward)
    );

    ctl.poll_once(10).unwrap();
    assert_eq!(ctl.controller().state(), MotorState::Stopped);

    ctl.poll_once(20).unwrap();
    assert_eq!(
        ctl.controller().direction(),
        Some(MotorDirection::Backward)
    );
}

#[test]
fn snapshot_progress_tracks_the_ramp() {
    let mut ctl = control_loop();
    ctl.inputs_mut().link_mut().queue_str("f");
    ctl.poll_once(0).unwrap();

    ctl.poll_once(400).unwrap();
    let snap = ctl.controller().snapshot(400);
    let ramp = snap.ramp.expect("ramping");
    assert_eq!(ramp.elapsed_ms, 400);
    assert_eq!(ramp.total_ms, 1000);
    assert_eq!(ramp.duty, 102); // floor(400 * 255 / 1000)

    ctl.poll_once(1000).unwrap();
    assert!(ctl.controller().snapshot(1000).ramp.is_none());
}

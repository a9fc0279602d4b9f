//! Desktop simulation of the controller against the mock HAL.
//!
//! Runs a scripted session (wireless forward, a mid-ramp backward attempt,
//! a button takeover, a stop) and prints the duty trace, so the ramp
//! behavior can be eyeballed without flashing hardware.
//!
//! ```bash
//! cargo run --bin desktop_sim
//! ```

use rs_hbridge::hal::{MockBridge, MockButton, MockClock, MockLink};
use rs_hbridge::traits::Clock;
use rs_hbridge::{CommandOutcome, Config, ControlLoop, InputMux, MotorController};

/// Simulated poll interval (milliseconds per cycle).
const STEP_MS: u64 = 50;

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    let controller =
        MotorController::new(MockBridge::new()).with_profile(config.motor.ramp_profile());
    let inputs = InputMux::new(MockLink::new(), MockButton::new(), MockButton::new());
    let mut ctl = ControlLoop::new(controller, inputs);
    let mut clock = MockClock::new();

    println!(
        "ramp: {} ms to duty {}, polling every {} ms",
        config.motor.ramp_duration_ms, config.motor.max_duty, STEP_MS
    );
    println!();

    for cycle in 0..40u64 {
        // The script: a wireless start, a doomed mid-ramp reversal, then a
        // button press whose release stops the motor.
        match cycle {
            2 => ctl.inputs_mut().link_mut().queue_str("f"),
            10 => ctl.inputs_mut().link_mut().queue_str("b"),
            26 => ctl.inputs_mut().forward_mut().input_mut().press(),
            30 => ctl.inputs_mut().forward_mut().input_mut().release(),
            _ => {}
        }

        let now_ms = clock.now_ms();
        let report = ctl
            .poll_once(now_ms)
            .map_err(|()| anyhow::anyhow!("actuator write failed"))?;

        for applied in report {
            let verdict = match applied.outcome {
                CommandOutcome::Started(dir) => format!("started {}", dir.as_str()),
                CommandOutcome::Stopped => "stopped".to_string(),
                CommandOutcome::Ignored => "ignored".to_string(),
            };
            println!("t={now_ms:>5} ms  {:?} {:?} -> {verdict}", applied.source, applied.command);
        }

        let snap = ctl.controller().snapshot(now_ms);
        let bar_len = (snap.duty as usize * 40) / config.motor.max_duty.max(1) as usize;
        println!(
            "t={now_ms:>5} ms  {:>7?}  duty {:>3}  |{:<40}|",
            snap.state,
            snap.duty,
            "#".repeat(bar_len)
        );

        clock.advance(STEP_MS);
    }

    Ok(())
}

//! The polling scheduler: one struct, one non-blocking cycle.
//!
//! [`ControlLoop`] ties the [`InputMux`](crate::InputMux) to the
//! [`MotorController`](crate::MotorController). Each call to
//! [`poll_once`](ControlLoop::poll_once) performs exactly one cycle:
//!
//! 1. drain the input sources (link byte, then button edges)
//! 2. apply the discovered events, in discovery order
//! 3. advance the ramp with a single tick
//!
//! The loop never reads a clock: the caller passes `now_ms` in, which keeps
//! cycle behavior fully deterministic under test. Binaries wrap this in a
//! `loop { poll_once(clock.now_ms()); sleep(interval) }`.
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::{ControlLoop, InputMux, MotorController, MotorState};
//! use rs_hbridge::hal::{MockBridge, MockButton, MockLink};
//!
//! let controller = MotorController::new(MockBridge::new());
//! let inputs = InputMux::new(MockLink::new(), MockButton::new(), MockButton::new());
//! let mut ctl = ControlLoop::new(controller, inputs);
//!
//! ctl.inputs_mut().link_mut().queue_str("f");
//! ctl.poll_once(0).unwrap();
//! assert_eq!(ctl.controller().state(), MotorState::Ramping);
//! ```

use heapless::Vec;

use crate::command::{CommandSource, MotorCommand};
use crate::input::{InputMux, MAX_EVENTS_PER_CYCLE};
use crate::motor::{CommandOutcome, MotorController};
use crate::traits::{ButtonInput, CommandLink, HBridge};

/// An event applied during a cycle, with its outcome.
///
/// Returned by [`ControlLoop::poll_once`] so callers can report transitions
/// (the hardware binary prints these; tests assert on them).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedCommand {
    /// The command that was applied.
    pub command: MotorCommand,
    /// Source that produced it.
    pub source: CommandSource,
    /// What the controller did with it.
    pub outcome: CommandOutcome,
}

/// The per-cycle report: every event applied this cycle, in order.
pub type CycleReport = Vec<AppliedCommand, MAX_EVENTS_PER_CYCLE>;

/// Single-threaded cooperative polling loop over one motor.
///
/// All collaborator calls are non-blocking, so one cycle completes in
/// bounded, negligible time; ramp smoothness and input latency both come
/// from the caller invoking [`poll_once`](Self::poll_once) at a short fixed
/// interval (a few milliseconds, well under the ramp duration).
pub struct ControlLoop<B, L, F, R>
where
    B: HBridge,
    L: CommandLink,
    F: ButtonInput,
    R: ButtonInput,
{
    controller: MotorController<B>,
    inputs: InputMux<L, F, R>,
}

impl<B, L, F, R> ControlLoop<B, L, F, R>
where
    B: HBridge,
    L: CommandLink,
    F: ButtonInput,
    R: ButtonInput,
{
    /// Assemble a loop from its two halves.
    pub fn new(controller: MotorController<B>, inputs: InputMux<L, F, R>) -> Self {
        Self { controller, inputs }
    }

    /// Run one poll cycle at the given time.
    ///
    /// Returns the events applied this cycle. Errors only on a failed
    /// actuator write, in which case the cycle stops at the failing write.
    pub fn poll_once(&mut self, now_ms: u64) -> Result<CycleReport, B::Error> {
        let mut report = CycleReport::new();

        for event in self.inputs.poll(now_ms) {
            let outcome = self.controller.apply(event.command, now_ms)?;
            let _ = report.push(AppliedCommand {
                command: event.command,
                source: event.source,
                outcome,
            });
        }

        self.controller.tick(now_ms)?;
        Ok(report)
    }

    /// Borrow the motor controller.
    pub fn controller(&self) -> &MotorController<B> {
        &self.controller
    }

    /// Mutably borrow the motor controller.
    pub fn controller_mut(&mut self) -> &mut MotorController<B> {
        &mut self.controller
    }

    /// Borrow the input multiplexer.
    pub fn inputs(&self) -> &InputMux<L, F, R> {
        &self.inputs
    }

    /// Mutably borrow the input multiplexer.
    pub fn inputs_mut(&mut self) -> &mut InputMux<L, F, R> {
        &mut self.inputs
    }
}

//! Main motor controller: the start/ramp/run state machine.
//!
//! This module provides [`MotorController`], the component that owns the
//! motor state, the per-run direction, and the ramp timing, and that issues
//! every actuator write.
//!
//! # Overview
//!
//! The controller:
//! - Accepts normalized [`MotorCommand`] events from any source
//! - Ramps the duty cycle up linearly after each start
//! - Holds full duty once the ramp completes
//! - Coasts and zeroes the duty on stop
//!
//! # State Machine
//!
//! ```text
//!             Start(dir)              ramp elapsed
//!  Stopped ───────────────▶ Ramping ───────────────▶ Running
//!     ▲                        │                        │
//!     └────────── Stop ◀───────┴────────── Stop ◀───────┘
//! ```
//!
//! A start while not stopped and a stop while stopped are both absorbed as
//! no-ops ([`CommandOutcome::Ignored`]) with zero actuator writes. Direction
//! reversal requires an intervening stop; this keeps the H-bridge from ever
//! seeing opposite-direction drive back to back.
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::{MotorCommand, MotorController, MotorDirection, MotorState, RampProfile};
//! use rs_hbridge::hal::MockBridge;
//!
//! let mut controller = MotorController::new(MockBridge::new())
//!     .with_profile(RampProfile::new(1000, 255));
//!
//! controller
//!     .apply(MotorCommand::Start(MotorDirection::Forward), 0)
//!     .unwrap();
//!
//! // Main loop - call tick() with the current time every iteration
//! controller.tick(500).unwrap();
//! assert_eq!(controller.duty(), 127);
//! assert_eq!(controller.state(), MotorState::Ramping);
//!
//! controller.tick(1000).unwrap();
//! assert_eq!(controller.duty(), 255);
//! assert_eq!(controller.state(), MotorState::Running);
//! ```

use crate::command::MotorCommand;
use crate::ramp::RampProfile;
use crate::traits::{HBridge, MotorDirection};

/// Drive state of the motor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MotorState {
    /// Coasting with zero duty. The only state that accepts a start.
    Stopped,
    /// Duty cycle climbing toward max along the ramp profile.
    Ramping,
    /// Holding max duty.
    Running,
}

/// What happened when a command was applied.
///
/// Returned by [`MotorController::apply`]. There is no error variant:
/// commands that don't fit the current state are absorbed, not rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CommandOutcome {
    /// The motor left `Stopped` and began ramping in the given direction.
    Started(MotorDirection),
    /// The motor was coasted and the duty cycle zeroed.
    Stopped,
    /// The command did not fit the current state; nothing was written.
    Ignored,
}

/// Progress of an in-flight ramp.
///
/// Part of [`MotorSnapshot`]; present only while the state is
/// [`Ramping`](MotorState::Ramping).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RampProgress {
    /// Time since the ramp started (milliseconds).
    pub elapsed_ms: u64,
    /// Total ramp duration (milliseconds).
    pub total_ms: u32,
    /// Duty cycle at the last tick.
    pub duty: u32,
}

/// Full state snapshot for display or diagnostics.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorSnapshot {
    /// Current drive state.
    pub state: MotorState,
    /// Direction of the current run; `None` while stopped.
    pub direction: Option<MotorDirection>,
    /// Duty cycle as of the last actuator write.
    pub duty: u32,
    /// Ramp progress, while ramping.
    pub ramp: Option<RampProgress>,
}

/// The motor state machine.
///
/// Owns the H-bridge: no other component writes to the actuator. Consumes
/// [`MotorCommand`] events via [`apply`](Self::apply) and advances the ramp
/// via [`tick`](Self::tick); both take an explicit `now_ms` so behavior is
/// deterministic under test.
///
/// # Type Parameter
///
/// - `B`: The H-bridge implementation ([`HBridge`] trait)
///
/// # Timing Contract
///
/// `tick` must be called at sub-ramp-duration granularity (every polling
/// loop iteration in practice). It is a no-op outside `Ramping`, so calling
/// it more often than needed costs one state check.
pub struct MotorController<B: HBridge> {
    bridge: B,
    ramp: RampProfile,
    state: MotorState,
    direction: Option<MotorDirection>,
    ramp_started_ms: u64,
    duty: u32,
}

impl<B: HBridge> MotorController<B> {
    /// Create a controller with the default ramp profile (1 s to duty 255).
    pub fn new(bridge: B) -> Self {
        Self {
            bridge,
            ramp: RampProfile::default(),
            state: MotorState::Stopped,
            direction: None,
            ramp_started_ms: 0,
            duty: 0,
        }
    }

    /// Replace the ramp profile.
    pub fn with_profile(mut self, ramp: RampProfile) -> Self {
        self.ramp = ramp;
        self
    }

    /// Apply a command.
    ///
    /// Total over every command/state pair: a start while moving or a stop
    /// while stopped returns [`CommandOutcome::Ignored`] without touching
    /// the actuator. The only error path is a failed actuator write.
    pub fn apply(&mut self, cmd: MotorCommand, now_ms: u64) -> Result<CommandOutcome, B::Error> {
        match cmd {
            MotorCommand::Start(dir) => {
                if self.state != MotorState::Stopped {
                    return Ok(CommandOutcome::Ignored);
                }

                self.bridge.set_direction(dir)?;
                self.bridge.set_duty(0)?;
                self.state = MotorState::Ramping;
                self.direction = Some(dir);
                self.ramp_started_ms = now_ms;
                self.duty = 0;
                Ok(CommandOutcome::Started(dir))
            }

            MotorCommand::Stop => {
                if self.state == MotorState::Stopped {
                    return Ok(CommandOutcome::Ignored);
                }

                self.bridge.coast()?;
                self.bridge.set_duty(0)?;
                self.state = MotorState::Stopped;
                self.direction = None;
                self.duty = 0;
                Ok(CommandOutcome::Stopped)
            }
        }
    }

    /// Advance the ramp - call every tick.
    ///
    /// While `Ramping`, writes the interpolated duty; when the ramp
    /// completes, writes `max_duty` and moves to `Running`, after which
    /// further ticks are no-ops until the next start.
    pub fn tick(&mut self, now_ms: u64) -> Result<(), B::Error> {
        if self.state != MotorState::Ramping {
            return Ok(());
        }

        let elapsed = now_ms.saturating_sub(self.ramp_started_ms);
        let (duty, complete) = self.ramp.duty_at(elapsed);

        self.bridge.set_duty(duty)?;
        self.duty = duty;

        if complete {
            self.state = MotorState::Running;
        }

        Ok(())
    }

    /// Current drive state.
    pub fn state(&self) -> MotorState {
        self.state
    }

    /// Direction of the current run; `None` while stopped.
    pub fn direction(&self) -> Option<MotorDirection> {
        self.direction
    }

    /// Duty cycle as of the last actuator write.
    pub fn duty(&self) -> u32 {
        self.duty
    }

    /// Returns true unless the motor is stopped.
    pub fn is_moving(&self) -> bool {
        self.state != MotorState::Stopped
    }

    /// The active ramp profile.
    pub fn profile(&self) -> RampProfile {
        self.ramp
    }

    /// Full state snapshot for display or diagnostics.
    pub fn snapshot(&self, now_ms: u64) -> MotorSnapshot {
        let ramp = (self.state == MotorState::Ramping).then(|| RampProgress {
            elapsed_ms: now_ms.saturating_sub(self.ramp_started_ms),
            total_ms: self.ramp.duration_ms,
            duty: self.duty,
        });

        MotorSnapshot {
            state: self.state,
            direction: self.direction,
            duty: self.duty,
            ramp,
        }
    }

    /// Borrow the underlying bridge.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Mutably borrow the underlying bridge.
    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }
}

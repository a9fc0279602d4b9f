//! # rs-hbridge
//!
//! A single DC motor H-bridge controller with physical push-buttons and a
//! wireless serial command stream.
//!
//! ## Features
//!
//! - **Hardware abstraction**: Traits for the H-bridge actuator, buttons,
//!   command link, and clock; everything runs on desktop mocks
//! - **Two command sources, one state machine**: button edges and link bytes
//!   normalize into the same three events and arbitrate by fixed poll order
//! - **Smooth start**: linear duty ramp from zero to full over a configurable
//!   duration; stop is immediate and idempotent
//! - **No direction reversal without a stop**: opposite-direction drive can
//!   never reach the H-bridge back to back
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware and input-source abstractions
//! - `command` - Normalized command events and the byte mapping
//! - `ramp` - Duty-cycle interpolation
//! - `motor` - The stopped/ramping/running state machine
//! - `input` - Button edge detection and input multiplexing
//! - `runner` - The non-blocking polling loop
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use rs_hbridge::{
//!     ControlLoop, InputMux, MotorController, MotorState, RampProfile,
//!     hal::{MockBridge, MockButton, MockLink},
//! };
//!
//! // Create the controller with a mock bridge
//! let controller = MotorController::new(MockBridge::new())
//!     .with_profile(RampProfile::new(1000, 255));
//! let inputs = InputMux::new(MockLink::new(), MockButton::new(), MockButton::new());
//! let mut ctl = ControlLoop::new(controller, inputs);
//!
//! // A wireless "forward" command arrives
//! ctl.inputs_mut().link_mut().queue_str("f");
//!
//! // Poll in your main loop with the current time
//! ctl.poll_once(0).unwrap();
//! ctl.poll_once(500).unwrap();
//!
//! assert_eq!(ctl.controller().state(), MotorState::Ramping);
//! assert_eq!(ctl.controller().duty(), 127);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Normalized command events and their byte representation.
pub mod command;
/// Shared configuration system for desktop and ESP32.
pub mod config;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Button edge detection and input multiplexing.
pub mod input;
/// Main motor controller: the start/ramp/run state machine.
pub mod motor;
/// Ramp profile: duty-cycle interpolation over elapsed time.
pub mod ramp;
/// The polling scheduler tying inputs to the controller.
pub mod runner;
/// Core traits for hardware abstraction and input sources.
pub mod traits;

// Re-exports for convenience
pub use command::{CommandSource, MotorCommand, SourcedCommand};
pub use config::{Config, LinkConfig, MotorConfig};
pub use input::{ButtonEdge, EventBatch, InputMux, MAX_EVENTS_PER_CYCLE};
pub use motor::{CommandOutcome, MotorController, MotorSnapshot, MotorState, RampProgress};
pub use ramp::RampProfile;
pub use runner::{AppliedCommand, ControlLoop, CycleReport};
pub use traits::{ButtonInput, Clock, CommandLink, HBridge, MotorDirection};

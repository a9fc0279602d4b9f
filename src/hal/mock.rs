//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for every hardware and input trait,
//! enabling development and testing on desktop without a motor on the bench.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockBridge`] | [`HBridge`] | Records every actuator write |
//! | [`MockButton`] | [`ButtonInput`] | Directly settable level |
//! | [`MockLink`] | [`CommandLink`] | FIFO byte queue |
//! | [`MockClock`] | [`Clock`] | Controllable time source |
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::{MotorCommand, MotorController, MotorDirection};
//! use rs_hbridge::hal::MockBridge;
//!
//! let mut controller = MotorController::new(MockBridge::new());
//! controller
//!     .apply(MotorCommand::Start(MotorDirection::Forward), 0)
//!     .unwrap();
//! controller.tick(500).unwrap();
//!
//! // Verify via the recorded writes
//! assert_eq!(controller.bridge().direction, Some(MotorDirection::Forward));
//! assert_eq!(controller.bridge().duty, 127);
//! ```
//!
//! [`HBridge`]: crate::traits::HBridge
//! [`ButtonInput`]: crate::traits::ButtonInput
//! [`CommandLink`]: crate::traits::CommandLink
//! [`Clock`]: crate::traits::Clock

use crate::traits::{ButtonInput, Clock, CommandLink, HBridge, MotorDirection};

extern crate alloc;
use alloc::vec::Vec;

// ============================================================================
// Actuator Mock
// ============================================================================

/// Mock H-bridge for testing.
///
/// Records all direction, duty, and coast writes for verification. Use the
/// public fields to inspect state after test operations; `duty_writes`
/// keeps the full sequence so ramp shapes can be asserted, and
/// `write_count` counts every actuator call for no-write assertions.
///
/// # Example
///
/// ```rust
/// use rs_hbridge::hal::MockBridge;
/// use rs_hbridge::traits::{HBridge, MotorDirection};
///
/// let mut bridge = MockBridge::new();
/// bridge.set_direction(MotorDirection::Forward).unwrap();
/// bridge.set_duty(128).unwrap();
/// bridge.coast().unwrap();
///
/// assert_eq!(bridge.direction, None); // cleared by coast
/// assert_eq!(bridge.duty_writes, vec![128]);
/// assert_eq!(bridge.coast_count, 1);
/// assert_eq!(bridge.write_count, 3);
/// ```
#[derive(Debug, Default)]
pub struct MockBridge {
    /// Direction currently latched on the pins; `None` after a coast.
    pub direction: Option<MotorDirection>,
    /// Duty cycle from the most recent `set_duty`.
    pub duty: u32,
    /// Every duty value written, in order.
    pub duty_writes: Vec<u32>,
    /// Number of `set_direction` calls.
    pub direction_writes: usize,
    /// Number of `coast` calls.
    pub coast_count: usize,
    /// Total actuator calls of any kind.
    pub write_count: usize,
}

impl MockBridge {
    /// Creates a new mock bridge in the coasting state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the recorded write history (state stays as-is).
    pub fn clear_history(&mut self) {
        self.duty_writes.clear();
        self.direction_writes = 0;
        self.coast_count = 0;
        self.write_count = 0;
    }
}

impl HBridge for MockBridge {
    type Error = ();

    fn set_direction(&mut self, dir: MotorDirection) -> Result<(), ()> {
        self.direction = Some(dir);
        self.direction_writes += 1;
        self.write_count += 1;
        Ok(())
    }

    fn set_duty(&mut self, duty: u32) -> Result<(), ()> {
        self.duty = duty;
        self.duty_writes.push(duty);
        self.write_count += 1;
        Ok(())
    }

    fn coast(&mut self) -> Result<(), ()> {
        self.direction = None;
        self.coast_count += 1;
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Input Mocks
// ============================================================================

/// Mock push-button for testing.
///
/// The level is set directly; edge detection happens in
/// [`ButtonEdge`](crate::ButtonEdge), not here.
///
/// # Example
///
/// ```rust
/// use rs_hbridge::hal::MockButton;
/// use rs_hbridge::traits::ButtonInput;
///
/// let mut button = MockButton::new();
/// assert!(!button.is_pressed());
///
/// button.press();
/// assert!(button.is_pressed());
///
/// button.release();
/// assert!(!button.is_pressed());
/// ```
#[derive(Debug, Default)]
pub struct MockButton {
    /// Current logical level (true = held down).
    pub pressed: bool,
}

impl MockButton {
    /// Creates a released mock button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the button down.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Let the button go.
    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Set the level directly.
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

impl ButtonInput for MockButton {
    fn is_pressed(&self) -> bool {
        self.pressed
    }
}

/// Mock command link for testing.
///
/// Bytes are queued and come back out FIFO, one per
/// [`read_byte`](CommandLink::read_byte) call, matching the
/// one-token-per-cycle behavior of a real transport buffer.
///
/// # Example
///
/// ```rust
/// use rs_hbridge::hal::MockLink;
/// use rs_hbridge::traits::CommandLink;
///
/// let mut link = MockLink::new();
/// link.queue_str("FS");
///
/// assert_eq!(link.read_byte(), Some(b'F'));
/// assert_eq!(link.read_byte(), Some(b'S'));
/// assert_eq!(link.read_byte(), None);
/// ```
#[derive(Debug, Default)]
pub struct MockLink {
    /// Pending bytes, oldest first.
    pub incoming: Vec<u8>,
}

impl MockLink {
    /// Creates an empty mock link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single byte.
    pub fn queue_byte(&mut self, byte: u8) {
        self.incoming.push(byte);
    }

    /// Queue every byte of a string.
    pub fn queue_str(&mut self, s: &str) {
        self.incoming.extend_from_slice(s.as_bytes());
    }
}

impl CommandLink for MockLink {
    fn read_byte(&mut self) -> Option<u8> {
        if self.incoming.is_empty() {
            None
        } else {
            Some(self.incoming.remove(0))
        }
    }
}

// ============================================================================
// Clock Mock
// ============================================================================

/// Mock clock for testing.
///
/// Provides a controllable time source for testing time-dependent behavior.
///
/// # Example
///
/// ```rust
/// use rs_hbridge::hal::MockClock;
/// use rs_hbridge::traits::Clock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.set(1000);
/// assert_eq!(clock.now_ms(), 1000);
///
/// clock.advance(500);
/// assert_eq!(clock.now_ms(), 1500);
/// ```
#[derive(Debug)]
pub struct MockClock {
    current_ms: u64,
}

impl MockClock {
    /// Creates a new mock clock starting at 0ms.
    pub fn new() -> Self {
        Self { current_ms: 0 }
    }

    /// Sets the current time in milliseconds.
    pub fn set(&mut self, ms: u64) {
        self.current_ms = ms;
    }

    /// Advances the clock by the given duration.
    pub fn advance(&mut self, ms: u64) {
        self.current_ms += ms;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u64 {
        self.current_ms
    }
}

// ============================================================================
// Tests
// ============================================================================

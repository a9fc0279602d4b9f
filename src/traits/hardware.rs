//! Hardware abstraction traits for H-bridge control and timing.
//!
//! This module defines the actuator-side interfaces that allow rs-hbridge to
//! work across different platforms (ESP32, desktop mocks, etc.).
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`HBridge`] | Direction pins + PWM duty cycle output |
//! | [`Clock`] | Time source for `no_std` environments |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. For ESP32 hardware, use the
//! implementations from `hal::esp32` (requires `esp32` feature).
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::traits::{HBridge, MotorDirection};
//! use rs_hbridge::hal::MockBridge;
//!
//! let mut bridge = MockBridge::new();
//! bridge.set_direction(MotorDirection::Forward).unwrap();
//! bridge.set_duty(128).unwrap();
//! ```

/// Direction of motor rotation.
///
/// Controls the polarity of the H-bridge output. There is deliberately no
/// "stopped" variant: stopped-ness is a state of the
/// [`MotorController`](crate::MotorController), and direction only exists
/// while the motor is being driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MotorDirection {
    /// Positive polarity (IN1 high, IN2 low).
    Forward,
    /// Negative polarity (IN1 low, IN2 high).
    Backward,
}

impl MotorDirection {
    /// Returns the direction as a lowercase string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_hbridge::MotorDirection;
    ///
    /// assert_eq!(MotorDirection::Forward.as_str(), "forward");
    /// assert_eq!(MotorDirection::Backward.as_str(), "backward");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MotorDirection::Forward => "forward",
            MotorDirection::Backward => "backward",
        }
    }

    /// Parse a direction from text input.
    ///
    /// Supports full names (`"forward"`, `"backward"`) and single-letter
    /// abbreviations (`"f"`, `"b"`). Input is trimmed and case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_hbridge::MotorDirection;
    ///
    /// assert_eq!(MotorDirection::from_text("forward"), Some(MotorDirection::Forward));
    /// assert_eq!(MotorDirection::from_text("  B  "), Some(MotorDirection::Backward));
    /// assert_eq!(MotorDirection::from_text("sideways"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("forward") || trimmed.eq_ignore_ascii_case("f") {
            Some(MotorDirection::Forward)
        } else if trimmed.eq_ignore_ascii_case("backward") || trimmed.eq_ignore_ascii_case("b") {
            Some(MotorDirection::Backward)
        } else {
            None
        }
    }
}

/// H-bridge actuator trait - abstracts the direction pins and PWM output.
///
/// Implement this trait for your motor driver hardware. The bridge is
/// write-only and fire-and-forget: there is no feedback path, and all calls
/// must be non-blocking so the polling loop stays responsive.
///
/// # Implementation Notes
///
/// - `set_duty` receives values on the configured duty scale (0 to
///   `max_duty`, 255 for 8-bit PWM); clamp anything above it
/// - `coast` de-energizes both direction outputs without braking
/// - Direction changes only ever arrive while duty is zero (the controller
///   guarantees an intervening stop), so no shoot-through guard is needed here
///
/// # Example Implementation
///
/// ```rust,ignore
/// use rs_hbridge::traits::{HBridge, MotorDirection};
///
/// struct MyBridge { /* pin handles */ }
///
/// impl HBridge for MyBridge {
///     type Error = ();
///
///     fn set_direction(&mut self, dir: MotorDirection) -> Result<(), ()> {
///         // Write IN1/IN2...
///         Ok(())
///     }
///
///     fn set_duty(&mut self, duty: u32) -> Result<(), ()> {
///         // Write PWM compare register...
///         Ok(())
///     }
///
///     fn coast(&mut self) -> Result<(), ()> {
///         // Both direction outputs low...
///         Ok(())
///     }
/// }
/// ```
pub trait HBridge {
    /// Error type for actuator writes.
    type Error;

    /// Set the H-bridge polarity for the given direction.
    fn set_direction(&mut self, dir: MotorDirection) -> Result<(), Self::Error>;

    /// Set the PWM duty cycle on the enable line.
    ///
    /// `duty` is on the configured scale (0 to max duty). Values above the
    /// scale should be clamped.
    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error>;

    /// De-energize both direction outputs (freewheel, no braking).
    fn coast(&mut self) -> Result<(), Self::Error>;

    /// Convenience method to fully release the motor.
    ///
    /// Coasts and zeroes the duty cycle.
    fn halt(&mut self) -> Result<(), Self::Error> {
        self.coast()?;
        self.set_duty(0)
    }
}

/// Time source trait for `no_std` compatibility.
///
/// Provides monotonic time in milliseconds for ramp timing. On desktop,
/// this can wrap `std::time::Instant`. On embedded, use a hardware timer.
///
/// The controller itself never reads a clock: timestamps are passed into
/// [`tick`](crate::MotorController::tick) explicitly so ramp behavior is
/// deterministic under test.
///
/// # Example
///
/// ```rust
/// use rs_hbridge::traits::Clock;
/// use rs_hbridge::hal::MockClock;
///
/// let mut clock = MockClock::new();
/// assert_eq!(clock.now_ms(), 0);
///
/// clock.advance(100);
/// assert_eq!(clock.now_ms(), 100);
/// ```
pub trait Clock {
    /// Returns current time in milliseconds since an arbitrary epoch.
    ///
    /// Must be monotonically increasing.
    fn now_ms(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_as_str() {
        assert_eq!(MotorDirection::Forward.as_str(), "forward");
        assert_eq!(MotorDirection::Backward.as_str(), "backward");
    }

    #[test]
    fn direction_from_text_full_names() {
        assert_eq!(
            MotorDirection::from_text("forward"),
            Some(MotorDirection::Forward)
        );
        assert_eq!(
            MotorDirection::from_text("backward"),
            Some(MotorDirection::Backward)
        );
    }

    #[test]
    fn direction_from_text_abbreviations() {
        assert_eq!(MotorDirection::from_text("f"), Some(MotorDirection::Forward));
        assert_eq!(
            MotorDirection::from_text("B"),
            Some(MotorDirection::Backward)
        );
    }

    #[test]
    fn direction_from_text_case_and_whitespace() {
        assert_eq!(
            MotorDirection::from_text("  FORWARD  "),
            Some(MotorDirection::Forward)
        );
        assert_eq!(
            MotorDirection::from_text("\tBackward\n"),
            Some(MotorDirection::Backward)
        );
    }

    #[test]
    fn direction_from_text_invalid() {
        assert_eq!(MotorDirection::from_text(""), None);
        assert_eq!(MotorDirection::from_text("forwards"), None);
        assert_eq!(MotorDirection::from_text("stop"), None);
    }

    struct TestBridge {
        duty: u32,
        coasted: bool,
    }

    impl HBridge for TestBridge {
        type Error = ();

        fn set_direction(&mut self, _dir: MotorDirection) -> Result<(), ()> {
            Ok(())
        }

        fn set_duty(&mut self, duty: u32) -> Result<(), ()> {
            self.duty = duty;
            Ok(())
        }

        fn coast(&mut self) -> Result<(), ()> {
            self.coasted = true;
            Ok(())
        }
    }

    #[test]
    fn hbridge_halt_default_impl() {
        let mut bridge = TestBridge {
            duty: 200,
            coasted: false,
        };

        bridge.halt().unwrap();

        assert!(bridge.coasted);
        assert_eq!(bridge.duty, 0);
    }
}

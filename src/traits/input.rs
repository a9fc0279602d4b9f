//! Input-source traits for push-buttons and the wireless command link.
//!
//! Both input sources are polled: the control loop asks each source for its
//! current level (buttons) or at most one pending byte (link) every cycle,
//! and the [`InputMux`](crate::InputMux) turns the raw readings into
//! normalized [`MotorCommand`](crate::MotorCommand) events.
//!
//! All reads must be non-blocking; a source with nothing to report returns
//! its idle value immediately.

/// A polled momentary push-button.
///
/// One instance per logical button. The controller assumes active-high
/// wiring with a pull-down idle level, but implementations are free to
/// invert internally as long as `is_pressed` reports the logical state.
///
/// Edge detection is not this trait's job: implementations report the raw
/// level and [`ButtonEdge`](crate::ButtonEdge) converts levels to events.
pub trait ButtonInput {
    /// Returns true if the button is currently held down.
    fn is_pressed(&self) -> bool;
}

/// A byte-oriented command stream from the wireless transport.
///
/// The transport itself (Bluetooth SPP, a UART radio module, a TCP bridge
/// on desktop) is outside this crate; whatever it is, it surfaces here as
/// single bytes. Framing, acknowledgement, and authentication do not exist
/// at this layer.
///
/// # Implementation Notes
///
/// - `read_byte` must not block; return `None` when no byte is pending
/// - One byte per call: the control loop consumes at most one command
///   token per poll cycle, so buffered bytes drain across cycles
pub trait CommandLink {
    /// Returns the next pending byte, if any.
    fn read_byte(&mut self) -> Option<u8>;
}

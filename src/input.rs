//! Command normalizer: button edge detection and input multiplexing.
//!
//! Two independent sources feed the motor controller:
//!
//! - the wireless link, which yields at most one command byte per poll cycle
//! - two momentary push-buttons, whose polled levels are converted to
//!   press/release edge events
//!
//! [`InputMux`] drains both per cycle in a fixed order (link first, then
//! the forward button, then the backward button) and hands the resulting
//! events to the caller in discovery order.
//!
//! # Button Semantics
//!
//! A press edge emits `Start(dir)` and a release edge emits `Stop`. There is
//! no per-button ownership of the stop condition: releasing *either*
//! movement button stops the motor, even when that button's press did not
//! start the motion (the press was absorbed as a no-op because the motor was
//! already moving). Last release wins. This matches the physical panel the
//! controller was built for; do not "fix" it here without changing the
//! panel's documented behavior.
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::{CommandSource, InputMux, MotorCommand, MotorDirection};
//! use rs_hbridge::hal::{MockButton, MockLink};
//!
//! let mut link = MockLink::new();
//! link.queue_str("f");
//!
//! let mut mux = InputMux::new(link, MockButton::new(), MockButton::new());
//!
//! let events = mux.poll(0);
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].command, MotorCommand::Start(MotorDirection::Forward));
//! assert_eq!(events[0].source, CommandSource::Link);
//! ```

use heapless::Vec;

use crate::command::{CommandSource, MotorCommand, SourcedCommand};
use crate::traits::{ButtonInput, CommandLink, MotorDirection};

/// Upper bound on events one poll cycle can produce (one link token plus
/// one edge per button).
pub const MAX_EVENTS_PER_CYCLE: usize = 3;

/// The bounded batch of events discovered in one poll cycle.
pub type EventBatch = Vec<SourcedCommand, MAX_EVENTS_PER_CYCLE>;

/// Per-button edge detector.
///
/// Converts a polled level into discrete press/release events by comparing
/// against the level that last produced an event. A press emits
/// `Start(direction)`; a release emits `Stop`.
///
/// # Debounce
///
/// Off by default, matching the raw panel wiring. When enabled with
/// [`with_debounce_ms`](Self::with_debounce_ms), a level change within the
/// window of the last accepted edge is ignored and does not latch; the
/// change is picked up on a later poll once the window has passed, if the
/// level still differs.
///
/// # Example
///
/// ```rust
/// use rs_hbridge::{ButtonEdge, MotorCommand, MotorDirection};
/// use rs_hbridge::hal::MockButton;
///
/// let mut edge = ButtonEdge::new(MockButton::new(), MotorDirection::Forward);
///
/// assert_eq!(edge.poll(0), None); // idle, no edge
///
/// edge.input_mut().press();
/// assert_eq!(edge.poll(10), Some(MotorCommand::Start(MotorDirection::Forward)));
/// assert_eq!(edge.poll(20), None); // held, no new edge
///
/// edge.input_mut().release();
/// assert_eq!(edge.poll(30), Some(MotorCommand::Stop));
/// ```
pub struct ButtonEdge<I: ButtonInput> {
    input: I,
    direction: MotorDirection,
    active: bool,
    debounce_ms: u32,
    last_edge_ms: Option<u64>,
}

impl<I: ButtonInput> ButtonEdge<I> {
    /// Create an edge detector for a button that starts the given direction.
    pub fn new(input: I, direction: MotorDirection) -> Self {
        Self {
            input,
            direction,
            active: false,
            debounce_ms: 0,
            last_edge_ms: None,
        }
    }

    /// Enable a debounce window: level changes within `ms` of the last
    /// accepted edge are ignored. Zero disables debouncing (the default).
    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Compare the current level against the latched one and emit an edge
    /// event if they differ.
    pub fn poll(&mut self, now_ms: u64) -> Option<MotorCommand> {
        let level = self.input.is_pressed();
        if level == self.active {
            return None;
        }

        if self.debounce_ms > 0 {
            if let Some(last) = self.last_edge_ms {
                if now_ms.saturating_sub(last) < self.debounce_ms as u64 {
                    return None;
                }
            }
        }

        self.active = level;
        self.last_edge_ms = Some(now_ms);

        Some(if level {
            MotorCommand::Start(self.direction)
        } else {
            MotorCommand::Stop
        })
    }

    /// The direction this button starts.
    pub fn direction(&self) -> MotorDirection {
        self.direction
    }

    /// Whether the last accepted edge was a press.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Borrow the underlying input.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutably borrow the underlying input.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

/// Multiplexes the wireless link and both buttons into one event batch.
///
/// Per cycle, in fixed order:
///
/// 1. one link byte, mapped through [`MotorCommand::from_byte`]
///    (unrecognized bytes are dropped silently)
/// 2. the forward button's edge, if any
/// 3. the backward button's edge, if any
///
/// Events are returned in discovery order and must be applied to the
/// controller in that order.
pub struct InputMux<L: CommandLink, F: ButtonInput, R: ButtonInput> {
    link: L,
    forward: ButtonEdge<F>,
    backward: ButtonEdge<R>,
}

impl<L: CommandLink, F: ButtonInput, R: ButtonInput> InputMux<L, F, R> {
    /// Create a multiplexer over a link and the two movement buttons.
    pub fn new(link: L, forward: F, backward: R) -> Self {
        Self {
            link,
            forward: ButtonEdge::new(forward, MotorDirection::Forward),
            backward: ButtonEdge::new(backward, MotorDirection::Backward),
        }
    }

    /// Apply a debounce window to both buttons.
    pub fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.forward = self.forward.with_debounce_ms(ms);
        self.backward = self.backward.with_debounce_ms(ms);
        self
    }

    /// Run one poll cycle and collect the discovered events.
    pub fn poll(&mut self, now_ms: u64) -> EventBatch {
        let mut events = EventBatch::new();

        if let Some(byte) = self.link.read_byte() {
            if let Some(cmd) = MotorCommand::from_byte(byte) {
                let _ = events.push(SourcedCommand::new(cmd, CommandSource::Link));
            }
        }

        if let Some(cmd) = self.forward.poll(now_ms) {
            let _ = events.push(SourcedCommand::new(cmd, CommandSource::Button));
        }

        if let Some(cmd) = self.backward.poll(now_ms) {
            let _ = events.push(SourcedCommand::new(cmd, CommandSource::Button));
        }

        events
    }

    /// Mutably borrow the link.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Borrow the forward button's edge detector.
    pub fn forward(&self) -> &ButtonEdge<F> {
        &self.forward
    }

    /// Mutably borrow the forward button's edge detector.
    pub fn forward_mut(&mut self) -> &mut ButtonEdge<F> {
        &mut self.forward
    }

    /// Borrow the backward button's edge detector.
    pub fn backward(&self) -> &ButtonEdge<R> {
        &self.backward
    }

    /// Mutably borrow the backward button's edge detector.
    pub fn backward_mut(&mut self) -> &mut ButtonEdge<R> {
        &mut self.backward
    }
}

//! Normalized command events and their wire/byte representation.
//!
//! Button edges and wireless link bytes both collapse into
//! the same three-event vocabulary before reaching the motor controller:
//! start forward, start backward, stop. This module defines that vocabulary
//! and the single-character mapping used by the link.
//!
//! # Wire Format
//!
//! The link speaks single case-insensitive characters with no framing:
//!
//! | Byte | Command |
//! |------|---------|
//! | `F` / `f` | [`MotorCommand::Start`] (forward) |
//! | `B` / `b` | [`MotorCommand::Start`] (backward) |
//! | `S` / `s` | [`MotorCommand::Stop`] |
//!
//! Every other byte is discarded silently; an unrecognized byte is not an
//! error in a system with no operator console to report to.
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::{MotorCommand, MotorDirection};
//!
//! assert_eq!(
//!     MotorCommand::from_byte(b'f'),
//!     Some(MotorCommand::Start(MotorDirection::Forward))
//! );
//! assert_eq!(MotorCommand::from_byte(b'S'), Some(MotorCommand::Stop));
//! assert_eq!(MotorCommand::from_byte(b'x'), None);
//! ```

use crate::traits::MotorDirection;

/// A normalized command event.
///
/// Transient by design: commands are produced by the
/// [`InputMux`](crate::InputMux) and consumed by
/// [`MotorController::apply`](crate::MotorController::apply) within the same
/// poll cycle, never queued or stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MotorCommand {
    /// Begin driving in the given direction (ramping up from zero duty).
    ///
    /// Ignored unless the motor is stopped: there is no direction reversal
    /// without an intervening stop.
    Start(MotorDirection),

    /// Stop driving: coast and zero the duty cycle.
    ///
    /// Idempotent: a stop while already stopped is a no-op.
    Stop,
}

impl MotorCommand {
    /// Map a single link byte to a command.
    ///
    /// Case-insensitive; returns `None` for anything outside `F`/`B`/`S`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'F' => Some(MotorCommand::Start(MotorDirection::Forward)),
            b'B' => Some(MotorCommand::Start(MotorDirection::Backward)),
            b'S' => Some(MotorCommand::Stop),
            _ => None,
        }
    }

    /// The canonical link byte for this command.
    ///
    /// Useful for desktop clients driving a controller over a real link.
    pub const fn as_byte(&self) -> u8 {
        match self {
            MotorCommand::Start(MotorDirection::Forward) => b'F',
            MotorCommand::Start(MotorDirection::Backward) => b'B',
            MotorCommand::Stop => b'S',
        }
    }

    /// The direction this command starts, if it is a start command.
    pub const fn direction(&self) -> Option<MotorDirection> {
        match self {
            MotorCommand::Start(dir) => Some(*dir),
            MotorCommand::Stop => None,
        }
    }

    /// Returns true for [`Stop`](Self::Stop).
    pub const fn is_stop(&self) -> bool {
        matches!(self, MotorCommand::Stop)
    }
}

/// Which input source produced a command.
///
/// Both sources feed the same state machine with equal authority; the source
/// is carried alongside applied events purely for reporting (the hardware
/// binary prints which input drove a transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CommandSource {
    /// The wireless serial command link.
    Link,
    /// A physical push-button edge.
    Button,
}

/// A command paired with the source that produced it.
///
/// The per-cycle output unit of the [`InputMux`](crate::InputMux).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourcedCommand {
    /// The normalized command event.
    pub command: MotorCommand,
    /// Source that produced it.
    pub source: CommandSource,
}

impl SourcedCommand {
    /// Pair a command with its source.
    pub const fn new(command: MotorCommand, source: CommandSource) -> Self {
        Self { command, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_byte_uppercase() {
        assert_eq!(
            MotorCommand::from_byte(b'F'),
            Some(MotorCommand::Start(MotorDirection::Forward))
        );
        assert_eq!(
            MotorCommand::from_byte(b'B'),
            Some(MotorCommand::Start(MotorDirection::Backward))
        );
        assert_eq!(MotorCommand::from_byte(b'S'), Some(MotorCommand::Stop));
    }

    #[test]
    fn from_byte_lowercase() {
        assert_eq!(
            MotorCommand::from_byte(b'f'),
            Some(MotorCommand::Start(MotorDirection::Forward))
        );
        assert_eq!(
            MotorCommand::from_byte(b'b'),
            Some(MotorCommand::Start(MotorDirection::Backward))
        );
        assert_eq!(MotorCommand::from_byte(b's'), Some(MotorCommand::Stop));
    }

    #[test]
    fn from_byte_unrecognized_is_none() {
        for b in [b'x', b'0', b' ', b'\n', 0u8, 0xFF] {
            assert_eq!(MotorCommand::from_byte(b), None, "byte {b:#04x}");
        }
    }

    #[test]
    fn byte_round_trip() {
        for cmd in [
            MotorCommand::Start(MotorDirection::Forward),
            MotorCommand::Start(MotorDirection::Backward),
            MotorCommand::Stop,
        ] {
            assert_eq!(MotorCommand::from_byte(cmd.as_byte()), Some(cmd));
        }
    }

    #[test]
    fn direction_accessor() {
        assert_eq!(
            MotorCommand::Start(MotorDirection::Backward).direction(),
            Some(MotorDirection::Backward)
        );
        assert_eq!(MotorCommand::Stop.direction(), None);
    }

    #[test]
    fn is_stop() {
        assert!(MotorCommand::Stop.is_stop());
        assert!(!MotorCommand::Start(MotorDirection::Forward).is_stop());
    }

    #[test]
    fn sourced_command_pairs() {
        let sc = SourcedCommand::new(MotorCommand::Stop, CommandSource::Link);
        assert_eq!(sc.command, MotorCommand::Stop);
        assert_eq!(sc.source, CommandSource::Link);
    }
}

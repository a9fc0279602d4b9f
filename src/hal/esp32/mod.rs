//! ESP32 hardware abstraction layer for single-motor H-bridge control.
//!
//! This module provides hardware implementations for a classic ESP32 dev
//! board driving one DC motor through a dual-channel H-bridge module
//! (L298N or similar), with two momentary push-buttons and a wireless
//! serial module on UART.
//!
//! # Hardware Configuration
//!
//! - **MCU**: ESP32 (classic, dual-core) dev board
//! - **Motor Driver**: L298N-style H-bridge (IN1/IN2 direction, ENA PWM)
//! - **Buttons**: two momentary switches, active-high with pull-downs
//! - **Link**: serial Bluetooth module (HC-05 class) on UART2
//!
//! # Pin Assignments
//!
//! See the [`pins`] module for the GPIO map.

mod bridge;
mod buttons;
mod clock;
mod link;

pub use bridge::Esp32HBridge;
pub use buttons::Esp32Button;
pub use clock::Esp32Clock;
pub use link::Esp32SerialLink;

/// Pin assignments for the stock wiring.
///
/// These constants match the bench wiring:
/// - H-bridge direction + enable on GPIO27/26/14
/// - Push-buttons on GPIO25/33
/// - UART link on GPIO17/16
pub mod pins {
    // =========================================================================
    // Motor Control (H-bridge)
    // =========================================================================

    /// IN1 on the H-bridge (direction)
    pub const IN1: i32 = 27;

    /// IN2 on the H-bridge (direction)
    pub const IN2: i32 = 26;

    /// ENA on the H-bridge (PWM speed control)
    pub const ENA: i32 = 14;

    // =========================================================================
    // Push-buttons (momentary, active-high, pull-down idle)
    // =========================================================================

    /// Starts the motor forward while the motor is stopped
    pub const BTN_FORWARD: i32 = 25;

    /// Starts the motor backward while the motor is stopped
    pub const BTN_BACKWARD: i32 = 33;

    // =========================================================================
    // Wireless serial link (UART2)
    // =========================================================================

    /// UART TX toward the radio module
    pub const LINK_TX: i32 = 17;

    /// UART RX from the radio module
    pub const LINK_RX: i32 = 16;
}

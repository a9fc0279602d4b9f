//! Shared configuration system for desktop and ESP32.
//!
//! Uses `heapless::String` for `no_std` compatibility while remaining
//! ergonomic to use on desktop with `std`. Defaults mirror the stock
//! hardware: 1 second ramp to full 8-bit duty at 5 kHz PWM.
//!
//! Nothing here persists; settings are a build-time/startup concern only.
//!
//! # Example
//!
//! ```rust
//! use rs_hbridge::config::{Config, LinkConfig, MotorConfig};
//!
//! // Use defaults
//! let config = Config::default();
//!
//! // Or customize
//! let config = Config::default()
//!     .with_motor(MotorConfig::default().with_ramp_duration_ms(2000))
//!     .with_link(LinkConfig::default().with_device_name("workbench-motor"));
//! ```

use heapless::String as HString;

use crate::ramp::RampProfile;

/// Maximum length for short config strings (device names, PINs)
pub const MAX_SHORT_STRING: usize = 64;

/// Type alias for short config strings
pub type ShortString = HString<MAX_SHORT_STRING>;

/// Create a ShortString from a &str, truncating if too long
pub fn short_string(s: &str) -> ShortString {
    let mut hs = ShortString::new();
    // Take only what fits
    let take = s.len().min(MAX_SHORT_STRING);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, _)| *i < take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Main Config
// ============================================================================

/// Complete application configuration
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Motor/ramp/PWM configuration
    pub motor: MotorConfig,
    /// Wireless command link configuration
    pub link: LinkConfig,
}

impl Config {
    /// Set motor configuration
    pub fn with_motor(mut self, motor: MotorConfig) -> Self {
        self.motor = motor;
        self
    }

    /// Set link configuration
    pub fn with_link(mut self, link: LinkConfig) -> Self {
        self.link = link;
        self
    }
}

// ============================================================================
// Motor Config
// ============================================================================

/// Motor, ramp, and PWM configuration
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotorConfig {
    /// Ramp-up time from zero to full duty, in milliseconds
    pub ramp_duration_ms: u32,
    /// Duty value at full speed (top of the PWM scale)
    pub max_duty: u32,
    /// PWM carrier frequency in Hz
    pub pwm_freq_hz: u32,
    /// PWM resolution in bits (max_duty normally = 2^bits - 1)
    pub pwm_resolution_bits: u8,
    /// Polling loop interval in milliseconds
    pub update_interval_ms: u32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            ramp_duration_ms: 1000,
            max_duty: 255,
            pwm_freq_hz: 5000,
            pwm_resolution_bits: 8,
            update_interval_ms: 5,
        }
    }
}

impl MotorConfig {
    /// Set the ramp duration
    pub fn with_ramp_duration_ms(mut self, ms: u32) -> Self {
        self.ramp_duration_ms = ms;
        self
    }

    /// Set the maximum duty value
    pub fn with_max_duty(mut self, duty: u32) -> Self {
        self.max_duty = duty;
        self
    }

    /// Set the PWM carrier frequency
    pub fn with_pwm_freq_hz(mut self, hz: u32) -> Self {
        self.pwm_freq_hz = hz;
        self
    }

    /// Set the PWM resolution in bits
    pub fn with_pwm_resolution_bits(mut self, bits: u8) -> Self {
        self.pwm_resolution_bits = bits;
        self
    }

    /// Set the polling loop interval
    pub fn with_update_interval_ms(mut self, ms: u32) -> Self {
        self.update_interval_ms = ms;
        self
    }

    /// Build the ramp profile these tunables describe
    pub fn ramp_profile(&self) -> RampProfile {
        RampProfile::new(self.ramp_duration_ms, self.max_duty)
    }
}

// ============================================================================
// Link Config
// ============================================================================

/// Wireless command link configuration.
///
/// The transport itself lives outside the crate; these are the tunables a
/// concrete transport needs at bring-up (the stock build pairs a serial
/// Bluetooth module advertising `device_name`, protected by `pairing_pin`).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    /// Name the transport advertises to clients
    pub device_name: ShortString,
    /// Pairing PIN for transports that support one
    pub pairing_pin: ShortString,
    /// Serial baud rate between MCU and transport module
    pub baud: u32,
    /// Whether the link is enabled
    pub enabled: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            device_name: short_string("rs-hbridge"),
            pairing_pin: short_string("2144"),
            baud: 115_200,
            enabled: true,
        }
    }
}

impl LinkConfig {
    /// Set the advertised device name
    pub fn with_device_name(mut self, name: &str) -> Self {
        self.device_name = short_string(name);
        self
    }

    /// Set the pairing PIN
    pub fn with_pairing_pin(mut self, pin: &str) -> Self {
        self.pairing_pin = short_string(pin);
        self
    }

    /// Set the serial baud rate
    pub fn with_baud(mut self, baud: u32) -> Self {
        self.baud = baud;
        self
    }

    /// Enable or disable the link
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

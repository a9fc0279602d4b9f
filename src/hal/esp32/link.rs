//! Wireless serial command link over UART.
//!
//! The radio module (HC-05 class serial Bluetooth, or anything else that
//! presents as a UART) is wired to UART2 and configured out-of-band; by the
//! time bytes arrive here they are already plain command characters.

use crate::traits::CommandLink;
use esp_idf_hal::delay::NON_BLOCK;
use esp_idf_hal::uart::UartDriver;

/// Command link over a UART-attached radio module.
///
/// Reads are non-blocking: at most one pending byte is taken per call,
/// which gives the one-command-token-per-poll-cycle behavior the control
/// loop expects.
///
/// # Example
///
/// ```ignore
/// use esp_idf_hal::uart::{config::Config as UartConfig, UartDriver};
/// use esp_idf_hal::units::Hertz;
/// use rs_hbridge::hal::esp32::Esp32SerialLink;
///
/// let uart = UartDriver::new(
///     peripherals.uart2,
///     peripherals.pins.gpio17, // TX
///     peripherals.pins.gpio16, // RX
///     Option::<AnyIOPin>::None,
///     Option::<AnyIOPin>::None,
///     &UartConfig::default().baudrate(Hertz(config.link.baud)),
/// )?;
/// let mut link = Esp32SerialLink::new(uart);
/// ```
pub struct Esp32SerialLink<'d> {
    uart: UartDriver<'d>,
}

impl<'d> Esp32SerialLink<'d> {
    /// Wraps an already-configured UART driver.
    pub fn new(uart: UartDriver<'d>) -> Self {
        Self { uart }
    }

    /// Borrow the underlying UART (e.g. to write a status reply).
    pub fn uart(&self) -> &UartDriver<'d> {
        &self.uart
    }
}

impl CommandLink for Esp32SerialLink<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.uart.read(&mut buf, NON_BLOCK) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}

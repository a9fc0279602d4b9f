//! Momentary push-button input for ESP32.
//!
//! Buttons are wired active-high: one leg to 3.3V, the GPIO pulled down
//! internally so the idle level reads low. No hardware debounce; the edge
//! detector in [`crate::ButtonEdge`] can add a software window if the
//! switches turn out to be noisy.

use crate::traits::ButtonInput;
use esp_idf_hal::gpio::{Input, InputPin, OutputPin, PinDriver, Pull};
use esp_idf_hal::peripheral::Peripheral;

/// A single push-button on a GPIO with internal pull-down.
///
/// # Example
///
/// ```ignore
/// use rs_hbridge::hal::esp32::Esp32Button;
/// use rs_hbridge::traits::ButtonInput;
///
/// let peripherals = Peripherals::take()?;
/// let forward = Esp32Button::new(peripherals.pins.gpio25)?;
///
/// if forward.is_pressed() {
///     println!("held");
/// }
/// ```
pub struct Esp32Button<'d, P>
where
    P: InputPin + OutputPin,
{
    pin: PinDriver<'d, P, Input>,
}

impl<'d, P> Esp32Button<'d, P>
where
    P: InputPin + OutputPin,
{
    /// Creates a button input on the given GPIO with pull-down enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be configured.
    pub fn new(pin: impl Peripheral<P = P> + 'd) -> Result<Self, esp_idf_hal::sys::EspError> {
        let mut driver = PinDriver::input(pin)?;
        driver.set_pull(Pull::Down)?;
        Ok(Self { pin: driver })
    }
}

impl<P> ButtonInput for Esp32Button<'_, P>
where
    P: InputPin + OutputPin,
{
    fn is_pressed(&self) -> bool {
        self.pin.is_high()
    }
}

//! L298N-style H-bridge driver using ESP32 GPIO + LEDC PWM.
//!
//! The bridge is controlled via two direction lines and one PWM enable line:
//! - IN1 (GPIO27) / IN2 (GPIO26): polarity
//! - ENA (GPIO14): LEDC PWM, duty = speed
//!
//! Control logic:
//! - Forward: IN1 high, IN2 low
//! - Backward: IN1 low, IN2 high
//! - Coast: both low (freewheel, no braking)

use crate::config::MotorConfig;
use crate::traits::{HBridge, MotorDirection};
use esp_idf_hal::gpio::{Output, OutputPin, PinDriver};
use esp_idf_hal::ledc::{config::TimerConfig, LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_hal::peripheral::Peripheral;
use esp_idf_hal::prelude::*;

/// Map a resolution-in-bits tunable onto the LEDC enum.
///
/// Falls back to 8-bit for unsupported values rather than failing bring-up.
fn resolution_bits(bits: u8) -> Resolution {
    match bits {
        1 => Resolution::Bits1,
        2 => Resolution::Bits2,
        4 => Resolution::Bits4,
        8 => Resolution::Bits8,
        10 => Resolution::Bits10,
        12 => Resolution::Bits12,
        14 => Resolution::Bits14,
        _ => Resolution::Bits8,
    }
}

/// H-bridge driver for ESP32.
///
/// PWM frequency and resolution come from [`MotorConfig`]; the stock
/// profile is 5 kHz at 8-bit resolution (duty 0-255), matching the
/// controller's duty scale so values pass straight through.
///
/// # Hardware Setup
///
/// Connect to the H-bridge module:
/// - GPIO27 → IN1
/// - GPIO26 → IN2
/// - GPIO14 → ENA (remove the ENA jumper)
///
/// # Example
///
/// ```ignore
/// use rs_hbridge::config::MotorConfig;
/// use rs_hbridge::hal::esp32::Esp32HBridge;
/// use rs_hbridge::traits::{HBridge, MotorDirection};
///
/// let peripherals = Peripherals::take()?;
/// let mut bridge = Esp32HBridge::new(
///     peripherals.pins.gpio27,
///     peripherals.pins.gpio26,
///     peripherals.pins.gpio14,
///     peripherals.ledc.timer0,
///     peripherals.ledc.channel0,
///     &MotorConfig::default(),
/// )?;
///
/// bridge.set_direction(MotorDirection::Forward)?;
/// bridge.set_duty(128)?;
/// ```
pub struct Esp32HBridge<'d, I1, I2>
where
    I1: OutputPin,
    I2: OutputPin,
{
    /// IN1 direction line
    in1: PinDriver<'d, I1, Output>,
    /// IN2 direction line
    in2: PinDriver<'d, I2, Output>,
    /// ENA PWM channel
    enable: LedcDriver<'d>,
    /// Top of the configured duty scale
    max_duty: u32,
}

impl<'d, I1, I2> Esp32HBridge<'d, I1, I2>
where
    I1: OutputPin,
    I2: OutputPin,
{
    /// Creates a new H-bridge driver.
    ///
    /// # Arguments
    ///
    /// * `in1_pin` - GPIO for IN1 (typically GPIO27)
    /// * `in2_pin` - GPIO for IN2 (typically GPIO26)
    /// * `ena_pin` - GPIO for ENA PWM (typically GPIO14)
    /// * `timer` - LEDC timer peripheral
    /// * `channel` - LEDC channel for the ENA line
    /// * `config` - PWM frequency/resolution and duty scale
    ///
    /// The bridge starts coasting with zero duty.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO or PWM initialization fails.
    pub fn new<T, TI, C, CI, EP, EPI>(
        in1_pin: impl Peripheral<P = I1> + 'd,
        in2_pin: impl Peripheral<P = I2> + 'd,
        ena_pin: EP,
        timer: T,
        channel: C,
        config: &MotorConfig,
    ) -> Result<Self, esp_idf_hal::sys::EspError>
    where
        TI: esp_idf_hal::ledc::LedcTimer + 'd,
        T: Peripheral<P = TI> + 'd,
        CI: esp_idf_hal::ledc::LedcChannel<SpeedMode = TI::SpeedMode> + 'd,
        C: Peripheral<P = CI> + 'd,
        EPI: OutputPin + 'd,
        EP: Peripheral<P = EPI> + 'd,
    {
        let in1 = PinDriver::output(in1_pin)?;
        let in2 = PinDriver::output(in2_pin)?;

        let timer_config = TimerConfig::default()
            .frequency(config.pwm_freq_hz.Hz())
            .resolution(resolution_bits(config.pwm_resolution_bits));
        let timer_driver = LedcTimerDriver::new(timer, &timer_config)?;
        let enable = LedcDriver::new(channel, &timer_driver, ena_pin)?;

        let mut bridge = Self {
            in1,
            in2,
            enable,
            max_duty: config.max_duty,
        };

        // Start coasting with the motor off
        bridge.coast()?;
        bridge.set_duty(0)?;

        Ok(bridge)
    }
}

impl<I1, I2> HBridge for Esp32HBridge<'_, I1, I2>
where
    I1: OutputPin,
    I2: OutputPin,
{
    type Error = esp_idf_hal::sys::EspError;

    fn set_direction(&mut self, dir: MotorDirection) -> Result<(), Self::Error> {
        match dir {
            MotorDirection::Forward => {
                self.in1.set_high()?;
                self.in2.set_low()?;
            }
            MotorDirection::Backward => {
                self.in1.set_low()?;
                self.in2.set_high()?;
            }
        }
        Ok(())
    }

    fn set_duty(&mut self, duty: u32) -> Result<(), Self::Error> {
        self.enable.set_duty(duty.min(self.max_duty))
    }

    fn coast(&mut self) -> Result<(), Self::Error> {
        self.in1.set_low()?;
        self.in2.set_low()?;
        Ok(())
    }
}

//! ESP32 single-motor H-bridge controller.
//!
//! This is the main entry point for the physical hardware controller.
//! It runs a fast polling loop that:
//! - Reads one pending command byte from the wireless serial link
//! - Edge-detects the two push-buttons
//! - Advances the ramp and updates the motor PWM output
//!
//! # Hardware Setup
//!
//! See [`rs_hbridge::hal::esp32::pins`] for the GPIO map: H-bridge on
//! GPIO27/26/14, buttons on GPIO25/33, radio module on UART2 (GPIO17/16).
//!
//! # Build
//!
//! ```bash
//! cargo build --release --features esp32 --bin esp32_main
//! ```

use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use esp_idf_hal::uart::{config::Config as UartConfig, UartDriver};
use rs_hbridge::hal::esp32::{Esp32Button, Esp32Clock, Esp32HBridge, Esp32SerialLink};
use rs_hbridge::traits::Clock;
use rs_hbridge::{CommandOutcome, Config, ControlLoop, InputMux, MotorController};
use std::thread;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();

    println!();
    println!("==============================");
    println!("  rs-hbridge motor controller");
    println!("==============================");
    println!();

    let config = Config::default();

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize H-bridge (IN1/IN2/ENA on GPIO27/26/14)
    // =========================================================================
    let bridge = Esp32HBridge::new(
        peripherals.pins.gpio27,
        peripherals.pins.gpio26,
        peripherals.pins.gpio14,
        peripherals.ledc.timer0,
        peripherals.ledc.channel0,
        &config.motor,
    )?;
    println!("[OK] H-bridge initialized (GPIO27/26, PWM on GPIO14)");

    // =========================================================================
    // Initialize buttons (GPIO25 forward, GPIO33 backward)
    // =========================================================================
    let forward = Esp32Button::new(peripherals.pins.gpio25)?;
    let backward = Esp32Button::new(peripherals.pins.gpio33)?;
    println!("[OK] Buttons initialized (GPIO25/33, pull-down)");

    // =========================================================================
    // Initialize wireless serial link (UART2 on GPIO17/16)
    // =========================================================================
    let uart = UartDriver::new(
        peripherals.uart2,
        peripherals.pins.gpio17,
        peripherals.pins.gpio16,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &UartConfig::default().baudrate(config.link.baud.Hz()),
    )?;
    let link = Esp32SerialLink::new(uart);
    println!(
        "[OK] Link initialized ({} baud, device \"{}\")",
        config.link.baud,
        config.link.device_name.as_str()
    );
    println!("Ready for button or wireless control.");

    // =========================================================================
    // Control loop
    // =========================================================================
    let clock = Esp32Clock::new();
    let controller =
        MotorController::new(bridge).with_profile(config.motor.ramp_profile());
    let inputs = InputMux::new(link, forward, backward);
    let mut ctl = ControlLoop::new(controller, inputs);

    let interval = Duration::from_millis(config.motor.update_interval_ms as u64);

    loop {
        let now_ms = clock.now_ms();
        let report = ctl.poll_once(now_ms)?;

        for applied in report {
            match applied.outcome {
                CommandOutcome::Started(dir) => {
                    println!("Command: {} ({:?})", dir.as_str(), applied.source);
                }
                CommandOutcome::Stopped => {
                    println!("Command: stop ({:?})", applied.source);
                }
                CommandOutcome::Ignored => {}
            }
        }

        thread::sleep(interval);
    }
}

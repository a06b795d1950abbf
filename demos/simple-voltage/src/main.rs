//! Simple voltage example
//!
//! Demonstrates basic usage of the ltc2499-driver crate on the Raspberry Pi
//! Pico 2. Initialises the ADC for a differential conversion on channels
//! 0/1, then reads and logs the decoded voltage once per second via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                          |
//! |-----------|------------|--------------------------------|
//! | I2C0 SDA  | GP20       |                                |
//! | I2C0 SCL  | GP21       |                                |
//! | CA0..CA2  | GND        | Device address 0x14 (all low)  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use ltc2499_driver::{
    AdcConfig, ChannelMode, ChannelPolarity, ChannelSelection, Ltc2499, DEFAULT_ADDRESS,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c::Config::default(),
    );

    // --- ADC ---
    let mut adc = Ltc2499::new(i2c, Delay);

    let config = AdcConfig::new(
        ChannelMode::Differential,
        ChannelPolarity::Even,
        ChannelSelection::Channel0_1,
    );

    match adc.init(DEFAULT_ADDRESS, config).await {
        Ok(()) => info!("ADC initialised at address {=u8:#x}", DEFAULT_ADDRESS),
        Err(e) => {
            error!("ADC init failed: {}", e);
            return;
        }
    }

    info!("Voltage example started — reading channels 0/1 once per second");

    // Main loop: read, decode, log, sleep, repeat. The LTC2499 needs about
    // 160 ms per conversion; the driver's retry loop rides out the NAKs
    // while one is still in progress.
    loop {
        match adc.read_voltage().await {
            Ok(volts) => info!("Voltage: {=f32} V", volts),
            Err(e) => error!("Read failed: {}", e),
        }

        Timer::after(Duration::from_millis(1000)).await;
    }
}

#![no_std]

use mpu6050::Mpu6050;
use stm32f4xx_hal::{
    i2c::{I2c, I2c1},
    pac::{CorePeripherals, Peripherals},
    prelude::*,
    timer::SysDelay,
};

pub mod led;
pub mod logging;
pub mod serial;

use led::{GreenLed, RedLed, StatusLed};
use serial::DebugSerialPort;

pub type Imu = Mpu6050<I2c1>;

/// Discovery board wiring: MPU-6050 breakout on I2C1 (PB8 SCL, PB9 SDA),
/// debug output on USART1 TX (PA9).
pub struct Mpu6050Hardware {
    pub delay: SysDelay,
    pub heartbeat_led: StatusLed<GreenLed>,
    pub error_led: StatusLed<RedLed>,
    pub dbg_serial: DebugSerialPort,
    pub imu: Imu,
}

impl Mpu6050Hardware {
    /// `alt_addr` if the breakout pulls AD0 high.
    pub fn init(pac: Peripherals, core: CorePeripherals, alt_addr: bool) -> Self {
        let rcc = pac.RCC.constrain();
        let clocks = rcc.cfgr.use_hse(8.MHz()).sysclk(168.MHz()).freeze();
        let delay = core.SYST.delay(&clocks);

        let gpioa = pac.GPIOA.split();
        let gpiob = pac.GPIOB.split();
        let gpiod = pac.GPIOD.split();

        // Status LED's
        let heartbeat_led = StatusLed::new(gpiod.pd12.into_push_pull_output());
        let error_led = StatusLed::new(gpiod.pd14.into_push_pull_output());

        let debug_tx_pin = gpioa.pa9.into_alternate();
        let dbg_serial = pac.USART1.tx(debug_tx_pin, 115200.bps(), &clocks).unwrap();

        // 400kHz fast mode, the MPU-6050 maximum
        let scl = gpiob.pb8;
        let sda = gpiob.pb9;
        let i2c1 = I2c::new(pac.I2C1, (scl, sda), 400.kHz(), &clocks);
        let imu = Mpu6050::new_with_address(i2c1, alt_addr);

        Self {
            delay,
            heartbeat_led,
            error_led,
            dbg_serial,
            imu,
        }
    }
}

#![no_main]
#![no_std]

use core::fmt::Write;

use panic_halt as _;

use cortex_m_rt::entry;
use cortex_m_semihosting::hio;
use embedded_hal::delay::DelayNs;
use stm32f4xx_hal::{
    i2c::{Error, I2c, NoAcknowledgeSource},
    pac,
    prelude::*,
};

use mpu6050::{regs::Register, Mpu6050, WHO_AM_I_VALUE};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().expect("Failed to get device periph");
    let cp = cortex_m::peripheral::Peripherals::take().expect("Failed to get core periph");

    let mut stdout = hio::hstdout().map_err(|_| core::fmt::Error).unwrap();

    let gpiob = dp.GPIOB.split();
    let sda = gpiob.pb9;
    let scl = gpiob.pb8;

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(8.MHz()).sysclk(168.MHz()).freeze();

    let mut delay = cp.SYST.delay(&clocks);
    let mut i2c1 = I2c::new(dp.I2C1, (scl, sda), 100.kHz(), &clocks);

    DelayNs::delay_ms(&mut delay, 100);

    for alt_addr in [false, true] {
        let mut mpu = Mpu6050::new_with_address(&mut i2c1, alt_addr);
        let addr = mpu.address();

        match mpu.who_am_i() {
            Ok(WHO_AM_I_VALUE) => {
                let pwr = mpu.get_byte(Register::PwrMgmt1);
                writeln!(stdout, "MPU-6050 at {:#04x}, PWR_MGMT_1: {:?}", addr, pwr).unwrap();
                loop {}
            }
            Ok(id) => writeln!(stdout, "{:#04x} answered WHO_AM_I {:#04x}", addr, id).unwrap(),
            Err(e) if e == Error::NoAcknowledge(NoAcknowledgeSource::Address) => {
                writeln!(stdout, "Nothing at {:#04x}", addr).unwrap()
            }
            Err(e) => writeln!(stdout, "Some other error: {:?}", e).unwrap(),
        }
        DelayNs::delay_ms(&mut delay, 10);
    }

    writeln!(stdout, "No MPU-6050 found :(").unwrap();

    loop {}
}

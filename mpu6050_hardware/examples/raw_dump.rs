#![no_main]
#![no_std]

use core::fmt::Write;

use panic_halt as _;

use cortex_m_rt::entry;
use cortex_m_semihosting::hio;
use embedded_hal::delay::DelayNs;
use stm32f4xx_hal::pac;

use mpu6050::{Config, Vector3};
use mpu6050_hardware::{logging, Mpu6050Hardware};

const BIAS_SAMPLES: u16 = 200;
const PRINT_EVERY: u16 = 20;

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().expect("Failed to get device periph");
    let cp = cortex_m::peripheral::Peripherals::take().expect("Failed to get core periph");

    let mut stdout = hio::hstdout().map_err(|_| core::fmt::Error).unwrap();

    let Mpu6050Hardware {
        mut delay,
        mut heartbeat_led,
        mut error_led,
        dbg_serial,
        mut imu,
    } = Mpu6050Hardware::init(dp, cp, false);

    #[cfg(feature = "serial_logger")]
    logging::serial_logger::init(dbg_serial);
    #[cfg(not(feature = "serial_logger"))]
    drop(dbg_serial);

    logging::init(logging::Level::Debug).unwrap();

    // Register access needs 100ms after power-up
    if let Err(e) = imu.wait_for_device(&mut delay, 100) {
        error_led.turn_on();
        writeln!(stdout, "mpu6050 not found: {:?}", e).unwrap();
        panic!()
    }

    let config = Config {
        data_ready_interrupt: true,
        ..Config::default()
    };
    if let Err(e) = imu.initialize_with(&config) {
        error_led.turn_on();
        writeln!(stdout, "mpu6050 init error {:?}", e).unwrap();
        panic!()
    }
    writeln!(stdout, "sampling at {}Hz, keep still", config.sample_rate_hz()).unwrap();

    let mut gyro_bias = Vector3::default();
    let mut collected = 0;
    while collected < BIAS_SAMPLES {
        if !matches!(imu.data_ready(), Ok(true)) {
            continue;
        }
        match imu.read_sample() {
            Ok(s) => {
                gyro_bias = gyro_bias + s.gyro;
                collected += 1;
            }
            Err(e) => writeln!(stdout, "sample err: {:?}", e).unwrap(),
        }
    }
    gyro_bias.scale(1.0 / BIAS_SAMPLES as f32);
    writeln!(stdout, "gyro bias: {:?}", gyro_bias).unwrap();

    let mut count: u16 = 0;
    loop {
        if !matches!(imu.data_ready(), Ok(true)) {
            continue;
        }

        match imu.read_sample() {
            Ok(s) => {
                count = count.wrapping_add(1);
                if count % PRINT_EVERY == 0 {
                    heartbeat_led.toggle();
                    writeln!(
                        stdout,
                        "gyro: {:?}, accel: {:?}, temp: {}",
                        s.gyro - gyro_bias,
                        s.accel,
                        s.temperature
                    )
                    .unwrap();
                }
            }
            Err(e) => {
                error_led.toggle();
                writeln!(stdout, "sample err: {:?}", e).unwrap();
                delay.delay_ms(10);
            }
        }
    }
}

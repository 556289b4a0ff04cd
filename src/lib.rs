#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod mpu6050;
pub mod regs;
pub mod sample;
pub mod scale;

pub use config::Config;
pub use error::Error;
pub use mpu6050::Mpu6050;
pub use regs::Register;
pub use sample::{RawSample, Sample, Vector3};
pub use scale::{AccelRange, ClockSource, Dlpf, GyroRange};

/// I2C address with AD0 tied low.
pub const DEVICE_ADDRESS: u8 = 0x68;

/// I2C address with AD0 tied high.
pub const ALT_DEVICE_ADDRESS: u8 = 0x69;

/// Expected contents of `WHO_AM_I`, independent of the AD0 pin.
pub const WHO_AM_I_VALUE: u8 = 0x68;

#[cfg(test)]
mod tests;

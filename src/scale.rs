//! Full-scale range, filter and clock selectors along with the sensitivity
//! constants from the register map datasheet.
//!
//! Every range has two equivalent constants: the sensitivity in LSB per unit
//! and its reciprocal, the size of one LSB in physical units.

use crate::regs::bits;

/// Gyro sensitivity, LSB per deg/s
pub const GYRO_LSB_250: f32 = 131.0;
pub const GYRO_LSB_500: f32 = 65.5;
pub const GYRO_LSB_1000: f32 = 32.8;
pub const GYRO_LSB_2000: f32 = 16.4;

/// Gyro resolution, deg/s per LSB
pub const GYRO_LSB_250_SCALE: f32 = 0.007633; // 1/131
pub const GYRO_LSB_500_SCALE: f32 = 0.015267; // 1/65.5
pub const GYRO_LSB_1000_SCALE: f32 = 0.030487; // 1/32.8
pub const GYRO_LSB_2000_SCALE: f32 = 0.060975; // 1/16.4

/// Accel sensitivity, LSB per g
pub const ACCEL_LSB_2: f32 = 16384.0;
pub const ACCEL_LSB_4: f32 = 8192.0;
pub const ACCEL_LSB_8: f32 = 4096.0;
pub const ACCEL_LSB_16: f32 = 2048.0;

/// Accel resolution, g per LSB
pub const ACCEL_LSB_2_SCALE: f32 = 0.000_061_035_156_25; // 1/16384
pub const ACCEL_LSB_4_SCALE: f32 = 0.000_122_070_312_5; // 1/8192
pub const ACCEL_LSB_8_SCALE: f32 = 0.000_244_140_625; // 1/4096
pub const ACCEL_LSB_16_SCALE: f32 = 0.000_488_281_25; // 1/2048

/// Temperature sensor: deg C = raw / TEMP_LSB + TEMP_OFFSET
pub const TEMP_LSB: f32 = 340.0;
pub const TEMP_OFFSET: f32 = 36.53;

/// Gyro full-scale range, discriminant is the FS_SEL code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroRange {
    #[default]
    Dps250 = 0,
    Dps500 = 1,
    Dps1000 = 2,
    Dps2000 = 3,
}

impl GyroRange {
    /// Bits to write into `GYRO_CONFIG` to select this range.
    pub fn to_register(&self) -> u8 {
        (*self as u8) << 3
    }

    /// Range currently selected by a `GYRO_CONFIG` value, other bits are ignored.
    pub fn from_register(value: u8) -> Self {
        match (value & bits::FS_SEL) >> 3 {
            0 => GyroRange::Dps250,
            1 => GyroRange::Dps500,
            2 => GyroRange::Dps1000,
            _ => GyroRange::Dps2000,
        }
    }

    pub fn lsb_per_unit(&self) -> f32 {
        match self {
            GyroRange::Dps250 => GYRO_LSB_250,
            GyroRange::Dps500 => GYRO_LSB_500,
            GyroRange::Dps1000 => GYRO_LSB_1000,
            GyroRange::Dps2000 => GYRO_LSB_2000,
        }
    }

    /// deg/s per LSB
    pub fn scale(&self) -> f32 {
        match self {
            GyroRange::Dps250 => GYRO_LSB_250_SCALE,
            GyroRange::Dps500 => GYRO_LSB_500_SCALE,
            GyroRange::Dps1000 => GYRO_LSB_1000_SCALE,
            GyroRange::Dps2000 => GYRO_LSB_2000_SCALE,
        }
    }
}

/// Accel full-scale range, discriminant is the AFS_SEL code.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelRange {
    #[default]
    G2 = 0,
    G4 = 1,
    G8 = 2,
    G16 = 3,
}

impl AccelRange {
    /// Bits to write into `ACCEL_CONFIG` to select this range.
    pub fn to_register(&self) -> u8 {
        (*self as u8) << 3
    }

    pub fn from_register(value: u8) -> Self {
        match (value & bits::FS_SEL) >> 3 {
            0 => AccelRange::G2,
            1 => AccelRange::G4,
            2 => AccelRange::G8,
            _ => AccelRange::G16,
        }
    }

    pub fn lsb_per_unit(&self) -> f32 {
        match self {
            AccelRange::G2 => ACCEL_LSB_2,
            AccelRange::G4 => ACCEL_LSB_4,
            AccelRange::G8 => ACCEL_LSB_8,
            AccelRange::G16 => ACCEL_LSB_16,
        }
    }

    /// g per LSB
    pub fn scale(&self) -> f32 {
        match self {
            AccelRange::G2 => ACCEL_LSB_2_SCALE,
            AccelRange::G4 => ACCEL_LSB_4_SCALE,
            AccelRange::G8 => ACCEL_LSB_8_SCALE,
            AccelRange::G16 => ACCEL_LSB_16_SCALE,
        }
    }
}

/// Digital low pass filter bandwidth (accel bandwidth listed), `DLPF_CFG` in `CONFIG`.
///
/// With the filter disabled (`Bw260Hz`) the gyro output rate is 8kHz, otherwise 1kHz.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dlpf {
    #[default]
    Bw260Hz = 0x00,
    Bw184Hz = 0x01,
    Bw94Hz = 0x02,
    Bw44Hz = 0x03,
    Bw21Hz = 0x04,
    Bw10Hz = 0x05,
    Bw5Hz = 0x06,
}

impl Dlpf {
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }

    pub fn from_u8(cfg: u8) -> Result<Self, u8> {
        match cfg {
            0x00 => Ok(Dlpf::Bw260Hz),
            0x01 => Ok(Dlpf::Bw184Hz),
            0x02 => Ok(Dlpf::Bw94Hz),
            0x03 => Ok(Dlpf::Bw44Hz),
            0x04 => Ok(Dlpf::Bw21Hz),
            0x05 => Ok(Dlpf::Bw10Hz),
            0x06 => Ok(Dlpf::Bw5Hz),
            e => Err(e),
        }
    }

    /// Rate in Hz that `SMPLRT_DIV` divides down.
    pub fn gyro_output_rate(&self) -> u32 {
        match self {
            Dlpf::Bw260Hz => 8_000,
            _ => 1_000,
        }
    }
}

/// `CLKSEL` in `PWR_MGMT_1`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    #[default]
    Internal8MHz = 0x00,
    PllGyroX = 0x01,
    PllGyroY = 0x02,
    PllGyroZ = 0x03,
    PllExternal32kHz = 0x04,
    PllExternal19MHz = 0x05,
    Stopped = 0x07,
}

impl ClockSource {
    pub fn to_u8(&self) -> u8 {
        *self as u8
    }

    pub fn from_u8(clksel: u8) -> Result<Self, u8> {
        match clksel {
            0x00 => Ok(ClockSource::Internal8MHz),
            0x01 => Ok(ClockSource::PllGyroX),
            0x02 => Ok(ClockSource::PllGyroY),
            0x03 => Ok(ClockSource::PllGyroZ),
            0x04 => Ok(ClockSource::PllExternal32kHz),
            0x05 => Ok(ClockSource::PllExternal19MHz),
            0x07 => Ok(ClockSource::Stopped),
            e => Err(e),
        }
    }
}

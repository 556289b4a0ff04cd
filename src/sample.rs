use crate::scale::{AccelRange, GyroRange, TEMP_LSB, TEMP_OFFSET};

/// Length of the ACCEL_XOUT_H..GYRO_ZOUT_L block.
pub const SAMPLE_LEN: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl core::ops::Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl core::ops::Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Vector3 {
    pub fn scale(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }

    fn from_raw(raw: [i16; 3], scale: f32) -> Self {
        Self {
            x: (raw[0] as f32) * scale,
            y: (raw[1] as f32) * scale,
            z: (raw[2] as f32) * scale,
        }
    }
}

/// Unscaled sensor output as stored in the data registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    pub accel: [i16; 3],
    pub temp: i16,
    pub gyro: [i16; 3],
}

impl RawSample {
    /// Decodes the big-endian block read from `ACCEL_XOUT_H` onwards.
    pub fn from_bytes(buf: &[u8; SAMPLE_LEN]) -> Self {
        let word = |i: usize| i16::from_be_bytes([buf[i], buf[i + 1]]);

        Self {
            accel: [word(0), word(2), word(4)],
            temp: word(6),
            gyro: [word(8), word(10), word(12)],
        }
    }

    pub fn scaled(&self, gyro_range: GyroRange, accel_range: AccelRange) -> Sample {
        Sample {
            accel: Vector3::from_raw(self.accel, accel_range.scale()),
            gyro: Vector3::from_raw(self.gyro, gyro_range.scale()),
            temperature: (self.temp as f32) / TEMP_LSB + TEMP_OFFSET,
        }
    }
}

/// Sensor output in physical units: accel in g, gyro in deg/s, temperature in deg C.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub accel: Vector3,
    pub gyro: Vector3,
    pub temperature: f32,
}

use crate::regs::{bits, Register};
use crate::scale::{AccelRange, ClockSource, Dlpf, GyroRange};

/// Settings applied by [`crate::Mpu6050::initialize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub clock_source: ClockSource,
    /// Sample rate = gyro output rate / (1 + divider)
    pub sample_rate_divider: u8,
    pub dlpf: Dlpf,
    pub gyro_range: GyroRange,
    pub accel_range: AccelRange,
    pub data_ready_interrupt: bool,
}

impl Default for Config {
    /// 200Hz samples through the 44Hz filter, +-2000dps, +-4g, PLL on the X gyro.
    fn default() -> Self {
        Self {
            clock_source: ClockSource::PllGyroX,
            sample_rate_divider: 4,
            dlpf: Dlpf::Bw44Hz,
            gyro_range: GyroRange::Dps2000,
            accel_range: AccelRange::G4,
            data_ready_interrupt: false,
        }
    }
}

impl Config {
    /// Register writes in the order they are issued. Writing `PWR_MGMT_1`
    /// first clears the sleep bit the device powers up with.
    pub fn init_values(&self) -> [(Register, u8); 6] {
        let int_enable = if self.data_ready_interrupt {
            bits::INT_DATA_RDY
        } else {
            0
        };

        [
            (Register::PwrMgmt1, self.clock_source.to_u8()),
            (Register::SmplrtDiv, self.sample_rate_divider),
            (Register::Config, self.dlpf.to_u8()),
            (Register::GyroConfig, self.gyro_range.to_register()),
            (Register::AccelConfig, self.accel_range.to_register()),
            (Register::IntEnable, int_enable),
        ]
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.dlpf.gyro_output_rate() / (1 + self.sample_rate_divider as u32)
    }
}

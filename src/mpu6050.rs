use embedded_hal::{
    delay::DelayNs,
    i2c::{Error as _, ErrorKind, I2c, SevenBitAddress},
};

use crate::config::Config;
use crate::error::Error;
use crate::regs::{bits, Register};
use crate::sample::{RawSample, Sample, SAMPLE_LEN};
use crate::scale::{AccelRange, ClockSource, Dlpf, GyroRange};
use crate::{ALT_DEVICE_ADDRESS, DEVICE_ADDRESS, WHO_AM_I_VALUE};

const POLL_INTERVAL_MS: u32 = 5;
const RESET_SETTLE_MS: u32 = 100; // Register map section 4.28, wait after DEVICE_RESET

/// Register access facade for one MPU-6050 on an I2C bus.
///
/// The bus is owned for the lifetime of the driver; pass `&mut bus` or a
/// shared-bus proxy to keep using it elsewhere. Calls block until the bus
/// driver finishes the transaction.
pub struct Mpu6050<T> {
    i2c: T,
    addr: u8,
    gyro_range: GyroRange,
    accel_range: AccelRange,
}

impl<T, E> Mpu6050<T>
where
    T: I2c<SevenBitAddress, Error = E>,
    E: embedded_hal::i2c::Error,
{
    pub fn new(i2c: T) -> Self {
        Self::new_with_address(i2c, false)
    }

    /// `alt_addr` selects 0x69, for boards that pull AD0 high.
    pub fn new_with_address(i2c: T, alt_addr: bool) -> Self {
        let addr = if alt_addr {
            ALT_DEVICE_ADDRESS
        } else {
            DEVICE_ADDRESS
        };

        Self {
            i2c,
            addr,
            gyro_range: GyroRange::default(),
            accel_range: AccelRange::default(),
        }
    }

    pub fn release(self) -> T {
        self.i2c
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Range used to scale gyro samples, as last configured through this driver.
    pub fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }

    pub fn accel_range(&self) -> AccelRange {
        self.accel_range
    }

    pub fn get_byte(&mut self, reg: Register) -> Result<u8, E> {
        let mut buf = [0_u8; 1];
        self.i2c.write_read(self.addr, &[reg.to_u8()], &mut buf)?;

        Ok(buf[0])
    }

    pub fn write_byte(&mut self, reg: Register, val: u8) -> Result<(), E> {
        log::trace!("write {:?} = {:#04x}", reg, val);
        self.i2c.write(self.addr, &[reg.to_u8(), val])
    }

    /// Reads `buf.len()` consecutive registers starting at `start` in a single
    /// transaction. The device advances its register pointer after every byte.
    /// An empty buffer issues no transaction.
    pub fn burst_read(&mut self, start: Register, buf: &mut [u8]) -> Result<(), E> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.write_read(self.addr, &[start.to_u8()], buf)
    }

    /// Replaces the bits selected by `mask` with those of `value`.
    pub fn modify_byte(&mut self, reg: Register, mask: u8, value: u8) -> Result<(), E> {
        let current = self.get_byte(reg)?;
        self.write_byte(reg, (current & !mask) | (value & mask))
    }

    pub fn who_am_i(&mut self) -> Result<u8, E> {
        self.get_byte(Register::WhoAmI)
    }

    /// Polls `WHO_AM_I` until the device answers or `timeout_ms` runs out.
    /// Useful right after power-up, before the first `initialize`. Only NACKs
    /// are retried, any other bus error is returned as is.
    pub fn wait_for_device<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timeout_ms: u32,
    ) -> Result<(), Error<E>> {
        let mut remaining_ms = timeout_ms;

        loop {
            match self.who_am_i() {
                Ok(WHO_AM_I_VALUE) => return Ok(()),
                Ok(id) => {
                    log::warn!("unexpected WHO_AM_I {:#04x} at {:#04x}", id, self.addr);
                    return Err(Error::WrongDevice(id));
                }
                Err(e) if !matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => {
                    return Err(Error::Inner(e));
                }
                Err(_) if remaining_ms >= POLL_INTERVAL_MS => {
                    delay.delay_ms(POLL_INTERVAL_MS);
                    remaining_ms -= POLL_INTERVAL_MS;
                }
                Err(_) => return Err(Error::Timeout),
            }
        }
    }

    /// Resets every register to its power-on value, then the sensor signal
    /// paths. The device is left asleep, call `initialize` afterwards.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), E> {
        log::debug!("resetting mpu6050 at {:#04x}", self.addr);

        self.write_byte(Register::PwrMgmt1, bits::PWR_MGMT_1_DEVICE_RESET)?;
        self.gyro_range = GyroRange::default();
        self.accel_range = AccelRange::default();
        delay.delay_ms(RESET_SETTLE_MS);

        self.write_byte(Register::SignalPathReset, bits::SIGNAL_PATH_RESET_ALL)?;
        delay.delay_ms(RESET_SETTLE_MS);

        Ok(())
    }

    /// Wakes the device and applies [`Config::default`].
    pub fn initialize(&mut self) -> Result<(), Error<E>> {
        self.initialize_with(&Config::default())
    }

    /// Writes every configuration register and reads it back. Stops at the
    /// first bus error or mismatch; registers after it keep their old values.
    /// A range is cached as soon as its register reads back correctly.
    pub fn initialize_with(&mut self, config: &Config) -> Result<(), Error<E>> {
        log::debug!("configuring mpu6050 at {:#04x}: {:?}", self.addr, config);

        for (register, write_val) in config.init_values() {
            self.write_byte(register, write_val).map_err(Error::Inner)?;
            let read_back = self.get_byte(register).map_err(Error::Inner)?;

            if write_val != read_back {
                log::warn!(
                    "{:?} read back {:#04x}, wrote {:#04x}",
                    register,
                    read_back,
                    write_val
                );
                return Err(Error::SetupInvalidRead {
                    register,
                    written: write_val,
                    read_back,
                });
            }

            match register {
                Register::GyroConfig => self.gyro_range = config.gyro_range,
                Register::AccelConfig => self.accel_range = config.accel_range,
                _ => {}
            }
        }

        Ok(())
    }

    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), E> {
        self.modify_byte(Register::GyroConfig, bits::FS_SEL, range.to_register())?;
        self.gyro_range = range;
        Ok(())
    }

    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), E> {
        self.modify_byte(Register::AccelConfig, bits::FS_SEL, range.to_register())?;
        self.accel_range = range;
        Ok(())
    }

    /// Re-reads both full-scale ranges from the device, e.g. after another
    /// master changed them. The cache is left alone if either read fails.
    pub fn refresh_ranges(&mut self) -> Result<(GyroRange, AccelRange), E> {
        let gyro_config = self.get_byte(Register::GyroConfig)?;
        let accel_config = self.get_byte(Register::AccelConfig)?;

        self.gyro_range = GyroRange::from_register(gyro_config);
        self.accel_range = AccelRange::from_register(accel_config);

        Ok((self.gyro_range, self.accel_range))
    }

    pub fn set_dlpf(&mut self, dlpf: Dlpf) -> Result<(), E> {
        self.modify_byte(Register::Config, bits::CONFIG_DLPF_CFG, dlpf.to_u8())
    }

    /// Sample rate = gyro output rate / (1 + divider)
    pub fn set_sample_rate_divider(&mut self, divider: u8) -> Result<(), E> {
        self.write_byte(Register::SmplrtDiv, divider)
    }

    pub fn set_clock_source(&mut self, source: ClockSource) -> Result<(), E> {
        self.modify_byte(Register::PwrMgmt1, bits::PWR_MGMT_1_CLKSEL, source.to_u8())
    }

    pub fn set_sleep(&mut self, sleep: bool) -> Result<(), E> {
        let value = if sleep { bits::PWR_MGMT_1_SLEEP } else { 0 };
        self.modify_byte(Register::PwrMgmt1, bits::PWR_MGMT_1_SLEEP, value)
    }

    /// Set when a new sample has been written to the data registers. Reading
    /// `INT_STATUS` clears it.
    pub fn data_ready(&mut self) -> Result<bool, E> {
        Ok(self.get_byte(Register::IntStatus)? & bits::INT_DATA_RDY != 0)
    }

    /// `sources` is a `FIFO_EN` mask selecting which outputs are queued.
    pub fn set_fifo_sources(&mut self, sources: u8) -> Result<(), E> {
        self.write_byte(Register::FifoEn, sources)
    }

    pub fn set_fifo_enabled(&mut self, enabled: bool) -> Result<(), E> {
        let value = if enabled { bits::USER_CTRL_FIFO_EN } else { 0 };
        self.modify_byte(Register::UserCtrl, bits::USER_CTRL_FIFO_EN, value)
    }

    /// The reset bit clears itself once the FIFO is empty.
    pub fn reset_fifo(&mut self) -> Result<(), E> {
        self.modify_byte(
            Register::UserCtrl,
            bits::USER_CTRL_FIFO_RESET,
            bits::USER_CTRL_FIFO_RESET,
        )
    }

    /// Number of bytes waiting in the FIFO.
    pub fn fifo_count(&mut self) -> Result<u16, E> {
        let mut buf = [0_u8; 2];
        self.burst_read(Register::FifoCountH, &mut buf)?;

        Ok(u16::from_be_bytes(buf))
    }

    /// Drains `buf.len()` bytes from the FIFO. `FIFO_R_W` does not advance the
    /// register pointer, so consecutive bytes come out of the queue in order.
    pub fn read_fifo(&mut self, buf: &mut [u8]) -> Result<(), E> {
        self.burst_read(Register::FifoRw, buf)
    }

    /// Accel, temperature and gyro outputs from one burst, so all seven values
    /// belong to the same sample.
    pub fn read_raw_sample(&mut self) -> Result<RawSample, E> {
        let mut buf = [0_u8; SAMPLE_LEN];
        self.burst_read(Register::AccelXoutH, &mut buf)?;

        Ok(RawSample::from_bytes(&buf))
    }

    /// Like `read_raw_sample`, scaled with the ranges this driver configured.
    pub fn read_sample(&mut self) -> Result<Sample, E> {
        let raw = self.read_raw_sample()?;

        Ok(raw.scaled(self.gyro_range, self.accel_range))
    }
}

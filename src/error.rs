use crate::regs::Register;

/// Failures of the multi-step operations. Single register accesses return the
/// bus error unchanged instead.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The device never answered within the power-on budget.
    Timeout,
    /// `WHO_AM_I` returned something other than an MPU-6050 id.
    WrongDevice(u8),
    /// A configuration register did not hold the value just written to it.
    SetupInvalidRead {
        register: Register,
        written: u8,
        read_back: u8,
    },
    Inner(E),
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Factory self test
    SelfTestX = 0x0D,
    SelfTestY = 0x0E,
    SelfTestZ = 0x0F,
    SelfTestA = 0x10,

    /// Configuration
    SmplrtDiv = 0x19,
    Config = 0x1A,
    GyroConfig = 0x1B,
    AccelConfig = 0x1C,
    MotThr = 0x1F,
    FifoEn = 0x23,

    /// Auxiliary I2C master
    I2cMstCtrl = 0x24,
    I2cSlv0Addr = 0x25,
    I2cSlv0Reg = 0x26,
    I2cSlv0Ctrl = 0x27,
    I2cSlv1Addr = 0x28,
    I2cSlv1Reg = 0x29,
    I2cSlv1Ctrl = 0x2A,
    I2cSlv2Addr = 0x2B,
    I2cSlv2Reg = 0x2C,
    I2cSlv2Ctrl = 0x2D,
    I2cSlv3Addr = 0x2E,
    I2cSlv3Reg = 0x2F,
    I2cSlv3Ctrl = 0x30,
    I2cSlv4Addr = 0x31,
    I2cSlv4Reg = 0x32,
    I2cSlv4Do = 0x33,
    I2cSlv4Ctrl = 0x34,
    I2cSlv4Di = 0x35,
    I2cMstStatus = 0x36,

    /// Interrupts
    IntPinCfg = 0x37,
    IntEnable = 0x38,
    IntStatus = 0x3A,

    /// Reading data
    /// Accel
    AccelXoutH = 0x3B,
    AccelXoutL = 0x3C,
    AccelYoutH = 0x3D,
    AccelYoutL = 0x3E,
    AccelZoutH = 0x3F,
    AccelZoutL = 0x40,

    /// Temperature
    TempOutH = 0x41,
    TempOutL = 0x42,

    /// Gyro
    GyroXoutH = 0x43,
    GyroXoutL = 0x44,
    GyroYoutH = 0x45,
    GyroYoutL = 0x46,
    GyroZoutH = 0x47,
    GyroZoutL = 0x48,

    /// External sensor data, filled by the auxiliary I2C master
    ExtSensData00 = 0x49,
    ExtSensData01 = 0x4A,
    ExtSensData02 = 0x4B,
    ExtSensData03 = 0x4C,
    ExtSensData04 = 0x4D,
    ExtSensData05 = 0x4E,
    ExtSensData06 = 0x4F,
    ExtSensData07 = 0x50,
    ExtSensData08 = 0x51,
    ExtSensData09 = 0x52,
    ExtSensData10 = 0x53,
    ExtSensData11 = 0x54,
    ExtSensData12 = 0x55,
    ExtSensData13 = 0x56,
    ExtSensData14 = 0x57,
    ExtSensData15 = 0x58,
    ExtSensData16 = 0x59,
    ExtSensData17 = 0x5A,
    ExtSensData18 = 0x5B,
    ExtSensData19 = 0x5C,
    ExtSensData20 = 0x5D,
    ExtSensData21 = 0x5E,
    ExtSensData22 = 0x5F,
    ExtSensData23 = 0x60,

    /// Auxiliary slave data out
    I2cSlv0Do = 0x63,
    I2cSlv1Do = 0x64,
    I2cSlv2Do = 0x65,
    I2cSlv3Do = 0x66,
    I2cMstDelayCtrl = 0x67,

    /// Control
    SignalPathReset = 0x68,
    MotDetectCtrl = 0x69,
    UserCtrl = 0x6A,
    PwrMgmt1 = 0x6B,
    PwrMgmt2 = 0x6C,

    /// FIFO
    FifoCountH = 0x72,
    FifoCountL = 0x73,
    FifoRw = 0x74,

    /// ID
    WhoAmI = 0x75,
}

impl Register {
    pub const fn to_u8(&self) -> u8 {
        *self as u8
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg.to_u8()
    }
}

/// Bit fields of the registers the driver touches.
pub mod bits {
    pub const PWR_MGMT_1_DEVICE_RESET: u8 = 0b1000_0000;
    pub const PWR_MGMT_1_SLEEP: u8 = 0b0100_0000;
    pub const PWR_MGMT_1_CLKSEL: u8 = 0b0000_0111;

    /// Resets the gyro, accel and temperature signal paths.
    pub const SIGNAL_PATH_RESET_ALL: u8 = 0b0000_0111;

    pub const CONFIG_DLPF_CFG: u8 = 0b0000_0111;

    /// FS_SEL / AFS_SEL field of GYRO_CONFIG and ACCEL_CONFIG
    pub const FS_SEL: u8 = 0b0001_1000;

    pub const INT_DATA_RDY: u8 = 0b0000_0001;

    pub const USER_CTRL_FIFO_EN: u8 = 0b0100_0000;
    pub const USER_CTRL_FIFO_RESET: u8 = 0b0000_0100;
}

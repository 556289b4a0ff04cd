use crate::regs::bits;
use crate::*;

/// Addresses as listed in the MPU-6000/6050 register map, revision 4.2.
const DATASHEET: [(Register, u8); 84] = [
    (Register::SelfTestX, 13),
    (Register::SelfTestY, 14),
    (Register::SelfTestZ, 15),
    (Register::SelfTestA, 16),
    (Register::SmplrtDiv, 25),
    (Register::Config, 26),
    (Register::GyroConfig, 27),
    (Register::AccelConfig, 28),
    (Register::MotThr, 31),
    (Register::FifoEn, 35),
    (Register::I2cMstCtrl, 36),
    (Register::I2cSlv0Addr, 37),
    (Register::I2cSlv0Reg, 38),
    (Register::I2cSlv0Ctrl, 39),
    (Register::I2cSlv1Addr, 40),
    (Register::I2cSlv1Reg, 41),
    (Register::I2cSlv1Ctrl, 42),
    (Register::I2cSlv2Addr, 43),
    (Register::I2cSlv2Reg, 44),
    (Register::I2cSlv2Ctrl, 45),
    (Register::I2cSlv3Addr, 46),
    (Register::I2cSlv3Reg, 47),
    (Register::I2cSlv3Ctrl, 48),
    (Register::I2cSlv4Addr, 49),
    (Register::I2cSlv4Reg, 50),
    (Register::I2cSlv4Do, 51),
    (Register::I2cSlv4Ctrl, 52),
    (Register::I2cSlv4Di, 53),
    (Register::I2cMstStatus, 54),
    (Register::IntPinCfg, 55),
    (Register::IntEnable, 56),
    (Register::IntStatus, 58),
    (Register::AccelXoutH, 59),
    (Register::AccelXoutL, 60),
    (Register::AccelYoutH, 61),
    (Register::AccelYoutL, 62),
    (Register::AccelZoutH, 63),
    (Register::AccelZoutL, 64),
    (Register::TempOutH, 65),
    (Register::TempOutL, 66),
    (Register::GyroXoutH, 67),
    (Register::GyroXoutL, 68),
    (Register::GyroYoutH, 69),
    (Register::GyroYoutL, 70),
    (Register::GyroZoutH, 71),
    (Register::GyroZoutL, 72),
    (Register::ExtSensData00, 73),
    (Register::ExtSensData01, 74),
    (Register::ExtSensData02, 75),
    (Register::ExtSensData03, 76),
    (Register::ExtSensData04, 77),
    (Register::ExtSensData05, 78),
    (Register::ExtSensData06, 79),
    (Register::ExtSensData07, 80),
    (Register::ExtSensData08, 81),
    (Register::ExtSensData09, 82),
    (Register::ExtSensData10, 83),
    (Register::ExtSensData11, 84),
    (Register::ExtSensData12, 85),
    (Register::ExtSensData13, 86),
    (Register::ExtSensData14, 87),
    (Register::ExtSensData15, 88),
    (Register::ExtSensData16, 89),
    (Register::ExtSensData17, 90),
    (Register::ExtSensData18, 91),
    (Register::ExtSensData19, 92),
    (Register::ExtSensData20, 93),
    (Register::ExtSensData21, 94),
    (Register::ExtSensData22, 95),
    (Register::ExtSensData23, 96),
    (Register::I2cSlv0Do, 99),
    (Register::I2cSlv1Do, 100),
    (Register::I2cSlv2Do, 101),
    (Register::I2cSlv3Do, 102),
    (Register::I2cMstDelayCtrl, 103),
    (Register::SignalPathReset, 104),
    (Register::MotDetectCtrl, 105),
    (Register::UserCtrl, 106),
    (Register::PwrMgmt1, 107),
    (Register::PwrMgmt2, 108),
    (Register::FifoCountH, 114),
    (Register::FifoCountL, 115),
    (Register::FifoRw, 116),
    (Register::WhoAmI, 117),
];

#[test]
fn register_addresses_match_datasheet() {
    for (reg, addr) in DATASHEET {
        assert_eq!(reg.to_u8(), addr, "{:?}", reg);
        assert_eq!(u8::from(reg), addr, "{:?}", reg);
    }
}

#[test]
fn register_addresses_are_unique() {
    for (i, (a, _)) in DATASHEET.iter().enumerate() {
        for (b, _) in &DATASHEET[i + 1..] {
            assert_ne!(a.to_u8(), b.to_u8(), "{:?} and {:?}", a, b);
        }
    }
}

#[test]
fn output_registers_are_contiguous() {
    // The sample burst relies on accel, temp and gyro sitting back to back.
    assert_eq!(Register::AccelXoutH.to_u8() + 6, Register::TempOutH.to_u8());
    assert_eq!(Register::TempOutH.to_u8() + 2, Register::GyroXoutH.to_u8());
    assert_eq!(
        Register::GyroZoutL.to_u8() - Register::AccelXoutH.to_u8() + 1,
        sample::SAMPLE_LEN as u8
    );
    assert_eq!(Register::FifoCountH.to_u8() + 1, Register::FifoCountL.to_u8());
}

#[test]
fn device_constants() {
    assert_eq!(DEVICE_ADDRESS, 0x68);
    assert_eq!(ALT_DEVICE_ADDRESS, 0x69);
    assert_eq!(WHO_AM_I_VALUE, 0x68);
    assert_eq!(bits::FS_SEL, 0x18);
    assert_eq!(bits::PWR_MGMT_1_SLEEP & bits::PWR_MGMT_1_CLKSEL, 0);
}

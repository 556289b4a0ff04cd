use crate::scale::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[test]
fn gyro_scale_is_reciprocal_of_sensitivity() {
    let pairs = [
        (GYRO_LSB_250, GYRO_LSB_250_SCALE),
        (GYRO_LSB_500, GYRO_LSB_500_SCALE),
        (GYRO_LSB_1000, GYRO_LSB_1000_SCALE),
        (GYRO_LSB_2000, GYRO_LSB_2000_SCALE),
    ];

    for (lsb, scale) in pairs {
        assert!(approx(scale, 1.0 / lsb, 1e-4), "{} != 1/{}", scale, lsb);
    }
}

#[test]
fn accel_scale_is_reciprocal_of_sensitivity() {
    let pairs = [
        (ACCEL_LSB_2, ACCEL_LSB_2_SCALE),
        (ACCEL_LSB_4, ACCEL_LSB_4_SCALE),
        (ACCEL_LSB_8, ACCEL_LSB_8_SCALE),
        (ACCEL_LSB_16, ACCEL_LSB_16_SCALE),
    ];

    for (lsb, scale) in pairs {
        assert!(approx(scale, 1.0 / lsb, 1e-9), "{} != 1/{}", scale, lsb);
        assert!(approx(scale * lsb, 1.0, 1e-6));
    }
}

#[test]
fn range_codes_match_datasheet() {
    assert_eq!(GyroRange::Dps250 as u8, 0);
    assert_eq!(GyroRange::Dps500 as u8, 1);
    assert_eq!(GyroRange::Dps1000 as u8, 2);
    assert_eq!(GyroRange::Dps2000 as u8, 3);

    assert_eq!(AccelRange::G2 as u8, 0);
    assert_eq!(AccelRange::G4 as u8, 1);
    assert_eq!(AccelRange::G8 as u8, 2);
    assert_eq!(AccelRange::G16 as u8, 3);

    assert_eq!(GyroRange::Dps2000.to_register(), 0x18);
    assert_eq!(AccelRange::G8.to_register(), 0x10);
}

#[test]
fn ranges_survive_config_register_round_trip() {
    let gyro = [
        GyroRange::Dps250,
        GyroRange::Dps500,
        GyroRange::Dps1000,
        GyroRange::Dps2000,
    ];
    for range in gyro {
        // Self-test bits set and a stray low bit must not confuse the decode.
        let reg = 0b1110_0001 | range.to_register();
        assert_eq!(GyroRange::from_register(reg), range);
        assert!(approx(range.scale() * range.lsb_per_unit(), 1.0, 1e-4));
    }

    let accel = [AccelRange::G2, AccelRange::G4, AccelRange::G8, AccelRange::G16];
    for range in accel {
        let reg = 0b1110_0111 | range.to_register();
        assert_eq!(AccelRange::from_register(reg), range);
        assert!(approx(range.scale() * range.lsb_per_unit(), 1.0, 1e-6));
    }
}

#[test]
fn dlpf_and_clock_codes() {
    assert_eq!(Dlpf::from_u8(0x03), Ok(Dlpf::Bw44Hz));
    assert_eq!(Dlpf::from_u8(0x07), Err(0x07));
    assert_eq!(Dlpf::Bw260Hz.gyro_output_rate(), 8_000);
    assert_eq!(Dlpf::Bw5Hz.gyro_output_rate(), 1_000);

    assert_eq!(ClockSource::from_u8(0x01), Ok(ClockSource::PllGyroX));
    assert_eq!(ClockSource::from_u8(0x07), Ok(ClockSource::Stopped));
    assert_eq!(ClockSource::from_u8(0x06), Err(0x06));
    assert_eq!(ClockSource::PllGyroZ.to_u8(), 0x03);
}

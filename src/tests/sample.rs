use crate::sample::SAMPLE_LEN;
use crate::*;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

const BLOCK: [u8; SAMPLE_LEN] = [
    0x20, 0x00, // accel x = 8192
    0xE0, 0x00, // accel y = -8192
    0x01, 0x00, // accel z = 256
    0xFD, 0xF7, // temp = -521
    0x00, 0xA4, // gyro x = 164
    0xFF, 0x5C, // gyro y = -164
    0x80, 0x00, // gyro z = i16::MIN
];

#[test]
fn raw_sample_decodes_big_endian_words() {
    let raw = RawSample::from_bytes(&BLOCK);

    assert_eq!(raw.accel, [8192, -8192, 256]);
    assert_eq!(raw.temp, -521);
    assert_eq!(raw.gyro, [164, -164, i16::MIN]);
}

#[test]
fn raw_sample_scales_with_selected_ranges() {
    let raw = RawSample::from_bytes(&BLOCK);
    let sample = raw.scaled(GyroRange::Dps2000, AccelRange::G4);

    assert!(approx(sample.accel.x, 1.0, 1e-6), "{}", sample.accel.x);
    assert!(approx(sample.accel.y, -1.0, 1e-6), "{}", sample.accel.y);
    assert!(approx(sample.accel.z, 0.03125, 1e-6), "{}", sample.accel.z);

    assert!(approx(sample.gyro.x, 10.0, 1e-2), "{}", sample.gyro.x);
    assert!(approx(sample.gyro.y, -10.0, 1e-2), "{}", sample.gyro.y);
    assert!(approx(sample.gyro.z, -1998.03, 0.1), "{}", sample.gyro.z);

    // -521 / 340 + 36.53
    assert!(approx(sample.temperature, 35.0, 1e-2), "{}", sample.temperature);
}

#[test]
fn same_raw_sample_differs_per_range() {
    let raw = RawSample {
        accel: [2048, 0, 0],
        temp: 0,
        gyro: [131, 0, 0],
    };

    let fine = raw.scaled(GyroRange::Dps250, AccelRange::G16);
    let coarse = raw.scaled(GyroRange::Dps2000, AccelRange::G2);

    assert!(approx(fine.gyro.x, 1.0, 1e-3));
    assert!(approx(fine.accel.x, 1.0, 1e-6));
    assert!(approx(coarse.accel.x, 0.125, 1e-6));
    assert!(coarse.gyro.x > fine.gyro.x);
    assert!(approx(fine.temperature, 36.53, 1e-6));
}

#[test]
fn vector_arithmetic() {
    let a = Vector3 { x: 1.0, y: 2.0, z: 3.0 };
    let b = Vector3 { x: 0.5, y: -1.0, z: 3.0 };

    assert_eq!(a + b, Vector3 { x: 1.5, y: 1.0, z: 6.0 });
    assert_eq!(a - b, Vector3 { x: 0.5, y: 3.0, z: 0.0 });

    let mut c = a;
    c.scale(0.5);
    assert_eq!(c, Vector3 { x: 0.5, y: 1.0, z: 1.5 });
}

mod support;

use crate::support::approx_eq;
use mechrs::conveyor::drive::{self, FRICTION_PAIRS, Slope};
use mechrs::conveyor::kinematics::{self, SpeedUnit};
use mechrs::conveyor::throughput;
use mechrs::errors::ValidationError;

#[test]
fn belt_speed_from_drum_speed() {
    // Ø200 drum at 30 rpm: v = π·0.2·30/60 ≈ 0.314 m/s
    let belt = kinematics::from_rpm(200.0, 30.0).unwrap();
    assert!(approx_eq(belt.circumference_m, 0.6283, 1e-4));
    assert!(approx_eq(belt.speed_ms, 0.31416, 1e-5));
    assert!(approx_eq(belt.speed_m_min, 18.8496, 1e-4));
    assert_eq!(belt.drum_rpm, 30.0);
}

#[test]
fn drum_speed_from_belt_speed_round_trips() {
    let forward = kinematics::from_rpm(200.0, 30.0).unwrap();
    let back =
        kinematics::from_speed(200.0, forward.speed_m_min, SpeedUnit::MetersPerMinute).unwrap();
    assert!(approx_eq(back.drum_rpm, 30.0, 1e-9));
    assert!(approx_eq(back.speed_ms, forward.speed_ms, 1e-9));
}

#[test]
fn speed_units_normalize() {
    let in_ms = kinematics::from_speed(200.0, 0.5, SpeedUnit::MetersPerSecond).unwrap();
    let in_m_min = kinematics::from_speed(200.0, 30.0, SpeedUnit::MetersPerMinute).unwrap();
    assert!(approx_eq(in_ms.drum_rpm, in_m_min.drum_rpm, 1e-9));
}

#[test]
fn kinematics_reject_bad_input() {
    assert_eq!(
        kinematics::from_rpm(0.0, 30.0),
        Err(ValidationError::NotPositive("drum diameter (mm)"))
    );
    assert_eq!(
        kinematics::from_speed(200.0, -1.0, SpeedUnit::MetersPerSecond),
        Err(ValidationError::NotPositive("belt speed"))
    );
}

#[test]
fn capacity_from_belt_speed() {
    // 200 mm product + 100 mm gap at 30 m/min: 100 products/min, 0.6 s apart
    let result = throughput::capacity_from_speed(200.0, 100.0, 30.0).unwrap();
    assert!(approx_eq(result.pitch_mm, 300.0, 1e-9));
    assert!(approx_eq(result.products_per_min, 100.0, 1e-9));
    assert!(approx_eq(result.spacing_s, 0.6, 1e-9));
}

#[test]
fn speed_for_target_capacity_inverts() {
    let result = throughput::speed_for_capacity(200.0, 100.0, 100.0).unwrap();
    assert!(approx_eq(result.speed_m_min, 30.0, 1e-9));

    let round_trip =
        throughput::capacity_from_speed(200.0, 100.0, result.speed_m_min).unwrap();
    assert!(approx_eq(round_trip.products_per_min, 100.0, 1e-9));
}

#[test]
fn butted_products_have_zero_gap_pitch() {
    let result = throughput::capacity_from_speed(250.0, 0.0, 25.0).unwrap();
    assert!(approx_eq(result.pitch_mm, 250.0, 1e-9));
    assert_eq!(
        throughput::capacity_from_speed(250.0, -1.0, 25.0),
        Err(ValidationError::Negative("product gap (mm)"))
    );
}

#[test]
fn drum_torque_from_sliding_friction() {
    // 100 kg dragged at μ = 0.25 over a Ø200 drum
    let result = drive::drum_torque(100.0, 200.0, 0.25).unwrap();
    assert!(approx_eq(result.tangential_force_n, 245.166, 1e-3));
    assert!(approx_eq(result.torque_nm, 24.5166, 1e-4));
    assert!(approx_eq(result.tangential_force_kgf(), 25.0, 1e-9));
    assert!(approx_eq(result.torque_kgf_m(), 2.5, 1e-9));
}

#[test]
fn horizontal_drive_power() {
    let result = drive::drive_power(
        100.0,
        0.25,
        Slope::Horizontal,
        0.5,
        SpeedUnit::MetersPerSecond,
        0.8,
    )
    .unwrap();
    assert!(approx_eq(result.tangential_force_n, 245.166, 1e-3));
    assert!(approx_eq(result.power_w, 153.229, 1e-3));
    assert!(approx_eq(result.power_kw(), 0.153229, 1e-6));
}

#[test]
fn inclined_drive_needs_the_gravity_share() {
    // θ = 30°: Ft = m·g·(μ·cos θ + sin θ)
    let inclined = drive::drive_power(
        100.0,
        0.25,
        Slope::Inclined { angle_deg: 30.0 },
        1.0,
        SpeedUnit::MetersPerSecond,
        1.0,
    )
    .unwrap();
    assert!(approx_eq(inclined.tangential_force_n, 702.65, 0.01));

    let horizontal = drive::drive_power(
        100.0,
        0.25,
        Slope::Horizontal,
        1.0,
        SpeedUnit::MetersPerSecond,
        1.0,
    )
    .unwrap();
    assert!(inclined.tangential_force_n > horizontal.tangential_force_n);
}

#[test]
fn drive_rejects_out_of_range_input() {
    assert_eq!(
        drive::drive_power(
            100.0,
            0.25,
            Slope::Inclined { angle_deg: 61.0 },
            1.0,
            SpeedUnit::MetersPerSecond,
            0.8,
        ),
        Err(ValidationError::OutOfRange {
            field: "incline angle (deg)",
            min: 0.0,
            max: 60.0,
        })
    );
    assert_eq!(
        drive::drive_power(
            100.0,
            0.25,
            Slope::Horizontal,
            1.0,
            SpeedUnit::MetersPerSecond,
            1.2,
        ),
        Err(ValidationError::OutOfRange {
            field: "drive efficiency η",
            min: 0.0,
            max: 1.0,
        })
    );
    assert!(matches!(
        drive::drive_power(
            100.0,
            0.25,
            Slope::Horizontal,
            1.0,
            SpeedUnit::MetersPerSecond,
            0.0,
        ),
        Err(ValidationError::NotPositive(_))
    ));
}

#[test]
fn friction_catalogue_is_plausible() {
    assert_eq!(FRICTION_PAIRS.len(), 12);
    for pair in FRICTION_PAIRS.iter() {
        assert!(pair.mu > 0.0 && pair.mu < 1.0, "{}", pair.label);
        assert!(!pair.label.is_empty());
    }
    // static grips at least as hard as sliding for the same pairing
    assert!(FRICTION_PAIRS[0].mu >= FRICTION_PAIRS[1].mu);
}

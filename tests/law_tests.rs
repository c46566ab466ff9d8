mod support;

use crate::support::approx_eq;
use mechrs::MotionLaw;
use mechrs::errors::ValidationError;
use mechrs::float_types::{FRAC_PI_2, PI};

#[test]
fn boundary_conditions() {
    // Every law must blend into the adjoining dwells: y(0)=0, y(1)=1,
    // zero boundary velocity on both ends.
    for law in MotionLaw::ALL {
        let start = law.evaluate(0.0);
        let end = law.evaluate(1.0);
        assert!(approx_eq(start.y, 0.0, 1e-9), "{law}: y(0) = {}", start.y);
        assert!(approx_eq(end.y, 1.0, 1e-9), "{law}: y(1) = {}", end.y);
        assert!(approx_eq(start.yp, 0.0, 1e-9), "{law}: y'(0) = {}", start.yp);
        assert!(approx_eq(end.yp, 0.0, 1e-9), "{law}: y'(1) = {}", end.yp);
    }
}

#[test]
fn phase_is_clamped() {
    for law in MotionLaw::ALL {
        assert_eq!(law.evaluate(-0.25), law.evaluate(0.0));
        assert_eq!(law.evaluate(1.25), law.evaluate(1.0));
    }
}

#[test]
fn harmonic_midpoint() {
    let mid = MotionLaw::Harmonic.evaluate(0.5);
    assert!(approx_eq(mid.y, 0.5, 1e-12));
    assert!(approx_eq(mid.yp, FRAC_PI_2, 1e-12));
    // cos(π/2) = 0: zero acceleration at the crossover
    assert!(approx_eq(mid.ypp, 0.0, 1e-9));
}

#[test]
fn cycloidal_midpoint() {
    let mid = MotionLaw::Cycloidal.evaluate(0.5);
    assert!(approx_eq(mid.y, 0.5, 1e-12));
    // y' = 1 − cos(π) = 2, the cycloidal peak velocity ratio
    assert!(approx_eq(mid.yp, 2.0, 1e-12));
}

#[test]
fn poly345_midpoint() {
    let mid = MotionLaw::Poly345.evaluate(0.5);
    assert!(approx_eq(mid.y, 0.5, 1e-12));
    assert!(approx_eq(mid.yp, 1.875, 1e-12));
    assert!(approx_eq(mid.ypp, 0.0, 1e-9));
}

#[test]
fn poly345_jerk_endpoints() {
    // y‴ = 60 − 360x + 360x²: finite boundary jerk is what distinguishes
    // 3-4-5 from cycloidal
    assert!(approx_eq(MotionLaw::Poly345.evaluate(0.0).yppp, 60.0, 1e-9));
    assert!(approx_eq(MotionLaw::Poly345.evaluate(1.0).yppp, 60.0, 1e-9));
}

#[test]
fn harmonic_peak_acceleration() {
    let start = MotionLaw::Harmonic.evaluate(0.0);
    assert!(approx_eq(start.ypp, 0.5 * PI * PI, 1e-9));
}

#[test]
fn selector_keys_round_trip() {
    for law in MotionLaw::ALL {
        assert_eq!(law.key().parse::<MotionLaw>().unwrap(), law);
    }
    assert_eq!(
        "trapezoidal".parse::<MotionLaw>(),
        Err(ValidationError::UnknownMotionLaw("trapezoidal".to_string()))
    );
}

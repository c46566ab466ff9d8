//! Angle-domain sampling of the follower motion.
//!
//! The rotation splits at t1 = δ1, t2 = δ1+β_r, t3 = δ1+β_r+δ2, t4 = 360°.
//! Within rise and return the chosen law is evaluated on the segment's phase
//! fraction and rescaled by the chain rule to time derivatives:
//!
//! ```text
//! s = H·y       v = (H·ω/β)·y′       a = (H·ω²/β²)·y″       j = (H·ω³/β³)·y‴
//! ```
//!
//! with β in radians and ω = 2π·rpm/60. Return mirrors rise: s = H·(1−y)
//! and v/a/j negated.

use super::{CamSpec, MotionSample};
use super::law::MotionLaw;
use crate::errors::ValidationError;
use crate::float_types::{DEG2RAD, Real};

/// Sample the follower motion over one full rotation.
///
/// Produces exactly `spec.samples` entries in ascending angle order, first
/// at 0°, last at 360°. Refuses to run when δ1 + β_r + β_f > 360°.
pub fn solve(spec: &CamSpec, law: MotionLaw) -> Result<Vec<MotionSample>, ValidationError> {
    spec.validate()?;

    let high_dwell = spec.high_dwell_deg();
    if high_dwell < 0.0 {
        return Err(ValidationError::AnglesExceedRotation {
            total: spec.dwell_low_deg + spec.rise_deg + spec.return_deg,
        });
    }

    let lift = spec.lift;
    let omega = spec.angular_velocity();
    let beta_r = spec.rise_deg * DEG2RAD;
    let beta_f = spec.return_deg * DEG2RAD;

    let t1 = spec.dwell_low_deg;
    let t2 = t1 + spec.rise_deg;
    let t3 = t2 + high_dwell;
    let t4 = 360.0;

    let count = spec.samples;
    let mut samples = Vec::with_capacity(count);

    for k in 0..count {
        let theta_deg = 360.0 * k as Real / (count - 1) as Real;
        let theta_rad = theta_deg * DEG2RAD;

        let mut s = 0.0;
        let mut v = 0.0;
        let mut a = 0.0;
        let mut j = 0.0;

        // Segment membership is (t_low, t_high]: a sample landing exactly on
        // a boundary belongs to the segment that ends there, so θ = t2 is
        // still rise (at full lift) and θ = t1 is still low dwell.
        if theta_deg > t1 && theta_deg <= t2 {
            // rise: 0 -> H
            let x = (theta_rad - t1 * DEG2RAD) / beta_r;
            let m = law.evaluate(x);
            s = lift * m.y;
            v = (lift * omega / beta_r) * m.yp;
            a = (lift * omega * omega / (beta_r * beta_r)) * m.ypp;
            j = (lift * omega * omega * omega / (beta_r * beta_r * beta_r)) * m.yppp;
        } else if theta_deg > t2 && theta_deg <= t3 {
            // high dwell: s = H
            s = lift;
        } else if theta_deg > t3 && theta_deg <= t4 {
            // return: H -> 0
            let x = (theta_rad - t3 * DEG2RAD) / beta_f;
            let m = law.evaluate(x);
            s = lift * (1.0 - m.y);
            v = -(lift * omega / beta_f) * m.yp;
            a = -(lift * omega * omega / (beta_f * beta_f)) * m.ypp;
            j = -(lift * omega * omega * omega / (beta_f * beta_f * beta_f)) * m.yppp;
        }
        // otherwise low dwell (θ ≤ t1, including θ = 0): everything stays 0

        samples.push(MotionSample {
            angle_deg: theta_deg,
            displacement: s,
            velocity: v,
            acceleration: a,
            jerk: j,
        });
    }

    Ok(samples)
}

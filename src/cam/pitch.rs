//! Roller-center (pitch) curve construction.

use super::{CamSpec, MotionSample};
use crate::float_types::{DEG2RAD, Real};
use geo::{Coord, LineString, coord};

/// Trace the pitch curve: the locus of the roller center as the cam turns.
///
/// Per sample the instantaneous pitch radius is R = Rb + s + Rr, and the
/// translating offset `e` shifts the follower travel line off the cam axis:
///
/// ```text
/// x = R·sin θ − e·cos θ
/// y = R·cos θ + e·sin θ
/// ```
///
/// The result has the same length and order as `samples`; with e = 0 this
/// reduces to a centered follower.
pub fn pitch_curve(samples: &[MotionSample], spec: &CamSpec) -> LineString<Real> {
    let coords: Vec<Coord<Real>> = samples
        .iter()
        .map(|sample| {
            let theta = sample.angle_deg * DEG2RAD;
            let radius = spec.base_radius + sample.displacement + spec.follower_radius;
            coord! {
                x: radius * theta.sin() - spec.offset * theta.cos(),
                y: radius * theta.cos() + spec.offset * theta.sin(),
            }
        })
        .collect();
    LineString::new(coords)
}

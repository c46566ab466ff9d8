//! Physical cam surface via normal-offset of the pitch curve.
//!
//! For a roller follower the manufactured surface lies exactly one roller
//! radius inside the pitch curve, measured along the local curve normal.
//! The normal here is a discrete estimate — central difference over the
//! neighbouring pitch points, rotated −90° — not an analytic offset curve.
//! Downstream consumers were tuned against this approximation, so it is
//! preserved as-is, including the exclusion of the two boundary samples
//! where no central difference exists.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use geo::{Coord, LineString, coord};
use nalgebra::Vector2;

/// Offset the pitch curve inward by `follower_radius`.
///
/// Produces one point per interior pitch point (len − 2) plus a closing
/// duplicate of the first output point so the outline renders closed.
///
/// A repeated pitch point leaves the tangent undefined; that input is
/// rejected rather than guessed around.
pub fn profile_curve(
    pitch: &LineString<Real>,
    follower_radius: Real,
) -> Result<LineString<Real>, ValidationError> {
    let points = &pitch.0;
    let interior = points.len().saturating_sub(2);
    let mut surface: Vec<Coord<Real>> = Vec::with_capacity(interior + 1);

    for i in 1..points.len().saturating_sub(1) {
        let tangent = Vector2::new(
            points[i + 1].x - points[i - 1].x,
            points[i + 1].y - points[i - 1].y,
        );
        let length = tangent.norm();
        if length <= tolerance() {
            return Err(ValidationError::DegeneratePitchPoint { index: i });
        }

        // unit normal: tangent rotated −90°, radially outward for a
        // clockwise-traced pitch curve
        let normal = Vector2::new(-tangent.y / length, tangent.x / length);

        surface.push(coord! {
            x: points[i].x - follower_radius * normal.x,
            y: points[i].y - follower_radius * normal.y,
        });
    }

    // close the outline
    if let Some(&first) = surface.first() {
        surface.push(first);
    }

    Ok(LineString::new(surface))
}

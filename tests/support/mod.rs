//! Test support library
//! Provides various helper functions & utilities for tests.

use mechrs::float_types::Real;

/// Compare two floats within an absolute tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Radius of a planar point from the origin.
#[allow(dead_code)]
pub fn radius(x: Real, y: Real) -> Real {
    x.hypot(y)
}

//! Normalized follower motion laws.
//!
//! A motion law maps the phase fraction x ∈ [0, 1] of a rise (or return)
//! segment to the lift fraction y ∈ [0, 1] and its first three derivatives
//! with respect to x:
//!
//! ```text
//! Harmonic:   y = ½ − ½·cos(πx)
//! Cycloidal:  y = x − sin(2πx)/2π
//! 3-4-5:      y = 10x³ − 15x⁴ + 6x⁵
//! ```
//!
//! All three satisfy y(0) = 0, y(1) = 1 and y′(0) = y′(1) = 0, so a segment
//! blends into the adjoining dwells with zero boundary velocity. Scaling to
//! physical units and to time derivatives happens in the caller
//! ([`kinematics`](crate::cam::kinematics)), not here.

use crate::errors::ValidationError;
use crate::float_types::{PI, Real, TAU};
use core::fmt;
use core::str::FromStr;

/// The dimensionless displacement profile used on rise and return segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionLaw {
    /// Simple harmonic motion. Good general-purpose choice; moderate jerk
    /// at high shaft speeds.
    Harmonic,
    /// Cycloidal motion. Smoothest of the three (finite jerk everywhere);
    /// preferred at high rotation speeds.
    Cycloidal,
    /// 3-4-5 polynomial. Industry standard with well-controlled transitions.
    Poly345,
}

/// Lift fraction and its derivatives with respect to the phase fraction x
/// (NOT with respect to time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LawEval {
    /// y(x), the lift fraction in [0, 1]
    pub y: Real,
    /// dy/dx
    pub yp: Real,
    /// d²y/dx²
    pub ypp: Real,
    /// d³y/dx³
    pub yppp: Real,
}

impl MotionLaw {
    /// Every law, in UI presentation order.
    pub const ALL: [MotionLaw; 3] = [MotionLaw::Harmonic, MotionLaw::Cycloidal, MotionLaw::Poly345];

    /// Evaluate the law at phase fraction `x`.
    ///
    /// `x` is clamped to [0, 1] first; segment boundaries computed upstream
    /// can overshoot by a few ulps and must not push the law outside its
    /// domain.
    pub fn evaluate(&self, x: Real) -> LawEval {
        let x = x.clamp(0.0, 1.0);
        match self {
            MotionLaw::Harmonic => LawEval {
                y: 0.5 - 0.5 * (PI * x).cos(),
                yp: 0.5 * PI * (PI * x).sin(),
                ypp: 0.5 * PI * PI * (PI * x).cos(),
                yppp: -0.5 * PI * PI * PI * (PI * x).sin(),
            },
            MotionLaw::Cycloidal => LawEval {
                y: x - (TAU * x).sin() / TAU,
                yp: 1.0 - (TAU * x).cos(),
                ypp: TAU * (TAU * x).sin(),
                yppp: TAU * TAU * (TAU * x).cos(),
            },
            MotionLaw::Poly345 => {
                let x2 = x * x;
                let x3 = x2 * x;
                let x4 = x3 * x;
                let x5 = x4 * x;
                LawEval {
                    y: 10.0 * x3 - 15.0 * x4 + 6.0 * x5,
                    yp: 30.0 * x2 - 60.0 * x3 + 30.0 * x4,
                    ypp: 60.0 * x - 180.0 * x2 + 120.0 * x3,
                    yppp: 60.0 - 360.0 * x + 360.0 * x2,
                }
            },
        }
    }

    /// Stable selector key, as used by form front-ends.
    pub const fn key(&self) -> &'static str {
        match self {
            MotionLaw::Harmonic => "harmonic",
            MotionLaw::Cycloidal => "cycloidal",
            MotionLaw::Poly345 => "poly345",
        }
    }

    /// One-line guidance shown next to the law selector.
    pub const fn guidance(&self) -> &'static str {
        match self {
            MotionLaw::Harmonic => {
                "Harmonic: simple and a good all-rounder. Jerk can be moderate at high speeds."
            },
            MotionLaw::Cycloidal => {
                "Cycloidal: best smoothness (lowest impact). Good for high rotation speeds."
            },
            MotionLaw::Poly345 => {
                "3-4-5 polynomial: industry standard, smooth and well-controlled transitions."
            },
        }
    }
}

impl fmt::Display for MotionLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MotionLaw {
    type Err = ValidationError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "harmonic" => Ok(MotionLaw::Harmonic),
            "cycloidal" => Ok(MotionLaw::Cycloidal),
            "poly345" => Ok(MotionLaw::Poly345),
            other => Err(ValidationError::UnknownMotionLaw(other.to_string())),
        }
    }
}

//! Validation errors

use crate::float_types::Real;

/// All the ways a calculator can refuse its input before producing output.
///
/// Every variant renders as a human-readable sentence suitable for direct
/// display by a form front-end; none of these abort anything beyond the
/// single computation that raised them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A numeric field did not parse as a decimal number.
    #[error("could not read \"{0}\" as a number")]
    MalformedNumber(String),
    /// A numeric field parsed but is NaN or infinite.
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    /// A strictly-positive field was zero or negative.
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    /// A non-negative field was negative.
    #[error("{0} must not be negative")]
    Negative(&'static str),
    /// A bounded field fell outside its working range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: Real,
        max: Real,
    },
    /// Fewer than two samples cannot span a rotation.
    #[error("at least 2 angle samples are required, got {0}")]
    TooFewSamples(usize),
    /// δ1 + rise + return left no room on the circle.
    #[error("dwell + rise + return angles exceed a full rotation: {total}° > 360°")]
    AnglesExceedRotation { total: Real },
    /// Two consecutive pitch points coincide, so no tangent can be estimated
    /// there and the profile offset is undefined.
    #[error("repeated pitch-curve point at sample {index}; cam profile cannot be offset")]
    DegeneratePitchPoint { index: usize },
    /// A torque sweep needs two distinct angles.
    #[error("start and end angles must differ")]
    EmptyAngleSweep,
    /// The motion-law selector did not match any known law.
    #[error("unknown motion law \"{0}\"")]
    UnknownMotionLaw(String),
    /// An air-consumption budget needs at least one cylinder row.
    #[error("add at least one cylinder before computing air consumption")]
    EmptyCylinderList,
}

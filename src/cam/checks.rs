//! Design-limit checks over a solved motion.
//!
//! Every check is an independent pure evaluation of the sample set; the
//! advisories are reported together and never block rendering.

use super::{CamSpec, MotionSample};
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::input::require_positive;
use std::fmt::Display;

/// User-set kinematic ceilings. The offset guideline is not user input; it
/// is the fixed rule 0.25·(Rb + H), see [`CamSpec::offset_limit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignLimits {
    /// Acceptable |a| ceiling (mm/s²)
    pub max_acceleration: Real,
    /// Acceptable |j| ceiling (mm/s³)
    pub max_jerk: Real,
}

impl DesignLimits {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive(self.max_acceleration, "acceleration limit (mm/s²)")?;
        require_positive(self.max_jerk, "jerk limit (mm/s³)")?;
        Ok(())
    }
}

/// Peak absolute values over all samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    /// max |v| (mm/s)
    pub velocity: Real,
    /// max |a| (mm/s²)
    pub acceleration: Real,
    /// max |j| (mm/s³)
    pub jerk: Real,
}

/// One triggered design warning. Advisory only.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// (HighAcceleration) a_max exceeds the user limit
    HighAcceleration { actual: Real, limit: Real },
    /// (HighJerk) j_max exceeds the user limit
    HighJerk { actual: Real, limit: Real },
    /// (OffsetOverGuideline) e > 0.25·(Rb+H)
    OffsetOverGuideline { offset: Real, limit: Real },
    /// (OffsetNearGuideline) e above 80 % of the guideline
    OffsetNearGuideline { offset: Real, limit: Real },
    /// (ShortRiseOrReturn) rise or return narrower than 60°
    ShortRiseOrReturn { rise_deg: Real, return_deg: Real },
}

impl Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::HighAcceleration { actual, limit } => write!(
                f,
                "High acceleration ({actual:.0} mm/s²) > limit ({limit:.0}). Risk of vibration, noise and wear."
            ),
            Advisory::HighJerk { actual, limit } => write!(
                f,
                "High jerk ({actual:.0} mm/s³) > limit ({limit:.0}). Risk of shocks, resonance excitation and hammering."
            ),
            Advisory::OffsetOverGuideline { offset, limit } => write!(
                f,
                "High offset: e = {offset:.1} mm > 0.25·(Rb+H) = {limit:.1} mm. Raises the pressure angle and the undercutting risk."
            ),
            Advisory::OffsetNearGuideline { offset, limit } => write!(
                f,
                "Offset near its guideline ({offset:.1} of {limit:.1} mm): review pressure angle and follower guide stiffness."
            ),
            Advisory::ShortRiseOrReturn {
                rise_deg,
                return_deg,
            } => write!(
                f,
                "Short rise/return ({rise_deg:.0}°/{return_deg:.0}°, < 60°) tends to raise v/a/j. Consider wider angles or lower rpm/lift."
            ),
        }
    }
}

/// The shared mitigation note attached to any non-empty advisory list.
pub const MITIGATIONS: &str = "Mitigations: increase β, reduce rpm, reduce H, \
    use cycloidal or 3-4-5, increase Rb, stiffen the drivetrain and remove play.";

/// Extrema plus triggered advisories for one solved motion.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignReport {
    pub extrema: Extrema,
    pub advisories: Vec<Advisory>,
}

impl DesignReport {
    /// True when no advisory fired.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Render every advisory plus the mitigation note, one per line.
    pub fn messages(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .advisories
            .iter()
            .map(|advisory| advisory.to_string())
            .collect();
        if !lines.is_empty() {
            lines.push(MITIGATIONS.to_string());
        }
        lines
    }
}

fn peak(samples: &[MotionSample], component: fn(&MotionSample) -> Real) -> Real {
    samples
        .iter()
        .map(|sample| component(sample).abs())
        .fold(0.0, Real::max)
}

/// Run every check. The checks are independent; several can fire at once.
pub fn evaluate(samples: &[MotionSample], spec: &CamSpec, limits: &DesignLimits) -> DesignReport {
    let extrema = Extrema {
        velocity: peak(samples, |s| s.velocity),
        acceleration: peak(samples, |s| s.acceleration),
        jerk: peak(samples, |s| s.jerk),
    };

    let mut advisories = Vec::new();

    if extrema.acceleration > limits.max_acceleration {
        advisories.push(Advisory::HighAcceleration {
            actual: extrema.acceleration,
            limit: limits.max_acceleration,
        });
    }
    if extrema.jerk > limits.max_jerk {
        advisories.push(Advisory::HighJerk {
            actual: extrema.jerk,
            limit: limits.max_jerk,
        });
    }

    let offset_limit = spec.offset_limit();
    let offset_share = if offset_limit > 0.0 {
        spec.offset / offset_limit
    } else {
        0.0
    };
    if spec.offset > offset_limit {
        advisories.push(Advisory::OffsetOverGuideline {
            offset: spec.offset,
            limit: offset_limit,
        });
    } else if offset_share > 0.8 {
        advisories.push(Advisory::OffsetNearGuideline {
            offset: spec.offset,
            limit: offset_limit,
        });
    }

    if spec.rise_deg < 60.0 || spec.return_deg < 60.0 {
        advisories.push(Advisory::ShortRiseOrReturn {
            rise_deg: spec.rise_deg,
            return_deg: spec.return_deg,
        });
    }

    if !advisories.is_empty() {
        tracing::debug!(count = advisories.len(), "design advisories triggered");
    }

    DesignReport { extrema, advisories }
}

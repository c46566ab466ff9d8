//! Cam profile synthesis for a translating roller follower.
//!
//! The pipeline is four pure stages over one immutable [`CamSpec`]:
//! [`kinematics::solve`] samples the follower motion over a full rotation,
//! [`pitch::pitch_curve`] traces the roller-center locus,
//! [`profile::profile_curve`] offsets it inward by the roller radius to get
//! the physical surface, and [`checks::evaluate`] raises design advisories.
//! [`synthesize`] chains all four.

pub mod checks;
pub mod kinematics;
pub mod law;
pub mod pitch;
pub mod profile;

pub use checks::{Advisory, DesignLimits, DesignReport, Extrema};
pub use law::{LawEval, MotionLaw};

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use crate::input::{require_finite, require_non_negative, require_positive};
use geo::LineString;

/// Geometric and kinematic description of one cam design.
///
/// Lengths in millimetres, angles in degrees. The four angular segments are
/// low dwell (δ1), rise (β_r), high dwell (δ2) and return (β_f); δ2 is never
/// given, it is whatever remains of the 360° rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct CamSpec {
    /// Total lift H (mm, > 0)
    pub lift: Real,
    /// Camshaft speed (rpm, > 0)
    pub shaft_rpm: Real,
    /// Low-dwell angle δ1 (deg, ≥ 0)
    pub dwell_low_deg: Real,
    /// Rise angle β_r (deg, > 0)
    pub rise_deg: Real,
    /// Return angle β_f (deg, > 0)
    pub return_deg: Real,
    /// Base-circle radius Rb (mm, > 0)
    pub base_radius: Real,
    /// Roller-follower radius Rr (mm, > 0)
    pub follower_radius: Real,
    /// Translating offset e of the follower travel line (mm, may be 0)
    pub offset: Real,
    /// Number of angle samples over the closed interval 0..=360° (≥ 2)
    pub samples: usize,
}

impl CamSpec {
    /// Check every field before any computation runs.
    ///
    /// Angular feasibility (δ1 + β_r + β_f ≤ 360°) is deliberately not part
    /// of this check; [`kinematics::solve`] reports it as its own condition.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive(self.lift, "lift H (mm)")?;
        require_positive(self.shaft_rpm, "camshaft speed (rpm)")?;
        require_non_negative(self.dwell_low_deg, "low dwell δ1 (deg)")?;
        require_positive(self.rise_deg, "rise angle β (deg)")?;
        require_positive(self.return_deg, "return angle β (deg)")?;
        require_positive(self.base_radius, "base radius Rb (mm)")?;
        require_positive(self.follower_radius, "roller radius Rr (mm)")?;
        require_finite(self.offset, "offset e (mm)")?;
        if self.samples < 2 {
            return Err(ValidationError::TooFewSamples(self.samples));
        }
        Ok(())
    }

    /// Computed high-dwell angle δ2 = 360° − (δ1 + β_r + β_f).
    /// Negative when the named segments overrun the rotation.
    pub fn high_dwell_deg(&self) -> Real {
        360.0 - (self.dwell_low_deg + self.rise_deg + self.return_deg)
    }

    /// Design guideline for the translating offset: e ≤ 0.25·(Rb + H).
    pub fn offset_limit(&self) -> Real {
        0.25 * (self.base_radius + self.lift)
    }

    /// Shaft angular velocity ω (rad/s).
    pub fn angular_velocity(&self) -> Real {
        TAU * self.shaft_rpm / 60.0
    }
}

/// Follower state at one cam angle.
///
/// Produced in ascending-angle order, one per sample, spanning the closed
/// interval 0..=360° with step 360/(N−1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Cam angle θ (deg)
    pub angle_deg: Real,
    /// Follower displacement s (mm)
    pub displacement: Real,
    /// Follower velocity v (mm/s)
    pub velocity: Real,
    /// Follower acceleration a (mm/s²)
    pub acceleration: Real,
    /// Follower jerk j (mm/s³)
    pub jerk: Real,
}

/// Everything one synthesis run produces.
///
/// Rebuilt from scratch on every call; two runs over the same spec and law
/// are bit-for-bit identical.
#[derive(Debug, Clone, PartialEq)]
pub struct CamSolution {
    /// The spec that produced this solution.
    pub spec: CamSpec,
    /// The motion law used on rise and return.
    pub law: MotionLaw,
    /// Follower motion over the full rotation, N samples.
    pub samples: Vec<MotionSample>,
    /// Roller-center locus, N points, aligned with `samples`.
    pub pitch: LineString<Real>,
    /// Physical cam surface: N−2 interior points plus a closing duplicate.
    pub profile: LineString<Real>,
    /// Computed high-dwell angle δ2 (deg).
    pub high_dwell_deg: Real,
    /// Extrema and advisories.
    pub report: DesignReport,
}

impl CamSolution {
    /// The human-readable summary block: δ2, extrema, offset vs guideline.
    pub fn summary(&self) -> String {
        let e = &self.report.extrema;
        format!(
            "Summary (0–360°)\n\
             computed high dwell δ2: {:.1}°\n\
             v_max ≈ {:.1} mm/s · a_max ≈ {:.0} mm/s² · j_max ≈ {:.0} mm/s³\n\
             offset e: {:.1} mm (guideline limit: {:.1} mm)",
            self.high_dwell_deg,
            e.velocity,
            e.acceleration,
            e.jerk,
            self.spec.offset,
            self.spec.offset_limit(),
        )
    }
}

/// Full synthesis: solve the motion, build both curves, run design checks.
///
/// This is the single entry point a "recalculate" action maps to. Input
/// validation and angular infeasibility abort before any geometry is built;
/// design advisories never abort anything.
pub fn synthesize(
    spec: &CamSpec,
    law: MotionLaw,
    limits: &DesignLimits,
) -> Result<CamSolution, ValidationError> {
    limits.validate()?;
    let samples = kinematics::solve(spec, law)?;
    let pitch = pitch::pitch_curve(&samples, spec);
    let profile = profile::profile_curve(&pitch, spec.follower_radius)?;
    let report = checks::evaluate(&samples, spec, limits);
    tracing::debug!(
        law = law.key(),
        samples = samples.len(),
        advisories = report.advisories.len(),
        "cam synthesis complete"
    );
    Ok(CamSolution {
        spec: spec.clone(),
        law,
        samples,
        pitch,
        profile,
        high_dwell_deg: spec.high_dwell_deg(),
        report,
    })
}

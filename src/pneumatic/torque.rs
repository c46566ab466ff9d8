//! Lever torque from a mounted cylinder.
//!
//! A cylinder pushing on a lever of length L delivers T(θ) = F·L·sin θ,
//! where θ is the angle between lever and cylinder axis. Sweeping θ over
//! the working arc exposes the worst (minimum) and best (maximum) points.

use super::force::{STANDARD_BORES, Stroke, interpolated_force};
use crate::errors::ValidationError;
use crate::float_types::{DEG2RAD, METER, Real, STANDARD_GRAVITY};
use crate::input::{require_finite, require_positive};

const SWEEP_STEPS: usize = 60;

/// How a desired torque is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorqueUnit {
    NewtonMeter,
    KgfMeter,
}

impl TorqueUnit {
    pub fn to_newton_meters(&self, value: Real) -> Real {
        match self {
            TorqueUnit::NewtonMeter => value,
            TorqueUnit::KgfMeter => value * STANDARD_GRAVITY,
        }
    }
}

/// Torque over a lever arc, plus its extremes in both quoted units.
#[derive(Debug, Clone, PartialEq)]
pub struct TorqueSweep {
    /// (angle °, torque N·m) pairs, inclusive of both arc ends.
    pub points: Vec<(Real, Real)>,
    pub min_nm: Real,
    pub max_nm: Real,
    pub min_kgf_m: Real,
    pub max_kgf_m: Real,
}

/// Sweep T(θ) = F·L·sin θ over `[start_deg, end_deg]` in 61 points.
pub fn torque_sweep(
    force_kgf: Real,
    lever_mm: Real,
    start_deg: Real,
    end_deg: Real,
) -> Result<TorqueSweep, ValidationError> {
    require_positive(force_kgf, "cylinder force (kgf)")?;
    require_positive(lever_mm, "lever length (mm)")?;
    require_finite(start_deg, "start angle (deg)")?;
    require_finite(end_deg, "end angle (deg)")?;
    if start_deg == end_deg {
        return Err(ValidationError::EmptyAngleSweep);
    }

    let force_n = force_kgf * STANDARD_GRAVITY;
    let lever_m = lever_mm / METER;

    let mut points = Vec::with_capacity(SWEEP_STEPS + 1);
    let mut min_nm = Real::INFINITY;
    let mut max_nm = Real::NEG_INFINITY;

    for i in 0..=SWEEP_STEPS {
        let t = i as Real / SWEEP_STEPS as Real;
        let angle_deg = start_deg + (end_deg - start_deg) * t;
        let torque = force_n * lever_m * (angle_deg * DEG2RAD).sin();

        min_nm = min_nm.min(torque);
        max_nm = max_nm.max(torque);
        points.push((angle_deg, torque));
    }

    Ok(TorqueSweep {
        points,
        min_nm,
        max_nm,
        min_kgf_m: min_nm / STANDARD_GRAVITY,
        max_kgf_m: max_nm / STANDARD_GRAVITY,
    })
}

/// Smallest standard bore whose peak lever torque at `pressure_bar` reaches
/// `target`, or `None` when even Ø320 falls short.
///
/// Peak torque assumes the best lever angle (sin θ = 1); margin for the
/// actual working arc is the caller's judgement.
pub fn recommend_bore(
    target: Real,
    unit: TorqueUnit,
    lever_mm: Real,
    pressure_bar: u32,
    stroke: Stroke,
) -> Result<Option<Real>, ValidationError> {
    require_positive(target, "desired torque")?;
    require_positive(lever_mm, "lever length (mm)")?;
    require_positive(pressure_bar as Real, "pressure (bar)")?;

    let target_nm = unit.to_newton_meters(target);
    let lever_m = lever_mm / METER;

    for &bore in STANDARD_BORES.iter() {
        let force_n = interpolated_force(bore, pressure_bar, stroke) * STANDARD_GRAVITY;
        if force_n * lever_m >= target_nm {
            return Ok(Some(bore));
        }
    }
    Ok(None)
}

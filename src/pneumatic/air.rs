//! Free-air consumption of a cylinder circuit.
//!
//! Compressed volume converts to free air ("normal litres") with the
//! absolute-pressure approximation NL = V[m³] · 1000 · (p_gauge + 1).

use crate::errors::ValidationError;
use crate::float_types::{PI, Real};
use crate::input::require_positive;

/// One double-acting cylinder row in the circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirCylinder {
    /// Piston bore Ø (mm)
    pub bore_mm: Real,
    /// Rod Ø (mm); unknown rods count as zero, which over-estimates the
    /// return chamber and stays conservative.
    pub rod_mm: Option<Real>,
    /// Stroke (mm)
    pub stroke_mm: Real,
    /// Complete cycles (extend + retract) per minute
    pub cycles_per_min: Real,
}

impl AirCylinder {
    fn validate(&self) -> Result<(), ValidationError> {
        require_positive(self.bore_mm, "bore Ø (mm)")?;
        if let Some(rod) = self.rod_mm {
            require_positive(rod, "rod Ø (mm)")?;
        }
        require_positive(self.stroke_mm, "stroke (mm)")?;
        require_positive(self.cycles_per_min, "cycles per minute")?;
        Ok(())
    }
}

/// Demand of a single cylinder at the circuit pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderDemand {
    pub extend_nl: Real,
    pub retract_nl: Real,
    pub per_cycle_nl: Real,
    pub per_minute_nl: Real,
}

/// Demand of the whole circuit. Per-row failures are kept in place so a
/// front-end can flag the offending row; valid rows still total up.
#[derive(Debug, Clone, PartialEq)]
pub struct AirBudget {
    pub cylinders: Vec<Result<CylinderDemand, ValidationError>>,
    /// Sum over valid rows (NL/min)
    pub total_nl_min: Real,
    /// Total after the line-loss factor
    pub with_losses_nl_min: Real,
    /// Total after loss factor and compressor margin
    pub with_margin_nl_min: Real,
}

fn chamber_volume_m3(bore_mm: Real, stroke_mm: Real) -> Real {
    let area_mm2 = PI * bore_mm * bore_mm / 4.0;
    area_mm2 * 1.0e-6 * (stroke_mm / 1000.0)
}

fn free_air_litres(volume_m3: Real, gauge_bar: Real) -> Real {
    volume_m3 * 1000.0 * (gauge_bar + 1.0)
}

fn cylinder_demand(row: &AirCylinder, gauge_bar: Real) -> Result<CylinderDemand, ValidationError> {
    row.validate()?;

    let full = chamber_volume_m3(row.bore_mm, row.stroke_mm);
    let rod = row
        .rod_mm
        .map(|rod| chamber_volume_m3(rod, row.stroke_mm))
        .unwrap_or(0.0);

    // extend fills the full bore, retract the annular chamber
    let extend_nl = free_air_litres(full, gauge_bar);
    let retract_nl = free_air_litres((full - rod).max(0.0), gauge_bar);
    let per_cycle_nl = extend_nl + retract_nl;

    Ok(CylinderDemand {
        extend_nl,
        retract_nl,
        per_cycle_nl,
        per_minute_nl: per_cycle_nl * row.cycles_per_min,
    })
}

/// Total the circuit at `gauge_bar`, then apply the loss factor (valves,
/// hoses, leaks) and the compressor sizing margin in that order.
pub fn air_budget(
    rows: &[AirCylinder],
    gauge_bar: Real,
    loss_factor: Real,
    compressor_margin: Real,
) -> Result<AirBudget, ValidationError> {
    if rows.is_empty() {
        return Err(ValidationError::EmptyCylinderList);
    }
    require_positive(gauge_bar, "circuit pressure (bar)")?;
    require_positive(loss_factor, "loss factor")?;
    require_positive(compressor_margin, "compressor margin")?;

    let cylinders: Vec<Result<CylinderDemand, ValidationError>> =
        rows.iter().map(|row| cylinder_demand(row, gauge_bar)).collect();

    let total_nl_min: Real = cylinders
        .iter()
        .filter_map(|demand| demand.as_ref().ok())
        .map(|demand| demand.per_minute_nl)
        .sum();

    let with_losses_nl_min = total_nl_min * loss_factor;
    let with_margin_nl_min = with_losses_nl_min * compressor_margin;

    Ok(AirBudget {
        cylinders,
        total_nl_min,
        with_losses_nl_min,
        with_margin_nl_min,
    })
}

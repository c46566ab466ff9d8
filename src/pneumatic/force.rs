//! Theoretical piston forces at working pressure.

use crate::float_types::{BAR, PI, Real, STANDARD_GRAVITY};

/// Standard bore series (mm), as catalogued.
pub const STANDARD_BORES: [Real; 16] = [
    10.0, 12.0, 16.0, 20.0, 25.0, 32.0, 40.0, 50.0, 63.0, 80.0, 100.0, 125.0, 160.0, 200.0,
    250.0, 320.0,
];

/// Gauge pressures (bar) shown in the force table.
pub const TABLE_PRESSURES: [u32; 9] = [2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Retract force as a share of extend force: the annular side loses the rod
/// cross-section, ≈ 12 % on typical rod/bore ratios.
pub const RETURN_FACTOR: Real = 0.88;

/// Which chamber is pressurized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Full-bore side, pushing the rod out.
    Extend,
    /// Annular side, pulling the rod in.
    Retract,
}

/// Catalogue port thread for a standard bore, `None` off-series.
pub fn port_thread(bore_mm: Real) -> Option<&'static str> {
    match bore_mm.round() as i64 {
        10 | 12 => Some("M5"),
        16 | 20 | 25 | 32 => Some("G1/8"),
        40 | 50 | 63 => Some("G1/4"),
        80 | 100 => Some("G3/8"),
        125 | 160 => Some("G1/2"),
        200 => Some("G3/4"),
        250 => Some("G1"),
        320 => Some("G1 1/4"),
        _ => None,
    }
}

/// Theoretical extend force (kgf): piston area × gauge pressure.
pub fn piston_force_kgf(bore_mm: Real, pressure_bar: Real) -> Real {
    let area_mm2 = PI * bore_mm * bore_mm / 4.0;
    let area_m2 = area_mm2 * 1.0e-6;
    let pressure_pa = pressure_bar * BAR;
    let force_n = pressure_pa * area_m2;
    force_n / STANDARD_GRAVITY
}

/// Force at an integer bar value, matching the published table: even bar
/// columns are computed directly, odd bar columns are interpolated between
/// their even neighbours.
pub fn interpolated_force(bore_mm: Real, pressure_bar: u32, stroke: Stroke) -> Real {
    if pressure_bar % 2 == 0 {
        let extend = piston_force_kgf(bore_mm, pressure_bar as Real);
        return match stroke {
            Stroke::Extend => extend,
            Stroke::Retract => extend * RETURN_FACTOR,
        };
    }

    let low = (pressure_bar - 1) as Real;
    let high = (pressure_bar + 1) as Real;

    let extend_low = piston_force_kgf(bore_mm, low);
    let extend_high = piston_force_kgf(bore_mm, high);

    let t = (pressure_bar as Real - low) / (high - low);
    let extend = extend_low + (extend_high - extend_low) * t;

    match stroke {
        Stroke::Extend => extend,
        Stroke::Retract => {
            let retract_low = extend_low * RETURN_FACTOR;
            let retract_high = extend_high * RETURN_FACTOR;
            retract_low + (retract_high - retract_low) * t
        },
    }
}

/// One bore × pressure table cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceCell {
    pub pressure_bar: u32,
    pub extend_kgf: Real,
    pub retract_kgf: Real,
}

/// One bore row: thread plus a cell per table pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceRow {
    pub bore_mm: Real,
    pub thread: Option<&'static str>,
    pub cells: Vec<ForceCell>,
}

/// The full catalogue force table, ready for a table-rendering front-end.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceTable {
    pub rows: Vec<ForceRow>,
}

impl ForceTable {
    /// Every standard bore × every table pressure, extend and retract.
    pub fn build() -> Self {
        let rows = STANDARD_BORES
            .iter()
            .map(|&bore| ForceRow {
                bore_mm: bore,
                thread: port_thread(bore),
                cells: TABLE_PRESSURES
                    .iter()
                    .map(|&pressure| ForceCell {
                        pressure_bar: pressure,
                        extend_kgf: interpolated_force(bore, pressure, Stroke::Extend),
                        retract_kgf: interpolated_force(bore, pressure, Stroke::Retract),
                    })
                    .collect(),
            })
            .collect();
        ForceTable { rows }
    }
}

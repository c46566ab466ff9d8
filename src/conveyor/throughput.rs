//! Product throughput on a spaced belt.
//!
//! Products of length L with gap G repeat every pitch p = L + G, so a belt
//! moving at v m/min carries v / p products per minute.

use crate::errors::ValidationError;
use crate::float_types::{METER, Real};
use crate::input::{require_non_negative, require_positive};

/// Pitch, speed, capacity and product spacing-in-time for one belt setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throughput {
    pub pitch_mm: Real,
    pub speed_m_min: Real,
    pub speed_ms: Real,
    pub products_per_min: Real,
    /// Time between consecutive products (s)
    pub spacing_s: Real,
}

fn pitch_m(product_len_mm: Real, gap_mm: Real) -> Result<Real, ValidationError> {
    require_positive(product_len_mm, "product length (mm)")?;
    require_non_negative(gap_mm, "product gap (mm)")?;
    Ok((product_len_mm + gap_mm) / METER)
}

/// Capacity reached at a given belt speed.
pub fn capacity_from_speed(
    product_len_mm: Real,
    gap_mm: Real,
    speed_m_min: Real,
) -> Result<Throughput, ValidationError> {
    let pitch = pitch_m(product_len_mm, gap_mm)?;
    require_positive(speed_m_min, "belt speed (m/min)")?;

    let products_per_min = speed_m_min / pitch;
    let speed_ms = speed_m_min / 60.0;

    Ok(Throughput {
        pitch_mm: pitch * METER,
        speed_m_min,
        speed_ms,
        products_per_min,
        spacing_s: pitch / speed_ms,
    })
}

/// Belt speed needed for a target capacity.
pub fn speed_for_capacity(
    product_len_mm: Real,
    gap_mm: Real,
    products_per_min: Real,
) -> Result<Throughput, ValidationError> {
    let pitch = pitch_m(product_len_mm, gap_mm)?;
    require_positive(products_per_min, "capacity (products/min)")?;

    let speed_m_min = products_per_min * pitch;
    let speed_ms = speed_m_min / 60.0;

    Ok(Throughput {
        pitch_mm: pitch * METER,
        speed_m_min,
        speed_ms,
        products_per_min,
        spacing_s: pitch / speed_ms,
    })
}

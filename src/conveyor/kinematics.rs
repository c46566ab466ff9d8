//! Drum/belt speed conversions.

use crate::errors::ValidationError;
use crate::float_types::{METER, PI, Real};
use crate::input::require_positive;

/// Unit a belt speed is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    MetersPerSecond,
    MetersPerMinute,
}

impl SpeedUnit {
    /// Normalize a quoted speed to m/s.
    pub fn to_meters_per_second(&self, value: Real) -> Real {
        match self {
            SpeedUnit::MetersPerSecond => value,
            SpeedUnit::MetersPerMinute => value / 60.0,
        }
    }
}

/// Drum speed, belt speed (both units) and drum circumference, whichever
/// direction the conversion ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltKinematics {
    pub speed_ms: Real,
    pub speed_m_min: Real,
    pub drum_rpm: Real,
    pub circumference_m: Real,
}

/// Belt speed from drum speed: v = π·D·n / 60.
pub fn from_rpm(drum_diameter_mm: Real, rpm: Real) -> Result<BeltKinematics, ValidationError> {
    require_positive(drum_diameter_mm, "drum diameter (mm)")?;
    require_positive(rpm, "drum speed (rpm)")?;

    let diameter_m = drum_diameter_mm / METER;
    let speed_ms = PI * diameter_m * rpm / 60.0;

    Ok(BeltKinematics {
        speed_ms,
        speed_m_min: speed_ms * 60.0,
        drum_rpm: rpm,
        circumference_m: PI * diameter_m,
    })
}

/// Drum speed from belt speed: n = 60·v / (π·D).
pub fn from_speed(
    drum_diameter_mm: Real,
    speed: Real,
    unit: SpeedUnit,
) -> Result<BeltKinematics, ValidationError> {
    require_positive(drum_diameter_mm, "drum diameter (mm)")?;
    require_positive(speed, "belt speed")?;

    let diameter_m = drum_diameter_mm / METER;
    let speed_ms = unit.to_meters_per_second(speed);
    let rpm = 60.0 * speed_ms / (PI * diameter_m);

    Ok(BeltKinematics {
        speed_ms,
        speed_m_min: speed_ms * 60.0,
        drum_rpm: rpm,
        circumference_m: PI * diameter_m,
    })
}

//! Drum torque and drive power against sliding friction.
//!
//! Simple slider-bed model: the belt drags the load over the bed, so the
//! drum must supply Ft = μ·m·g on the level, or
//! Ft = m·g·(μ·cos θ + sin θ) on an incline, and P = Ft·v / η at the shaft.

use super::kinematics::SpeedUnit;
use crate::errors::ValidationError;
use crate::float_types::{DEG2RAD, METER, Real, STANDARD_GRAVITY};
use crate::input::{require_in_range, require_positive};

/// A material pairing and its friction coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionPair {
    pub label: &'static str,
    pub mu: Real,
}

/// Catalogue of common bed/product pairings, static and sliding.
pub const FRICTION_PAIRS: [FrictionPair; 12] = [
    FrictionPair { label: "Steel on steel, static, dry", mu: 0.60 },
    FrictionPair { label: "Steel on steel, sliding, dry", mu: 0.50 },
    FrictionPair { label: "Steel on steel, static, lubricated", mu: 0.35 },
    FrictionPair { label: "Steel on steel, sliding, lubricated", mu: 0.25 },
    FrictionPair { label: "Wood on steel, static", mu: 0.75 },
    FrictionPair { label: "Wood on steel, sliding", mu: 0.60 },
    FrictionPair { label: "Wood on wood, static", mu: 0.75 },
    FrictionPair { label: "Wood on wood, sliding", mu: 0.50 },
    FrictionPair { label: "Plastic on steel, static", mu: 0.45 },
    FrictionPair { label: "Plastic on steel, sliding", mu: 0.25 },
    FrictionPair { label: "Steel on plastic, static", mu: 0.45 },
    FrictionPair { label: "Steel on plastic, sliding", mu: 0.35 },
];

/// Belt run orientation. Inclines are limited to 60°; past that the simple
/// friction model stops being meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Horizontal,
    Inclined { angle_deg: Real },
}

/// Tangential force and torque at the drive drum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrumTorque {
    pub tangential_force_n: Real,
    pub torque_nm: Real,
}

impl DrumTorque {
    pub fn tangential_force_kgf(&self) -> Real {
        self.tangential_force_n / STANDARD_GRAVITY
    }

    pub fn torque_kgf_m(&self) -> Real {
        self.torque_nm / STANDARD_GRAVITY
    }
}

/// Horizontal drag torque: Ft = μ·m·g, T = Ft·D/2.
pub fn drum_torque(
    mass_kg: Real,
    drum_diameter_mm: Real,
    mu: Real,
) -> Result<DrumTorque, ValidationError> {
    require_positive(mass_kg, "transported mass (kg)")?;
    require_positive(drum_diameter_mm, "drum diameter (mm)")?;
    require_positive(mu, "friction coefficient μ")?;

    let diameter_m = drum_diameter_mm / METER;
    let tangential_force_n = mu * mass_kg * STANDARD_GRAVITY;

    Ok(DrumTorque {
        tangential_force_n,
        torque_nm: tangential_force_n * diameter_m / 2.0,
    })
}

/// Shaft power for one belt run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrivePower {
    pub tangential_force_n: Real,
    pub speed_ms: Real,
    /// Shaft power after drive efficiency (W)
    pub power_w: Real,
}

impl DrivePower {
    pub fn power_kw(&self) -> Real {
        self.power_w / 1000.0
    }

    pub fn tangential_force_kgf(&self) -> Real {
        self.tangential_force_n / STANDARD_GRAVITY
    }
}

/// Shaft power P = Ft·v / η for a horizontal or inclined run.
pub fn drive_power(
    mass_kg: Real,
    mu: Real,
    slope: Slope,
    speed: Real,
    unit: SpeedUnit,
    efficiency: Real,
) -> Result<DrivePower, ValidationError> {
    require_positive(mass_kg, "transported mass (kg)")?;
    require_positive(mu, "friction coefficient μ")?;
    require_positive(speed, "belt speed")?;
    require_positive(efficiency, "drive efficiency η")?;
    require_in_range(efficiency, 0.0, 1.0, "drive efficiency η")?;

    let speed_ms = unit.to_meters_per_second(speed);

    let tangential_force_n = match slope {
        Slope::Horizontal => mu * mass_kg * STANDARD_GRAVITY,
        Slope::Inclined { angle_deg } => {
            require_in_range(angle_deg, 0.0, 60.0, "incline angle (deg)")?;
            let theta = angle_deg * DEG2RAD;
            mass_kg * STANDARD_GRAVITY * (mu * theta.cos() + theta.sin())
        },
    };

    Ok(DrivePower {
        tangential_force_n,
        speed_ms,
        power_w: tangential_force_n * speed_ms / efficiency,
    })
}

//! Pneumatic cylinder sizing.
//!
//! Theoretical piston forces over the standard bore series, lever torque
//! from a mounted cylinder, and free-air consumption for a whole circuit.
//! Forces are kgf (the unit catalogues quote), pressures are gauge bar.

pub mod air;
pub mod force;
pub mod torque;

pub use air::{AirBudget, AirCylinder, CylinderDemand, air_budget};
pub use force::{ForceCell, ForceRow, ForceTable, Stroke, interpolated_force, piston_force_kgf};
pub use torque::{TorqueSweep, TorqueUnit, recommend_bore, torque_sweep};

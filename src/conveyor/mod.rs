//! Belt-conveyor sizing.
//!
//! Drum/belt speed conversions, product throughput, and the drum torque and
//! drive power needed to drag a load over the bed by sliding friction.

pub mod drive;
pub mod kinematics;
pub mod throughput;

pub use drive::{DrivePower, DrumTorque, FRICTION_PAIRS, FrictionPair, Slope, drive_power, drum_torque};
pub use kinematics::{BeltKinematics, SpeedUnit};
pub use throughput::{Throughput, capacity_from_speed, speed_for_capacity};

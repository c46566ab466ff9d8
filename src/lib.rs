//! Machine-design calculators: **cam profile synthesis** with motion-law
//! kinematics, plus pneumatic-cylinder and belt-conveyor sizing.
//!
//! The core is the [cam] module: parametric motion laws (harmonic,
//! cycloidal, 3-4-5 polynomial), displacement/velocity/acceleration/jerk
//! over a full rotation, pitch-curve and normal-offset profile
//! reconstruction for a translating roller follower, and design-limit
//! advisories. [pneumatic] and [conveyor] carry the companion shop-floor
//! calculators. Everything recomputes from scratch per call — no state
//! survives between invocations.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: render the cam profile view (base circle, pitch curve,
//!   physical outline) with the [`svg`] crate
//! - **chart-io**: render the four kinematic charts with [`plotters`]
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod input;

pub mod cam;
pub mod conveyor;
pub mod pneumatic;

pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use cam::{CamSolution, CamSpec, DesignLimits, MotionLaw, MotionSample, synthesize};
pub use errors::ValidationError;

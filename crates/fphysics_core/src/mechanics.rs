//! Classical mechanics formulas.
//!
//! - **shm**: simple harmonic motion, pendulums and damping.
//! - **vibrations**: modal frequencies and single-degree-of-freedom responses.
//! - **lagrangian**: Lagrangians, Legendre transform and Hamilton's equations.
//! - **continuum**: 2D elasticity and strain tensors.

pub mod continuum;
pub mod lagrangian;
pub mod shm;
pub mod vibrations;

pub use continuum::Tensor2;
pub use lagrangian::DoublePendulum;
pub use vibrations::{Geometry, InitialConditions, Material};

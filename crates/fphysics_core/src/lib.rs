/// The `fphysics_core` crate collects small, self-contained physics and
/// mathematics routines behind plain functions and serde-friendly types.
///
/// Key components:
/// - **Traits**: `Scalar` lets formulas run on `f64` or on dual numbers.
/// - **Autodiff**: forward-mode `Dual` numbers used to derive momenta, forces and Hamiltonians.
/// - **Theories**: Cardano's cubic roots and Born-rule measurement collapse.
/// - **Number theory**: Goldbach decompositions, subset sums and p-adic expansions.
/// - **Mechanics**: harmonic motion, vibrations, Lagrangian mechanics and continuum strain/stress.
/// - **Quantum / Nuclear**: energy levels, operators, decay and binding energies.
pub mod autodiff;
pub mod calculators;
pub mod constants;
pub mod mechanics;
pub mod nuclear;
pub mod number_theory;
pub mod quantum;
pub mod theories;
pub mod traits;

//! Physical constants (SI units unless noted).
//!
//! Exact values follow the 2019 SI redefinition; measured values are CODATA 2018.

pub use std::f64::consts::PI;

/// Newtonian constant of gravitation, m³·kg⁻¹·s⁻²
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Speed of light in vacuum, m/s (exact)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Planck constant, J·s (exact)
pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

/// Reduced Planck constant ħ = h/2π, J·s
pub const REDUCED_PLANCK_CONSTANT: f64 = PLANCK_CONSTANT / (2.0 * PI);

/// Elementary charge, C (exact)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Coulomb constant k = 1/(4πε₀), N·m²·C⁻²
pub const COULOMB_CONSTANT: f64 = 8.987_551_792_3e9;

/// Boltzmann constant, J/K (exact)
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

/// Electron rest mass, kg
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Proton rest mass, kg
pub const PROTON_MASS: f64 = 1.672_621_923_69e-27;

/// Neutron rest mass, kg
pub const NEUTRON_MASS: f64 = 1.674_927_498_04e-27;

/// Unified atomic mass unit, kg
pub const ATOMIC_MASS_UNIT: f64 = 1.660_539_066_60e-27;

/// Energy equivalent of one atomic mass unit, MeV
pub const ATOMIC_MASS_UNIT_MEV: f64 = 931.494_102_42;

/// Proton mass, u
pub const PROTON_MASS_U: f64 = 1.007_276_466_621;

/// Neutron mass, u
pub const NEUTRON_MASS_U: f64 = 1.008_664_915_95;

/// Hydrogen atom (proton + electron) mass, u
pub const HYDROGEN_MASS_U: f64 = 1.007_825_032_07;

/// Standard acceleration of gravity, m/s² (exact)
pub const EARTH_GRAVITY: f64 = 9.806_65;

/// Rydberg unit of energy, eV
pub const RYDBERG_ENERGY_EV: f64 = 13.605_693_122_994;

/// Joules per thermochemical calorie (exact)
pub const CALORIE_TO_JOULE: f64 = 4.184;

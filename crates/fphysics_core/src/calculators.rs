//! Everyday physics calculators and unit conversions.

use anyhow::{bail, Result};

use crate::constants::{CALORIE_TO_JOULE, COULOMB_CONSTANT, GRAVITATIONAL_CONSTANT};

/// F = G·m₁·m₂/r²
pub fn gravitational_force(mass1: f64, mass2: f64, distance: f64) -> Result<f64> {
    if distance == 0.0 {
        bail!("Distance between masses must be non-zero.");
    }
    Ok(GRAVITATIONAL_CONSTANT * mass1 * mass2 / distance.powi(2))
}

/// F = k·q₁·q₂/r²; positive values are repulsive.
pub fn coulomb_force(charge1: f64, charge2: f64, distance: f64) -> Result<f64> {
    if distance == 0.0 {
        bail!("Distance between charges must be non-zero.");
    }
    Ok(COULOMB_CONSTANT * charge1 * charge2 / distance.powi(2))
}

/// ½·m·v²
pub fn kinetic_energy(mass: f64, velocity: f64) -> f64 {
    0.5 * mass * velocity.powi(2)
}

pub fn joules_to_calories(joules: f64) -> f64 {
    joules / CALORIE_TO_JOULE
}

pub fn calories_to_joules(calories: f64) -> f64 {
    calories * CALORIE_TO_JOULE
}

pub fn meters_to_kilometers(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn kilometers_to_meters(kilometers: f64) -> f64 {
    kilometers * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ELEMENTARY_CHARGE;

    #[test]
    fn earth_moon_attraction() {
        let force = gravitational_force(5.972e24, 7.348e22, 3.844e8).expect("non-zero distance");
        assert!((force / 1.982e20 - 1.0).abs() < 1e-3, "got {force}");
        assert!(gravitational_force(1.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn coulomb_sign_and_zero_distance() {
        let e = ELEMENTARY_CHARGE;
        let attract = coulomb_force(e, -e, 5.29e-11).expect("non-zero distance");
        assert!(attract < 0.0);
        assert!((attract.abs() / 8.24e-8 - 1.0).abs() < 1e-2);
        let err = coulomb_force(e, e, 0.0).expect_err("zero distance");
        assert!(format!("{err}").contains("non-zero"));
    }

    #[test]
    fn energy_and_conversions() {
        assert_eq!(kinetic_energy(2.0, 3.0), 9.0);
        assert!((joules_to_calories(4184.0) - 1000.0).abs() < 1e-9);
        assert!((calories_to_joules(joules_to_calories(50.0)) - 50.0).abs() < 1e-12);
        assert_eq!(meters_to_kilometers(1500.0), 1.5);
        assert_eq!(kilometers_to_meters(1.5), 1500.0);
    }
}

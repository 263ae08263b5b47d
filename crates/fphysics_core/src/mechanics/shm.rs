//! Simple harmonic motion: kinematics, periods and damping.

use anyhow::{bail, Result};

use crate::constants::PI;
use crate::traits::Scalar;

/// x(t) = A·cos(ωt + φ)
pub fn position<T: Scalar>(amplitude: T, angular_frequency: T, time: T, phase: T) -> T {
    amplitude * (angular_frequency * time + phase).cos()
}

/// v(t) = −A·ω·sin(ωt + φ)
pub fn velocity<T: Scalar>(amplitude: T, angular_frequency: T, time: T, phase: T) -> T {
    -amplitude * angular_frequency * (angular_frequency * time + phase).sin()
}

/// a(t) = −A·ω²·cos(ωt + φ)
pub fn acceleration<T: Scalar>(amplitude: T, angular_frequency: T, time: T, phase: T) -> T {
    -amplitude * angular_frequency * angular_frequency * (angular_frequency * time + phase).cos()
}

pub fn angular_frequency_spring_mass(spring_constant: f64, mass: f64) -> f64 {
    (spring_constant / mass).sqrt()
}

pub fn period_spring_mass(spring_constant: f64, mass: f64) -> f64 {
    2.0 * PI * (mass / spring_constant).sqrt()
}

pub fn angular_frequency_pendulum(length: f64, gravity: f64) -> f64 {
    (gravity / length).sqrt()
}

pub fn period_pendulum(length: f64, gravity: f64) -> f64 {
    2.0 * PI * (length / gravity).sqrt()
}

/// T = 2π·√(I / (m·g·d)), d being the pivot-to-centre-of-mass distance.
pub fn period_physical_pendulum(
    moment_of_inertia: f64,
    mass: f64,
    distance: f64,
    gravity: f64,
) -> f64 {
    2.0 * PI * (moment_of_inertia / (mass * gravity * distance)).sqrt()
}

/// E = ½·m·ω²·A²
pub fn energy(mass: f64, angular_frequency: f64, amplitude: f64) -> f64 {
    0.5 * mass * angular_frequency.powi(2) * amplitude.powi(2)
}

/// A(t) = A₀·e^(−βt)
pub fn damped_amplitude(initial_amplitude: f64, damping_coefficient: f64, time: f64) -> f64 {
    initial_amplitude * (-damping_coefficient * time).exp()
}

/// ω_d = √(ω₀² − β²); only defined for underdamped motion.
pub fn damped_angular_frequency(natural_frequency: f64, damping_coefficient: f64) -> Result<f64> {
    let squared = natural_frequency.powi(2) - damping_coefficient.powi(2);
    if squared < 0.0 {
        bail!(
            "Motion is overdamped (β = {} > ω₀ = {}); no oscillation frequency.",
            damping_coefficient,
            natural_frequency
        );
    }
    Ok(squared.sqrt())
}

pub fn quality_factor(natural_frequency: f64, damping_coefficient: f64) -> f64 {
    natural_frequency / (2.0 * damping_coefficient)
}

/// Driven amplitude near resonance: F / √(β² + Δω²).
pub fn resonance_amplitude(
    driving_amplitude: f64,
    damping_coefficient: f64,
    frequency_difference: f64,
) -> f64 {
    driving_amplitude / damping_coefficient.hypot(frequency_difference)
}

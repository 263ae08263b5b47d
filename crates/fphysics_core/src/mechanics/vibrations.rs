//! Modal vibration of a uniform member and single-degree-of-freedom responses.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::constants::PI;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    pub elastic_modulus: f64,
    pub density: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geometry {
    pub length: f64,
}

/// Amplitude and phase of a free oscillation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InitialConditions {
    pub amplitude: f64,
    pub phase: f64,
}

/// f_n = (nπ/L)²·√(E/ρ) for n = 1..=num_modes.
pub fn natural_frequencies(num_modes: usize, material: Material, geometry: Geometry) -> Vec<f64> {
    let stiffness = (material.elastic_modulus / material.density).sqrt();
    (1..=num_modes)
        .map(|n| (n as f64 * PI / geometry.length).powi(2) * stiffness)
        .collect()
}

/// sin(nπx/L) for n = 1..=num_modes.
pub fn mode_shapes(num_modes: usize, geometry: Geometry, position: f64) -> Vec<f64> {
    (1..=num_modes)
        .map(|n| (n as f64 * PI * position / geometry.length).sin())
        .collect()
}

pub fn damping_ratio(critical_damping: f64, actual_damping: f64) -> f64 {
    actual_damping / critical_damping
}

pub fn quality_factor_from_damping(damping_ratio: f64) -> f64 {
    1.0 / (2.0 * damping_ratio)
}

/// c_c = 2·√(m·k)
pub fn critical_damping_coefficient(mass: f64, stiffness: f64) -> f64 {
    2.0 * (mass * stiffness).sqrt()
}

pub fn natural_response(frequency: f64, initial: InitialConditions, time: f64) -> f64 {
    initial.amplitude * (frequency * time + initial.phase).sin()
}

/// A·e^(−ζωt)·sin(ω√(1−ζ²)·t + φ); requires ζ < 1.
pub fn damped_response(
    frequency: f64,
    damping_ratio: f64,
    initial: InitialConditions,
    time: f64,
) -> Result<f64> {
    if !(0.0..1.0).contains(&damping_ratio) {
        bail!(
            "Damping ratio must lie in [0, 1) for an oscillating response (got {}).",
            damping_ratio
        );
    }
    let damped_freq = frequency * (1.0 - damping_ratio.powi(2)).sqrt();
    Ok(initial.amplitude
        * (-damping_ratio * frequency * time).exp()
        * (damped_freq * time + initial.phase).sin())
}

/// Steady forced response F·(ωₙ/m) / √((ωₙ² − ω²)² + (2ζωₙω)²) · sin(ωt).
pub fn forced_response(
    forcing_frequency: f64,
    natural_frequency: f64,
    damping_ratio: f64,
    force_amplitude: f64,
    mass: f64,
    time: f64,
) -> f64 {
    let denom = (natural_frequency.powi(2) - forcing_frequency.powi(2)).powi(2)
        + (2.0 * damping_ratio * natural_frequency * forcing_frequency).powi(2);
    let amplitude = force_amplitude * (natural_frequency / mass) / denom.sqrt();
    amplitude * (forcing_frequency * time).sin()
}

pub fn transient_response(
    natural_frequency: f64,
    damping_ratio: f64,
    initial: InitialConditions,
    time: f64,
) -> Result<f64> {
    damped_response(natural_frequency, damping_ratio, initial, time)
}

pub fn steady_state_response(amplitude_ratio: f64, forcing_frequency: f64, time: f64) -> f64 {
    amplitude_ratio * (forcing_frequency * time).sin()
}

pub fn combined_response(
    natural_frequency: f64,
    damping_ratio: f64,
    initial: InitialConditions,
    forcing_amplitude: f64,
    forcing_frequency: f64,
    time: f64,
) -> Result<f64> {
    let transient = transient_response(natural_frequency, damping_ratio, initial, time)?;
    let steady = steady_state_response(forcing_amplitude, forcing_frequency, time);
    Ok(transient + steady)
}

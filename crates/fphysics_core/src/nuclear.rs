//! Nuclear physics: radioactive decay, binding energies and reaction energetics.
//!
//! Masses are in unified atomic mass units (u) and energies in MeV unless a
//! function says otherwise.

use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ATOMIC_MASS_UNIT_MEV, HYDROGEN_MASS_U, NEUTRON_MASS_U, SPEED_OF_LIGHT,
};

/// N(t) = N₀·e^(−λt)
pub fn radioactive_decay(initial: f64, decay_constant: f64, time: f64) -> f64 {
    initial * (-decay_constant * time).exp()
}

/// λ = ln 2 / T½
pub fn decay_constant(half_life: f64) -> Result<f64> {
    if half_life <= 0.0 {
        bail!("Half-life must be positive (got {}).", half_life);
    }
    Ok(std::f64::consts::LN_2 / half_life)
}

/// T½ = ln 2 / λ
pub fn half_life(decay_constant: f64) -> Result<f64> {
    if decay_constant <= 0.0 {
        bail!("Decay constant must be positive (got {}).", decay_constant);
    }
    Ok(std::f64::consts::LN_2 / decay_constant)
}

/// A = λN
pub fn activity(decay_constant: f64, nuclei: f64) -> f64 {
    decay_constant * nuclei
}

/// Daughter population of a parent → daughter → … chain starting from a pure
/// parent sample (two-member Bateman solution).
pub fn daughter_population(
    parent_initial: f64,
    parent_constant: f64,
    daughter_constant: f64,
    time: f64,
) -> Result<f64> {
    let gap = daughter_constant - parent_constant;
    if gap.abs() < f64::EPSILON * parent_constant.abs().max(1.0) {
        bail!("Bateman solution needs distinct decay constants.");
    }
    Ok(parent_initial * parent_constant / gap
        * ((-parent_constant * time).exp() - (-daughter_constant * time).exp()))
}

/// Δm = Z·m_H + N·m_n − M_atom, in u.
pub fn mass_defect(protons: u32, neutrons: u32, atomic_mass: f64) -> f64 {
    protons as f64 * HYDROGEN_MASS_U + neutrons as f64 * NEUTRON_MASS_U - atomic_mass
}

/// B = Δm·931.494 MeV/u
pub fn binding_energy(protons: u32, neutrons: u32, atomic_mass: f64) -> f64 {
    mass_defect(protons, neutrons, atomic_mass) * ATOMIC_MASS_UNIT_MEV
}

/// Coefficients of the liquid-drop model, MeV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidDrop {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

impl Default for LiquidDrop {
    fn default() -> Self {
        Self {
            volume: 15.75,
            surface: 17.8,
            coulomb: 0.711,
            asymmetry: 23.7,
            pairing: 11.18,
        }
    }
}

impl LiquidDrop {
    /// Weizsäcker binding energy of a nucleus with `mass_number` nucleons and
    /// `protons` protons. Pairing is +δ for even-even, −δ for odd-odd, 0 otherwise.
    pub fn binding_energy(&self, mass_number: u32, protons: u32) -> Result<f64> {
        if mass_number == 0 || protons > mass_number {
            bail!(
                "Invalid nucleus: A = {}, Z = {}.",
                mass_number,
                protons
            );
        }
        let a = mass_number as f64;
        let z = protons as f64;
        let neutrons = mass_number - protons;

        let volume = self.volume * a;
        let surface = self.surface * a.powf(2.0 / 3.0);
        let coulomb = self.coulomb * z * (z - 1.0) / a.cbrt();
        let asymmetry = self.asymmetry * (a - 2.0 * z).powi(2) / a;
        let delta = self.pairing / a.sqrt();
        let pairing = match (protons % 2, neutrons % 2) {
            (0, 0) => delta,
            (1, 1) => -delta,
            _ => 0.0,
        };
        debug!(
            "SEMF A={} Z={}: volume={:.3} surface={:.3} coulomb={:.3} asymmetry={:.3} pairing={:.3}",
            mass_number, protons, volume, surface, coulomb, asymmetry, pairing
        );
        Ok(volume - surface - coulomb - asymmetry + pairing)
    }
}

pub fn semi_empirical_mass_formula(mass_number: u32, protons: u32) -> Result<f64> {
    LiquidDrop::default().binding_energy(mass_number, protons)
}

/// S_n = B(A, Z) − B(A−1, Z), using the liquid-drop model.
pub fn neutron_separation_energy(mass_number: u32, protons: u32) -> Result<f64> {
    if mass_number <= protons {
        bail!("Nucleus has no neutron to remove.");
    }
    let model = LiquidDrop::default();
    Ok(model.binding_energy(mass_number, protons)?
        - model.binding_energy(mass_number - 1, protons)?)
}

/// Q = (Σm_reactants − Σm_products)·931.494; positive Q is exothermic.
pub fn reaction_q_value(reactants: &[f64], products: &[f64]) -> f64 {
    let before: f64 = reactants.iter().sum();
    let after: f64 = products.iter().sum();
    (before - after) * ATOMIC_MASS_UNIT_MEV
}

/// Energy released when a nucleus of mass `compound_mass` splits into
/// `fragment_masses` (free neutrons included), MeV.
pub fn fission_energy(compound_mass: f64, fragment_masses: &[f64]) -> Result<f64> {
    if fragment_masses.len() < 2 {
        bail!(
            "Fission needs at least two fragments (got {}).",
            fragment_masses.len()
        );
    }
    Ok(reaction_q_value(&[compound_mass], fragment_masses))
}

/// Energy released when `reactant_masses` fuse into `product_masses`, MeV.
pub fn fusion_energy(reactant_masses: &[f64], product_masses: &[f64]) -> Result<f64> {
    if reactant_masses.len() < 2 {
        bail!(
            "Fusion needs at least two reactants (got {}).",
            reactant_masses.len()
        );
    }
    if product_masses.is_empty() {
        bail!("Fusion needs at least one product.");
    }
    Ok(reaction_q_value(reactant_masses, product_masses))
}

/// Lab-frame kinetic threshold for an endothermic reaction on a target at rest
/// (non-relativistic): E_th = −Q·(1 + m_projectile/m_target). Zero when Q ≥ 0.
pub fn threshold_energy(q_value: f64, projectile_mass: f64, target_mass: f64) -> f64 {
    if q_value >= 0.0 {
        return 0.0;
    }
    -q_value * (1.0 + projectile_mass / target_mass)
}

/// E = √((pc)² + (mc²)²), SI units.
pub fn relativistic_energy(mass: f64, momentum: f64) -> f64 {
    let rest = mass * SPEED_OF_LIGHT.powi(2);
    (momentum * SPEED_OF_LIGHT).hypot(rest)
}

/// E = γ·m·c², SI units; requires |v| < c.
pub fn relativistic_energy_from_velocity(mass: f64, velocity: f64) -> Result<f64> {
    let beta = velocity / SPEED_OF_LIGHT;
    if beta.abs() >= 1.0 {
        bail!("Speed must be below c (got {} m/s).", velocity);
    }
    let gamma = 1.0 / (1.0 - beta * beta).sqrt();
    Ok(gamma * mass * SPEED_OF_LIGHT.powi(2))
}

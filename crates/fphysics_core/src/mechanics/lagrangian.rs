//! Lagrangian and Hamiltonian mechanics.
//!
//! The Lagrangians are generic over [`Scalar`] so they can be handed to the
//! autodiff-backed helpers ([`canonical_momentum`], [`hamiltonian`], ...),
//! which take any `Fn(Dual, Dual) -> Dual` of (q, q̇).

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::autodiff::{partials, Dual};
use crate::traits::Scalar;

/// L = T − V
pub fn lagrangian<T: Scalar>(kinetic_energy: T, potential_energy: T) -> T {
    kinetic_energy - potential_energy
}

pub fn kinetic_energy_particle<T: Scalar>(mass: T, velocity: T) -> T {
    T::lit(0.5) * mass * velocity * velocity
}

pub fn kinetic_energy_rotating_body(moment_of_inertia: f64, angular_velocity: f64) -> f64 {
    0.5 * moment_of_inertia * angular_velocity.powi(2)
}

/// T = ½·Σ mᵢ·vᵢ²
pub fn kinetic_energy_generalized(masses: &[f64], velocities: &[f64]) -> Result<f64> {
    if masses.len() != velocities.len() {
        bail!(
            "Got {} masses but {} velocities.",
            masses.len(),
            velocities.len()
        );
    }
    Ok(0.5
        * masses
            .iter()
            .zip(velocities)
            .map(|(m, v)| m * v * v)
            .sum::<f64>())
}

pub fn potential_energy_gravitational(mass: f64, height: f64, gravity: f64) -> f64 {
    mass * gravity * height
}

pub fn potential_energy_spring<T: Scalar>(spring_constant: T, displacement: T) -> T {
    T::lit(0.5) * spring_constant * displacement * displacement
}

pub fn generalized_momentum(mass: f64, velocity: f64) -> f64 {
    mass * velocity
}

/// Q = λ·∂g/∂q
pub fn constraint_force(multiplier: f64, constraint_gradient: f64) -> f64 {
    multiplier * constraint_gradient
}

/// λ·g(q), the term a holonomic constraint adds to the Lagrangian.
pub fn lagrange_multiplier_term(constraint_value: f64, multiplier: f64) -> f64 {
    multiplier * constraint_value
}

/// Discretised action S ≈ Σ Lᵢ·Δt.
pub fn action_integral(lagrangian_values: &[f64], time_step: f64) -> f64 {
    lagrangian_values.iter().sum::<f64>() * time_step
}

/// Whether the first path has the smaller action.
pub fn has_lesser_action(action1: f64, action2: f64) -> bool {
    action1 < action2
}

/// δW = F·δr
pub fn virtual_work(virtual_displacement: f64, force: f64) -> f64 {
    force * virtual_displacement
}

/// F − m·a; zero along a dynamically admissible motion.
pub fn dalembert_residual(mass: f64, acceleration: f64, applied_force: f64) -> f64 {
    applied_force - mass * acceleration
}

// --- Autodiff-backed mechanics ---

/// p = ∂L/∂q̇ at (q, q̇).
pub fn canonical_momentum<F>(lagrangian: F, q: f64, q_dot: f64) -> f64
where
    F: Fn(Dual, Dual) -> Dual,
{
    partials(lagrangian, q, q_dot).1
}

/// Q = ∂L/∂q at (q, q̇).
pub fn generalized_force<F>(lagrangian: F, q: f64, q_dot: f64) -> f64
where
    F: Fn(Dual, Dual) -> Dual,
{
    partials(lagrangian, q, q_dot).0
}

/// H = p·q̇ − L via the Legendre transform at (q, q̇).
pub fn hamiltonian<F>(lagrangian: F, q: f64, q_dot: f64) -> f64
where
    F: Fn(Dual, Dual) -> Dual,
{
    let value = lagrangian(Dual::constant(q), Dual::constant(q_dot)).val;
    let p = canonical_momentum(lagrangian, q, q_dot);
    p * q_dot - value
}

/// d/dt(∂L/∂q̇) − ∂L/∂q; zero along a solution of the Euler–Lagrange equation.
pub fn euler_lagrange_residual(d_dt_dl_dq_dot: f64, dl_dq: f64) -> f64 {
    d_dt_dl_dq_dot - dl_dq
}

/// Hamilton's equations (q̇, ṗ) = (∂H/∂p, −∂H/∂q) for H(q, p).
pub fn hamilton_equations<F>(hamiltonian: F, q: f64, p: f64) -> (f64, f64)
where
    F: Fn(Dual, Dual) -> Dual,
{
    let (dh_dq, dh_dp) = partials(hamiltonian, q, p);
    (dh_dp, -dh_dq)
}

// --- Model Lagrangians ---

/// Simple pendulum, angle measured from the downward vertical.
pub fn pendulum_lagrangian<T: Scalar>(
    length: T,
    mass: T,
    angle: T,
    angle_dot: T,
    gravity: T,
) -> T {
    let kinetic = T::lit(0.5) * mass * (length * angle_dot).powi(2);
    let potential = -mass * gravity * length * angle.cos();
    kinetic - potential
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DoublePendulum {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub gravity: f64,
}

impl DoublePendulum {
    /// L(θ₁, θ₂, θ̇₁, θ̇₂) built from the Cartesian bob coordinates.
    pub fn lagrangian<T: Scalar>(&self, theta1: T, theta2: T, theta1_dot: T, theta2_dot: T) -> T {
        let (m1, m2) = (T::lit(self.m1), T::lit(self.m2));
        let (l1, l2) = (T::lit(self.l1), T::lit(self.l2));
        let g = T::lit(self.gravity);
        let half = T::lit(0.5);

        let y1 = -l1 * theta1.cos();
        let y2 = y1 - l2 * theta2.cos();

        let x1_dot = l1 * theta1_dot * theta1.cos();
        let y1_dot = l1 * theta1_dot * theta1.sin();
        let x2_dot = x1_dot + l2 * theta2_dot * theta2.cos();
        let y2_dot = y1_dot + l2 * theta2_dot * theta2.sin();

        let kinetic = half * m1 * (x1_dot * x1_dot + y1_dot * y1_dot)
            + half * m2 * (x2_dot * x2_dot + y2_dot * y2_dot);
        let potential = m1 * g * y1 + m2 * g * y2;
        kinetic - potential
    }
}

/// L = ½m(ṙ² + r²θ̇²) − V(r)
pub fn central_force_lagrangian<T, V>(mass: T, r: T, r_dot: T, theta_dot: T, potential: V) -> T
where
    T: Scalar,
    V: Fn(T) -> T,
{
    let kinetic = T::lit(0.5) * mass * (r_dot * r_dot + r * r * theta_dot * theta_dot);
    kinetic - potential(r)
}

pub fn oscillator_lagrangian<T: Scalar>(
    mass: T,
    displacement: T,
    velocity: T,
    spring_constant: T,
) -> T {
    kinetic_energy_particle(mass, velocity) - potential_energy_spring(spring_constant, displacement)
}

/// Rigid body in its principal frame: T_trans + ½Σ Iᵢωᵢ² − V.
pub fn rigid_body_lagrangian<T: Scalar>(
    principal_moments: &[T],
    angular_velocity: &[T],
    kinetic_energy_translation: T,
    potential_energy: T,
) -> Result<T> {
    if principal_moments.len() != angular_velocity.len() {
        bail!(
            "Got {} principal moments but {} angular velocity components.",
            principal_moments.len(),
            angular_velocity.len()
        );
    }
    let rotational = principal_moments
        .iter()
        .zip(angular_velocity)
        .fold(T::zero(), |acc, (&i, &w)| acc + i * w * w);
    Ok(kinetic_energy_translation + T::lit(0.5) * rotational - potential_energy)
}

/// Free scalar field: ℒ = ½(φ̇² − (∇φ)²) in natural units.
pub fn field_lagrangian_density<T: Scalar>(field_gradient: T, field_time_derivative: T) -> T {
    T::lit(0.5) * (field_time_derivative.powi(2) - field_gradient.powi(2))
}

/// Interaction term q(v·A − φ) of a charge in an electromagnetic field.
pub fn electromagnetic_lagrangian<T: Scalar>(
    charge: T,
    velocity: T,
    vector_potential: T,
    scalar_potential: T,
) -> T {
    charge * (velocity * vector_potential - scalar_potential)
}

/// L = −mc²/γ = −mc²·√(1 − v²/c²)
pub fn relativistic_particle_lagrangian<T: Scalar>(mass: T, velocity: T, c: T) -> Result<T> {
    let beta_sq = (velocity / c).powi(2);
    if beta_sq >= T::one() {
        bail!(
            "Speed {} must be below the speed of light {}.",
            velocity.abs().to_f64().unwrap_or(f64::NAN),
            c.to_f64().unwrap_or(f64::NAN)
        );
    }
    Ok(-mass * c * c * (T::one() - beta_sq).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_GRAVITY, SPEED_OF_LIGHT};

    #[test]
    fn pendulum_canonical_momentum_is_angular_momentum() {
        let (length, mass, g) = (2.0, 0.5, EARTH_GRAVITY);
        let l = |q: Dual, q_dot: Dual| {
            pendulum_lagrangian(
                Dual::constant(length),
                Dual::constant(mass),
                q,
                q_dot,
                Dual::constant(g),
            )
        };
        let p = canonical_momentum(l, 0.3, 1.2);
        assert!((p - mass * length * length * 1.2).abs() < 1e-12);

        let force = generalized_force(l, 0.3, 1.2);
        assert!((force + mass * g * length * 0.3_f64.sin()).abs() < 1e-12);
    }

    #[test]
    fn oscillator_hamiltonian_is_total_energy() {
        let (m, k) = (2.0, 8.0);
        let l =
            |x: Dual, v: Dual| oscillator_lagrangian(Dual::constant(m), x, v, Dual::constant(k));
        let (x, v) = (0.4, -1.5);
        let h = hamiltonian(l, x, v);
        let expected = 0.5 * m * v * v + 0.5 * k * x * x;
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn euler_lagrange_vanishes_on_exact_oscillation() {
        let (m, k): (f64, f64) = (1.5, 6.0);
        let omega = (k / m).sqrt();
        let t = 0.9;
        let x = (omega * t).cos();
        let v = -omega * (omega * t).sin();
        let a = -omega * omega * x;
        let l = |q: Dual, q_dot: Dual| {
            oscillator_lagrangian(Dual::constant(m), q, q_dot, Dual::constant(k))
        };
        // ∂L/∂q̇ = m·q̇, so d/dt of it is m·a.
        let dl_dq = generalized_force(l, x, v);
        assert!(euler_lagrange_residual(m * a, dl_dq).abs() < 1e-12);
        assert!(dalembert_residual(m, a, -k * x).abs() < 1e-12);
    }

    #[test]
    fn hamilton_equations_for_oscillator() {
        let (m, k) = (2.0, 3.0);
        let h = |q: Dual, p: Dual| {
            p * p / Dual::constant(2.0 * m) + Dual::constant(0.5 * k) * q * q
        };
        let (q_dot, p_dot) = hamilton_equations(h, 0.5, 4.0);
        assert!((q_dot - 2.0).abs() < 1e-12);
        assert!((p_dot + 1.5).abs() < 1e-12);
    }

    #[test]
    fn double_pendulum_at_rest_is_minus_potential() {
        let system = DoublePendulum {
            m1: 1.0,
            m2: 2.0,
            l1: 1.0,
            l2: 0.5,
            gravity: 10.0,
        };
        let value: f64 = system.lagrangian(0.0, 0.0, 0.0, 0.0);
        // y1 = -1, y2 = -1.5: V = 1*10*(-1) + 2*10*(-1.5) = -40
        assert!((value - 40.0).abs() < 1e-12);
    }

    #[test]
    fn double_pendulum_reduces_to_simple_pendulum() {
        let system = DoublePendulum {
            m1: 1.3,
            m2: 0.0,
            l1: 0.8,
            l2: 1.0,
            gravity: EARTH_GRAVITY,
        };
        let double: f64 = system.lagrangian(0.4, 1.1, 0.7, -0.2);
        let single = pendulum_lagrangian(0.8, 1.3, 0.4, 0.7, EARTH_GRAVITY);
        assert!((double - single).abs() < 1e-12);
    }

    #[test]
    fn central_force_with_kepler_potential() {
        let k = 3.0;
        let value = central_force_lagrangian(2.0, 1.5, 0.5, 2.0, |r: f64| -k / r);
        let expected = 0.5 * 2.0 * (0.25 + 2.25 * 4.0) + k / 1.5;
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn energy_sums_and_action() {
        let kinetic = kinetic_energy_generalized(&[1.0, 2.0], &[3.0, 1.0]).expect("same length");
        assert!((kinetic - 5.5).abs() < 1e-12);
        assert!(kinetic_energy_generalized(&[1.0], &[]).is_err());
        assert!((action_integral(&[1.0, 2.0, 3.0], 0.5) - 3.0).abs() < 1e-12);
        assert!(has_lesser_action(1.0, 2.0));
        assert!(!has_lesser_action(2.0, 2.0));
        let rigid: f64 =
            rigid_body_lagrangian(&[2.0, 4.0], &[1.0, 0.5], 3.0, 1.0).expect("same length");
        assert!((rigid - 3.5).abs() < 1e-12);
        assert!(rigid_body_lagrangian(&[1.0], &[1.0, 2.0], 0.0_f64, 0.0).is_err());
    }

    #[test]
    fn relativistic_lagrangian_limits() {
        let rest = relativistic_particle_lagrangian(1.0, 0.0, SPEED_OF_LIGHT).expect("at rest");
        assert!((rest + SPEED_OF_LIGHT * SPEED_OF_LIGHT).abs() < 1.0);
        let err = relativistic_particle_lagrangian(1.0, SPEED_OF_LIGHT, SPEED_OF_LIGHT)
            .expect_err("light speed is excluded");
        assert!(format!("{err}").contains("below the speed of light"));
    }

    #[test]
    fn relativistic_momentum_and_energy_from_duals() {
        let (m, c, v) = (2.0, SPEED_OF_LIGHT, 0.6 * SPEED_OF_LIGHT);
        let gamma = 1.25;
        let l = |_q: Dual, q_dot: Dual| {
            relativistic_particle_lagrangian(Dual::constant(m), q_dot, Dual::constant(c))
                .expect("below light speed")
        };
        let p = canonical_momentum(l, 0.0, v);
        assert!((p / (gamma * m * v) - 1.0).abs() < 1e-12, "got {p}");

        let h = hamiltonian(l, 0.0, v);
        assert!((h / (gamma * m * c * c) - 1.0).abs() < 1e-12, "got {h}");
        assert_eq!(generalized_force(l, 0.0, v), 0.0);
    }

    #[test]
    fn field_and_rigid_body_lagrangians_differentiate() {
        // ∂ℒ/∂φ̇ = φ̇
        let density = |grad: Dual, phi_dot: Dual| field_lagrangian_density(grad, phi_dot);
        assert!((canonical_momentum(density, 0.4, 1.7) - 1.7).abs() < 1e-12);
        assert!((generalized_force(density, 0.4, 1.7) + 0.4).abs() < 1e-12);

        // ∂L/∂ω₂ = I₂ω₂
        let spin = |_q: Dual, w: Dual| {
            rigid_body_lagrangian(
                &[Dual::constant(2.0), Dual::constant(5.0)],
                &[Dual::constant(1.0), w],
                Dual::constant(0.0),
                Dual::constant(0.0),
            )
            .expect("same length")
        };
        assert!((canonical_momentum(spin, 0.0, 0.3) - 1.5).abs() < 1e-12);

        // ∂L/∂v = qA for the electromagnetic coupling.
        let coupling = |_q: Dual, v: Dual| {
            let (q, a, phi) = (Dual::constant(3.0), Dual::constant(0.5), Dual::constant(0.0));
            electromagnetic_lagrangian(q, v, a, phi)
        };
        assert!((canonical_momentum(coupling, 0.0, 2.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn small_formulas() {
        assert!((field_lagrangian_density(1.0_f64, 3.0) - 4.0).abs() < 1e-12);
        assert!((electromagnetic_lagrangian(2.0_f64, 3.0, 0.5, 1.0) - 1.0).abs() < 1e-12);
        assert!((potential_energy_gravitational(2.0, 3.0, 10.0) - 60.0).abs() < 1e-12);
        assert!((kinetic_energy_rotating_body(4.0, 0.5) - 0.5).abs() < 1e-12);
        assert!((constraint_force(2.0, -0.5) + 1.0).abs() < 1e-12);
        assert!((lagrange_multiplier_term(0.25, 4.0) - 1.0).abs() < 1e-12);
        assert!((virtual_work(0.1, 20.0) - 2.0).abs() < 1e-12);
        assert!((generalized_momentum(3.0, 2.0) - 6.0).abs() < 1e-12);
        assert!((lagrangian(5.0_f64, 2.0) - 3.0).abs() < 1e-12);
    }
}

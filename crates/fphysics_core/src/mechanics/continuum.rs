//! Two-dimensional linear elasticity and finite-strain kinematics.
//!
//! Tensors are `nalgebra::Matrix2<f64>`. Shear inputs named `gamma_xy` are
//! engineering shear strains (γ = 2ε_xy); everything else is tensorial.

use anyhow::{bail, Result};
use nalgebra::Matrix2;

pub type Tensor2 = Matrix2<f64>;

fn symmetric(xx: f64, yy: f64, xy: f64) -> Tensor2 {
    Matrix2::new(xx, xy, xy, yy)
}

/// ε from displacement gradients ∂u_x/∂x, ∂u_y/∂y, ∂u_x/∂y, ∂u_y/∂x.
pub fn strain_tensor(u_x_x: f64, u_y_y: f64, u_x_y: f64, u_y_x: f64) -> Tensor2 {
    symmetric(u_x_x, u_y_y, 0.5 * (u_x_y + u_y_x))
}

/// Symmetric part of a displacement-gradient matrix [[u_x,x, u_x,y], [u_y,x, u_y,y]].
pub fn infinitesimal_strain(displacement_gradient: &Tensor2) -> Tensor2 {
    0.5 * (displacement_gradient + displacement_gradient.transpose())
}

/// Hooke's law for thin plates (σ_zz = 0).
pub fn plane_stress(
    epsilon_xx: f64,
    epsilon_yy: f64,
    gamma_xy: f64,
    elastic_modulus: f64,
    poissons_ratio: f64,
) -> Tensor2 {
    let nu = poissons_ratio;
    let factor = elastic_modulus / (1.0 - nu * nu);
    symmetric(
        factor * (epsilon_xx + nu * epsilon_yy),
        factor * (epsilon_yy + nu * epsilon_xx),
        factor * (1.0 - nu) * gamma_xy / 2.0,
    )
}

/// Hooke's law for long bodies (ε_zz = 0).
pub fn plane_strain(
    epsilon_xx: f64,
    epsilon_yy: f64,
    gamma_xy: f64,
    elastic_modulus: f64,
    poissons_ratio: f64,
) -> Tensor2 {
    let nu = poissons_ratio;
    let factor = elastic_modulus / ((1.0 + nu) * (1.0 - 2.0 * nu));
    symmetric(
        factor * ((1.0 - nu) * epsilon_xx + nu * epsilon_yy),
        factor * ((1.0 - nu) * epsilon_yy + nu * epsilon_xx),
        factor * (1.0 - 2.0 * nu) * gamma_xy / 2.0,
    )
}

/// F = ∂x/∂X
pub fn deformation_gradient(dx_dx: f64, dx_dy: f64, dy_dx: f64, dy_dy: f64) -> Tensor2 {
    Matrix2::new(dx_dx, dx_dy, dy_dx, dy_dy)
}

/// E = ½(FᵀF − I)
pub fn green_lagrange_strain(deformation_gradient: &Tensor2) -> Tensor2 {
    let right_cauchy_green = deformation_gradient.transpose() * deformation_gradient;
    0.5 * (right_cauchy_green - Tensor2::identity())
}

pub fn volumetric_strain(epsilon_xx: f64, epsilon_yy: f64, epsilon_zz: f64) -> f64 {
    epsilon_xx + epsilon_yy + epsilon_zz
}

/// In-plane deviator with ε_zz = 0, so the mean strain is (ε_xx + ε_yy)/3.
pub fn deviatoric_strain(epsilon_xx: f64, epsilon_yy: f64, epsilon_xy: f64) -> Tensor2 {
    let mean = (epsilon_xx + epsilon_yy) / 3.0;
    symmetric(epsilon_xx - mean, epsilon_yy - mean, epsilon_xy)
}

/// (I₁, I₂) = (trace, determinant) of a 2×2 tensor.
pub fn invariants(tensor: &Tensor2) -> (f64, f64) {
    (tensor.trace(), tensor.determinant())
}

/// ∂²ε_xx/∂y² + ∂²ε_yy/∂x² − 2·∂²ε_xy/∂x∂y; zero for a compatible field.
pub fn compatibility_residual(epsilon_xx_yy: f64, epsilon_yy_xx: f64, epsilon_xy_xy: f64) -> f64 {
    epsilon_xx_yy + epsilon_yy_xx - 2.0 * epsilon_xy_xy
}

pub fn equilibrium_residual_x(sigma_xx_x: f64, sigma_xy_y: f64, body_force_x: f64) -> f64 {
    sigma_xx_x + sigma_xy_y + body_force_x
}

pub fn equilibrium_residual_y(sigma_xy_x: f64, sigma_yy_y: f64, body_force_y: f64) -> f64 {
    sigma_xy_x + sigma_yy_y + body_force_y
}

/// Lamé parameters (λ, μ) from Young's modulus and Poisson's ratio.
pub fn lame_parameters(elastic_modulus: f64, poissons_ratio: f64) -> Result<(f64, f64)> {
    let nu = poissons_ratio;
    if !(nu > -1.0 && nu < 0.5) {
        bail!("Poisson's ratio must lie in (-1, 0.5) (got {}).", nu);
    }
    let lambda = elastic_modulus * nu / ((1.0 + nu) * (1.0 - 2.0 * nu));
    let mu = elastic_modulus / (2.0 * (1.0 + nu));
    Ok((lambda, mu))
}

/// σ = λ·tr(ε)·I + 2μ·ε
pub fn isotropic_stress(
    strain: &Tensor2,
    elastic_modulus: f64,
    poissons_ratio: f64,
) -> Result<Tensor2> {
    let (lambda, mu) = lame_parameters(elastic_modulus, poissons_ratio)?;
    Ok(Tensor2::identity() * (lambda * strain.trace()) + strain * (2.0 * mu))
}

/// K = λ + 2μ/3
pub fn bulk_modulus_from_lame(lambda: f64, mu: f64) -> f64 {
    lambda + 2.0 * mu / 3.0
}

/// P-wave speed √((λ + 2μ)/ρ)
pub fn longitudinal_wave_speed(lambda: f64, mu: f64, density: f64) -> f64 {
    ((lambda + 2.0 * mu) / density).sqrt()
}

/// S-wave speed √(μ/ρ)
pub fn transverse_wave_speed(mu: f64, density: f64) -> f64 {
    (mu / density).sqrt()
}

/// Rayleigh surface-wave speed, Viktorov's fit c_R ≈ c_S·(0.862 + 1.14ν)/(1 + ν).
pub fn rayleigh_wave_speed(mu: f64, density: f64, poissons_ratio: f64) -> f64 {
    let nu = poissons_ratio;
    transverse_wave_speed(mu, density) * (0.862 + 1.14 * nu) / (1.0 + nu)
}

/// W = ½·σ:ε
pub fn strain_energy_density(stress: &Tensor2, strain: &Tensor2) -> f64 {
    0.5 * stress.component_mul(strain).sum()
}

/// ∇⁴φ = φ_xxxx + 2φ_xxyy + φ_yyyy; zero for a valid Airy stress function.
pub fn airy_biharmonic(phi_xxxx: f64, phi_yyyy: f64, phi_xxyy: f64) -> f64 {
    phi_xxxx + 2.0 * phi_xxyy + phi_yyyy
}

pub fn polar_stress(sigma_r: f64, sigma_theta: f64, tau_r_theta: f64) -> Tensor2 {
    symmetric(sigma_r, sigma_theta, tau_r_theta)
}

/// Polar strain tensor from engineering shear γ_rθ.
pub fn polar_strain(epsilon_r: f64, epsilon_theta: f64, gamma_r_theta: f64) -> Tensor2 {
    symmetric(epsilon_r, epsilon_theta, gamma_r_theta / 2.0)
}

/// Counter-clockwise rotation by θ.
pub fn rotation(theta: f64) -> Tensor2 {
    let (sin, cos) = theta.sin_cos();
    Matrix2::new(cos, -sin, sin, cos)
}

/// Components of `tensor` in the frame rotated by `transform`: Tᵀ·σ·T.
pub fn transform(tensor: &Tensor2, transform: &Tensor2) -> Tensor2 {
    transform.transpose() * tensor * transform
}

//! Quantum mechanics: textbook energy levels, occupancy statistics, barrier
//! tunnelling and finite-dimensional operators on state vectors.

use anyhow::{bail, Result};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex;

use crate::constants::{
    BOLTZMANN_CONSTANT, PLANCK_CONSTANT, REDUCED_PLANCK_CONSTANT, RYDBERG_ENERGY_EV,
};

pub type State = DVector<Complex<f64>>;
pub type Operator = DMatrix<Complex<f64>>;

/// E_n = ħω(n + ½)
pub fn harmonic_oscillator_energy(n: u32, angular_frequency: f64) -> f64 {
    REDUCED_PLANCK_CONSTANT * angular_frequency * (n as f64 + 0.5)
}

/// Bohr levels E_n = −Ry/n², in eV.
pub fn hydrogen_energy_level(n: u32) -> Result<f64> {
    if n == 0 {
        bail!("Principal quantum number must be at least 1.");
    }
    Ok(-RYDBERG_ENERGY_EV / (n as f64).powi(2))
}

/// Photon energy (eV) emitted in the n_upper → n_lower transition.
pub fn hydrogen_transition_energy(n_upper: u32, n_lower: u32) -> Result<f64> {
    if n_upper <= n_lower {
        bail!(
            "Emission needs n_upper > n_lower (got {} -> {}).",
            n_upper,
            n_lower
        );
    }
    Ok(hydrogen_energy_level(n_upper)? - hydrogen_energy_level(n_lower)?)
}

/// Mean occupancy 1/(e^((E−μ)/kT) + 1); energies in joules, T in kelvin.
pub fn fermi_dirac(energy: f64, chemical_potential: f64, temperature: f64) -> Result<f64> {
    if temperature <= 0.0 {
        bail!("Temperature must be positive (got {}).", temperature);
    }
    let x = (energy - chemical_potential) / (BOLTZMANN_CONSTANT * temperature);
    Ok(1.0 / (x.exp() + 1.0))
}

/// Mean occupancy 1/(e^((E−μ)/kT) − 1); requires E > μ.
pub fn bose_einstein(energy: f64, chemical_potential: f64, temperature: f64) -> Result<f64> {
    if temperature <= 0.0 {
        bail!("Temperature must be positive (got {}).", temperature);
    }
    if energy <= chemical_potential {
        bail!("Bose-Einstein occupancy needs E > μ.");
    }
    let x = (energy - chemical_potential) / (BOLTZMANN_CONSTANT * temperature);
    Ok(1.0 / x.exp_m1())
}

/// Transmission through a rectangular barrier of height V₀ and width a for E < V₀:
/// T = [1 + V₀² sinh²(κa) / (4E(V₀ − E))]⁻¹, κ = √(2m(V₀ − E))/ħ.
pub fn tunnel_probability(mass: f64, energy: f64, barrier_height: f64, width: f64) -> Result<f64> {
    if energy <= 0.0 || energy >= barrier_height {
        bail!(
            "Tunnelling formula needs 0 < E < V0 (got E = {}, V0 = {}).",
            energy,
            barrier_height
        );
    }
    let kappa = (2.0 * mass * (barrier_height - energy)).sqrt() / REDUCED_PLANCK_CONSTANT;
    let sinh = (kappa * width).sinh();
    let inverse =
        1.0 + barrier_height.powi(2) * sinh * sinh / (4.0 * energy * (barrier_height - energy));
    Ok(1.0 / inverse)
}

/// R = 1 − T
pub fn reflection_probability(
    mass: f64,
    energy: f64,
    barrier_height: f64,
    width: f64,
) -> Result<f64> {
    Ok(1.0 - tunnel_probability(mass, energy, barrier_height, width)?)
}

/// λ = h/p
pub fn de_broglie_wavelength(momentum: f64) -> f64 {
    PLANCK_CONSTANT / momentum
}

/// Smallest Δp allowed by Δx·Δp ≥ ħ/2.
pub fn minimum_momentum_uncertainty(position_uncertainty: f64) -> f64 {
    REDUCED_PLANCK_CONSTANT / (2.0 * position_uncertainty)
}

/// Spin-½ operators S_x, S_y, S_z = (ħ/2)·σ.
pub fn spin_matrices() -> [Operator; 3] {
    let half = 0.5 * REDUCED_PLANCK_CONSTANT;
    let c = |re: f64, im: f64| Complex::new(half * re, half * im);
    [
        DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)]),
        DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)]),
        DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)]),
    ]
}

/// [A, B] = AB − BA
pub fn commutator(a: &Operator, b: &Operator) -> Result<Operator> {
    if !a.is_square() || a.shape() != b.shape() {
        bail!(
            "Commutator needs square operators of equal size (got {:?} and {:?}).",
            a.shape(),
            b.shape()
        );
    }
    Ok(a * b - b * a)
}

/// |ψ|² componentwise.
pub fn probability_density(state: &State) -> DVector<f64> {
    state.map(|c| c.norm_sqr())
}

/// ψ/‖ψ‖
pub fn normalize(state: &State) -> Result<State> {
    let norm = state.norm();
    if norm == 0.0 {
        bail!("Cannot normalize the zero vector.");
    }
    Ok(state.unscale(norm))
}

/// ⟨ψ|A|ψ⟩ / ⟨ψ|ψ⟩
pub fn expectation_value(operator: &Operator, state: &State) -> Result<Complex<f64>> {
    check_dimensions(operator, state)?;
    let norm_sq = state.norm_squared();
    if norm_sq == 0.0 {
        bail!("Expectation value is undefined for the zero vector.");
    }
    Ok(state.dotc(&(operator * state)) / norm_sq)
}

fn check_dimensions(operator: &Operator, state: &State) -> Result<()> {
    if !operator.is_square() || operator.ncols() != state.len() {
        bail!(
            "Operator of shape {:?} cannot act on a state of dimension {}.",
            operator.shape(),
            state.len()
        );
    }
    Ok(())
}

/// A named observable acting on finite-dimensional states.
#[derive(Debug, Clone)]
pub struct QuantumOperator {
    pub name: String,
    pub matrix: Operator,
}

impl QuantumOperator {
    pub fn new(name: impl Into<String>, matrix: Operator) -> Self {
        Self {
            name: name.into(),
            matrix,
        }
    }

    /// A|ψ⟩
    pub fn apply(&self, state: &State) -> Result<State> {
        check_dimensions(&self.matrix, state)?;
        Ok(&self.matrix * state)
    }

    pub fn expectation(&self, state: &State) -> Result<Complex<f64>> {
        expectation_value(&self.matrix, state)
    }

    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        self.matrix.is_square() && (&self.matrix - self.matrix.adjoint()).norm() <= tolerance
    }
}

/// Z = Σ e^(−Eᵢ/kT) over the given levels (joules).
pub fn quantum_partition_function(energies: &[f64], temperature: f64) -> Result<f64> {
    if energies.is_empty() {
        bail!("Partition function needs at least one energy level.");
    }
    if temperature <= 0.0 {
        bail!("Temperature must be positive (got {}).", temperature);
    }
    let kt = BOLTZMANN_CONSTANT * temperature;
    Ok(energies.iter().map(|e| (-e / kt).exp()).sum())
}

/// Eigenpairs of a Hermitian operator, eigenvalues ascending.
fn hermitian_eigen(operator: &Operator) -> Result<Vec<(f64, State)>> {
    if !operator.is_square() || operator.nrows() == 0 {
        bail!("Eigen-decomposition needs a non-empty square operator.");
    }
    let scale = operator.norm().max(f64::MIN_POSITIVE);
    if (operator - operator.adjoint()).norm() > 1e-12 * scale {
        bail!("Operator is not Hermitian.");
    }
    let eigen = operator.clone().symmetric_eigen();
    let mut pairs: Vec<(f64, State)> = eigen
        .eigenvalues
        .iter()
        .zip(eigen.eigenvectors.column_iter())
        .map(|(&value, vector)| (value, vector.into_owned()))
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(pairs)
}

/// Eigenvalues of a spin (or any Hermitian) operator, ascending.
pub fn spin_eigenvalues(operator: &Operator) -> Result<Vec<f64>> {
    Ok(hermitian_eigen(operator)?.into_iter().map(|(value, _)| value).collect())
}

/// Normalized eigenvectors, in the order of [`spin_eigenvalues`].
pub fn spin_eigenvectors(operator: &Operator) -> Result<Vec<State>> {
    Ok(hermitian_eigen(operator)?.into_iter().map(|(_, vector)| vector).collect())
}

/// Lowering operator a in the Fock basis |0⟩..|dim−1⟩: a|n⟩ = √n·|n−1⟩.
pub fn annihilation_operator(dim: usize) -> Result<QuantumOperator> {
    if dim == 0 {
        bail!("Fock space must have at least one level.");
    }
    let mut matrix = Operator::zeros(dim, dim);
    for n in 1..dim {
        matrix[(n - 1, n)] = Complex::new((n as f64).sqrt(), 0.0);
    }
    Ok(QuantumOperator::new("a", matrix))
}

/// Raising operator a†, truncated to `dim` levels.
pub fn creation_operator(dim: usize) -> Result<QuantumOperator> {
    let lowering = annihilation_operator(dim)?;
    Ok(QuantumOperator::new("a†", lowering.matrix.adjoint()))
}

/// E⁽¹⁾ₙ = ⟨n|V|n⟩ in the unperturbed eigenbasis.
pub fn first_order_correction(perturbation: &Operator, level: usize) -> Result<f64> {
    check_level(perturbation, level)?;
    Ok(perturbation[(level, level)].re)
}

/// E⁽²⁾ₙ = Σ_{m≠n} |V_mn|² / (Eₙ − Eₘ); the spectrum must be non-degenerate.
pub fn second_order_correction(
    perturbation: &Operator,
    unperturbed_energies: &[f64],
    level: usize,
) -> Result<f64> {
    check_level(perturbation, level)?;
    if unperturbed_energies.len() != perturbation.nrows() {
        bail!(
            "Got {} unperturbed energies for a {}-level perturbation.",
            unperturbed_energies.len(),
            perturbation.nrows()
        );
    }
    let e_n = unperturbed_energies[level];
    let mut correction = 0.0;
    for (m, &e_m) in unperturbed_energies.iter().enumerate() {
        if m == level {
            continue;
        }
        let gap = e_n - e_m;
        if gap == 0.0 {
            bail!("Levels {} and {} are degenerate.", level, m);
        }
        correction += perturbation[(m, level)].norm_sqr() / gap;
    }
    Ok(correction)
}

fn check_level(perturbation: &Operator, level: usize) -> Result<()> {
    if !perturbation.is_square() {
        bail!("Perturbation must be square (got {:?}).", perturbation.shape());
    }
    if level >= perturbation.nrows() {
        bail!(
            "Level {} is outside a {}-level basis.",
            level,
            perturbation.nrows()
        );
    }
    Ok(())
}

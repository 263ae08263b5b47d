//! Classical results with a numeric side: Cardano's depressed-cubic formula
//! and the Born-rule measurement collapse of the Copenhagen interpretation.

use log::{debug, info};
use num_complex::Complex;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::PI;

/// One root of x³ + p·x + q = 0 by Cardano's formula.
///
/// Δ = √((q/2)² + (p/3)³) is taken in complex arithmetic, so negative
/// discriminants need no special case. Both cube roots are principal
/// branches, so u + v is a root only when those branches satisfy
/// u·v = −p/3. [`depressed_cubic_roots`] ties the branches together.
pub fn depressed_cubic_root(p: f64, q: f64) -> Complex<f64> {
    let delta = discriminant_root(p, q);
    let half_q = Complex::new(q / 2.0, 0.0);
    let u = principal_cbrt(-half_q + delta);
    let v = principal_cbrt(-half_q - delta);
    let root = u + v;
    debug!("Root for p = {p}, q = {q}: {root}");
    root
}

/// All three roots of a depressed cubic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicRoots {
    pub roots: [Complex<f64>; 3],
}

impl CubicRoots {
    /// Roots whose imaginary part is below `tolerance`, as reals.
    pub fn real_roots(&self, tolerance: f64) -> Vec<f64> {
        self.roots
            .iter()
            .filter(|r| r.im.abs() <= tolerance)
            .map(|r| r.re)
            .collect()
    }
}

/// Every root of x³ + p·x + q = 0.
///
/// u is the principal cube root of the larger-magnitude radicand and v is
/// tied to it by u·v = −p/3, so the three values ωᵏu + ω⁻ᵏv all satisfy
/// the equation, including the casus irreducibilis.
pub fn depressed_cubic_roots(p: f64, q: f64) -> CubicRoots {
    let delta = discriminant_root(p, q);
    let half_q = Complex::new(q / 2.0, 0.0);
    let plus = -half_q + delta;
    let minus = -half_q - delta;
    let radicand = if plus.norm() >= minus.norm() { plus } else { minus };

    let u = principal_cbrt(radicand);
    let v = if u.norm() == 0.0 {
        Complex::new(0.0, 0.0)
    } else {
        Complex::new(-p / 3.0, 0.0) / u
    };

    let omega = Complex::from_polar(1.0, 2.0 * PI / 3.0);
    let omega_sq = omega * omega;
    let roots = [u + v, omega * u + omega_sq * v, omega_sq * u + omega * v];
    debug!("Roots for p = {p}, q = {q}: {roots:?}");
    CubicRoots { roots }
}

/// x³ + p·x + q at `x`.
pub fn cubic_residual(p: f64, q: f64, x: Complex<f64>) -> Complex<f64> {
    x * x * x + x * p + q
}

fn discriminant_root(p: f64, q: f64) -> Complex<f64> {
    let half_q = q / 2.0;
    let third_p = p / 3.0;
    Complex::new(half_q * half_q + third_p * third_p * third_p, 0.0).sqrt()
}

fn principal_cbrt(z: Complex<f64>) -> Complex<f64> {
    z.powf(1.0 / 3.0)
}

// --- Projective measurement ---

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    #[error("Provide both states and probabilities for simulation.")]
    MissingInput,
    #[error("Got {states} states but {probabilities} probabilities.")]
    LengthMismatch { states: usize, probabilities: usize },
    #[error("Probability {value} at index {index} is not a finite non-negative number.")]
    InvalidProbability { index: usize, value: f64 },
    #[error("Probabilities must sum to 1 (sum = {sum}).")]
    NotNormalized { sum: f64 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeasurementSettings {
    /// Allowed deviation of Σ P(i) from 1.
    pub tolerance: f64,
}

impl Default for MeasurementSettings {
    fn default() -> Self {
        Self { tolerance: 1e-8 }
    }
}

/// The basis state a measurement collapsed onto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementOutcome {
    pub index: usize,
    pub state: String,
    pub probability: f64,
}

/// Performs one projective measurement: picks state i with probability P(i).
pub fn collapse<S, R>(
    states: &[S],
    probabilities: &[f64],
    settings: MeasurementSettings,
    rng: &mut R,
) -> Result<MeasurementOutcome, MeasurementError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    validate_distribution(states.len(), probabilities, settings)?;

    let total: f64 = probabilities.iter().sum();
    let draw = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut index = None;
    for (i, &prob) in probabilities.iter().enumerate() {
        cumulative += prob;
        if prob > 0.0 && draw < cumulative {
            index = Some(i);
            break;
        }
    }
    // Rounding can leave draw == total; fall back to the last reachable state.
    let index = match index {
        Some(i) => i,
        None => probabilities
            .iter()
            .rposition(|&prob| prob > 0.0)
            .ok_or(MeasurementError::NotNormalized { sum: total })?,
    };

    let outcome = MeasurementOutcome {
        index,
        state: states[index].as_ref().to_string(),
        probability: probabilities[index],
    };
    info!("Measurement result: collapsed to state {}", outcome.state);
    Ok(outcome)
}

fn validate_distribution(
    states: usize,
    probabilities: &[f64],
    settings: MeasurementSettings,
) -> Result<(), MeasurementError> {
    if states == 0 || probabilities.is_empty() {
        return Err(MeasurementError::MissingInput);
    }
    if states != probabilities.len() {
        return Err(MeasurementError::LengthMismatch {
            states,
            probabilities: probabilities.len(),
        });
    }
    if let Some((index, &value)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(MeasurementError::InvalidProbability { index, value });
    }
    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > settings.tolerance {
        return Err(MeasurementError::NotNormalized { sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_root(p: f64, q: f64, x: Complex<f64>) {
        let residual = cubic_residual(p, q, x);
        assert!(
            residual.norm() < 1e-9,
            "x = {x} is not a root of x^3 + {p}x + {q} (residual {residual})"
        );
    }

    #[test]
    fn cardano_recovers_bombelli_root() {
        let root = depressed_cubic_root(-15.0, -4.0);
        assert!((root.re - 4.0).abs() < 1e-9);
        assert!(root.im.abs() < 1e-9);
        assert_root(-15.0, -4.0, root);
    }

    #[test]
    fn cardano_handles_zero_coefficients() {
        let root = depressed_cubic_root(0.0, 0.0);
        assert_eq!(root, Complex::new(0.0, 0.0));
    }

    #[test]
    fn principal_branches_can_miss_the_real_root() {
        // x^3 + 3x - 4 = 0 has the real root 1, but the principal cube root of
        // the negative radicand is complex, so u + v is not a root.
        let root = depressed_cubic_root(3.0, -4.0);
        assert!(cubic_residual(3.0, -4.0, root).norm() > 1e-3);

        let roots = depressed_cubic_roots(3.0, -4.0);
        let real = roots.real_roots(1e-9);
        assert_eq!(real.len(), 1);
        assert!((real[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cardano_is_deterministic() {
        assert_eq!(
            depressed_cubic_root(-7.0, 6.0),
            depressed_cubic_root(-7.0, 6.0)
        );
    }

    #[test]
    fn all_roots_satisfy_casus_irreducibilis() {
        // (x - 1)(x - 2)(x + 3) = x^3 - 7x + 6
        let roots = depressed_cubic_roots(-7.0, 6.0);
        for root in roots.roots {
            assert_root(-7.0, 6.0, root);
        }
        let mut real = roots.real_roots(1e-9);
        real.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(real.len(), 3);
        assert!((real[0] + 3.0).abs() < 1e-9);
        assert!((real[1] - 1.0).abs() < 1e-9);
        assert!((real[2] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn all_roots_when_linear_term_vanishes() {
        let roots = depressed_cubic_roots(0.0, 8.0);
        for root in roots.roots {
            assert_root(0.0, 8.0, root);
        }
        let real = roots.real_roots(1e-9);
        assert_eq!(real.len(), 1);
        assert!((real[0] + 2.0).abs() < 1e-9);

        let zero = depressed_cubic_roots(0.0, 0.0);
        assert!(zero.roots.iter().all(|r| r.norm() == 0.0));
    }

    #[test]
    fn collapse_is_reproducible_with_seed() {
        let states = ["up", "down"];
        let probs = [0.3, 0.7];
        let settings = MeasurementSettings::default();
        let first = collapse(&states, &probs, settings, &mut StdRng::seed_from_u64(7))
            .expect("collapse should succeed");
        let second = collapse(&states, &probs, settings, &mut StdRng::seed_from_u64(7))
            .expect("collapse should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn collapse_never_selects_zero_probability_state() {
        let states = ["a", "b", "c"];
        let probs = [0.0, 1.0, 0.0];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let outcome = collapse(&states, &probs, MeasurementSettings::default(), &mut rng)
                .expect("collapse should succeed");
            assert_eq!(outcome.state, "b");
            assert_eq!(outcome.index, 1);
        }
    }

    #[test]
    fn collapse_frequencies_follow_born_rule() {
        let states = ["0", "1"];
        let probs = [0.25, 0.75];
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 4000;
        let ones = (0..trials)
            .filter(|_| {
                collapse(&states, &probs, MeasurementSettings::default(), &mut rng)
                    .expect("collapse should succeed")
                    .index
                    == 1
            })
            .count();
        let freq = ones as f64 / trials as f64;
        assert!((freq - 0.75).abs() < 0.05, "frequency {freq}");
    }

    #[test]
    fn collapse_rejects_invalid_distributions() {
        let mut rng = StdRng::seed_from_u64(0);
        let settings = MeasurementSettings::default();
        let empty: [&str; 0] = [];
        assert_eq!(
            collapse(&empty, &[], settings, &mut rng),
            Err(MeasurementError::MissingInput)
        );
        assert_eq!(
            collapse(&["a"], &[0.5, 0.5], settings, &mut rng),
            Err(MeasurementError::LengthMismatch {
                states: 1,
                probabilities: 2
            })
        );
        assert!(matches!(
            collapse(&["a", "b"], &[1.5, -0.5], settings, &mut rng),
            Err(MeasurementError::InvalidProbability { index: 1, .. })
        ));
        let err = collapse(&["a", "b"], &[0.5, 0.4], settings, &mut rng)
            .expect_err("expected normalization error");
        assert!(format!("{err}").contains("must sum to 1"));
    }

    #[test]
    fn loose_tolerance_accepts_rounded_distributions() {
        let states = ["a", "b"];
        let probs = [0.5, 0.495];
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            collapse(&states, &probs, MeasurementSettings::default(), &mut rng),
            Err(MeasurementError::NotNormalized { .. })
        ));

        let loose = MeasurementSettings { tolerance: 1e-2 };
        let outcome = collapse(&states, &probs, loose, &mut rng).expect("within tolerance");
        assert!(outcome.index < 2);
        assert_eq!(outcome.probability, probs[outcome.index]);

        let tight = MeasurementSettings { tolerance: 1e-3 };
        assert!(collapse(&states, &probs, tight, &mut rng).is_err());
    }
}

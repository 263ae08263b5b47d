//! Small number-theory demonstrations: Goldbach decompositions, exhaustive
//! subset sums and truncated p-adic expansions.
//!
//! The searches are brute force and meant for small inputs; `SearchLimits`
//! bounds how far they are allowed to go.

use anyhow::{bail, Result};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Largest n accepted by the Goldbach searches.
    pub max_goldbach: u64,
    /// Longest input accepted by the subset-sum search (2^len subsets).
    pub max_subset_len: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_goldbach: 1_000_000,
            max_subset_len: 20,
        }
    }
}

/// Sieve of Eratosthenes: `sieve[k]` is true iff k is prime, for k in 0..=n.
fn sieve(n: u64) -> Result<Vec<bool>> {
    let Some(len) = usize::try_from(n).ok().and_then(|n| n.checked_add(1)) else {
        bail!("Sieve bound {} is too large for this platform.", n);
    };
    let mut is_prime = Vec::new();
    if is_prime.try_reserve_exact(len).is_err() {
        bail!("Cannot allocate a sieve up to {}.", n);
    }
    is_prime.resize(len, true);
    is_prime[0] = false;
    if len > 1 {
        is_prime[1] = false;
    }
    let mut i = 2usize;
    while i * i < len {
        if is_prime[i] {
            for multiple in (i * i..len).step_by(i) {
                is_prime[multiple] = false;
            }
        }
        i += 1;
    }
    Ok(is_prime)
}

fn sieved_primes(is_prime: &[bool]) -> Vec<u64> {
    is_prime
        .iter()
        .enumerate()
        .filter_map(|(k, &prime)| prime.then_some(k as u64))
        .collect()
}

pub fn primes_up_to(n: u64) -> Result<Vec<u64>> {
    Ok(sieved_primes(&sieve(n)?))
}

pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Every prime pair (a, b) with a ≤ b and a + b = n (strong Goldbach).
///
/// Returns `Ok(None)` when no pair exists.
pub fn goldbach_pairs(n: u64, limits: SearchLimits) -> Result<Option<Vec<(u64, u64)>>> {
    if n <= 2 || n % 2 != 0 {
        bail!("Goldbach pairs need an even integer greater than 2 (got {}).", n);
    }
    if n > limits.max_goldbach {
        bail!(
            "n = {} exceeds the search bound max_goldbach = {}.",
            n,
            limits.max_goldbach
        );
    }

    let is_prime = sieve(n)?;
    let pairs: Vec<(u64, u64)> = (2..=n / 2)
        .filter(|&a| is_prime[a as usize] && is_prime[(n - a) as usize])
        .map(|a| (a, n - a))
        .collect();

    debug!("{} Goldbach pair(s) for n = {}", pairs.len(), n);
    Ok((!pairs.is_empty()).then_some(pairs))
}

/// Every prime triple (a, b, c) with a ≤ b ≤ c and a + b + c = n (weak Goldbach).
pub fn goldbach_triplets(n: u64, limits: SearchLimits) -> Result<Option<Vec<(u64, u64, u64)>>> {
    if n <= 5 || n % 2 == 0 {
        bail!("Goldbach triplets need an odd integer greater than 5 (got {}).", n);
    }
    if n > limits.max_goldbach {
        bail!(
            "n = {} exceeds the search bound max_goldbach = {}.",
            n,
            limits.max_goldbach
        );
    }

    let is_prime = sieve(n)?;
    let primes = sieved_primes(&is_prime);
    let mut triplets = Vec::new();
    for (i, &a) in primes.iter().enumerate() {
        if 3 * a > n {
            break;
        }
        for &b in &primes[i..] {
            if a + 2 * b > n {
                break;
            }
            let c = n - a - b;
            if is_prime[c as usize] {
                triplets.push((a, b, c));
            }
        }
    }

    debug!("{} Goldbach triplet(s) for n = {}", triplets.len(), n);
    Ok((!triplets.is_empty()).then_some(triplets))
}

/// Every combination of `values` (by position) whose elements sum to `target`.
///
/// Combinations are visited by increasing size, each size in lexicographic
/// index order. Returns `Ok(None)` when nothing matches.
pub fn subset_sums(
    values: &[i64],
    target: i64,
    limits: SearchLimits,
) -> Result<Option<Vec<Vec<i64>>>> {
    if values.len() > limits.max_subset_len {
        bail!(
            "Subset search over {} values exceeds max_subset_len = {}.",
            values.len(),
            limits.max_subset_len
        );
    }

    let mut matches = Vec::new();
    for size in 1..=values.len() {
        let mut indices: Vec<usize> = (0..size).collect();
        loop {
            let sum: i128 = indices.iter().map(|&i| values[i] as i128).sum();
            if sum == target as i128 {
                matches.push(indices.iter().map(|&i| values[i]).collect());
            }
            if !next_combination(&mut indices, values.len()) {
                break;
            }
        }
    }

    debug!("{} subset(s) sum to {}", matches.len(), target);
    Ok((!matches.is_empty()).then_some(matches))
}

/// Advances `indices` to the next k-combination of 0..n; false when exhausted.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] != i + n - k {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

// --- p-adic expansions ---

/// The first `digits` base-p digits of n, least significant first.
///
/// Each step emits n mod p (in 0..p) and replaces n by ⌊n/p⌋, exactly
/// `digits` times. Negative n therefore yields the p-adic complement,
/// e.g. −1 in base 10 is …999.
pub fn p_adic_digits(n: i64, p: u64, digits: usize) -> Result<Vec<u64>> {
    if p < 2 {
        bail!("Base p must be at least 2 (got {}).", p);
    }
    let base = p as i128;
    let mut value = n as i128;
    let mut out = Vec::with_capacity(digits);
    for _ in 0..digits {
        out.push(value.rem_euclid(base) as u64);
        value = value.div_euclid(base);
    }
    Ok(out)
}

/// Σ dᵢ·pⁱ for a truncated expansion (least significant digit first).
pub fn p_adic_value(digits: &[u64], p: u64) -> Result<i128> {
    if p < 2 {
        bail!("Base p must be at least 2 (got {}).", p);
    }
    let mut total: i128 = 0;
    let mut power: i128 = 1;
    for (i, &d) in digits.iter().enumerate() {
        if d >= p {
            bail!("Digit {} at position {} is not below the base {}.", d, i, p);
        }
        let term = power.checked_mul(d as i128);
        total = match term.and_then(|t| total.checked_add(t)) {
            Some(v) => v,
            None => bail!("Expansion with {} digits overflows i128.", digits.len()),
        };
        if i + 1 < digits.len() {
            power = match power.checked_mul(p as i128) {
                Some(v) => v,
                None => bail!("Expansion with {} digits overflows i128.", digits.len()),
            };
        }
    }
    Ok(total)
}

/// Exponent of the largest power of p dividing n; `None` for n = 0.
pub fn p_adic_valuation(n: i64, p: u64) -> Result<Option<u32>> {
    if p < 2 {
        bail!("Base p must be at least 2 (got {}).", p);
    }
    if n == 0 {
        return Ok(None);
    }
    let base = p as i128;
    let mut value = n as i128;
    let mut exponent = 0u32;
    while value % base == 0 {
        value /= base;
        exponent += 1;
    }
    Ok(Some(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_err_contains<T: std::fmt::Debug>(result: Result<T>, needle: &str) {
        let err = result.expect_err("expected error");
        let message = format!("{err}");
        assert!(
            message.contains(needle),
            "expected error to contain \"{needle}\", got \"{message}\""
        );
    }

    #[test]
    fn sieve_and_trial_division_agree() {
        let primes = primes_up_to(50).expect("small bound");
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        let below_200 = primes_up_to(200).expect("small bound");
        for n in 0..200 {
            assert_eq!(is_prime(n), below_200.contains(&n), "n = {n}");
        }
        assert!(primes_up_to(0).expect("zero bound").is_empty());
        assert!(primes_up_to(1).expect("unit bound").is_empty());
    }

    #[test]
    fn oversize_sieve_is_an_error_not_a_panic() {
        let limits = SearchLimits {
            max_goldbach: u64::MAX,
            max_subset_len: 20,
        };
        assert!(goldbach_pairs(u64::MAX - 1, limits).is_err());
        assert!(goldbach_triplets(u64::MAX, limits).is_err());
        assert!(primes_up_to(u64::MAX).is_err());
    }

    #[test]
    fn goldbach_28_includes_11_17() {
        let pairs = goldbach_pairs(28, SearchLimits::default())
            .expect("28 is valid")
            .expect("28 has decompositions");
        assert!(pairs
            .iter()
            .any(|&(a, b)| (a, b) == (11, 17) || (a, b) == (17, 11)));
        assert_eq!(pairs, vec![(5, 23), (11, 17)]);
    }

    #[test]
    fn goldbach_smallest_even() {
        let pairs = goldbach_pairs(4, SearchLimits::default())
            .expect("4 is valid")
            .expect("4 = 2 + 2");
        assert_eq!(pairs, vec![(2, 2)]);
    }

    #[test]
    fn goldbach_rejects_bad_input() {
        let limits = SearchLimits::default();
        assert_err_contains(goldbach_pairs(2, limits), "even integer greater than 2");
        assert_err_contains(goldbach_pairs(9, limits), "even integer greater than 2");
        let tight = SearchLimits {
            max_goldbach: 10,
            ..SearchLimits::default()
        };
        assert_err_contains(goldbach_pairs(12, tight), "exceeds the search bound");
    }

    #[test]
    fn goldbach_triplets_for_small_odd() {
        let triplets = goldbach_triplets(7, SearchLimits::default())
            .expect("7 is valid")
            .expect("7 = 2 + 2 + 3");
        assert_eq!(triplets, vec![(2, 2, 3)]);

        let triplets = goldbach_triplets(15, SearchLimits::default())
            .expect("15 is valid")
            .expect("15 has decompositions");
        assert!(triplets.contains(&(5, 5, 5)));
        assert!(triplets.contains(&(3, 5, 7)));
        for (a, b, c) in triplets {
            assert!(a <= b && b <= c);
            assert_eq!(a + b + c, 15);
        }
        assert_err_contains(goldbach_triplets(8, SearchLimits::default()), "odd integer");
    }

    #[test]
    fn subset_sums_enumerates_by_size() {
        let found = subset_sums(&[3, 34, 4, 12, 5, 2], 9, SearchLimits::default())
            .expect("search succeeds")
            .expect("9 is reachable");
        assert_eq!(found, vec![vec![4, 5], vec![3, 4, 2]]);
    }

    #[test]
    fn subset_sums_none_and_limits() {
        assert!(subset_sums(&[1, 2], 10, SearchLimits::default())
            .expect("search succeeds")
            .is_none());
        assert!(subset_sums(&[], 0, SearchLimits::default())
            .expect("search succeeds")
            .is_none());
        let tight = SearchLimits {
            max_subset_len: 2,
            ..SearchLimits::default()
        };
        assert_err_contains(subset_sums(&[1, 2, 3], 3, tight), "max_subset_len");
    }

    #[test]
    fn subset_sums_keeps_duplicates_by_position() {
        let found = subset_sums(&[2, 2, -1], 2, SearchLimits::default())
            .expect("search succeeds")
            .expect("2 is reachable");
        assert_eq!(found, vec![vec![2], vec![2]]);
    }

    #[test]
    fn p_adic_minus_one_is_all_nines() {
        assert_eq!(p_adic_digits(-1, 10, 3).expect("valid base"), vec![9, 9, 9]);
    }

    #[test]
    fn p_adic_positive_and_roundtrip() {
        let digits = p_adic_digits(45, 3, 5).expect("valid base");
        // 45 = 0 + 0*3 + 2*9 + 1*27
        assert_eq!(digits, vec![0, 0, 2, 1, 0]);
        assert_eq!(p_adic_value(&digits, 3).expect("valid digits"), 45);

        // −1 truncated to k digits is p^k − 1.
        let nines = p_adic_digits(-1, 10, 4).expect("valid base");
        assert_eq!(p_adic_value(&nines, 10).expect("valid digits"), 9999);
    }

    #[test]
    fn p_adic_runs_exact_iterations() {
        assert!(p_adic_digits(7, 2, 0).expect("valid base").is_empty());
        assert_eq!(
            p_adic_digits(7, 2, 6).expect("valid base"),
            vec![1, 1, 1, 0, 0, 0]
        );
        assert_err_contains(p_adic_digits(7, 1, 3), "at least 2");
        assert_err_contains(p_adic_value(&[5], 5), "not below the base");
    }

    #[test]
    fn p_adic_valuation_counts_factors() {
        assert_eq!(p_adic_valuation(40, 2).expect("valid base"), Some(3));
        assert_eq!(p_adic_valuation(-75, 5).expect("valid base"), Some(2));
        assert_eq!(p_adic_valuation(7, 3).expect("valid base"), Some(0));
        assert_eq!(p_adic_valuation(0, 3).expect("valid base"), None);
    }
}

//! Number-theory searches exposed to JavaScript.

use crate::{core_error, settings_or_default};
use fphysics_core::number_theory::{
    goldbach_pairs as core_goldbach_pairs, goldbach_triplets as core_goldbach_triplets,
    p_adic_digits as core_p_adic_digits, subset_sums as core_subset_sums, SearchLimits,
};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Returns `[[p, q], ...]` with p ≤ q, or `undefined` when no pair exists.
#[wasm_bindgen(js_name = goldbachPairs)]
pub fn goldbach_pairs(n: u64, limits: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let limits: SearchLimits = settings_or_default(limits, "search limits")?;
    let pairs =
        core_goldbach_pairs(n, limits).map_err(|e| core_error("Goldbach search failed", e))?;
    to_value(&pairs).map_err(|e| JsValue::from_str(&format!("Failed to serialize pairs: {e}")))
}

#[wasm_bindgen(js_name = goldbachTriplets)]
pub fn goldbach_triplets(n: u64, limits: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let limits: SearchLimits = settings_or_default(limits, "search limits")?;
    let triplets =
        core_goldbach_triplets(n, limits).map_err(|e| core_error("Goldbach search failed", e))?;
    to_value(&triplets)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize triplets: {e}")))
}

/// Returns the matching subsets as arrays of numbers, or `undefined`.
#[wasm_bindgen(js_name = subsetSums)]
pub fn subset_sums(values: Vec<i64>, target: i64, limits: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let limits: SearchLimits = settings_or_default(limits, "search limits")?;
    let subsets = core_subset_sums(&values, target, limits)
        .map_err(|e| core_error("Subset search failed", e))?;
    to_value(&subsets)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize subsets: {e}")))
}

/// Least-significant-first p-adic digits of `n`.
#[wasm_bindgen(js_name = pAdicDigits)]
pub fn p_adic_digits(n: i64, p: u64, digits: usize) -> Result<Vec<u64>, JsValue> {
    console_error_panic_hook::set_once();

    core_p_adic_digits(n, p, digits).map_err(|e| core_error("p-adic expansion failed", e))
}

#[cfg(test)]
mod tests {
    use super::p_adic_digits;

    #[test]
    fn p_adic_digits_of_negative_one() {
        let digits = p_adic_digits(-1, 7, 4).expect("valid base");
        assert_eq!(digits, vec![6, 6, 6, 6]);
    }
}

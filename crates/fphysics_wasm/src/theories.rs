//! Cardano roots and seeded measurement collapse for JavaScript.

use crate::settings_or_default;
use fphysics_core::theories::{
    collapse as core_collapse, depressed_cubic_root as core_cubic_root,
    depressed_cubic_roots as core_cubic_roots, MeasurementSettings,
};
use js_sys::Float64Array;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// `[re, im]` of the principal-branch Cardano root.
#[wasm_bindgen(js_name = depressedCubicRoot)]
pub fn depressed_cubic_root(p: f64, q: f64) -> Vec<f64> {
    console_error_panic_hook::set_once();

    let root = core_cubic_root(p, q);
    vec![root.re, root.im]
}

/// All three roots, packed as `[re0, im0, re1, im1, re2, im2]`.
#[wasm_bindgen(js_name = depressedCubicRoots)]
pub fn depressed_cubic_roots(p: f64, q: f64) -> Float64Array {
    console_error_panic_hook::set_once();

    let packed: Vec<f64> = core_cubic_roots(p, q)
        .roots
        .iter()
        .flat_map(|root| [root.re, root.im])
        .collect();
    Float64Array::from(packed.as_slice())
}

/// One Born-rule measurement. The same `seed` always yields the same outcome.
#[wasm_bindgen]
pub fn collapse(
    states: Vec<String>,
    probabilities: Vec<f64>,
    settings: JsValue,
    seed: u64,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let settings: MeasurementSettings = settings_or_default(settings, "measurement settings")?;
    let mut rng = StdRng::seed_from_u64(seed);
    let outcome = core_collapse(&states, &probabilities, settings, &mut rng)
        .map_err(|e| JsValue::from_str(&format!("Measurement failed: {e}")))?;
    to_value(&outcome).map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {e}")))
}

#[cfg(test)]
mod tests {
    use super::depressed_cubic_root;

    #[test]
    fn principal_root_is_packed_as_re_im() {
        let root = depressed_cubic_root(-15.0, -4.0);
        assert_eq!(root.len(), 2);
        assert!((root[0] - 4.0).abs() < 1e-9);
        assert!(root[1].abs() < 1e-9);
    }
}

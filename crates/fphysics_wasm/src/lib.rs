//! WebAssembly bindings for `fphysics_core`.
//!
//! Every export validates its input in the core crate and hands failures back
//! to JavaScript as string `JsValue`s; structured results cross the boundary
//! through `serde_wasm_bindgen`.

mod number_theory;
mod theories;

pub use number_theory::{goldbach_pairs, goldbach_triplets, p_adic_digits, subset_sums};
pub use theories::{collapse, depressed_cubic_root, depressed_cubic_roots};

use wasm_bindgen::JsValue;

/// Formats a core error (including its context chain) for JavaScript.
pub(crate) fn core_error(prefix: &str, err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{prefix}: {err:#}"))
}

/// Deserializes an optional settings object, falling back to `Default` when
/// JavaScript passes `undefined` or `null`.
pub(crate) fn settings_or_default<T>(value: JsValue, what: &str) -> Result<T, JsValue>
where
    T: Default + serde::de::DeserializeOwned,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {what}: {e}")))
}

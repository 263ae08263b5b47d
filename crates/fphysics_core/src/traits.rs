use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that formula evaluators can run on.
/// Must support basic arithmetic, debug printing, and conversion from f64.
/// Implemented by `f64` and by `autodiff::Dual`, so a formula written once
/// can be evaluated or differentiated.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {
    /// Lifts an `f64` literal into the scalar type.
    fn lit(value: f64) -> Self {
        Self::from_f64(value).unwrap()
    }
}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

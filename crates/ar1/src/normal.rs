//! Standard normal CDF via the error function.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erf;

/// Standard normal CDF, `0.5 + 0.5 * erf(x / sqrt(2))`.
pub fn std_normal_cdf(x: f64) -> f64 {
    0.5 + half_erf(x)
}

/// `0.5 * erf(x / sqrt(2))`, i.e. `Phi(x) - 0.5`.
///
/// Bin probabilities are taken as differences of this quantity rather than
/// of [`std_normal_cdf`]; the `0.5` offsets cancel exactly that way.
pub(crate) fn half_erf(x: f64) -> f64 {
    0.5 * erf(x / SQRT_2)
}

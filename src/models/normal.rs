use statrs::consts::SQRT_2PI;
use statrs::function::erf::erf;
use std::f64::consts::SQRT_2;

/// Standard normal CDF: Phi(x) = 0.5 * (1 + erf(x / sqrt(2))).
///
/// statrs' erf is odd-symmetric with absolute error around 1e-11,
/// which bounds the accuracy of every price and Greek built on it.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Standard normal PDF: phi(x) = exp(-x^2 / 2) / sqrt(2*pi).
#[inline]
pub fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

use crate::models::normal::{normal_cdf, normal_pdf};
use crate::models::PricingModel;
use crate::params::{DayCountBasis, OptionKind, PricingInputs, PricingResult};

/// Floor for time to expiry (years). Keeps sigma*sqrt(T) away from zero.
const MIN_TIME_TO_EXPIRY: f64 = 1e-6;

/// Floor for volatility.
const MIN_VOLATILITY: f64 = 1e-8;

/// Vega per unit vol -> vega per vol point (1% vol).
const VOL_POINT: f64 = 0.01;

/// Unit rate/yield -> basis point.
const BASIS_POINTS_PER_UNIT: f64 = 10000.0;

#[inline]
pub(crate) fn clamp_time(t: f64) -> f64 {
    if t < MIN_TIME_TO_EXPIRY {
        MIN_TIME_TO_EXPIRY
    } else {
        t
    }
}

#[inline]
fn clamp_volatility(sigma: f64) -> f64 {
    if sigma < MIN_VOLATILITY {
        MIN_VOLATILITY
    } else {
        sigma
    }
}

/// Black-Scholes-Merton European option price and Greeks.
///
/// d1 = (ln(S/K) + (r - q + sigma^2/2)*T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
///
/// Time and volatility below their floors are silently raised to the floor,
/// so the result is always populated. Spot and strike are not checked:
/// non-positive values give non-finite output, as do non-finite inputs.
///
/// Pure function: every intermediate is recomputed per call, nothing is cached.
/// Expression order follows the textbook closed form term by term; the
/// unit-converted fields are exact functions of the annual ones.
pub fn evaluate(inputs: &PricingInputs, theta_day_count_basis: DayCountBasis) -> PricingResult {
    let t = clamp_time(inputs.time_to_expiry);
    let sigma = clamp_volatility(inputs.volatility);
    if t != inputs.time_to_expiry || sigma != inputs.volatility {
        tracing::debug!(
            time_to_expiry = inputs.time_to_expiry,
            volatility = inputs.volatility,
            clamped_time = t,
            clamped_volatility = sigma,
            "inputs floored before pricing"
        );
    }

    let s0 = inputs.spot;
    let k = inputs.strike;
    let r = inputs.risk_free_rate;
    let q = inputs.dividend_yield;

    let sqrt_t = t.sqrt();
    let d1 = ((s0 / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;

    let exp_qt = (-q * t).exp();
    let exp_rt = (-r * t).exp();

    let cdf_d1 = normal_cdf(d1);
    let cdf_d2 = normal_cdf(d2);
    let cdf_neg_d1 = normal_cdf(-d1);
    let cdf_neg_d2 = normal_cdf(-d2);
    let pdf_d1 = normal_pdf(d1);

    // Shared decay term of theta
    let time_decay = -s0 * exp_qt * pdf_d1 * sigma / (2.0 * sqrt_t);

    let (price, delta, theta, rho, phi) = match inputs.option_kind {
        OptionKind::Call => (
            s0 * exp_qt * cdf_d1 - k * exp_rt * cdf_d2,
            exp_qt * cdf_d1,
            time_decay + q * s0 * exp_qt * cdf_d1 - r * k * exp_rt * cdf_d2,
            k * t * exp_rt * cdf_d2,
            -t * s0 * exp_qt * cdf_d1,
        ),
        OptionKind::Put => (
            k * exp_rt * cdf_neg_d2 - s0 * exp_qt * cdf_neg_d1,
            exp_qt * cdf_d1 - exp_qt,
            time_decay - q * s0 * exp_qt * cdf_neg_d1 + r * k * exp_rt * cdf_neg_d2,
            -k * t * exp_rt * cdf_neg_d2,
            t * s0 * exp_qt * cdf_neg_d1,
        ),
    };

    let gamma = exp_qt * pdf_d1 / (s0 * sigma * sqrt_t);
    let vega = s0 * exp_qt * pdf_d1 * sqrt_t;

    PricingResult {
        price,
        delta,
        gamma,
        vega_per_unit_vol: vega,
        vega_per_vol_point: vega * VOL_POINT,
        theta_per_year: theta,
        theta_per_day: theta / f64::from(theta_day_count_basis.days()),
        rho_per_unit_rate: rho,
        rho_per_basis_point: rho / BASIS_POINTS_PER_UNIT,
        phi_per_unit_yield: phi,
        phi_per_basis_point: phi / BASIS_POINTS_PER_UNIT,
    }
}

/// Closed-form BSM behind the `PricingModel` seam. Zero-sized.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for BlackScholesMerton {
    #[inline]
    fn name(&self) -> &'static str {
        "Black-Scholes-Merton"
    }

    #[inline]
    fn evaluate(
        &self,
        inputs: &PricingInputs,
        theta_day_count_basis: DayCountBasis,
    ) -> PricingResult {
        evaluate(inputs, theta_day_count_basis)
    }
}

pub mod black_scholes;
pub mod normal;

use crate::params::{DayCountBasis, PricingInputs, PricingResult};

/// All pricing models implement this trait.
/// evaluate() must be a pure function: deterministic output from inputs only.
/// Send + Sync so one instance can be shared across threads without coordination.
pub trait PricingModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Price and Greeks for one option. Never panics.
    fn evaluate(
        &self,
        inputs: &PricingInputs,
        theta_day_count_basis: DayCountBasis,
    ) -> PricingResult;
}

use crate::errors::{PricerError, PricerResult};
use crate::models::black_scholes::clamp_time;
use std::num::NonZeroU32;
use std::str::FromStr;

// ── Option kind ──

/// Closed set of European payoffs. Decided when inputs are built,
/// so the pricer never compares labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Case-sensitive: only `call` and `put` are accepted.
impl FromStr for OptionKind {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(PricerError::InvalidOptionKind(other.to_string())),
        }
    }
}

// ── Day-count basis ──

/// Divisor turning annual theta into per-day theta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DayCountBasis(NonZeroU32);

impl DayCountBasis {
    /// Calendar days.
    pub const CALENDAR: Self = Self(match NonZeroU32::new(365) {
        Some(n) => n,
        None => unreachable!(),
    });

    /// Trading days.
    pub const TRADING: Self = Self(match NonZeroU32::new(252) {
        Some(n) => n,
        None => unreachable!(),
    });

    pub fn new(days: u32) -> PricerResult<Self> {
        NonZeroU32::new(days)
            .map(Self)
            .ok_or(PricerError::InvalidDayCount(days))
    }

    #[inline]
    pub fn days(&self) -> u32 {
        self.0.get()
    }
}

impl std::fmt::Display for DayCountBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.days())
    }
}

// ── Inputs ──

/// Market and contract parameters for one evaluation. Stack-allocated, Copy.
///
/// Spot and strike are expected positive; nothing here checks that.
/// Time and volatility are floored by the pricer, not here, so the
/// caller's values are kept exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PricingInputs {
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64, // Years
    pub volatility: f64,     // Annualized, decimal
    pub risk_free_rate: f64, // Continuously compounded
    pub dividend_yield: f64, // Continuously compounded
    pub option_kind: OptionKind,
}

impl PricingInputs {
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        volatility: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
        option_kind: OptionKind,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            volatility,
            risk_free_rate,
            dividend_yield,
            option_kind,
        }
    }

    /// Same market, other payoff.
    #[inline]
    pub fn with_kind(self, option_kind: OptionKind) -> Self {
        Self { option_kind, ..self }
    }

    /// Right-hand side of put-call parity: S0*e^{-qT} - K*e^{-rT},
    /// on the same floored time the pricer uses.
    pub fn forward_parity(&self) -> f64 {
        let t = clamp_time(self.time_to_expiry);
        let dividend_discount = (-self.dividend_yield * t).exp();
        let rate_discount = (-self.risk_free_rate * t).exp();
        self.spot * dividend_discount - self.strike * rate_discount
    }
}

// ── Result ──

/// Price and Greeks for one evaluation, each in the units its name states.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PricingResult {
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub vega_per_unit_vol: f64,
    pub vega_per_vol_point: f64,
    pub theta_per_year: f64,
    pub theta_per_day: f64,
    pub rho_per_unit_rate: f64,
    pub rho_per_basis_point: f64,
    pub phi_per_unit_yield: f64,
    pub phi_per_basis_point: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_kind_labels() {
        assert_eq!("call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("put".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!(OptionKind::Call.to_string(), "call");
        assert_eq!(OptionKind::Put.to_string(), "put");
    }

    #[test]
    fn test_option_kind_rejects_unknown_labels() {
        for label in ["Call", "PUT", "", "straddle", " call"] {
            let err = label.parse::<OptionKind>();
            assert!(
                matches!(err, Err(PricerError::InvalidOptionKind(ref s)) if s == label),
                "label {label:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_day_count_basis() {
        assert_eq!(DayCountBasis::CALENDAR.days(), 365);
        assert_eq!(DayCountBasis::TRADING.days(), 252);
        assert_eq!(DayCountBasis::new(360).unwrap().days(), 360);
        assert!(matches!(DayCountBasis::new(0), Err(PricerError::InvalidDayCount(0))));
    }

    #[test]
    fn test_with_kind_keeps_market() {
        let call = PricingInputs::new(100.0, 95.0, 0.25, 0.3, 0.02, 0.0, OptionKind::Call);
        let put = call.with_kind(OptionKind::Put);
        assert_eq!(put.option_kind, OptionKind::Put);
        assert_eq!(put.spot, call.spot);
        assert_eq!(put.strike, call.strike);
        assert_eq!(put.volatility, call.volatility);
    }

    #[test]
    fn test_forward_parity_zero_rates() {
        let inputs = PricingInputs::new(110.0, 100.0, 1.0, 0.2, 0.0, 0.0, OptionKind::Call);
        assert!((inputs.forward_parity() - 10.0).abs() < 1e-12);
    }
}

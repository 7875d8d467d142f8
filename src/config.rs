use crate::errors::{PricerError, PricerResult};
use crate::params::{DayCountBasis, OptionKind, PricingInputs};
use std::str::FromStr;

/// How the driver prints the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PricerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(PricerError::Parse(format!(
                "unknown output format {other:?} (expected \"text\" or \"json\")"
            ))),
        }
    }
}

/// Driver configuration. Every field has a default, so an empty
/// environment prices the worked example: ATM call, six months,
/// 20% vol, 3% rate, 1% yield, calendar-day theta.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub inputs: PricingInputs,
    pub theta_basis: DayCountBasis,
    pub output: OutputFormat,
}

impl AppConfig {
    pub fn from_env() -> PricerResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Split out so tests avoid the process environment.
    pub fn from_lookup<F>(lookup: F) -> PricerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let spot = parse_var(&lookup, "BSM_SPOT", "100")?;
        let strike = parse_var(&lookup, "BSM_STRIKE", "100")?;
        let time_to_expiry = parse_var(&lookup, "BSM_EXPIRY_YEARS", "0.5")?;
        let volatility = parse_var(&lookup, "BSM_VOLATILITY", "0.20")?;
        let risk_free_rate = parse_var(&lookup, "BSM_RATE", "0.03")?;
        let dividend_yield = parse_var(&lookup, "BSM_DIVIDEND_YIELD", "0.01")?;
        let option_kind: OptionKind = parse_var(&lookup, "BSM_OPTION_KIND", "call")?;
        let basis_days: u32 = parse_var(&lookup, "BSM_THETA_BASIS", "365")?;
        let theta_basis = DayCountBasis::new(basis_days)
            .map_err(|e| PricerError::Config(format!("BSM_THETA_BASIS: {e}")))?;
        let output = parse_var(&lookup, "BSM_OUTPUT", "text")?;

        Ok(Self {
            inputs: PricingInputs::new(
                spot,
                strike,
                time_to_expiry,
                volatility,
                risk_free_rate,
                dividend_yield,
                option_kind,
            ),
            theta_basis,
            output,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: &str) -> PricerResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<T>()
        .map_err(|e| PricerError::Config(format!("{key}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(pairs: &[(&str, &str)]) -> PricerResult<AppConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_are_worked_example() {
        let cfg = config_with(&[]).unwrap();
        assert_eq!(
            cfg.inputs,
            PricingInputs::new(100.0, 100.0, 0.5, 0.20, 0.03, 0.01, OptionKind::Call)
        );
        assert_eq!(cfg.theta_basis, DayCountBasis::CALENDAR);
        assert_eq!(cfg.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let cfg = config_with(&[
            ("BSM_SPOT", "42.5"),
            ("BSM_OPTION_KIND", "put"),
            ("BSM_RATE", "-0.005"),
            ("BSM_THETA_BASIS", "252"),
            ("BSM_OUTPUT", "json"),
        ])
        .unwrap();
        assert_eq!(cfg.inputs.spot, 42.5);
        assert_eq!(cfg.inputs.option_kind, OptionKind::Put);
        assert_eq!(cfg.inputs.risk_free_rate, -0.005);
        assert_eq!(cfg.theta_basis, DayCountBasis::TRADING);
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn test_bad_number_names_variable() {
        let err = config_with(&[("BSM_VOLATILITY", "twenty")]).unwrap_err();
        assert!(err.to_string().contains("BSM_VOLATILITY"), "got: {err}");
    }

    #[test]
    fn test_unknown_option_kind_rejected() {
        let err = config_with(&[("BSM_OPTION_KIND", "Call")]).unwrap_err();
        assert!(matches!(err, PricerError::Config(_)));
        assert!(err.to_string().contains("BSM_OPTION_KIND"), "got: {err}");
    }

    #[test]
    fn test_zero_basis_rejected() {
        let err = config_with(&[("BSM_THETA_BASIS", "0")]).unwrap_err();
        assert!(err.to_string().contains("BSM_THETA_BASIS"), "got: {err}");
    }

    #[test]
    fn test_output_format_labels() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}

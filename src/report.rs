use crate::errors::PricerResult;
use crate::params::{DayCountBasis, PricingInputs, PricingResult};

/// One labelled line per field, fixed order, six decimals.
pub fn render_text(res: &PricingResult) -> String {
    let rows: [(&str, f64); 11] = [
        ("Price", res.price),
        ("Delta", res.delta),
        ("Gamma", res.gamma),
        ("Vega (per 1.00 vol)", res.vega_per_unit_vol),
        ("Vega (per vol-pt)", res.vega_per_vol_point),
        ("Theta (per year)", res.theta_per_year),
        ("Theta (per day)", res.theta_per_day),
        ("Rho (per 1.00)", res.rho_per_unit_rate),
        ("Rho (per bp)", res.rho_per_basis_point),
        ("Phi (per 1.00)", res.phi_per_unit_yield),
        ("Phi (per bp)", res.phi_per_basis_point),
    ];

    rows.iter()
        .map(|(label, value)| format!("{label}: {value:.6}\n"))
        .collect()
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    inputs: &'a PricingInputs,
    theta_basis: DayCountBasis,
    result: &'a PricingResult,
}

/// Pretty JSON with the inputs echoed next to the result.
pub fn render_json(
    inputs: &PricingInputs,
    theta_basis: DayCountBasis,
    res: &PricingResult,
) -> PricerResult<String> {
    let report = JsonReport {
        inputs,
        theta_basis,
        result: res,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

use bsm_greeks::config::{AppConfig, OutputFormat};
use bsm_greeks::models::black_scholes::BlackScholesMerton;
use bsm_greeks::models::PricingModel;
use bsm_greeks::report;

fn main() {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("bsm_greeks starting");

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let model = BlackScholesMerton::new();
    let inputs = cfg.inputs;

    tracing::info!(
        model = model.name(),
        spot = inputs.spot,
        strike = inputs.strike,
        time_to_expiry = inputs.time_to_expiry,
        volatility = inputs.volatility,
        rate = inputs.risk_free_rate,
        dividend_yield = inputs.dividend_yield,
        kind = %inputs.option_kind,
        theta_basis = %cfg.theta_basis,
        "pricing option"
    );

    let result = model.evaluate(&inputs, cfg.theta_basis);

    match cfg.output {
        OutputFormat::Text => print!("{}", report::render_text(&result)),
        OutputFormat::Json => match report::render_json(&inputs, cfg.theta_basis, &result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("report error: {e}");
                std::process::exit(1);
            }
        },
    }

    tracing::debug!(price = result.price, "pricing complete");
}

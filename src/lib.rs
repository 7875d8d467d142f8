//! Black-Scholes-Merton price and Greeks for European options with a
//! continuous dividend yield. Closed form only.
//!
//! ```
//! use bsm_greeks::{evaluate, DayCountBasis, OptionKind, PricingInputs};
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 0.5, 0.20, 0.03, 0.01, OptionKind::Call);
//! let res = evaluate(&inputs, DayCountBasis::CALENDAR);
//! assert!((res.price - 6.090127).abs() < 1e-6);
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod params;
pub mod report;

pub use errors::{PricerError, PricerResult};
pub use models::black_scholes::{evaluate, BlackScholesMerton};
pub use models::normal::{normal_cdf, normal_pdf};
pub use models::PricingModel;
pub use params::{DayCountBasis, OptionKind, PricingInputs, PricingResult};

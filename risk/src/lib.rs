mod error;
mod greeks;

pub use error::RiskError;
pub use greeks::{call_greeks, Greeks};

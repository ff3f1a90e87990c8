use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("parameter '{name}' must be strictly positive and finite, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },
    #[error("number of simulations must be strictly positive")]
    NoSimulations,
    #[error("valuation produced a non-finite value")]
    NonFinite,
}

use pricing::error::PricingError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RiskError {
    #[error(transparent)]
    InvalidParameter(#[from] PricingError),
    #[error("sensitivity produced a non-finite value")]
    NonFinite,
}

use crate::common::models::OptionParameters;
use crate::error::PricingError;
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn call(params: &Self::Params) -> Result<f64, PricingError>;
}

/// European call option price for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    fn d1_d2(dp: &OptionParameters) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.time_to_expiry.sqrt();
        let d1 = ((dp.spot / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiry)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = OptionParameters;

    fn call(dp: &OptionParameters) -> Result<f64, PricingError> {
        dp.validate()?;
        let (d1, d2) = Self::d1_d2(dp);
        let price =
            cdf(d1) * dp.spot - cdf(d2) * dp.strike * (-dp.rfr * dp.time_to_expiry).exp();
        if !price.is_finite() {
            return Err(PricingError::NonFinite);
        }
        Ok(price)
    }
}

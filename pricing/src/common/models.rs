use crate::error::PricingError;

/// The scalar inputs of a European option valuation.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionParameters {
    /// the asset's price at time t
    pub spot: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiry: f64,
    /// the annualized risk-free interest rate; may be negative
    pub rfr: f64,
    /// the annualized standard deviation of the asset's returns
    pub vola: f64,
}

impl OptionParameters {
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        rfr: f64,
        vola: f64,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            time_to_expiry,
            rfr,
            vola,
        };
        params.validate()?;
        Ok(params)
    }

    /// Every valuation component re-checks its inputs before any arithmetic,
    /// so a degenerate parameter surfaces as an error instead of a NaN.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("time_to_expiry", self.time_to_expiry)?;
        ensure_positive("vola", self.vola)
    }
}

fn ensure_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::NonPositiveParameter { name, value })
    }
}

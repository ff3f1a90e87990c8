use pricing::common::models::OptionParameters;
use probability::distribution::{Continuous, Distribution, Gaussian};

use crate::error::RiskError;

fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

/// First and second order sensitivities of a European call, in the
/// conventional order delta, gamma, vega, theta, rho.
/// https://en.wikipedia.org/wiki/Greeks_(finance)
#[derive(Clone, Debug, PartialEq)]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d2V/dS2
    pub gamma: f64,
    /// dV/dsigma
    pub vega: f64,
    /// dV/dt
    pub theta: f64,
    /// dV/dr
    pub rho: f64,
}

/// Closed-form Black-Scholes sensitivities of the call leg, without a
/// dividend yield term. d1 and d2 are recomputed locally; the computation
/// is cheap enough that sharing them with the pricer would gain nothing.
pub fn call_greeks(dp: &OptionParameters) -> Result<Greeks, RiskError> {
    dp.validate()?;

    let sqrt_t = dp.time_to_expiry.sqrt();
    let sigma_exp = dp.vola * sqrt_t;
    let d1 = ((dp.spot / dp.strike).ln() + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiry)
        / sigma_exp;
    let d2 = d1 - sigma_exp;
    let disc_strike = dp.strike * (-dp.rfr * dp.time_to_expiry).exp();

    let greeks = Greeks {
        delta: cdf(d1),
        gamma: pdf(d1) / (dp.spot * sigma_exp),
        vega: dp.spot * pdf(d1) * sqrt_t,
        theta: -dp.spot * pdf(d1) * dp.vola / (2.0 * sqrt_t) - dp.rfr * disc_strike * cdf(d2),
        rho: disc_strike * dp.time_to_expiry * cdf(d2),
    };

    let all_finite = greeks.delta.is_finite()
        && greeks.gamma.is_finite()
        && greeks.vega.is_finite()
        && greeks.theta.is_finite()
        && greeks.rho.is_finite();
    if !all_finite {
        return Err(RiskError::NonFinite);
    }
    Ok(greeks)
}

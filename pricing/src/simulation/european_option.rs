use crate::common::models::OptionParameters;
use crate::error::PricingError;
use crate::simulation::gbm::GeometricBrownianMotion;
use crate::simulation::monte_carlo::{MonteCarloSampler, SampleEvaluator};

/// Default number of simulated terminal prices.
pub const DEFAULT_NR_SIMULATIONS: usize = 100_000;

#[derive(Debug)]
pub struct MonteCarloEuropeanOption {
    option_params: OptionParameters,
    sampler: MonteCarloSampler,
    seed_nr: Option<u64>,
}

impl MonteCarloEuropeanOption {
    pub fn new(
        option_params: OptionParameters,
        nr_simulations: usize,
        seed_nr: Option<u64>,
    ) -> Result<Self, PricingError> {
        option_params.validate()?;
        if nr_simulations == 0 {
            return Err(PricingError::NoSimulations);
        }
        Ok(Self {
            option_params,
            sampler: MonteCarloSampler::new(nr_simulations),
            seed_nr,
        })
    }

    pub fn with_default_simulations(
        option_params: OptionParameters,
        seed_nr: Option<u64>,
    ) -> Result<Self, PricingError> {
        Self::new(option_params, DEFAULT_NR_SIMULATIONS, seed_nr)
    }

    fn discount_factor(&self, t: f64) -> f64 {
        (-t * self.option_params.rfr).exp()
    }

    /// The simulated terminal asset prices, one per path. Exposed so a display
    /// collaborator can render the distribution without re-simulating.
    pub fn terminal_prices(&self) -> Vec<f64> {
        let stock_gbm: GeometricBrownianMotion = self.into();
        self.sampler.simulate(self.seed_nr, stock_gbm)
    }

    /// The price (theoretical value) of the standard European call option,
    /// the discounted average of the simulated payoffs. The estimator carries
    /// a sampling error of order 1/sqrt(nr_simulations); no variance reduction
    /// is applied.
    pub fn call(&self) -> Result<f64, PricingError> {
        self.discounted_mean_payoff(&self.terminal_prices())
    }

    /// The call price together with the terminal prices it was derived from,
    /// so a display collaborator plots the distribution behind the quoted
    /// value rather than a second simulation.
    pub fn call_with_terminal_prices(&self) -> Result<(f64, Vec<f64>), PricingError> {
        let terminal_prices = self.terminal_prices();
        let price = self.discounted_mean_payoff(&terminal_prices)?;
        Ok((price, terminal_prices))
    }

    fn discounted_mean_payoff(&self, terminal_prices: &[f64]) -> Result<f64, PricingError> {
        let disc_factor = self.discount_factor(self.option_params.time_to_expiry);
        let evaluator = SampleEvaluator::new(terminal_prices);
        let price = evaluator
            .evaluate_average(|st| (st - self.option_params.strike).max(0.0) * disc_factor)
            .ok_or(PricingError::NoSimulations)?;
        if !price.is_finite() {
            return Err(PricingError::NonFinite);
        }
        Ok(price)
    }
}

impl From<&MonteCarloEuropeanOption> for GeometricBrownianMotion {
    fn from(mceo: &MonteCarloEuropeanOption) -> Self {
        // under the risk neutral measure we have mu = r
        let drift = mceo.option_params.rfr;
        GeometricBrownianMotion::new(
            mceo.option_params.spot,
            drift,
            mceo.option_params.vola,
            mceo.option_params.time_to_expiry,
        )
    }
}

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Model params for the SDE
/// '''math
/// dS_t / S_t = mu dt + sigma dW_t
/// ''', where $dW_t ~ N(0, sqrt(dt))$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
pub struct GeometricBrownianMotion {
    initial_value: f64,
    /// drift term
    mu: f64,
    /// volatility
    sigma: f64,
    /// sampling horizon in years
    horizon: f64,
}

impl GeometricBrownianMotion {
    pub fn new(initial_value: f64, drift: f64, vola: f64, horizon: f64) -> Self {
        Self {
            initial_value,
            mu: drift,
            sigma: vola,
            horizon,
        }
    }

    /// Exact solution of the SDE at the horizon, driven by a single standard normal draw.
    pub fn terminal_value(&self, z: f64) -> f64 {
        let ret = self.horizon * (self.mu - self.sigma.powi(2) / 2.0)
            + self.horizon.sqrt() * self.sigma * z;
        self.initial_value * ret.exp()
    }
}

impl Distribution<f64> for GeometricBrownianMotion {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.terminal_value(rng.sample(StandardNormal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::SeedableRng;

    /// NOTE: the tolerance will depend on the number of samples and the volatility
    const TOLERANCE: f64 = 5e-2;

    #[test]
    fn terminal_value_without_randomness() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2, 1.0);
        // z = 0 leaves only the deterministic part of the exact solution
        let expected = 100.0 * (0.05_f64 - 0.2_f64.powi(2) / 2.0).exp();
        assert_eq!(gbm.terminal_value(0.0), expected);
    }

    #[test]
    fn log_return_matches_analytic_mean() {
        let nr_samples = 100_000;
        let drift = -0.2;
        let vola = 0.4;
        let s0 = 100.0;
        let tte = 5.0;

        let gbm = GeometricBrownianMotion::new(s0, drift, vola, tte);
        let mut rn_generator = rand_hc::Hc128Rng::seed_from_u64(13241113);

        let avg_log_return = (0..nr_samples)
            .map(|_| (gbm.sample(&mut rn_generator) / s0).ln())
            .sum::<f64>()
            / nr_samples as f64;

        // E[ln(S_T / S_0)] = (mu - sigma^2 / 2) * T
        let expected = tte * (drift - vola * vola / 2.0);
        assert_approx_eq!(avg_log_return, expected, TOLERANCE);
    }
}

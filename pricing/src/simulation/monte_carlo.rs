use rand::{Rng, SeedableRng};
use rand_distr::Distribution;
use rand_hc::Hc128Rng;

/// Draws the terminal samples of a Monte Carlo valuation from a given distribution.
#[derive(Debug)]
pub struct MonteCarloSampler {
    pub nr_samples: usize,
}

impl MonteCarloSampler {
    pub fn new(nr_samples: usize) -> Self {
        Self { nr_samples }
    }

    /// A seed yields a reproducible stream; without one the generator is drawn from entropy.
    pub fn rn_generator(seed_nr: Option<u64>) -> Hc128Rng {
        match seed_nr {
            Some(nr) => Hc128Rng::seed_from_u64(nr),
            None => Hc128Rng::from_entropy(),
        }
    }

    pub fn simulate(
        &self,
        seed_nr: Option<u64>,
        distribution: impl Distribution<f64>,
    ) -> Vec<f64> {
        let generator = Self::rn_generator(seed_nr);
        generator
            .sample_iter(distribution)
            .take(self.nr_samples)
            .collect()
    }
}

pub struct SampleEvaluator<'a> {
    samples: &'a [f64],
}

impl<'a> SampleEvaluator<'a> {
    pub fn new(samples: &'a [f64]) -> Self {
        Self { samples }
    }

    pub fn evaluate_average(&self, sample_fn: impl Fn(f64) -> f64) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let total = self.samples.iter().fold(0.0, |acc, &s| acc + sample_fn(s));
        Some(total / self.samples.len() as f64)
    }
}

mod european_option;
mod gbm;
pub mod monte_carlo;

pub use european_option::{MonteCarloEuropeanOption, DEFAULT_NR_SIMULATIONS};
pub use gbm::GeometricBrownianMotion;

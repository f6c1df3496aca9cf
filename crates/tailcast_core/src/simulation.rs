//! Monte Carlo price-path generation.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::error::ConfigError;
use crate::model::{ForecastConfig, PathMatrix};
use crate::statistics::ReturnEstimate;

/// Simulate `config.num_simulations` independent price paths.
///
/// Each path draws `horizon_days` standard-normal shocks, scales them by
/// the estimated volatility around the drift, and compounds the resulting
/// growth factors sequentially from the starting price.
///
/// A master generator seeded from `seed` derives one seed per path up
/// front, so every path has its own independent random stream and the
/// output is identical whether rows run serially or on the rayon pool.
pub fn simulate(
    estimate: &ReturnEstimate,
    config: &ForecastConfig,
    seed: u64,
) -> Result<PathMatrix, ConfigError> {
    config.validate()?;

    let mut master = SmallRng::seed_from_u64(seed);
    let path_seeds: Vec<u64> = (0..config.num_simulations)
        .map(|_| master.next_u64())
        .collect();

    let drift = estimate.mean_return;
    let volatility = estimate.volatility;
    let start = config.starting_price;
    let horizon = config.horizon_days;

    #[cfg(feature = "parallel")]
    let paths: Vec<Vec<f64>> = path_seeds
        .into_par_iter()
        .map(|path_seed| simulate_path(path_seed, drift, volatility, start, horizon))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let paths: Vec<Vec<f64>> = path_seeds
        .into_iter()
        .map(|path_seed| simulate_path(path_seed, drift, volatility, start, horizon))
        .collect();

    Ok(PathMatrix::new(start, paths))
}

/// One path: day 0 is the starting price, then sequential compounding.
fn simulate_path(seed: u64, drift: f64, volatility: f64, start: f64, horizon: usize) -> Vec<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut path = Vec::with_capacity(horizon + 1);
    path.push(start);

    let mut level = start;
    for _ in 0..horizon {
        let shock: f64 = rng.sample(StandardNormal);
        let rate = drift + volatility * shock;
        // Growth factors at or below -100% (and therefore non-positive
        // prices) are deliberately left unclamped.
        level *= 1.0 + rate;
        path.push(level);
    }

    path
}

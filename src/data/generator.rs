use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::DatasetError;
use super::model::{Dataset, GeneratorConfig, Vector};

/// Generate a dataset described by `config`.
///
/// A configured seed drives a [`StdRng`]; otherwise scalars come from
/// [`rand::thread_rng`] and differ from run to run.
pub fn generate(config: &GeneratorConfig) -> Result<Dataset, DatasetError> {
    match config.seed {
        Some(seed) => generate_with_rng(config, &mut StdRng::seed_from_u64(seed)),
        None => generate_with_rng(config, &mut rand::thread_rng()),
    }
}

/// Generate `config.num_vecs` vectors of `config.dim` scalars drawn
/// uniformly from `[0, config.max)` using `rng`.
///
/// `config.seed` is ignored here; the caller owns the random source.
pub fn generate_with_rng<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Dataset, DatasetError>
where
    R: Rng + ?Sized,
{
    // `Uniform::new` panics on an empty or infinite range.
    if !(config.max.is_finite() && config.max > 0.0) {
        return Err(DatasetError::InvalidBound(config.max));
    }
    let range = Uniform::new(0.0, config.max);

    let mut vectors = Vec::with_capacity(config.num_vecs);
    for _ in 0..config.num_vecs {
        let values: Vec<f64> = (0..config.dim).map(|_| range.sample(rng)).collect();
        vectors.push(Vector::new(values));
    }

    log::debug!(
        "generated {} vectors of dimension {} in [0, {})",
        config.num_vecs,
        config.dim,
        config.max
    );

    Dataset::from_vectors(vectors)
}

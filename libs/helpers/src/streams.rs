use std::cmp::Ordering;

use log::debug;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, LogNormal};

/// Random generator, reproducible when a seed is given
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Uniform integers in `0..max_value` (with repetitions when
/// `max_value` is small)
pub fn integer_stream(count: usize, max_value: i64, rng: &mut dyn RngCore) -> Vec<i64> {
    let values: Vec<i64> = (0..count).map(|_| rng.gen_range(0..max_value)).collect();
    debug!("Generated {} integers in [0, {})", values.len(), max_value);
    values
}

/// Log-normal scores, as produced by a ranking function
pub fn score_stream(count: usize, rng: &mut dyn RngCore) -> Vec<f32> {
    let log_normal = LogNormal::new(0., 1.).unwrap();
    (0..count).map(|_| log_normal.sample(rng)).collect()
}

/// Reference top-K: sorts everything and keeps the first `k` values
pub fn reference_smallest<T, F>(values: &[T], k: usize, less: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| {
        if less(a, b) {
            Ordering::Less
        } else if less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    sorted.truncate(k);
    sorted
}

// ============================================================
// Layer 4 — Train/Valid/Test Splitter
// ============================================================
// Shuffles samples once with a seeded generator, then cuts the
// shuffled sequence into three contiguous slices:
//
//   [0, train_end)          → train
//   [train_end, valid_end)  → valid
//   [valid_end, N)          → test
//
// The boundaries are truncated, never rounded:
//   train_end = floor(N * train)
//   valid_end = floor(N * (train + valid))
//
// Generator: ChaCha8Rng::seed_from_u64(seed) from rand_chacha.
// Shuffle:   rand::seq::SliceRandom::shuffle (Fisher-Yates).
// A given seed yields the same permutation on every platform.
//
// Reference: Rust Book §8 (Vectors)
//            rand / rand_chacha crate documentation

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::ratios::SplitRatios;

/// The three partitions of a split, each in shuffled order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partitions<T> {
    pub train: Vec<T>,
    pub valid: Vec<T>,
    pub test:  Vec<T>,
}

impl<T> Partitions<T> {
    pub fn total(&self) -> usize {
        self.train.len() + self.valid.len() + self.test.len()
    }
}

/// Compute `(train_end, valid_end)` for `total` items.
pub fn split_points(total: usize, ratios: &SplitRatios) -> (usize, usize) {
    let n = total as f64;
    let valid_end = ((n * (ratios.train() + ratios.valid())) as usize).min(total);
    let train_end = ((n * ratios.train()) as usize).min(valid_end);
    (train_end, valid_end)
}

/// Shuffle in place with a generator seeded from `seed`.
pub fn shuffle_seeded<T>(items: &mut [T], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}

/// Shuffle `samples` with `seed` and split into train/valid/test.
///
/// # Example
/// ```ignore
/// let ratios = SplitRatios::new(0.8, 0.1, 0.1)?;
/// let parts  = split_train_valid_test(lines, &ratios, 42);
/// ```
pub fn split_train_valid_test<T>(
    mut samples: Vec<T>,
    ratios:      &SplitRatios,
    seed:        u64,
) -> Partitions<T> {
    shuffle_seeded(&mut samples, seed);

    let total = samples.len();
    let (train_end, valid_end) = split_points(total, ratios);

    // split_off(n) keeps [0..n) and returns [n..)
    let test  = samples.split_off(valid_end);
    let valid = samples.split_off(train_end);

    let parts = Partitions { train: samples, valid, test };
    tracing::debug!(
        "Dataset split: {} train, {} valid, {} test of {}",
        parts.train.len(),
        parts.valid.len(),
        parts.test.len(),
        parts.total(),
    );
    parts
}

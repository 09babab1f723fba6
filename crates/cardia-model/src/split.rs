//! Seeded, stratified train/test partitioning.

use cardia_core::enums::Diagnosis;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Row indices for each partition, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Partition row indices so each class keeps its proportion in both halves.
///
/// Indices are grouped by label, each group is shuffled by one `StdRng`
/// seeded with `seed`, and `round(len * test_ratio)` of each group are held
/// out. A class with two or more rows always contributes at least one row to
/// each partition.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn stratified_split(labels: &[Diagnosis], test_ratio: f64, seed: u64) -> Split {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::new();

    for class in [Diagnosis::NoDisease, Diagnosis::Disease] {
        let mut group: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|(_, label)| **label == class)
            .map(|(idx, _)| idx)
            .collect();
        group.shuffle(&mut rng);

        let len = group.len();
        let held = if len < 2 {
            0
        } else {
            ((len as f64 * test_ratio).round() as usize).clamp(1, len - 1)
        };
        test.extend_from_slice(&group[..held]);
        train.extend_from_slice(&group[held..]);
    }

    train.sort_unstable();
    test.sort_unstable();
    Split { train, test }
}

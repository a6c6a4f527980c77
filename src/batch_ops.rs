//! Parallel key transformation over independent jobs (feature `batch-ops`).
//!
//! Each job keeps single-call semantics; only distinct jobs run concurrently.
//! Output order matches input order.

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::transform_key;

/// One `(key, seed, rounds)` triple.
#[cfg(feature = "batch-ops")]
#[derive(Debug, Clone, Copy)]
pub struct TransformJob<'a> {
    pub key: &'a [u8],
    pub seed: &'a [u8],
    pub rounds: u64,
}

#[cfg(feature = "batch-ops")]
impl<'a> TransformJob<'a> {
    #[must_use]
    pub const fn new(key: &'a [u8], seed: &'a [u8], rounds: u64) -> Self {
        Self { key, seed, rounds }
    }
}

#[cfg(feature = "batch-ops")]
pub fn transform_batch(jobs: &[TransformJob<'_>]) -> Vec<String> {
    jobs.par_iter()
        .map(|job| transform_key(job.key, job.seed, job.rounds))
        .collect()
}

//! Generation of a full batch of synthetic series.

use rayon::prelude::*;
use tracing::debug;

use rnd_sarima::generate_member;

use crate::spec::ModelSpecification;

/// The `count` series generated for one specification, in index order.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    series: Vec<Vec<f64>>,
}

impl Batch {
    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Returns series `index`, if present.
    pub fn get(&self, index: usize) -> Option<&[f64]> {
        self.series.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.series.iter().map(Vec::as_slice)
    }
}

/// Generates every member of `spec`.
///
/// Members are generated in parallel. Each one draws from its own stream,
/// so the result equals sequential generation.
///
/// When called from a rayon worker thread the members are generated on
/// that thread instead. [`RandomProvider`](crate::RandomProvider) computes
/// batches inside a cache cell, and a worker blocked in a parallel join may
/// steal a job that waits on the very cell it is initialising.
pub fn compute_batch(spec: &ModelSpecification) -> Batch {
    let canonical = spec.canonical_model();
    let on_worker = rayon::current_thread_index().is_some();
    debug!(
        spec = %spec,
        count = spec.count(),
        length = spec.length(),
        parallel = !on_worker,
        "computing batch"
    );
    let generate = |index: usize| {
        generate_member(
            &canonical,
            spec.noise_scale(),
            spec.length(),
            spec.seed(),
            index as u64,
        )
    };
    let series: Vec<Vec<f64>> = if on_worker {
        (0..spec.count()).map(&generate).collect()
    } else {
        (0..spec.count()).into_par_iter().map(&generate).collect()
    };
    Batch { series }
}

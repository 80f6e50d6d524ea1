use crate::tuner::TuningHints;
use std::mem::size_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuningParameters {
    /// Ranges of up to this many keys are handed to the fallback sort instead of being
    /// partitioned.
    pub comparative_threshold: usize,
    /// Histograms over more than this many keys use the four-table counting loop.
    pub unroll_histogram_above: usize,
}

impl Default for TuningParameters {
    fn default() -> Self {
        Self::new(&TuningHints::default())
    }
}

impl TuningParameters {
    pub fn new(hints: &TuningHints) -> Self {
        Self {
            comparative_threshold: Self::comparative_threshold(),
            unroll_histogram_above: Self::unroll_histogram_above(hints),
        }
    }

    fn comparative_threshold() -> usize {
        128
    }

    fn unroll_histogram_above(hints: &TuningHints) -> usize {
        // Once a range no longer fits in L1 the counting loop is memory bound and the extra
        // tables are free.
        let bytes = match (hints.l1_data_cache_size, hints.page_size) {
            (0, 0) => return usize::MAX,
            (0, page) => page,
            (l1, _) => l1,
        };

        bytes / size_of::<u32>()
    }
}

use crate::digit::DIGITS;
use crate::sorts::PassStats;

/// A record of the work done by one sort, returned by
/// [`FlagSortBuilder::sort_profiled`](crate::FlagSortBuilder::sort_profiled).
///
/// Per-digit arrays are indexed by digit, so index 3 is the most significant byte.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WorkProfile {
    /// Partitioning passes run at each digit.
    pub passes: [usize; DIGITS],
    /// Ranges skipped at each digit because every key fell into one bucket.
    pub homogeneous: [usize; DIGITS],
    /// Ranges skipped at each digit because they were already ordered in that digit.
    pub presorted: [usize; DIGITS],
    /// Sum of the lengths of every partitioned range.
    pub partitioned_len: usize,
    /// Element swaps made by partitioning passes.
    pub writes: usize,
    /// Working-set reloads made by partitioning passes.
    pub reloads: usize,
    /// Two element ranges resolved with a single compare.
    pub pairs: usize,
    /// Ranges handed to the fallback sort.
    pub fallback_sorts: usize,
}

impl WorkProfile {
    pub fn total_passes(&self) -> usize {
        self.passes.iter().sum()
    }

    #[inline]
    pub(crate) fn record_pass(&mut self, digit: usize, len: usize, stats: &PassStats) {
        self.passes[digit] += 1;
        self.partitioned_len += len;
        self.writes += stats.writes;
        self.reloads += stats.reloads;
    }
}

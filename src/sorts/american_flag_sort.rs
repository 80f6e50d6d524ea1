//! `american_flag_sort` is the in-place partitioning pass at the heart of this crate.
//!
//! It is a hybrid of American flag sort and ska sort: every bucket keeps a write cursor, and the
//! pass sweeps over the unresolved slots of one bucket at a time, swapping each key straight into
//! the write cursor of the bucket it belongs to. Each swap places exactly one key in its final
//! bucket, so one pass performs exactly `bucket.len()` swaps.
//!
//! Which bucket to sweep next comes from a `BucketSet`. Two sets are kept:
//!
//!  * `unfinished` holds every bucket that still has unresolved slots.
//!  * `working` holds the buckets still to be visited in the current round. A bucket that is down
//!    to a single unresolved slot is dropped from the round; once the round is exhausted it is
//!    reloaded from `unfinished`.
//!
//! As soon as a bucket has no unresolved slots left it is handed to `on_finished` while its keys
//! are still hot in cache.
//!
//! ## Characteristics
//!
//!  * in-place
//!  * O(1) auxiliary memory (fixed 256-entry tables on the stack)
//!  * unstable

use crate::digit::extract_digit;
use crate::utils::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    /// Number of element swaps performed. Always equal to the length of the partitioned range.
    pub writes: usize,
    /// Number of times the working set was reloaded from the unfinished buckets.
    pub reloads: usize,
}

pub fn american_flag_sort<F>(
    bucket: &mut [u32],
    counts: &Counts,
    digit: usize,
    mut on_finished: F,
) -> PassStats
where
    F: FnMut(&mut [u32]),
{
    let prefix_sums = get_prefix_sums(counts);
    let end_offsets = get_end_offsets(counts, &prefix_sums);
    let mut offsets = prefix_sums;

    let mut unfinished = BucketChain::new(counts).to_bucket_set();
    let mut working = unfinished;
    let mut stats = PassStats::default();

    while let Some(b) = working.first() {
        let end = end_offsets[b];
        let mut read = offsets[b];
        let mut remaining = end - read;

        while remaining != 0 {
            for _ in 0..remaining {
                debug_assert!(read < end);
                debug_assert!(read >= offsets[b]);

                let target = extract_digit(bucket[read], digit) as usize;
                let write = offsets[target];
                offsets[target] += 1;

                debug_assert!(write < end_offsets[target]);

                bucket.swap(read, write);
                read += 1;
                stats.writes += 1;
            }

            read = offsets[b];
            remaining = end - read;

            if remaining == 1 {
                // Leave single stragglers for the next round.
                working.remove(b);
                break;
            }
        }

        if offsets[b] == end {
            debug_assert!(unfinished.contains(b), "bucket {} finished twice", b);

            working.remove(b);
            unfinished.remove(b);
            on_finished(&mut bucket[prefix_sums[b]..end]);
        }

        if working.is_empty() && !unfinished.is_empty() {
            working = unfinished;
            stats.reloads += 1;
        }
    }

    debug_assert!(unfinished.is_empty());
    debug_assert_eq!(stats.writes, bucket.len());

    stats
}

/// Runs a single partitioning pass over `bucket` on `digit`, with no recursion.
///
/// Afterwards the keys are grouped by `digit` in ascending bucket order, but are not sorted within
/// each group.
///
/// ```
/// use flagsort::partition_digit;
///
/// let mut values = [0x0201, 0x0100, 0x0203, 0x0102];
/// let stats = partition_digit(&mut values, 1);
///
/// assert_eq!(stats.writes, 4);
/// assert!(values[..2].iter().all(|v| v >> 8 == 1));
/// assert!(values[2..].iter().all(|v| v >> 8 == 2));
/// ```
pub fn partition_digit(bucket: &mut [u32], digit: usize) -> PassStats {
    assert!(digit < crate::DIGITS, "digit {} out of range", digit);

    let (counts, _) = get_counts(bucket, digit, usize::MAX);

    american_flag_sort(bucket, &counts, digit, |_| {})
}

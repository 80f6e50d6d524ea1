use crate::digit::DIGITS;
use crate::profile::WorkProfile;
use crate::sorts::{american_flag_sort, sort_pair, FallbackSort};
use crate::tuning_parameters::TuningParameters;
use crate::utils::*;
use arbitrary_chunks::ArbitraryChunks;
use log::trace;

pub struct Sorter<'a> {
    tuning: TuningParameters,
    fallback: &'a dyn FallbackSort,
    profile: WorkProfile,
}

impl<'a> Sorter<'a> {
    pub fn new(tuning: TuningParameters, fallback: &'a dyn FallbackSort) -> Self {
        Self {
            tuning,
            fallback,
            profile: WorkProfile::default(),
        }
    }

    pub fn into_profile(self) -> WorkProfile {
        self.profile
    }

    /// Runs one partitioning pass over `bucket` on `digit`. Every bucket is passed on to
    /// `director` as soon as it is complete.
    fn handle_chunk(&mut self, bucket: &mut [u32], digit: usize) {
        let (counts, meta) = get_counts(bucket, digit, self.tuning.unroll_histogram_above);

        if is_homogenous(&counts, &meta, bucket.len()) {
            trace!(
                "({}) HOMOGENEOUS: {} keys in bucket {}",
                digit,
                bucket.len(),
                meta.last
            );

            self.profile.homogeneous[digit] += 1;
            self.director(bucket, digit);
            return;
        }

        if meta.already_sorted {
            trace!("({}) PRESORTED: {} keys", digit, bucket.len());

            self.profile.presorted[digit] += 1;
            bucket
                .arbitrary_chunks_mut(&counts)
                .for_each(|chunk| self.director(chunk, digit));
            return;
        }

        let len = bucket.len();
        let stats = american_flag_sort(bucket, &counts, digit, |chunk| {
            self.director(chunk, digit)
        });

        trace!(
            "({}) PASS: {} keys, {} writes, {} reloads",
            digit,
            len,
            stats.writes,
            stats.reloads
        );

        self.profile.record_pass(digit, len, &stats);
    }

    /// Finishes a range whose keys all agree on every digit above `digit - 1`.
    #[inline]
    pub fn director(&mut self, bucket: &mut [u32], digit: usize) {
        if digit == 0 {
            return;
        }

        match bucket.len() {
            0 | 1 => {}
            2 => {
                sort_pair(bucket);
                self.profile.pairs += 1;
            }
            n if n <= self.tuning.comparative_threshold => {
                self.fallback.sort(bucket);
                self.profile.fallback_sorts += 1;
            }
            _ => self.handle_chunk(bucket, digit - 1),
        }
    }

    #[inline]
    pub fn top_level_director(&mut self, bucket: &mut [u32]) {
        self.director(bucket, DIGITS);
    }
}

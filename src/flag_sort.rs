use crate::flag_sort_builder::FlagSortBuilder;

pub trait FlagSort {
    /// flag_sort_unstable sorts the `u32` keys of your `Vec<u32>` or `[u32]` in place, ascending.
    ///
    /// ```
    /// use flagsort::FlagSort;
    ///
    /// let mut values: [u32; 3] = [3, 1, 2];
    /// values.flag_sort_unstable();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn flag_sort_unstable(&mut self);

    fn flag_sort_builder(&'_ mut self) -> FlagSortBuilder<'_>;
}

impl FlagSort for Vec<u32> {
    fn flag_sort_unstable(&mut self) {
        self.flag_sort_builder().sort();
    }

    fn flag_sort_builder(&'_ mut self) -> FlagSortBuilder<'_> {
        FlagSortBuilder::new(self)
    }
}

impl FlagSort for [u32] {
    fn flag_sort_unstable(&mut self) {
        self.flag_sort_builder().sort();
    }

    fn flag_sort_builder(&'_ mut self) -> FlagSortBuilder<'_> {
        FlagSortBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SortError;
    use crate::sorts::{FallbackSort, InsertionSort};
    use crate::tuner::TuningHints;
    use crate::tuners::NoHintsTuner;
    use crate::tuning_parameters::TuningParameters;
    use crate::utils::test_utils::{sort_comparison_suite, validate_sort};
    use crate::FlagSort;
    use block_pseudorand::block_rand;
    use std::cell::Cell;

    #[test]
    pub fn test_full_sort() {
        sort_comparison_suite(8, |inputs| inputs.flag_sort_unstable());
    }

    #[test]
    pub fn test_no_hints_full_sort() {
        sort_comparison_suite(24, |inputs| {
            inputs.flag_sort_builder().with_tuner(&NoHintsTuner).sort()
        });
    }

    #[test]
    pub fn test_custom_hints_full_sort() {
        let hints = TuningHints {
            cache_line_size: 128,
            l1_data_cache_size: 1024,
            page_size: 16_384,
        };

        sort_comparison_suite(0, |inputs| {
            inputs.flag_sort_builder().with_tuner(&hints).sort()
        });
    }

    #[test]
    pub fn test_custom_fallback() {
        struct CountingFallback {
            calls: Cell<usize>,
        }

        impl FallbackSort for CountingFallback {
            fn sort(&self, bucket: &mut [u32]) {
                self.calls.set(self.calls.get() + 1);
                InsertionSort.sort(bucket);
            }
        }

        let fallback = CountingFallback {
            calls: Cell::new(0),
        };

        validate_sort(block_rand(100_000), |inputs| {
            inputs.flag_sort_builder().with_fallback(&fallback).sort()
        });

        assert!(fallback.calls.get() > 0);
    }

    #[test]
    pub fn test_explicit_tuning_overrides_tuner() {
        let tuning = TuningParameters {
            comparative_threshold: 16,
            unroll_histogram_above: usize::MAX,
        };

        let mut data: Vec<u32> = (0..17u32).rev().collect();
        let profile = data
            .flag_sort_builder()
            .with_tuner(&NoHintsTuner)
            .with_tuning(tuning)
            .sort_profiled();

        assert_eq!(data, (0..17u32).collect::<Vec<_>>());
        assert_eq!(profile.fallback_sorts, 0);
        assert_eq!(profile.passes, [1, 0, 0, 0]);
    }

    #[test]
    pub fn test_range_leaves_outside_untouched() {
        let mut data: Vec<u32> = block_rand(10_000);
        let original = data.clone();

        data.flag_sort_builder().with_range(1_000, 9_000).sort();

        let mut expected = original[1_000..9_000].to_vec();
        expected.sort_unstable();

        assert_eq!(&data[..1_000], &original[..1_000]);
        assert_eq!(&data[1_000..9_000], &expected[..]);
        assert_eq!(&data[9_000..], &original[9_000..]);
    }

    #[test]
    pub fn test_try_sort_rejects_bad_ranges() {
        let mut data = vec![3u32, 2, 1];

        assert_eq!(
            data.flag_sort_builder().with_range(2, 1).try_sort(),
            Err(SortError::InvalidRange {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert_eq!(
            data.flag_sort_builder().with_range(0, 4).try_sort(),
            Err(SortError::InvalidRange {
                start: 0,
                end: 4,
                len: 3
            })
        );
        assert_eq!(data, vec![3, 2, 1]);

        assert_eq!(data.flag_sort_builder().with_range(3, 3).try_sort(), Ok(()));
        assert_eq!(data.flag_sort_builder().try_sort(), Ok(()));
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "invalid sort range 0..9 for buffer of length 3")]
    pub fn test_sort_panics_on_bad_range() {
        let mut data = vec![3u32, 2, 1];
        data.flag_sort_builder().with_range(0, 9).sort();
    }
}

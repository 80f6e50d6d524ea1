//! # flagsort
//!
//! flagsort is an in-place, unstable radix sort for `u32` keys.
//!
//! Keys are partitioned one byte at a time, most significant byte first, with an American flag
//! style pass that swaps every key directly into its bucket. No scratch buffer is allocated: each
//! pass uses a handful of fixed 256-entry tables on the stack, and a 256-bit presence set lets it
//! jump straight to the next bucket that still needs work. Ranges of 128 keys or fewer are left to
//! a comparison sort.
//!
//! ## Usage
//!
//! In the simplest case, sort a whole slice or `Vec` with `flag_sort_unstable()`:
//!
//! ```
//! use flagsort::FlagSort;
//!
//! let mut values: Vec<u32> = vec![20, 10, 0, 12, 5, 0];
//! values.flag_sort_unstable();
//!
//! assert_eq!(values, vec![0, 0, 5, 10, 12, 20]);
//! ```
//!
//! To sort a sub-range, use [`sort`] or the builder:
//!
//! ```
//! use flagsort::FlagSort;
//!
//! let mut values: Vec<u32> = vec![9, 257, 256, 255, 0];
//! values.flag_sort_builder().with_range(1, 4).sort();
//!
//! assert_eq!(values, vec![9, 255, 256, 257, 0]);
//! ```
//!
//! ## Tuning
//!
//! The builder accepts a [`Tuner`] that reports cache and page sizes. These only pick internal
//! constants; the default `StandardTuner` assumes 64 byte cache lines, a 32 KiB L1 data cache and
//! 4 KiB pages without asking the operating system. Any `TuningHints` value can be passed as a
//! tuner directly.
//!
//! ## Logging
//!
//! Passes and shortcuts are reported through the `log` facade at `trace` level, and each
//! top-level sort at `debug` level. Nothing is logged unless the application installs a logger.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.


mod digit;
mod error;
mod flag_sort;
mod flag_sort_builder;
mod profile;
mod sorter;
mod sorts;
mod tuner;
pub mod tuners;
mod tuning_parameters;
pub mod utils;

pub use digit::{extract_digit, BUCKETS, DIGITS};
pub use error::SortError;
pub use flag_sort::FlagSort;
pub use flag_sort_builder::FlagSortBuilder;
pub use profile::WorkProfile;
pub use sorts::{
    american_flag_sort, partition_digit, ComparativeSort, FallbackSort, InsertionSort, PassStats,
};
pub use tuner::{Tuner, TuningHints};
pub use tuning_parameters::TuningParameters;
pub use utils::BucketSet;

/// Sorts `buffer[start..end]` ascending, in place. Keys outside the range are left untouched.
///
/// # Panics
///
/// Panics unless `start <= end <= buffer.len()`.
#[inline]
pub fn sort(buffer: &mut [u32], start: usize, end: usize) {
    buffer.flag_sort_builder().with_range(start, end).sort();
}

/// Like [`sort`], but returns an error instead of panicking on an invalid range.
#[inline]
pub fn try_sort(buffer: &mut [u32], start: usize, end: usize) -> Result<(), SortError> {
    buffer.flag_sort_builder().with_range(start, end).try_sort()
}

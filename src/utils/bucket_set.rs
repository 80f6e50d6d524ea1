//! `BucketSet` is a fixed 256-bit set with one flag per digit bucket.
//!
//! Alongside the four 64-bit words it caches the index of the lowest word that holds at least one
//! set bit. That cursor makes "which bucket comes next" an O(1) query: one `trailing_zeros` on a
//! single word, rather than a scan over all 256 buckets.
//!
//! The cursor is only ever moved down by `insert` and only recomputed by `remove` when the word
//! it points at becomes empty. The recompute is itself O(1): the emptiness of the four words is
//! packed into a 5-bit summary whose top bit is always on, so `trailing_zeros` lands on the
//! sentinel value when every word is clear.

use std::fmt;

const WORDS: usize = 4;
const EMPTY: usize = WORDS;

#[repr(C, align(64))]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BucketSet {
    words: [u64; WORDS],
    first_word: usize,
}

impl Default for BucketSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketSet {
    /// An empty set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            words: [0u64; WORDS],
            first_word: EMPTY,
        }
    }

    /// Turns every flag off.
    #[inline]
    pub fn clear(&mut self) {
        self.words = [0u64; WORDS];
        self.first_word = EMPTY;
    }

    #[inline(always)]
    pub fn insert(&mut self, bucket: usize) {
        debug_assert!(bucket < 256, "bucket {} out of range", bucket);

        let q = bucket >> 6;
        self.words[q] |= 1u64 << (bucket & 63);

        if q < self.first_word {
            self.first_word = q;
        }
    }

    #[inline(always)]
    pub fn remove(&mut self, bucket: usize) {
        debug_assert!(bucket < 256, "bucket {} out of range", bucket);

        let q = bucket >> 6;
        self.words[q] &= !(1u64 << (bucket & 63));

        if self.words[q] == 0 && q == self.first_word {
            let summary = (1u32 << EMPTY)
                | ((self.words[3] != 0) as u32) << 3
                | ((self.words[2] != 0) as u32) << 2
                | ((self.words[1] != 0) as u32) << 1
                | (self.words[0] != 0) as u32;

            self.first_word = summary.trailing_zeros() as usize;
        }
    }

    #[inline(always)]
    pub fn contains(&self, bucket: usize) -> bool {
        debug_assert!(bucket < 256, "bucket {} out of range", bucket);

        self.words[bucket >> 6] & (1u64 << (bucket & 63)) != 0
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.first_word == EMPTY
    }

    /// Lowest bucket currently in the set, or `None` when the set is empty.
    #[inline(always)]
    pub fn first(&self) -> Option<usize> {
        let q = self.first_word;
        if q == EMPTY {
            return None;
        }

        debug_assert_ne!(self.words[q], 0, "cursor points at an empty word");

        Some((q << 6) + self.words[q].trailing_zeros() as usize)
    }

    /// Number of buckets in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Buckets in the set, lowest first.
    pub fn iter(&self) -> Iter {
        Iter { remaining: *self }
    }
}

impl FromIterator<usize> for BucketSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = BucketSet::new();
        for bucket in iter {
            set.insert(bucket);
        }

        set
    }
}

impl fmt::Debug for BucketSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

pub struct Iter {
    remaining: BucketSet,
}

impl Iterator for Iter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let bucket = self.remaining.first()?;
        self.remaining.remove(bucket);

        Some(bucket)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.len();
        (len, Some(len))
    }
}

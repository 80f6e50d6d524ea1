use crate::digit::{extract_digit, BUCKETS};
use crate::utils::BucketSet;

pub type Counts = [usize; BUCKETS];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountMeta {
    /// Bucket of the first element in the range.
    pub first: u8,
    /// Bucket of the last element in the range.
    pub last: u8,
    /// Whether the range is non-decreasing in the counted digit.
    pub already_sorted: bool,
}

/// Counts how many keys in `bucket` fall into each value of `digit`.
///
/// The scan first walks forward for as long as the digit sequence is non-decreasing so that
/// `CountMeta::already_sorted` comes for free. From the first descent onwards it is a plain
/// histogram; ranges longer than `unroll_above` spread that work over four tables to break the
/// dependency between consecutive increments of the same bucket.
#[inline]
pub fn get_counts(bucket: &[u32], digit: usize, unroll_above: usize) -> (Counts, CountMeta) {
    let mut counts_1 = [0usize; BUCKETS];

    let (first, last) = match (bucket.first(), bucket.last()) {
        (Some(f), Some(l)) => (extract_digit(*f, digit), extract_digit(*l, digit)),
        _ => {
            let meta = CountMeta {
                already_sorted: true,
                ..CountMeta::default()
            };

            return (counts_1, meta);
        }
    };

    let mut already_sorted = true;
    let mut continue_from = bucket.len();
    let mut prev = 0usize;

    for (i, item) in bucket.iter().enumerate() {
        let b = extract_digit(*item, digit) as usize;
        counts_1[b] += 1;

        if b < prev {
            already_sorted = false;
            continue_from = i + 1;
            break;
        }

        prev = b;
    }

    let rest = &bucket[continue_from..];

    if rest.len() > unroll_above {
        let mut counts_2 = [0usize; BUCKETS];
        let mut counts_3 = [0usize; BUCKETS];
        let mut counts_4 = [0usize; BUCKETS];
        let chunks = rest.chunks_exact(4);
        let rem = chunks.remainder();

        chunks.for_each(|chunk| {
            let a = extract_digit(chunk[0], digit) as usize;
            let b = extract_digit(chunk[1], digit) as usize;
            let c = extract_digit(chunk[2], digit) as usize;
            let d = extract_digit(chunk[3], digit) as usize;

            counts_1[a] += 1;
            counts_2[b] += 1;
            counts_3[c] += 1;
            counts_4[d] += 1;
        });

        rem.iter().for_each(|v| {
            counts_1[extract_digit(*v, digit) as usize] += 1;
        });

        for i in 0..BUCKETS {
            counts_1[i] += counts_2[i] + counts_3[i] + counts_4[i];
        }
    } else {
        rest.iter().for_each(|v| {
            counts_1[extract_digit(*v, digit) as usize] += 1;
        });
    }

    let meta = CountMeta {
        first,
        last,
        already_sorted,
    };

    (counts_1, meta)
}

/// True when every key counted by `get_counts` landed in a single bucket.
#[inline]
pub fn is_homogenous(counts: &Counts, meta: &CountMeta, len: usize) -> bool {
    counts[meta.last as usize] == len
}

/// Start offset of every bucket, relative to the start of the counted range.
#[inline]
pub fn get_prefix_sums(counts: &Counts) -> Counts {
    let mut sums = [0usize; BUCKETS];

    let mut running_total = 0;
    for (i, c) in counts.iter().enumerate() {
        sums[i] = running_total;
        running_total += c;
    }

    sums
}

/// End offset (exclusive) of every bucket, relative to the start of the counted range.
#[inline]
pub fn get_end_offsets(counts: &Counts, prefix_sums: &Counts) -> Counts {
    let mut end_offsets = [0usize; BUCKETS];

    end_offsets[0..BUCKETS - 1].copy_from_slice(&prefix_sums[1..BUCKETS]);
    end_offsets[BUCKETS - 1] = counts[BUCKETS - 1] + prefix_sums[BUCKETS - 1];

    end_offsets
}

/// Successor chain over the non-empty buckets of a histogram.
///
/// `next[b]` is the next non-empty bucket above `b`. A successor is always strictly greater than
/// its bucket, so 0 doubles as the end-of-chain marker.
#[derive(Clone, PartialEq, Eq)]
pub struct BucketChain {
    first: Option<u8>,
    next: [u8; BUCKETS],
}

impl BucketChain {
    pub fn new(counts: &Counts) -> Self {
        let mut next = [0u8; BUCKETS];
        let mut first = None;
        let mut following = 0u8;

        for b in (0..BUCKETS).rev() {
            if counts[b] > 0 {
                next[b] = following;
                following = b as u8;
                first = Some(b as u8);
            }
        }

        Self { first, next }
    }

    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.first.map(usize::from)
    }

    /// Next non-empty bucket after `bucket`, which must itself be on the chain.
    #[inline]
    pub fn next_after(&self, bucket: usize) -> Option<usize> {
        match self.next[bucket] {
            0 => None,
            n => Some(n as usize),
        }
    }

    /// Non-empty buckets, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.first(), move |b| self.next_after(*b))
    }

    pub fn to_bucket_set(&self) -> BucketSet {
        self.iter().collect()
    }
}

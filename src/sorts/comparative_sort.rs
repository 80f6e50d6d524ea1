/// A comparison sort used for ranges too small to be worth a histogram.
pub trait FallbackSort {
    fn sort(&self, bucket: &mut [u32]);
}

/// The standard library's unstable sort.
pub struct ComparativeSort;

impl FallbackSort for ComparativeSort {
    #[inline]
    fn sort(&self, bucket: &mut [u32]) {
        bucket.sort_unstable();
    }
}

/// Plain insertion sort. Quadratic, but branch-light on the short ranges it is handed.
pub struct InsertionSort;

impl FallbackSort for InsertionSort {
    fn sort(&self, bucket: &mut [u32]) {
        for i in 1..bucket.len() {
            let v = bucket[i];
            let mut j = i;

            while j > 0 && bucket[j - 1] > v {
                bucket[j] = bucket[j - 1];
                j -= 1;
            }

            bucket[j] = v;
        }
    }
}

/// Orders a two element range with at most one swap.
#[inline]
pub fn sort_pair(bucket: &mut [u32]) {
    debug_assert_eq!(bucket.len(), 2);

    if bucket[0] > bucket[1] {
        bucket.swap(0, 1);
    }
}

/// Platform hints, in bytes. A value of zero means "unknown" and disables whatever the hint would
/// otherwise drive. No hint is ever needed for a correct sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuningHints {
    pub cache_line_size: usize,
    pub l1_data_cache_size: usize,
    pub page_size: usize,
}

impl Default for TuningHints {
    fn default() -> Self {
        Self {
            cache_line_size: 64,
            l1_data_cache_size: 32 * 1024,
            page_size: 4096,
        }
    }
}

impl TuningHints {
    pub const fn none() -> Self {
        Self {
            cache_line_size: 0,
            l1_data_cache_size: 0,
            page_size: 0,
        }
    }
}

pub trait Tuner {
    fn tuning_hints(&self) -> TuningHints;
}

/// Fixed hints can be used directly as a tuner.
impl Tuner for TuningHints {
    #[inline]
    fn tuning_hints(&self) -> TuningHints {
        *self
    }
}

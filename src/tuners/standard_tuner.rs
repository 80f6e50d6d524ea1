//! `StandardTuner` reports the hints of a typical desktop or server core:
//!  * 64 byte cache lines
//!  * 32 KiB L1 data cache
//!  * 4 KiB pages
//!
//! It never queries the operating system.

use crate::tuner::{Tuner, TuningHints};

pub struct StandardTuner;
impl Tuner for StandardTuner {
    #[inline]
    fn tuning_hints(&self) -> TuningHints {
        TuningHints::default()
    }
}

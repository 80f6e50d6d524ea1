//! `NoHintsTuner` reports every hint as unknown, which turns off all hint-driven behaviour.

use crate::tuner::{Tuner, TuningHints};

pub struct NoHintsTuner;
impl Tuner for NoHintsTuner {
    #[inline]
    fn tuning_hints(&self) -> TuningHints {
        TuningHints::none()
    }
}

mod no_hints_tuner;
mod standard_tuner;

pub use no_hints_tuner::NoHintsTuner;
pub use standard_tuner::StandardTuner;

use crate::error::SortError;
use crate::profile::WorkProfile;
use crate::sorter::Sorter;
use crate::sorts::{ComparativeSort, FallbackSort};
use crate::tuner::Tuner;
use crate::tuners::StandardTuner;
use crate::tuning_parameters::TuningParameters;
use log::debug;

pub struct FlagSortBuilder<'a> {
    data: &'a mut [u32],
    range: Option<(usize, usize)>,
    tuner: &'a dyn Tuner,
    tuning: Option<TuningParameters>,
    fallback: &'a dyn FallbackSort,
}

impl<'a> FlagSortBuilder<'a> {
    pub(crate) fn new(data: &'a mut [u32]) -> Self {
        Self {
            data,
            range: None,
            tuner: &StandardTuner,
            tuning: None,
            fallback: &ComparativeSort,
        }
    }

    /// Only sort `data[start..end]`. Keys outside the range are left untouched.
    pub fn with_range(mut self, start: usize, end: usize) -> Self {
        self.range = Some((start, end));

        self
    }

    pub fn with_tuner(mut self, tuner: &'a dyn Tuner) -> Self {
        self.tuner = tuner;

        self
    }

    /// Use explicit tuning parameters, ignoring the tuner's hints.
    pub fn with_tuning(mut self, tuning: TuningParameters) -> Self {
        self.tuning = Some(tuning);

        self
    }

    pub fn with_fallback(mut self, fallback: &'a dyn FallbackSort) -> Self {
        self.fallback = fallback;

        self
    }

    /// Sorts the selected range.
    ///
    /// # Panics
    ///
    /// Panics if the range set with `with_range` does not lie within the data.
    pub fn sort(self) {
        self.sort_profiled();
    }

    /// Sorts the selected range and reports the work done.
    ///
    /// # Panics
    ///
    /// Panics if the range set with `with_range` does not lie within the data.
    pub fn sort_profiled(self) -> WorkProfile {
        match self.try_sort_profiled() {
            Ok(profile) => profile,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_sort(self) -> Result<(), SortError> {
        self.try_sort_profiled().map(|_| ())
    }

    pub fn try_sort_profiled(self) -> Result<WorkProfile, SortError> {
        let Self {
            data,
            range,
            tuner,
            tuning,
            fallback,
        } = self;

        let len = data.len();
        let (start, end) = range.unwrap_or((0, len));

        if start > end || end > len {
            return Err(SortError::InvalidRange { start, end, len });
        }

        let tuning = tuning.unwrap_or_else(|| TuningParameters::new(&tuner.tuning_hints()));

        let mut sorter = Sorter::new(tuning, fallback);
        sorter.top_level_director(&mut data[start..end]);

        let profile = sorter.into_profile();
        debug!("sorted {}..{}: {:?}", start, end, profile);

        Ok(profile)
    }
}

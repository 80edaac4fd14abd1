use crate::error::SortError;

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub parallel_cutoff: usize,
    pub insertion_threshold: usize,
    pub introsort_depth_factor_num: usize,
    pub introsort_depth_factor_den: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    parallel_cutoff: 500,
    insertion_threshold: 24,
    introsort_depth_factor_num: 5,
    introsort_depth_factor_den: 2,
};

/// Serial sorter used once a range is at or below the parallel cutoff.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SerialSort {
    #[default]
    Introsort,
    StdUnstable,
}

pub const ALL_SERIAL_SORTS: [SerialSort; 2] = [SerialSort::Introsort, SerialSort::StdUnstable];

impl SerialSort {
    pub fn name(self) -> &'static str {
        match self {
            Self::Introsort => "introsort",
            Self::StdUnstable => "std_unstable",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SERIAL_SORTS
            .iter()
            .copied()
            .find(|serial| serial.name() == name)
    }
}

/// Tunables for one [`Sorter`](crate::Sorter).
///
/// `threads: None` runs on rayon's global pool, which is sized to the
/// available hardware parallelism.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortConfig {
    pub cutoff: usize,
    pub threads: Option<usize>,
    pub serial: SerialSort,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            cutoff: TUNED_PARAMS.parallel_cutoff,
            threads: None,
            serial: SerialSort::default(),
        }
    }
}

impl SortConfig {
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_serial(mut self, serial: SerialSort) -> Self {
        self.serial = serial;
        self
    }

    pub fn validate(&self) -> Result<(), SortError> {
        match self.threads {
            Some(0) => Err(SortError::InvalidThreadCount(0)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn default_matches_tuned_params() {
        let config = SortConfig::default();
        assert_eq!(config.cutoff, 500);
        assert_eq!(config.threads, None);
        assert_eq!(config.serial, SerialSort::Introsort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_threads_rejected() {
        let config = SortConfig::default().with_threads(0);
        assert!(matches!(
            config.validate(),
            Err(SortError::InvalidThreadCount(0))
        ));
        assert!(SortConfig::default().with_threads(3).validate().is_ok());
    }

    #[test]
    fn zero_cutoff_is_valid() {
        assert!(SortConfig::default().with_cutoff(0).validate().is_ok());
    }

    #[test]
    fn serial_names_round_trip() {
        let mut seen = HashSet::new();
        for &serial in &ALL_SERIAL_SORTS {
            assert!(seen.insert(serial.name()));
            assert_eq!(SerialSort::from_name(serial.name()), Some(serial));
        }
        assert_eq!(SerialSort::from_name("bogosort"), None);
    }
}

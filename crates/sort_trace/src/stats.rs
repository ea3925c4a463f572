use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counts {
    pub comparisons: u64,
    pub moves: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// Running statistics for one sort invocation.
///
/// Engines reset the record on entry, bump the counters while they run, and
/// stamp `elapsed` right before the terminal step. It is read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SortStats {
    pub comparisons: u64,
    pub moves: u64,
    pub elapsed: Duration,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

impl SortStats {
    pub fn new(complexity: Complexity) -> Self {
        Self {
            time_complexity: complexity.time,
            space_complexity: complexity.space,
            ..Self::default()
        }
    }

    #[inline]
    pub fn counts(&self) -> Counts {
        Counts {
            comparisons: self.comparisons,
            moves: self.moves,
        }
    }

    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Resets `stats` for a fresh run and returns the start instant.
pub(crate) fn begin(stats: &mut SortStats, complexity: Complexity) -> Instant {
    *stats = SortStats::new(complexity);
    Instant::now()
}

pub(crate) fn finish(stats: &mut SortStats, start: Instant) {
    stats.elapsed = start.elapsed();
}

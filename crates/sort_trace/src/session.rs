use std::time::Duration;

use rand::Rng;

use crate::algorithms::{bucket_sort, quick_sort};
use crate::explain::format_float_array;
use crate::pacing::{Paced, Pacer, Speed};
use crate::replay::Replay;
use crate::stats::SortStats;
use crate::step::{BucketStep, PartitionStep, Step, StepSink, Trace};
use crate::{Algorithm, InputKind, UnsupportedInput, input_kind, sort_u64};

#[derive(Clone, Copy, Debug)]
pub struct SessionParams {
    pub array_len: usize,
    pub int_min: u64,
    pub int_max: u64,
    pub counting_cap: u64,
    pub bucket_display_scale: f64,
}

pub const SESSION: SessionParams = SessionParams {
    array_len: 10,
    int_min: 1,
    int_max: 99,
    counting_cap: 30,
    bucket_display_scale: 100.0,
};

pub const IDLE_PROMPT: &str =
    "Press S:Bubble | I:Insertion | Q:Quick | 4:Bucket | 5:Radix | 6:Counting";

/// Driver-side state for one visualization session.
///
/// Holds the working arrays, the shared speed, and the recorded partition
/// trace. Only one sort runs at a time; every run borrows the session
/// mutably for its whole duration.
#[derive(Debug)]
pub struct Session {
    array: Vec<u64>,
    float_array: Vec<f64>,
    stats: SortStats,
    speed: Speed,
    step_pacer: Pacer,
    replay_pacer: Pacer,
    replay: Option<Replay<PartitionStep>>,
    buckets: Vec<Vec<f64>>,
    count_table: Vec<usize>,
    text: String,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let speed = Speed::default();
        let mut session = Self {
            array: Vec::new(),
            float_array: Vec::new(),
            stats: SortStats::default(),
            step_pacer: Pacer::for_steps(speed.clone()),
            replay_pacer: Pacer::for_replay(speed.clone()),
            speed,
            replay: None,
            buckets: Vec::new(),
            count_table: Vec::new(),
            text: String::new(),
        };
        session.reset(rng);
        session
    }

    /// Replaces the base delays at speed 1.0; the speed handle is kept.
    pub fn with_base_delays(mut self, step: Duration, replay: Duration) -> Self {
        self.step_pacer = Pacer::new(self.speed.clone(), step);
        self.replay_pacer = Pacer::new(self.speed.clone(), replay);
        self
    }

    pub fn without_pacing(self) -> Self {
        self.with_base_delays(Duration::ZERO, Duration::ZERO)
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.array = (0..SESSION.array_len)
            .map(|_| rng.random_range(SESSION.int_min..=SESSION.int_max))
            .collect();
        self.float_array = (0..SESSION.array_len)
            .map(|_| rng.random::<f64>())
            .collect();
        self.stats = SortStats::default();
        self.replay = None;
        self.buckets.clear();
        self.count_table.clear();
        self.text = IDLE_PROMPT.to_string();
    }

    pub fn array(&self) -> &[u64] {
        &self.array
    }

    pub fn set_array(&mut self, values: Vec<u64>) {
        self.array = values;
    }

    pub fn float_array(&self) -> &[f64] {
        &self.float_array
    }

    pub fn set_float_array(&mut self, values: Vec<f64>) {
        self.float_array = values;
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    pub fn faster(&self) -> f32 {
        self.speed.faster()
    }

    pub fn slower(&self) -> f32 {
        self.speed.slower()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn buckets(&self) -> &[Vec<f64>] {
        &self.buckets
    }

    pub fn count_table(&self) -> &[usize] {
        &self.count_table
    }

    pub fn replay(&self) -> Option<&Replay<PartitionStep>> {
        self.replay.as_ref()
    }

    /// Runs an integer engine live, pausing after every step.
    ///
    /// Counting sort input is capped first so the count table stays small.
    /// A rejected engine leaves the session untouched.
    pub fn run<K: StepSink<Step>>(
        &mut self,
        algo: Algorithm,
        sink: &mut K,
    ) -> Result<(), UnsupportedInput> {
        if input_kind(algo) != InputKind::Integers {
            return Err(UnsupportedInput {
                algorithm: algo,
                input: InputKind::Integers,
            });
        }
        if algo == Algorithm::CountingSort {
            for value in self.array.iter_mut() {
                *value = (*value).min(SESSION.counting_cap);
            }
        }
        self.replay = None;
        self.buckets.clear();
        self.count_table.clear();

        let mut last_text = None;
        let mut last_table = None;
        {
            let observe = |step: Step| {
                last_text = Some(step.explanation.clone());
                if let Some(table) = &step.count_table {
                    last_table = Some(table.clone());
                }
                sink.emit(step);
            };
            let mut paced = Paced::new(observe, self.step_pacer.clone());
            sort_u64(algo, &mut self.array, &mut self.stats, &mut paced)?;
        }

        if let Some(text) = last_text {
            self.text = text;
        }
        if let Some(table) = last_table {
            self.count_table = table;
        }
        Ok(())
    }

    /// Runs the bucket engine over the float array, then exposes the sorted
    /// values scaled to integers for display.
    pub fn run_bucket<K: StepSink<BucketStep>>(&mut self, sink: &mut K) {
        self.replay = None;
        self.count_table.clear();

        let mut last_buckets = None;
        let mut observe = |step: BucketStep| {
            last_buckets = Some(step.buckets.clone());
            sink.emit(step);
        };
        bucket_sort::sort(
            &mut self.float_array,
            &mut self.stats,
            &self.step_pacer,
            &mut observe,
        );

        self.buckets = last_buckets.unwrap_or_default();
        self.array = self
            .float_array
            .iter()
            .map(|&v| (v * SESSION.bucket_display_scale) as u64)
            .collect();
        self.text = format!(
            "Final Sorted Array: [{}]",
            format_float_array(&self.float_array)
        );
    }

    /// Records the partition trace on a copy of the array and positions the
    /// cursor at its first step.
    pub fn record_quick_sort(&mut self) -> &Replay<PartitionStep> {
        let mut work = self.array.clone();
        let mut trace = Trace::new();
        quick_sort::sort(&mut work, &mut self.stats, &mut trace);

        match trace.last() {
            Some(last) => {
                self.array = last.array.clone();
                self.text = trace[0].explanation.clone();
            }
            None => self.text = "No Quick Sort steps were generated.".to_string(),
        }
        self.buckets.clear();
        self.count_table.clear();
        self.replay.insert(Replay::new(trace))
    }

    pub fn step_forward(&mut self) -> Option<&PartitionStep> {
        let replay = self.replay.as_mut()?;
        replay.step_forward();
        self.sync_text()
    }

    pub fn step_back(&mut self) -> Option<&PartitionStep> {
        let replay = self.replay.as_mut()?;
        replay.step_back();
        self.sync_text()
    }

    pub fn jump_to_end(&mut self) -> Option<&PartitionStep> {
        let replay = self.replay.as_mut()?;
        replay.jump_to_end();
        self.sync_text()
    }

    /// Plays the remaining recorded steps at the replay cadence.
    pub fn auto_advance<F: FnMut(usize, &PartitionStep)>(&mut self, show: F) {
        let Some(replay) = self.replay.as_mut() else {
            return;
        };
        replay.auto_advance(&self.replay_pacer, show);
        self.sync_text();
    }

    fn sync_text(&mut self) -> Option<&PartitionStep> {
        let step = self.replay.as_ref()?.current()?;
        self.text.clone_from(&step.explanation);
        Some(step)
    }
}

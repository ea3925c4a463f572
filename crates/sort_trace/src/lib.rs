pub mod algorithms;
pub mod explain;
pub mod pacing;
pub mod replay;
pub mod session;
pub mod stats;
pub mod step;

use std::error::Error;
use std::fmt;

pub use explain::format_float_array;
pub use pacing::{PACING, Paced, Pacer, Speed};
pub use replay::Replay;
pub use session::{SESSION, Session};
pub use stats::{Complexity, Counts, SortStats};
pub use step::{BucketStep, PartitionStep, Step, StepKind, StepSink, Trace};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum InputKind {
    Integers,
    UnitFloats,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    BubbleSort,
    InsertionSort,
    QuickSort,
    BucketSort,
    RadixSort,
    CountingSort,
}

pub const ALL_ALGORITHMS: [Algorithm; 6] = [
    Algorithm::BubbleSort,
    Algorithm::InsertionSort,
    Algorithm::QuickSort,
    Algorithm::BucketSort,
    Algorithm::RadixSort,
    Algorithm::CountingSort,
];

pub fn all_algorithms() -> &'static [Algorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: Algorithm) -> &'static str {
    match algo {
        Algorithm::BubbleSort => "bubble_sort",
        Algorithm::InsertionSort => "insertion_sort",
        Algorithm::QuickSort => "quick_sort",
        Algorithm::BucketSort => "bucket_sort",
        Algorithm::RadixSort => "radix_sort",
        Algorithm::CountingSort => "counting_sort",
    }
}

pub fn complexity(algo: Algorithm) -> Complexity {
    match algo {
        Algorithm::BubbleSort => algorithms::bubble_sort::COMPLEXITY,
        Algorithm::InsertionSort => algorithms::insertion_sort::COMPLEXITY,
        Algorithm::QuickSort => algorithms::quick_sort::COMPLEXITY,
        Algorithm::BucketSort => algorithms::bucket_sort::COMPLEXITY,
        Algorithm::RadixSort => algorithms::radix_sort::COMPLEXITY,
        Algorithm::CountingSort => algorithms::counting_sort::COMPLEXITY,
    }
}

pub fn input_kind(algo: Algorithm) -> InputKind {
    match algo {
        Algorithm::BucketSort => InputKind::UnitFloats,
        _ => InputKind::Integers,
    }
}

/// The partition engine records its steps; everything else notifies live.
pub fn records_trace(algo: Algorithm) -> bool {
    algo == Algorithm::QuickSort
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnsupportedInput {
    pub algorithm: Algorithm,
    pub input: InputKind,
}

impl fmt::Display for UnsupportedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} does not accept {:?} input",
            algorithm_name(self.algorithm),
            self.input
        )
    }
}

impl Error for UnsupportedInput {}

impl From<PartitionStep> for Step {
    fn from(step: PartitionStep) -> Self {
        Self {
            kind: step.kind,
            array: step.array,
            primary: step.pivot,
            secondary: step.comparing,
            counts: step.counts,
            count_table: None,
            explanation: step.explanation,
        }
    }
}

/// Runs an integer engine, delivering every step to `sink` as a [`Step`].
///
/// Partition records arrive as live steps with `primary` = pivot and
/// `secondary` = compared index. Every run ends with exactly one terminal
/// step, except radix and counting sort on empty input, which stay silent.
pub fn sort_u64<K: StepSink<Step>>(
    algo: Algorithm,
    data: &mut [u64],
    stats: &mut SortStats,
    sink: &mut K,
) -> Result<(), UnsupportedInput> {
    match algo {
        Algorithm::BubbleSort => algorithms::bubble_sort::sort(data, stats, sink),
        Algorithm::InsertionSort => algorithms::insertion_sort::sort(data, stats, sink),
        Algorithm::QuickSort => {
            let mut emitted = false;
            let mut adapter = |step: PartitionStep| {
                emitted = true;
                sink.emit(Step::from(step));
            };
            algorithms::quick_sort::sort(data, stats, &mut adapter);
            // Nothing to partition, so the recorder stays empty.
            if !emitted {
                let explanation = explain::summary(
                    "QuickSort Complete!",
                    stats,
                    algorithms::quick_sort::MOVES,
                );
                sink.emit(Step::complete(data, stats.counts(), explanation));
            }
        }
        Algorithm::RadixSort => algorithms::radix_sort::sort(data, stats, sink),
        Algorithm::CountingSort => algorithms::counting_sort::sort(data, stats, sink),
        Algorithm::BucketSort => {
            return Err(UnsupportedInput {
                algorithm: algo,
                input: InputKind::Integers,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn integer_algorithms() -> impl Iterator<Item = Algorithm> {
        all_algorithms()
            .iter()
            .copied()
            .filter(|&algo| input_kind(algo) == InputKind::Integers)
    }

    fn assert_sorts_like_std(data: &[u64]) {
        for algo in integer_algorithms() {
            let mut actual = data.to_vec();
            let mut stats = SortStats::default();
            let mut last = Counts::default();
            let mut terminal = 0;
            let mut sink = |step: Step| {
                assert!(step.counts.comparisons >= last.comparisons);
                assert!(step.counts.moves >= last.moves);
                last = step.counts;
                if step.is_terminal() {
                    terminal += 1;
                }
            };
            sort_u64(algo, &mut actual, &mut stats, &mut sink).unwrap();

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
            let silent_when_empty =
                matches!(algo, Algorithm::RadixSort | Algorithm::CountingSort);
            let expected_terminal = if data.is_empty() && silent_when_empty {
                0
            } else {
                1
            };
            assert_eq!(
                terminal,
                expected_terminal,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
            assert_eq!(stats.time_complexity, complexity(algo).time);
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn only_quick_sort_records() {
        for &algo in all_algorithms() {
            assert_eq!(records_trace(algo), algo == Algorithm::QuickSort);
        }
    }

    #[test]
    fn bucket_sort_rejects_integers() {
        let mut data = [3, 1, 2];
        let err = sort_u64(
            Algorithm::BucketSort,
            &mut data,
            &mut SortStats::default(),
            &mut |_: Step| {},
        )
        .unwrap_err();
        assert_eq!(err.input, InputKind::Integers);
        assert_eq!(err.to_string(), "bucket_sort does not accept Integers input");
        assert_eq!(data, [3, 1, 2]);
    }

    #[test]
    fn quick_sort_runs_through_live_sink() {
        let mut data = [4, 2, 3, 1];
        let mut steps = Trace::<Step>::new();
        sort_u64(
            Algorithm::QuickSort,
            &mut data,
            &mut SortStats::default(),
            &mut steps,
        )
        .unwrap();
        assert_eq!(data, [1, 2, 3, 4]);
        let first = steps.first().unwrap();
        assert_eq!(first.kind, StepKind::SelectPivot);
        assert_eq!(first.primary, Some(3));
        assert!(steps.last().unwrap().is_terminal());
    }

    #[test]
    fn quick_sort_single_element_still_completes() {
        for mut data in [vec![], vec![7_u64]] {
            let mut steps = Trace::<Step>::new();
            let mut stats = SortStats::default();
            sort_u64(Algorithm::QuickSort, &mut data, &mut stats, &mut steps).unwrap();
            assert_eq!(steps.len(), 1);
            let last = steps.last().unwrap();
            assert!(last.is_terminal());
            assert!(last.explanation.starts_with("QuickSort Complete!"));
            assert_eq!(last.array, data);
            assert_eq!(stats.time_complexity, complexity(Algorithm::QuickSort).time);
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 32],
            vec![0, 1, 0, 1, 0],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 64, 127] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random_range(0..1_000_u64));
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn sorted_input_is_unchanged_but_still_counted() {
        let data: Vec<u64> = (1..=12).collect();
        for algo in [
            Algorithm::BubbleSort,
            Algorithm::InsertionSort,
            Algorithm::QuickSort,
        ] {
            let mut actual = data.clone();
            let mut stats = SortStats::default();
            sort_u64(algo, &mut actual, &mut stats, &mut |_: Step| {}).unwrap();
            assert_eq!(actual, data);
            assert!(stats.comparisons > 0, "algorithm={}", algorithm_name(algo));
        }
    }
}

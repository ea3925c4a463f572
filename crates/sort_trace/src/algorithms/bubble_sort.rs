use crate::explain;
use crate::stats::{self, Complexity, SortStats};
use crate::step::{Step, StepKind, StepSink};

pub const COMPLEXITY: Complexity = Complexity {
    time: "O(n²)",
    space: "O(1)",
};

const MOVES: &str = "Swaps";

/// Every pass runs to the end even when nothing was swapped.
pub fn sort<K: StepSink<Step>>(data: &mut [u64], stats: &mut SortStats, sink: &mut K) {
    let start = stats::begin(stats, COMPLEXITY);
    let n = data.len();

    for pass in 0..n.saturating_sub(1) {
        for j in 0..(n - pass - 1) {
            stats.compare();
            sink.emit(Step::new(
                StepKind::Compare,
                data,
                Some(j),
                Some(j + 1),
                stats.counts(),
                explain::with_totals("Comparing elements", stats.counts(), MOVES),
            ));

            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                stats.record_move();
                sink.emit(Step::new(
                    StepKind::Swap,
                    data,
                    Some(j),
                    Some(j + 1),
                    stats.counts(),
                    explain::with_totals("Swapped elements", stats.counts(), MOVES),
                ));
            }
        }
    }

    stats::finish(stats, start);
    sink.emit(Step::complete(
        data,
        stats.counts(),
        explain::summary("Bubble Sort Complete", stats, MOVES),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Trace;

    fn run(data: &mut [u64]) -> (SortStats, Trace<Step>) {
        let mut stats = SortStats::default();
        let mut trace = Trace::new();
        sort(data, &mut stats, &mut trace);
        (stats, trace)
    }

    #[test]
    fn swaps_adjacent_pairs() {
        let mut data = [3, 1, 2];
        let (stats, trace) = run(&mut data);
        assert_eq!(data, [1, 2, 3]);
        assert_eq!(stats.comparisons, 3);
        assert_eq!(stats.moves, 2);

        let kinds: Vec<_> = trace.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                StepKind::Compare,
                StepKind::Swap,
                StepKind::Compare,
                StepKind::Swap,
                StepKind::Compare,
                StepKind::Complete,
            ]
        );
        assert_eq!(trace[1].array, vec![1, 3, 2]);
        assert_eq!((trace[2].primary, trace[2].secondary), (Some(1), Some(2)));
    }

    #[test]
    fn sorted_input_still_runs_every_pass() {
        let mut data = [1, 2, 3, 4, 5];
        let (stats, trace) = run(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert_eq!(stats.comparisons, 10);
        assert_eq!(stats.moves, 0);
        assert_eq!(trace.len(), 11);
    }

    #[test]
    fn terminal_step_carries_summary() {
        let mut data = [2, 1];
        let (stats, trace) = run(&mut data);
        let last = trace.last().unwrap();
        assert!(last.is_terminal());
        assert_eq!((last.primary, last.secondary), (None, None));
        assert_eq!(last.counts, stats.counts());
        assert!(last.explanation.contains("Time Complexity: O(n²)"));
        assert!(last.explanation.contains("Space Complexity: O(1)"));
        assert!(last.explanation.contains("ms"));
    }

    #[test]
    fn tiny_inputs_only_complete() {
        for mut data in [vec![], vec![7]] {
            let (stats, trace) = run(&mut data);
            assert_eq!(stats.comparisons, 0);
            assert_eq!(trace.len(), 1);
            assert!(trace[0].is_terminal());
        }
    }
}

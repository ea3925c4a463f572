use crate::explain;
use crate::stats::{self, Complexity, SortStats};
use crate::step::{Step, StepKind, StepSink};

pub const COMPLEXITY: Complexity = Complexity {
    time: "O(n+k)",
    space: "O(n+k)",
};

const MOVES: &str = "Operations";

/// Stable counting sort.
///
/// The count table has `max + 1` slots, so memory grows with the largest
/// value present, not with the input length. Callers that feed unbounded
/// values should cap them first (see [`crate::session::SESSION`]).
pub fn sort<K: StepSink<Step>>(data: &mut [u64], stats: &mut SortStats, sink: &mut K) {
    let start = stats::begin(stats, COMPLEXITY);
    let Some(&max) = data.iter().max() else {
        stats::finish(stats, start);
        return;
    };

    let mut count = vec![0_usize; (max as usize).saturating_add(1)];
    let mut output = vec![0_u64; data.len()];

    for i in 0..data.len() {
        let value = data[i];
        count[value as usize] += 1;
        stats.compare();
        let text = explain::with_totals(
            format!("Counting occurrence of {value}"),
            stats.counts(),
            MOVES,
        );
        sink.emit(
            Step::new(StepKind::Tally, data, Some(i), None, stats.counts(), text)
                .with_count_table(&count),
        );
    }

    for v in 1..count.len() {
        count[v] += count[v - 1];
        let text = explain::with_totals(
            format!("Calculating cumulative count for value {v}"),
            stats.counts(),
            MOVES,
        );
        sink.emit(
            Step::new(StepKind::Accumulate, data, None, None, stats.counts(), text)
                .with_count_table(&count),
        );
    }

    for i in (0..data.len()).rev() {
        let value = data[i];
        let slot = &mut count[value as usize];
        *slot -= 1;
        output[*slot] = value;
        stats.record_move();
        let text = explain::with_totals(
            format!("Placing {value} in output array"),
            stats.counts(),
            MOVES,
        );
        sink.emit(
            Step::new(StepKind::Place, data, Some(i), None, stats.counts(), text)
                .with_count_table(&count),
        );
    }

    for i in 0..data.len() {
        data[i] = output[i];
        let text = explain::with_totals(
            "Updating main array with sorted elements",
            stats.counts(),
            MOVES,
        );
        sink.emit(Step::new(
            StepKind::CopyBack,
            data,
            Some(i),
            None,
            stats.counts(),
            text,
        ));
    }

    stats::finish(stats, start);
    sink.emit(Step::complete(
        data,
        stats.counts(),
        explain::summary("Counting Sort Complete!", stats, MOVES),
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
    fn cumulative_table_and_output() {
        let mut data = [4, 2, 2, 8, 3, 3, 1];
        let (stats, trace) = run(&mut data);
        assert_eq!(data, [1, 2, 2, 3, 3, 4, 8]);

        let cumulative = trace
            .iter()
            .rfind(|s| s.kind == StepKind::Accumulate)
            .and_then(|s| s.count_table.clone());
        assert_eq!(cumulative, Some(vec![0, 1, 3, 5, 6, 6, 6, 6, 7]));

        assert_eq!(stats.comparisons, 7);
        assert_eq!(stats.moves, 7);
        // 7 tallies, 8 cumulative steps, 7 placements, 7 copies, 1 terminal.
        assert_eq!(trace.len(), 30);
    }

    #[test]
    fn tally_snapshots_grow() {
        let mut data = [2, 0, 2];
        let (_, trace) = run(&mut data);
        let tallies: Vec<_> = trace
            .iter()
            .filter(|s| s.kind == StepKind::Tally)
            .map(|s| s.count_table.clone().unwrap())
            .collect();
        assert_eq!(tallies, [vec![0, 0, 1], vec![1, 0, 1], vec![1, 0, 2]]);
    }

    #[test]
    fn placement_scans_right_to_left() {
        let mut data = [3, 1, 2];
        let (_, trace) = run(&mut data);
        let placed: Vec<_> = trace
            .iter()
            .filter(|s| s.kind == StepKind::Place)
            .map(|s| s.primary)
            .collect();
        assert_eq!(placed, [Some(2), Some(1), Some(0)]);
    }

    #[test]
    fn empty_input_is_silent() {
        let mut data: [u64; 0] = [];
        let (_, trace) = run(&mut data);
        assert!(trace.is_empty());
    }

    #[test]
    fn terminal_step_summary() {
        let mut data = [0, 0];
        let (_, trace) = run(&mut data);
        let last = trace.last().unwrap();
        assert!(last.is_terminal());
        assert!(last.explanation.starts_with("Counting Sort Complete!"));
        assert!(last.explanation.contains("Time Complexity: O(n+k)"));
    }
}

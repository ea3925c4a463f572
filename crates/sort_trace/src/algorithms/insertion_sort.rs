use crate::explain;
use crate::stats::{self, Complexity, SortStats};
use crate::step::{Step, StepKind, StepSink};

pub const COMPLEXITY: Complexity = Complexity {
    time: "O(n²)",
    space: "O(1)",
};

const MOVES: &str = "Shifts";

pub fn sort<K: StepSink<Step>>(data: &mut [u64], stats: &mut SortStats, sink: &mut K) {
    let start = stats::begin(stats, COMPLEXITY);

    for i in 1..data.len() {
        let key = data[i];

        stats.compare();
        sink.emit(Step::new(
            StepKind::Pick,
            data,
            Some(i),
            Some(i - 1),
            stats.counts(),
            explain::with_totals(format!("Picked element {key}"), stats.counts(), MOVES),
        ));

        let mut hole = i;
        while hole > 0 && data[hole - 1] > key {
            stats.compare();
            data[hole] = data[hole - 1];
            stats.record_move();
            sink.emit(Step::new(
                StepKind::Shift,
                data,
                Some(hole - 1),
                Some(hole),
                stats.counts(),
                explain::with_totals(
                    format!("Shifting {} right", data[hole - 1]),
                    stats.counts(),
                    MOVES,
                ),
            ));
            hole -= 1;
        }

        data[hole] = key;
        sink.emit(Step::new(
            StepKind::Insert,
            data,
            Some(hole),
            Some(i),
            stats.counts(),
            explain::with_totals(
                format!("Inserted {key} at position {hole}"),
                stats.counts(),
                MOVES,
            ),
        ));
    }

    stats::finish(stats, start);
    sink.emit(Step::complete(
        data,
        stats.counts(),
        explain::summary("Insertion Sort Completed!", stats, MOVES),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Trace;

    #[test]
    fn pick_shift_insert_sequence() {
        let mut data = [2, 3, 1];
        let mut stats = SortStats::default();
        let mut trace = Trace::new();
        sort(&mut data, &mut stats, &mut trace);

        assert_eq!(data, [1, 2, 3]);
        let kinds: Vec<_> = trace.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                StepKind::Pick,
                StepKind::Insert,
                StepKind::Pick,
                StepKind::Shift,
                StepKind::Shift,
                StepKind::Insert,
                StepKind::Complete,
            ]
        );
        assert_eq!(stats.comparisons, 4);
        assert_eq!(stats.moves, 2);

        let inserted = &trace[5];
        assert_eq!((inserted.primary, inserted.secondary), (Some(0), Some(2)));
        assert_eq!(inserted.explanation.lines().next(), Some("Inserted 1 at position 0"));
        assert_eq!(trace[3].array, vec![2, 3, 3]);
    }

    #[test]
    fn insert_step_does_not_touch_counters() {
        let mut data = [5, 4, 3, 2, 1];
        let mut stats = SortStats::default();
        let mut prev = None;
        let mut sink = |s: Step| {
            if s.kind == StepKind::Insert {
                assert_eq!(Some(s.counts), prev);
            }
            prev = Some(s.counts);
        };
        sort(&mut data, &mut stats, &mut sink);
        assert_eq!(data, [1, 2, 3, 4, 5]);
        assert_eq!(stats.moves, 10);
        assert_eq!(stats.comparisons, 14);
    }
}

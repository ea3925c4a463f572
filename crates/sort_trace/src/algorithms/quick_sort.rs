use std::time::Instant;

use crate::explain;
use crate::stats::{self, Complexity, SortStats};
use crate::step::{PartitionStep, StepKind, StepSink};

pub const COMPLEXITY: Complexity = Complexity {
    time: "O(n log n) avg, O(n²) worst",
    space: "O(log n)",
};

pub(crate) const MOVES: &str = "Swaps";

/// State shared by every level of one top-level sort.
struct TraceContext<'a, K> {
    stats: &'a mut SortStats,
    sink: &'a mut K,
    start: Instant,
}

/// Lomuto quicksort (last element as pivot) that records a snapshot at
/// every observable point instead of notifying live.
///
/// Inputs shorter than two elements produce no steps at all.
pub fn sort<K: StepSink<PartitionStep>>(data: &mut [u64], stats: &mut SortStats, sink: &mut K) {
    let high = data.len().saturating_sub(1);
    let mut ctx = TraceContext {
        stats,
        sink,
        start: Instant::now(),
    };
    quick_sort(data, &mut ctx, 0, high, true);
}

fn quick_sort<K: StepSink<PartitionStep>>(
    data: &mut [u64],
    ctx: &mut TraceContext<'_, K>,
    low: usize,
    high: usize,
    outermost: bool,
) {
    if outermost {
        ctx.start = stats::begin(ctx.stats, COMPLEXITY);
    }
    if low >= high {
        if outermost {
            stats::finish(ctx.stats, ctx.start);
        }
        return;
    }

    let pivot_pos = partition(data, ctx, low, high);
    if pivot_pos > low {
        quick_sort(data, ctx, low, pivot_pos - 1, false);
    }
    quick_sort(data, ctx, pivot_pos + 1, high, false);

    if outermost {
        stats::finish(ctx.stats, ctx.start);
        let explanation = explain::summary("QuickSort Complete!", ctx.stats, MOVES);
        ctx.emit(StepKind::Complete, data, None, None, None, explanation);
    }
}

fn partition<K: StepSink<PartitionStep>>(
    data: &mut [u64],
    ctx: &mut TraceContext<'_, K>,
    low: usize,
    high: usize,
) -> usize {
    let pivot = data[high];
    let bounds = Some((low, high));

    let text = ctx.with_totals(format!("Selecting pivot: {pivot} (index {high})"));
    ctx.emit(StepKind::SelectPivot, data, Some(high), None, bounds, text);

    let mut store = low;
    for j in low..high {
        ctx.stats.compare();
        let text = ctx.with_totals(format!("Comparing {} with pivot ({pivot})", data[j]));
        ctx.emit(StepKind::Compare, data, Some(high), Some(j), bounds, text);

        if data[j] < pivot {
            if store != j {
                data.swap(store, j);
                ctx.stats.record_move();
                let text = ctx.with_totals(format!("Swapped {} and {}", data[store], data[j]));
                ctx.emit(StepKind::Swap, data, Some(high), Some(j), bounds, text);
            }
            store += 1;
        }
    }

    let pivot_pos = store;
    let headline = if pivot_pos != high {
        data.swap(pivot_pos, high);
        ctx.stats.record_move();
        format!("Moved pivot to final position at index {pivot_pos}")
    } else {
        format!("Pivot already in final position at index {pivot_pos}")
    };
    let text = ctx.with_totals(headline);
    ctx.emit(StepKind::MovePivot, data, Some(pivot_pos), None, bounds, text);

    let text = ctx.with_totals(format!(
        "Partitioned: left ({}), right ({})",
        range_label(low, pivot_pos),
        range_label(pivot_pos + 1, high + 1),
    ));
    let mut step = ctx.snapshot(StepKind::Partitioned, data, Some(pivot_pos), None, bounds, text);
    if low < pivot_pos {
        step.left_partition = Some(data[low..pivot_pos].to_vec());
    }
    if pivot_pos < high {
        step.right_partition = Some(data[pivot_pos + 1..=high].to_vec());
    }
    ctx.sink.emit(step);

    pivot_pos
}

impl<K: StepSink<PartitionStep>> TraceContext<'_, K> {
    fn with_totals(&self, headline: String) -> String {
        explain::with_totals(headline, self.stats.counts(), MOVES)
    }

    fn snapshot(
        &self,
        kind: StepKind,
        data: &[u64],
        pivot: Option<usize>,
        comparing: Option<usize>,
        bounds: Option<(usize, usize)>,
        explanation: String,
    ) -> PartitionStep {
        PartitionStep {
            kind,
            array: data.to_vec(),
            pivot,
            comparing,
            left_bound: bounds.map(|(low, _)| low),
            right_bound: bounds.map(|(_, high)| high),
            left_partition: None,
            right_partition: None,
            counts: self.stats.counts(),
            explanation,
        }
    }

    fn emit(
        &mut self,
        kind: StepKind,
        data: &[u64],
        pivot: Option<usize>,
        comparing: Option<usize>,
        bounds: Option<(usize, usize)>,
        explanation: String,
    ) {
        let step = self.snapshot(kind, data, pivot, comparing, bounds, explanation);
        self.sink.emit(step);
    }
}

fn range_label(start: usize, end: usize) -> String {
    if start < end {
        format!("{}-{}", start, end - 1)
    } else {
        "empty".to_string()
    }
}

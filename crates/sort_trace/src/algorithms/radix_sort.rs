use crate::explain;
use crate::stats::{self, Complexity, SortStats};
use crate::step::{Step, StepKind, StepSink};

pub const COMPLEXITY: Complexity = Complexity {
    time: "O(nk)",
    space: "O(n+k)",
};

const MOVES: &str = "Operations";
const RADIX: usize = 10;

/// LSD radix sort over decimal digits, one stable counting pass per digit.
pub fn sort<K: StepSink<Step>>(data: &mut [u64], stats: &mut SortStats, sink: &mut K) {
    let start = stats::begin(stats, COMPLEXITY);
    let Some(&max) = data.iter().max() else {
        stats::finish(stats, start);
        return;
    };

    let mut exp = 1_u64;
    while max / exp > 0 {
        counting_pass(data, exp, stats, sink);
        match exp.checked_mul(RADIX as u64) {
            Some(next) => exp = next,
            None => break,
        }
    }

    stats::finish(stats, start);
    sink.emit(Step::complete(
        data,
        stats.counts(),
        explain::summary("Radix Sort Complete!", stats, MOVES),
    ));
}

/// Number of decimal passes needed for `max`.
pub fn pass_count(max: u64) -> usize {
    let mut passes = 0;
    let mut rest = max;
    while rest > 0 {
        rest /= RADIX as u64;
        passes += 1;
    }
    passes
}

#[inline]
fn digit(value: u64, exp: u64) -> usize {
    ((value / exp) % RADIX as u64) as usize
}

fn counting_pass<K: StepSink<Step>>(
    data: &mut [u64],
    exp: u64,
    stats: &mut SortStats,
    sink: &mut K,
) {
    let n = data.len();
    let mut count = [0_usize; RADIX];
    let mut output = vec![0_u64; n];

    for i in 0..n {
        let d = digit(data[i], exp);
        count[d] += 1;
        stats.compare();
        let text = explain::with_totals(
            format!("Counting digit {d} at position {i}"),
            stats.counts(),
            MOVES,
        );
        sink.emit(
            Step::new(StepKind::Tally, data, Some(i), None, stats.counts(), text)
                .with_count_table(&count),
        );
    }

    for d in 1..RADIX {
        count[d] += count[d - 1];
        let text = explain::with_totals(
            format!("Calculating cumulative count for digit {d}"),
            stats.counts(),
            MOVES,
        );
        sink.emit(
            Step::new(StepKind::Accumulate, data, None, None, stats.counts(), text)
                .with_count_table(&count),
        );
    }

    for i in (0..n).rev() {
        let d = digit(data[i], exp);
        count[d] -= 1;
        output[count[d]] = data[i];
        stats.record_move();
        let text = explain::with_totals(
            format!("Placing {} in output array", data[i]),
            stats.counts(),
            MOVES,
        );
        sink.emit(
            Step::new(StepKind::Place, data, Some(i), None, stats.counts(), text)
                .with_count_table(&count),
        );
    }

    for i in 0..n {
        data[i] = output[i];
        let text = explain::with_totals(
            format!("Updating array with sorted digits (exp={exp})"),
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
}

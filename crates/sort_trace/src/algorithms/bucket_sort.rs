use crate::explain;
use crate::pacing::Pacer;
use crate::stats::{self, Complexity, SortStats};
use crate::step::{BucketStep, StepKind, StepSink};

pub const COMPLEXITY: Complexity = Complexity {
    time: "O(n+k) average",
    space: "O(n+k)",
};

const MOVES: &str = "Operations";

/// Every notification is followed by `pacer.pause()`.
pub fn sort<K: StepSink<BucketStep>>(
    data: &mut [f64],
    stats: &mut SortStats,
    pacer: &Pacer,
    sink: &mut K,
) {
    let start = stats::begin(stats, COMPLEXITY);
    let n = data.len();
    if n == 0 {
        stats::finish(stats, start);
        return;
    }

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for &value in data.iter() {
        let index = bucket_index(value, n);
        buckets[index].push(value);
        stats.record_move();
        emit(
            sink,
            pacer,
            StepKind::Place,
            &buckets,
            stats,
            format!("Placing {value:.2} into bucket {index}"),
        );
    }

    for i in 0..n {
        if buckets[i].is_empty() {
            continue;
        }
        sort_bucket(&mut buckets[i], stats);
        let headline = format!("Sorting bucket {} ({} elements)", i, buckets[i].len());
        emit(sink, pacer, StepKind::SortBucket, &buckets, stats, headline);
    }

    let mut out = 0;
    for &value in buckets.iter().flatten() {
        data[out] = value;
        out += 1;
        stats.record_move();
    }

    stats::finish(stats, start);
    sink.emit(BucketStep {
        kind: StepKind::Complete,
        buckets,
        counts: stats.counts(),
        explanation: explain::summary("Final sorted array constructed", stats, MOVES),
    });
    pacer.pause();
}

/// `floor(value * n)` clamped into `0..n`; negative and NaN land in bucket 0.
#[inline]
pub fn bucket_index(value: f64, n: usize) -> usize {
    debug_assert!(n > 0);
    ((value * n as f64) as usize).min(n - 1)
}

fn sort_bucket(bucket: &mut [f64], stats: &mut SortStats) {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut hole = i;
        while hole > 0 {
            stats.compare();
            if bucket[hole - 1] <= key {
                break;
            }
            bucket[hole] = bucket[hole - 1];
            stats.record_move();
            hole -= 1;
        }
        bucket[hole] = key;
    }
}

fn emit<K: StepSink<BucketStep>>(
    sink: &mut K,
    pacer: &Pacer,
    kind: StepKind,
    buckets: &[Vec<f64>],
    stats: &SortStats,
    headline: String,
) {
    sink.emit(BucketStep {
        kind,
        buckets: buckets.to_vec(),
        counts: stats.counts(),
        explanation: explain::with_totals(headline, stats.counts(), MOVES),
    });
    pacer.pause();
}

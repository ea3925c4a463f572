//! Text-mode consumer of the step stream.
//!
//! Usage: `trace_demo [algorithm] [values...]`
//!
//! `algorithm` is one of the names from `algorithm_name` (default
//! `quick_sort`). Without values a random session array is used.

use sort_trace::{
    Algorithm, BucketStep, InputKind, Session, SortStats, Step, algorithm_name, all_algorithms,
    input_kind,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let algo = match args.get(1) {
        Some(name) => match all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == name.as_str())
        {
            Some(algo) => algo,
            None => {
                eprintln!("unknown algorithm: {name}");
                let names: Vec<_> = all_algorithms()
                    .iter()
                    .map(|&a| algorithm_name(a))
                    .collect();
                eprintln!("expected one of: {}", names.join(", "));
                std::process::exit(2);
            }
        },
        None => Algorithm::QuickSort,
    };

    let mut rng = rand::rng();
    let mut session = Session::new(&mut rng).without_pacing();
    let values = &args[args.len().min(2)..];

    match input_kind(algo) {
        InputKind::UnitFloats => {
            if !values.is_empty() {
                session.set_float_array(values.iter().filter_map(|v| v.parse().ok()).collect());
            }
            println!("Input: {:?}", session.float_array());
            let mut index = 0;
            session.run_bucket(&mut |step: BucketStep| {
                index += 1;
                println!("--- step {index} ---\n{}", step.explanation);
                println!("buckets: {:?}", step.buckets);
            });
            println!("\n{}", session.text());
        }
        InputKind::Integers => {
            if !values.is_empty() {
                session.set_array(values.iter().filter_map(|v| v.parse().ok()).collect());
            }
            println!("Input: {:?}", session.array());
            if algo == Algorithm::QuickSort {
                print_trace(&mut session);
            } else {
                let mut index = 0;
                let outcome = session.run(algo, &mut |step: Step| {
                    index += 1;
                    println!("--- step {index} ---\n{}", step.explanation);
                    println!("array: {:?}", step.array);
                });
                if let Err(err) = outcome {
                    eprintln!("{err}");
                    std::process::exit(1);
                }
            }
            print_stats(session.stats());
        }
    }
}

fn print_trace(session: &mut Session) {
    let replay = session.record_quick_sort();
    let len = replay.len();
    for (i, step) in replay.trace().iter().enumerate() {
        println!("--- Step {} of {} ---\n{}", i + 1, len, step.explanation);
        println!("array: {:?}", step.array);
        if let Some(left) = &step.left_partition {
            println!("left: {left:?}");
        }
        if let Some(right) = &step.right_partition {
            println!("right: {right:?}");
        }
    }
}

fn print_stats(stats: &SortStats) {
    println!(
        "\ncomparisons={} moves={} elapsed={:.3}ms time={} space={}",
        stats.comparisons,
        stats.moves,
        stats.elapsed_ms(),
        stats.time_complexity,
        stats.space_complexity,
    );
}

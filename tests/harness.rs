use std::fs;
use std::time::Duration;

use kth_largest::harness::{
    default_cases, run_cases, sink, Benchmark, BenchmarkConfig, ManualClock, Position,
};
use kth_largest::{Algorithm, Error};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn correctness_suite_passes() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let reports = run_cases(&default_cases(), &mut rng);
    assert!(reports.iter().all(|r| r.passed()));
}

#[test]
fn benchmark_then_sink_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rust_results.json");
    let config = BenchmarkConfig::default()
        .with_sizes([20, 40])
        .with_positions([Position::Largest, Position::Smallest])
        .with_trials(3)
        .with_seed(9)
        .with_output(&path);

    let mut bench = Benchmark::with_parts(
        config.clone(),
        ManualClock::new(Duration::from_micros(1500)),
        ChaCha20Rng::seed_from_u64(9),
    );
    let report = bench.run(|_| {});
    assert!(report.is_complete());
    sink::write_json(&report.records, &config.output).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = written.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["language"], "Rust");
    assert_eq!(rows[0]["size"], 20);
    assert_eq!(rows[0]["position"], "1st largest");
    assert_eq!(rows[1]["k"], 20);
    assert_eq!(rows[3]["size"], 40);
    for row in rows {
        approx::assert_relative_eq!(row["quickselect"].as_f64().unwrap(), 1.5);
        assert_eq!(row["fastest"], Algorithm::FullSort.name());
    }
}

#[test]
fn sink_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a file.
    let err = sink::write_json(&[], dir.path()).unwrap_err();
    match err {
        Error::SinkWrite { path, .. } => assert_eq!(path, dir.path()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sink_overwrites_previous_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, "stale").unwrap();
    sink::write_json(&[], &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

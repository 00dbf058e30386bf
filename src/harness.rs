//! Correctness and benchmark harness around the selection algorithms.
//!
//! - [`correctness`] runs every algorithm over fixed cases and reports pass/fail
//! - [`benchmark`] times every algorithm over random inputs and builds records
//! - [`sink`] serializes those records to JSON
//!
//! Timing goes through the [`Clock`] trait so benchmark runs can be replayed with
//! a [`ManualClock`] in tests.

pub mod benchmark;
pub mod clock;
pub mod config;
pub mod correctness;
pub mod sink;

pub use benchmark::{
    Benchmark, BenchmarkRecord, BenchmarkReport, ConfigFailure, GroupEvent, Latencies,
};
pub use clock::{measure, Clock, ManualClock, MonotonicClock};
pub use config::{BenchmarkConfig, Position};
pub use correctness::{default_cases, run_cases, AlgorithmOutcome, CaseReport, TestCase};

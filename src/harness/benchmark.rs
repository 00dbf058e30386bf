//! Randomized timing runs over every selection algorithm.
//!
//! For each configured (size, position) pair the benchmark generates `trials`
//! random inputs, runs every algorithm once per input on its own copy, and
//! averages the elapsed times into a [`BenchmarkRecord`]. Nothing here touches
//! the filesystem; see [`crate::harness::sink`] for that.

use std::fmt;
use std::time::Duration;

use log::{debug, error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::cs::select::{Algorithm, Rank};
use crate::error::{Error, Result};
use crate::harness::clock::{measure, Clock, MonotonicClock};
use crate::harness::config::{BenchmarkConfig, Position};

/// Mean latency per algorithm, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Latencies {
    pub builtin_sort: f64,
    pub heap: f64,
    pub merge_sort: f64,
    pub quicksort: f64,
    pub quickselect: f64,
}

impl Latencies {
    pub fn get(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::FullSort => self.builtin_sort,
            Algorithm::BoundedHeap => self.heap,
            Algorithm::MergeSort => self.merge_sort,
            Algorithm::Quicksort => self.quicksort,
            Algorithm::Quickselect => self.quickselect,
        }
    }

    fn slot_mut(&mut self, algorithm: Algorithm) -> &mut f64 {
        match algorithm {
            Algorithm::FullSort => &mut self.builtin_sort,
            Algorithm::BoundedHeap => &mut self.heap,
            Algorithm::MergeSort => &mut self.merge_sort,
            Algorithm::Quicksort => &mut self.quicksort,
            Algorithm::Quickselect => &mut self.quickselect,
        }
    }

    /// The algorithm with the lowest latency; ties go to the earlier entry of `Algorithm::ALL`.
    pub fn fastest(&self) -> Algorithm {
        let mut best = Algorithm::ALL[0];
        for algorithm in Algorithm::ALL.into_iter().skip(1) {
            if self.get(algorithm) < self.get(best) {
                best = algorithm;
            }
        }
        best
    }

    /// Copy with every latency rounded to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> Self {
        let mut out = *self;
        for algorithm in Algorithm::ALL {
            *out.slot_mut(algorithm) = round_to(self.get(algorithm), decimals);
        }
        out
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

const ALGORITHMS: usize = Algorithm::ALL.len();

/// Decimal places kept for latencies in a record.
pub const LATENCY_DECIMALS: i32 = 3;

/// Timing summary for one (size, position) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRecord {
    pub language: String,
    pub size: usize,
    pub position: Position,
    pub k: usize,
    #[serde(flatten)]
    pub latencies: Latencies,
    pub fastest: Algorithm,
}

impl fmt::Display for BenchmarkRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let share = self.k as f64 / self.size as f64 * 100.0;
        writeln!(f, "{} (k={}, %{:.1})", self.position, self.k, share)?;
        writeln!(f, "{}", "-".repeat(40))?;
        for algorithm in Algorithm::ALL {
            let label = format!("{}:", algorithm);
            writeln!(f, "{:<15} {:.3}ms", label, self.latencies.get(algorithm))?;
        }
        write!(f, "Fastest:        {}", self.fastest)
    }
}

/// A (size, position) group that was abandoned because an algorithm failed.
#[derive(Debug)]
pub struct ConfigFailure {
    pub size: usize,
    pub position: Position,
    pub error: Error,
}

/// Outcome of one (size, position) group, reported as soon as the group ends.
#[derive(Debug, Clone, Copy)]
pub enum GroupEvent<'a> {
    Finished(&'a BenchmarkRecord),
    Aborted(&'a ConfigFailure),
}

impl GroupEvent<'_> {
    pub fn size(&self) -> usize {
        match self {
            GroupEvent::Finished(record) => record.size,
            GroupEvent::Aborted(failure) => failure.size,
        }
    }
}

/// Everything a benchmark run produced, in configuration order.
#[derive(Debug, Default)]
pub struct BenchmarkReport {
    pub records: Vec<BenchmarkRecord>,
    pub failures: Vec<ConfigFailure>,
}

impl BenchmarkReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Benchmark driver, generic over its time source and random source.
pub struct Benchmark<C, R> {
    config: BenchmarkConfig,
    clock: C,
    rng: R,
}

impl Benchmark<MonotonicClock, ChaCha20Rng> {
    /// Wall-clock benchmark seeded from `config.seed`, or OS entropy without one.
    pub fn new(config: BenchmarkConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };
        Self::with_parts(config, MonotonicClock::new(), rng)
    }
}

impl<C: Clock, R: Rng> Benchmark<C, R> {
    pub fn with_parts(config: BenchmarkConfig, clock: C, rng: R) -> Self {
        Self { config, clock, rng }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs every configured group in order, reporting each one to `on_group` as it ends.
    ///
    /// A group whose algorithms fail or disagree is logged, recorded as a
    /// [`ConfigFailure`] and skipped; the remaining groups still run.
    pub fn run<F>(&mut self, mut on_group: F) -> BenchmarkReport
    where
        F: FnMut(GroupEvent<'_>),
    {
        let sizes = self.config.sizes.clone();
        let positions = self.config.positions.clone();
        let mut report = BenchmarkReport::default();

        for size in sizes {
            for &position in &positions {
                match self.run_group(size, position) {
                    Ok(record) => {
                        info!(
                            "size {} {}: fastest {} ({:.3}ms)",
                            size,
                            position,
                            record.fastest,
                            record.latencies.get(record.fastest)
                        );
                        on_group(GroupEvent::Finished(&record));
                        report.records.push(record);
                    }
                    Err(error) => {
                        error!("size {} {}: aborted: {}", size, position, error);
                        let failure = ConfigFailure {
                            size,
                            position,
                            error,
                        };
                        on_group(GroupEvent::Aborted(&failure));
                        report.failures.push(failure);
                    }
                }
            }
        }
        report
    }

    /// Times every algorithm over `config.trials` random inputs of `size` elements.
    ///
    /// # Errors
    /// * `Error::InvalidRank` if `position` has no valid rank for `size` (e.g. `size == 0`)
    /// * `Error::Disagreement` if an algorithm returns a different value than
    ///   the first one did on the same input
    pub fn run_group(&mut self, size: usize, position: Position) -> Result<BenchmarkRecord> {
        let rank = Rank::new(position.k_for(size), size)?;
        let k = rank.k();
        let trials = self.config.trials;
        debug!("size {} {} (k={}): {} trials", size, position, k, trials);

        let mut totals = [Duration::ZERO; ALGORITHMS];
        let upper = i64::try_from(size).unwrap_or(i64::MAX);
        for _ in 0..trials {
            let nums: Vec<i64> = (0..size).map(|_| self.rng.gen_range(1..=upper)).collect();
            let elapsed = self.run_trial(&nums, k)?;
            for (total, step) in totals.iter_mut().zip(elapsed) {
                *total += step;
            }
        }

        let mut means = Latencies::default();
        let divisor = trials.max(1) as f64;
        for (slot, algorithm) in Algorithm::ALL.into_iter().enumerate() {
            *means.slot_mut(algorithm) = totals[slot].as_secs_f64() * 1000.0 / divisor;
        }

        Ok(BenchmarkRecord {
            language: self.config.language.clone(),
            size,
            position,
            k,
            latencies: means.rounded(LATENCY_DECIMALS),
            fastest: means.fastest(),
        })
    }

    /// Times every algorithm once on its own copy of `nums`.
    pub(crate) fn run_trial(&mut self, nums: &[i64], k: usize) -> Result<[Duration; ALGORITHMS]> {
        self.run_trial_with(nums, k, |algorithm, copy, k, rng| {
            algorithm.select(copy, k, rng)
        })
    }

    /// Hands each algorithm a fresh copy of `nums` through `select` and times the call.
    ///
    /// # Errors
    /// Propagates the first algorithm error, or `Error::Disagreement` when an
    /// answer differs from the first algorithm's.
    fn run_trial_with<T, S>(
        &mut self,
        nums: &[T],
        k: usize,
        mut select: S,
    ) -> Result<[Duration; ALGORITHMS]>
    where
        T: Ord + Clone + fmt::Display,
        S: FnMut(Algorithm, &mut [T], usize, &mut R) -> Result<T>,
    {
        let mut elapsed = [Duration::ZERO; ALGORITHMS];
        let mut reference: Option<T> = None;

        for (slot, algorithm) in Algorithm::ALL.into_iter().enumerate() {
            let mut copy = nums.to_vec();
            let rng = &mut self.rng;
            let (result, took) = measure(&mut self.clock, || select(algorithm, &mut copy, k, rng));
            let value = result?;
            elapsed[slot] = took;

            if let Some(expected) = &reference {
                if *expected != value {
                    return Err(Error::Disagreement {
                        algorithm,
                        expected: expected.to_string(),
                        found: value.to_string(),
                    });
                }
            } else {
                reference = Some(value);
            }
        }
        Ok(elapsed)
    }
}

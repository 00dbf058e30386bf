use std::fmt;

use log::warn;
use rand::Rng;

use crate::cs::select::Algorithm;
use crate::error::Result;

/// A fixed input with a known k-th largest value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub nums: Vec<i64>,
    pub k: usize,
    pub expected: i64,
}

impl TestCase {
    pub fn new(nums: impl Into<Vec<i64>>, k: usize, expected: i64) -> Self {
        Self {
            nums: nums.into(),
            k,
            expected,
        }
    }
}

/// The cases every algorithm has to get right before it is benchmarked.
pub fn default_cases() -> Vec<TestCase> {
    vec![
        TestCase::new([3, 2, 1, 5, 6, 4], 2, 5),
        TestCase::new([3, 2, 3, 1, 2, 4, 5, 5, 6], 4, 4),
        TestCase::new([1], 1, 1),
        TestCase::new([7, 10, 4, 3, 20, 15], 3, 10),
    ]
}

/// What one algorithm returned for one case.
#[derive(Debug)]
pub struct AlgorithmOutcome {
    pub algorithm: Algorithm,
    pub result: Result<i64>,
    pub passed: bool,
}

/// Per-algorithm outcomes for one test case.
#[derive(Debug)]
pub struct CaseReport {
    /// 1-based position of the case in the suite.
    pub index: usize,
    pub case: TestCase,
    pub outcomes: Vec<AlgorithmOutcome>,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Test {}:", self.index)?;
        writeln!(f, "  Input: {:?}, k={}", self.case.nums, self.case.k)?;
        writeln!(f, "  Expected: {}", self.case.expected)?;
        for outcome in &self.outcomes {
            let mark = if outcome.passed { '✓' } else { '✗' };
            match &outcome.result {
                Ok(value) => writeln!(f, "  {}: {} {}", outcome.algorithm, value, mark)?,
                Err(err) => writeln!(f, "  {}: error ({}) {}", outcome.algorithm, err, mark)?,
            }
        }
        Ok(())
    }
}

/// Runs every algorithm on its own copy of every case.
///
/// Mismatches and errors are recorded in the report rather than returned, so the
/// whole suite always runs.
pub fn run_cases<R: Rng + ?Sized>(cases: &[TestCase], rng: &mut R) -> Vec<CaseReport> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let outcomes = Algorithm::ALL
                .iter()
                .map(|&algorithm| {
                    let mut copy = case.nums.clone();
                    let result = algorithm.select(&mut copy, case.k, rng);
                    let passed = matches!(result, Ok(value) if value == case.expected);
                    if !passed {
                        warn!(
                            "{} failed case {}: expected {}, got {:?}",
                            algorithm,
                            i + 1,
                            case.expected,
                            result
                        );
                    }
                    AlgorithmOutcome {
                        algorithm,
                        result,
                        passed,
                    }
                })
                .collect();
            CaseReport {
                index: i + 1,
                case: case.clone(),
                outcomes,
            }
        })
        .collect()
}

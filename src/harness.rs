//! Sort harness: builds lists from literal sequences, runs an algorithm with
//! a counting comparator, and checks the result against the expected order.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::{CaseConfig, ConfigError, HarnessConfig};
use crate::integer::{less_than, sort_list, with_elements, IntegerList};
use crate::sort::{Algorithm, Counting};

/// A named input sequence with its expected sorted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortCase {
    pub name: String,
    pub values: Vec<i32>,
    pub expected: Vec<i32>,
}

impl SortCase {
    pub fn new(name: impl Into<String>, values: Vec<i32>, expected: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            values,
            expected,
        }
    }

    /// Case whose expectation is the ascending order of `values`.
    pub fn ascending(name: impl Into<String>, values: Vec<i32>) -> Self {
        let mut expected = values.clone();
        expected.sort_unstable();
        Self::new(name, values, expected)
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }
}

impl From<&CaseConfig> for SortCase {
    fn from(case: &CaseConfig) -> Self {
        match &case.expected {
            Some(expected) => Self::new(&case.name, case.values.clone(), expected.clone()),
            None => Self::ascending(&case.name, case.values.clone()),
        }
    }
}

/// The three fixed cases: mixed values, values with duplicates, and a
/// strictly descending run of `reverse_len` integers.
pub fn builtin_cases(reverse_len: usize) -> Vec<SortCase> {
    let reverse_len = i32::try_from(reverse_len).unwrap_or(i32::MAX);

    vec![
        SortCase::new(
            "mixed",
            vec![1, 18, 3, 7, 9, 6, 106, 2, 75, 10, 5, -1],
            vec![-1, 1, 2, 3, 5, 6, 7, 9, 10, 18, 75, 106],
        ),
        SortCase::new(
            "duplicates",
            vec![
                4, 18764, -3245, 75321, 9784, 631, 106, 20, 35, 109, 575, 4, -118, 20789, 2, 18,
            ],
            vec![
                -3245, -118, 2, 4, 4, 18, 20, 35, 106, 109, 575, 631, 9784, 18764, 20789, 75321,
            ],
        ),
        SortCase::new(
            "reversed",
            (0..reverse_len).rev().collect(),
            (0..reverse_len).collect(),
        ),
    ]
}

/// Compare `list` against `expected`, stopping at the first mismatch.
///
/// Lengths must match as well as values.
pub fn check_expected(list: &IntegerList, expected: &[i32]) -> bool {
    let mut index = 0;
    let mut matched = true;

    list.for_each(|&value| {
        if expected.get(index) != Some(&value) {
            matched = false;
            return false;
        }
        index += 1;
        true
    });

    matched && index == expected.len()
}

/// Outcome of running one case with one algorithm.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub algorithm: Algorithm,
    pub size: usize,
    pub comparisons: u64,
    pub elapsed: Duration,
    pub passed: bool,
    /// Rendered input, `None` when the list was too large to print.
    pub input: Option<String>,
    /// Rendered output, `None` when the list was too large to print.
    pub output: Option<String>,
}

/// Build the list, sort it with a counting comparator, and check the result.
pub fn run_case(case: &SortCase, algorithm: Algorithm, config: &HarnessConfig) -> CaseReport {
    let printable = case.size() < config.print_limit;
    let mut list = with_elements(&case.values);
    let input = printable.then(|| list.to_string());

    let mut compare = Counting::new(less_than);
    let start = Instant::now();
    sort_list(&mut list, algorithm, &mut compare);
    let elapsed = start.elapsed();

    let output = printable.then(|| list.to_string());
    let passed = check_expected(&list, &case.expected);
    list.destroy();

    info!(
        case = %case.name,
        %algorithm,
        size = case.size(),
        comparisons = compare.count(),
        passed,
        "sort case finished"
    );

    CaseReport {
        name: case.name.clone(),
        algorithm,
        size: case.size(),
        comparisons: compare.count(),
        elapsed,
        passed,
        input,
        output,
    }
}

/// Every case the configuration describes: built-ins first, then extras.
pub fn configured_cases(config: &HarnessConfig) -> Vec<SortCase> {
    let mut cases = builtin_cases(config.reverse_len);
    cases.extend(config.cases.iter().map(SortCase::from));
    cases
}

/// Run every configured case with every configured algorithm.
///
/// `on_report` sees each report as soon as its run finishes. Cases an
/// algorithm is not allowed to run on are skipped with a warning. Stops at
/// the first failing run and returns [`HarnessError::CaseFailed`] for it.
pub fn run_all<F>(
    config: &HarnessConfig,
    mut on_report: F,
) -> Result<Vec<CaseReport>, HarnessError>
where
    F: FnMut(&CaseReport),
{
    let mut reports = Vec::new();

    for case in configured_cases(config) {
        for &algorithm in &config.algorithms {
            if !config.allows(algorithm, case.size()) {
                warn!(
                    case = %case.name,
                    %algorithm,
                    size = case.size(),
                    "skipping case above configured limit"
                );
                continue;
            }

            let report = run_case(&case, algorithm, config);
            on_report(&report);
            reports.push(report);
            ensure_passed(&reports)?;
        }
    }

    Ok(reports)
}

/// Console rendering of a report, one block per run.
impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- Test {} ({}) --", self.name, self.algorithm)?;
        writeln!(f, "List Size = {}", self.size)?;
        write_rendered(f, "Input:", self.input.as_deref())?;
        write_rendered(f, "Output:", self.output.as_deref())?;
        writeln!(f, "\nComparisons = {}", self.comparisons)?;
        writeln!(
            f,
            "Condition: {}",
            if self.passed { "PASSED" } else { "FAILED" }
        )?;
        write!(
            f,
            "Resolved sort in {:.3} seconds",
            self.elapsed.as_secs_f64()
        )
    }
}

fn write_rendered(f: &mut fmt::Formatter<'_>, label: &str, rendered: Option<&str>) -> fmt::Result {
    writeln!(f, "{}", label)?;
    writeln!(f, "{}", rendered.unwrap_or("Too large to be printed"))
}

/// Harness errors.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Sort case '{name}' failed with {algorithm} sort")]
    CaseFailed { name: String, algorithm: Algorithm },
}

/// Turn the first failing report into an error.
pub fn ensure_passed(reports: &[CaseReport]) -> Result<(), HarnessError> {
    match reports.iter().find(|report| !report.passed) {
        Some(report) => Err(HarnessError::CaseFailed {
            name: report.name.clone(),
            algorithm: report.algorithm,
        }),
        None => Ok(()),
    }
}

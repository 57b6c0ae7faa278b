//! Result aggregation.

use super::result::TestResult;

/// Derived totals over a result collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    /// Percentage of passed results, `0.0` for an empty collection.
    pub success_rate: f64,
    /// `true` when at least one result exists and all of them passed.
    pub overall_success: bool,
}

impl Summary {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    /// Rate with one decimal, e.g. `"85.7%"`.
    pub fn success_rate_label(&self) -> String {
        format!("{:.1}%", self.success_rate)
    }
}

/// Fold `results` into a [`Summary`].
pub fn summarize(results: &[TestResult]) -> Summary {
    let total = results.len();
    let passed = results.iter().filter(|r| r.passed()).count();
    let success_rate = if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64 * 100.0
    };

    Summary {
        total,
        passed,
        success_rate,
        overall_success: total > 0 && passed == total,
    }
}

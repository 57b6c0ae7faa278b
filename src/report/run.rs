//! One complete run of the suite.

use chrono::{DateTime, Local};

use super::result::TestResult;
use super::summary::{summarize, Summary};
use crate::config::Endpoints;

/// Everything a run produced.  The summary is always recomputed from
/// `results`, never stored.
#[derive(Debug, Clone)]
pub struct TestSuiteRun {
    timestamp: DateTime<Local>,
    endpoints: Endpoints,
    results: Vec<TestResult>,
}

impl TestSuiteRun {
    /// Stamp a run with the current local time.
    pub fn new(endpoints: Endpoints, results: Vec<TestResult>) -> Self {
        Self::at(Local::now(), endpoints, results)
    }

    pub fn at(timestamp: DateTime<Local>, endpoints: Endpoints, results: Vec<TestResult>) -> Self {
        Self {
            timestamp,
            endpoints,
            results,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn region(&self) -> &str {
        &self.endpoints.region
    }

    /// Results in execution order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn get(&self, name: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.name() == name)
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::result::{ConnectivityDetail, Failure, TestDetail};

    #[test]
    fn lookup_and_summary_follow_results() {
        let detail = TestDetail::Connectivity(ConnectivityDetail {
            url: "https://westus2.stt.speech.microsoft.com".into(),
            status: Some(405),
        });
        let run = TestSuiteRun::new(
            Endpoints::for_region("westus2", None),
            vec![
                TestResult::pass("stt_connectivity", "d", detail),
                TestResult::fail("tts_connectivity", "d", None, Failure::EmptySweep),
            ],
        );

        assert_eq!(run.region(), "westus2");
        assert!(run.get("stt_connectivity").is_some_and(TestResult::passed));
        assert!(run.get("missing").is_none());

        let summary = run.summary();
        assert_eq!((summary.total, summary.passed), (2, 1));
        assert_eq!(summary.success_rate_label(), "50.0%");
    }
}

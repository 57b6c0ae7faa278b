//! Endpoint reachability.
//!
//! The probe sends an unauthenticated `GET` to the service root, so a 404
//! or 405 still proves the host exists and answers.

use std::time::Duration;

use crate::http::{HttpClient, HttpRequest};
use crate::report::{ConnectivityDetail, Failure, TestDetail, TestResult};

/// Status codes that count as "reachable".
pub const REACHABLE_STATUSES: [u16; 3] = [200, 404, 405];

/// `endpoint` with its operation-specific path `suffix` removed.
pub fn base_url<'a>(endpoint: &'a str, suffix: &str) -> &'a str {
    endpoint.strip_suffix(suffix).unwrap_or(endpoint)
}

/// `GET` the base of `endpoint` and classify the answer.
pub async fn check_connectivity(
    client: &dyn HttpClient,
    name: &str,
    description: &str,
    endpoint: &str,
    suffix: &str,
    timeout: Duration,
) -> TestResult {
    let url = base_url(endpoint, suffix);
    log::info!("{name}: GET {url}");

    match client.send(HttpRequest::get(url, timeout)).await {
        Ok(response) => {
            let detail = TestDetail::Connectivity(ConnectivityDetail {
                url: url.to_string(),
                status: Some(response.status),
            });
            if REACHABLE_STATUSES.contains(&response.status) {
                log::info!("{name}: endpoint is reachable ({})", response.status);
                TestResult::pass(name, description, detail)
            } else {
                log::warn!("{name}: unexpected status code {}", response.status);
                TestResult::fail(
                    name,
                    description,
                    Some(detail),
                    Failure::UnexpectedStatus {
                        status: response.status,
                        body: response.text(),
                    },
                )
            }
        }
        Err(e) => {
            log::error!("{name}: connectivity test failed: {e}");
            let detail = TestDetail::Connectivity(ConnectivityDetail {
                url: url.to_string(),
                status: None,
            });
            TestResult::fail(name, description, Some(detail), e.into())
        }
    }
}

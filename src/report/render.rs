//! Console rendering of a [`TestSuiteRun`].
//!
//! ```rust
//! use speech_endpoint_tester::config::Endpoints;
//! use speech_endpoint_tester::report::{Report, TestSuiteRun};
//!
//! let run = TestSuiteRun::new(Endpoints::for_region("eastus", None), Vec::new());
//! let text = Report(&run).to_string();
//! assert!(text.contains("Region: eastus"));
//! ```

use std::fmt;

use super::result::{TestDetail, TestResult};
use super::run::TestSuiteRun;
use super::summary::Summary;

/// Sub-results printed per sweep before the "… and N more" tail.
pub const PREVIEW_LIMIT: usize = 3;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "----------------------------------------";

/// Display adapter for a run.
pub struct Report<'a>(pub &'a TestSuiteRun);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let run = self.0;
        let endpoints = run.endpoints();

        writeln!(f, "{RULE}")?;
        writeln!(f, "AZURE SPEECH SERVICE TEST RESULTS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "Timestamp: {}", run.timestamp().format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "Token Endpoint: {}", endpoints.token_url)?;
        writeln!(f, "STT Endpoint: {}", endpoints.stt_url)?;
        writeln!(f, "TTS Endpoint: {}", endpoints.tts_url)?;
        writeln!(f, "Region: {}", run.region())?;
        writeln!(f)?;
        writeln!(f, "Test Results:")?;
        writeln!(f, "{THIN_RULE}")?;

        for result in run.results() {
            write_result(f, result)?;
            writeln!(f)?;
        }

        write_summary(f, &run.summary())?;
        write!(f, "{RULE}")
    }
}

/// Line printed after the report.
pub fn closing_message(summary: &Summary) -> &'static str {
    if summary.overall_success {
        "🎉 All tests passed! Your Azure Speech endpoint is working correctly."
    } else {
        "⚠️  Some tests failed. Please check your configuration and network connectivity."
    }
}

fn status_label(passed: bool) -> &'static str {
    if passed {
        "✅ PASS"
    } else {
        "❌ FAIL"
    }
}

/// `token_acquisition` → `Token Acquisition`, `stt_functional` → `STT Functional`.
fn title(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| match word {
            "stt" | "tts" => word.to_ascii_uppercase(),
            _ => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_result(f: &mut fmt::Formatter<'_>, result: &TestResult) -> fmt::Result {
    writeln!(f, "{}: {}", title(result.name()), status_label(result.passed()))?;
    writeln!(f, "  Description: {}", result.description())?;

    if let Some(failure) = result.failure() {
        writeln!(f, "  Error: {failure}")?;
    }

    match result.detail() {
        Some(TestDetail::Connectivity(d)) => {
            writeln!(f, "  URL: {}", d.url)?;
            if let Some(status) = d.status {
                writeln!(f, "  Status: {status}")?;
            }
        }
        Some(TestDetail::Token(d)) => {
            if let Some(status) = d.status {
                writeln!(f, "  Status: {status}")?;
            }
            if let Some(length) = d.token_length {
                writeln!(f, "  Token Length: {length}")?;
            }
        }
        Some(TestDetail::TokenFormat(d)) => {
            writeln!(f, "  Token Length: {}", d.length)?;
            writeln!(f, "  Token Preview: {}", d.preview)?;
            writeln!(f, "  Token Format: {}", d.kind.label())?;
        }
        Some(TestDetail::Sweep(sweep)) => {
            writeln!(
                f,
                "  Sub-tests: {}/{} passed",
                sweep.passed_count(),
                sweep.total()
            )?;
            let preview = sweep.preview(PREVIEW_LIMIT);
            for sub in preview.shown {
                writeln!(f, "    {} {}", status_label(sub.passed()), sub_line(sub))?;
            }
            if preview.remaining > 0 {
                writeln!(f, "    … and {} more", preview.remaining)?;
            }
        }
        Some(TestDetail::Stt(_)) | Some(TestDetail::Tts(_)) => {
            writeln!(f, "  {}", sub_line(result))?;
        }
        None => {}
    }

    Ok(())
}

/// One-line digest of a single STT/TTS sub-result.
fn sub_line(result: &TestResult) -> String {
    let mut line = result.name().to_string();

    match result.detail() {
        Some(TestDetail::Stt(d)) => {
            line.push_str(&format!(" ({} bytes sent", d.audio_bytes));
            if let Some(status) = &d.recognition_status {
                line.push_str(&format!(", recognition {status}"));
            }
            if let Some(text) = d.transcript.as_deref().filter(|t| !t.is_empty()) {
                line.push_str(&format!(", \"{text}\""));
            }
            line.push(')');
        }
        Some(TestDetail::Tts(d)) => {
            line.push_str(&format!(" ({}, {} bytes", d.voice, d.audio_bytes));
            if let Some(content_type) = &d.content_type {
                line.push_str(&format!(", {content_type}"));
            }
            line.push(')');
        }
        _ => {}
    }

    if let Some(failure) = result.failure() {
        line.push_str(&format!(": {failure}"));
    }
    line
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &Summary) -> fmt::Result {
    writeln!(f, "Summary:")?;
    writeln!(f, "{THIN_RULE}")?;
    writeln!(f, "Tests Passed: {}/{}", summary.passed, summary.total)?;
    writeln!(f, "Success Rate: {}", summary.success_rate_label())?;
    let overall = if summary.overall_success {
        "✅ SUCCESS"
    } else {
        "❌ FAILED"
    };
    writeln!(f, "Overall Result: {overall}")
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::audio::SyntheticAudioSpec;
    use crate::config::Endpoints;
    use crate::report::result::{ConnectivityDetail, SttDetail, TokenFormatDetail, TokenKind};
    use crate::suite::Prerequisite;

    fn stt_sub(i: usize, passed: bool) -> TestResult {
        let detail = TestDetail::Stt(SttDetail {
            audio: SyntheticAudioSpec::new(1.0, 16_000, 440.0),
            audio_bytes: 32_044,
            status: Some(200),
            recognition_status: Some("NoMatch".into()),
            transcript: None,
        });
        if passed {
            TestResult::pass(format!("stt_{i}"), "sub", detail)
        } else {
            TestResult::fail(
                format!("stt_{i}"),
                "sub",
                Some(detail),
                crate::report::Failure::InvalidResponse("bad json".into()),
            )
        }
    }

    fn sample_run() -> TestSuiteRun {
        let results = vec![
            TestResult::pass(
                "connectivity",
                "Basic endpoint reachability test",
                TestDetail::Connectivity(ConnectivityDetail {
                    url: "https://eastus.api.cognitive.microsoft.com/sts/v1.0".into(),
                    status: Some(404),
                }),
            ),
            TestResult::pass(
                "token_validation",
                "Token format validation test",
                TestDetail::TokenFormat(TokenFormatDetail {
                    length: 62,
                    preview: "abcdefghijklmnopqrst...".into(),
                    kind: TokenKind::Opaque,
                }),
            ),
            TestResult::sweep(
                "stt_functional",
                "Speech-to-text sweep",
                (0..5).map(|i| stt_sub(i, i != 4)).collect(),
            ),
            TestResult::prerequisite_missing(
                "tts_functional",
                "Text-to-speech sweep",
                Prerequisite::Token,
            ),
        ];
        let timestamp = Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        TestSuiteRun::at(timestamp, Endpoints::for_region("eastus", None), results)
    }

    #[test]
    fn title_case_names() {
        assert_eq!(title("token_acquisition"), "Token Acquisition");
        assert_eq!(title("stt_functional"), "STT Functional");
        assert_eq!(title("connectivity"), "Connectivity");
    }

    #[test]
    fn report_contains_header_and_summary() {
        let text = Report(&sample_run()).to_string();

        assert!(text.contains("AZURE SPEECH SERVICE TEST RESULTS"));
        assert!(text.contains("Timestamp: 2024-05-06 07:08:09"));
        assert!(text.contains("Region: eastus"));
        assert!(text.contains("Connectivity: ✅ PASS"));
        assert!(text.contains("Token Format: opaque"));
        assert!(text.contains("Tests Passed: 2/4"));
        assert!(text.contains("Success Rate: 50.0%"));
        assert!(text.contains("Overall Result: ❌ FAILED"));
    }

    #[test]
    fn sweep_preview_is_bounded() {
        let text = Report(&sample_run()).to_string();

        assert!(text.contains("Sub-tests: 4/5 passed"));
        assert!(text.contains("stt_0 (32044 bytes sent, recognition NoMatch)"));
        assert!(text.contains("stt_2"));
        assert!(!text.contains("stt_3"));
        assert!(text.contains("… and 2 more"));
    }

    #[test]
    fn missing_prerequisite_is_explained() {
        let text = Report(&sample_run()).to_string();
        assert!(text.contains("TTS Functional: ❌ FAIL"));
        assert!(text.contains("Error: no token available"));
    }

    #[test]
    fn closing_message_matches_outcome() {
        let ok = Summary {
            total: 1,
            passed: 1,
            success_rate: 100.0,
            overall_success: true,
        };
        assert!(closing_message(&ok).contains("All tests passed"));

        let bad = Summary {
            overall_success: false,
            passed: 0,
            success_rate: 0.0,
            ..ok
        };
        assert!(closing_message(&bad).contains("Some tests failed"));
    }
}

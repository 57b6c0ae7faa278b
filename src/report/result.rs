//! Test result types.
//!
//! [`TestResult`] is the common shape every probe produces: a name, a
//! description, an optional probe-specific [`TestDetail`] and an optional
//! [`Failure`].  A result passes exactly when it carries no failure, so
//! `passed` can never disagree with the recorded diagnostics.

use thiserror::Error;

use crate::audio::{AudioError, SyntheticAudioSpec};
use crate::http::HttpError;
use crate::suite::Prerequisite;

/// Longest response-body excerpt kept in failure messages.
const BODY_EXCERPT_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// Failure
// ---------------------------------------------------------------------------

/// Why a probe did not pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    /// Connection failure, timeout or other transport error.
    #[error("{0}")]
    Transport(HttpError),

    /// The service answered with a status the probe does not accept.
    #[error("unexpected status {status}: {}", excerpt(.body))]
    UnexpectedStatus { status: u16, body: String },

    /// A dependency of the probe was unavailable.
    #[error("{0}")]
    PrerequisiteMissing(Prerequisite),

    /// The token is shorter than any real access token.
    #[error("token too short: {length} characters (minimum {minimum})")]
    TokenTooShort { length: usize, minimum: usize },

    /// A 200 response whose body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The synthesizer rejected the sweep case.
    #[error("audio synthesis failed: {0}")]
    Audio(AudioError),

    /// At least one sweep sub-test failed.
    #[error("{failed} of {total} sub-tests failed")]
    SubTestsFailed { failed: usize, total: usize },

    /// A sweep configured with no cases.
    #[error("no sub-tests configured")]
    EmptySweep,
}

impl From<HttpError> for Failure {
    fn from(e: HttpError) -> Self {
        Failure::Transport(e)
    }
}

impl From<AudioError> for Failure {
    fn from(e: AudioError) -> Self {
        Failure::Audio(e)
    }
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "<empty body>".to_string();
    }
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Probe-specific details
// ---------------------------------------------------------------------------

/// Reachability check.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectivityDetail {
    /// Base URL actually requested.
    pub url: String,
    /// `None` when no response arrived.
    pub status: Option<u16>,
}

/// Token acquisition.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDetail {
    pub status: Option<u16>,
    pub token_length: Option<usize>,
}

/// Informational token shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Three dot-separated segments, i.e. a JWT.
    Structured,
    Opaque,
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Structured => "structured (JWT)",
            TokenKind::Opaque => "opaque",
        }
    }
}

/// Token format validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenFormatDetail {
    pub length: usize,
    /// First 20 characters followed by `...` for longer tokens.
    pub preview: String,
    pub kind: TokenKind,
}

/// One STT request.
#[derive(Debug, Clone, PartialEq)]
pub struct SttDetail {
    pub audio: SyntheticAudioSpec,
    /// Size of the uploaded WAV; 0 when synthesis failed.
    pub audio_bytes: usize,
    pub status: Option<u16>,
    /// `RecognitionStatus` from the service, e.g. `Success` or `NoMatch`.
    pub recognition_status: Option<String>,
    pub transcript: Option<String>,
}

/// One TTS request.
#[derive(Debug, Clone, PartialEq)]
pub struct TtsDetail {
    /// Catalog sample name.
    pub sample: String,
    pub voice: String,
    pub output_format: String,
    pub status: Option<u16>,
    /// Size of the returned audio.
    pub audio_bytes: usize,
    pub content_type: Option<String>,
}

/// A bounded view over sweep sub-results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preview<'a> {
    pub shown: &'a [TestResult],
    /// Sub-results left out of `shown`.
    pub remaining: usize,
}

/// Parametrized group of probes aggregated all-or-nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDetail {
    pub sub_results: Vec<TestResult>,
}

impl SweepDetail {
    pub fn total(&self) -> usize {
        self.sub_results.len()
    }

    pub fn passed_count(&self) -> usize {
        self.sub_results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.passed_count()
    }

    /// The first `limit` sub-results and how many were cut.
    pub fn preview(&self, limit: usize) -> Preview<'_> {
        let shown = &self.sub_results[..limit.min(self.sub_results.len())];
        Preview {
            shown,
            remaining: self.sub_results.len() - shown.len(),
        }
    }
}

/// Probe-specific diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum TestDetail {
    Connectivity(ConnectivityDetail),
    Token(TokenDetail),
    TokenFormat(TokenFormatDetail),
    Stt(SttDetail),
    Tts(TtsDetail),
    Sweep(SweepDetail),
}

// ---------------------------------------------------------------------------
// TestResult
// ---------------------------------------------------------------------------

/// Outcome of one probe or sweep.  Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    name: String,
    description: String,
    detail: Option<TestDetail>,
    failure: Option<Failure>,
}

impl TestResult {
    pub fn pass(
        name: impl Into<String>,
        description: impl Into<String>,
        detail: TestDetail,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            detail: Some(detail),
            failure: None,
        }
    }

    pub fn fail(
        name: impl Into<String>,
        description: impl Into<String>,
        detail: Option<TestDetail>,
        failure: Failure,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            detail,
            failure: Some(failure),
        }
    }

    /// Pass when `failure` is `None`.
    pub fn from_outcome(
        name: impl Into<String>,
        description: impl Into<String>,
        detail: TestDetail,
        failure: Option<Failure>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            detail: Some(detail),
            failure,
        }
    }

    /// Failed result for a probe whose prerequisite was unavailable.
    pub fn prerequisite_missing(
        name: impl Into<String>,
        description: impl Into<String>,
        prerequisite: Prerequisite,
    ) -> Self {
        Self::fail(
            name,
            description,
            None,
            Failure::PrerequisiteMissing(prerequisite),
        )
    }

    /// Fold sub-results into one composite result that passes only when
    /// every sub-result passed.  An empty sweep fails.
    pub fn sweep(
        name: impl Into<String>,
        description: impl Into<String>,
        sub_results: Vec<TestResult>,
    ) -> Self {
        let detail = SweepDetail { sub_results };
        let failure = if detail.total() == 0 {
            Some(Failure::EmptySweep)
        } else if detail.failed_count() > 0 {
            Some(Failure::SubTestsFailed {
                failed: detail.failed_count(),
                total: detail.total(),
            })
        } else {
            None
        };
        Self::from_outcome(name, description, TestDetail::Sweep(detail), failure)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    pub fn detail(&self) -> Option<&TestDetail> {
        self.detail.as_ref()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Sweep payload, when this is a composite result.
    pub fn sweep_detail(&self) -> Option<&SweepDetail> {
        match &self.detail {
            Some(TestDetail::Sweep(sweep)) => Some(sweep),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

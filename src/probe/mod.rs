//! Probe functions: one request/response cycle each.
//!
//! | Probe | Request | Pass condition |
//! |-------|---------|----------------|
//! | [`check_connectivity`] | `GET` base URL | status 200, 404 or 405 |
//! | [`acquire_token`] | `POST` token URL with subscription key | status 200 |
//! | [`validate_token_format`] | (pure) | ≥ 50 characters |
//! | [`SttProbe`] | `POST` synthesized WAV | status 200 + JSON body |
//! | [`TtsProbe`] | `POST` SSML | status 200 |
//!
//! Transport errors and unexpected statuses become failed
//! [`TestResult`](crate::report::TestResult)s; nothing here returns `Err`.

pub mod connectivity;
pub mod stt;
pub mod token;
pub mod tts;

pub use connectivity::{base_url, check_connectivity, REACHABLE_STATUSES};
pub use stt::SttProbe;
pub use token::{
    acquire_token, token_validation, validate_token_format, AuthToken, TokenOutcome,
    MIN_TOKEN_LEN,
};
pub use tts::{build_ssml, resolve_voice, TtsProbe};

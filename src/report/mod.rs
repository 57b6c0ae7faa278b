//! Test results, aggregation and console rendering.
//!
//! * [`TestResult`] / [`TestDetail`] / [`Failure`]: what each probe produces.
//! * [`summarize`] / [`Summary`]: pass counts and success rate.
//! * [`TestSuiteRun`]: one run: timestamp, endpoints, ordered results.
//! * [`Report`]: human-readable rendering of a run.

pub mod render;
pub mod result;
pub mod run;
pub mod summary;

pub use render::{closing_message, Report, PREVIEW_LIMIT};
pub use result::{
    ConnectivityDetail, Failure, Preview, SttDetail, SweepDetail, TestDetail, TestResult,
    TokenDetail, TokenFormatDetail, TokenKind, TtsDetail,
};
pub use run::TestSuiteRun;
pub use summary::{summarize, Summary};

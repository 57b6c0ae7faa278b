//! Smoke-test harness for the Azure Speech service.
//!
//! One run acquires an access token, checks that the token, speech-to-text
//! and text-to-speech hosts answer, then exercises recognition with
//! synthesized tones and synthesis with catalog text samples.  Every check
//! becomes a [`report::TestResult`]; the run is rendered with
//! [`report::Report`].
//!
//! ```rust,no_run
//! use speech_endpoint_tester::config::AppConfig;
//! use speech_endpoint_tester::http::ReqwestClient;
//! use speech_endpoint_tester::report::Report;
//! use speech_endpoint_tester::suite::TestSuite;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut config = AppConfig::load()?;
//! config.apply_env(|name| std::env::var(name).ok());
//!
//! let client = ReqwestClient::new();
//! let run = TestSuite::new(&client, &config)?.run().await;
//! println!("{}", Report(&run));
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod catalog;
pub mod config;
pub mod http;
pub mod probe;
pub mod report;
pub mod suite;

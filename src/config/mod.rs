//! Configuration module for the speech endpoint tester.
//!
//! Provides `AppConfig` (top-level settings), one sub-config per concern,
//! `AppPaths` for the platform config directory, TOML persistence via
//! `AppConfig::load` / `AppConfig::save`, and `Endpoints`, the validated set
//! of service URLs the probes talk to.

pub mod endpoints;
pub mod paths;
pub mod settings;

pub use endpoints::{ConfigError, Endpoints};
pub use paths::AppPaths;
pub use settings::{
    AppConfig, SpeechConfig, SttConfig, TimeoutConfig, TtsConfig, ENV_ENDPOINT, ENV_KEY,
    ENV_REGION,
};

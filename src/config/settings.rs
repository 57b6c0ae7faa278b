//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files.  Credentials may live in
//! the file, but the usual source is the environment, layered on top with
//! [`AppConfig::apply_env`].

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;
use crate::audio::SyntheticAudioSpec;

/// Subscription key environment variable.
pub const ENV_KEY: &str = "AZURE_SPEECH_KEY";
/// Region environment variable (e.g. `eastus`).
pub const ENV_REGION: &str = "AZURE_SPEECH_REGION";
/// Custom token endpoint environment variable (overrides the region URL).
pub const ENV_ENDPOINT: &str = "AZURE_SPEECH_ENDPOINT";

// ---------------------------------------------------------------------------
// SpeechConfig
// ---------------------------------------------------------------------------

/// Credentials and service location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// `Ocp-Apim-Subscription-Key` sent to the token endpoint.
    pub subscription_key: Option<String>,
    /// Azure region, e.g. `"eastus"` or `"westus2"`.
    pub region: Option<String>,
    /// Full token-issuance URL replacing the region-derived one.
    pub custom_endpoint: Option<String>,
}

// ---------------------------------------------------------------------------
// TimeoutConfig
// ---------------------------------------------------------------------------

/// Per-class request timeouts, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Reachability checks.
    pub connectivity_secs: u64,
    /// Token acquisition.
    pub token_secs: u64,
    /// STT/TTS functional calls (audio upload and download).
    pub functional_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connectivity_secs: 5,
            token_secs: 10,
            functional_secs: 30,
        }
    }
}

impl TimeoutConfig {
    pub fn connectivity(&self) -> Duration {
        Duration::from_secs(self.connectivity_secs)
    }

    pub fn token(&self) -> Duration {
        Duration::from_secs(self.token_secs)
    }

    pub fn functional(&self) -> Duration {
        Duration::from_secs(self.functional_secs)
    }
}

// ---------------------------------------------------------------------------
// SttConfig
// ---------------------------------------------------------------------------

/// Settings for the speech-to-text sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SttConfig {
    /// BCP-47 recognition language sent as the `language` query parameter.
    pub language: String,
    /// Result format: `"simple"` or `"detailed"`.
    pub format: String,
    /// Profanity handling: `"masked"`, `"removed"` or `"raw"`.
    pub profanity: String,
    /// One sub-probe per synthesized tone.
    pub cases: Vec<SyntheticAudioSpec>,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            language: "en-US".into(),
            format: "detailed".into(),
            profanity: "masked".into(),
            cases: vec![
                SyntheticAudioSpec::new(1.0, 16_000, 440.0),
                SyntheticAudioSpec::new(2.0, 16_000, 880.0),
                SyntheticAudioSpec::new(0.5, 16_000, 220.0),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the text-to-speech sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    /// Catalog name of the requested output format
    /// (see [`crate::catalog::OUTPUT_FORMATS`]).
    pub output_format: String,
    /// Catalog sample names to synthesize, in order.
    pub samples: Vec<String>,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            output_format: "riff_16khz_16bit_mono_pcm".into(),
            samples: vec![
                "simple_greeting".into(),
                "multilingual_test".into(),
                "ssml_test".into(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level configuration, serialised as `settings.toml`.
///
/// Built once at startup and handed to the suite by reference.
///
/// ```rust,no_run
/// use speech_endpoint_tester::config::AppConfig;
///
/// let mut config = AppConfig::load().unwrap();
/// config.apply_env(|name| std::env::var(name).ok());
/// let endpoints = config.endpoints().unwrap();
/// println!("{}", endpoints.token_url);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Credentials and region.
    pub speech: SpeechConfig,
    /// Request timeouts.
    pub timeouts: TimeoutConfig,
    /// STT sweep settings.
    pub stt: SttConfig,
    /// TTS sweep settings.
    pub tts: TtsConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist so
    /// that an environment-only setup needs no file at all.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overlay credentials from the environment.
    ///
    /// `lookup` is called with [`ENV_KEY`], [`ENV_REGION`] and
    /// [`ENV_ENDPOINT`]; non-empty values replace whatever the settings file
    /// provided.  `main` passes `std::env::var`, tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = read(ENV_KEY) {
            self.speech.subscription_key = Some(key);
        }
        if let Some(region) = read(ENV_REGION) {
            self.speech.region = Some(region);
        }
        if let Some(endpoint) = read(ENV_ENDPOINT) {
            self.speech.custom_endpoint = Some(endpoint);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

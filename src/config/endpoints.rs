//! Service URL construction and configuration validation.
//!
//! A custom endpoint replaces the token-issuance URL only; the STT and TTS
//! URLs are always derived from the region.

use reqwest::Url;
use serde::Serialize;
use thiserror::Error;

use super::AppConfig;

/// Host suffix of the regional token service.
const COGNITIVE_HOST_SUFFIX: &str = ".api.cognitive.microsoft.com";

/// Path suffix stripped from the token URL for the reachability probe.
pub const TOKEN_PATH_SUFFIX: &str = "/issuetoken";
/// Path suffix stripped from the STT URL for the reachability probe.
pub const STT_PATH_SUFFIX: &str = "/speech/recognition/conversation/cognitiveservices/v1";
/// Path suffix stripped from the TTS URL for the reachability probe.
pub const TTS_PATH_SUFFIX: &str = "/cognitiveservices/v1";

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Fatal configuration problems, detected before any probe runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("AZURE_SPEECH_KEY environment variable is required")]
    MissingKey,

    #[error("Either AZURE_SPEECH_REGION or AZURE_SPEECH_ENDPOINT must be set")]
    MissingLocation,

    /// Only a custom endpoint was given and no region could be read from it.
    #[error("cannot derive a region from custom endpoint {0:?}; set AZURE_SPEECH_REGION")]
    RegionNotDerivable(String),
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// The three service URLs used by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    /// Region the STT/TTS URLs were derived from.
    pub region: String,
    /// Token issuance (`POST`).
    pub token_url: String,
    /// Short-audio speech recognition (`POST`).
    pub stt_url: String,
    /// Speech synthesis (`POST`).
    pub tts_url: String,
}

impl Endpoints {
    /// Region-derived URLs, optionally with a custom token URL.
    pub fn for_region(region: &str, custom_token_url: Option<&str>) -> Self {
        let token_url = match custom_token_url {
            Some(url) => url.to_string(),
            None => format!("https://{region}{COGNITIVE_HOST_SUFFIX}/sts/v1.0{TOKEN_PATH_SUFFIX}"),
        };

        Self {
            region: region.to_string(),
            token_url,
            stt_url: format!("https://{region}.stt.speech.microsoft.com{STT_PATH_SUFFIX}"),
            tts_url: format!("https://{region}.tts.speech.microsoft.com{TTS_PATH_SUFFIX}"),
        }
    }
}

/// Read `eastus` out of `https://eastus.api.cognitive.microsoft.com/...`.
fn region_from_endpoint(endpoint: &str) -> Option<String> {
    let url = Url::parse(endpoint).ok()?;
    let host = url.host_str()?;
    let region = host.strip_suffix(COGNITIVE_HOST_SUFFIX)?;
    (!region.is_empty() && !region.contains('.')).then(|| region.to_string())
}

impl AppConfig {
    /// The subscription key, or [`ConfigError::MissingKey`].
    pub fn subscription_key(&self) -> Result<&str, ConfigError> {
        self.speech
            .subscription_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingKey)
    }

    /// Validate the speech section and build the service URLs.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        self.subscription_key()?;

        let custom = self.speech.custom_endpoint.as_deref().filter(|e| !e.is_empty());
        let region = match (self.speech.region.as_deref().filter(|r| !r.is_empty()), custom) {
            (Some(region), _) => region.to_string(),
            (None, Some(endpoint)) => region_from_endpoint(endpoint)
                .ok_or_else(|| ConfigError::RegionNotDerivable(endpoint.to_string()))?,
            (None, None) => return Err(ConfigError::MissingLocation),
        };

        Ok(Endpoints::for_region(&region, custom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>, region: Option<&str>, endpoint: Option<&str>) -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.speech.subscription_key = key.map(str::to_string);
        cfg.speech.region = region.map(str::to_string);
        cfg.speech.custom_endpoint = endpoint.map(str::to_string);
        cfg
    }

    #[test]
    fn region_urls() {
        let endpoints = config(Some("k"), Some("eastus"), None).endpoints().unwrap();

        assert_eq!(
            endpoints.token_url,
            "https://eastus.api.cognitive.microsoft.com/sts/v1.0/issuetoken"
        );
        assert_eq!(
            endpoints.stt_url,
            "https://eastus.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1"
        );
        assert_eq!(
            endpoints.tts_url,
            "https://eastus.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }

    #[test]
    fn custom_endpoint_replaces_token_url_only() {
        let endpoints = config(
            Some("k"),
            Some("westus2"),
            Some("https://proxy.example.com/sts/v1.0/issuetoken"),
        )
        .endpoints()
        .unwrap();

        assert_eq!(
            endpoints.token_url,
            "https://proxy.example.com/sts/v1.0/issuetoken"
        );
        assert!(endpoints.stt_url.starts_with("https://westus2.stt."));
        assert!(endpoints.tts_url.starts_with("https://westus2.tts."));
    }

    #[test]
    fn region_inferred_from_regional_custom_endpoint() {
        let endpoints = config(
            Some("k"),
            None,
            Some("https://northeurope.api.cognitive.microsoft.com/sts/v1.0/issuetoken"),
        )
        .endpoints()
        .unwrap();

        assert_eq!(endpoints.region, "northeurope");
        assert!(endpoints.stt_url.starts_with("https://northeurope.stt."));
    }

    #[test]
    fn opaque_custom_endpoint_without_region_is_rejected() {
        let err = config(Some("k"), None, Some("https://proxy.example.com/token"))
            .endpoints()
            .unwrap_err();
        assert!(matches!(err, ConfigError::RegionNotDerivable(_)));
    }

    #[test]
    fn missing_key_is_rejected_first() {
        assert_eq!(
            config(None, Some("eastus"), None).endpoints(),
            Err(ConfigError::MissingKey)
        );
        assert_eq!(
            config(Some(""), Some("eastus"), None).endpoints(),
            Err(ConfigError::MissingKey)
        );
    }

    #[test]
    fn missing_region_and_endpoint_is_rejected() {
        assert_eq!(
            config(Some("k"), None, None).endpoints(),
            Err(ConfigError::MissingLocation)
        );
    }
}

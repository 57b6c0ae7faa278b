//! Speech-to-text probe: synthesize a tone, upload it, read the recognition.

use std::time::Duration;

use serde::Deserialize;

use super::token::AuthToken;
use crate::audio::SyntheticAudioSpec;
use crate::config::SttConfig;
use crate::http::{HttpClient, HttpRequest};
use crate::report::{Failure, SttDetail, TestDetail, TestResult};

/// Detailed-format recognition response (only the fields the report uses).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RecognitionResponse {
    recognition_status: Option<String>,
    display_text: Option<String>,
    #[serde(rename = "NBest", default)]
    n_best: Vec<NBestEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct NBestEntry {
    display: Option<String>,
}

impl RecognitionResponse {
    /// `DisplayText`, or the best `NBest` candidate in detailed format.
    fn transcript(&self) -> Option<String> {
        self.display_text
            .clone()
            .or_else(|| self.n_best.first().and_then(|n| n.display.clone()))
    }
}

/// One STT round trip per call to [`SttProbe::run`].
pub struct SttProbe<'a> {
    client: &'a dyn HttpClient,
    url: &'a str,
    config: &'a SttConfig,
    timeout: Duration,
}

impl<'a> SttProbe<'a> {
    pub fn new(
        client: &'a dyn HttpClient,
        url: &'a str,
        config: &'a SttConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            url,
            config,
            timeout,
        }
    }

    /// Synthesize `spec` and send it for recognition.
    ///
    /// The sub-result is named `stt_<duration>s_<frequency>hz`.
    pub async fn run(&self, token: &AuthToken, spec: &SyntheticAudioSpec) -> TestResult {
        let name = format!("stt_{}", spec.label());
        let description = format!(
            "Recognize {:?}s {} Hz tone at {} Hz",
            spec.duration_secs, spec.frequency_hz, spec.sample_rate
        );

        let mut detail = SttDetail {
            audio: *spec,
            audio_bytes: 0,
            status: None,
            recognition_status: None,
            transcript: None,
        };

        let audio = match spec.render() {
            Ok(audio) => audio,
            Err(e) => {
                log::warn!("{name}: {e}");
                return TestResult::fail(
                    name,
                    description,
                    Some(TestDetail::Stt(detail)),
                    e.into(),
                );
            }
        };
        detail.audio_bytes = audio.len();

        log::info!("{name}: uploading {} bytes", audio.len());

        let request = HttpRequest::post(self.url, self.timeout)
            .bearer(token.as_str())
            .header(
                "Content-Type",
                format!("audio/wav; codecs=audio/pcm; samplerate={}", spec.sample_rate),
            )
            .header("Accept", "application/json")
            .query("language", self.config.language.as_str())
            .query("format", self.config.format.as_str())
            .query("profanity", self.config.profanity.as_str())
            .body(audio);

        let response = match self.client.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("{name}: request failed: {e}");
                return TestResult::fail(
                    name,
                    description,
                    Some(TestDetail::Stt(detail)),
                    e.into(),
                );
            }
        };
        detail.status = Some(response.status);

        if response.status != 200 {
            log::warn!("{name}: unexpected status {}", response.status);
            let failure = Failure::UnexpectedStatus {
                status: response.status,
                body: response.text(),
            };
            return TestResult::fail(
                name,
                description,
                Some(TestDetail::Stt(detail)),
                failure,
            );
        }

        match serde_json::from_slice::<RecognitionResponse>(&response.body) {
            Ok(recognition) => {
                detail.transcript = recognition.transcript();
                detail.recognition_status = recognition.recognition_status;
                log::info!(
                    "{name}: recognition status {}",
                    detail.recognition_status.as_deref().unwrap_or("<none>")
                );
                TestResult::pass(name, description, TestDetail::Stt(detail))
            }
            Err(e) => {
                log::warn!("{name}: response is not a recognition result: {e}");
                TestResult::fail(
                    name,
                    description,
                    Some(TestDetail::Stt(detail)),
                    Failure::InvalidResponse(e.to_string()),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::WAV_HEADER_LEN;
    use crate::http::{HttpError, Method, ScriptedClient};

    const STT_URL: &str =
        "https://eastus.stt.speech.microsoft.com/speech/recognition/conversation/cognitiveservices/v1";

    fn token() -> AuthToken {
        AuthToken::new("t".repeat(64))
    }

    async fn run(client: &ScriptedClient, spec: SyntheticAudioSpec) -> TestResult {
        let config = SttConfig::default();
        SttProbe::new(client, STT_URL, &config, Duration::from_secs(30))
            .run(&token(), &spec)
            .await
    }

    fn stt_detail(result: &TestResult) -> &SttDetail {
        match result.detail() {
            Some(TestDetail::Stt(d)) => d,
            other => panic!("unexpected detail {other:?}"),
        }
    }

    #[tokio::test]
    async fn detailed_success_captures_transcript() {
        let body = r#"{
            "RecognitionStatus": "Success",
            "Offset": 0,
            "Duration": 10000000,
            "NBest": [{ "Confidence": 0.9, "Lexical": "hello", "Display": "Hello." }]
        }"#;
        let client = ScriptedClient::new().status(Method::Post, STT_URL, 200, body);

        let result = run(&client, SyntheticAudioSpec::new(0.5, 16_000, 220.0)).await;

        assert!(result.passed());
        assert_eq!(result.name(), "stt_0.5s_220hz");
        let detail = stt_detail(&result);
        assert_eq!(detail.recognition_status.as_deref(), Some("Success"));
        assert_eq!(detail.transcript.as_deref(), Some("Hello."));
        assert_eq!(detail.audio_bytes, WAV_HEADER_LEN + 16_000);
    }

    #[tokio::test]
    async fn no_match_still_passes() {
        let client = ScriptedClient::new().status(
            Method::Post,
            STT_URL,
            200,
            r#"{"RecognitionStatus":"NoMatch","Offset":0,"Duration":0}"#,
        );

        let result = run(&client, SyntheticAudioSpec::new(1.0, 16_000, 440.0)).await;

        assert!(result.passed());
        assert_eq!(stt_detail(&result).transcript, None);
    }

    #[tokio::test]
    async fn request_shape() {
        let client = ScriptedClient::new().status(
            Method::Post,
            STT_URL,
            200,
            r#"{"RecognitionStatus":"Success","DisplayText":"Hi."}"#,
        );

        run(&client, SyntheticAudioSpec::new(1.0, 16_000, 440.0)).await;

        let requests = client.requests();
        let sent = &requests[0];
        let query = |k: &str| {
            sent.query
                .iter()
                .find(|(name, _)| name == k)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(query("language").as_deref(), Some("en-US"));
        assert_eq!(query("format").as_deref(), Some("detailed"));
        assert_eq!(query("profanity").as_deref(), Some("masked"));
        assert_eq!(
            sent.header_value("Authorization"),
            Some(format!("Bearer {}", "t".repeat(64)).as_str())
        );
        assert_eq!(
            sent.header_value("Content-Type"),
            Some("audio/wav; codecs=audio/pcm; samplerate=16000")
        );
        let body = sent.body.as_ref().expect("audio body");
        assert_eq!(&body[0..4], b"RIFF");
        assert_eq!(body.len(), WAV_HEADER_LEN + 32_000);
        assert_eq!(sent.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn non_200_fails_with_status_and_body() {
        let client =
            ScriptedClient::new().status(Method::Post, STT_URL, 401, "Unauthorized");

        let result = run(&client, SyntheticAudioSpec::new(1.0, 16_000, 440.0)).await;

        assert!(!result.passed());
        assert_eq!(
            result.failure(),
            Some(&Failure::UnexpectedStatus {
                status: 401,
                body: "Unauthorized".into()
            })
        );
        assert_eq!(stt_detail(&result).status, Some(401));
    }

    #[tokio::test]
    async fn garbage_body_fails() {
        let client = ScriptedClient::new().status(Method::Post, STT_URL, 200, "<html>");

        let result = run(&client, SyntheticAudioSpec::new(1.0, 16_000, 440.0)).await;

        assert!(matches!(result.failure(), Some(Failure::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn timeout_fails() {
        let client =
            ScriptedClient::new().fail(Method::Post, STT_URL, HttpError::Timeout);
        let result = run(&client, SyntheticAudioSpec::new(1.0, 16_000, 440.0)).await;
        assert_eq!(result.failure(), Some(&Failure::Transport(HttpError::Timeout)));
    }

    #[tokio::test]
    async fn invalid_spec_fails_without_request() {
        let client = ScriptedClient::new();
        let result = run(&client, SyntheticAudioSpec::new(0.0, 16_000, 440.0)).await;

        assert!(matches!(result.failure(), Some(Failure::Audio(_))));
        assert!(client.requests().is_empty());
    }
}

//! Text-to-speech probe.

use std::time::Duration;

use crate::catalog::{voice_for, TextFormat, VoiceSample, SUPPORTED_VOICES};
use crate::http::{HttpClient, HttpRequest, USER_AGENT};
use crate::report::{Failure, TestDetail, TestResult, TtsDetail};

use super::token::AuthToken;

/// Voice the sample is spoken with.
///
/// A sample pinned to a voice the catalog does not list falls back to the
/// first listed voice for its language.
pub fn resolve_voice(sample: &VoiceSample) -> &'static str {
    SUPPORTED_VOICES
        .iter()
        .find(|v| v.voice == sample.voice)
        .map(|v| v.voice)
        .unwrap_or_else(|| voice_for(sample.language, None))
}

/// Request body for `sample`.
///
/// SSML samples are sent unchanged; plain text is escaped and wrapped in a
/// single-voice `<speak>` envelope.
pub fn build_ssml(sample: &VoiceSample) -> String {
    match sample.format {
        TextFormat::Ssml => sample.text.to_string(),
        TextFormat::Plain => format!(
            "<speak version='1.0' xml:lang='{lang}'><voice xml:lang='{lang}' name='{voice}'>{text}</voice></speak>",
            lang = sample.language,
            voice = resolve_voice(sample),
            text = escape_xml(sample.text),
        ),
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct TtsProbe<'a> {
    client: &'a dyn HttpClient,
    url: &'a str,
    output_format: &'a str,
    timeout: Duration,
}

impl<'a> TtsProbe<'a> {
    /// `output_format` is the header value, already resolved through
    /// [`crate::catalog::output_format`].
    pub fn new(
        client: &'a dyn HttpClient,
        url: &'a str,
        output_format: &'a str,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            url,
            output_format,
            timeout,
        }
    }

    /// Synthesize one sample.  The sub-result is named `tts_<sample>`.
    pub async fn run(&self, token: &AuthToken, sample: &VoiceSample) -> TestResult {
        let name = format!("tts_{}", sample.name);
        let description = format!("Synthesize '{}' ({})", sample.name, sample.language);

        let mut detail = TtsDetail {
            sample: sample.name.to_string(),
            voice: resolve_voice(sample).to_string(),
            output_format: self.output_format.to_string(),
            status: None,
            audio_bytes: 0,
            content_type: None,
        };

        let ssml = build_ssml(sample);
        log::info!(
            "{name}: requesting {} with voice {}",
            self.output_format,
            detail.voice
        );

        let request = HttpRequest::post(self.url, self.timeout)
            .bearer(token.as_str())
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", self.output_format)
            .header("User-Agent", USER_AGENT)
            .body(ssml.into_bytes());

        let response = match self.client.send(request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("{name}: request failed: {e}");
                return TestResult::fail(
                    name,
                    description,
                    Some(TestDetail::Tts(detail)),
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
                Some(TestDetail::Tts(detail)),
                failure,
            );
        }

        detail.audio_bytes = response.body.len();
        detail.content_type = response.header("Content-Type").map(str::to_string);
        log::info!("{name}: received {} bytes of audio", detail.audio_bytes);

        TestResult::pass(name, description, TestDetail::Tts(detail))
    }
}

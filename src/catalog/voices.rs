//! Neural voices by language and gender.

use std::str::FromStr;

/// Voice gender as listed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

/// Parses the gender column of the voice list, for callers that take a
/// gender as text before calling [`voice_for`].
impl FromStr for Gender {
    type Err = String;

    /// Case-insensitive: `"female"`, `"Female"`, `"MALE"` …
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else {
            Err(format!("unknown gender: {s}"))
        }
    }
}

/// Static metadata for one voice.
#[derive(Debug)]
pub struct VoiceInfo {
    pub language: &'static str,
    pub voice: &'static str,
    pub gender: Gender,
}

/// Returned by [`voice_for`] when nothing matches.
pub const DEFAULT_VOICE: &str = "en-US-JennyNeural";

pub const SUPPORTED_VOICES: &[VoiceInfo] = &[
    VoiceInfo {
        language: "en-US",
        voice: "en-US-JennyNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "en-US",
        voice: "en-US-GuyNeural",
        gender: Gender::Male,
    },
    VoiceInfo {
        language: "en-US",
        voice: "en-US-AriaNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "en-GB",
        voice: "en-GB-SoniaNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "en-GB",
        voice: "en-GB-RyanNeural",
        gender: Gender::Male,
    },
    VoiceInfo {
        language: "fr-FR",
        voice: "fr-FR-DeniseNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "fr-FR",
        voice: "fr-FR-HenriNeural",
        gender: Gender::Male,
    },
    VoiceInfo {
        language: "de-DE",
        voice: "de-DE-KatjaNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "de-DE",
        voice: "de-DE-ConradNeural",
        gender: Gender::Male,
    },
    VoiceInfo {
        language: "es-ES",
        voice: "es-ES-ElviraNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "es-ES",
        voice: "es-ES-AlvaroNeural",
        gender: Gender::Male,
    },
    VoiceInfo {
        language: "ja-JP",
        voice: "ja-JP-NanamiNeural",
        gender: Gender::Female,
    },
    VoiceInfo {
        language: "ja-JP",
        voice: "ja-JP-KeitaNeural",
        gender: Gender::Male,
    },
];

/// First voice for `language` (and `gender`, when given).
///
/// Falls back to [`DEFAULT_VOICE`] when no voice matches.
pub fn voice_for(language: &str, gender: Option<Gender>) -> &'static str {
    SUPPORTED_VOICES
        .iter()
        .filter(|v| v.language == language)
        .find(|v| gender.map_or(true, |g| v.gender == g))
        .map(|v| v.voice)
        .unwrap_or(DEFAULT_VOICE)
}

//! TTS text samples.

/// How a sample's `text` must be sent to the synthesis endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Plain text; wrapped in an SSML envelope before sending.
    Plain,
    /// A complete `<speak>` document; sent as-is.
    Ssml,
}

/// One TTS test input.
#[derive(Debug, PartialEq, Eq)]
pub struct VoiceSample {
    /// Unique key, e.g. `"simple_greeting"`.
    pub name: &'static str,
    pub text: &'static str,
    /// BCP-47 language tag.
    pub language: &'static str,
    /// Neural voice identifier.
    pub voice: &'static str,
    pub format: TextFormat,
}

/// Returned by [`lookup`] for unknown names.
pub const DEFAULT_SAMPLE: VoiceSample = VoiceSample {
    name: "simple_greeting",
    text: "Hello, this is a test of the Azure Speech Service.",
    language: "en-US",
    voice: "en-US-JennyNeural",
    format: TextFormat::Plain,
};

const SSML_PROSODY: &str = r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" xml:lang="en-US">
    <voice name="en-US-JennyNeural">
        <prosody rate="slow" pitch="low">
            This text is spoken slowly and with a low pitch.
        </prosody>
        <break time="1s"/>
        <prosody rate="fast" pitch="high">
            This text is spoken quickly and with a high pitch!
        </prosody>
    </voice>
</speak>"#;

/// All TTS samples.  [`DEFAULT_SAMPLE`] comes first.
pub const TTS_SAMPLES: &[VoiceSample] = &[
    DEFAULT_SAMPLE,
    VoiceSample {
        name: "multilingual_test",
        text: "Bonjour, ceci est un test du service Azure Speech.",
        language: "fr-FR",
        voice: "fr-FR-DeniseNeural",
        format: TextFormat::Plain,
    },
    VoiceSample {
        name: "technical_text",
        text: "The Azure Speech Service provides speech-to-text and text-to-speech \
               capabilities using advanced machine learning models.",
        language: "en-US",
        voice: "en-US-AriaNeural",
        format: TextFormat::Plain,
    },
    VoiceSample {
        name: "numbers_and_punctuation",
        text: "The temperature is 72.5 degrees Fahrenheit, or about 22.5 degrees Celsius. \
               That's quite comfortable!",
        language: "en-US",
        voice: "en-US-GuyNeural",
        format: TextFormat::Plain,
    },
    VoiceSample {
        name: "ssml_test",
        text: SSML_PROSODY,
        language: "en-US",
        voice: "en-US-JennyNeural",
        format: TextFormat::Ssml,
    },
];

/// Exact-match lookup.
pub fn find(name: &str) -> Option<&'static VoiceSample> {
    TTS_SAMPLES.iter().find(|s| s.name == name)
}

/// Lookup with fallback: unknown names yield [`DEFAULT_SAMPLE`].
///
/// For library callers that always need a sample to speak.  The TTS sweep
/// uses [`find`] so it can log and skip unknown names instead.
pub fn lookup(name: &str) -> &'static VoiceSample {
    find(name).unwrap_or(&TTS_SAMPLES[0])
}

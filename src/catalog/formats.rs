//! Synthesis output formats (`X-Microsoft-OutputFormat` values).

#[derive(Debug)]
pub struct OutputFormat {
    /// Settings-file key, e.g. `"riff_16khz_16bit_mono_pcm"`.
    pub name: &'static str,
    /// Header value sent to the service.
    pub format: &'static str,
    pub description: &'static str,
}

/// Returned by [`output_format`] for unknown names.
pub const DEFAULT_OUTPUT_FORMAT: &str = "riff-16khz-16bit-mono-pcm";

pub const OUTPUT_FORMATS: &[OutputFormat] = &[
    OutputFormat {
        name: "riff_16khz_16bit_mono_pcm",
        format: "riff-16khz-16bit-mono-pcm",
        description: "16kHz 16-bit mono PCM",
    },
    OutputFormat {
        name: "riff_24khz_16bit_mono_pcm",
        format: "riff-24khz-16bit-mono-pcm",
        description: "24kHz 16-bit mono PCM",
    },
    OutputFormat {
        name: "audio_16khz_32kbitrate_mono_mp3",
        format: "audio-16khz-32kbitrate-mono-mp3",
        description: "16kHz 32kbps mono MP3",
    },
    OutputFormat {
        name: "ogg_16khz_16bit_mono_opus",
        format: "ogg-16khz-16bit-mono-opus",
        description: "16kHz 16-bit mono Opus",
    },
];

/// Header value for a named format, or [`DEFAULT_OUTPUT_FORMAT`].
pub fn output_format(name: &str) -> &'static str {
    OUTPUT_FORMATS
        .iter()
        .find(|f| f.name == name)
        .map_or(DEFAULT_OUTPUT_FORMAT, |f| f.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_format() {
        assert_eq!(
            output_format("ogg_16khz_16bit_mono_opus"),
            "ogg-16khz-16bit-mono-opus"
        );
    }

    #[test]
    fn unknown_format_falls_back() {
        assert_eq!(output_format("flac"), DEFAULT_OUTPUT_FORMAT);
    }
}

//! Static test-case catalog: TTS text samples, voices and output formats.
//!
//! Everything here is `const` data built into the binary; there is no
//! mutation API.  Named lookups never fail: a miss returns the designated
//! default entry ([`DEFAULT_SAMPLE`], [`DEFAULT_VOICE`],
//! [`DEFAULT_OUTPUT_FORMAT`]) because callers pass names straight from the
//! settings file.

pub mod formats;
pub mod samples;
pub mod voices;

pub use formats::{output_format, OutputFormat, DEFAULT_OUTPUT_FORMAT, OUTPUT_FORMATS};
pub use samples::{find, lookup, TextFormat, VoiceSample, DEFAULT_SAMPLE, TTS_SAMPLES};
pub use voices::{voice_for, Gender, VoiceInfo, DEFAULT_VOICE, SUPPORTED_VOICES};

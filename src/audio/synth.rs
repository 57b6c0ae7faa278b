//! Sine-tone WAV synthesis for the STT probe.
//!
//! The recognizer only needs *a* valid audio payload, not speech, so the
//! probe sends a pure tone: mono, 16-bit signed little-endian PCM inside a
//! canonical 44-byte RIFF/WAVE header.
//!
//! # Example
//!
//! ```rust
//! use speech_endpoint_tester::audio::{SyntheticAudioSpec, WAV_HEADER_LEN};
//!
//! let wav = SyntheticAudioSpec::new(0.5, 16_000, 220.0).render().unwrap();
//! assert_eq!(wav.len(), WAV_HEADER_LEN + 2 * 8_000);
//! assert_eq!(&wav[0..4], b"RIFF");
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Size of the RIFF + `fmt ` + `data` headers written before the samples.
pub const WAV_HEADER_LEN: usize = 44;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: usize = (BITS_PER_SAMPLE / 8) as usize;
const PCM_FORMAT_TAG: u16 = 1;
const AMPLITUDE: f64 = 32_767.0;

// ---------------------------------------------------------------------------
// AudioError
// ---------------------------------------------------------------------------

/// Reason a tone could not be synthesized.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    /// Duration or frequency is zero, negative, NaN or infinite.
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Sample rate of zero.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// The PCM payload would overflow the 32-bit RIFF size fields.
    #[error("waveform of {samples} samples does not fit in a RIFF container")]
    TooLong { samples: usize },
}

// ---------------------------------------------------------------------------
// SyntheticAudioSpec
// ---------------------------------------------------------------------------

/// Parameters of one synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticAudioSpec {
    /// Length of the tone in seconds.
    pub duration_secs: f64,
    /// Samples per second.
    pub sample_rate: u32,
    /// Tone pitch in Hz.
    pub frequency_hz: f64,
}

impl SyntheticAudioSpec {
    pub fn new(duration_secs: f64, sample_rate: u32, frequency_hz: f64) -> Self {
        Self {
            duration_secs,
            sample_rate,
            frequency_hz,
        }
    }

    /// `floor(duration × sample_rate)`.
    pub fn sample_count(&self) -> usize {
        (self.duration_secs * f64::from(self.sample_rate)).floor() as usize
    }

    /// Short label used to name sweep sub-results, e.g. `1.0s_440hz`.
    ///
    /// The duration is printed without rounding, so distinct cases never
    /// share a label.
    pub fn label(&self) -> String {
        format!("{:?}s_{}hz", self.duration_secs, self.frequency_hz)
    }

    /// Render the WAV bytes.  See [`generate`].
    pub fn render(&self) -> Result<Vec<u8>, AudioError> {
        generate(self.duration_secs, self.sample_rate, self.frequency_hz)
    }
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

/// Synthesize a mono 16-bit PCM sine tone wrapped in a WAV container.
///
/// Sample `i` is `round(32767 × sin(2π × frequency × i / sample_rate))`.
/// Output length is `44 + 2 × floor(duration × sample_rate)`; frequency only
/// affects sample values.  Identical inputs always give identical bytes.
pub fn generate(
    duration_secs: f64,
    sample_rate: u32,
    frequency_hz: f64,
) -> Result<Vec<u8>, AudioError> {
    check_positive("duration", duration_secs)?;
    check_positive("frequency", frequency_hz)?;
    if sample_rate == 0 {
        return Err(AudioError::ZeroSampleRate);
    }

    let spec = SyntheticAudioSpec::new(duration_secs, sample_rate, frequency_hz);
    let samples = spec.sample_count();
    let data_len = samples
        .checked_mul(BYTES_PER_SAMPLE)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| n.checked_add(36).is_some())
        .ok_or(AudioError::TooLong { samples })?;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + data_len as usize);
    write_header(&mut out, sample_rate, data_len);

    let step = 2.0 * PI * frequency_hz / f64::from(sample_rate);
    for i in 0..samples {
        let value = (AMPLITUDE * (step * i as f64).sin())
            .round()
            .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16;
        out.extend_from_slice(&value.to_le_bytes());
    }

    Ok(out)
}

fn check_positive(name: &'static str, value: f64) -> Result<(), AudioError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AudioError::InvalidParameter { name, value })
    }
}

fn write_header(out: &mut Vec<u8>, sample_rate: u32, data_len: u32) {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate.saturating_mul(u32::from(block_align));

    // RIFF header
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&PCM_FORMAT_TAG.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

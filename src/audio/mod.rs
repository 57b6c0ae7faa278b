//! Synthetic audio used as STT probe input.
//!
//! # Quick Start
//!
//! ```rust
//! use speech_endpoint_tester::audio::generate;
//!
//! let wav = generate(1.0, 16_000, 440.0).unwrap();
//! println!("{} bytes of RIFF/WAV", wav.len());
//! ```

pub mod synth;

pub use synth::{generate, AudioError, SyntheticAudioSpec, WAV_HEADER_LEN};

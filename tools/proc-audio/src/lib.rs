//! Procedural audio synthesis for Cargo Escape
//!
//! Pure numeric generators that synthesize mono sample buffers (tones, sweeps,
//! noise, decaying explosions, chord pads), compose them into sound effects and
//! music cues, mix them with peak-safe normalization and encode the result as
//! 16-bit PCM WAV.
//!
//! All synthesis runs at a fixed 44.1 kHz. A buffer of `d` seconds always holds
//! `floor(d * 44100)` samples.
//!
//! # Example
//! ```no_run
//! use proc_audio::*;
//!
//! // Noise-bearing effects draw from an explicit random source
//! let mut synth = Synth::seeded(42);
//! let boom = synth.explosion(0.5, 0.7)?;
//!
//! // Tone-only primitives are pure
//! let ping = beep(880.0, 0.1, 0.4)?;
//!
//! // Mix, then encode
//! let mixed = mix_tracks(&[&boom, &ping]);
//! write_wav(std::path::Path::new("out/boom.wav"), &mixed)?;
//! # Ok::<(), AudioError>(())
//! ```

mod envelope;
mod error;
mod mixer;
mod oscillators;
mod synth;
mod wav;

pub mod music;

/// Output sample rate in Hz
pub const SAMPLE_RATE: u32 = 44100;

// Errors
pub use error::{AudioError, Result};

// Envelope
pub use envelope::Envelope;

// Oscillator primitives
pub use oscillators::{beep, hiss, noise, silence, sine, sweep, ui_click};

// Effect synthesizer
pub use synth::{AlertLevel, DoorMotion, Rarity, Synth};

// Mixing and sequencing
pub use mixer::{concat, loop_to_duration, mix, mix_tracks, normalize_peak, peak};

// PCM encoding
pub use wav::{decode_wav, encode_wav, from_pcm_i16, read_wav, to_pcm_i16, wav_spec, write_wav};

/// Number of samples for a duration, truncated toward zero
pub fn sample_count(duration: f64) -> usize {
    (SAMPLE_RATE as f64 * duration) as usize
}

/// Sample count for a generator input, rejecting non-positive durations
pub(crate) fn checked_len(what: &'static str, duration: f64) -> Result<usize> {
    if duration.is_finite() && duration > 0.0 {
        Ok(sample_count(duration))
    } else {
        Err(AudioError::InvalidDuration { what, duration })
    }
}

/// Decoded audio (f64 samples, -1.0 to 1.0 range)
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Audio samples in -1.0 to 1.0 range
    pub samples: Vec<f64>,
}

impl AudioBuffer {
    /// Create a buffer from samples
    pub fn from_samples(sample_rate: u32, samples: Vec<f64>) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f64 {
        peak(&self.samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_truncates() {
        assert_eq!(sample_count(1.0), 44100);
        assert_eq!(sample_count(0.3), 13230);
        // 0.00001s is 0.441 samples
        assert_eq!(sample_count(0.00001), 0);
    }

    #[test]
    fn test_checked_len_rejects_non_positive() {
        assert!(checked_len("test", 0.0).is_err());
        assert!(checked_len("test", -1.0).is_err());
        assert!(checked_len("test", f64::NAN).is_err());
        assert!(checked_len("test", f64::INFINITY).is_err());
        assert_eq!(checked_len("test", 0.5).unwrap(), 22050);
    }

    #[test]
    fn test_audio_buffer_from_samples() {
        let samples = vec![0.0, 0.5, 1.0, -1.0];
        let buf = AudioBuffer::from_samples(SAMPLE_RATE, samples.clone());
        assert_eq!(buf.len(), 4);
        assert_eq!(buf.samples, samples);
        assert!(!buf.is_empty());
        assert_eq!(buf.peak(), 1.0);
    }

    #[test]
    fn test_audio_buffer_duration() {
        let buf = AudioBuffer::from_samples(SAMPLE_RATE, vec![0.0; SAMPLE_RATE as usize]);
        assert!((buf.duration() - 1.0).abs() < 1e-12);
    }
}

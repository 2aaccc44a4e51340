//! Sustained-tone instruments: harmonic notes, pads and bass
//!
//! Each instrument is a small stack of sine partials with fixed weights.

use std::f64::consts::PI;

use crate::envelope::Envelope;
use crate::{checked_len, Result, SAMPLE_RATE};

const RATE: f64 = SAMPLE_RATE as f64;

/// Angular rate of the pad vibrato LFO in rad/s
const PAD_LFO_RATE: f64 = 0.5;

/// Pad vibrato depth (fraction of the fundamental)
const PAD_LFO_DEPTH: f64 = 0.02;

/// Bass attack time in seconds
const BASS_ATTACK: f64 = 0.02;

/// A single musical note
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    /// Fundamental frequency in Hz
    pub freq: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Peak amplitude
    pub volume: f64,
    /// Attack/release shaping
    pub envelope: Envelope,
}

impl Note {
    /// Note with the default 50ms attack and 100ms release
    pub fn new(freq: f64, duration: f64, volume: f64) -> Self {
        Self {
            freq,
            duration,
            volume,
            envelope: Envelope::note(),
        }
    }

    /// Replace the envelope
    pub fn with_envelope(mut self, attack: f64, release: f64) -> Self {
        self.envelope = Envelope::new(attack, release);
        self
    }

    /// Render the three-partial harmonic stack
    ///
    /// Fundamental at 0.6, 2nd harmonic at 0.25, 3rd harmonic at 0.15.
    pub fn render(&self) -> Result<Vec<f64>> {
        let num_samples = checked_len("note", self.duration)?;
        let freq = self.freq;

        let mut samples: Vec<f64> = (0..num_samples)
            .map(|i| {
                let i = i as f64;
                self.volume
                    * (0.6 * (2.0 * PI * freq * i / RATE).sin()
                        + 0.25 * (2.0 * PI * freq * 2.0 * i / RATE).sin()
                        + 0.15 * (2.0 * PI * freq * 3.0 * i / RATE).sin())
            })
            .collect();
        self.envelope.apply(&mut samples);
        Ok(samples)
    }
}

/// Render a harmonic note
pub fn note(freq: f64, duration: f64, volume: f64, attack: f64, release: f64) -> Result<Vec<f64>> {
    Note::new(freq, duration, volume)
        .with_envelope(attack, release)
        .render()
}

/// Render a sustained pad
///
/// Four partials (1x, 0.5x, 1.5x, 2x at 0.4/0.3/0.2/0.1). Only the fundamental
/// carries the slow vibrato.
pub fn pad(freq: f64, duration: f64, volume: f64) -> Result<Vec<f64>> {
    let num_samples = checked_len("pad", duration)?;

    Ok((0..num_samples)
        .map(|i| {
            let t = i as f64 / RATE;
            let lfo = 1.0 + PAD_LFO_DEPTH * (t * PAD_LFO_RATE).sin();
            volume
                * (0.4 * (2.0 * PI * freq * lfo * t).sin()
                    + 0.3 * (2.0 * PI * freq * 0.5 * t).sin()
                    + 0.2 * (2.0 * PI * freq * 1.5 * t).sin()
                    + 0.1 * (2.0 * PI * freq * 2.0 * t).sin())
        })
        .collect())
}

/// Render a bass note
///
/// Two partials (1x at 0.7, 2x at 0.3) with a 20ms attack and a slow decay to
/// 80% by the end of the note.
pub fn bass(freq: f64, duration: f64, volume: f64) -> Result<Vec<f64>> {
    let num_samples = checked_len("bass", duration)?;

    Ok((0..num_samples)
        .map(|i| {
            let t = i as f64 / num_samples as f64;
            let i = i as f64;
            let envelope = (i / (RATE * BASS_ATTACK)).min(1.0) * (1.0 - t * 0.2);
            volume
                * envelope
                * (0.7 * (2.0 * PI * freq * i / RATE).sin()
                    + 0.3 * (2.0 * PI * freq * 2.0 * i / RATE).sin())
        })
        .collect())
}

/// Render notes back to back (10ms attack, 50ms release each)
pub fn arp(notes: &[f64], note_duration: f64, volume: f64) -> Result<Vec<f64>> {
    let env = Envelope::arp();
    let mut samples = Vec::new();
    for &freq in notes {
        samples.extend(note(freq, note_duration, volume, env.attack, env.release)?);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::notes::*;
    use crate::{peak, sample_count};

    #[test]
    fn test_note_partials() {
        // No envelope: sample is the weighted harmonic sum
        let samples = note(A4, 0.1, 0.3, 0.0, 0.0).unwrap();
        assert_eq!(samples.len(), 4410);
        let i = 37.0;
        let w = 2.0 * PI * A4 * i / RATE;
        let expected = 0.3 * (0.6 * w.sin() + 0.25 * (2.0 * w).sin() + 0.15 * (3.0 * w).sin());
        assert!((samples[37] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_note_envelope() {
        let samples = Note::new(C4, 0.5, 0.3).render().unwrap();
        assert_eq!(samples[0], 0.0);
        assert!(peak(&samples) <= 0.3);
    }

    #[test]
    fn test_note_rejects_zero_duration() {
        assert!(note(C4, 0.0, 0.3, 0.01, 0.05).is_err());
    }

    #[test]
    fn test_pad_bounds() {
        let samples = pad(A3, 1.0, 0.15).unwrap();
        assert_eq!(samples.len(), 44100);
        assert_eq!(samples[0], 0.0);
        assert!(peak(&samples) <= 0.15 + 1e-12);
    }

    #[test]
    fn test_pad_vibrato_only_on_fundamental() {
        let samples = pad(A3, 0.5, 1.0).unwrap();
        let i = 12_345;
        let t = i as f64 / RATE;
        let lfo = 1.0 + 0.02 * (t * 0.5).sin();
        let expected = 0.4 * (2.0 * PI * A3 * lfo * t).sin()
            + 0.3 * (2.0 * PI * A3 * 0.5 * t).sin()
            + 0.2 * (2.0 * PI * A3 * 1.5 * t).sin()
            + 0.1 * (2.0 * PI * A3 * 2.0 * t).sin();
        assert!((samples[i] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_bass_envelope() {
        let samples = bass(A3 / 2.0, 0.25, 0.3).unwrap();
        assert_eq!(samples.len(), 11025);
        assert_eq!(samples[0], 0.0);
        assert!(peak(&samples) <= 0.3);
        // Attack ramp: 882 samples
        let i = 441;
        let t = i as f64 / 11025.0;
        let env = (i as f64 / 882.0) * (1.0 - 0.2 * t);
        let w = 2.0 * PI * (A3 / 2.0) * i as f64 / RATE;
        let expected = 0.3 * env * (0.7 * w.sin() + 0.3 * (2.0 * w).sin());
        assert!((samples[i] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_arp_concatenates() {
        let notes = [E5, A4, C5, E4];
        let samples = arp(&notes, 0.5, 0.1).unwrap();
        assert_eq!(samples.len(), 4 * sample_count(0.5));

        let second = note(A4, 0.5, 0.1, 0.01, 0.05).unwrap();
        assert_eq!(&samples[22050..44100], second.as_slice());
    }

    #[test]
    fn test_arp_empty() {
        assert!(arp(&[], 0.5, 0.1).unwrap().is_empty());
    }
}

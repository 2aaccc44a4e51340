//! Linear fade envelope
//!
//! Rises linearly over the attack window, holds at 1.0 and falls linearly over
//! the last `release` seconds of the sound. A zero-length window contributes a
//! unit gain at that boundary.

use crate::sample_count;

/// Attack/release envelope, both times in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Fade-in time in seconds
    pub attack: f64,
    /// Fade-out time in seconds
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self::tone()
    }
}

impl Envelope {
    /// Create an envelope; negative times are treated as zero
    pub fn new(attack: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            release: release.max(0.0),
        }
    }

    /// Plain sine tone (10ms in, 50ms out)
    pub fn tone() -> Self {
        Self::new(0.01, 0.05)
    }

    /// Short beep (5ms in, 20ms out)
    pub fn beep() -> Self {
        Self::new(0.005, 0.02)
    }

    /// UI click (1ms in, 20ms out)
    pub fn click() -> Self {
        Self::new(0.001, 0.02)
    }

    /// Musical note default (50ms in, 100ms out)
    pub fn note() -> Self {
        Self::new(0.05, 0.1)
    }

    /// Arpeggio step (10ms in, 50ms out)
    pub fn arp() -> Self {
        Self::new(0.01, 0.05)
    }

    /// Fade-out only
    pub fn fade_out(release: f64) -> Self {
        Self::new(0.0, release)
    }

    /// Gain at sample `index` of a sound `total` samples long
    pub fn gain(&self, index: usize, total: usize) -> f64 {
        gain_with(
            index,
            total,
            sample_count(self.attack),
            sample_count(self.release),
        )
    }

    /// Apply the envelope to samples in place
    pub fn apply(&self, samples: &mut [f64]) {
        let total = samples.len();
        let attack = sample_count(self.attack);
        let release = sample_count(self.release);

        for (i, sample) in samples.iter_mut().enumerate() {
            *sample *= gain_with(i, total, attack, release);
        }
    }

}

fn gain_with(index: usize, total: usize, attack: usize, release: usize) -> f64 {
    if index < attack {
        index as f64 / attack as f64
    } else if release > 0 && index + release > total {
        total.saturating_sub(index) as f64 / release as f64
    } else {
        1.0
    }
}

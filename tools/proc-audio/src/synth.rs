//! Effect synthesizer
//!
//! Composes oscillator primitives into the named game sound effects:
//! explosions, lasers, doors, loot pickups, alerts and ambient drones.
//!
//! Effects that blend in noise draw from the synthesizer's random source, so a
//! `Synth` built with [`Synth::seeded`] renders reproducibly. Tone-only effects
//! are pure functions of their parameters.

use std::f64::consts::PI;

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::oscillators;
use crate::{checked_len, AudioError, Result, SAMPLE_RATE};

const RATE: f64 = SAMPLE_RATE as f64;

/// Door movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorMotion {
    /// Pitch rises 100 -> 300 Hz
    Opening,
    /// Pitch falls 300 -> 100 Hz
    Closing,
}

/// Alert urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// 440 Hz pulse
    Warning,
    /// 880 Hz pulse
    Critical,
}

impl AlertLevel {
    /// Carrier frequency in Hz
    pub fn frequency(self) -> f64 {
        match self {
            AlertLevel::Warning => 440.0,
            AlertLevel::Critical => 880.0,
        }
    }
}

/// Loot rarity tier (0 = common .. 4 = legendary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
}

impl Rarity {
    /// All tiers in ascending order
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Look up a tier by its numeric index
    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(AudioError::InvalidRarity(index))
    }

    /// Numeric tier index
    pub fn index(self) -> u8 {
        self as u8
    }

    fn tone(self) -> &'static LootTone {
        &LOOT_TONES[self as usize]
    }
}

/// Pickup chime parameters for one rarity tier
struct LootTone {
    /// Starting frequency in Hz (rises 200 Hz over the sound)
    base_freq: f64,
    /// Weight of the 1.5x partial
    fifth: f64,
    /// Weight of the 2x partial
    octave: f64,
}

const LOOT_TONES: [LootTone; 5] = [
    LootTone { base_freq: 400.0, fifth: 0.0, octave: 0.0 },
    LootTone { base_freq: 500.0, fifth: 0.0, octave: 0.0 },
    LootTone { base_freq: 600.0, fifth: 0.2, octave: 0.0 },
    LootTone { base_freq: 700.0, fifth: 0.2, octave: 0.0 },
    LootTone { base_freq: 800.0, fifth: 0.2, octave: 0.15 },
];

/// Sound effect synthesizer with an injectable random source
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let mut synth = Synth::seeded(1);
/// let door = synth.door(DoorMotion::Opening, 0.3).unwrap();
/// let chime = synth.loot_pickup(Rarity::Epic, 0.45).unwrap();
/// assert_eq!(door.len(), 13230);
/// assert_eq!(chime.len(), 19845);
/// ```
pub struct Synth<R = ThreadRng> {
    rng: R,
}

impl Default for Synth<ThreadRng> {
    /// Synthesizer backed by the thread-local process generator
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl Synth<Pcg64> {
    /// Deterministic synthesizer for reproducible renders
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }
}

impl<R: Rng> Synth<R> {
    /// Create a synthesizer drawing noise from `rng`
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    // ========================================================================
    // NOISE
    // ========================================================================

    /// White noise with fade-out, drawn from this synth's source
    pub fn noise(&mut self, duration: f64, volume: f64, fade_out: f64) -> Result<Vec<f64>> {
        oscillators::noise(&mut self.rng, duration, volume, fade_out)
    }

    /// Unshaped noise bed, drawn from this synth's source
    pub fn hiss(&mut self, duration: f64, amplitude: f64) -> Result<Vec<f64>> {
        oscillators::hiss(&mut self.rng, duration, amplitude)
    }

    // ========================================================================
    // EFFECTS
    // ========================================================================

    /// Explosion: modulated low rumble blended 50/50 with white noise
    ///
    /// Envelope is `e^(-5t) * volume`; the rumble frequency wobbles as
    /// `50 + 30 sin(10t)`.
    pub fn explosion(&mut self, duration: f64, volume: f64) -> Result<Vec<f64>> {
        let num_samples = checked_len("explosion", duration)?;
        let rng = &mut self.rng;

        Ok((0..num_samples)
            .map(|i| {
                let t = i as f64 / num_samples as f64;
                let envelope = explosion_envelope(t) * volume;
                let low_freq = 50.0 + 30.0 * (t * 10.0).sin();
                let rumble = (2.0 * PI * low_freq * i as f64 / RATE).sin();
                let crackle: f64 = rng.random_range(-1.0..1.0);
                envelope * (0.5 * rumble + 0.5 * crackle)
            })
            .collect())
    }

    /// Laser: 2000 -> 500 Hz sweep under a `(1 - t)` fade
    pub fn laser(&self, duration: f64, volume: f64) -> Result<Vec<f64>> {
        let num_samples = checked_len("laser", duration)?;

        Ok((0..num_samples)
            .map(|i| {
                let t = i as f64 / num_samples as f64;
                let freq = 2000.0 - 1500.0 * t;
                let envelope = (1.0 - t) * volume;
                envelope * (2.0 * PI * freq * i as f64 / RATE).sin()
            })
            .collect())
    }

    /// Door: pitch ramp with a triangular envelope and 10% mechanical noise
    ///
    /// Output is not clamped here; the encoder clamps.
    pub fn door(&mut self, motion: DoorMotion, duration: f64) -> Result<Vec<f64>> {
        let num_samples = checked_len("door", duration)?;
        let rng = &mut self.rng;

        Ok((0..num_samples)
            .map(|i| {
                let t = i as f64 / num_samples as f64;
                let freq = match motion {
                    DoorMotion::Opening => 100.0 + 200.0 * t,
                    DoorMotion::Closing => 300.0 - 200.0 * t,
                };
                let envelope = 0.4 * (1.0 - (t - 0.5).abs() * 2.0);
                let rattle = 0.1 * rng.random_range(-1.0f64..1.0);
                envelope * ((2.0 * PI * freq * i as f64 / RATE).sin() + rattle)
            })
            .collect())
    }

    /// Loot pickup: rising chime, brighter for rarer tiers
    pub fn loot_pickup(&self, rarity: Rarity, duration: f64) -> Result<Vec<f64>> {
        let num_samples = checked_len("loot pickup", duration)?;
        let tone = rarity.tone();

        Ok((0..num_samples)
            .map(|i| {
                let t = i as f64 / num_samples as f64;
                let freq = tone.base_freq + 200.0 * t;
                let volume = 0.4 * (1.0 - t * 0.5);

                let mut sample = volume * (2.0 * PI * freq * i as f64 / RATE).sin();
                if tone.fifth > 0.0 {
                    sample += tone.fifth * volume * (2.0 * PI * freq * 1.5 * i as f64 / RATE).sin();
                }
                if tone.octave > 0.0 {
                    sample += tone.octave * volume * (2.0 * PI * freq * 2.0 * i as f64 / RATE).sin();
                }
                sample
            })
            .collect())
    }

    /// Alert: steady tone under a `0.5 + 0.5 sin(20t)` pulse and linear decay
    pub fn alert(&self, level: AlertLevel, duration: f64) -> Result<Vec<f64>> {
        let num_samples = checked_len("alert", duration)?;
        let freq = level.frequency();

        Ok((0..num_samples)
            .map(|i| {
                let t = i as f64 / num_samples as f64;
                let pulse = 0.5 + 0.5 * (t * 20.0).sin();
                let volume = 0.5 * pulse * (1.0 - t * 0.3);
                volume * (2.0 * PI * freq * i as f64 / RATE).sin()
            })
            .collect())
    }

    /// Ambient drone: three slow partials plus a shimmering 100 Hz layer
    ///
    /// Time here is absolute seconds, so the LFOs run at the same speed
    /// regardless of loop length.
    pub fn ambient_loop(&self, duration: f64, base_freq: f64) -> Result<Vec<f64>> {
        let num_samples = checked_len("ambient loop", duration)?;

        Ok((0..num_samples)
            .map(|i| {
                let t = i as f64 / RATE;
                let mut sample = 0.15
                    * ((2.0 * PI * base_freq * t).sin()
                        + 0.5 * (2.0 * PI * (base_freq * 1.5) * t).sin()
                        + 0.3 * (2.0 * PI * (base_freq * 0.5) * t + (t * 0.5).sin()).sin());
                // Shimmer
                sample += 0.05 * (2.0 * PI * 100.0 * t + (t * 2.0).sin() * 10.0).sin();
                sample
            })
            .collect())
    }
}

/// Explosion decay at fractional position `t`
fn explosion_envelope(t: f64) -> f64 {
    (-t * 5.0).exp()
}

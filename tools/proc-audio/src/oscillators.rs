//! Oscillator primitives
//!
//! Sine, sweep and noise generators. Every generator validates its duration
//! and returns exactly `floor(duration * SAMPLE_RATE)` samples.

use std::f64::consts::PI;

use rand::Rng;

use crate::envelope::Envelope;
use crate::{checked_len, sample_count, Result, SAMPLE_RATE};

const RATE: f64 = SAMPLE_RATE as f64;

/// Generate an enveloped sine tone
///
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `duration` - Duration in seconds
/// * `volume` - Peak amplitude
/// * `fade_in` - Linear fade-in time in seconds
/// * `fade_out` - Linear fade-out time in seconds
pub fn sine(
    frequency: f64,
    duration: f64,
    volume: f64,
    fade_in: f64,
    fade_out: f64,
) -> Result<Vec<f64>> {
    let num_samples = checked_len("sine", duration)?;
    let env = Envelope::new(fade_in, fade_out);

    let mut samples: Vec<f64> = (0..num_samples)
        .map(|i| volume * (2.0 * PI * frequency * i as f64 / RATE).sin())
        .collect();
    env.apply(&mut samples);
    Ok(samples)
}

/// Short beep: sine with a 5ms fade-in and 20ms fade-out
pub fn beep(frequency: f64, duration: f64, volume: f64) -> Result<Vec<f64>> {
    let env = Envelope::beep();
    sine(frequency, duration, volume, env.attack, env.release)
}

/// UI click: 800 Hz sine with a 1ms fade-in and 20ms fade-out
pub fn ui_click(duration: f64, volume: f64) -> Result<Vec<f64>> {
    let env = Envelope::click();
    sine(800.0, duration, volume, env.attack, env.release)
}

/// Linear frequency sweep
///
/// Frequency moves linearly from `start_freq` to `end_freq` by fractional
/// position `t = i / N`, under a fixed `1 - 0.5t` fade.
pub fn sweep(start_freq: f64, end_freq: f64, duration: f64, volume: f64) -> Result<Vec<f64>> {
    let num_samples = checked_len("sweep", duration)?;

    Ok((0..num_samples)
        .map(|i| {
            let t = i as f64 / num_samples as f64;
            let freq = start_freq + (end_freq - start_freq) * t;
            let envelope = 1.0 - t * 0.5;
            volume * envelope * (2.0 * PI * freq * i as f64 / RATE).sin()
        })
        .collect())
}

/// White noise with a linear fade-out
///
/// Consumes entropy from `rng`; output is reproducible only when `rng` is
/// seeded.
pub fn noise<R: Rng + ?Sized>(
    rng: &mut R,
    duration: f64,
    volume: f64,
    fade_out: f64,
) -> Result<Vec<f64>> {
    let num_samples = checked_len("noise", duration)?;
    let env = Envelope::fade_out(fade_out);

    let mut samples: Vec<f64> = (0..num_samples)
        .map(|_| volume * rng.random_range(-1.0f64..1.0))
        .collect();
    env.apply(&mut samples);
    Ok(samples)
}

/// Unshaped uniform noise in `[-amplitude, amplitude)`
pub fn hiss<R: Rng + ?Sized>(rng: &mut R, duration: f64, amplitude: f64) -> Result<Vec<f64>> {
    let num_samples = checked_len("hiss", duration)?;
    Ok((0..num_samples)
        .map(|_| amplitude * rng.random_range(-1.0f64..1.0))
        .collect())
}

/// Zero samples for a rest of `duration` seconds
///
/// Unlike the generators, a zero duration is allowed and yields an empty
/// buffer; negative durations are clamped to zero.
pub fn silence(duration: f64) -> Vec<f64> {
    vec![0.0; sample_count(duration.max(0.0))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn test_sine_length() {
        for duration in [0.02, 0.1, 0.3, 1.0, 1.2345] {
            let samples = sine(440.0, duration, 0.5, 0.01, 0.05).unwrap();
            assert_eq!(samples.len(), (duration * 44100.0) as usize);
        }
    }

    #[test]
    fn test_sine_start_and_midpoint() {
        let samples = sine(440.0, 1.0, 0.5, 0.01, 0.05).unwrap();
        assert_eq!(samples[0], 0.0);

        let mid = samples.len() / 2;
        let expected = 0.5 * (2.0 * PI * 440.0 * 0.5).sin();
        assert!((samples[mid] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_sine_in_range() {
        let samples = sine(1000.0, 0.2, 0.8, 0.01, 0.05).unwrap();
        assert!(samples.iter().all(|&s| s.abs() <= 0.8));
    }

    #[test]
    fn test_sine_zero_fades() {
        // No fade windows: the raw oscillator comes through untouched
        let samples = sine(441.0, 0.01, 1.0, 0.0, 0.0).unwrap();
        let i = 25;
        let expected = (2.0 * PI * 441.0 * i as f64 / 44100.0).sin();
        assert!((samples[i] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sine_rejects_non_positive_duration() {
        assert!(sine(440.0, 0.0, 0.5, 0.01, 0.05).is_err());
        assert!(sine(440.0, -0.5, 0.5, 0.01, 0.05).is_err());
    }

    #[test]
    fn test_beep_and_click() {
        let b = beep(880.0, 0.1, 0.4).unwrap();
        assert_eq!(b.len(), 4410);
        assert_eq!(b[0], 0.0);

        let c = ui_click(0.05, 0.3).unwrap();
        assert_eq!(c.len(), 2205);
        assert!(c.iter().all(|&s| s.abs() <= 0.3));
    }

    #[test]
    fn test_sweep_envelope() {
        let samples = sweep(400.0, 200.0, 0.15, 0.4).unwrap();
        assert_eq!(samples.len(), 6615);
        assert_eq!(samples[0], 0.0);
        // Fixed 1 - 0.5t fade bounds every sample
        let n = samples.len() as f64;
        for (i, &s) in samples.iter().enumerate() {
            let bound = 0.4 * (1.0 - 0.5 * i as f64 / n);
            assert!(s.abs() <= bound + 1e-12);
        }
    }

    #[test]
    fn test_sweep_rejects_zero_duration() {
        assert!(sweep(100.0, 200.0, 0.0, 0.5).is_err());
    }

    #[test]
    fn test_noise_reproducible_with_seed() {
        let a = noise(&mut Pcg64::seed_from_u64(7), 0.05, 0.3, 0.1).unwrap();
        let b = noise(&mut Pcg64::seed_from_u64(7), 0.05, 0.3, 0.1).unwrap();
        assert_eq!(a, b);

        let c = noise(&mut Pcg64::seed_from_u64(8), 0.05, 0.3, 0.1).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_bounds_and_fade() {
        let mut rng = Pcg64::seed_from_u64(12345);
        let samples = noise(&mut rng, 0.5, 0.4, 0.1).unwrap();
        assert_eq!(samples.len(), 22050);
        assert!(samples.iter().all(|&s| s.abs() <= 0.4));
        // Last sample sits at 1/4410 of the release ramp
        assert!(samples.last().unwrap().abs() <= 0.4 / 4410.0);
    }

    #[test]
    fn test_hiss_bounds() {
        let mut rng = Pcg64::seed_from_u64(3);
        let samples = hiss(&mut rng, 0.1, 0.05).unwrap();
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|&s| s.abs() <= 0.05));
    }

    #[test]
    fn test_silence() {
        let samples = silence(0.1);
        assert_eq!(samples.len(), 4410);
        assert!(samples.iter().all(|&s| s == 0.0));
        assert!(silence(0.0).is_empty());
        assert!(silence(-1.0).is_empty());
    }
}

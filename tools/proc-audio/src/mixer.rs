//! Mixing and sequencing utilities
//!
//! Additive mixing with peak-safe normalization, concatenation and looping.

use crate::{checked_len, AudioError, Result};

/// Peak above which [`mix_tracks`] rescales its output
pub const NORMALIZE_THRESHOLD: f64 = 0.9;

/// Post-scale peak targeted by [`mix_tracks`]
pub const NORMALIZE_TARGET: f64 = 0.85;

/// Sum weighted signals without normalizing
///
/// Output length is that of the longest signal; shorter signals contribute
/// silence past their end.
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let a = vec![1.0, 1.0, 1.0];
/// let b = vec![0.5, 0.5];
/// let mixed = mix(&[(&a, 0.5), (&b, 0.5)]);
/// assert_eq!(mixed, vec![0.75, 0.75, 0.5]);
/// ```
pub fn mix(signals: &[(&[f64], f64)]) -> Vec<f64> {
    let max_len = signals.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
    let mut result = vec![0.0; max_len];

    for (samples, volume) in signals {
        for (out, &sample) in result.iter_mut().zip(samples.iter()) {
            *out += sample * volume;
        }
    }

    result
}

/// Mix independent tracks and normalize if the sum runs hot
///
/// Tracks are summed elementwise, padded with silence to the longest track.
/// If the resulting peak exceeds 0.9 every sample is scaled so the peak lands
/// on 0.85; otherwise the sum is returned untouched.
///
/// # Example
/// ```
/// use proc_audio::*;
///
/// let a = vec![1.0, 1.0, 1.0];
/// let mixed = mix_tracks(&[&a, &a]);
/// assert_eq!(mixed, vec![0.85, 0.85, 0.85]);
/// ```
pub fn mix_tracks(tracks: &[&[f64]]) -> Vec<f64> {
    let max_len = tracks.iter().map(|t| t.len()).max().unwrap_or(0);
    let mut result = vec![0.0; max_len];

    for track in tracks {
        for (out, &sample) in result.iter_mut().zip(track.iter()) {
            *out += sample;
        }
    }

    normalize_peak(&mut result);
    result
}

/// Largest absolute sample value (0.0 for an empty buffer)
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()))
}

/// Rescale in place to a 0.85 peak when the current peak exceeds 0.9
///
/// Returns `true` if the samples were scaled.
pub fn normalize_peak(samples: &mut [f64]) -> bool {
    let peak = peak(samples);
    if peak <= NORMALIZE_THRESHOLD {
        return false;
    }

    for sample in samples.iter_mut() {
        *sample = *sample / peak * NORMALIZE_TARGET;
    }
    true
}

/// Concatenate signals in order
pub fn concat(signals: &[&[f64]]) -> Vec<f64> {
    let total_len: usize = signals.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total_len);
    for signal in signals {
        result.extend_from_slice(signal);
    }
    result
}

/// Repeat `samples` from the start until exactly `floor(duration * rate)`
/// samples have been produced
///
/// The seam between repetitions is a hard cut with no crossfade.
pub fn loop_to_duration(samples: &[f64], duration: f64) -> Result<Vec<f64>> {
    let target = checked_len("loop", duration)?;
    if samples.is_empty() {
        return Err(AudioError::EmptySource);
    }

    Ok(samples.iter().copied().cycle().take(target).collect())
}

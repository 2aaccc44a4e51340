//! Equal-temperament note frequencies (A4 = 440 Hz), octaves 3-5

use crate::{AudioError, Result};

pub const C3: f64 = 130.81;
pub const D3: f64 = 146.83;
pub const E3: f64 = 164.81;
pub const F3: f64 = 174.61;
pub const G3: f64 = 196.00;
pub const A3: f64 = 220.00;
pub const B3: f64 = 246.94;
pub const C4: f64 = 261.63;
pub const D4: f64 = 293.66;
pub const E4: f64 = 329.63;
pub const F4: f64 = 349.23;
pub const G4: f64 = 392.00;
pub const A4: f64 = 440.00;
pub const B4: f64 = 493.88;
pub const C5: f64 = 523.25;
pub const D5: f64 = 587.33;
pub const E5: f64 = 659.25;
pub const F5: f64 = 698.46;
pub const G5: f64 = 783.99;
pub const A5: f64 = 880.00;

/// Note name to frequency in Hz
pub const NOTES: &[(&str, f64)] = &[
    ("C3", C3),
    ("D3", D3),
    ("E3", E3),
    ("F3", F3),
    ("G3", G3),
    ("A3", A3),
    ("B3", B3),
    ("C4", C4),
    ("D4", D4),
    ("E4", E4),
    ("F4", F4),
    ("G4", G4),
    ("A4", A4),
    ("B4", B4),
    ("C5", C5),
    ("D5", D5),
    ("E5", E5),
    ("F5", F5),
    ("G5", G5),
    ("A5", A5),
];

/// Look up a note frequency by name (e.g. `"C4"`)
pub fn note_freq(name: &str) -> Result<f64> {
    NOTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, freq)| freq)
        .ok_or_else(|| AudioError::UnknownNote(name.to_string()))
}

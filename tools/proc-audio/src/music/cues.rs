//! Authored music cues
//!
//! Fixed chord progressions and timing schedules built from the instruments,
//! mixed and looped to a target duration. The tables here are the reference
//! arrangement; changing them changes the shipped assets.

use super::instruments::{arp, bass, note, pad};
use super::notes::*;
use crate::mixer::{concat, loop_to_duration, mix, mix_tracks};
use crate::{sample_count, Result, SAMPLE_RATE};

const RATE: f64 = SAMPLE_RATE as f64;

// Main menu: Am - F - C - G
const MENU_CHORDS: [[f64; 3]; 4] = [[A3, C4, E4], [F3, A3, C4], [C3, E3, G3], [G3, B3, D4]];
const MENU_CHORD_SECONDS: f64 = 4.0;
const MENU_ARP: [f64; 4] = [E5, A4, C5, E4];

// Space exploration
const SPACE_CHORDS: [[f64; 3]; 4] = [[C4, G4, C5], [A3, E4, A4], [F3, C4, F4], [G3, D4, G4]];
const SPACE_CHORD_SECONDS: f64 = 6.0;
const SPACE_BASS: [f64; 4] = [C3, A3 / 2.0, F3 / 2.0, G3 / 2.0];
const SPACE_ARP: [f64; 6] = [G5, E5, C5, G4, E5, C5];

// Combat
const COMBAT_LIGHT_CHORD: [f64; 3] = [A3, C4, E4];
const COMBAT_INTENSE_CHORD: [f64; 3] = [E3, G3, B3];
const COMBAT_BASS_BEATS: usize = 8;
const COMBAT_HIT_STEPS: usize = 16;

// Boarding
const BOARDING_DETUNE: f64 = 1.059;
const BOARDING_ARP: [f64; 4] = [C5, E5, G5, C5];

// Victory
const VICTORY_OPENING: [f64; 4] = [C4, E4, G4, C5];
const VICTORY_RISE: [f64; 6] = [C4, E4, G4, C5, E5, G5];
const VICTORY_CHORD: [f64; 4] = [C4, E4, G4, C5];

// Defeat
const DEFEAT_DESCENT: [f64; 6] = [A4, G4, F4, E4, D4, C4];
const DEFEAT_CHORD: [f64; 3] = [A3 / 2.0, C3, E3];

/// A named music cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Mysterious ambient menu theme
    MainMenu,
    /// Expansive exploration pads with bass and sparkle
    SpaceExploration,
    /// Pulsing combat loop in A minor
    CombatLight,
    /// Faster, louder combat loop in E minor
    CombatIntense,
    /// Dissonant drone with a heartbeat pulse
    BoardingTension,
    /// Boarding tension with a faster pulse and urgent arpeggio
    BoardingEscape,
    /// Major fanfare
    Victory,
    /// Descending minor lament
    Defeat,
}

impl Cue {
    /// Every cue
    pub const ALL: [Cue; 8] = [
        Cue::MainMenu,
        Cue::SpaceExploration,
        Cue::CombatLight,
        Cue::CombatIntense,
        Cue::BoardingTension,
        Cue::BoardingEscape,
        Cue::Victory,
        Cue::Defeat,
    ];

    /// Short identifier
    pub fn name(self) -> &'static str {
        match self {
            Cue::MainMenu => "main_menu",
            Cue::SpaceExploration => "space_exploration",
            Cue::CombatLight => "combat_light",
            Cue::CombatIntense => "combat_intense",
            Cue::BoardingTension => "boarding_tension",
            Cue::BoardingEscape => "boarding_escape",
            Cue::Victory => "victory",
            Cue::Defeat => "defeat",
        }
    }

    /// Render the cue to exactly `floor(duration * rate)` samples
    pub fn render(self, duration: f64) -> Result<Vec<f64>> {
        match self {
            Cue::MainMenu => main_menu(duration),
            Cue::SpaceExploration => space_exploration(duration),
            Cue::CombatLight => combat(duration, false),
            Cue::CombatIntense => combat(duration, true),
            Cue::BoardingTension => boarding(duration, false),
            Cue::BoardingEscape => boarding(duration, true),
            Cue::Victory => victory(duration),
            Cue::Defeat => defeat(duration),
        }
    }
}

/// Sum of pads, one per chord tone
fn chord(freqs: &[f64], duration: f64, volume: f64) -> Result<Vec<f64>> {
    let pads = freqs
        .iter()
        .map(|&freq| pad(freq, duration, volume))
        .collect::<Result<Vec<_>>>()?;
    let layers: Vec<(&[f64], f64)> = pads.iter().map(|p| (p.as_slice(), 1.0)).collect();
    Ok(mix(&layers))
}

/// Chords played back to back
fn progression(chords: &[[f64; 3]], chord_duration: f64, volume: f64) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for tones in chords {
        samples.extend(chord(tones, chord_duration, volume)?);
    }
    Ok(samples)
}

/// Silence measured in whole samples
fn rest(samples: f64) -> Vec<f64> {
    vec![0.0; samples as usize]
}

/// Mysterious, ambient main menu music
pub fn main_menu(duration: f64) -> Result<Vec<f64>> {
    let pads = progression(&MENU_CHORDS, MENU_CHORD_SECONDS, 0.15)?;
    let pad_track = loop_to_duration(&pads, duration)?;

    let arp_track = loop_to_duration(&arp(&MENU_ARP, 0.5, 0.1)?, duration)?;

    let drone = pad(A3 / 2.0, duration, 0.12)?;

    Ok(mix_tracks(&[&pad_track, &arp_track, &drone]))
}

/// Expansive, wonder-filled space exploration music
pub fn space_exploration(duration: f64) -> Result<Vec<f64>> {
    let pads = progression(&SPACE_CHORDS, SPACE_CHORD_SECONDS, 0.12)?;
    let pad_track = loop_to_duration(&pads, duration)?;

    let bass_notes = SPACE_BASS
        .iter()
        .map(|&freq| bass(freq, SPACE_CHORD_SECONDS, 0.2))
        .collect::<Result<Vec<_>>>()?;
    let bass_refs: Vec<&[f64]> = bass_notes.iter().map(Vec::as_slice).collect();
    let bass_track = loop_to_duration(&concat(&bass_refs), duration)?;

    let arp_track = loop_to_duration(&arp(&SPACE_ARP, 0.4, 0.08)?, duration)?;

    Ok(mix_tracks(&[&pad_track, &bass_track, &arp_track]))
}

/// Tense combat music; `intense` speeds it up by 1.5x and boosts it by 1.2x
pub fn combat(duration: f64, intense: bool) -> Result<Vec<f64>> {
    let (tempo, gain) = if intense { (1.5, 1.2) } else { (1.0, 1.0) };

    // Pulsing bass
    let bass_freq = if intense { E3 / 2.0 } else { A3 / 2.0 };
    let beat = bass(bass_freq, 0.25 / tempo, 0.3 * gain)?;
    let gap = rest(RATE * 0.25 / tempo);
    let mut bass_pattern = Vec::new();
    for _ in 0..COMBAT_BASS_BEATS {
        bass_pattern.extend_from_slice(&beat);
        bass_pattern.extend_from_slice(&gap);
    }
    let bass_track = loop_to_duration(&bass_pattern, duration)?;

    // Tension pads
    let tones = if intense {
        COMBAT_INTENSE_CHORD
    } else {
        COMBAT_LIGHT_CHORD
    };
    let pad_track = loop_to_duration(&chord(&tones, 8.0, 0.15 * gain)?, duration)?;

    // Rhythmic hits
    let mut hit_pattern = Vec::new();
    for step in 0..COMBAT_HIT_STEPS {
        if step % 4 == 0 || (intense && step % 2 == 0) {
            let freq = if step % 8 == 0 { C4 } else { G3 };
            hit_pattern.extend(note(freq, 0.15, 0.2 * gain, 0.01, 0.1)?);
        } else {
            hit_pattern.extend(rest(RATE * 0.15));
        }
    }
    let hit_track = loop_to_duration(&hit_pattern, duration)?;

    Ok(mix_tracks(&[&bass_track, &pad_track, &hit_track]))
}

/// Tense boarding music; `escape` quickens the heartbeat and adds an arpeggio
pub fn boarding(duration: f64, escape: bool) -> Result<Vec<f64>> {
    // Low menacing drone and a minor-second rub
    let drone = pad(C3 / 2.0, duration, 0.15)?;
    let pad1 = pad(C4, duration, 0.1)?;
    let pad2 = pad(C4 * BOARDING_DETUNE, duration, 0.08)?;

    // Heartbeat
    let interval = if escape { 0.5 } else { 0.8 };
    let strong = bass(C3 / 2.0, 0.1, 0.25)?;
    let weak = bass(C3 / 2.0, 0.08, 0.15)?;
    let short_gap = rest(RATE * 0.05);
    let long_gap = rest(RATE * (interval - 0.23));

    let mut pulse_track = Vec::new();
    for _ in 0..(duration / interval) as usize {
        pulse_track.extend_from_slice(&strong);
        pulse_track.extend_from_slice(&short_gap);
        pulse_track.extend_from_slice(&weak);
        pulse_track.extend_from_slice(&long_gap);
    }
    // Truncated only; a short pulse track is left short
    pulse_track.truncate(sample_count(duration));

    if escape {
        let arp_track = loop_to_duration(&arp(&BOARDING_ARP, 0.15, 0.12)?, duration)?;
        return Ok(mix_tracks(&[
            &drone,
            &pad1,
            &pad2,
            &pulse_track,
            &arp_track,
        ]));
    }

    Ok(mix_tracks(&[&drone, &pad1, &pad2, &pulse_track]))
}

/// Triumphant victory fanfare
pub fn victory(duration: f64) -> Result<Vec<f64>> {
    let mut fanfare = Vec::new();

    // Opening C major broken chord
    for &freq in &VICTORY_OPENING {
        fanfare.extend(note(freq, 0.5, 0.3, 0.02, 0.2)?);
    }

    // Rising arpeggio, louder as it climbs
    for (k, &freq) in VICTORY_RISE.iter().enumerate() {
        fanfare.extend(note(freq, 0.2, 0.25 + k as f64 * 0.02, 0.01, 0.05)?);
    }

    // Sustained chord tones, one after another
    for &freq in &VICTORY_CHORD {
        fanfare.extend(pad(freq, 3.0, 0.2)?);
    }

    loop_to_duration(&fanfare, duration)
}

/// Somber defeat music
pub fn defeat(duration: f64) -> Result<Vec<f64>> {
    let mut descent = Vec::new();

    for &freq in &DEFEAT_DESCENT {
        descent.extend(note(freq, 0.8, 0.25, 0.1, 0.4)?);
    }

    for &freq in &DEFEAT_CHORD {
        descent.extend(pad(freq, 4.0, 0.15)?);
    }

    loop_to_duration(&descent, duration)
}

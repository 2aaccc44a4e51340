//! Music track definitions

use proc_audio::music::Cue;

/// Music track definition
#[derive(Debug, Clone, Copy)]
pub struct TrackDef {
    /// Category subdirectory under `music/`
    pub dir: &'static str,
    /// File stem
    pub id: &'static str,
    /// Arrangement to render
    pub cue: Cue,
    /// Length in seconds
    pub duration: f64,
}

const fn track(dir: &'static str, id: &'static str, cue: Cue, duration: f64) -> TrackDef {
    TrackDef {
        dir,
        id,
        cue,
        duration,
    }
}

/// All music tracks
pub const TRACKS: &[TrackDef] = &[
    // Menu
    track("menu", "main_theme", Cue::MainMenu, 60.0),
    track("menu", "pause_ambient", Cue::MainMenu, 30.0),
    // Gameplay
    track("gameplay", "space_exploration", Cue::SpaceExploration, 90.0),
    track("gameplay", "combat_light", Cue::CombatLight, 60.0),
    track("gameplay", "combat_intense", Cue::CombatIntense, 60.0),
    track("gameplay", "boarding_tension", Cue::BoardingTension, 60.0),
    track("gameplay", "boarding_escape", Cue::BoardingEscape, 45.0),
    // Cutscenes
    track("cutscenes", "intro_cinematic", Cue::SpaceExploration, 30.0),
    track("cutscenes", "victory", Cue::Victory, 15.0),
    track("cutscenes", "defeat", Cue::Defeat, 10.0),
    // Ambient music (overlaps the ambient sound beds)
    track("ambient", "station_ambient", Cue::MainMenu, 60.0),
    track("ambient", "ship_interior", Cue::BoardingTension, 60.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_count() {
        assert_eq!(TRACKS.len(), 12);
    }

    #[test]
    fn test_every_cue_is_used() {
        for cue in Cue::ALL {
            assert!(
                TRACKS.iter().any(|t| t.cue == cue),
                "{} has no track",
                cue.name()
            );
        }
    }
}

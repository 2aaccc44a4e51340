//! Music composition
//!
//! Note tables, sustained-tone instruments and the authored cue arrangements
//! built on top of them.

mod cues;
mod instruments;
pub mod notes;

pub use cues::{boarding, combat, defeat, main_menu, space_exploration, victory, Cue};
pub use instruments::{arp, bass, note, pad, Note};
pub use notes::{note_freq, NOTES};

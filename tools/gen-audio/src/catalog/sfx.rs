//! Sound effect and ambient loop definitions
//!
//! Each definition names an output file; [`render_sound`] and
//! [`render_ambient`] map the id to its generator call.

use anyhow::{bail, Result};
use proc_audio::{beep, concat, sine, sweep, ui_click, AlertLevel, DoorMotion, Rarity, Synth};
use rand::Rng;

/// Default fade-out for noise bursts (seconds)
const NOISE_FADE: f64 = 0.1;

/// Sound effect definition
#[derive(Debug, Clone, Copy)]
pub struct SoundDef {
    /// Category subdirectory under `sfx/`
    pub group: &'static str,
    /// File stem
    pub id: &'static str,
    /// Human-readable description
    pub name: &'static str,
}

const fn sound(group: &'static str, id: &'static str, name: &'static str) -> SoundDef {
    SoundDef { group, id, name }
}

/// All sound effects, grouped by category
pub const SOUNDS: &[SoundDef] = &[
    // Boarding
    sound("boarding", "door_open", "Airlock door opening"),
    sound("boarding", "door_close", "Airlock door closing"),
    // Loot
    sound("loot", "loot_common", "Common loot pickup"),
    sound("loot", "loot_uncommon", "Uncommon loot pickup"),
    sound("loot", "loot_rare", "Rare loot pickup"),
    sound("loot", "loot_epic", "Epic loot pickup"),
    sound("loot", "loot_legendary", "Legendary loot pickup"),
    // UI
    sound("ui", "ui_click", "Button click"),
    sound("ui", "ui_hover", "Button hover"),
    sound("ui", "ui_confirm", "Confirm"),
    sound("ui", "ui_cancel", "Cancel"),
    sound("ui", "ui_deny", "Action denied"),
    sound("ui", "ui_open", "Panel open"),
    sound("ui", "ui_close", "Panel close"),
    sound("ui", "ui_tab", "Tab switch"),
    sound("ui", "ui_scroll", "List scroll tick"),
    sound("ui", "ui_notification", "Two-tone notification"),
    // Ship
    sound("ship", "engine_idle", "Engine idle drone"),
    sound("ship", "engine_thrust", "Engine thrust burst"),
    sound("ship", "engine_boost", "Engine boost"),
    sound("ship", "ship_damage", "Hull damage"),
    sound("ship", "shield_hit", "Shield impact"),
    sound("ship", "shield_down", "Shield failure"),
    sound("ship", "shield_recharge", "Shield recharge"),
    // Weapons
    sound("weapons", "laser_fire", "Laser shot"),
    sound("weapons", "laser_hit", "Laser impact"),
    sound("weapons", "missile_launch", "Missile launch"),
    sound("weapons", "missile_explode", "Missile detonation"),
    sound("weapons", "railgun_charge", "Railgun charge-up"),
    sound("weapons", "railgun_fire", "Railgun discharge"),
    // Explosions
    sound("explosions", "explosion_small", "Small explosion"),
    sound("explosions", "explosion_medium", "Medium explosion"),
    sound("explosions", "explosion_large", "Large explosion"),
    sound("explosions", "ship_explode", "Ship destroyed"),
    // Docking
    sound("docking", "dock_approach", "Docking approach"),
    sound("docking", "dock_clamp", "Docking clamps engage"),
    sound("docking", "dock_seal", "Docking seal"),
    sound("docking", "undock", "Undocking"),
    // Alerts
    sound("alerts", "alert_warning", "Warning alarm"),
    sound("alerts", "alert_critical", "Critical alarm"),
    sound("alerts", "alert_timer", "Timer tick"),
    sound("alerts", "countdown_beep", "Countdown beep"),
    sound("alerts", "countdown_final", "Final countdown beep"),
    // Achievements
    sound("achievements", "achievement_unlock", "Achievement fanfare"),
    sound("achievements", "level_up", "Level up"),
    sound("achievements", "money_gain", "Credits gained"),
];

/// Ambient loop definition (written under `ambient/`)
#[derive(Debug, Clone, Copy)]
pub struct AmbientDef {
    /// File stem
    pub id: &'static str,
    /// Human-readable description
    pub name: &'static str,
}

/// All ambient loops
pub const AMBIENT: &[AmbientDef] = &[
    AmbientDef { id: "space_hum", name: "Deep space hum" },
    AmbientDef { id: "ship_ambience", name: "Ship interior ambience" },
    AmbientDef { id: "station_bustle", name: "Station drone and crowd hiss" },
    AmbientDef { id: "engine_rumble", name: "Engine room rumble" },
    AmbientDef { id: "ventilation", name: "Ventilation noise" },
    AmbientDef { id: "computer_hum", name: "Computer core hum" },
    AmbientDef { id: "radio_static", name: "Radio static" },
];

/// Render a sound effect by id
pub fn render_sound<R: Rng>(synth: &mut Synth<R>, id: &str) -> Result<Vec<f64>> {
    let samples = match id {
        // Boarding
        "door_open" => synth.door(DoorMotion::Opening, 0.3)?,
        "door_close" => synth.door(DoorMotion::Closing, 0.3)?,

        // Loot
        "loot_common" => synth.loot_pickup(Rarity::Common, 0.2)?,
        "loot_uncommon" => synth.loot_pickup(Rarity::Uncommon, 0.25)?,
        "loot_rare" => synth.loot_pickup(Rarity::Rare, 0.35)?,
        "loot_epic" => synth.loot_pickup(Rarity::Epic, 0.45)?,
        "loot_legendary" => synth.loot_pickup(Rarity::Legendary, 0.6)?,

        // UI
        "ui_click" => ui_click(0.05, 0.3)?,
        "ui_hover" => sine(600.0, 0.03, 0.15, 0.01, 0.05)?,
        "ui_confirm" => beep(880.0, 0.1, 0.4)?,
        "ui_cancel" => sweep(400.0, 200.0, 0.15, 0.4)?,
        "ui_deny" => sweep(300.0, 100.0, 0.2, 0.4)?,
        "ui_open" => sweep(300.0, 600.0, 0.15, 0.3)?,
        "ui_close" => sweep(600.0, 300.0, 0.15, 0.3)?,
        "ui_tab" => beep(700.0, 0.05, 0.25)?,
        "ui_scroll" => sine(500.0, 0.02, 0.1, 0.01, 0.05)?,
        "ui_notification" => concat(&[
            &beep(660.0, 0.1, 0.4)?,
            &beep(880.0, 0.15, 0.4)?,
        ]),

        // Ship
        "engine_idle" => synth.ambient_loop(2.0, 80.0)?,
        "engine_thrust" => concat(&[
            &synth.noise(0.5, 0.4, NOISE_FADE)?,
            &synth.ambient_loop(0.5, 120.0)?,
        ]),
        "engine_boost" => sweep(100.0, 400.0, 0.4, 0.5)?,
        "ship_damage" => synth.explosion(0.3, 0.6)?,
        "shield_hit" => sweep(2000.0, 500.0, 0.1, 0.4)?,
        "shield_down" => sweep(1000.0, 100.0, 0.4, 0.5)?,
        "shield_recharge" => sweep(200.0, 800.0, 0.5, 0.3)?,

        // Weapons
        "laser_fire" => synth.laser(0.12, 0.5)?,
        "laser_hit" => sweep(1500.0, 300.0, 0.08, 0.4)?,
        "missile_launch" => concat(&[
            &sweep(200.0, 800.0, 0.3, 0.5)?,
            &synth.noise(0.2, 0.3, NOISE_FADE)?,
        ]),
        "missile_explode" => synth.explosion(0.5, 0.7)?,
        "railgun_charge" => sweep(100.0, 2000.0, 0.8, 0.4)?,
        "railgun_fire" => concat(&[
            &synth.noise(0.1, 0.7, NOISE_FADE)?,
            &sweep(3000.0, 500.0, 0.2, 0.6)?,
        ]),

        // Explosions
        "explosion_small" => synth.explosion(0.3, 0.5)?,
        "explosion_medium" => synth.explosion(0.5, 0.6)?,
        "explosion_large" => synth.explosion(0.8, 0.7)?,
        "ship_explode" => synth.explosion(1.2, 0.8)?,

        // Docking
        "dock_approach" => concat(&[
            &synth.ambient_loop(1.5, 50.0)?,
            &beep(300.0, 0.2, 0.4)?,
        ]),
        "dock_clamp" => concat(&[
            &synth.noise(0.1, 0.5, NOISE_FADE)?,
            &sine(150.0, 0.3, 0.4, 0.01, 0.05)?,
        ]),
        "dock_seal" => concat(&[
            &synth.noise(0.2, 0.3, NOISE_FADE)?,
            &sweep(200.0, 100.0, 0.3, 0.3)?,
        ]),
        "undock" => concat(&[
            &sweep(100.0, 300.0, 0.3, 0.4)?,
            &synth.noise(0.3, 0.4, NOISE_FADE)?,
        ]),

        // Alerts
        "alert_warning" => synth.alert(AlertLevel::Warning, 0.5)?,
        "alert_critical" => synth.alert(AlertLevel::Critical, 0.4)?,
        "alert_timer" => beep(1000.0, 0.15, 0.4)?,
        "countdown_beep" => beep(880.0, 0.1, 0.5)?,
        "countdown_final" => beep(1200.0, 0.3, 0.6)?,

        // Achievements
        "achievement_unlock" => concat(&[
            &beep(523.0, 0.1, 0.4)?,
            &beep(659.0, 0.1, 0.4)?,
            &beep(784.0, 0.1, 0.4)?,
            &beep(1047.0, 0.3, 0.4)?,
        ]),
        "level_up" => concat(&[
            &sweep(300.0, 600.0, 0.2, 0.4)?,
            &sweep(600.0, 1200.0, 0.3, 0.5)?,
        ]),
        "money_gain" => concat(&[
            &beep(1000.0, 0.05, 0.3)?,
            &beep(1200.0, 0.08, 0.25)?,
        ]),

        _ => bail!("Unknown sound effect: {id}"),
    };
    Ok(samples)
}

/// Render an ambient loop by id
pub fn render_ambient<R: Rng>(synth: &mut Synth<R>, id: &str) -> Result<Vec<f64>> {
    let samples = match id {
        "space_hum" => synth.ambient_loop(10.0, 40.0)?,
        "ship_ambience" => synth.ambient_loop(10.0, 60.0)?,
        // Drone followed by ten seconds of crowd hiss
        "station_bustle" => concat(&[
            &synth.ambient_loop(10.0, 80.0)?,
            &synth.hiss(10.0, 0.05)?,
        ]),
        "engine_rumble" => synth.ambient_loop(10.0, 30.0)?,
        "ventilation" => synth.noise(10.0, 0.08, NOISE_FADE)?,
        "computer_hum" => synth.ambient_loop(10.0, 120.0)?,
        "radio_static" => synth.noise(5.0, 0.1, NOISE_FADE)?,
        _ => bail!("Unknown ambient loop: {id}"),
    };
    Ok(samples)
}

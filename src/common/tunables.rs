//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    /// Seconds weapon switching stays locked after a level load.
    pub switch_pause_on_load: f32,
    /// Equip/stash sprite fade duration.
    pub weapon_fade_time: f32,
    /// Delay before a freshly displayed HUD sprite starts fading in.
    pub hud_fade_in_after: f32,
    pub hud_fade_time: f32,
    pub hud_top_margin: f32,
    pub hud_side_margin: f32,
    /// Camera-local depth of HUD sprites: just in front of the camera,
    /// above every world sprite.
    pub hud_z: f32,
    pub lob_lifetime: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 260.0,
            switch_pause_on_load: 1.5,
            weapon_fade_time: 0.2,
            hud_fade_in_after: 0.4,
            hud_fade_time: 2.0,
            hud_top_margin: 14.0,
            hud_side_margin: 18.0,
            hud_z: -12.0,
            lob_lifetime: 6.0,
        }
    }
}

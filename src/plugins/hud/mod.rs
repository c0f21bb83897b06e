//! HUD belt display: screen-anchored weapon sprites.
//!
//! Three sprites ride as children of the main camera: the equipped weapon
//! top-centre, the stashed pair in the top corners. Positions are derived
//! from the window's logical size via `mathx::anchor` on spawn and on every
//! resize; nothing is persisted. Headless runs have no window or camera, so
//! every system here bails out quietly when those are missing.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::mathx::anchor::{self, HudAnchor};
use crate::plugins::camera::MainCamera;
use crate::plugins::inventory::messages::{BeltSide, EquippedWeaponChanged, StashedWeaponChanged};
use crate::plugins::weapons::{SpriteFade, Weapon};

/// Fade the whole HUD out (`hidden`) or back in.
#[derive(Message, Debug, Clone, Copy)]
pub struct FadeHud {
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudSlot {
    Equipped,
    StashedLeft,
    StashedRight,
}

impl HudSlot {
    fn anchor(self) -> HudAnchor {
        match self {
            HudSlot::Equipped => HudAnchor::TopCenter,
            HudSlot::StashedLeft => HudAnchor::TopLeft,
            HudSlot::StashedRight => HudAnchor::TopRight,
        }
    }

    fn from_side(side: BeltSide) -> Self {
        match side {
            BeltSide::Left => HudSlot::StashedLeft,
            BeltSide::Right => HudSlot::StashedRight,
        }
    }
}

/// One HUD weapon sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct HudWeapon {
    pub slot: HudSlot,
}

pub fn plugin(app: &mut App) {
    app.add_message::<FadeHud>();
    // Registered by WindowPlugin in the full app; headless runs need it too
    // so reposition_hud validates.
    app.add_message::<WindowResized>();

    app.add_systems(
        Update,
        (ensure_hud, on_belt_display_changed, on_fade_hud)
            .run_if(in_state(GameState::InGame)),
    );

    // After Update so freshly spawned HUD entities get placed the same frame.
    app.add_systems(PostUpdate, reposition_hud);
}

/// Spawn the three HUD sprites once a camera exists to hang them off.
fn ensure_hud(
    mut commands: Commands,
    q_camera: Query<Entity, With<MainCamera>>,
    q_hud: Query<(), With<HudWeapon>>,
) {
    if !q_hud.is_empty() {
        return;
    }
    let Ok(camera) = q_camera.single() else {
        return;
    };

    for slot in [HudSlot::Equipped, HudSlot::StashedLeft, HudSlot::StashedRight] {
        commands.spawn((
            Name::new(format!("HudWeapon({slot:?})")),
            HudWeapon { slot },
            // Placeholder until the first belt broadcast swaps it in.
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, 0.0),
                custom_size: Some(Vec2::splat(22.0)),
                ..default()
            },
            Transform::default(),
            Visibility::default(),
            ChildOf(camera),
        ));
    }
}

/// Swap displayed sprites when the belt re-broadcasts its assignments.
///
/// The new sprite snaps to zero alpha, then fades up after a short delay,
/// replacing whatever fade was running.
fn on_belt_display_changed(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut equipped_reader: MessageReader<EquippedWeaponChanged>,
    mut stashed_reader: MessageReader<StashedWeaponChanged>,
    q_weapons: Query<&Weapon>,
    mut q_hud: Query<(Entity, &HudWeapon, &mut Sprite)>,
) {
    let mut changes: Vec<(HudSlot, Entity)> = Vec::new();
    for msg in equipped_reader.read() {
        changes.push((HudSlot::Equipped, msg.weapon));
    }
    for msg in stashed_reader.read() {
        changes.push((HudSlot::from_side(msg.side), msg.weapon));
    }

    for (slot, weapon) in changes {
        let Ok(weapon) = q_weapons.get(weapon) else {
            debug!("belt broadcast for a non-weapon entity; skipped");
            continue;
        };

        for (hud_entity, hud, mut sprite) in &mut q_hud {
            if hud.slot != slot {
                continue;
            }

            *sprite = weapon.kind.hud_sprite();
            let mut c = sprite.color.to_srgba();
            c.alpha = 0.0;
            sprite.color = c.into();

            commands.entity(hud_entity).insert(SpriteFade::new(
                1.0,
                tunables.hud_fade_in_after,
                tunables.hud_fade_time,
            ));
        }
    }
}

fn on_fade_hud(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<FadeHud>,
    q_hud: Query<Entity, With<HudWeapon>>,
) {
    let Some(msg) = reader.read().last().copied() else {
        return;
    };

    let target = if msg.hidden { 0.0 } else { 1.0 };
    for hud_entity in &q_hud {
        commands
            .entity(hud_entity)
            .insert(SpriteFade::new(target, 0.0, tunables.hud_fade_time));
    }
}

/// Place HUD sprites from the window's logical size.
///
/// Runs once when the HUD appears and again on every window resize; the
/// sprites are camera children, so following the camera costs nothing here.
fn reposition_hud(
    tunables: Res<Tunables>,
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut q_hud: Query<(&HudWeapon, &Sprite, &mut Transform)>,
    mut placed: Local<bool>,
) {
    let dirty = resized.read().count() > 0;
    if *placed && !dirty {
        return;
    }
    if q_hud.is_empty() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = window.size();

    for (hud, sprite, mut tf) in &mut q_hud {
        let size = sprite.custom_size.unwrap_or(Vec2::splat(22.0));
        let inset = match hud.slot {
            HudSlot::Equipped => Vec2::new(0.0, tunables.hud_top_margin),
            _ => Vec2::new(tunables.hud_side_margin, tunables.hud_top_margin),
        };
        let local = anchor::anchored(hud.slot.anchor(), viewport, inset, size);
        tf.translation = local.extend(tunables.hud_z);
    }

    *placed = true;
}

#[cfg(test)]
mod tests;

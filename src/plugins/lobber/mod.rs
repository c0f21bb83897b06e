//! Lobbed projectiles: click → request → launch → land.
//!
//! Producer/consumer split, same shape as the rest of the message pipelines:
//! the producer samples input and aim and writes a `LaunchLob`; the consumer
//! spawns the projectile body. The physics components on the projectile
//! (gravity scale 0.5, angular damping 0.05, mass 1) match the lob formula's
//! calibration; changing either side breaks the arc.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::mathx::lob;
use crate::plugins::camera::MainCamera;
use crate::plugins::inventory::messages::NewEquippedWeapon;
use crate::plugins::player::Player;
use crate::plugins::weapons::Weapon;

#[derive(Message, Debug, Clone, Copy)]
pub struct LaunchLob {
    /// Spawn position, pixels.
    pub pos: Vec2,
    /// Launch velocity, pixels per second.
    pub vel: Vec2,
    pub tint: Color,
}

#[derive(Component, Debug)]
pub struct LobProjectile {
    pub lifetime: Timer,
}

/// The projectile has landed or timed out and awaits despawn.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spent;

/// Which weapon fires, fed by the belt's `NewEquippedWeapon` broadcasts.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct EquippedWeapon(pub Option<Entity>);

pub fn plugin(app: &mut App) {
    app.add_message::<LaunchLob>();
    app.init_resource::<EquippedWeapon>();

    app.add_systems(
        Update,
        (
            track_equipped_weapon,
            request_lobs.after(track_equipped_weapon),
            launch_lobs.after(request_lobs),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedUpdate,
        tick_lob_lifetimes.run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        mark_landed_lobs
            .after(CollisionEventSystems)
            .run_if(in_state(GameState::InGame)),
    );

    // Structural cleanup stays out of the fixed physics step.
    app.add_systems(PostUpdate, despawn_spent.run_if(in_state(GameState::InGame)));
}

fn track_equipped_weapon(
    mut reader: MessageReader<NewEquippedWeapon>,
    mut equipped: ResMut<EquippedWeapon>,
) {
    if let Some(msg) = reader.read().last() {
        equipped.0 = Some(msg.weapon);
    }
}

/// Producer: on click, turn the cursor into a world target and the equipped
/// weapon's speed into a launch velocity.
fn request_lobs(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    tunables: Res<Tunables>,
    equipped: Res<EquippedWeapon>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_player: Query<&Transform, With<Player>>,
    q_weapons: Query<&Weapon>,
    mut writer: MessageWriter<LaunchLob>,
) {
    let Some(buttons) = buttons else {
        return;
    };
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }

    let Some(equipped) = equipped.0 else {
        return;
    };

    let player_tf = match q_player.single() {
        Ok(tf) => tf,
        Err(e) => {
            debug!("No single Player Transform: {e:?}");
            return;
        }
    };
    let origin = player_tf.translation.truncate();

    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => {
            debug!("No single Window: {e:?}");
            return;
        }
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => {
            debug!("No single MainCamera: {e:?}");
            return;
        }
    };
    let target = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => {
            debug!("viewport_to_world_2d failed: {e:?}");
            return;
        }
    };

    let weapon = match q_weapons.get(equipped) {
        Ok(w) => w,
        Err(e) => {
            debug!("equipped belt slot has no Weapon: {e:?}");
            return;
        }
    };

    // The formula is calibrated in metres; world positions are pixels.
    let ppm = tunables.pixels_per_meter;
    let vel = lob::lob_velocity(weapon.speed, origin / ppm, target / ppm) * ppm;

    writer.write(LaunchLob {
        pos: origin,
        vel,
        tint: weapon.kind.tint(),
    });
}

/// Consumer: spawn projectile bodies for queued launches.
fn launch_lobs(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<LaunchLob>,
) {
    for req in reader.read() {
        commands.spawn((
            Name::new("LobProjectile"),
            LobProjectile {
                lifetime: Timer::from_seconds(tunables.lob_lifetime, TimerMode::Once),
            },
            Sprite {
                color: req.tint,
                custom_size: Some(Vec2::splat(7.0)),
                ..default()
            },
            Transform::from_translation(req.pos.extend(2.0)),
            RigidBody::Dynamic,
            Collider::circle(3.5),
            CollisionLayers::new(Layer::Projectile, [Layer::World]),
            CollisionEventsEnabled,
            GravityScale(0.5),
            AngularDamping(0.05),
            Mass(1.0),
            LinearVelocity(req.vel),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn tick_lob_lifetimes(
    time: Res<Time<Fixed>>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut LobProjectile), Without<Spent>>,
) {
    for (e, mut lob) in &mut q {
        lob.lifetime.tick(time.delta());
        if lob.lifetime.is_finished() {
            commands.entity(e).insert(Spent);
        }
    }
}

/// First contact with the world marks the projectile spent.
fn mark_landed_lobs(
    mut started: MessageReader<CollisionStart>,
    q_projectiles: Query<(), With<LobProjectile>>,
    mut commands: Commands,
) {
    for ev in started.read() {
        for collider in [ev.collider1, ev.collider2] {
            if q_projectiles.contains(collider) {
                commands.entity(collider).insert(Spent);
            }
        }
    }
}

fn despawn_spent(mut commands: Commands, q: Query<Entity, (With<Spent>, With<LobProjectile>)>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}

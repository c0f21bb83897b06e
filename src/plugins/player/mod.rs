//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the player and its three belt weapons, then hand
//!   them to the inventory over `InitWeapons`.
//! - Update: sample input (move axis, belt hotkeys).
//! - FixedUpdate: apply velocity to the kinematic rigid body and flip facing.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::hud::FadeHud;
use crate::plugins::inventory::messages::{InitWeapons, SwitchWeapon};
use crate::plugins::weapons::{self, WeaponKind};

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, (gather_input, belt_hotkeys))
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(mut commands: Commands, mut init: MessageWriter<InitWeapons>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World]);

    let player = commands
        .spawn((
            Name::new("Player"),
            Player,
            Sprite {
                color: Color::srgb(0.2, 0.75, 0.9),
                custom_size: Some(Vec2::new(22.0, 30.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 1.0),
            RigidBody::Kinematic,
            Collider::circle(13.0),
            layers,
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    // Belt weapons hang off the player; stashed ones ride along on the back.
    let sword = weapons::spawn_weapon(&mut commands, player, WeaponKind::Sword, Vec2::new(14.0, 2.0));
    let hammer =
        weapons::spawn_weapon(&mut commands, player, WeaponKind::Hammer, Vec2::new(-10.0, 6.0));
    let axe =
        weapons::spawn_weapon(&mut commands, player, WeaponKind::Axe, Vec2::new(-14.0, -2.0));

    init.write(InitWeapons {
        equipped: sword,
        left: hammer,
        right: axe,
    });
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = if axis.length_squared() > 0.0 {
        axis.normalize()
    } else {
        Vec2::ZERO
    };
}

fn belt_hotkeys(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut switch: MessageWriter<SwitchWeapon>,
    mut fade: MessageWriter<FadeHud>,
    mut hud_hidden: Local<bool>,
) {
    let Some(keys) = keys else {
        return;
    };

    if keys.just_pressed(KeyCode::Tab) {
        switch.write(SwitchWeapon);
    }

    if keys.just_pressed(KeyCode::KeyH) {
        *hud_hidden = !*hud_hidden;
        fade.write(FadeHud {
            hidden: *hud_hidden,
        });
    }
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<(&mut LinearVelocity, &mut Transform), With<Player>>,
) {
    let Ok((mut vel, mut tf)) = q_player.single_mut() else {
        return;
    };

    vel.0 = input.move_axis * tunables.player_speed;

    // Mirror the sprite by sign-flipping horizontal scale; facing-relative
    // side checks read this sign.
    if input.move_axis.x > 0.0 {
        tf.scale.x = tf.scale.x.abs();
    } else if input.move_axis.x < 0.0 {
        tf.scale.x = -tf.scale.x.abs();
    }
}

//! World plugin: arena geometry and level-load signalling.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::core::palette;
use crate::plugins::inventory::messages::LevelLoading;

const TILE: i32 = 64;
const HALF_W: i32 = TILE * 16;
const HALF_H: i32 = TILE * 9;

/// Mid-air platforms to lob projectiles over: (x, y, width).
const LEDGES: [(f32, f32, f32); 3] = [
    (-320.0, -220.0, 200.0),
    (80.0, -120.0, 160.0),
    (360.0, -40.0, 140.0),
];

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        (spawn_arena, spawn_floor, announce_level_load),
    );
}

/// Entering the in-game state means a level just loaded; the belt pauses
/// switching for a beat.
fn announce_level_load(mut loading: MessageWriter<LevelLoading>) {
    loading.write(LevelLoading);
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = palette::parse(palette::WALL);
    let thickness = 30.0;

    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player, Layer::Projectile]);

    let mut spawn_solid = |name: String, pos: Vec3, size: Vec2| {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_solid(
        "WallTop".into(),
        Vec3::new(0.0, HALF_H as f32 + thickness * 0.5, 0.0),
        Vec2::new(HALF_W as f32 * 2.0 + thickness * 2.0, thickness),
    );
    spawn_solid(
        "WallBottom".into(),
        Vec3::new(0.0, -HALF_H as f32 - thickness * 0.5, 0.0),
        Vec2::new(HALF_W as f32 * 2.0 + thickness * 2.0, thickness),
    );
    spawn_solid(
        "WallLeft".into(),
        Vec3::new(-HALF_W as f32 - thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, HALF_H as f32 * 2.0),
    );
    spawn_solid(
        "WallRight".into(),
        Vec3::new(HALF_W as f32 + thickness * 0.5, 0.0, 0.0),
        Vec2::new(thickness, HALF_H as f32 * 2.0),
    );

    for (i, (x, y, w)) in LEDGES.into_iter().enumerate() {
        spawn_solid(
            format!("Ledge{i}"),
            Vec3::new(x, y, 0.0),
            Vec2::new(w, 14.0),
        );
    }
}

/// Checkerboard floor from solid-colour sprites; the project ships no assets.
fn spawn_floor(mut commands: Commands) {
    let a = palette::parse(palette::FLOOR_A);
    let b = palette::parse(palette::FLOOR_B);

    (-(HALF_H / TILE)..=HALF_H / TILE)
        .flat_map(|y| (-(HALF_W / TILE)..=HALF_W / TILE).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let world_pos = Vec3::new(x as f32 * TILE as f32, y as f32 * TILE as f32, 0.0);
            let color = if (x + y) % 2 == 0 { a } else { b };

            commands.spawn((
                Sprite::from_color(color, Vec2::splat(TILE as f32)),
                Transform::from_translation(world_pos),
            ));
        });
}

#[cfg(test)]
mod tests;

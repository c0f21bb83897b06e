#![cfg(test)]

use super::*;

use bevy::window::WindowResolution;

use crate::common::test_utils::{init_messages, run_system_once, write_message};
use crate::plugins::weapons::WeaponKind;

fn spawn_camera(world: &mut World) -> Entity {
    world
        .spawn((Camera2d, MainCamera { responsiveness: 5.0 }, Transform::default()))
        .id()
}

fn spawn_hud_world(world: &mut World) -> Entity {
    let camera = spawn_camera(world);
    run_system_once(world, ensure_hud);
    camera
}

#[test]
fn ensure_hud_spawns_three_camera_children() {
    let mut world = World::new();
    let camera = spawn_hud_world(&mut world);

    let mut q = world.query::<(&HudWeapon, &ChildOf, &Sprite)>();
    let mut slots = Vec::new();
    for (hud, child_of, sprite) in q.iter(&world) {
        assert_eq!(child_of.parent(), camera);
        assert_eq!(sprite.color.to_srgba().alpha, 0.0, "HUD starts transparent");
        slots.push(hud.slot);
    }
    slots.sort_by_key(|s| format!("{s:?}"));
    assert_eq!(slots.len(), 3);
    assert!(slots.contains(&HudSlot::Equipped));
    assert!(slots.contains(&HudSlot::StashedLeft));
    assert!(slots.contains(&HudSlot::StashedRight));
}

#[test]
fn ensure_hud_is_idempotent() {
    let mut world = World::new();
    spawn_hud_world(&mut world);
    run_system_once(&mut world, ensure_hud);

    let count = world.query::<&HudWeapon>().iter(&world).count();
    assert_eq!(count, 3);
}

#[test]
fn ensure_hud_waits_for_a_camera() {
    let mut world = World::new();
    run_system_once(&mut world, ensure_hud);
    assert_eq!(world.query::<&HudWeapon>().iter(&world).count(), 0);
}

#[test]
fn belt_broadcast_swaps_sprite_and_fades_in() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    spawn_hud_world(&mut world);
    init_messages::<EquippedWeaponChanged>(&mut world);
    init_messages::<StashedWeaponChanged>(&mut world);

    let sword = world
        .spawn(Weapon {
            kind: WeaponKind::Sword,
            speed: WeaponKind::Sword.lob_speed(),
        })
        .id();

    write_message(
        &mut world,
        EquippedWeaponChanged {
            weapon: sword,
            initial: true,
        },
    );
    run_system_once(&mut world, on_belt_display_changed);

    let mut q = world.query::<(&HudWeapon, &Sprite, &SpriteFade)>();
    let mut matched = 0;
    for (hud, sprite, fade) in q.iter(&world) {
        assert_eq!(hud.slot, HudSlot::Equipped);
        // New sprite carries the weapon tint, snapped to zero alpha.
        let shown = sprite.color.to_srgba();
        let tint = WeaponKind::Sword.tint().to_srgba();
        assert_eq!(shown.red, tint.red);
        assert_eq!(shown.alpha, 0.0);
        assert_eq!(fade.target_alpha, 1.0);
        matched += 1;
    }
    assert_eq!(matched, 1, "only the equipped HUD slot changes");
}

#[test]
fn stashed_broadcast_targets_its_side() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    spawn_hud_world(&mut world);
    init_messages::<EquippedWeaponChanged>(&mut world);
    init_messages::<StashedWeaponChanged>(&mut world);

    let axe = world
        .spawn(Weapon {
            kind: WeaponKind::Axe,
            speed: WeaponKind::Axe.lob_speed(),
        })
        .id();

    write_message(
        &mut world,
        StashedWeaponChanged {
            weapon: axe,
            side: BeltSide::Right,
            initial: false,
        },
    );
    run_system_once(&mut world, on_belt_display_changed);

    let mut q = world.query::<(&HudWeapon, &SpriteFade)>();
    let touched: Vec<HudSlot> = q.iter(&world).map(|(hud, _)| hud.slot).collect();
    assert_eq!(touched, vec![HudSlot::StashedRight]);
}

#[test]
fn fade_hud_retargets_every_sprite() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    spawn_hud_world(&mut world);
    init_messages::<FadeHud>(&mut world);

    write_message(&mut world, FadeHud { hidden: true });
    run_system_once(&mut world, on_fade_hud);

    let mut q = world.query::<(&HudWeapon, &SpriteFade)>();
    let fades: Vec<f32> = q.iter(&world).map(|(_, f)| f.target_alpha).collect();
    assert_eq!(fades.len(), 3);
    assert!(fades.iter().all(|t| *t == 0.0));

    // Showing again flips the target back up.
    write_message(&mut world, FadeHud { hidden: false });
    run_system_once(&mut world, on_fade_hud);

    let mut q = world.query::<(&HudWeapon, &SpriteFade)>();
    assert!(q.iter(&world).all(|(_, f)| f.target_alpha == 1.0));
}

#[test]
fn reposition_anchors_hud_to_the_window() {
    let mut world = World::new();
    let tunables = Tunables::default();
    world.insert_resource(tunables.clone());
    spawn_hud_world(&mut world);
    init_messages::<WindowResized>(&mut world);

    world.spawn((
        Window {
            resolution: WindowResolution::new(800, 600),
            ..default()
        },
        PrimaryWindow,
    ));

    run_system_once(&mut world, reposition_hud);

    let mut q = world.query::<(&HudWeapon, &Sprite, &Transform)>();
    for (hud, sprite, tf) in q.iter(&world) {
        let size = sprite.custom_size.unwrap();
        let expected_y = 300.0 - tunables.hud_top_margin - size.y * 0.5;
        assert!((tf.translation.y - expected_y).abs() < 1e-4);
        assert_eq!(tf.translation.z, tunables.hud_z);

        match hud.slot {
            HudSlot::Equipped => assert_eq!(tf.translation.x, 0.0),
            HudSlot::StashedLeft => assert!(tf.translation.x < 0.0),
            HudSlot::StashedRight => assert!(tf.translation.x > 0.0),
        }
    }
}

mod common;

use dreadhold::plugins::inventory::WeaponBelt;
use dreadhold::plugins::weapons::Weapon;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn belt_initializes_from_the_player_spawn() {
    let mut app = common::app_headless();

    // Frame 1: OnEnter spawns player + weapons and writes InitWeapons;
    // frame 2 at the latest, the inventory has built the belt.
    app.update();
    app.update();

    let belt = app
        .world_mut()
        .get_resource::<WeaponBelt>()
        .expect("belt resource after init")
        .clone();

    // All three slots point at live weapon entities.
    for slot in [belt.left(), belt.equipped(), belt.right()] {
        assert!(app.world().get::<Weapon>(slot).is_some());
    }

    // Exactly one weapon sways: the equipped one.
    let swaying = app
        .world_mut()
        .query::<&dreadhold::plugins::weapons::WeaponSway>()
        .iter(app.world())
        .filter(|s| s.enabled)
        .count();
    assert_eq!(swaying, 1);

    // The broadcast reached the lobbing side.
    let equipped = app
        .world()
        .resource::<dreadhold::plugins::lobber::EquippedWeapon>();
    assert_eq!(equipped.0, Some(belt.equipped()));
}

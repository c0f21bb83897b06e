use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::{drain_messages, init_messages, run_system_once};
use crate::plugins::inventory::messages::LevelLoading;

#[test]
fn spawns_walls_and_ledges_on_enter() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_arena);

    let mut walls = 0;
    let mut ledges = 0;
    for (name, rb) in world.query::<(&Name, &RigidBody)>().iter(&world) {
        assert!(matches!(*rb, RigidBody::Static));
        if name.as_str().starts_with("Wall") {
            walls += 1;
        }
        if name.as_str().starts_with("Ledge") {
            ledges += 1;
        }
    }
    assert_eq!(walls, 4);
    assert_eq!(ledges, super::LEDGES.len());
}

#[test]
fn announces_a_level_load() {
    let mut world = World::new();
    init_messages::<LevelLoading>(&mut world);

    run_system_once(&mut world, super::announce_level_load);

    let msgs: Vec<LevelLoading> = drain_messages(&mut world);
    assert_eq!(msgs.len(), 1);
}

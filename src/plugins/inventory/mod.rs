//! Weapon belt: the three-slot equip rotation.
//!
//! Data model: three weapon entities in fixed slots, plus three role indices
//! (left / equipped / right) forming a permutation of {0,1,2}. Switching
//! rotates the roles over the slots; the slot array itself never moves.
//! Exactly one slot is equipped at all times, relative left/right order is
//! preserved, and three switches land back on the initial layout.
//!
//! Message flow:
//! ```text
//! InitWeapons ──▶ on_init_weapons ──▶ belt resource + weapon setup
//! SwitchWeapon ─▶ on_switch_weapon ─▶ rotate + weapon setup   (unless locked)
//! LevelLoading ─▶ on_level_loading ─▶ engage SwitchLock, timed release
//!
//! setup broadcasts: StashedWeaponChanged ×2, EquippedWeaponChanged,
//!                   NewEquippedWeapon
//! ```

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::weapons::{self, Weapon, WeaponPart, WeaponSway, disabled_weapon_layers};

pub mod messages;

use messages::{
    BeltSide, EquippedWeaponChanged, InitWeapons, LevelLoading, NewEquippedWeapon,
    StashedWeaponChanged, SwitchWeapon,
};

#[derive(Resource, Debug, Clone)]
pub struct WeaponBelt {
    slots: [Entity; 3],
    left: usize,
    equipped: usize,
    right: usize,
}

impl WeaponBelt {
    pub fn new(left: Entity, equipped: Entity, right: Entity) -> Self {
        Self {
            slots: [left, equipped, right],
            left: 0,
            equipped: 1,
            right: 2,
        }
    }

    pub fn left(&self) -> Entity {
        self.slots[self.left]
    }

    pub fn equipped(&self) -> Entity {
        self.slots[self.equipped]
    }

    pub fn right(&self) -> Entity {
        self.slots[self.right]
    }

    /// One switch step: equip the left weapon, stash the equipped one on the
    /// right, wrap the right one around to the left.
    pub fn rotate(&mut self) {
        (self.left, self.equipped, self.right) = match self.equipped {
            0 => (1, 2, 0),
            1 => (2, 0, 1),
            2 => (0, 1, 2),
            _ => unreachable!("belt roles index exactly three slots"),
        };
    }

    /// Current (left, equipped, right) role indices.
    pub fn roles(&self) -> (usize, usize, usize) {
        (self.left, self.equipped, self.right)
    }
}

/// Switch gate while a level loads.
#[derive(Resource, Debug)]
pub struct SwitchLock {
    locked: bool,
    timer: Timer,
}

impl Default for SwitchLock {
    fn default() -> Self {
        Self {
            locked: false,
            timer: Timer::from_seconds(0.0, TimerMode::Once),
        }
    }
}

impl SwitchLock {
    pub fn engage(&mut self, seconds: f32) {
        self.locked = true;
        self.timer = Timer::from_seconds(seconds, TimerMode::Once);
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Advance the release timer; unlocks once the pause has elapsed.
    pub fn tick(&mut self, delta: std::time::Duration) {
        if !self.locked {
            return;
        }
        self.timer.tick(delta);
        if self.timer.is_finished() {
            self.locked = false;
        }
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SwitchLock>();

    app.add_message::<InitWeapons>()
        .add_message::<SwitchWeapon>()
        .add_message::<LevelLoading>()
        .add_message::<StashedWeaponChanged>()
        .add_message::<EquippedWeaponChanged>()
        .add_message::<NewEquippedWeapon>();

    // Chained so a load lock lands before any switch in the same frame.
    app.add_systems(
        Update,
        (
            on_level_loading,
            tick_switch_lock,
            on_init_weapons,
            on_switch_weapon,
        )
            .chain(),
    );
}

fn on_level_loading(
    tunables: Res<Tunables>,
    mut lock: ResMut<SwitchLock>,
    mut reader: MessageReader<LevelLoading>,
) {
    for _ in reader.read() {
        lock.engage(tunables.switch_pause_on_load);
    }
}

fn tick_switch_lock(time: Res<Time>, mut lock: ResMut<SwitchLock>) {
    lock.tick(time.delta());
}

fn on_init_weapons(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<InitWeapons>,
    mut stashed_out: MessageWriter<StashedWeaponChanged>,
    mut equipped_out: MessageWriter<EquippedWeaponChanged>,
    mut manager_out: MessageWriter<NewEquippedWeapon>,
    mut q_weapons: Query<(&mut WeaponSway, &mut CollisionLayers), With<Weapon>>,
    q_parts: Query<(Entity, &ChildOf), With<WeaponPart>>,
) {
    let Some(init) = reader.read().last().copied() else {
        return;
    };

    let belt = WeaponBelt::new(init.left, init.equipped, init.right);
    setup_weapons(&mut commands, &tunables, &belt, &mut q_weapons, &q_parts);
    broadcast(
        &belt,
        true,
        &mut stashed_out,
        &mut equipped_out,
        &mut manager_out,
    );
    commands.insert_resource(belt);
}

fn on_switch_weapon(
    mut commands: Commands,
    tunables: Res<Tunables>,
    lock: Res<SwitchLock>,
    belt: Option<ResMut<WeaponBelt>>,
    mut reader: MessageReader<SwitchWeapon>,
    mut stashed_out: MessageWriter<StashedWeaponChanged>,
    mut equipped_out: MessageWriter<EquippedWeaponChanged>,
    mut manager_out: MessageWriter<NewEquippedWeapon>,
    mut q_weapons: Query<(&mut WeaponSway, &mut CollisionLayers), With<Weapon>>,
    q_parts: Query<(Entity, &ChildOf), With<WeaponPart>>,
) {
    let requested = reader.read().count();
    if requested == 0 {
        return;
    }

    let Some(mut belt) = belt else {
        debug!("weapon switch before belt init; dropped");
        return;
    };

    if lock.locked() {
        debug!("weapon switch ignored while a level loads");
        return;
    }

    // One rotation per request; setup and broadcast coalesce per frame.
    for _ in 0..requested {
        belt.rotate();
    }

    setup_weapons(&mut commands, &tunables, &belt, &mut q_weapons, &q_parts);
    broadcast(
        &belt,
        false,
        &mut stashed_out,
        &mut equipped_out,
        &mut manager_out,
    );
}

/// Re-assert the belt invariants on all three weapons.
///
/// Runs on init and after every rotation: weapon-collider layer membership
/// with filters empty (attack colliders only open during attacks), sway only
/// on the equipped weapon, equipped sprites fading in, stashed fading out.
fn setup_weapons(
    commands: &mut Commands,
    tunables: &Tunables,
    belt: &WeaponBelt,
    q_weapons: &mut Query<(&mut WeaponSway, &mut CollisionLayers), With<Weapon>>,
    q_parts: &Query<(Entity, &ChildOf), With<WeaponPart>>,
) {
    let fade_time = tunables.weapon_fade_time;

    for (weapon, equipped) in [
        (belt.left(), false),
        (belt.equipped(), true),
        (belt.right(), false),
    ] {
        let Ok((mut sway, mut layers)) = q_weapons.get_mut(weapon) else {
            warn!("belt slot {weapon:?} is missing weapon components");
            continue;
        };

        sway.enabled = equipped;
        *layers = disabled_weapon_layers();

        let target = if equipped { 1.0 } else { 0.0 };
        weapons::fade_parts(commands, weapon, q_parts, target, 0.0, fade_time);
    }
}

fn broadcast(
    belt: &WeaponBelt,
    initial: bool,
    stashed_out: &mut MessageWriter<StashedWeaponChanged>,
    equipped_out: &mut MessageWriter<EquippedWeaponChanged>,
    manager_out: &mut MessageWriter<NewEquippedWeapon>,
) {
    stashed_out.write(StashedWeaponChanged {
        weapon: belt.left(),
        side: BeltSide::Left,
        initial,
    });
    equipped_out.write(EquippedWeaponChanged {
        weapon: belt.equipped(),
        initial,
    });
    stashed_out.write(StashedWeaponChanged {
        weapon: belt.right(),
        side: BeltSide::Right,
        initial,
    });
    manager_out.write(NewEquippedWeapon {
        weapon: belt.equipped(),
    });
}

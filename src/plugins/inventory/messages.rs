//! Belt signals.
//!
//! The belt talks to the rest of the game exclusively over these messages:
//! producers write intent, consumers read it. Nothing outside this plugin
//! mutates the belt resource.

use bevy::prelude::*;

/// Which stashed slot a weapon sits in, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeltSide {
    Left,
    Right,
}

/// Hand the belt its three weapons. Sent once the weapon entities exist.
#[derive(Message, Debug, Clone, Copy)]
pub struct InitWeapons {
    pub equipped: Entity,
    pub left: Entity,
    pub right: Entity,
}

/// Rotate the belt one step.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct SwitchWeapon;

/// A level is loading; weapon switching pauses for a beat.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct LevelLoading;

/// Broadcast: a stashed slot's weapon changed.
#[derive(Message, Debug, Clone, Copy)]
pub struct StashedWeaponChanged {
    pub weapon: Entity,
    pub side: BeltSide,
    /// True on the first broadcast after belt init.
    pub initial: bool,
}

/// Broadcast: the equipped slot's weapon changed.
#[derive(Message, Debug, Clone, Copy)]
pub struct EquippedWeaponChanged {
    pub weapon: Entity,
    pub initial: bool,
}

/// Broadcast: the weapon attacks should come from now.
#[derive(Message, Debug, Clone, Copy)]
pub struct NewEquippedWeapon {
    pub weapon: Entity,
}

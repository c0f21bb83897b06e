//! Global state machine.
//!
//! A single in-game state is enough here: level loads are signalled over
//! messages (see the inventory plugin), not modelled as states.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}

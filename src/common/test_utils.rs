//! Test helpers.
//!
//! `World::run_system_once` (via the `RunSystemOnce` trait) executes a system
//! without building a schedule. Systems that use `Commands` enqueue structural
//! changes, so we `world.flush()` after running and before asserting.
//!
//! Message-driven systems need their `Messages<M>` storage to exist before the
//! reader/writer params validate; the helpers below take care of that.

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Ensure message storage for `M` exists.
pub fn init_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Queue a message so the next reader that runs sees it.
pub fn write_message<M: Message>(world: &mut World, msg: M) {
    init_messages::<M>(world);
    world.write_message(msg);
}

/// Drain every queued message of a type, for asserting on broadcasts.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    init_messages::<M>(world);
    world.resource_mut::<Messages<M>>().drain().collect()
}

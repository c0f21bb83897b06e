//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    /// Weapon attack colliders. Filters stay empty outside attacks.
    WeaponCollider,
    Projectile,
}

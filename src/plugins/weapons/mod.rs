//! Weapon entities and their presentation plumbing.
//!
//! A weapon is one gameplay entity with three sprite part children (upper,
//! center, lower). Equip state never despawns anything: stashed weapons stay
//! in the world with sway off, attack collider filters empty, and sprites
//! faded to zero. Toggling equip state is therefore pure component writes,
//! no archetype moves.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::mathx::color::hex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    Sword,
    Hammer,
    Axe,
}

impl WeaponKind {
    /// Launch speed when lobbed, in metres per second. All three sit inside
    /// the calibrated 8-20 band of the lob formula.
    pub fn lob_speed(self) -> f32 {
        match self {
            WeaponKind::Sword => 12.0,
            WeaponKind::Hammer => 9.0,
            WeaponKind::Axe => 16.0,
        }
    }

    pub fn tint(self) -> Color {
        let code = match self {
            WeaponKind::Sword => "9AB8D8",
            WeaponKind::Hammer => "C27B4A",
            WeaponKind::Axe => "8FBF6A",
        };
        hex(code).expect("weapon tints are valid hex")
    }

    /// Sprite shown on the HUD belt display.
    pub fn hud_sprite(self) -> Sprite {
        Sprite {
            color: self.tint(),
            custom_size: Some(Vec2::splat(22.0)),
            ..default()
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Weapon {
    pub kind: WeaponKind,
    /// Lob launch speed, metres per second.
    pub speed: f32,
}

/// The three sprite parts hanging off a weapon.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponPart {
    Upper,
    Center,
    Lower,
}

/// Idle sway for the equipped weapon. Stashed weapons keep the component
/// with `enabled` off and snap back to their rest offset.
#[derive(Component, Debug, Clone)]
pub struct WeaponSway {
    pub enabled: bool,
    pub phase: f32,
    pub rest_offset: Vec2,
}

/// Delayed, duration-based alpha fade on a sprite.
///
/// Inserting a fade replaces any fade already running on the entity, which
/// is exactly the "kill the old tween first" behaviour the equip flow needs.
#[derive(Component, Debug, Clone)]
pub struct SpriteFade {
    pub target_alpha: f32,
    delay: Timer,
    fade: Timer,
    from_alpha: Option<f32>,
}

impl SpriteFade {
    pub fn new(target_alpha: f32, delay: f32, duration: f32) -> Self {
        Self {
            target_alpha,
            delay: Timer::from_seconds(delay, TimerMode::Once),
            fade: Timer::from_seconds(duration.max(1e-4), TimerMode::Once),
            from_alpha: None,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(Update, (drive_sprite_fades, sway_weapons));
}

/// Attack collider intent: member of WeaponCollider, colliding with nothing.
/// Filters only open during an attack, which re-targets this value.
#[inline]
pub fn disabled_weapon_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::WeaponCollider, [] as [Layer; 0])
}

/// Spawn one weapon with its three sprite parts, parented to `owner`.
pub fn spawn_weapon(
    commands: &mut Commands,
    owner: Entity,
    kind: WeaponKind,
    rest_offset: Vec2,
) -> Entity {
    let tint = kind.tint();

    let weapon = commands
        .spawn((
            Name::new(format!("Weapon({kind:?})")),
            Weapon {
                kind,
                speed: kind.lob_speed(),
            },
            WeaponSway {
                enabled: false,
                phase: 0.0,
                rest_offset,
            },
            Transform::from_translation(rest_offset.extend(0.5)),
            Visibility::default(),
            Collider::rectangle(10.0, 24.0),
            disabled_weapon_layers(),
            ChildOf(owner),
        ))
        .id();

    for (part, local_y, size) in [
        (WeaponPart::Upper, 8.0, Vec2::new(6.0, 10.0)),
        (WeaponPart::Center, 0.0, Vec2::new(8.0, 8.0)),
        (WeaponPart::Lower, -8.0, Vec2::new(5.0, 10.0)),
    ] {
        commands.spawn((
            Name::new(format!("WeaponPart({part:?})")),
            part,
            Sprite {
                color: tint,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(0.0, local_y, 0.05),
            ChildOf(weapon),
        ));
    }

    weapon
}

/// Start (replacing) a fade on every sprite part of `weapon`.
pub fn fade_parts(
    commands: &mut Commands,
    weapon: Entity,
    q_parts: &Query<(Entity, &ChildOf), With<WeaponPart>>,
    target_alpha: f32,
    delay: f32,
    duration: f32,
) {
    for (part, child_of) in q_parts.iter() {
        if child_of.parent() == weapon {
            commands
                .entity(part)
                .insert(SpriteFade::new(target_alpha, delay, duration));
        }
    }
}

fn drive_sprite_fades(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut SpriteFade, &mut Sprite)>,
) {
    for (e, mut fade, mut sprite) in &mut q {
        fade.delay.tick(time.delta());
        if !fade.delay.is_finished() {
            continue;
        }

        // Capture the starting alpha on the first active frame so a fade
        // that replaced another picks up wherever the sprite actually is.
        let from = *fade
            .from_alpha
            .get_or_insert_with(|| sprite.color.to_srgba().alpha);

        fade.fade.tick(time.delta());
        let t = fade.fade.fraction();
        let alpha = from + (fade.target_alpha - from) * t;

        let mut c = sprite.color.to_srgba();
        c.alpha = alpha;
        sprite.color = c.into();

        if fade.fade.is_finished() {
            commands.entity(e).remove::<SpriteFade>();
        }
    }
}

fn sway_weapons(time: Res<Time>, mut q: Query<(&mut WeaponSway, &mut Transform), With<Weapon>>) {
    for (mut sway, mut tf) in &mut q {
        if !sway.enabled {
            // Snap back to rest so a stash mid-swing doesn't freeze off-pose.
            tf.translation.x = sway.rest_offset.x;
            tf.translation.y = sway.rest_offset.y;
            continue;
        }

        sway.phase += time.delta_secs();
        let bob = (sway.phase * 1.6 * std::f32::consts::TAU).sin() * 1.5;
        tf.translation.x = sway.rest_offset.x;
        tf.translation.y = sway.rest_offset.y + bob;
    }
}

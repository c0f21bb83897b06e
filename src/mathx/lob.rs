//! Closed-form launch velocity for lobbed projectiles.

use bevy::prelude::*;

/// Speed band the compensation table below was tuned over.
pub const MIN_CALIBRATED_SPEED: f32 = 8.0;
pub const MAX_CALIBRATED_SPEED: f32 = 20.0;

/// Launch velocity that lobs a projectile from `origin` so it comes down on
/// `target`.
///
/// This is an empirical approximation, not a ballistic solve: it takes the
/// straight-line angle to the target and bends it upward by a correction
/// proportional to horizontal distance. Accuracy holds for projectiles with
/// gravity scale 0.5, angular damping 0.05 and mass 1, at speeds between 8
/// and 20 world units per second. Outside that band the shot still fires,
/// just with degrading accuracy.
///
/// The returned vector's magnitude is exactly `speed`.
pub fn lob_velocity(speed: f32, origin: Vec2, target: Vec2) -> Vec2 {
    let distance = target.x - origin.x;
    let y_difference = target.y - origin.y;
    let angle_to_point = (target.y - origin.y).atan2(target.x - origin.x);

    let comp = speed_compensation(speed);

    // Scale the bend by horizontal distance, adjusted for how far the target
    // sits above or below the origin. Targets more than two units below need
    // a smaller adjustment: the arc gains energy on the way down.
    let mut distance_factor = 0.034 * comp;
    let distance_compensation = if y_difference >= -2.0 {
        0.001 * comp
    } else {
        0.00065 * comp
    };
    distance_factor += y_difference * distance_compensation;

    // Tuned against 3.14, not PI; changing it shifts every calibrated arc.
    let angle_correction = (3.14 * 0.18) * (distance * distance_factor);

    Vec2::new(
        (angle_to_point + angle_correction).cos() * speed,
        (angle_to_point + angle_correction).sin() * speed,
    )
}

/// Per-speed correction constant.
///
/// Faster projectiles fly flatter arcs and need less bend. The table was
/// tuned one unit band at a time; speeds below 8 reuse the steepest value,
/// speeds of 20 and above the flattest.
pub fn speed_compensation(speed: f32) -> f32 {
    if speed < 8.0 {
        3.2
    } else if speed < 9.0 {
        2.2
    } else if speed < 10.0 {
        1.85
    } else if speed < 11.0 {
        1.5
    } else if speed < 12.0 {
        1.25
    } else if speed < 13.0 {
        1.0
    } else if speed < 14.0 {
        0.85
    } else if speed < 15.0 {
        0.75
    } else if speed < 16.0 {
        0.65
    } else if speed < 17.0 {
        0.55
    } else if speed < 18.0 {
        0.5
    } else if speed < 19.0 {
        0.45
    } else if speed < 20.0 {
        0.4
    } else {
        0.35
    }
}

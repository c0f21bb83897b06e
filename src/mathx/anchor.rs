//! Screen-relative anchor positioning for HUD sprites.
//!
//! Positions are camera-local: origin at the viewport centre, +y up, units
//! in logical pixels. A HUD entity parented to the camera can use the result
//! as its translation directly.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl HudAnchor {
    pub const ALL: [HudAnchor; 9] = [
        HudAnchor::TopLeft,
        HudAnchor::TopCenter,
        HudAnchor::TopRight,
        HudAnchor::MiddleLeft,
        HudAnchor::MiddleCenter,
        HudAnchor::MiddleRight,
        HudAnchor::BottomLeft,
        HudAnchor::BottomCenter,
        HudAnchor::BottomRight,
    ];
}

/// Camera-local centre position for a sprite of `size` placed at `anchor`.
///
/// `inset` meaning depends on the anchored axis:
/// - left/right columns and top/bottom rows: distance in from that edge, so
///   a positive `inset.y` moves *down* from the top and *up* from the bottom;
/// - centred columns/rows: a signed nudge from the centre (+x right, +y up).
///
/// The sprite's own extent is accounted for on anchored edges, so an inset of
/// zero puts the sprite flush against the viewport border, fully on screen.
pub fn anchored(anchor: HudAnchor, viewport: Vec2, inset: Vec2, size: Vec2) -> Vec2 {
    let half = viewport * 0.5;
    let left_x = -half.x + inset.x + size.x * 0.5;
    let right_x = half.x - inset.x - size.x * 0.5;
    let top_y = half.y - inset.y - size.y * 0.5;
    let bottom_y = -half.y + inset.y + size.y * 0.5;

    match anchor {
        HudAnchor::TopLeft => Vec2::new(left_x, top_y),
        HudAnchor::TopCenter => Vec2::new(inset.x, top_y),
        HudAnchor::TopRight => Vec2::new(right_x, top_y),
        HudAnchor::MiddleLeft => Vec2::new(left_x, inset.y),
        HudAnchor::MiddleCenter => Vec2::new(inset.x, inset.y),
        HudAnchor::MiddleRight => Vec2::new(right_x, inset.y),
        HudAnchor::BottomLeft => Vec2::new(left_x, bottom_y),
        HudAnchor::BottomCenter => Vec2::new(inset.x, bottom_y),
        HudAnchor::BottomRight => Vec2::new(right_x, bottom_y),
    }
}

//! Which side of an entity a contact came from.
//!
//! Sprites in this game mirror by sign-flipping their scale, so "the side
//! that was hit" is relative to facing, not to world axes.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSide {
    Top,
    Bottom,
}

/// Facing-relative side of `transform` that `world_point` sits on.
///
/// Facing is read off the sign of `scale.x`: a mirrored sprite flips the
/// answer. Scales with magnitude below one carry no facing information and
/// yield `None`.
pub fn horizontal_side_hit(transform: &Transform, world_point: Vec2) -> Option<HorizontalSide> {
    let local = to_local(transform, world_point);

    if transform.scale.x >= 1.0 {
        return Some(if local.x > 0.0 {
            HorizontalSide::Right
        } else {
            HorizontalSide::Left
        });
    }

    if transform.scale.x <= -1.0 {
        return Some(if local.x < 0.0 {
            HorizontalSide::Right
        } else {
            HorizontalSide::Left
        });
    }

    None
}

/// Same as [`horizontal_side_hit`], on the vertical axis.
pub fn vertical_side_hit(transform: &Transform, world_point: Vec2) -> Option<VerticalSide> {
    let local = to_local(transform, world_point);

    if transform.scale.y >= 1.0 {
        return Some(if local.y > 0.0 {
            VerticalSide::Top
        } else {
            VerticalSide::Bottom
        });
    }

    if transform.scale.y <= -1.0 {
        return Some(if local.y < 0.0 {
            VerticalSide::Top
        } else {
            VerticalSide::Bottom
        });
    }

    None
}

fn to_local(transform: &Transform, world_point: Vec2) -> Vec2 {
    transform
        .compute_affine()
        .inverse()
        .transform_point3(world_point.extend(0.0))
        .truncate()
}

#![cfg(test)]

use approx::assert_relative_eq;
use bevy::prelude::*;

use super::anchor::{self, HudAnchor};
use super::color::{hex, HexColorError};
use super::lob::{lob_velocity, speed_compensation};
use super::side::{horizontal_side_hit, vertical_side_hit, HorizontalSide, VerticalSide};

// -----------------------------------------------------------------------------
// Lob formula
// -----------------------------------------------------------------------------

#[test]
fn speed_compensation_matches_calibration_table() {
    let table = [
        (0.0, 3.2),
        (7.9, 3.2),
        (8.0, 2.2),
        (8.9, 2.2),
        (9.0, 1.85),
        (10.0, 1.5),
        (11.0, 1.25),
        (12.0, 1.0),
        (12.9, 1.0),
        (13.0, 0.85),
        (14.0, 0.75),
        (15.0, 0.65),
        (16.0, 0.55),
        (17.0, 0.5),
        (18.0, 0.45),
        (19.0, 0.4),
        (19.9, 0.4),
        (20.0, 0.35),
        (25.0, 0.35),
    ];

    for (speed, expected) in table {
        assert_eq!(
            speed_compensation(speed),
            expected,
            "compensation for speed {speed}"
        );
    }
}

#[test]
fn lob_magnitude_equals_launch_speed() {
    let cases = [
        (12.0, Vec2::ZERO, Vec2::new(14.0, 0.0)),
        (9.0, Vec2::new(-3.0, 2.0), Vec2::new(8.0, -5.0)),
        (16.0, Vec2::new(5.0, -1.0), Vec2::new(-20.0, 4.0)),
        (25.0, Vec2::ZERO, Vec2::new(30.0, 10.0)),
    ];

    for (speed, origin, target) in cases {
        let v = lob_velocity(speed, origin, target);
        assert_relative_eq!(v.length(), speed, max_relative = 1e-5);
    }
}

#[test]
fn lob_bends_upward_toward_level_targets() {
    // Level shot to the right: the straight-line angle is zero, so any
    // vertical component comes from the correction.
    let v = lob_velocity(12.0, Vec2::ZERO, Vec2::new(10.0, 0.0));
    assert!(v.x > 0.0);
    assert!(v.y > 0.0, "expected an upward bend, got {v:?}");
}

#[test]
fn lob_is_mirror_symmetric_for_level_shots() {
    let right = lob_velocity(12.0, Vec2::ZERO, Vec2::new(10.0, 0.0));
    let left = lob_velocity(12.0, Vec2::ZERO, Vec2::new(-10.0, 0.0));

    assert_relative_eq!(left.y, right.y, max_relative = 1e-5);
    assert_relative_eq!(left.x, -right.x, max_relative = 1e-5);
}

#[test]
fn lob_correction_flattens_as_speed_rises() {
    // Same geometry, rising speeds: the bend above the line of sight should
    // shrink band over band.
    let origin = Vec2::ZERO;
    let target = Vec2::new(12.0, 0.0);

    let mut last_bend = f32::INFINITY;
    for speed in [8.0, 10.0, 12.0, 15.0, 19.0, 25.0] {
        let v = lob_velocity(speed, origin, target);
        let bend = v.y.atan2(v.x);
        assert!(
            bend < last_bend,
            "bend did not shrink at speed {speed}: {bend} vs {last_bend}"
        );
        last_bend = bend;
    }
}

#[test]
fn lob_distance_compensation_switches_two_units_below_origin() {
    // Just above and just below the -2 displacement threshold. The steeper
    // coefficient applies above it, so the corrections must differ.
    let above = lob_velocity(12.0, Vec2::ZERO, Vec2::new(10.0, -2.0));
    let below = lob_velocity(12.0, Vec2::ZERO, Vec2::new(10.0, -2.001));

    let bend_above = above.y.atan2(above.x);
    let bend_below = below.y.atan2(below.x);

    // A continuous formula would move by ~1e-6 over this step; the branch
    // makes the jump visibly larger.
    assert!((bend_above - bend_below).abs() > 1e-4);
}

// -----------------------------------------------------------------------------
// Side detection
// -----------------------------------------------------------------------------

#[test]
fn horizontal_side_follows_facing() {
    let facing_right = Transform::default();
    assert_eq!(
        horizontal_side_hit(&facing_right, Vec2::new(3.0, 0.0)),
        Some(HorizontalSide::Right)
    );
    assert_eq!(
        horizontal_side_hit(&facing_right, Vec2::new(-3.0, 0.0)),
        Some(HorizontalSide::Left)
    );
}

#[test]
fn mirrored_scale_flips_horizontal_side() {
    let facing_left = Transform::from_scale(Vec3::new(-1.0, 1.0, 1.0));
    assert_eq!(
        horizontal_side_hit(&facing_left, Vec2::new(3.0, 0.0)),
        Some(HorizontalSide::Left)
    );
    assert_eq!(
        horizontal_side_hit(&facing_left, Vec2::new(-3.0, 0.0)),
        Some(HorizontalSide::Right)
    );
}

#[test]
fn side_respects_translation() {
    let tf = Transform::from_xyz(10.0, 0.0, 0.0);
    assert_eq!(
        horizontal_side_hit(&tf, Vec2::new(8.0, 0.0)),
        Some(HorizontalSide::Left)
    );
}

#[test]
fn vertical_side_and_flip() {
    let upright = Transform::default();
    assert_eq!(
        vertical_side_hit(&upright, Vec2::new(0.0, 2.0)),
        Some(VerticalSide::Top)
    );
    assert_eq!(
        vertical_side_hit(&upright, Vec2::new(0.0, -2.0)),
        Some(VerticalSide::Bottom)
    );

    let flipped = Transform::from_scale(Vec3::new(1.0, -1.0, 1.0));
    assert_eq!(
        vertical_side_hit(&flipped, Vec2::new(0.0, 2.0)),
        Some(VerticalSide::Bottom)
    );
}

#[test]
fn sub_unit_scale_has_no_facing() {
    let squashed = Transform::from_scale(Vec3::new(0.5, 0.5, 1.0));
    assert_eq!(horizontal_side_hit(&squashed, Vec2::new(3.0, 0.0)), None);
    assert_eq!(vertical_side_hit(&squashed, Vec2::new(0.0, 3.0)), None);
}

// -----------------------------------------------------------------------------
// Anchors
// -----------------------------------------------------------------------------

#[test]
fn top_left_is_inset_from_the_corner() {
    let viewport = Vec2::new(1280.0, 720.0);
    let pos = anchor::anchored(
        HudAnchor::TopLeft,
        viewport,
        Vec2::new(18.0, 14.0),
        Vec2::new(22.0, 22.0),
    );

    assert_relative_eq!(pos.x, -640.0 + 18.0 + 11.0);
    assert_relative_eq!(pos.y, 360.0 - 14.0 - 11.0);
}

#[test]
fn top_insets_move_down_bottom_insets_move_up() {
    let viewport = Vec2::new(800.0, 600.0);
    let size = Vec2::splat(20.0);

    let shallow = anchor::anchored(HudAnchor::TopCenter, viewport, Vec2::new(0.0, 5.0), size);
    let deep = anchor::anchored(HudAnchor::TopCenter, viewport, Vec2::new(0.0, 50.0), size);
    assert!(deep.y < shallow.y);

    let low = anchor::anchored(HudAnchor::BottomCenter, viewport, Vec2::new(0.0, 5.0), size);
    let high = anchor::anchored(HudAnchor::BottomCenter, viewport, Vec2::new(0.0, 50.0), size);
    assert!(high.y > low.y);
}

#[test]
fn centre_anchors_take_signed_nudges() {
    let viewport = Vec2::new(800.0, 600.0);
    let size = Vec2::splat(20.0);

    let pos = anchor::anchored(
        HudAnchor::MiddleCenter,
        viewport,
        Vec2::new(-5.0, 8.0),
        size,
    );
    assert_relative_eq!(pos.x, -5.0);
    assert_relative_eq!(pos.y, 8.0);
}

#[test]
fn every_anchor_stays_inside_the_viewport() {
    let viewport = Vec2::new(1024.0, 768.0);
    let inset = Vec2::new(10.0, 10.0);
    let size = Vec2::new(30.0, 30.0);

    for a in HudAnchor::ALL {
        let pos = anchor::anchored(a, viewport, inset, size);
        assert!(
            pos.x.abs() + size.x * 0.5 <= viewport.x * 0.5,
            "{a:?} overflows horizontally: {pos:?}"
        );
        assert!(
            pos.y.abs() + size.y * 0.5 <= viewport.y * 0.5,
            "{a:?} overflows vertically: {pos:?}"
        );
    }
}

// -----------------------------------------------------------------------------
// Hex colours
// -----------------------------------------------------------------------------

#[test]
fn hex_parses_channels() {
    let c = hex("FF8040").unwrap().to_srgba();
    assert_relative_eq!(c.red, 1.0, max_relative = 1e-5);
    assert_relative_eq!(c.green, 128.0 / 255.0, max_relative = 1e-5);
    assert_relative_eq!(c.blue, 64.0 / 255.0, max_relative = 1e-5);
    assert_relative_eq!(c.alpha, 1.0);
}

#[test]
fn hex_is_case_insensitive() {
    assert_eq!(hex("a0b1c2"), hex("A0B1C2"));
}

#[test]
fn hex_rejects_bad_input() {
    assert_eq!(hex("FFF"), Err(HexColorError::Length(3)));
    assert_eq!(hex("FF80401"), Err(HexColorError::Length(7)));
    assert!(matches!(hex("GG8040"), Err(HexColorError::Digit(_))));
}

#![allow(clippy::float_cmp)]

use super::*;
use crate::bone::ShapeKind;

const TOLERANCE: f64 = 1e-9;

// =============================================================
// Helpers
// =============================================================

/// Root (len 50, angle 0) at (200, 240) with one child (len 30).
fn two_bones(child_angle: f64, child_other_end: bool) -> Vec<Bone> {
    let mut root = Bone::new(50.0, 0.0, ShapeKind::Segment);
    root.is_root = true;
    root.children.push(BoneId(1));
    let mut child = Bone::new(30.0, child_angle, ShapeKind::Segment).with_other_end(child_other_end);
    child.parent = Some(BoneId(0));
    let mut bones = vec![root, child];
    kinematics::update(&mut bones, Point::new(200.0, 240.0));
    bones
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Hit regions
// =============================================================

#[test]
fn gimbal_tracks_bone_tip() {
    let bones = two_bones(0.0, false);
    assert_eq!(Gimbal::new(BoneId(0)).anchor(&bones), pt(250.0, 240.0));
}

#[test]
fn root_handle_tracks_root_start() {
    let bones = two_bones(0.0, false);
    assert_eq!(RootHandle::new(BoneId(0)).anchor(&bones), pt(200.0, 240.0));
}

#[test]
fn gimbal_hit_inside_radius() {
    let bones = two_bones(0.0, false);
    let g = Gimbal::new(BoneId(0));
    assert!(g.hit_test(&bones, pt(250.0, 240.0)));
    assert!(g.hit_test(&bones, pt(255.0, 245.0)));
}

#[test]
fn gimbal_hit_on_radius_boundary() {
    let bones = two_bones(0.0, false);
    assert!(Gimbal::new(BoneId(0)).hit_test(&bones, pt(250.0 + HANDLE_RADIUS, 240.0)));
}

#[test]
fn gimbal_miss_outside_circle() {
    let bones = two_bones(0.0, false);
    let g = Gimbal::new(BoneId(0));
    // Inside the bounding square but outside the circle.
    assert!(!g.hit_test(&bones, pt(258.0, 248.0)));
    assert!(!g.hit_test(&bones, pt(200.0, 240.0)));
}

#[test]
fn handle_enum_delegates() {
    let bones = two_bones(0.0, false);
    let g = Handle::Gimbal(Gimbal::new(BoneId(1)));
    let r = Handle::Root(RootHandle::new(BoneId(0)));
    assert_eq!(g.bone(), BoneId(1));
    assert_eq!(r.bone(), BoneId(0));
    assert_eq!(r.anchor(&bones), pt(200.0, 240.0));
    assert!(r.hit_test(&bones, pt(203.0, 238.0)));
    assert!(!g.hit_test(&bones, pt(203.0, 238.0)));
}

// =============================================================
// Gimbal drag
// =============================================================

#[test]
fn drag_root_gimbal_sets_absolute_angle() {
    let mut bones = two_bones(0.0, false);
    let angle = Gimbal::new(BoneId(0)).drag(&mut bones, pt(200.0, 200.0));
    assert_eq!(angle, Some(bones[0].angle));
    assert!((bones[0].angle - 90.0).abs() < TOLERANCE);
}

#[test]
fn drag_child_subtracts_propagated_angle() {
    let mut bones = two_bones(0.0, false);
    bones[0].angle = 30.0;
    kinematics::update(&mut bones, pt(200.0, 240.0));

    let start = bones[1].start;
    // Pointer straight up from the child's start: absolute 90.
    Gimbal::new(BoneId(1)).drag(&mut bones, pt(start.x, start.y - 40.0));
    assert!((bones[1].angle - 60.0).abs() < TOLERANCE);
    assert!((kinematics::absolute_angle(&bones, BoneId(1)) - 90.0).abs() < TOLERANCE);
}

#[test]
fn drag_other_end_child_uses_absolute_angle() {
    let mut bones = two_bones(0.0, true);
    bones[0].angle = 30.0;
    kinematics::update(&mut bones, pt(200.0, 240.0));

    // Independent branch starts at the root's start.
    Gimbal::new(BoneId(1)).drag(&mut bones, pt(150.0, 240.0));
    assert!((bones[1].angle - 180.0).abs() < TOLERANCE);
}

#[test]
fn drag_along_axis_is_applied() {
    let mut bones = two_bones(0.0, false);
    // Pure vertical drag below the start point.
    let angle = Gimbal::new(BoneId(0)).drag(&mut bones, pt(200.0, 300.0)).unwrap_or(f64::NAN);
    assert!((angle + 90.0).abs() < TOLERANCE);
}

#[test]
fn drag_at_start_point_is_skipped() {
    let mut bones = two_bones(45.0, false);
    let start = bones[1].start;
    assert!(Gimbal::new(BoneId(1)).drag(&mut bones, start).is_none());
    assert_eq!(bones[1].angle, 45.0);
}

#[test]
fn drag_does_not_move_endpoints_until_update() {
    let mut bones = two_bones(0.0, false);
    let tip_before = bones[0].tip;
    Gimbal::new(BoneId(0)).drag(&mut bones, pt(200.0, 100.0));
    assert_eq!(bones[0].tip, tip_before);
    kinematics::update(&mut bones, pt(200.0, 240.0));
    assert!((bones[0].tip.y - 190.0).abs() < 1e-6);
}

// =============================================================
// Root translation
// =============================================================

#[test]
fn translate_adds_pointer_delta() {
    let mut position = pt(200.0, 240.0);
    RootHandle::translate(&mut position, pt(10.0, 10.0), pt(25.0, 5.0));
    assert_eq!(position, pt(215.0, 235.0));
}

#[test]
fn translate_with_stationary_pointer_is_noop() {
    let mut position = pt(200.0, 240.0);
    for _ in 0..50 {
        RootHandle::translate(&mut position, pt(7.0, 9.0), pt(7.0, 9.0));
    }
    assert_eq!(position, pt(200.0, 240.0));
}

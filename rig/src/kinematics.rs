//! Forward kinematics: derive every bone's endpoints from the root down.
//!
//! Bones only store an angle relative to their ancestors. The absolute
//! orientation of a bone is its own angle plus the *propagated angle*: the sum
//! of its ancestors' angles, walking upward from the parent and stopping after
//! the first ancestor that starts an independent branch (`other_end`), or at
//! the root. A bone that is itself `other_end` inherits nothing.
//!
//! The propagated angle is recomputed from live ancestor state every time it
//! is needed, so a handle that rotates an ancestor is reflected in all
//! descendants on the very next pass.

#[cfg(test)]
#[path = "kinematics_test.rs"]
mod kinematics_test;

use crate::bone::{Bone, BoneId};
use crate::geom::Point;

/// Accumulated ancestor rotation for `id`, in degrees.
#[must_use]
pub fn propagated_angle(bones: &[Bone], id: BoneId) -> f64 {
    let bone = &bones[id.0];
    if bone.other_end {
        return 0.0;
    }

    let mut total = 0.0;
    let mut cursor = bone.parent;
    while let Some(parent_id) = cursor {
        let parent = &bones[parent_id.0];
        total += parent.angle;
        if parent.other_end {
            break;
        }
        cursor = parent.parent;
    }
    total
}

/// The bone's resolved orientation on screen, in degrees.
#[must_use]
pub fn absolute_angle(bones: &[Bone], id: BoneId) -> f64 {
    bones[id.0].angle + propagated_angle(bones, id)
}

/// Run one full preorder pass from the root at `bones[0]`, placing the root's
/// start at `position`.
pub fn update(bones: &mut [Bone], position: Point) {
    if bones.is_empty() {
        return;
    }
    update_subtree(bones, BoneId(0), position);
}

fn update_subtree(bones: &mut [Bone], id: BoneId, position: Point) {
    let start = anchor_point(bones, id, position);
    let absolute = absolute_angle(bones, id);

    let bone = &mut bones[id.0];
    bone.start = start;
    bone.tip = start.offset_polar(bone.length, absolute);

    // Endpoints are committed; children may now read them.
    for i in 0..bones[id.0].children.len() {
        let child = bones[id.0].children[i];
        update_subtree(bones, child, position);
    }
}

/// Where a bone starts: the world position for the root, the parent's start
/// for an independent branch, the parent's tip otherwise.
fn anchor_point(bones: &[Bone], id: BoneId, position: Point) -> Point {
    let bone = &bones[id.0];
    match bone.parent {
        _ if bone.is_root => position,
        Some(parent) if bone.other_end => bones[parent.0].start,
        Some(parent) => bones[parent.0].tip,
        None => position,
    }
}

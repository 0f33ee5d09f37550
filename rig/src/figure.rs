//! Figure: the whole articulated rig.
//!
//! A [`Figure`] owns every bone in a preorder arena (the root first, then
//! each subtree in document order) together with the world position that
//! seeds the root. Arena order doubles as the flattened bone list used for
//! hit dispatch, and guarantees that a parent is always updated before its
//! children.
//!
//! Captured frames live in the bones themselves: each bone's
//! `angle_history` and the root's `position_history` grow by exactly one
//! entry per [`Figure::add_frame`] call.

#[cfg(test)]
#[path = "figure_test.rs"]
mod figure_test;

use serde::Serialize;

use crate::bone::{Bone, BoneId};
use crate::definition::{BoneRecord, FigureDefinition, LoadError, materialize};
use crate::geom::Point;
use crate::handle::{Gimbal, Handle, RootHandle};
use crate::kinematics;

/// One captured frame, read back from the bone histories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pose {
    /// Relative angle of every bone, in document order.
    pub angles: Vec<f64>,
    /// The figure's world position.
    pub position: Point,
}

/// An articulated figure: a bone tree plus its world position.
#[derive(Debug, Clone)]
pub struct Figure {
    bones: Vec<Bone>,
    position: Point,
}

impl Figure {
    /// Build a figure from a parsed definition document.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if any record in the tree is invalid; no
    /// partial figure is produced.
    pub fn from_definition(def: &FigureDefinition, position: Point) -> Result<Self, LoadError> {
        Self::from_root_record(&def.bone, position)
    }

    /// Build a figure whose root is `root`. Endpoints are computed before
    /// returning.
    ///
    /// # Errors
    ///
    /// As [`Figure::from_definition`].
    pub fn from_root_record(root: &BoneRecord, position: Point) -> Result<Self, LoadError> {
        let bones = materialize(root)?;
        let mut figure = Self { bones, position };
        figure.update();
        tracing::info!(bones = figure.bones.len(), x = position.x, y = position.y, "figure loaded");
        Ok(figure)
    }

    // --- Queries ---

    #[must_use]
    pub fn root_id(&self) -> BoneId {
        BoneId(0)
    }

    #[must_use]
    pub fn root(&self) -> &Bone {
        &self.bones[0]
    }

    #[must_use]
    pub fn bone(&self, id: BoneId) -> Option<&Bone> {
        self.bones.get(id.0)
    }

    /// All bones in document order.
    #[must_use]
    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Always `false`: a figure has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// World position of the root's start point.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Accumulated ancestor rotation of a bone, from live angles.
    #[must_use]
    pub fn propagated_angle(&self, id: BoneId) -> Option<f64> {
        self.bone(id)?;
        Some(kinematics::propagated_angle(&self.bones, id))
    }

    /// Resolved on-screen orientation of a bone, from live angles.
    #[must_use]
    pub fn absolute_angle(&self, id: BoneId) -> Option<f64> {
        self.bone(id)?;
        Some(kinematics::absolute_angle(&self.bones, id))
    }

    // --- Mutation ---

    /// Set a bone's relative angle. Endpoints follow on the next update.
    /// Returns `false` for an unknown bone.
    pub fn set_angle(&mut self, id: BoneId, degrees: f64) -> bool {
        let Some(bone) = self.bones.get_mut(id.0) else {
            return false;
        };
        bone.angle = degrees;
        true
    }

    /// Move the figure. Endpoints follow on the next update.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Rotate the gimbal's bone toward `pointer`; `None` when skipped.
    pub(crate) fn drag_gimbal(&mut self, gimbal: Gimbal, pointer: Point) -> Option<f64> {
        gimbal.drag(&mut self.bones, pointer)
    }

    /// Translate by the pointer's movement since `previous`.
    pub(crate) fn drag_root(&mut self, previous: Point, pointer: Point) {
        RootHandle::translate(&mut self.position, previous, pointer);
    }

    /// Recompute every bone's endpoints in one preorder pass.
    pub fn update(&mut self) {
        kinematics::update(&mut self.bones, self.position);
    }

    // --- Input ---

    /// The first handle, in document order, whose hit region contains
    /// `point`. Each bone offers its gimbal first, then (root only) its
    /// translation handle.
    #[must_use]
    pub fn check_pressed(&self, point: Point) -> Option<Handle> {
        self.handles().find(|h| h.hit_test(&self.bones, point))
    }

    /// Every handle in hit-dispatch order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.bones.iter().enumerate().flat_map(|(i, bone)| {
            let id = BoneId(i);
            let root = bone.is_root.then_some(Handle::Root(RootHandle::new(id)));
            std::iter::once(Handle::Gimbal(Gimbal::new(id))).chain(root)
        })
    }

    // --- Frames ---

    /// Append the current pose to every bone's history. Returns the new
    /// frame count.
    pub fn add_frame(&mut self) -> usize {
        for bone in &mut self.bones {
            bone.angle_history.push(bone.angle);
        }
        let position = self.position;
        self.bones[0].position_history.push(position);

        let count = self.frame_count();
        tracing::info!(frame = count - 1, "frame captured");
        count
    }

    /// Number of captured frames, shared by every bone's history.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        let root = self.root();
        let count = root.angle_history.len();
        debug_assert!(
            self.bones.iter().all(|b| b.angle_history.len() == count),
            "angle histories diverged from root's {count}"
        );
        debug_assert_eq!(root.position_history.len(), count, "root position history diverged");
        count
    }

    /// Read back one captured frame.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<Pose> {
        let angles = self
            .bones
            .iter()
            .map(|b| b.angle_history.get(index).copied())
            .collect::<Option<Vec<_>>>()?;
        let position = *self.root().position_history.get(index)?;
        Some(Pose { angles, position })
    }
}

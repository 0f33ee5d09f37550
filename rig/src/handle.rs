//! Interactive handles: hit regions and the drag math behind them.
//!
//! A [`Gimbal`] sits on a bone's tip and rotates that bone toward the
//! pointer. A [`RootHandle`] sits on the root's start point and translates
//! the whole figure by the pointer's movement. Handles hold only a [`BoneId`];
//! their position is read from the bone's last FK pass every time it is
//! needed.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use crate::bone::{Bone, BoneId};
use crate::consts::HANDLE_RADIUS;
use crate::geom::Point;
use crate::kinematics;

/// Rotation handle bound to one bone's tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gimbal {
    bone: BoneId,
}

impl Gimbal {
    #[must_use]
    pub fn new(bone: BoneId) -> Self {
        Self { bone }
    }

    #[must_use]
    pub fn bone(self) -> BoneId {
        self.bone
    }

    /// The tracked point: the bone's tip.
    #[must_use]
    pub fn anchor(self, bones: &[Bone]) -> Point {
        bones[self.bone.0].tip
    }

    #[must_use]
    pub fn hit_test(self, bones: &[Bone], point: Point) -> bool {
        within_reach(self.anchor(bones), point)
    }

    /// Point the bone at `pointer` by rewriting its relative angle.
    ///
    /// Returns the new angle, or `None` when the pointer sits exactly on the
    /// bone's start point and no direction can be derived.
    pub fn drag(self, bones: &mut [Bone], pointer: Point) -> Option<f64> {
        let bone = &bones[self.bone.0];
        let target = (pointer - bone.start).screen_angle()?;
        let angle = if bone.other_end {
            target
        } else {
            target - kinematics::propagated_angle(bones, self.bone)
        };
        bones[self.bone.0].angle = angle;
        Some(angle)
    }
}

/// Translation handle bound to the root's start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootHandle {
    bone: BoneId,
}

impl RootHandle {
    #[must_use]
    pub fn new(bone: BoneId) -> Self {
        Self { bone }
    }

    #[must_use]
    pub fn bone(self) -> BoneId {
        self.bone
    }

    /// The tracked point: the root's start.
    #[must_use]
    pub fn anchor(self, bones: &[Bone]) -> Point {
        bones[self.bone.0].start
    }

    #[must_use]
    pub fn hit_test(self, bones: &[Bone], point: Point) -> bool {
        within_reach(self.anchor(bones), point)
    }

    /// Shift `position` by how far the pointer moved since `previous`.
    /// A stationary pointer leaves `position` untouched.
    pub fn translate(position: &mut Point, previous: Point, pointer: Point) {
        *position += pointer - previous;
    }
}

/// Which kind of handle a [`Handle`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    /// Rotates its bone.
    Gimbal,
    /// Translates the figure.
    Root,
}

/// Either kind of handle, as stored in the active-handle slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Gimbal(Gimbal),
    Root(RootHandle),
}

impl Handle {
    #[must_use]
    pub fn kind(self) -> HandleKind {
        match self {
            Self::Gimbal(_) => HandleKind::Gimbal,
            Self::Root(_) => HandleKind::Root,
        }
    }

    #[must_use]
    pub fn bone(self) -> BoneId {
        match self {
            Self::Gimbal(g) => g.bone(),
            Self::Root(r) => r.bone(),
        }
    }

    #[must_use]
    pub fn anchor(self, bones: &[Bone]) -> Point {
        match self {
            Self::Gimbal(g) => g.anchor(bones),
            Self::Root(r) => r.anchor(bones),
        }
    }

    #[must_use]
    pub fn hit_test(self, bones: &[Bone], point: Point) -> bool {
        match self {
            Self::Gimbal(g) => g.hit_test(bones, point),
            Self::Root(r) => r.hit_test(bones, point),
        }
    }
}

fn within_reach(anchor: Point, point: Point) -> bool {
    anchor.distance(point) <= HANDLE_RADIUS
}

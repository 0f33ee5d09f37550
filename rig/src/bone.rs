//! Bone entity: a rigid segment in the figure tree.
//!
//! A bone's authoritative state is its `length` and its relative `angle`.
//! Its `start` and `tip` points are derived by the forward-kinematics pass in
//! [`crate::kinematics`] and are only meaningful after the next full update.
//! Bones link to each other through [`BoneId`]s into the owning
//! [`crate::figure::Figure`]'s arena.

#[cfg(test)]
#[path = "bone_test.rs"]
mod bone_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Index of a bone in its figure. Ids follow document (preorder) order, so a
/// parent's id is always smaller than any of its descendants'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoneId(pub usize);

/// How a bone is drawn. Has no effect on kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Thick line between the two endpoints.
    #[default]
    Segment,
    /// Ring through both endpoints (e.g. a head).
    Disc,
}

impl ShapeKind {
    /// Map a definition `type` attribute to a shape. Only `"circle"` selects
    /// [`ShapeKind::Disc`]; anything else, or no attribute, is a segment.
    #[must_use]
    pub fn from_type_attr(raw: Option<&str>) -> Self {
        match raw {
            Some("circle") => Self::Disc,
            Some(other) => {
                tracing::debug!(shape = other, "unknown bone type, drawing as segment");
                Self::Segment
            }
            None => Self::Segment,
        }
    }
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Error returned when a color string is not three `|`-separated bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected color as \"r|g|b\" with components 0-255, got {0:?}")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse the definition format `"r|g|b"`, e.g. `"255|0|128"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let mut parts = s.split('|').map(|c| c.trim().parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(err());
        };
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.r, self.g, self.b)
    }
}

/// A rigid segment in the figure tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    /// Segment length, fixed at construction.
    pub(crate) length: f64,
    /// Degrees, relative to the propagated ancestor angle.
    pub(crate) angle: f64,
    pub(crate) shape: ShapeKind,
    pub(crate) color: Color,
    /// Anchors at the parent's start and ignores the parent's rotation.
    pub(crate) other_end: bool,
    pub(crate) is_root: bool,
    pub(crate) parent: Option<BoneId>,
    pub(crate) children: Vec<BoneId>,
    /// Derived by the last FK pass.
    pub(crate) start: Point,
    /// Derived by the last FK pass.
    pub(crate) tip: Point,
    pub(crate) angle_history: Vec<f64>,
    /// Root only.
    pub(crate) position_history: Vec<Point>,
}

impl Bone {
    /// A detached bone with no parent, children, or history. Endpoints start at
    /// the origin until the owning figure runs its first update.
    #[must_use]
    pub fn new(length: f64, angle: f64, shape: ShapeKind) -> Self {
        Self {
            length,
            angle,
            shape,
            color: Color::BLACK,
            other_end: false,
            is_root: false,
            parent: None,
            children: Vec::new(),
            start: Point::default(),
            tip: Point::default(),
            angle_history: Vec::new(),
            position_history: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_other_end(mut self, other_end: bool) -> Self {
        self.other_end = other_end;
        self
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn is_other_end(&self) -> bool {
        self.other_end
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    #[must_use]
    pub fn parent(&self) -> Option<BoneId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[BoneId] {
        &self.children
    }

    /// Start point as of the last update pass.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Tip point as of the last update pass.
    #[must_use]
    pub fn tip(&self) -> Point {
        self.tip
    }

    #[must_use]
    pub fn angle_history(&self) -> &[f64] {
        &self.angle_history
    }

    #[must_use]
    pub fn position_history(&self) -> &[Point] {
        &self.position_history
    }
}

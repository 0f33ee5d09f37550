//! JSON report of a figure's pose and recorded frames.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use rig::bone::{BoneId, ShapeKind};
use rig::figure::Figure;
use rig::geom::Point;
use rig::kinematics;
use rig::render::{self, DrawCmd};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub position: Point,
    pub frame_count: usize,
    pub position_history: Vec<Point>,
    /// Bounding box of the last draw list.
    pub extent: Option<Extent>,
    pub bones: Vec<BoneReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoneReport {
    pub index: usize,
    pub parent: Option<usize>,
    pub shape: ShapeKind,
    pub other_end: bool,
    pub angle: f64,
    pub absolute_angle: f64,
    pub start: Point,
    pub tip: Point,
    pub angle_history: Vec<f64>,
}

impl Report {
    #[must_use]
    pub fn new(figure: &Figure, cmds: &[DrawCmd]) -> Self {
        let bones = figure
            .bones()
            .iter()
            .enumerate()
            .map(|(index, bone)| BoneReport {
                index,
                parent: bone.parent().map(|p| p.0),
                shape: bone.shape(),
                other_end: bone.is_other_end(),
                angle: bone.angle(),
                absolute_angle: kinematics::absolute_angle(figure.bones(), BoneId(index)),
                start: bone.start(),
                tip: bone.tip(),
                angle_history: bone.angle_history().to_vec(),
            })
            .collect();

        Self {
            position: figure.position(),
            frame_count: figure.frame_count(),
            position_history: figure.root().position_history().to_vec(),
            extent: render::bounds(cmds).map(|(min, max)| Extent { min, max }),
            bones,
        }
    }
}

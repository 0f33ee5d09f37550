//! Rendering: turns a freshly updated figure into a draw list.
//!
//! The host surface paints the returned [`DrawCmd`]s in order. This module
//! reads committed endpoints only; it never mutates the figure, so it must run
//! after the tick's update pass.
//!
//! Layer order: every bone (body, then both joints) in document order, then
//! every handle in hit-dispatch order.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::bone::{Bone, Color, ShapeKind};
use crate::consts::{
    GIMBAL_COLOR, GIMBAL_COLOR_SELECTED, HANDLE_RADIUS, JOINT_RADIUS, RING_WIDTH, ROOT_HANDLE_COLOR,
    ROOT_HANDLE_COLOR_SELECTED, SEGMENT_WIDTH,
};
use crate::figure::Figure;
use crate::geom::Point;
use crate::handle::Handle;

/// One primitive for the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum DrawCmd {
    /// Filled circle.
    Disc { center: Point, radius: f64, color: Color },
    /// Thick straight line.
    Line { from: Point, to: Point, width: f64, color: Color },
    /// Unfilled circle outline of the given stroke width.
    Ring { center: Point, radius: f64, width: f64, color: Color },
}

/// Build the full draw list for `figure`, highlighting `active`.
#[must_use]
pub fn draw(figure: &Figure, active: Option<Handle>) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(figure.len() * 4 + 1);

    for bone in figure.bones() {
        draw_bone(&mut cmds, bone);
    }

    for handle in figure.handles() {
        let selected = active == Some(handle);
        cmds.push(DrawCmd::Disc {
            center: handle.anchor(figure.bones()),
            radius: HANDLE_RADIUS,
            color: handle_color(handle, selected),
        });
    }

    cmds
}

fn draw_bone(cmds: &mut Vec<DrawCmd>, bone: &Bone) {
    let color = bone.color();
    match bone.shape() {
        ShapeKind::Segment => cmds.push(DrawCmd::Line { from: bone.start(), to: bone.tip(), width: SEGMENT_WIDTH, color }),
        ShapeKind::Disc => cmds.push(DrawCmd::Ring {
            center: bone.start().midpoint(bone.tip()),
            radius: bone.length() / 2.0,
            width: RING_WIDTH,
            color,
        }),
    }
    cmds.push(DrawCmd::Disc { center: bone.start(), radius: JOINT_RADIUS, color });
    cmds.push(DrawCmd::Disc { center: bone.tip(), radius: JOINT_RADIUS, color });
}

fn handle_color(handle: Handle, selected: bool) -> Color {
    match (handle, selected) {
        (Handle::Gimbal(_), false) => GIMBAL_COLOR,
        (Handle::Gimbal(_), true) => GIMBAL_COLOR_SELECTED,
        (Handle::Root(_), false) => ROOT_HANDLE_COLOR,
        (Handle::Root(_), true) => ROOT_HANDLE_COLOR_SELECTED,
    }
}

/// Axis-aligned extent `(min, max)` covered by the draw list, or `None` when
/// it is empty.
#[must_use]
pub fn bounds(cmds: &[DrawCmd]) -> Option<(Point, Point)> {
    let mut iter = cmds.iter().flat_map(|cmd| {
        let (a, b, r) = match *cmd {
            DrawCmd::Disc { center, radius, .. } => (center, center, radius),
            DrawCmd::Line { from, to, width, .. } => (from, to, width / 2.0),
            DrawCmd::Ring { center, radius, width, .. } => (center, center, radius + width / 2.0),
        };
        [Point::new(a.x.min(b.x) - r, a.y.min(b.y) - r), Point::new(a.x.max(b.x) + r, a.y.max(b.y) + r)]
    });
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), p| {
        (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y)))
    }))
}

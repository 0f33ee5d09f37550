//! Shared numeric and palette constants for the rig crate.

use crate::bone::Color;
use crate::geom::Point;

// ── Layout ──────────────────────────────────────────────────────

/// World position a figure starts at when the host does not supply one.
pub const DEFAULT_POSITION: Point = Point { x: 200.0, y: 240.0 };

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of every handle's circular hit region, also its drawn radius.
pub const HANDLE_RADIUS: f64 = 10.0;

// ── Drawing ─────────────────────────────────────────────────────

/// Radius of the filled disc drawn at each bone endpoint.
pub const JOINT_RADIUS: f64 = 10.0;

/// Stroke width of a segment bone.
pub const SEGMENT_WIDTH: f64 = 20.0;

/// Stroke width of a disc bone's ring.
pub const RING_WIDTH: f64 = 15.0;

// ── Palettes ────────────────────────────────────────────────────

pub const GIMBAL_COLOR: Color = Color::rgb(220, 40, 40);
pub const GIMBAL_COLOR_SELECTED: Color = Color::rgb(255, 170, 0);

pub const ROOT_HANDLE_COLOR: Color = Color::rgb(40, 90, 220);
pub const ROOT_HANDLE_COLOR_SELECTED: Color = Color::rgb(0, 190, 120);

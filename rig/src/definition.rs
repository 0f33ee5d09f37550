//! Figure definitions: the records a figure is built from, and how to load them.
//!
//! A definition document holds a single `bone` field with the root record.
//! Every record carries a length and an initial angle, plus optional shape,
//! branch flag, color, and nested children:
//!
//! ```yaml
//! bone:
//!   len: 60
//!   angle: 90
//!   children:
//!     - { len: 30, angle: 0, type: circle, color: "200|30|30" }
//!     - { len: 50, angle: 250, w: true }
//! ```
//!
//! JSON and YAML encodings are accepted. Materialization is all-or-nothing: a
//! bad record anywhere in the tree fails the whole load.

#[cfg(test)]
#[path = "definition_test.rs"]
mod definition_test;

use std::path::{Path, PathBuf};

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

use crate::bone::{Bone, BoneId, Color, ParseColorError, ShapeKind};

/// Error returned when a figure definition cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The definition file could not be read.
    #[error("failed to read figure definition {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    /// JSON syntax error, or a record missing a required field.
    #[error("invalid JSON figure definition: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML syntax error, or a record missing a required field.
    #[error("invalid YAML figure definition: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The file extension does not name a supported encoding.
    #[error("unsupported figure definition format: {}", .0.display())]
    UnknownFormat(PathBuf),
    /// A `color` attribute is not `"r|g|b"`.
    #[error(transparent)]
    InvalidColor(#[from] ParseColorError),
    /// `len` or `angle` is NaN or infinite.
    #[error("bone field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
}

/// Encoding of a definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the encoding from a file extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(LoadError::UnknownFormat(path.to_path_buf())),
        }
    }
}

/// Top-level definition document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureDefinition {
    /// The root record.
    pub bone: BoneRecord,
}

/// One bone as written in a definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneRecord {
    pub len: f64,
    /// Initial relative angle in degrees.
    pub angle: f64,
    /// `"circle"` draws the bone as a ring; anything else as a segment.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Present (with any value) when the bone branches from its parent's start.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "std::ops::Not::not")]
    pub w: bool,
    /// `"r|g|b"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BoneRecord>,
}

impl BoneRecord {
    /// A plain segment record with no attributes and no children.
    #[must_use]
    pub fn new(len: f64, angle: f64) -> Self {
        Self { len, angle, kind: None, w: false, color: None, children: Vec::new() }
    }

    #[must_use]
    pub fn branch(mut self) -> Self {
        self.w = true;
        self
    }

    #[must_use]
    pub fn with_type(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BoneRecord>) -> Self {
        self.children = children;
        self
    }

    /// Number of records in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(BoneRecord::count).sum::<usize>()
    }
}

/// Any value at all counts as "present"; absence falls back to `default`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

/// Parse a definition document from text.
///
/// # Errors
///
/// Returns [`LoadError::Json`] / [`LoadError::Yaml`] on syntax errors or when
/// any record lacks `len` or `angle`.
pub fn parse(text: &str, format: Format) -> Result<FigureDefinition, LoadError> {
    let def = match format {
        Format::Json => serde_json::from_str(text)?,
        Format::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(def)
}

/// Read and parse a definition file, choosing the encoding by extension.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`Format::from_path`] and [`parse`].
pub fn load(path: impl AsRef<Path>) -> Result<FigureDefinition, LoadError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    parse(&text, format)
}

/// Flatten a record tree into a preorder bone arena with parent/child links.
/// The first bone is the root.
pub(crate) fn materialize(root: &BoneRecord) -> Result<Vec<Bone>, LoadError> {
    let mut bones = Vec::with_capacity(root.count());
    push_record(root, None, &mut bones)?;
    bones[0].is_root = true;
    Ok(bones)
}

fn push_record(record: &BoneRecord, parent: Option<BoneId>, bones: &mut Vec<Bone>) -> Result<BoneId, LoadError> {
    finite("len", record.len)?;
    finite("angle", record.angle)?;
    let color = match record.color.as_deref() {
        Some(raw) => raw.parse::<Color>()?,
        None => Color::BLACK,
    };

    let id = BoneId(bones.len());
    let mut bone = Bone::new(record.len, record.angle, ShapeKind::from_type_attr(record.kind.as_deref()))
        .with_color(color)
        .with_other_end(record.w);
    bone.parent = parent;
    bones.push(bone);

    for child in &record.children {
        let child_id = push_record(child, Some(id), bones)?;
        bones[id.0].children.push(child_id);
    }
    Ok(id)
}

fn finite(field: &'static str, value: f64) -> Result<(), LoadError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LoadError::NonFinite { field, value })
    }
}

//! Leader entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Leader entity - an annotation arrow with a vertex path
///
/// The vertex path is a repeating group sequence (10/20/30 per vertex,
/// count in group 76); vertices append in file order during decode and are
/// emitted in that order on encode.
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub common: EntityCommon,
    /// Dimension style name (group 3)
    pub dimension_style: String,
    /// Arrowhead enabled (group 71)
    pub arrowhead_enabled: bool,
    /// Path type: 0 = straight segments, 1 = spline (group 72)
    pub path_type: i16,
    /// Creation flag: what the leader is attached to (group 73)
    pub creation_flag: i16,
    /// Hookline direction: 0 = opposite to, 1 = same as horizontal vector
    /// (group 74)
    pub hookline_direction: i16,
    /// Hookline present (group 75)
    pub hookline_enabled: bool,
    /// Annotation text height (group 40)
    pub text_height: f64,
    /// Annotation text width (group 41)
    pub text_width: f64,
    /// Path vertices in order (groups 10/20/30, repeating; count group 76)
    pub vertices: Vec<Vector3>,
    /// Referenced annotation handle string (group 340)
    pub annotation_reference: String,
    /// Horizontal direction of the text (group 211)
    pub horizontal_direction: Vector3,
    /// Offset of the block insertion point from the annotation (group 212)
    pub block_offset: Vector3,
    /// Offset of the last vertex from the annotation (group 213)
    pub annotation_offset: Vector3,
}

impl Leader {
    /// Create a new empty leader
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            dimension_style: "STANDARD".to_string(),
            arrowhead_enabled: true,
            path_type: 0,
            creation_flag: 3,
            hookline_direction: 0,
            hookline_enabled: false,
            text_height: 0.0,
            text_width: 0.0,
            vertices: Vec::new(),
            annotation_reference: String::new(),
            horizontal_direction: Vector3::UNIT_X,
            block_offset: Vector3::ZERO,
            annotation_offset: Vector3::ZERO,
        }
    }

    /// Append a path vertex, preserving order
    pub fn push_vertex(&mut self, vertex: Vector3) -> &mut Self {
        self.vertices.push(vertex);
        self
    }
}

impl Default for Leader {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for Leader {
    fn record_type(&self) -> &'static str {
        "LEADER"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbLeader"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbLeader"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            3 => self.dimension_style = pair.value_string.clone(),
            71 => self.arrowhead_enabled = pair.expect_i16()? != 0,
            72 => self.path_type = pair.expect_i16()?,
            73 => self.creation_flag = pair.expect_i16()?,
            74 => self.hookline_direction = pair.expect_i16()?,
            75 => self.hookline_enabled = pair.expect_i16()? != 0,
            40 => self.text_height = pair.expect_double()?,
            41 => self.text_width = pair.expect_double()?,
            // Vertex count; the repeating groups below carry the truth.
            76 => {
                pair.expect_i16()?;
            }
            10 => {
                let mut vertex = Vector3::ZERO;
                vertex.x = pair.expect_double()?;
                self.vertices.push(vertex);
            }
            20 => {
                if let Some(vertex) = self.vertices.last_mut() {
                    vertex.y = pair.expect_double()?;
                }
            }
            30 => {
                if let Some(vertex) = self.vertices.last_mut() {
                    vertex.z = pair.expect_double()?;
                }
            }
            340 => self.annotation_reference = pair.value_string.clone(),
            211 => self.horizontal_direction.x = pair.expect_double()?,
            221 => self.horizontal_direction.y = pair.expect_double()?,
            231 => self.horizontal_direction.z = pair.expect_double()?,
            212 => self.block_offset.x = pair.expect_double()?,
            222 => self.block_offset.y = pair.expect_double()?,
            232 => self.block_offset.z = pair.expect_double()?,
            213 => self.annotation_offset.x = pair.expect_double()?,
            223 => self.annotation_offset.y = pair.expect_double()?,
            233 => self.annotation_offset.z = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_string(3, &self.dimension_style)?;
        writer.write_i16(71, if self.arrowhead_enabled { 1 } else { 0 })?;
        writer.write_i16(72, self.path_type)?;
        writer.write_i16(73, self.creation_flag)?;
        writer.write_i16(74, self.hookline_direction)?;
        writer.write_i16(75, if self.hookline_enabled { 1 } else { 0 })?;
        if self.text_height != 0.0 {
            writer.write_double(40, self.text_height)?;
        }
        if self.text_width != 0.0 {
            writer.write_double(41, self.text_width)?;
        }
        writer.write_i16(76, self.vertices.len() as i16)?;
        for vertex in &self.vertices {
            writer.write_point3d(10, *vertex)?;
        }
        if !self.annotation_reference.is_empty() {
            writer.write_string(340, &self.annotation_reference)?;
        }
        if self.horizontal_direction != Vector3::UNIT_X {
            writer.write_point3d(211, self.horizontal_direction)?;
        }
        if self.block_offset != Vector3::ZERO {
            writer.write_point3d(212, self.block_offset)?;
        }
        if self.annotation_offset != Vector3::ZERO {
            writer.write_point3d(213, self.annotation_offset)?;
        }
        Ok(())
    }
}

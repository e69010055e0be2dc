//! Solid entity (filled quadrilateral)

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Solid entity - a filled quadrilateral (3 or 4 vertices)
///
/// A Solid is a filled shape defined by 3 or 4 corner points. If only 3
/// corners are provided, the fourth corner repeats the third. The corner
/// order follows the wire groups 10/11/12/13 (bowtie order, not perimeter
/// order).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Solid {
    pub common: EntityCommon,
    /// First corner point (group 10)
    pub first_corner: Vector3,
    /// Second corner point (group 11)
    pub second_corner: Vector3,
    /// Third corner point (group 12)
    pub third_corner: Vector3,
    /// Fourth corner point (group 13) - same as third for a triangle
    pub fourth_corner: Vector3,
}

impl Solid {
    /// Create a new degenerate solid at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solid with four corners
    pub fn from_corners(
        first: Vector3,
        second: Vector3,
        third: Vector3,
        fourth: Vector3,
    ) -> Self {
        Self {
            common: EntityCommon::new(),
            first_corner: first,
            second_corner: second,
            third_corner: third,
            fourth_corner: fourth,
        }
    }

    /// Create a triangular solid (3 corners)
    pub fn triangle(first: Vector3, second: Vector3, third: Vector3) -> Self {
        Self::from_corners(first, second, third, third)
    }

    /// Check if this is a triangle (fourth corner collapsed onto the third)
    pub fn is_triangle(&self) -> bool {
        (self.third_corner - self.fourth_corner).length() < 1e-10
    }

    /// Get the distinct corner points
    pub fn corners(&self) -> Vec<Vector3> {
        if self.is_triangle() {
            vec![self.first_corner, self.second_corner, self.third_corner]
        } else {
            vec![
                self.first_corner,
                self.second_corner,
                self.third_corner,
                self.fourth_corner,
            ]
        }
    }
}

impl DxfEntity for Solid {
    fn record_type(&self) -> &'static str {
        "SOLID"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbTrace"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbTrace"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            10 => self.first_corner.x = pair.expect_double()?,
            20 => self.first_corner.y = pair.expect_double()?,
            30 => self.first_corner.z = pair.expect_double()?,
            11 => self.second_corner.x = pair.expect_double()?,
            21 => self.second_corner.y = pair.expect_double()?,
            31 => self.second_corner.z = pair.expect_double()?,
            12 => self.third_corner.x = pair.expect_double()?,
            22 => self.third_corner.y = pair.expect_double()?,
            32 => self.third_corner.z = pair.expect_double()?,
            13 => self.fourth_corner.x = pair.expect_double()?,
            23 => self.fourth_corner.y = pair.expect_double()?,
            33 => self.fourth_corner.z = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.first_corner)?;
        writer.write_point3d(11, self.second_corner)?;
        writer.write_point3d(12, self.third_corner)?;
        writer.write_point3d(13, self.fourth_corner)?;
        if self.common.thickness != 0.0 {
            writer.write_double(39, self.common.thickness)?;
        }
        Ok(())
    }
}

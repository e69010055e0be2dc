//! Line entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Line entity - a straight segment between two points
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub common: EntityCommon,
    /// Start point (group 10)
    pub start: Vector3,
    /// End point (group 11)
    pub end: Vector3,
}

impl Line {
    /// Create a new degenerate line at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Self {
            common: EntityCommon::new(),
            start,
            end,
        }
    }

    /// Create a line from raw coordinates
    pub fn from_coords(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Self::from_points(Vector3::new(x1, y1, z1), Vector3::new(x2, y2, z2))
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

impl DxfEntity for Line {
    fn record_type(&self) -> &'static str {
        "LINE"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbLine"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbLine"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            10 => self.start.x = pair.expect_double()?,
            20 => self.start.y = pair.expect_double()?,
            30 => self.start.z = pair.expect_double()?,
            11 => self.end.x = pair.expect_double()?,
            21 => self.end.y = pair.expect_double()?,
            31 => self.end.z = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.start)?;
        writer.write_point3d(11, self.end)?;
        if self.common.thickness != 0.0 {
            writer.write_double(39, self.common.thickness)?;
        }
        Ok(())
    }
}

//! Trace entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Trace entity
///
/// Traces carry the same four-corner layout as solids; only the introducer
/// differs. Kept as its own record type so a TRACE round-trips as a TRACE.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    pub common: EntityCommon,
    /// First corner point (group 10)
    pub first_corner: Vector3,
    /// Second corner point (group 11)
    pub second_corner: Vector3,
    /// Third corner point (group 12)
    pub third_corner: Vector3,
    /// Fourth corner point (group 13)
    pub fourth_corner: Vector3,
}

impl Trace {
    /// Create a new degenerate trace at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trace with four corners
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
}

impl DxfEntity for Trace {
    fn record_type(&self) -> &'static str {
        "TRACE"
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

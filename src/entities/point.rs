//! Point entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Point entity - a single location in space
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    pub common: EntityCommon,
    /// Location (group 10)
    pub location: Vector3,
}

impl Point {
    /// Create a new point at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a point at the given location
    pub fn at(location: Vector3) -> Self {
        Self {
            common: EntityCommon::new(),
            location,
        }
    }
}

impl DxfEntity for Point {
    fn record_type(&self) -> &'static str {
        "POINT"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbPoint"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbPoint"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            10 => self.location.x = pair.expect_double()?,
            20 => self.location.y = pair.expect_double()?,
            30 => self.location.z = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.location)?;
        if self.common.thickness != 0.0 {
            writer.write_double(39, self.common.thickness)?;
        }
        Ok(())
    }
}

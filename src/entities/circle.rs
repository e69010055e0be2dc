//! Circle entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Circle entity
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Circle {
    pub common: EntityCommon,
    /// Center point (group 10)
    pub center: Vector3,
    /// Radius (group 40)
    pub radius: f64,
}

impl Circle {
    /// Create a new zero-radius circle at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circle from center and radius
    pub fn from_center_radius(center: Vector3, radius: f64) -> Self {
        Self {
            common: EntityCommon::new(),
            center,
            radius,
        }
    }
}

impl DxfEntity for Circle {
    fn record_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbCircle"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbCircle"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            10 => self.center.x = pair.expect_double()?,
            20 => self.center.y = pair.expect_double()?,
            30 => self.center.z = pair.expect_double()?,
            40 => self.radius = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.center)?;
        writer.write_double(40, self.radius)?;
        if self.common.thickness != 0.0 {
            writer.write_double(39, self.common.thickness)?;
        }
        Ok(())
    }
}

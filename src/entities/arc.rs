//! Arc entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Arc entity - a circular arc
///
/// Angles are stored in degrees, counterclockwise from the X axis, exactly
/// as they appear on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub common: EntityCommon,
    /// Center point (group 10)
    pub center: Vector3,
    /// Radius (group 40)
    pub radius: f64,
    /// Start angle in degrees (group 50)
    pub start_angle: f64,
    /// End angle in degrees (group 51)
    pub end_angle: f64,
}

impl Arc {
    /// Create a new full-sweep zero-radius arc at the origin
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }

    /// Create an arc from center, radius, and angle sweep in degrees
    pub fn from_center_radius_angles(
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Self {
        Self {
            common: EntityCommon::new(),
            center,
            radius,
            start_angle,
            end_angle,
        }
    }
}

impl Default for Arc {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for Arc {
    fn record_type(&self) -> &'static str {
        "ARC"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbCircle"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbCircle", "AcDbArc"]
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
            50 => self.start_angle = pair.expect_double()?,
            51 => self.end_angle = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.center)?;
        writer.write_double(40, self.radius)?;
        if self.common.thickness != 0.0 {
            writer.write_double(39, self.common.thickness)?;
        }
        if version.has_subclass_markers() {
            writer.write_subclass("AcDbArc")?;
        }
        writer.write_double(50, self.start_angle)?;
        writer.write_double(51, self.end_angle)?;
        Ok(())
    }
}

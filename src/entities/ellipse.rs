//! Ellipse entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};

/// Ellipse entity
///
/// The major axis is stored as an endpoint relative to the center; the
/// minor axis is given as a ratio of the major. Parameters are in radians;
/// a full ellipse runs 0 to 2π.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub common: EntityCommon,
    /// Center point (group 10)
    pub center: Vector3,
    /// Endpoint of the major axis, relative to the center (group 11)
    pub major_axis: Vector3,
    /// Ratio of minor axis to major axis (group 40)
    pub minor_axis_ratio: f64,
    /// Start parameter in radians (group 41)
    pub start_parameter: f64,
    /// End parameter in radians (group 42)
    pub end_parameter: f64,
}

impl Ellipse {
    /// Create a new degenerate full ellipse at the origin
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            center: Vector3::ZERO,
            major_axis: Vector3::UNIT_X,
            minor_axis_ratio: 1.0,
            start_parameter: 0.0,
            end_parameter: std::f64::consts::TAU,
        }
    }

    /// Create a full ellipse from center, major axis endpoint, and ratio
    pub fn from_center_axes(center: Vector3, major_axis: Vector3, ratio: f64) -> Self {
        Self {
            center,
            major_axis,
            minor_axis_ratio: ratio,
            ..Self::new()
        }
    }

    /// Whether the ellipse covers its full parameter range
    pub fn is_full(&self) -> bool {
        (self.end_parameter - self.start_parameter - std::f64::consts::TAU).abs() < 1e-10
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for Ellipse {
    fn record_type(&self) -> &'static str {
        "ELLIPSE"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbEllipse"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbEllipse"]
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
            11 => self.major_axis.x = pair.expect_double()?,
            21 => self.major_axis.y = pair.expect_double()?,
            31 => self.major_axis.z = pair.expect_double()?,
            40 => self.minor_axis_ratio = pair.expect_double()?,
            41 => self.start_parameter = pair.expect_double()?,
            42 => self.end_parameter = pair.expect_double()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.center)?;
        writer.write_point3d(11, self.major_axis)?;
        writer.write_double(40, self.minor_axis_ratio)?;
        writer.write_double(41, self.start_parameter)?;
        writer.write_double(42, self.end_parameter)?;
        Ok(())
    }
}

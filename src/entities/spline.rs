//! Spline entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Spline type flags (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SplineFlags: i16 {
        /// Closed spline
        const CLOSED = 1;
        /// Periodic spline
        const PERIODIC = 2;
        /// Rational spline
        const RATIONAL = 4;
        /// Planar
        const PLANAR = 8;
        /// Linear (planar bit is also set)
        const LINEAR = 16;
    }
}

/// Spline entity - a NURBS curve
///
/// Knots, weights, control points, and fit points are repeating groups; each
/// occurrence appends in file order. The count groups (72/73/74) are derived
/// from the sequences on write and not stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub common: EntityCommon,
    /// Type flags (group 70)
    pub flags: SplineFlags,
    /// Degree of the curve (group 71)
    pub degree: i32,
    /// Knot tolerance (group 42)
    pub knot_tolerance: f64,
    /// Control point tolerance (group 43)
    pub control_point_tolerance: f64,
    /// Fit tolerance (group 44)
    pub fit_tolerance: f64,
    /// Start tangent (group 12), if given
    pub start_tangent: Option<Vector3>,
    /// End tangent (group 13), if given
    pub end_tangent: Option<Vector3>,
    /// Knot values (group 40, repeating)
    pub knots: Vec<f64>,
    /// Weights (group 41, repeating; empty for a non-rational spline)
    pub weights: Vec<f64>,
    /// Control points (groups 10/20/30, repeating)
    pub control_points: Vec<Vector3>,
    /// Fit points (groups 11/21/31, repeating)
    pub fit_points: Vec<Vector3>,
}

impl Spline {
    /// Create a new empty cubic spline
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            flags: SplineFlags::empty(),
            degree: 3,
            knot_tolerance: 1e-7,
            control_point_tolerance: 1e-7,
            fit_tolerance: 1e-10,
            start_tangent: None,
            end_tangent: None,
            knots: Vec::new(),
            weights: Vec::new(),
            control_points: Vec::new(),
            fit_points: Vec::new(),
        }
    }

    /// Append a control point, preserving order
    pub fn push_control_point(&mut self, point: Vector3) -> &mut Self {
        self.control_points.push(point);
        self
    }

    /// Append a knot value, preserving order
    pub fn push_knot(&mut self, knot: f64) -> &mut Self {
        self.knots.push(knot);
        self
    }

    /// Whether the closed flag is set
    pub fn is_closed(&self) -> bool {
        self.flags.contains(SplineFlags::CLOSED)
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

/// Begin a new point on its x group, or fill in the y/z of the point the
/// preceding x group opened.
fn apply_point_axis(points: &mut Vec<Vector3>, axis: usize, value: f64, start: bool) {
    if start || points.is_empty() {
        points.push(Vector3::ZERO);
    }
    if let Some(point) = points.last_mut() {
        match axis {
            0 => point.x = value,
            1 => point.y = value,
            _ => point.z = value,
        }
    }
}

impl DxfEntity for Spline {
    fn record_type(&self) -> &'static str {
        "SPLINE"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbSpline"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbSpline"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            70 => self.flags = SplineFlags::from_bits_retain(pair.expect_i16()?),
            71 => self.degree = pair.expect_i16()? as i32,
            // Counts are implied by the repeating groups that follow.
            72 | 73 | 74 => {
                pair.expect_i16()?;
            }
            42 => self.knot_tolerance = pair.expect_double()?,
            43 => self.control_point_tolerance = pair.expect_double()?,
            44 => self.fit_tolerance = pair.expect_double()?,
            12 => self.start_tangent.get_or_insert(Vector3::ZERO).x = pair.expect_double()?,
            22 => self.start_tangent.get_or_insert(Vector3::ZERO).y = pair.expect_double()?,
            32 => self.start_tangent.get_or_insert(Vector3::ZERO).z = pair.expect_double()?,
            13 => self.end_tangent.get_or_insert(Vector3::ZERO).x = pair.expect_double()?,
            23 => self.end_tangent.get_or_insert(Vector3::ZERO).y = pair.expect_double()?,
            33 => self.end_tangent.get_or_insert(Vector3::ZERO).z = pair.expect_double()?,
            40 => self.knots.push(pair.expect_double()?),
            41 => self.weights.push(pair.expect_double()?),
            10 => apply_point_axis(&mut self.control_points, 0, pair.expect_double()?, true),
            20 => apply_point_axis(&mut self.control_points, 1, pair.expect_double()?, false),
            30 => apply_point_axis(&mut self.control_points, 2, pair.expect_double()?, false),
            11 => apply_point_axis(&mut self.fit_points, 0, pair.expect_double()?, true),
            21 => apply_point_axis(&mut self.fit_points, 1, pair.expect_double()?, false),
            31 => apply_point_axis(&mut self.fit_points, 2, pair.expect_double()?, false),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        writer.write_i16(70, self.flags.bits())?;
        writer.write_i16(71, self.degree as i16)?;
        writer.write_i16(72, self.knots.len() as i16)?;
        writer.write_i16(73, self.control_points.len() as i16)?;
        writer.write_i16(74, self.fit_points.len() as i16)?;
        writer.write_double(42, self.knot_tolerance)?;
        writer.write_double(43, self.control_point_tolerance)?;
        writer.write_double(44, self.fit_tolerance)?;
        if let Some(tangent) = self.start_tangent {
            writer.write_point3d(12, tangent)?;
        }
        if let Some(tangent) = self.end_tangent {
            writer.write_point3d(13, tangent)?;
        }
        for knot in &self.knots {
            writer.write_double(40, *knot)?;
        }
        for weight in &self.weights {
            writer.write_double(41, *weight)?;
        }
        for point in &self.control_points {
            writer.write_point3d(10, *point)?;
        }
        for point in &self.fit_points {
            writer.write_point3d(11, *point)?;
        }
        Ok(())
    }
}

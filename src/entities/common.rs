//! Attributes shared by every entity record, and the validated accessor layer

use super::codec::CodecContext;
use crate::error::{DxfError, Result};
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::notification::NotificationType;
use crate::types::{Color, DxfVersion, Handle, LineWeight, Transparency, Vector3};

/// Default linetype name applied whenever a record's linetype is missing or
/// empty.
pub const DEFAULT_LINETYPE: &str = "BYLAYER";

/// Default layer name applied whenever a record's layer is missing or empty.
pub const DEFAULT_LAYER: &str = "0";

/// Shadow mode (group code 284, AC1021+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadowMode {
    /// Casts and receives shadows (0)
    #[default]
    CastsAndReceives,
    /// Casts shadows (1)
    Casts,
    /// Receives shadows (2)
    Receives,
    /// Ignores shadows (3)
    Ignores,
}

impl ShadowMode {
    /// Decode the wire value; `None` for values outside {0..3}.
    pub fn from_value(value: i16) -> Option<Self> {
        match value {
            0 => Some(ShadowMode::CastsAndReceives),
            1 => Some(ShadowMode::Casts),
            2 => Some(ShadowMode::Receives),
            3 => Some(ShadowMode::Ignores),
            _ => None,
        }
    }

    /// The wire value.
    pub fn value(&self) -> i16 {
        match self {
            ShadowMode::CastsAndReceives => 0,
            ShadowMode::Casts => 1,
            ShadowMode::Receives => 2,
            ShadowMode::Ignores => 3,
        }
    }
}

/// Common record data shared by all entity types
///
/// Fields are public in keeping with the rest of the catalogue; the
/// `set_*` methods additionally enforce the documented domains and are the
/// supported way to mutate range-carrying fields.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle (group 5); NULL until assigned, suppressed on write
    pub handle: Handle,
    /// Linetype name (group 6); never empty after init or decode
    pub linetype: String,
    /// Layer name (group 8); never empty after init or decode
    pub layer: String,
    /// Legacy elevation (group 38); honored only pre-R13 in flatland mode
    pub elevation: f64,
    /// Extrusion distance (group 39); non-negative
    pub thickness: f64,
    /// Linetype scale (group 48); non-negative, 1.0 default
    pub linetype_scale: f64,
    /// Visibility flag (group 60); true = invisible
    pub invisible: bool,
    /// Color (groups 62/420)
    pub color: Color,
    /// Paper space flag (group 67)
    pub paperspace: bool,
    /// Declared byte count of the graphics data (groups 92/160)
    pub graphics_data_size: i32,
    /// Binary graphics data chunks (group 310), in file order
    pub graphics_data: Vec<String>,
    /// Shadow mode (group 284)
    pub shadow_mode: ShadowMode,
    /// Soft owner-dictionary back-reference (group 330 inside
    /// `{ACAD_REACTORS`); opaque handle string, non-owning
    pub owner_soft: String,
    /// Hard owner-dictionary back-reference (group 360 inside
    /// `{ACAD_XDICTIONARY`); opaque handle string, non-owning
    pub owner_hard: String,
    /// Material handle string (group 347)
    pub material: String,
    /// Line weight (group 370)
    pub line_weight: LineWeight,
    /// Plot style handle string (group 390)
    pub plot_style: String,
    /// True color name (group 430)
    pub color_name: String,
    /// Transparency (group 440)
    pub transparency: Transparency,
    /// Extrusion direction (groups 210/220/230)
    pub extrusion: Vector3,
}

impl EntityCommon {
    /// Create common record data with the documented defaults
    pub fn new() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            linetype: DEFAULT_LINETYPE.to_string(),
            layer: DEFAULT_LAYER.to_string(),
            elevation: 0.0,
            thickness: 0.0,
            linetype_scale: 1.0,
            invisible: false,
            color: Color::ByLayer,
            paperspace: false,
            graphics_data_size: 0,
            graphics_data: Vec::new(),
            shadow_mode: ShadowMode::CastsAndReceives,
            owner_soft: String::new(),
            owner_hard: String::new(),
            material: String::new(),
            line_weight: LineWeight::ByLayer,
            plot_style: String::new(),
            color_name: String::new(),
            transparency: Transparency::OPAQUE,
            extrusion: Vector3::UNIT_Z,
        }
    }

    /// Create with a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }

    // ── validated accessor layer ──────────────────────────────────────────

    /// Set the record's handle; chainable.
    pub fn set_handle(&mut self, handle: Handle) -> &mut Self {
        self.handle = handle;
        self
    }

    /// Set the linetype name. Empty names are rejected.
    pub fn set_linetype(&mut self, linetype: impl Into<String>) -> Result<&mut Self> {
        let linetype = linetype.into();
        if linetype.is_empty() {
            return Err(self.reject("linetype", &linetype));
        }
        self.linetype = linetype;
        Ok(self)
    }

    /// Set the layer name. Empty names are rejected.
    pub fn set_layer(&mut self, layer: impl Into<String>) -> Result<&mut Self> {
        let layer = layer.into();
        if layer.is_empty() {
            return Err(self.reject("layer", &layer));
        }
        self.layer = layer;
        Ok(self)
    }

    /// Checked thickness read; a directly-poked negative value is reported
    /// rather than returned.
    pub fn thickness(&self) -> Result<f64> {
        if self.thickness.is_finite() && self.thickness >= 0.0 {
            Ok(self.thickness)
        } else {
            Err(self.reject("thickness", &self.thickness.to_string()))
        }
    }

    /// Set the thickness. Negative or non-finite values are rejected and the
    /// record is left unchanged.
    pub fn set_thickness(&mut self, thickness: f64) -> Result<&mut Self> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(self.reject("thickness", &thickness.to_string()));
        }
        self.thickness = thickness;
        Ok(self)
    }

    /// Checked linetype scale read.
    pub fn linetype_scale(&self) -> Result<f64> {
        if self.linetype_scale.is_finite() && self.linetype_scale >= 0.0 {
            Ok(self.linetype_scale)
        } else {
            Err(self.reject("linetype_scale", &self.linetype_scale.to_string()))
        }
    }

    /// Set the linetype scale. Negative or non-finite values are rejected.
    pub fn set_linetype_scale(&mut self, scale: f64) -> Result<&mut Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(self.reject("linetype_scale", &scale.to_string()));
        }
        self.linetype_scale = scale;
        Ok(self)
    }

    /// Visibility as the wire domain {0, 1}.
    pub fn visibility(&self) -> i16 {
        if self.invisible {
            1
        } else {
            0
        }
    }

    /// Set visibility from the wire domain; values outside {0, 1} are
    /// rejected.
    pub fn set_visibility(&mut self, visibility: i16) -> Result<&mut Self> {
        match visibility {
            0 => self.invisible = false,
            1 => self.invisible = true,
            other => return Err(self.reject("visibility", &other.to_string())),
        }
        Ok(self)
    }

    /// Checked graphics-data byte count read.
    pub fn graphics_data_size(&self) -> Result<i32> {
        if self.graphics_data_size >= 0 {
            Ok(self.graphics_data_size)
        } else {
            Err(self.reject(
                "graphics_data_size",
                &self.graphics_data_size.to_string(),
            ))
        }
    }

    /// Set the graphics-data byte count. Negative counts are rejected.
    pub fn set_graphics_data_size(&mut self, size: i32) -> Result<&mut Self> {
        if size < 0 {
            return Err(self.reject("graphics_data_size", &size.to_string()));
        }
        self.graphics_data_size = size;
        Ok(self)
    }

    /// Set the shadow mode from the wire domain {0..3}.
    pub fn set_shadow_mode(&mut self, mode: i16) -> Result<&mut Self> {
        match ShadowMode::from_value(mode) {
            Some(m) => {
                self.shadow_mode = m;
                Ok(self)
            }
            None => Err(self.reject("shadow_mode", &mode.to_string())),
        }
    }

    /// Append a binary graphics data chunk, preserving order.
    pub fn push_graphics_data(&mut self, chunk: impl Into<String>) -> &mut Self {
        self.graphics_data.push(chunk.into());
        self
    }

    fn reject(&self, field: &'static str, value: &str) -> DxfError {
        tracing::warn!(field, value, "value out of domain");
        DxfError::OutOfDomain {
            field,
            value: value.to_string(),
        }
    }

    // ── shared decode / encode ────────────────────────────────────────────

    /// Apply one shared group to this record. Returns `Ok(false)` when the
    /// code is not one of the cross-type groups, leaving it for the record's
    /// own dispatch table.
    pub(crate) fn apply_code(
        &mut self,
        pair: &DxfCodePair,
        ctx: &mut CodecContext,
    ) -> Result<bool> {
        match pair.code {
            5 => self.handle = pair.expect_handle()?,
            6 => self.linetype = pair.value_string.clone(),
            8 => self.layer = pair.value_string.clone(),
            38 => {
                // Legacy flatland elevation; meaningless in R13+ streams.
                if ctx.version <= DxfVersion::AC1009 && ctx.flatland {
                    self.elevation = pair.expect_double()?;
                } else {
                    tracing::debug!(line = pair.line, "ignoring elevation group 38");
                }
            }
            39 => {
                let v = pair.expect_double()?;
                if v < 0.0 {
                    ctx.notifications.notify(
                        NotificationType::Error,
                        format!("negative thickness {} at line {} ignored", v, pair.line),
                    );
                } else {
                    self.thickness = v;
                }
            }
            48 => {
                let v = pair.expect_double()?;
                if v < 0.0 {
                    ctx.notifications.notify(
                        NotificationType::Error,
                        format!("negative linetype scale {} at line {} ignored", v, pair.line),
                    );
                } else {
                    self.linetype_scale = v;
                }
            }
            60 => {
                let v = pair.expect_i16()?;
                match v {
                    0 => self.invisible = false,
                    1 => self.invisible = true,
                    other => ctx.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "visibility {} at line {} outside {{0,1}}, ignored",
                            other, pair.line
                        ),
                    ),
                }
            }
            62 => self.color = Color::from_index(pair.expect_i16()?),
            67 => {
                let v = pair.expect_i16()?;
                match v {
                    0 => self.paperspace = false,
                    1 => self.paperspace = true,
                    other => ctx.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "paperspace flag {} at line {} outside {{0,1}}, ignored",
                            other, pair.line
                        ),
                    ),
                }
            }
            92 => {
                let v = pair.expect_i32()?;
                if v < 0 {
                    ctx.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "negative graphics data size {} at line {} ignored",
                            v, pair.line
                        ),
                    );
                } else {
                    self.graphics_data_size = v;
                }
            }
            160 => {
                let v = pair.expect_i64()?;
                match i32::try_from(v) {
                    Ok(v) if v >= 0 => self.graphics_data_size = v,
                    _ => ctx.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "graphics data size {} at line {} out of range, ignored",
                            v, pair.line
                        ),
                    ),
                }
            }
            210 => self.extrusion.x = pair.expect_double()?,
            220 => self.extrusion.y = pair.expect_double()?,
            230 => self.extrusion.z = pair.expect_double()?,
            284 => {
                let v = pair.expect_i16()?;
                match ShadowMode::from_value(v) {
                    Some(m) => self.shadow_mode = m,
                    None => ctx.notifications.notify(
                        NotificationType::Error,
                        format!(
                            "shadow mode {} at line {} outside {{0..3}}, ignored",
                            v, pair.line
                        ),
                    ),
                }
            }
            310 => self.graphics_data.push(pair.value_string.clone()),
            330 => self.owner_soft = pair.value_string.clone(),
            347 => self.material = pair.value_string.clone(),
            360 => self.owner_hard = pair.value_string.clone(),
            370 => self.line_weight = LineWeight::from_value(pair.expect_i16()?),
            390 => self.plot_style = pair.value_string.clone(),
            420 => self.color = Color::from_true_color(pair.expect_i32()?),
            430 => self.color_name = pair.value_string.clone(),
            440 => self.transparency = Transparency::from_alpha_value(pair.expect_i32()?),
            999 => {
                tracing::debug!(comment = %pair.value_string, "comment group");
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Force the two required names back to their defaults if they ended up
    /// empty. Runs after every decode, whether or not the groups were seen.
    pub(crate) fn normalize_names(&mut self) {
        if self.linetype.is_empty() {
            self.linetype = DEFAULT_LINETYPE.to_string();
        }
        if self.layer.is_empty() {
            self.layer = DEFAULT_LAYER.to_string();
        }
    }

    /// Emit the shared groups in canonical order. Default-valued optional
    /// groups are omitted; version-gated groups are held back on older
    /// targets.
    pub(crate) fn write_groups(
        &self,
        writer: &mut dyn DxfStreamWriter,
        version: DxfVersion,
        flatland: bool,
    ) -> Result<()> {
        if self.handle.is_valid() {
            writer.write_handle(5, self.handle)?;
        }
        if version >= DxfVersion::AC1014 && !self.owner_soft.is_empty() {
            writer.write_string(102, "{ACAD_REACTORS")?;
            writer.write_string(330, &self.owner_soft)?;
            writer.write_string(102, "}")?;
        }
        if version >= DxfVersion::AC1014 && !self.owner_hard.is_empty() {
            writer.write_string(102, "{ACAD_XDICTIONARY")?;
            writer.write_string(360, &self.owner_hard)?;
            writer.write_string(102, "}")?;
        }
        if version.has_subclass_markers() {
            writer.write_subclass("AcDbEntity")?;
        }
        if self.paperspace {
            writer.write_i16(67, 1)?;
        }
        writer.write_string(8, &self.layer)?;
        if self.linetype != DEFAULT_LINETYPE {
            writer.write_string(6, &self.linetype)?;
        }
        if version >= DxfVersion::AC1021 && !self.material.is_empty() {
            writer.write_string(347, &self.material)?;
        }
        if self.color != Color::ByLayer {
            writer.write_color_index(62, self.color)?;
        }
        if version >= DxfVersion::AC1015 && self.line_weight != LineWeight::ByLayer {
            writer.write_i16(370, self.line_weight.value())?;
        }
        if self.linetype_scale != 1.0 {
            writer.write_double(48, self.linetype_scale)?;
        }
        if self.invisible {
            writer.write_i16(60, 1)?;
        }
        if version <= DxfVersion::AC1009 && flatland && self.elevation != 0.0 {
            writer.write_double(38, self.elevation)?;
        }
        if !self.graphics_data.is_empty() {
            if version >= DxfVersion::AC1024 {
                writer.write_i64(160, self.graphics_data_size as i64)?;
            } else {
                writer.write_i32(92, self.graphics_data_size)?;
            }
            for chunk in &self.graphics_data {
                writer.write_string(310, chunk)?;
            }
        }
        if version >= DxfVersion::AC1018 {
            if let Some(tc) = self.color.true_color_value() {
                writer.write_i32(420, tc)?;
            }
            if !self.color_name.is_empty() {
                writer.write_string(430, &self.color_name)?;
            }
            if !self.transparency.is_opaque() {
                writer.write_i32(440, self.transparency.to_alpha_value())?;
            }
        }
        if version >= DxfVersion::AC1015 && !self.plot_style.is_empty() {
            writer.write_string(390, &self.plot_style)?;
        }
        if version >= DxfVersion::AC1021 && self.shadow_mode != ShadowMode::CastsAndReceives {
            writer.write_i16(284, self.shadow_mode.value())?;
        }
        Ok(())
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

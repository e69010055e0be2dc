//! Attribute definition entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::{DxfVersion, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Attribute flags (group 70)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttributeFlags: i16 {
        /// Attribute is invisible (does not appear)
        const INVISIBLE = 1;
        /// This is a constant attribute
        const CONSTANT = 2;
        /// Verification is required on input
        const VERIFY = 4;
        /// Attribute is preset (no prompt during insertion)
        const PRESET = 8;
    }
}

/// Attribute definition entity (ATTDEF)
///
/// Defines the template for attributes attached to block insertions: the
/// prompt shown on insert, the tag the value is stored under, and the text
/// presentation of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    pub common: EntityCommon,
    /// First alignment point (group 10)
    pub first_alignment_point: Vector3,
    /// Text height (group 40)
    pub text_height: f64,
    /// Default value (group 1)
    pub default_value: String,
    /// Text rotation in degrees (group 50)
    pub rotation: f64,
    /// Relative X scale factor, adjusted for fit-type text (group 41)
    pub relative_x_scale: f64,
    /// Oblique angle in degrees (group 51)
    pub oblique_angle: f64,
    /// Text style name (group 7)
    pub text_style: String,
    /// Text generation flags: 2 = backward, 4 = upside down (group 71)
    pub text_generation_flags: i16,
    /// Horizontal justification 0-5 (group 72)
    pub horizontal_justification: i16,
    /// Second alignment point (group 11); meaningful when a non-default
    /// justification is set
    pub second_alignment_point: Vector3,
    /// Prompt string (group 3)
    pub prompt: String,
    /// Tag string (group 2)
    pub tag: String,
    /// Attribute flags (group 70)
    pub flags: AttributeFlags,
    /// Field length (group 73)
    pub field_length: i16,
    /// Vertical justification 0-3 (group 74)
    pub vertical_justification: i16,
}

impl AttributeDefinition {
    /// Create a new empty attribute definition
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            first_alignment_point: Vector3::ZERO,
            text_height: 1.0,
            default_value: String::new(),
            rotation: 0.0,
            relative_x_scale: 1.0,
            oblique_angle: 0.0,
            text_style: "STANDARD".to_string(),
            text_generation_flags: 0,
            horizontal_justification: 0,
            second_alignment_point: Vector3::ZERO,
            prompt: String::new(),
            tag: String::new(),
            flags: AttributeFlags::empty(),
            field_length: 0,
            vertical_justification: 0,
        }
    }

    /// Create a definition with the required tag and prompt
    pub fn with_tag(tag: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            prompt: prompt.into(),
            ..Self::new()
        }
    }

    /// Whether this is a constant attribute
    pub fn is_constant(&self) -> bool {
        self.flags.contains(AttributeFlags::CONSTANT)
    }
}

impl Default for AttributeDefinition {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for AttributeDefinition {
    fn record_type(&self) -> &'static str {
        "ATTDEF"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbText"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbText", "AcDbAttributeDefinition"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        match pair.code {
            1 => self.default_value = pair.value_string.clone(),
            2 => self.tag = pair.value_string.clone(),
            3 => self.prompt = pair.value_string.clone(),
            7 => self.text_style = pair.value_string.clone(),
            10 => self.first_alignment_point.x = pair.expect_double()?,
            20 => self.first_alignment_point.y = pair.expect_double()?,
            30 => self.first_alignment_point.z = pair.expect_double()?,
            11 => self.second_alignment_point.x = pair.expect_double()?,
            21 => self.second_alignment_point.y = pair.expect_double()?,
            31 => self.second_alignment_point.z = pair.expect_double()?,
            40 => self.text_height = pair.expect_double()?,
            41 => self.relative_x_scale = pair.expect_double()?,
            50 => self.rotation = pair.expect_double()?,
            51 => self.oblique_angle = pair.expect_double()?,
            70 => self.flags = AttributeFlags::from_bits_retain(pair.expect_i16()?),
            71 => self.text_generation_flags = pair.expect_i16()?,
            72 => self.horizontal_justification = pair.expect_i16()?,
            73 => self.field_length = pair.expect_i16()?,
            74 => self.vertical_justification = pair.expect_i16()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, version: DxfVersion) -> Result<()> {
        writer.write_point3d(10, self.first_alignment_point)?;
        writer.write_double(40, self.text_height)?;
        writer.write_string(1, &self.default_value)?;
        if self.rotation != 0.0 {
            writer.write_double(50, self.rotation)?;
        }
        if self.relative_x_scale != 1.0 {
            writer.write_double(41, self.relative_x_scale)?;
        }
        if self.oblique_angle != 0.0 {
            writer.write_double(51, self.oblique_angle)?;
        }
        if self.text_style != "STANDARD" {
            writer.write_string(7, &self.text_style)?;
        }
        if self.text_generation_flags != 0 {
            writer.write_i16(71, self.text_generation_flags)?;
        }
        if self.horizontal_justification != 0 {
            writer.write_i16(72, self.horizontal_justification)?;
        }
        if self.second_alignment_point != Vector3::ZERO {
            writer.write_point3d(11, self.second_alignment_point)?;
        }
        if version.has_subclass_markers() {
            writer.write_subclass("AcDbAttributeDefinition")?;
        }
        writer.write_string(3, &self.prompt)?;
        writer.write_string(2, &self.tag)?;
        writer.write_i16(70, self.flags.bits())?;
        if self.field_length != 0 {
            writer.write_i16(73, self.field_length)?;
        }
        if self.vertical_justification != 0 {
            writer.write_i16(74, self.vertical_justification)?;
        }
        Ok(())
    }
}

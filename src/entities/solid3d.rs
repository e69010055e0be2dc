//! ACIS-based entities: 3DSOLID, REGION, BODY
//!
//! These records carry their geometry as opaque modeler data: a sequence of
//! encoded text lines under group 1, with group 3 marking continuation lines
//! for source lines longer than the wire allows. The sequence is owned by
//! the record and preserved in file order.

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::types::DxfVersion;

/// One line of proprietary modeler data
#[derive(Debug, Clone, PartialEq)]
pub struct AcisDataLine {
    /// True when this line arrived under group 3 (continuation of the
    /// previous group-1 line)
    pub continuation: bool,
    /// The encoded text
    pub text: String,
}

impl AcisDataLine {
    /// A primary data line (group 1)
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            continuation: false,
            text: text.into(),
        }
    }

    /// A continuation line (group 3)
    pub fn continuation(text: impl Into<String>) -> Self {
        Self {
            continuation: true,
            text: text.into(),
        }
    }
}

fn apply_acis_code(
    data: &mut Vec<AcisDataLine>,
    version: &mut i16,
    pair: &DxfCodePair,
) -> Result<bool> {
    match pair.code {
        1 => data.push(AcisDataLine::new(pair.value_string.clone())),
        3 => data.push(AcisDataLine::continuation(pair.value_string.clone())),
        70 => *version = pair.expect_i16()?,
        _ => return Ok(false),
    }
    Ok(true)
}

fn write_acis_fields(
    writer: &mut dyn DxfStreamWriter,
    version: i16,
    data: &[AcisDataLine],
) -> Result<()> {
    writer.write_i16(70, version)?;
    for line in data {
        let code = if line.continuation { 3 } else { 1 };
        writer.write_string(code, &line.text)?;
    }
    Ok(())
}

/// 3DSOLID entity
#[derive(Debug, Clone, PartialEq)]
pub struct Solid3D {
    pub common: EntityCommon,
    /// Modeler format version (group 70)
    pub modeler_format_version: i16,
    /// Proprietary modeler data lines, in file order (groups 1/3)
    pub proprietary_data: Vec<AcisDataLine>,
    /// History object handle string (group 350, AC1024+)
    pub history_handle: String,
}

impl Solid3D {
    /// Create a new empty 3D solid
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            modeler_format_version: 1,
            proprietary_data: Vec::new(),
            history_handle: String::new(),
        }
    }

    /// Append a proprietary data line, preserving order
    pub fn push_data(&mut self, line: AcisDataLine) -> &mut Self {
        self.proprietary_data.push(line);
        self
    }
}

impl Default for Solid3D {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for Solid3D {
    fn record_type(&self) -> &'static str {
        "3DSOLID"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbModelerGeometry"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbModelerGeometry", "AcDb3dSolid"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        if apply_acis_code(
            &mut self.proprietary_data,
            &mut self.modeler_format_version,
            pair,
        )? {
            return Ok(true);
        }
        match pair.code {
            350 => self.history_handle = pair.value_string.clone(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, version: DxfVersion) -> Result<()> {
        write_acis_fields(writer, self.modeler_format_version, &self.proprietary_data)?;
        if version >= DxfVersion::AC1024 {
            writer.write_subclass("AcDb3dSolid")?;
            if !self.history_handle.is_empty() {
                writer.write_string(350, &self.history_handle)?;
            }
        }
        Ok(())
    }
}

/// REGION entity
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub common: EntityCommon,
    /// Modeler format version (group 70)
    pub modeler_format_version: i16,
    /// Proprietary modeler data lines, in file order (groups 1/3)
    pub proprietary_data: Vec<AcisDataLine>,
}

impl Region {
    /// Create a new empty region
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            modeler_format_version: 1,
            proprietary_data: Vec::new(),
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for Region {
    fn record_type(&self) -> &'static str {
        "REGION"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbModelerGeometry"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbModelerGeometry"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        apply_acis_code(
            &mut self.proprietary_data,
            &mut self.modeler_format_version,
            pair,
        )
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        write_acis_fields(writer, self.modeler_format_version, &self.proprietary_data)
    }
}

/// BODY entity
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub common: EntityCommon,
    /// Modeler format version (group 70)
    pub modeler_format_version: i16,
    /// Proprietary modeler data lines, in file order (groups 1/3)
    pub proprietary_data: Vec<AcisDataLine>,
}

impl Body {
    /// Create a new empty body
    pub fn new() -> Self {
        Self {
            common: EntityCommon::new(),
            modeler_format_version: 1,
            proprietary_data: Vec::new(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

impl DxfEntity for Body {
    fn record_type(&self) -> &'static str {
        "BODY"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbModelerGeometry"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbModelerGeometry"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        apply_acis_code(
            &mut self.proprietary_data,
            &mut self.modeler_format_version,
            pair,
        )
    }

    fn write_fields(&self, writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        write_acis_fields(writer, self.modeler_format_version, &self.proprietary_data)
    }
}

//! End-of-block marker entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::DxfStreamWriter;
use crate::types::DxfVersion;

/// End-of-block marker (ENDBLK)
///
/// Closes a block definition. Carries only the shared groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockEnd {
    pub common: EntityCommon,
}

impl BlockEnd {
    /// Create a new end-of-block marker
    pub fn new() -> Self {
        Self::default()
    }
}

impl DxfEntity for BlockEnd {
    fn record_type(&self) -> &'static str {
        "ENDBLK"
    }

    fn subclass_marker(&self) -> &'static str {
        "AcDbBlockEnd"
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity", "AcDbBlockEnd"]
    }

    fn common(&self) -> &EntityCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut EntityCommon {
        &mut self.common
    }

    fn apply_code(&mut self, _pair: &DxfCodePair, _ctx: &mut CodecContext) -> Result<bool> {
        Ok(false)
    }

    fn write_fields(&self, _writer: &mut dyn DxfStreamWriter, _version: DxfVersion) -> Result<()> {
        Ok(())
    }
}

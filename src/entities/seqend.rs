//! Sequence-end marker entity

use super::codec::{CodecContext, DxfEntity};
use super::common::EntityCommon;
use crate::error::Result;
use crate::io::dxf::reader::DxfCodePair;
use crate::io::dxf::writer::DxfStreamWriter;
use crate::types::DxfVersion;

/// Sequence-end marker (SEQEND)
///
/// Terminates a vertex or attribute sequence. Carries only the shared
/// groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeqEnd {
    pub common: EntityCommon,
}

impl SeqEnd {
    /// Create a new sequence-end marker
    pub fn new() -> Self {
        Self::default()
    }
}

impl DxfEntity for SeqEnd {
    fn record_type(&self) -> &'static str {
        "SEQEND"
    }

    fn subclass_marker(&self) -> &'static str {
        ""
    }

    fn subclass_markers(&self) -> &'static [&'static str] {
        &["AcDbEntity"]
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

//! CAD entity record types
//!
//! Each module in this catalogue marshals one record type through the shared
//! protocol in [`codec`]: default construction, group-by-group decode, and
//! canonical-order encode.

pub mod codec;
pub mod common;

pub mod arc;
pub mod attdef;
pub mod circle;
pub mod ellipse;
pub mod endblk;
pub mod leader;
pub mod line;
pub mod point;
pub mod seqend;
pub mod solid;
pub mod solid3d;
pub mod spline;
pub mod trace;

pub use arc::Arc;
pub use attdef::{AttributeDefinition, AttributeFlags};
pub use circle::Circle;
pub use codec::{read_entity, read_entity_into, write_entity, CodecContext, DxfEntity};
pub use common::{EntityCommon, ShadowMode, DEFAULT_LAYER, DEFAULT_LINETYPE};
pub use ellipse::Ellipse;
pub use endblk::BlockEnd;
pub use leader::Leader;
pub use line::Line;
pub use point::Point;
pub use seqend::SeqEnd;
pub use solid::Solid;
pub use solid3d::{AcisDataLine, Body, Region, Solid3D};
pub use spline::{Spline, SplineFlags};
pub use trace::Trace;

use crate::error::Result;
use crate::io::dxf::reader::DxfStreamReader;
use crate::io::dxf::writer::DxfStreamWriter;
use crate::notification::NotificationType;

/// Enumeration of all record types for type-safe storage
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    /// Point entity
    Point(Point),
    /// Line entity
    Line(Line),
    /// Circle entity
    Circle(Circle),
    /// Arc entity
    Arc(Arc),
    /// Solid entity (filled quadrilateral)
    Solid(Solid),
    /// Trace entity
    Trace(Trace),
    /// Ellipse entity
    Ellipse(Ellipse),
    /// Spline entity
    Spline(Spline),
    /// 3D solid entity (ACIS)
    Solid3D(Solid3D),
    /// Region entity (ACIS)
    Region(Region),
    /// Body entity (ACIS)
    Body(Body),
    /// Attribute definition entity
    AttributeDefinition(AttributeDefinition),
    /// Leader entity
    Leader(Leader),
    /// Sequence-end marker
    SeqEnd(SeqEnd),
    /// End-of-block marker
    BlockEnd(BlockEnd),
}

impl EntityType {
    /// Get a reference to the record as the entity trait object
    pub fn as_entity(&self) -> &dyn DxfEntity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Trace(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Solid3D(e) => e,
            EntityType::Region(e) => e,
            EntityType::Body(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::Leader(e) => e,
            EntityType::SeqEnd(e) => e,
            EntityType::BlockEnd(e) => e,
        }
    }

    /// Get a mutable reference to the record as the entity trait object
    pub fn as_entity_mut(&mut self) -> &mut dyn DxfEntity {
        match self {
            EntityType::Point(e) => e,
            EntityType::Line(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Arc(e) => e,
            EntityType::Solid(e) => e,
            EntityType::Trace(e) => e,
            EntityType::Ellipse(e) => e,
            EntityType::Spline(e) => e,
            EntityType::Solid3D(e) => e,
            EntityType::Region(e) => e,
            EntityType::Body(e) => e,
            EntityType::AttributeDefinition(e) => e,
            EntityType::Leader(e) => e,
            EntityType::SeqEnd(e) => e,
            EntityType::BlockEnd(e) => e,
        }
    }

    /// The introducer value of the wrapped record
    pub fn record_type(&self) -> &'static str {
        self.as_entity().record_type()
    }

    /// Shared presentation attributes of the wrapped record
    pub fn common(&self) -> &EntityCommon {
        self.as_entity().common()
    }

    /// Write the wrapped record through the shared encoder
    pub fn write(
        &mut self,
        writer: &mut dyn DxfStreamWriter,
        ctx: &mut CodecContext,
    ) -> Result<()> {
        write_entity(writer, ctx, self.as_entity_mut())
    }
}

/// Read the next record from the stream, dispatching on the group-code-0
/// introducer value.
///
/// Unknown record types are skipped with a notification, never an error.
/// Returns `None` at end of stream or at an `ENDSEC`/`EOF` marker (which is
/// left in the stream).
pub fn read_next_entity(
    reader: &mut dyn DxfStreamReader,
    ctx: &mut CodecContext,
) -> Result<Option<EntityType>> {
    loop {
        let pair = match reader.read_pair()? {
            Some(pair) => pair,
            None => return Ok(None),
        };

        if pair.code != 0 {
            ctx.notifications.notify(
                NotificationType::Warning,
                format!(
                    "stray group code {} at line {} outside any record",
                    pair.code, pair.line
                ),
            );
            continue;
        }

        let entity = match pair.value_string.as_str() {
            "ENDSEC" | "EOF" => {
                reader.push_back(pair);
                return Ok(None);
            }
            "POINT" => EntityType::Point(read_entity(reader, ctx)?),
            "LINE" => EntityType::Line(read_entity(reader, ctx)?),
            "CIRCLE" => EntityType::Circle(read_entity(reader, ctx)?),
            "ARC" => EntityType::Arc(read_entity(reader, ctx)?),
            "SOLID" => EntityType::Solid(read_entity(reader, ctx)?),
            "TRACE" => EntityType::Trace(read_entity(reader, ctx)?),
            "ELLIPSE" => EntityType::Ellipse(read_entity(reader, ctx)?),
            "SPLINE" => EntityType::Spline(read_entity(reader, ctx)?),
            "3DSOLID" => EntityType::Solid3D(read_entity(reader, ctx)?),
            "REGION" => EntityType::Region(read_entity(reader, ctx)?),
            "BODY" => EntityType::Body(read_entity(reader, ctx)?),
            "ATTDEF" => EntityType::AttributeDefinition(read_entity(reader, ctx)?),
            "LEADER" => EntityType::Leader(read_entity(reader, ctx)?),
            "SEQEND" => EntityType::SeqEnd(read_entity(reader, ctx)?),
            "ENDBLK" => EntityType::BlockEnd(read_entity(reader, ctx)?),
            other => {
                ctx.notifications.notify(
                    NotificationType::NotImplemented,
                    format!("record type '{}' at line {}", other, pair.line),
                );
                skip_record(reader)?;
                continue;
            }
        };
        return Ok(Some(entity));
    }
}

/// Consume pairs up to (not including) the next group-code-0 pair.
fn skip_record(reader: &mut dyn DxfStreamReader) -> Result<()> {
    while let Some(pair) = reader.read_pair()? {
        if pair.code == 0 {
            reader.push_back(pair);
            break;
        }
    }
    Ok(())
}

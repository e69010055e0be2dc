//! # dxfrec
//!
//! A pure Rust library for reading and writing CAD entity records in DXF
//! format (ASCII and Binary).
//!
//! The library is a catalogue of entity record types (solids, splines,
//! ellipses, leaders, attribute definitions, ...) marshalled through one
//! shared protocol: a tag/value decoder that dispatches group codes into
//! typed fields, and an encoder that emits the groups back in canonical
//! order with default-valued optional groups omitted.
//!
//! ## Quick Start
//!
//! ```rust
//! use dxfrec::entities::{read_next_entity, CodecContext, EntityType};
//! use dxfrec::io::dxf::DxfTextReader;
//! use dxfrec::DxfVersion;
//! use std::io::Cursor;
//!
//! let data = "0\nSOLID\n8\nWALLS\n10\n0.0\n20\n0.0\n30\n0.0\n0\nEOF\n";
//! let mut reader = DxfTextReader::from_reader(Cursor::new(data.as_bytes().to_vec()));
//! let mut ctx = CodecContext::new(DxfVersion::AC1032);
//!
//! while let Some(entity) = read_next_entity(&mut reader, &mut ctx).unwrap() {
//!     if let EntityType::Solid(solid) = entity {
//!         assert_eq!(solid.common.layer, "WALLS");
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`entities::DxfEntity`] - per-record dispatch table and field order
//! - [`entities::codec`] - the shared decode/encode protocol
//! - [`entities::EntityCommon`] - shared presentation attributes and the
//!   validated accessor layer
//! - [`io::dxf`] - tagged stream readers and writers (ASCII and binary)
//! - [`notification`] - the non-fatal diagnostic side channel

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Color, DxfVersion, Handle, LineWeight, Transparency, Vector3};

// Re-export entity types
pub use entities::{
    Arc, AttributeDefinition, Body, BlockEnd, Circle, CodecContext, DxfEntity, Ellipse,
    EntityCommon, EntityType, Leader, Line, Point, Region, SeqEnd, Solid, Solid3D, Spline, Trace,
};

// Re-export table types
pub use tables::{Table, TableEntry, Ucs};

// Re-export I/O types
pub use io::dxf::{DxfBinaryWriter, DxfTextReader, DxfTextWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_codec_context_creation() {
        let ctx = CodecContext::new(DxfVersion::AC1015);
        assert_eq!(ctx.version, DxfVersion::AC1015);
        assert!(!ctx.flatland);

        let ctx = CodecContext::new(DxfVersion::AC1009).with_flatland(true);
        assert!(ctx.flatland);
    }
}

//! User Coordinate System table record

use super::TableEntry;
use crate::entities::codec::CodecContext;
use crate::error::Result;
use crate::io::dxf::reader::DxfStreamReader;
use crate::io::dxf::writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::notification::NotificationType;
use crate::types::{Handle, Vector3};

/// A User Coordinate System (UCS) table record
///
/// Table records follow the same tag/value protocol as entity records, with
/// their own subclass markers and without the presentation attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Ucs {
    /// Unique handle (group 5)
    pub handle: Handle,
    /// UCS name (group 2)
    pub name: String,
    /// Standard flags (group 70)
    pub flags: i16,
    /// Origin point (group 10)
    pub origin: Vector3,
    /// X-axis direction (group 11)
    pub x_axis: Vector3,
    /// Y-axis direction (group 12)
    pub y_axis: Vector3,
}

impl Ucs {
    /// Create a new world-aligned UCS
    pub fn new(name: impl Into<String>) -> Self {
        Ucs {
            handle: Handle::NULL,
            name: name.into(),
            flags: 0,
            origin: Vector3::ZERO,
            x_axis: Vector3::UNIT_X,
            y_axis: Vector3::UNIT_Y,
        }
    }

    /// Create a UCS with specific origin and axes
    pub fn from_origin_axes(
        name: impl Into<String>,
        origin: Vector3,
        x_axis: Vector3,
        y_axis: Vector3,
    ) -> Self {
        Ucs {
            origin,
            x_axis,
            y_axis,
            ..Ucs::new(name)
        }
    }

    /// Z-axis direction (cross product of X and Y)
    pub fn z_axis(&self) -> Vector3 {
        self.x_axis.cross(&self.y_axis)
    }

    /// Decode a UCS record from the stream. The caller has consumed the
    /// `0/UCS` introducer; decoding stops at the next group-code-0 pair,
    /// which stays in the stream.
    pub fn read(reader: &mut dyn DxfStreamReader, ctx: &mut CodecContext) -> Result<Self> {
        let mut ucs = Ucs::new("");

        loop {
            let pair = match reader.read_pair()? {
                Some(pair) => pair,
                None => break,
            };
            if pair.code == 0 {
                reader.push_back(pair);
                break;
            }
            match pair.code {
                5 => ucs.handle = pair.expect_handle()?,
                2 => ucs.name = pair.value_string.clone(),
                70 => ucs.flags = pair.expect_i16()?,
                10 => ucs.origin.x = pair.expect_double()?,
                20 => ucs.origin.y = pair.expect_double()?,
                30 => ucs.origin.z = pair.expect_double()?,
                11 => ucs.x_axis.x = pair.expect_double()?,
                21 => ucs.x_axis.y = pair.expect_double()?,
                31 => ucs.x_axis.z = pair.expect_double()?,
                12 => ucs.y_axis.x = pair.expect_double()?,
                22 => ucs.y_axis.y = pair.expect_double()?,
                32 => ucs.y_axis.z = pair.expect_double()?,
                100 => {
                    if ctx.version.has_subclass_markers()
                        && pair.value_string != "AcDbSymbolTableRecord"
                        && pair.value_string != "AcDbUCSTableRecord"
                    {
                        ctx.notifications.notify(
                            NotificationType::Warning,
                            format!(
                                "UCS: unexpected subclass marker '{}' at line {}",
                                pair.value_string, pair.line
                            ),
                        );
                    }
                }
                330 => {} // owner table handle; not kept on table records
                _ => {
                    ctx.notifications.notify(
                        NotificationType::Warning,
                        format!("UCS: unknown group code {} at line {}", pair.code, pair.line),
                    );
                }
            }
        }

        Ok(ucs)
    }

    /// Encode the record: introducer, identity, markers, then the axes in
    /// canonical order.
    pub fn write(&self, writer: &mut dyn DxfStreamWriter, ctx: &CodecContext) -> Result<()> {
        writer.write_record_type("UCS")?;
        if self.handle.is_valid() {
            writer.write_handle(5, self.handle)?;
        }
        if ctx.version.has_subclass_markers() {
            writer.write_subclass("AcDbSymbolTableRecord")?;
            writer.write_subclass("AcDbUCSTableRecord")?;
        }
        writer.write_string(2, &self.name)?;
        writer.write_i16(70, self.flags)?;
        writer.write_point3d(10, self.origin)?;
        writer.write_point3d(11, self.x_axis)?;
        writer.write_point3d(12, self.y_axis)?;
        Ok(())
    }
}

impl TableEntry for Ucs {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::reader::DxfTextReader;
    use crate::io::dxf::writer::DxfTextWriter;
    use crate::types::DxfVersion;
    use std::io::Cursor;

    #[test]
    fn test_z_axis() {
        let ucs = Ucs::new("World");
        assert_eq!(ucs.z_axis(), Vector3::UNIT_Z);
    }

    #[test]
    fn test_ucs_roundtrip() {
        let ucs = Ucs::from_origin_axes(
            "Front",
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::UNIT_X,
            Vector3::UNIT_Z,
        );

        let mut buf = Vec::new();
        let mut ctx = CodecContext::new(DxfVersion::AC1032);
        {
            let mut writer = DxfTextWriter::new(&mut buf);
            ucs.write(&mut writer, &ctx).unwrap();
        }

        let text = String::from_utf8(buf).unwrap();
        // Strip the introducer; read() expects it consumed.
        let body = text.splitn(3, '\n').nth(2).unwrap();
        let mut reader =
            DxfTextReader::from_reader(Cursor::new(format!("{}0\nENDTAB\n", body).into_bytes()));
        let decoded = Ucs::read(&mut reader, &mut ctx).unwrap();
        assert_eq!(decoded, ucs);
        assert!(ctx.notifications.is_empty());
    }
}

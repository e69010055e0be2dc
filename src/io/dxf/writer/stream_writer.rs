//! DXF stream writer trait and helpers

use crate::error::Result;
use crate::types::{Color, Handle, Vector3};

/// Trait for writing DXF code/value pairs
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with an i16 value
    fn write_i16(&mut self, code: i32, value: i16) -> Result<()>;

    /// Write a code/value pair with an i32 value
    fn write_i32(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a code/value pair with an i64 value
    fn write_i64(&mut self, code: i32, value: i64) -> Result<()>;

    /// Write a code/value pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a code/value pair with a boolean value
    fn write_bool(&mut self, code: i32, value: bool) -> Result<()>;

    /// Write a code/value pair with a handle value (bare hex)
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()>;

    /// Flush the writer
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a 3D point (codes `x_code`/`x_code+10`/`x_code+20`)
    fn write_point3d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        self.write_double(x_code + 20, point.z)?;
        Ok(())
    }

    /// Write an indexed color (code 62); true colors are emitted separately
    /// as group 420 by the record encoder.
    fn write_color_index(&mut self, code: i32, color: Color) -> Result<()> {
        match color {
            Color::ByLayer => self.write_i16(code, 256),
            Color::ByBlock => self.write_i16(code, 0),
            Color::Index(index) => self.write_i16(code, index as i16),
            // A true color still carries its nearest-index group; white is
            // the conventional stand-in.
            Color::Rgb { .. } => self.write_i16(code, 7),
        }
    }

    /// Write a record introducer (group 0)
    fn write_record_type(&mut self, record_type: &str) -> Result<()> {
        self.write_string(0, record_type)
    }

    /// Write a subclass marker (group 100)
    fn write_subclass(&mut self, marker: &str) -> Result<()> {
        self.write_string(100, marker)
    }
}

// Auto-implement the extension trait for all stream writers, including
// trait objects.
impl<T: DxfStreamWriter + ?Sized> DxfStreamWriterExt for T {}

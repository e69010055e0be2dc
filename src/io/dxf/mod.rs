//! DXF (Drawing Exchange Format) tagged stream reading and writing

mod group_code;
pub mod reader;
pub mod writer;

pub use group_code::GroupCodeValueType;
pub use reader::{DxfCodePair, DxfStreamReader, DxfTextReader};
pub use writer::{DxfBinaryWriter, DxfStreamWriter, DxfStreamWriterExt, DxfTextWriter};

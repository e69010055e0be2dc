//! Core value types shared by all DXF records

pub mod color;
pub mod handle;
pub mod line_weight;
pub mod transparency;
pub mod vector;
pub mod version;

pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use transparency::Transparency;
pub use vector::Vector3;
pub use version::DxfVersion;

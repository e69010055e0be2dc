//! I/O backends for the tagged record format

pub mod dxf;

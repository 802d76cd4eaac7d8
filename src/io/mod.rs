//! Drawing persistence and exchange
//!
//! JSON is the native save format; DXF export produces an ASCII R12-level
//! file other CAD packages can open.

pub mod dxf;
pub mod json;

pub use dxf::to_dxf_string;
pub use json::DrawingFile;

//! sgdk-export library
//!
//! Turns procedurally rendered characters into SGDK sprite resources for the
//! Mega Drive: a 16-color palette, 4bpp tile data per frame, and the C source
//! and header that declare them.

pub mod codegen;
pub mod export;
pub mod hardware;
pub mod manifest;
pub mod packing;
pub mod palette;
pub mod quantize;
pub mod sheet;
pub mod sprite;

pub use export::{encode_character, export_character, quantize_character, ExportSummary};
pub use palette::Palette;
pub use quantize::IndexedFrame;
pub use sprite::EncodedSprite;

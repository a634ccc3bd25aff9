//! Character export pipeline
//!
//! spec -> rendered frames -> quantized frames -> packed tiles -> files.
//!
//! Three files are written, in order, next to the requested `.c` path:
//! `N.c`, `N.h` and the `N.png` reference sheet. A failed write is returned
//! as is; files written before it are left on disk.

use crate::codegen::{write_c_source, write_header};
use crate::palette::Palette;
use crate::quantize::{quantize_frame, IndexedFrame};
use crate::sheet::{build_sheet, write_sheet};
use crate::sprite::EncodedSprite;
use anyhow::{Context, Result};
use character_gen::{render_frames, CharacterSpec};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// What an export wrote
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub source: PathBuf,
    pub header: PathBuf,
    /// `None` when the sheet would be empty (zero-size sprite)
    pub sheet: Option<PathBuf>,
    pub frame_count: usize,
    pub bytes_per_frame: usize,
    pub tiles_per_axis: u32,
    pub tile_count: u32,
}

/// Render and quantize every frame of a character
pub fn quantize_character(spec: &CharacterSpec) -> (Palette, Vec<IndexedFrame>) {
    let palette = Palette::from_spec(spec);
    let frames = render_frames(spec)
        .iter()
        .map(|frame| quantize_frame(frame, &palette))
        .collect();
    (palette, frames)
}

/// Full in-memory encoding of a character under the symbol prefix `name`
pub fn encode_character(spec: &CharacterSpec, name: &str) -> EncodedSprite {
    let (palette, frames) = quantize_character(spec);
    EncodedSprite::encode(name, spec.size, &palette, &frames)
}

fn create_writer(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Failed to create output: {:?}", path))?;
    Ok(BufWriter::new(file))
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let mut writer = create_writer(path)?;
    write(&mut writer)
        .and_then(|_| writer.flush())
        .with_context(|| format!("Failed to write {:?}", path))
}

/// Export a character to `output` (the `.c` file) plus its `.h` and `.png`
pub fn export_character(spec: &CharacterSpec, output: &Path) -> Result<ExportSummary> {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Output path has no usable file name: {:?}", output))?;
    let dir = output.parent().unwrap_or_else(|| Path::new(""));
    let header_file = format!("{}.h", stem);
    let header = dir.join(&header_file);
    let sheet_path = dir.join(format!("{}.png", stem));

    let (palette, frames) = quantize_character(spec);
    let sprite = EncodedSprite::encode(stem, spec.size, &palette, &frames);

    write_file(output, |w| write_c_source(w, &sprite, &header_file))?;
    write_file(&header, |w| write_header(w, &sprite))?;

    let sheet = build_sheet(&frames, &palette, spec.size);
    let sheet_written = if sheet.width() == 0 || sheet.height() == 0 {
        tracing::warn!("Sprite {} is empty, skipping reference sheet", sprite.name);
        None
    } else {
        write_sheet(&sheet, &sheet_path)?;
        Some(sheet_path)
    };

    let summary = ExportSummary {
        source: output.to_path_buf(),
        header,
        sheet: sheet_written,
        frame_count: sprite.frame_count(),
        bytes_per_frame: sprite.frames.first().map_or(0, Vec::len),
        tiles_per_axis: sprite.tiles_per_axis,
        tile_count: sprite.tile_count,
    };

    tracing::info!(
        "Exported {}: {} frame(s), {}x{} tiles, {} bytes/frame",
        sprite.name,
        summary.frame_count,
        summary.tiles_per_axis,
        summary.tiles_per_axis,
        summary.bytes_per_frame
    );

    Ok(summary)
}

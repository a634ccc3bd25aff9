//! SGDK C source and header generation
//!
//! Output is plain C against `<genesis.h>`: a `u16` palette, one `u8` tile
//! array per frame, one `SpriteDefinition` per frame and, for animated
//! characters, an array of pointers to those definitions.

use crate::hardware::PALETTE_SIZE;
use crate::sprite::EncodedSprite;
use std::fmt::UpperHex;
use std::io::{self, Write};

/// Palette words per printed row
const PALETTE_ROW: usize = 8;
/// Tile bytes per printed row
const DATA_ROW: usize = 16;

/// Write `values` as comma-separated hex literals, `per_row` to a line
fn write_hex_rows<W: Write, T: UpperHex + Copy>(
    w: &mut W,
    values: &[T],
    per_row: usize,
    digits: usize,
) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i % per_row == 0 {
            w.write_all(b"    ")?;
        }
        write!(w, "0x{:0digits$X}", value, digits = digits)?;
        if i + 1 < values.len() {
            w.write_all(b", ")?;
        }
        if i % per_row == per_row - 1 {
            w.write_all(b"\n")?;
        }
    }
    w.write_all(b"\n};\n\n")
}

/// Write the `.c` file; `header_file` is the name used in `#include`
pub fn write_c_source<W: Write>(
    w: &mut W,
    sprite: &EncodedSprite,
    header_file: &str,
) -> io::Result<()> {
    writeln!(w, "#include \"{}\"", header_file)?;
    writeln!(w)?;

    writeln!(
        w,
        "const u16 {}[{}] = {{",
        sprite.palette_symbol(),
        PALETTE_SIZE
    )?;
    write_hex_rows(w, &sprite.palette, PALETTE_ROW, 4)?;

    for (k, data) in sprite.frames.iter().enumerate() {
        writeln!(
            w,
            "const u8 {}[{}] = {{",
            sprite.frame_data_symbol(k),
            data.len()
        )?;
        write_hex_rows(w, data, DATA_ROW, 2)?;
    }

    for k in 0..sprite.frame_count() {
        writeln!(w, "const SpriteDefinition {} = {{", sprite.frame_symbol(k))?;
        writeln!(w, "    .w = {},", sprite.tiles_per_axis)?;
        writeln!(w, "    .h = {},", sprite.tiles_per_axis)?;
        writeln!(w, "    .tiles = {},", sprite.frame_data_symbol(k))?;
        writeln!(w, "    .palette = {},", sprite.palette_symbol())?;
        writeln!(w, "    .numTile = {}", sprite.tile_count)?;
        writeln!(w, "}};")?;
        writeln!(w)?;
    }

    if sprite.has_animation() {
        let count = sprite.frame_count();
        writeln!(
            w,
            "const SpriteDefinition* {}[{}] = {{",
            sprite.animation_symbol(),
            count
        )?;
        for k in 0..count {
            let sep = if k + 1 < count { "," } else { "" };
            writeln!(w, "    &{}{}", sprite.frame_symbol(k), sep)?;
        }
        writeln!(w, "}};")?;
        writeln!(w)?;
    }

    Ok(())
}

/// Write the `.h` file declaring every symbol of the `.c` file
pub fn write_header<W: Write>(w: &mut W, sprite: &EncodedSprite) -> io::Result<()> {
    let prefix = sprite.macro_prefix();
    let guard = format!("{}_H", prefix);

    writeln!(w, "#ifndef {}", guard)?;
    writeln!(w, "#define {}", guard)?;
    writeln!(w)?;
    writeln!(w, "#include <genesis.h>")?;
    writeln!(w)?;

    writeln!(
        w,
        "extern const u16 {}[{}];",
        sprite.palette_symbol(),
        PALETTE_SIZE
    )?;
    for k in 0..sprite.frame_count() {
        writeln!(w, "extern const u8 {}[];", sprite.frame_data_symbol(k))?;
        writeln!(w, "extern const SpriteDefinition {};", sprite.frame_symbol(k))?;
    }
    if sprite.has_animation() {
        writeln!(
            w,
            "extern const SpriteDefinition* {}[{}];",
            sprite.animation_symbol(),
            sprite.frame_count()
        )?;
    }

    writeln!(w)?;
    writeln!(w, "#define {}_FRAME_COUNT {}", prefix, sprite.frame_count())?;
    writeln!(w, "#define {}_SIZE {}", prefix, sprite.size)?;
    writeln!(w)?;
    writeln!(w, "#endif // {}", guard)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sprite(frames: usize) -> EncodedSprite {
        let mut palette = [0u16; PALETTE_SIZE];
        palette[1] = 0x0ACE;
        palette[6] = 0x0EEE;
        EncodedSprite {
            name: "hero".to_string(),
            size: 4,
            palette,
            frames: (0..frames).map(|k| vec![0x10 * k as u8 + 1; 8]).collect(),
            tiles_per_axis: 1,
            tile_count: 1,
        }
    }

    fn c_source(sprite: &EncodedSprite) -> String {
        let mut out = Vec::new();
        write_c_source(&mut out, sprite, "hero.h").unwrap();
        String::from_utf8(out).unwrap()
    }

    fn header(sprite: &EncodedSprite) -> String {
        let mut out = Vec::new();
        write_header(&mut out, sprite).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_palette_block() {
        let src = c_source(&sample_sprite(1));
        let expected = "const u16 hero_palette[16] = {\n\
            \x20   0x0000, 0x0ACE, 0x0000, 0x0000, 0x0000, 0x0000, 0x0EEE, 0x0000, \n\
            \x20   0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000\n\
            \n};\n\n";
        assert!(src.starts_with("#include \"hero.h\"\n\n"));
        assert!(src.contains(expected), "palette block:\n{}", src);
    }

    #[test]
    fn test_frame_data_partial_row() {
        let src = c_source(&sample_sprite(1));
        let expected = "const u8 hero_frame0_data[8] = {\n\
            \x20   0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01\n};\n\n";
        assert!(src.contains(expected), "frame block:\n{}", src);
    }

    #[test]
    fn test_sprite_definition() {
        let src = c_source(&sample_sprite(1));
        let expected = "const SpriteDefinition hero_frame0 = {\n\
            \x20   .w = 1,\n\
            \x20   .h = 1,\n\
            \x20   .tiles = hero_frame0_data,\n\
            \x20   .palette = hero_palette,\n\
            \x20   .numTile = 1\n\
            };\n\n";
        assert!(src.contains(expected), "definition:\n{}", src);
        assert!(!src.contains("hero_animation"));
    }

    #[test]
    fn test_animation_table() {
        let src = c_source(&sample_sprite(3));
        let expected = "const SpriteDefinition* hero_animation[3] = {\n\
            \x20   &hero_frame0,\n\
            \x20   &hero_frame1,\n\
            \x20   &hero_frame2\n\
            };\n\n";
        assert!(src.ends_with(expected), "animation:\n{}", src);
        assert!(src.contains("const u8 hero_frame2_data[8] = {\n    0x21,"));
    }

    #[test]
    fn test_header_single_frame() {
        let h = header(&sample_sprite(1));
        let expected = "#ifndef HERO_H\n\
            #define HERO_H\n\
            \n\
            #include <genesis.h>\n\
            \n\
            extern const u16 hero_palette[16];\n\
            extern const u8 hero_frame0_data[];\n\
            extern const SpriteDefinition hero_frame0;\n\
            \n\
            #define HERO_FRAME_COUNT 1\n\
            #define HERO_SIZE 4\n\
            \n\
            #endif // HERO_H\n";
        assert_eq!(h, expected);
    }

    #[test]
    fn test_header_declares_animation() {
        let h = header(&sample_sprite(2));
        assert!(h.contains("extern const SpriteDefinition hero_frame1;\n"));
        assert!(h.contains("extern const SpriteDefinition* hero_animation[2];\n"));
        assert!(h.contains("#define HERO_FRAME_COUNT 2\n"));
    }

    #[test]
    fn test_full_rows_end_with_newline() {
        let mut sprite = sample_sprite(1);
        sprite.frames[0] = vec![0xAB; 32];
        let src = c_source(&sprite);
        let row = format!("    {}\n", vec!["0xAB"; 16].join(", "));
        let expected = format!(
            "const u8 hero_frame0_data[32] = {{\n{}{}\n}};\n\n",
            row.replace("0xAB\n", "0xAB, \n"),
            row
        );
        assert!(src.contains(&expected), "rows:\n{}", src);
    }
}

//! Bitmap font format parser
//!
//! Parses line-oriented font descriptions of the form:
//!
//! ```text
//! FONT Ascii Small
//! SIZE 3 2
//! CHAR 65
//! 101
//! 111
//! ```
//!
//! A `FONT <name>` header and a `SIZE <width> <height>` line are followed by
//! zero or more glyph blocks: a `CHAR <codepoint>` line plus exactly `height`
//! rows of exactly `width` characters drawn from `0`/`1`. The whole input is
//! consumed or the parse fails; no partial font is ever returned.

use super::{Font, FontError, FontResult, Glyph};
use crate::foundation::math::Vec2i;
use crate::render::{Rect, PIXEL_CLEAR, PIXEL_OPAQUE};

/// Bitmap font file parser
pub struct FontParser;

impl FontParser {
    /// Parse a font document into a [`Font`]
    ///
    /// The line cursor moves strictly front-to-back with no lookahead or
    /// backtracking. A codepoint occurring twice overwrites the earlier
    /// glyph, both in the atlas pixels and in the glyph map. Trailing empty
    /// lines are tolerated; an empty line anywhere else is malformed.
    ///
    /// # Errors
    ///
    /// [`FontError::MalformedHeader`] if the `FONT` or `SIZE` line is missing
    /// or malformed; [`FontError::MalformedGlyphBlock`] if a glyph block is
    /// malformed or truncated.
    pub fn parse(data: &str) -> FontResult<Font> {
        let mut lines: Vec<&str> = data.split('\n').collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        // Position of the next unconsumed line; advanced monotonically.
        let mut pos = 0usize;

        let name = lines
            .first()
            .and_then(|line| line.strip_prefix("FONT "))
            .ok_or(FontError::MalformedHeader(1))?;
        pos += 1;

        let (cell_width, cell_height) = lines
            .get(pos)
            .and_then(|line| Self::parse_size(line))
            .ok_or(FontError::MalformedHeader(2))?;
        pos += 1;

        let mut font = Font::new(name.to_string(), cell_width, cell_height);

        while pos < lines.len() {
            pos = Self::parse_glyph_block(&mut font, &lines, pos)?;
        }

        log::debug!(
            "Parsed font '{}': {}x{} cells, {} glyphs",
            font.name(),
            cell_width,
            cell_height,
            font.glyph_count()
        );

        Ok(font)
    }

    /// Parse a `SIZE <width> <height>` line
    fn parse_size(line: &str) -> Option<(u32, u32)> {
        let mut tokens = line.strip_prefix("SIZE ")?.split(' ');
        let width = tokens.next()?.parse().ok()?;
        let height = tokens.next()?.parse().ok()?;
        if tokens.next().is_some() {
            return None;
        }
        Some((width, height))
    }

    /// Consume one `CHAR` block starting at `pos`; returns the new position
    fn parse_glyph_block(font: &mut Font, lines: &[&str], mut pos: usize) -> FontResult<usize> {
        let codepoint: u32 = lines[pos]
            .strip_prefix("CHAR ")
            .and_then(|value| value.parse().ok())
            .ok_or(FontError::MalformedGlyphBlock(pos + 1))?;
        pos += 1;

        let cell_width = font.cell_width();
        let cell_height = font.cell_height();
        let (col, row) = Font::grid_cell(codepoint);
        let origin_x = col * cell_width;
        let origin_y = row * cell_height;

        for bitmap_row in 0..cell_height {
            let line = lines
                .get(pos)
                .ok_or(FontError::MalformedGlyphBlock(pos + 1))?;
            if line.len() != cell_width as usize {
                return Err(FontError::MalformedGlyphBlock(pos + 1));
            }
            for (column, bit) in line.chars().enumerate() {
                let value = match bit {
                    '1' => PIXEL_OPAQUE,
                    '0' => PIXEL_CLEAR,
                    _ => return Err(FontError::MalformedGlyphBlock(pos + 1)),
                };
                font.atlas_mut()
                    .set_pixel(origin_x + column as u32, origin_y + bitmap_row, value);
            }
            pos += 1;
        }

        font.add_glyph(Glyph {
            codepoint,
            atlas_region: Rect::new(origin_x, origin_y, cell_width, cell_height),
            offset: Vec2i::new(0, 0),
            advance: cell_width,
        });

        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_font() {
        let font = FontParser::parse("FONT Ascii Small\nSIZE 3 2\nCHAR 65\n101\n111").unwrap();

        assert_eq!(font.name(), "Ascii Small");
        assert_eq!(font.cell_width(), 3);
        assert_eq!(font.cell_height(), 2);
        assert_eq!(font.glyph_count(), 1);

        // Codepoint 65 occupies cell (1, 4): pixels at x 3..6, y 8..10
        let glyph = font.glyph(65).unwrap();
        assert_eq!(glyph.atlas_region, Rect::new(3, 8, 3, 2));
        assert_eq!(font.atlas().pixel(3, 8), Some(PIXEL_OPAQUE));
        assert_eq!(font.atlas().pixel(4, 8), Some(PIXEL_CLEAR));
        assert_eq!(font.atlas().pixel(5, 8), Some(PIXEL_OPAQUE));
        assert_eq!(font.atlas().pixel(3, 9), Some(PIXEL_OPAQUE));
        assert_eq!(font.atlas().pixel(4, 9), Some(PIXEL_OPAQUE));
        assert_eq!(font.atlas().pixel(5, 9), Some(PIXEL_OPAQUE));
    }

    #[test]
    fn test_parse_empty_glyph_list() {
        let font = FontParser::parse("FONT Empty\nSIZE 4 4").unwrap();
        assert_eq!(font.glyph_count(), 0);
        assert_eq!(font.atlas().width(), 64);
        assert_eq!(font.atlas().height(), 64);
    }

    #[test]
    fn test_parse_name_keeps_spaces() {
        let font = FontParser::parse("FONT My Very Small Font\nSIZE 1 1").unwrap();
        assert_eq!(font.name(), "My Very Small Font");
    }

    #[test]
    fn test_parse_tolerates_trailing_newlines() {
        let font = FontParser::parse("FONT X\nSIZE 1 1\nCHAR 5\n1\n\n").unwrap();
        assert_eq!(font.glyph_count(), 1);
    }

    #[test]
    fn test_missing_header_is_rejected() {
        for source in ["", "SIZE 2 2", "BOLD X\nSIZE 2 2", "FONT"] {
            let err = FontParser::parse(source).unwrap_err();
            assert!(matches!(err, FontError::MalformedHeader(1)), "{source:?}");
        }
    }

    #[test]
    fn test_malformed_size_is_rejected() {
        for source in ["FONT X", "FONT X\nSIZE 2", "FONT X\nSIZE a b", "FONT X\nSIZE -1 2"] {
            let err = FontParser::parse(source).unwrap_err();
            assert!(matches!(err, FontError::MalformedHeader(2)), "{source:?}");
        }
    }

    #[test]
    fn test_wrong_row_length_is_rejected() {
        let err = FontParser::parse("FONT X\nSIZE 2 2\nCHAR 1\n11\n1").unwrap_err();
        assert!(matches!(err, FontError::MalformedGlyphBlock(5)));
    }

    #[test]
    fn test_truncated_block_is_rejected() {
        let err = FontParser::parse("FONT X\nSIZE 2 2\nCHAR 1\n11").unwrap_err();
        assert!(matches!(err, FontError::MalformedGlyphBlock(5)));
    }

    #[test]
    fn test_invalid_bitmap_character_is_rejected() {
        let err = FontParser::parse("FONT X\nSIZE 2 1\nCHAR 1\n12").unwrap_err();
        assert!(matches!(err, FontError::MalformedGlyphBlock(4)));
    }

    #[test]
    fn test_malformed_char_line_is_rejected() {
        for source in ["FONT X\nSIZE 1 1\nCHAR x\n1", "FONT X\nSIZE 1 1\nGLYPH 5\n1"] {
            let err = FontParser::parse(source).unwrap_err();
            assert!(matches!(err, FontError::MalformedGlyphBlock(3)), "{source:?}");
        }
    }

    #[test]
    fn test_last_write_wins_for_repeated_codepoint() {
        let font =
            FontParser::parse("FONT X\nSIZE 1 1\nCHAR 5\n1\nCHAR 5\n0").unwrap();

        assert_eq!(font.glyph_count(), 1);
        let glyph = font.glyph(5).unwrap();
        // Second block overwrote the atlas cell with a transparent pixel
        assert_eq!(
            font.atlas().pixel(glyph.atlas_region.x, glyph.atlas_region.y),
            Some(PIXEL_CLEAR)
        );
    }

    #[test]
    fn test_codepoint_past_grid_aliases_wrapped_cell() {
        // 261 % 16 == 5 and (261 / 16) % 16 == 0, so codepoint 261 lands in
        // the cell of codepoint 5; the later block wins the pixels.
        let font =
            FontParser::parse("FONT X\nSIZE 1 1\nCHAR 5\n0\nCHAR 261\n1").unwrap();

        assert_eq!(font.glyph_count(), 2);
        let low = font.glyph(5).unwrap();
        let high = font.glyph(261).unwrap();
        assert_eq!(low.atlas_region, high.atlas_region);
        assert_eq!(font.atlas().pixel(5, 0), Some(PIXEL_OPAQUE));
    }

    #[test]
    fn test_zero_sized_cells_are_accepted() {
        let font = FontParser::parse("FONT Degenerate\nSIZE 0 0\nCHAR 65").unwrap();
        assert_eq!(font.glyph_count(), 1);
        assert_eq!(font.atlas().width(), 0);
        assert_eq!(font.glyph(65).unwrap().advance, 0);
    }
}

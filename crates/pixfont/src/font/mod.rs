//! Bitmap font data model
//!
//! A [`Font`] owns a single atlas [`Surface`] holding every glyph bitmap,
//! packed into a fixed 16x16 grid of equally sized cells, plus per-codepoint
//! [`Glyph`] records. Glyph records carry coordinate rectangles into the
//! shared atlas, never their own pixel storage.

mod parser;

pub use parser::FontParser;

use std::collections::HashMap;

use thiserror::Error;

use crate::foundation::math::Vec2i;
use crate::render::{Rect, Surface};

/// Number of glyph cells along each axis of the atlas grid
pub const ATLAS_GRID: u32 = 16;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font parsing and glyph lookup
#[derive(Debug, Error)]
pub enum FontError {
    /// The `FONT` or `SIZE` line is missing or does not match the grammar
    #[error("line {0}: missing or malformed header")]
    MalformedHeader(usize),

    /// A `CHAR` line or one of its bitmap rows does not match the grammar
    #[error("line {0}: malformed glyph block")]
    MalformedGlyphBlock(usize),

    /// Requested character has no glyph in this font
    #[error("character '{0}' not found in atlas")]
    GlyphNotFound(char),
}

/// A single glyph: a coordinate rectangle into the shared atlas plus metrics
#[derive(Debug, Clone)]
pub struct Glyph {
    /// Unicode scalar value this glyph renders
    pub codepoint: u32,
    /// Pixel rectangle within the font's atlas surface
    pub atlas_region: Rect,
    /// Additional pixel offset applied at draw time
    ///
    /// Always zero in the current format; reserved for sub-cell positioning.
    pub offset: Vec2i,
    /// Horizontal pixels to advance the cursor after drawing
    pub advance: u32,
}

/// A parsed bitmap font: name, cell metrics, glyph records, and the atlas
///
/// The atlas is immutable after parsing; wrap the font in an `Arc` to share
/// it read-only across any number of compositors.
#[derive(Debug, Clone)]
pub struct Font {
    name: String,
    cell_width: u32,
    cell_height: u32,
    glyphs: HashMap<u32, Glyph>,
    atlas: Surface,
}

impl Font {
    pub(crate) fn new(name: String, cell_width: u32, cell_height: u32) -> Self {
        Self {
            name,
            cell_width,
            cell_height,
            glyphs: HashMap::new(),
            atlas: Surface::new(ATLAS_GRID * cell_width, ATLAS_GRID * cell_height),
        }
    }

    /// Register a glyph; a repeated codepoint overwrites the earlier record
    pub(crate) fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.insert(glyph.codepoint, glyph);
    }

    pub(crate) fn atlas_mut(&mut self) -> &mut Surface {
        &mut self.atlas
    }

    /// Atlas grid cell for a codepoint
    ///
    /// The row index wraps so codepoints past the 16x16 grid alias earlier
    /// cells rather than falling outside the atlas.
    pub(crate) const fn grid_cell(codepoint: u32) -> (u32, u32) {
        (codepoint % ATLAS_GRID, (codepoint / ATLAS_GRID) % ATLAS_GRID)
    }

    /// Font name from the format header
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Width in pixels of every glyph cell
    pub const fn cell_width(&self) -> u32 {
        self.cell_width
    }

    /// Height in pixels of every glyph cell
    pub const fn cell_height(&self) -> u32 {
        self.cell_height
    }

    /// Number of registered glyphs
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Look up the glyph for a codepoint
    pub fn glyph(&self, codepoint: u32) -> Option<&Glyph> {
        self.glyphs.get(&codepoint)
    }

    /// Read-only view of the shared atlas surface
    pub const fn atlas(&self) -> &Surface {
        &self.atlas
    }

    /// Draw one glyph's atlas region onto `dst` at `pos`
    ///
    /// Returns the drawn glyph so callers can advance their cursor by its
    /// `advance`. Fails with [`FontError::GlyphNotFound`] when the font has
    /// no glyph for `codepoint`; the destination is untouched in that case.
    pub fn blit_glyph(&self, dst: &mut Surface, codepoint: u32, pos: Vec2i) -> FontResult<&Glyph> {
        let glyph = self.glyphs.get(&codepoint).ok_or_else(|| {
            FontError::GlyphNotFound(char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER))
        })?;
        dst.blit(&self.atlas, glyph.atlas_region, pos + glyph.offset);
        Ok(glyph)
    }

    /// Measure the pixel extent of `text` when drawn in a single line
    ///
    /// Width is the sum of the advances of known glyphs (unknown codepoints
    /// contribute nothing); height is the cell height.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let width = text
            .chars()
            .filter_map(|ch| self.glyphs.get(&u32::from(ch)))
            .map(|glyph| glyph.advance)
            .sum();
        (width, self.cell_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_font() -> Font {
        FontParser::parse("FONT Test\nSIZE 2 2\nCHAR 65\n10\n01\nCHAR 66\n11\n11").unwrap()
    }

    #[test]
    fn test_glyph_lookup() {
        let font = test_font();
        assert!(font.glyph(65).is_some());
        assert!(font.glyph(66).is_some());
        assert!(font.glyph(67).is_none());
    }

    #[test]
    fn test_glyph_metrics_match_cell() {
        let font = test_font();
        for codepoint in [65, 66] {
            let glyph = font.glyph(codepoint).unwrap();
            assert_eq!(glyph.atlas_region.w, font.cell_width());
            assert_eq!(glyph.atlas_region.h, font.cell_height());
            assert_eq!(glyph.advance, font.cell_width());
            assert_eq!(glyph.offset, Vec2i::new(0, 0));
        }
    }

    #[test]
    fn test_grid_placement() {
        let font = test_font();
        // Codepoint 65 = cell (1, 4) in a 16-column grid
        let glyph = font.glyph(65).unwrap();
        assert_eq!(glyph.atlas_region, Rect::new(font.cell_width(), 4 * font.cell_height(), 2, 2));
    }

    #[test]
    fn test_grid_cell_wraps_past_256() {
        assert_eq!(Font::grid_cell(0), (0, 0));
        assert_eq!(Font::grid_cell(65), (1, 4));
        assert_eq!(Font::grid_cell(255), (15, 15));
        // Row wraps: 256 aliases the cell of codepoint 0
        assert_eq!(Font::grid_cell(256), (0, 0));
        assert_eq!(Font::grid_cell(321), (1, 4));
    }

    #[test]
    fn test_blit_glyph_missing_is_error() {
        let font = test_font();
        let mut dst = Surface::new(4, 4);
        let err = font.blit_glyph(&mut dst, u32::from('Z'), Vec2i::new(0, 0)).unwrap_err();
        assert!(matches!(err, FontError::GlyphNotFound('Z')));
        assert!(dst.data().iter().all(|&px| px == 0));
    }

    #[test]
    fn test_measure_skips_unknown() {
        let font = test_font();
        assert_eq!(font.measure("AB"), (4, 2));
        assert_eq!(font.measure("AZB"), (4, 2));
        assert_eq!(font.measure(""), (0, 2));
    }
}

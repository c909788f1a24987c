//! Glyph-by-glyph text compositing
//!
//! [`TextCompositor`] redraws its destination surface from scratch on every
//! [`render`](TextCompositor::render) call, placing each glyph on a sine wave
//! whose phase is driven by an externally advanced frame counter. The
//! destination is double-buffered: readers only ever observe a fully drawn
//! surface, published by swap after the draw pass completes.

use std::sync::Arc;

use crate::config::CompositorConfig;
use crate::font::Font;
use crate::foundation::math::Vec2i;
use crate::render::Surface;

/// Frame-counter ticks per animation time unit
const TICKS_PER_SECOND: f64 = 60.0;
/// Divisor applied to the animation clock
const WAVE_PERIOD: f64 = 0.25;
/// Phase shift between adjacent glyphs
const WAVE_PHASE_STEP: f64 = 0.5;
/// Peak vertical displacement in pixels
const WAVE_AMPLITUDE: f64 = 2.0;

/// Vertical wave displacement for the glyph at `index` at `time` seconds
fn wave_offset(time: f64, index: usize) -> i32 {
    let phase = time / WAVE_PERIOD - index as f64 * WAVE_PHASE_STEP;
    (phase.sin() * WAVE_AMPLITUDE).round() as i32
}

/// Stateful text compositor with per-glyph wave animation
///
/// Font, text, frame counter, and bounds are set independently by the caller
/// at any time before [`render`](Self::render); rendering with no font set
/// publishes a cleared surface and draws nothing.
pub struct TextCompositor {
    font: Option<Arc<Font>>,
    text: String,
    frame: u32,
    padding: u32,
    front: Surface,
    back: Surface,
}

impl TextCompositor {
    /// Create a compositor with a zero-sized destination surface
    ///
    /// Call [`set_bounds`](Self::set_bounds) before rendering anything
    /// visible.
    pub fn new() -> Self {
        Self {
            font: None,
            text: String::new(),
            frame: 0,
            padding: 0,
            front: Surface::new(0, 0),
            back: Surface::new(0, 0),
        }
    }

    /// Create a compositor with bounds taken from configuration
    pub fn with_config(config: &CompositorConfig) -> Self {
        let mut compositor = Self::new();
        compositor.set_bounds(config.width, config.height, config.padding);
        compositor
    }

    /// Allocate the destination surface
    ///
    /// The surface measures `width + 2 * padding` by `height + 2 * padding`
    /// pixels; `render` never resizes it. Both buffers are replaced, so the
    /// published surface is blank until the next `render`.
    pub fn set_bounds(&mut self, width: u32, height: u32, padding: u32) {
        self.front = Surface::new(width + padding * 2, height + padding * 2);
        self.back = Surface::new(width + padding * 2, height + padding * 2);
        self.padding = padding;
    }

    /// Set the active font
    pub fn set_font(&mut self, font: Arc<Font>) {
        self.font = Some(font);
    }

    /// Set the string to composite
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Set the animation frame counter
    ///
    /// Advanced by the caller once per tick; drives the wave phase only.
    pub fn set_frame(&mut self, frame: u32) {
        self.frame = frame;
    }

    /// The most recently published surface
    pub const fn surface(&self) -> &Surface {
        &self.front
    }

    /// Clear and redraw the destination surface, then publish it
    ///
    /// Each codepoint of the text is drawn in sequence: the horizontal
    /// cursor starts at `padding` and advances by each drawn glyph's
    /// `advance`; the vertical position rides the wave
    /// `padding + round(sin(t / 0.25 - i / 2) * 2)` with `t = frame / 60`.
    /// Codepoints with no glyph in the active font are skipped with zero
    /// advance and returned; rendering of the rest of the string continues.
    /// With no font set this publishes a cleared surface.
    ///
    /// Idempotent: identical font, text, frame, and bounds produce a
    /// pixel-identical surface.
    pub fn render(&mut self) -> Vec<char> {
        self.back.clear();
        let mut missing = Vec::new();

        if let Some(font) = &self.font {
            let time = f64::from(self.frame) / TICKS_PER_SECOND;
            let mut x = self.padding as i32;

            for (index, ch) in self.text.chars().enumerate() {
                let y = self.padding as i32 + wave_offset(time, index);
                match font.blit_glyph(&mut self.back, u32::from(ch), Vec2i::new(x, y)) {
                    Ok(glyph) => x += glyph.advance as i32,
                    Err(err) => {
                        log::warn!("{err}, skipping");
                        missing.push(ch);
                    }
                }
            }
        }

        // Publish only after the full draw pass
        std::mem::swap(&mut self.front, &mut self.back);
        missing
    }
}

impl Default for TextCompositor {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot, non-animated rasterization of `text`
///
/// Allocates a fresh surface of `cell_width * char_count` by
/// `cell_height * 2` pixels and draws the string left-to-right at the top
/// edge with no padding. Codepoints missing from the font are skipped with
/// zero advance.
pub fn render_static(font: &Font, text: &str) -> Surface {
    let char_count = text.chars().count() as u32;
    let mut surface = Surface::new(font.cell_width() * char_count, font.cell_height() * 2);

    let mut x = 0i32;
    for ch in text.chars() {
        match font.blit_glyph(&mut surface, u32::from(ch), Vec2i::new(x, 0)) {
            Ok(glyph) => x += glyph.advance as i32,
            Err(err) => log::warn!("{err}, skipping"),
        }
    }

    surface
}

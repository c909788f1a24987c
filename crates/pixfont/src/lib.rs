//! # Pixfont
//!
//! A bitmap font parser and glyph-atlas text compositor.
//!
//! ## Features
//!
//! - **Font Format Parser**: Line-oriented `FONT`/`SIZE`/`CHAR` bitmap font
//!   descriptions parsed into an indexed glyph atlas
//! - **Glyph Atlas**: A single shared raster image addressed as a 16x16 grid
//!   of fixed-size cells
//! - **Text Compositing**: Glyph-by-glyph blitting onto a raster surface,
//!   with an optional per-glyph wave animation driven by an external frame
//!   counter
//! - **Pure CPU**: No windowing or GPU dependencies; callers own presentation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pixfont::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = std::fs::read_to_string("resources/fonts/ascii_small.font")?;
//!     let font = Arc::new(FontParser::parse(&source)?);
//!
//!     let mut compositor = TextCompositor::new();
//!     compositor.set_bounds(192, font.cell_height() * 2, 8);
//!     compositor.set_font(Arc::clone(&font));
//!     compositor.set_text("hello this is a real good test");
//!
//!     for frame in 0..60 {
//!         compositor.set_frame(frame);
//!         compositor.render();
//!         let _pixels = compositor.surface().as_bytes();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_possible_truncation)]

pub mod config;
pub mod font;
pub mod foundation;
pub mod render;

pub use config::{CompositorConfig, Config, ConfigError};
pub use font::{Font, FontError, FontParser, FontResult, Glyph};
pub use render::{render_static, Rect, Surface, TextCompositor};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{CompositorConfig, Config, ConfigError},
        font::{Font, FontError, FontParser, FontResult, Glyph},
        foundation::math::{Vec2, Vec2i},
        render::{render_static, Rect, Surface, TextCompositor},
    };
}

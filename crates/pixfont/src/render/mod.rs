//! Text rendering system
//!
//! This module provides CPU-side raster compositing for bitmap-font text:
//!
//! - [`Surface`]: An owned pixel buffer with clear and clipped-blit operations
//! - [`TextCompositor`]: Stateful per-frame text rendering with a wave
//!   animation driven by an external frame counter
//! - [`render_static`]: One-shot, non-animated text rasterization
//!
//! # Example
//!
//! ```no_run
//! use pixfont::{FontParser, render_static};
//!
//! let font = FontParser::parse("FONT Tiny\nSIZE 3 2\nCHAR 65\n101\n111")?;
//! let surface = render_static(&font, "A");
//! assert_eq!(surface.width(), 3);
//! # Ok::<(), pixfont::FontError>(())
//! ```

mod compositor;
mod surface;

pub use compositor::{render_static, TextCompositor};
pub use surface::{Rect, Surface, PIXEL_CLEAR, PIXEL_OPAQUE};

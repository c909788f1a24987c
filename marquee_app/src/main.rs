//! Marquee demo application
//!
//! This demonstrates the compositing pipeline by rendering an animated line
//! of wavy text with a bitmap font and writing each published frame as a PNG
//! image. The app plays the external-collaborator roles the library leaves
//! to its callers: fetching the font source text, ticking the frame counter,
//! and presenting the published surfaces.

use pixfont::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Demo settings, loadable from `marquee.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MarqueeConfig {
    /// Path to the bitmap font source text
    font_path: String,
    /// Line of text to animate
    text: String,
    /// Number of frames to render
    frames: u32,
    /// Directory receiving the PNG frames
    output_dir: String,
    /// Destination-surface settings
    compositor: CompositorConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            font_path: "resources/fonts/ascii_small.font".to_string(),
            text: "HELLO WORLD".to_string(),
            frames: 60,
            output_dir: "frames".to_string(),
            compositor: CompositorConfig::default(),
        }
    }
}

impl Config for MarqueeConfig {}

/// Resolve an asset path against common run directories
///
/// The binary may be run from the workspace root or from `marquee_app/`;
/// try both before giving up and returning the path unchanged.
fn resolve_asset_path(path: &str) -> PathBuf {
    let candidates = ["", "marquee_app/", "../marquee_app/"];
    for prefix in candidates {
        let candidate = PathBuf::from(format!("{prefix}{path}"));
        if candidate.exists() {
            return candidate;
        }
    }
    PathBuf::from(path)
}

/// Write a published surface as a PNG file
fn save_surface(surface: &Surface, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let image = image::RgbaImage::from_raw(
        surface.width(),
        surface.height(),
        surface.as_bytes().to_vec(),
    )
    .ok_or("surface byte length does not match its dimensions")?;
    image.save(path)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pixfont::foundation::logging::init();

    if let Ok(cwd) = std::env::current_dir() {
        log::info!("Current working directory: {cwd:?}");
    }

    let config = if Path::new("marquee.toml").exists() {
        MarqueeConfig::load_from_file("marquee.toml")?
    } else {
        log::info!("No marquee.toml found, using defaults");
        MarqueeConfig::default()
    };

    let font_path = resolve_asset_path(&config.font_path);
    log::info!("Loading font from {font_path:?}");
    let source = std::fs::read_to_string(&font_path)?;
    let font = Arc::new(FontParser::parse(&source)?);
    log::info!(
        "Loaded font '{}': {}x{} cells",
        font.name(),
        font.cell_width(),
        font.cell_height()
    );

    let mut compositor = TextCompositor::with_config(&config.compositor);
    compositor.set_font(Arc::clone(&font));
    compositor.set_text(&config.text);

    std::fs::create_dir_all(&config.output_dir)?;

    for frame in 0..config.frames {
        compositor.set_frame(frame);
        let missing = compositor.render();
        if !missing.is_empty() {
            log::warn!("{} codepoint(s) missing from the font: {missing:?}", missing.len());
        }
        let path = Path::new(&config.output_dir).join(format!("frame_{frame:03}.png"));
        save_surface(compositor.surface(), &path)?;
    }

    // One-shot static banner alongside the animation frames
    let banner = render_static(&font, &config.text);
    save_surface(&banner, &Path::new(&config.output_dir).join("banner.png"))?;

    log::info!("Wrote {} frames to {}/", config.frames, config.output_dir);
    Ok(())
}

//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a TOML file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to a TOML file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        if !path.ends_with(".toml") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Destination-surface settings for a [`TextCompositor`](crate::TextCompositor)
///
/// `width` and `height` describe the text area; the allocated surface adds
/// `padding` on all four sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositorConfig {
    /// Text area width in pixels
    pub width: u32,
    /// Text area height in pixels
    pub height: u32,
    /// Uniform margin reserved on all sides
    pub padding: u32,
}

impl CompositorConfig {
    /// Create a configuration with the given text area and no padding
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: 0,
        }
    }

    /// Set the padding
    #[must_use]
    pub const fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            width: 192,
            height: 16,
            padding: 8,
        }
    }
}

impl Config for CompositorConfig {}

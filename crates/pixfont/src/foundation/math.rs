//! Math utilities and types
//!
//! Provides fundamental 2D math types for raster graphics.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D integer vector type, used for pixel offsets and draw positions
pub type Vec2i = Vector2<i32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

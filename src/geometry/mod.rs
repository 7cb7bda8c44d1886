//! .
//!
//! Shapes live in normalized disc coordinates: the enclosing disc has radius 1 and is centered
//! in the origin, y grows downward (negative y is the top half of the image).
//! Pixel coordinates have the origin in top-left corner.

use {
  euclid::{Box2D, Point2D, Size2D, Transform2D},
  crate::sdf::SDF
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type P2 = Point2D<f64, WorldSpace>;

/// Normalized-to-pixel mapping of a canvas.
pub type Frame = Transform2D<f64, WorldSpace, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<f64, WorldSpace> {
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, WorldSpace> {}

/// Closed-interval containment, both edges included.
pub fn contains_inclusive(bounds: &Box2D<f64, WorldSpace>, point: P2) -> bool {
  point.x >= bounds.min.x && point.x <= bounds.max.x &&
  point.y >= bounds.min.y && point.y <= bounds.max.y
}

/// Pixels covered by `bounding_box` under `frame`, clipped to the canvas.
/// `None` if there is no intersection with the canvas at all.
pub fn to_pixel_space(
  bounding_box: Box2D<f64, WorldSpace>,
  frame: &Frame,
  resolution: Size2D<u32, PixelSpace>
) -> Option<Box2D<u32, PixelSpace>> {
  frame.outer_transformed_box(&bounding_box)
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f64()))
    .map(|x| x.to_u32())
}

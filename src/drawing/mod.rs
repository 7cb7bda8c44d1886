use crate::geometry::{Circle, Frame, P2};

#[cfg(feature = "drawing")]
mod impl_canvas_rgbaimage;
mod recording;
#[cfg(test)] mod tests;

#[cfg(feature = "drawing")]
pub use impl_canvas_rgbaimage::ImageCanvas;
pub use recording::{Op, RecordingCanvas};

/// Drawing surface the stimulus is painted on.
///
/// Coordinates passed to [`fill_circle`](Canvas::fill_circle) are normalized; the canvas maps
/// them to pixels with the frame installed by [`set_transform`](Canvas::set_transform).
pub trait Canvas {
  type Color: Copy;
  /// Background of a freshly sized stimulus.
  const BLACK: Self::Color;

  /// Reallocate to `width × height` pixels. Previous contents are discarded.
  fn resize(&mut self, width: u32, height: u32);
  fn clear_to_color(&mut self, color: Self::Color);
  fn set_transform(&mut self, frame: Frame);
  fn set_fill_color(&mut self, color: Self::Color);
  /// Filled disc without outline.
  fn fill_circle(&mut self, center: P2, diameter: f64);
}

pub trait Draw<Backend> {
  fn draw(&self, canvas: &mut Backend);
}

/// A shape paired with its fill.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

impl <B, C> Draw<B> for Texture<Circle, C> where B: Canvas<Color = C>, C: Copy {
  fn draw(&self, canvas: &mut B) {
    canvas.set_fill_color(self.texture);
    canvas.fill_circle(self.shape.center(), 2.0 * self.shape.r);
  }
}

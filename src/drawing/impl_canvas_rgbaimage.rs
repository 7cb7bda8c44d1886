#![allow(non_snake_case)]
use {
  euclid::{Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::Canvas,
    geometry::{to_pixel_space, BoundingBox, Circle, Frame, PixelSpace, P2},
    sdf::SDF
  }
};

/// [`Canvas`] rasterizing into an in-memory RGBA buffer.
#[derive(Debug, Clone)]
pub struct ImageCanvas {
  image: RgbaImage,
  frame: Frame,
  fill: Rgba<u8>
}

impl Default for ImageCanvas {
  fn default() -> Self {
    Self {
      image: RgbaImage::new(0, 0),
      frame: Frame::identity(),
      fill: Self::BLACK
    }
  }
}

impl ImageCanvas {
  pub fn new() -> Self { Self::default() }

  pub fn image(&self) -> &RgbaImage { &self.image }

  pub fn into_image(self) -> RgbaImage { self.image }
}

impl Canvas for ImageCanvas {
  type Color = Rgba<u8>;
  const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

  fn resize(&mut self, width: u32, height: u32) {
    self.image = RgbaImage::new(width, height);
  }

  fn clear_to_color(&mut self, color: Rgba<u8>) {
    self.image.pixels_mut().for_each(|pixel| *pixel = color);
  }

  fn set_transform(&mut self, frame: Frame) {
    self.frame = frame;
  }

  fn set_fill_color(&mut self, color: Rgba<u8>) {
    self.fill = color;
  }

  fn fill_circle(&mut self, center: P2, diameter: f64) {
    let circle = Circle::new(center.x, center.y, diameter / 2.0);
    let resolution: Size2D<_, PixelSpace> = self.image.dimensions().into();
    let bounding_box = match to_pixel_space(circle.bounding_box(), &self.frame, resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with canvas at all
    };
    let inverse = match self.frame.inverse() {
      Some(x) => x,
      None => return // degenerate frame, nothing is visible
    };
    // world units per pixel
    let Δp = inverse.transform_vector(V2::new(1.0, 0.0)).length();
    let fill = self.fill;
    let image = &mut self.image;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, PixelSpace>::new(x, y))
      .for_each(|pixel| {
        let pixel_world = inverse.transform_point(pixel.to_f64() + V2::splat(0.5));
        let sdf = circle.sdf(pixel_world);
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, fill);
      });
  }
}

fn sdf_overlay_aa(sdf: f64, Δp: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}

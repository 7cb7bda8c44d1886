use {
  super::{BoundingBox, WorldSpace, P2},
  crate::sdf::SDF,
  euclid::{Box2D, Vector2D as V2},
  serde::{Deserialize, Serialize}
};

/// Placement of one tile of the stimulus, in normalized disc coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
  pub x: f64,
  pub y: f64,
  pub r: f64,
}

impl Circle {
  pub fn new(x: f64, y: f64, r: f64) -> Self {
    Self { x, y, r }
  }

  pub fn center(&self) -> P2 {
    P2::new(self.x, self.y)
  }

  /// Distance of the center from the origin of the disc.
  pub fn distance_from_origin(&self) -> f64 {
    self.center().to_vector().length()
  }
}

impl BoundingBox<f64, WorldSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f64, WorldSpace> {
    Box2D::new(
      self.center() - V2::splat(self.r),
      self.center() + V2::splat(self.r)
    )}}

impl SDF<f64> for Circle {
  fn sdf(&self, point: P2) -> f64 {
    (point - self.center()).length() - self.r
  }
}

/// Ring centered in the origin, `inner <= |p| <= outer`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Annulus {
  pub inner: f64,
  pub outer: f64,
}

impl BoundingBox<f64, WorldSpace> for Annulus {
  fn bounding_box(&self) -> Box2D<f64, WorldSpace> {
    Box2D::new(
      P2::splat(-self.outer),
      P2::splat(self.outer)
    )}}

impl SDF<f64> for Annulus {
  fn sdf(&self, point: P2) -> f64 {
    let d = point.to_vector().length();
    (self.inner - d).max(d - self.outer)
  }
}

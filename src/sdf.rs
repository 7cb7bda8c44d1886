use {
  euclid::Point2D,
  crate::geometry::WorldSpace
};

/// Signed distance function: negative inside, zero on the boundary, positive outside.
pub trait SDF<T> {
  fn sdf(&self, point: Point2D<T, WorldSpace>) -> T;
}

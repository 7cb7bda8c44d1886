//! Landolt-C stimulus: a disc tiled by circles, where the tiles of the annulus `[1/3, 2/3]`
//! take the ring palette except inside a gap reaching 1/6 to each side of its axis, and
//! everything else takes the field palette. The whole disc spans 2° of visual angle at the configured viewing distance.

use {
  crate::{
    drawing::{Canvas, Draw},
    error::{Error, PaletteKind, Result},
    geometry::{contains_inclusive, Annulus, Circle, Frame, Shape, WorldSpace, P2},
    sdf::SDF
  },
  euclid::Box2D,
  rayon::prelude::*,
  serde::{Deserialize, Serialize},
  std::{fmt, str::FromStr}
};

mod palette;

pub use palette::{ColorPicker, Palette};

/// Width of the gap, transverse to the direction it opens to.
pub const CUT_SIZE: f64 = 1.0 / 6.0;
/// Tiles with centers inside this ring form the C.
pub const RING: Annulus = Annulus { inner: 1.0 / 3.0, outer: 2.0 / 3.0 };
/// Layouts at least this large are classified on the rayon pool.
const PAR_THRESHOLD: usize = 4096;

/// Side the gap of the C opens to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

impl FromStr for Direction {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_lowercase().as_str() {
      "up" => Ok(Self::Up),
      "down" => Ok(Self::Down),
      "left" => Ok(Self::Left),
      "right" => Ok(Self::Right),
      _ => Err(Error::InvalidDirection(s.to_string())),
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Direction::Up => "up",
      Direction::Down => "down",
      Direction::Left => "left",
      Direction::Right => "right",
    })
  }
}

/// Observer distance and display density.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewingParameters {
  pub distance_meters: f64,
  pub pixels_per_meter: f64,
}

impl ViewingParameters {
  pub fn new(distance_meters: f64, pixels_per_meter: f64) -> Result<Self> {
    let viewing = Self { distance_meters, pixels_per_meter };
    viewing.validate()?;
    Ok(viewing)
  }

  pub fn validate(&self) -> Result<()> {
    positive("distance_meters", self.distance_meters)?;
    positive("pixels_per_meter", self.pixels_per_meter)
  }

  /// Pixels subtended by one degree of visual angle, unrounded.
  pub fn pixels_per_degree(&self) -> f64 {
    self.distance_meters * 1f64.to_radians().tan() * self.pixels_per_meter
  }

  pub fn canvas_size(&self) -> Result<u32> {
    compute_canvas_size(self.distance_meters, self.pixels_per_meter)
  }
}

fn positive(name: &'static str, value: f64) -> Result<()> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(Error::InvalidParameter { name, value })
  }
}

/// Side of the square canvas, in pixels: the stimulus spans 2°, so
/// `2 * round(distance * tan(1°) * pixels_per_meter)`.
pub fn compute_canvas_size(distance_meters: f64, pixels_per_meter: f64) -> Result<u32> {
  let viewing = ViewingParameters { distance_meters, pixels_per_meter };
  viewing.validate()?;
  let per_degree = viewing.pixels_per_degree().round();
  if per_degree < 1.0 || per_degree > (u32::MAX / 2) as f64 {
    return Err(Error::InvalidParameter { name: "pixels_per_degree", value: per_degree });
  }
  Ok(2 * per_degree as u32)
}

/// Maps normalized `[-1, 1]²` onto a `size × size` canvas, origin in the center.
pub fn establish_coordinate_frame(size: u32) -> Frame {
  let half = size as f64 / 2.0;
  Frame::translation(1.0, 1.0).then_scale(half, half)
}

/// Closed box of the gap. Across the opening it is [`CUT_SIZE`] wide on both sides of the
/// axis; along it, it reaches from the origin to the edge of the disc.
pub fn gap_bounds(direction: Direction) -> Box2D<f64, WorldSpace> {
  let (min, max) = match direction {
    Direction::Up => ([-CUT_SIZE, -1.0], [CUT_SIZE, 0.0]),
    Direction::Down => ([-CUT_SIZE, 0.0], [CUT_SIZE, 1.0]),
    Direction::Left => ([-1.0, -CUT_SIZE], [0.0, CUT_SIZE]),
    Direction::Right => ([0.0, -CUT_SIZE], [1.0, CUT_SIZE]),
  };
  Box2D::new(P2::from(min), P2::from(max))
}

/// Color group of a tile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Region {
  /// Inner disc, outer ring, or the gap.
  Field,
  /// The annulus outside of the gap.
  Ring,
}

pub fn classify(circle: &Circle, gap: &Box2D<f64, WorldSpace>) -> Region {
  let center = circle.center();
  if RING.sdf(center) > 0.0 || contains_inclusive(gap, center) {
    Region::Field
  } else {
    Region::Ring
  }
}

/// Everything needed to paint a stimulus, except the layout, canvas and randomness.
#[derive(Debug, Clone)]
pub struct Stimulus<C> {
  pub field_colors: Palette<C>,
  pub ring_colors: Palette<C>,
  pub direction: Direction,
  pub viewing: ViewingParameters,
}

impl<C: Copy> Stimulus<C> {
  pub fn new(
    field_colors: Vec<C>,
    ring_colors: Vec<C>,
    direction: Direction,
    viewing: ViewingParameters
  ) -> Result<Self> {
    viewing.validate()?;
    Ok(Self {
      field_colors: Palette::new(PaletteKind::Field, field_colors)?,
      ring_colors: Palette::new(PaletteKind::Ring, ring_colors)?,
      direction,
      viewing
    })
  }

  pub fn gap(&self) -> Box2D<f64, WorldSpace> {
    gap_bounds(self.direction)
  }

  /// Classification of every tile, in input order.
  pub fn classify_all(&self, circles: &[Circle]) -> Vec<Region> {
    let gap = self.gap();
    if circles.len() < PAR_THRESHOLD {
      circles.iter().map(|c| classify(c, &gap)).collect()
    } else {
      circles.par_iter().map(|c| classify(c, &gap)).collect()
    }
  }

  /// Size the canvas, clear it to black and paint every tile.
  /// Nothing is drawn if the viewing parameters are invalid.
  pub fn render<B, R>(&self, circles: &[Circle], canvas: &mut B, picker: &mut R) -> Result<()>
    where B: Canvas<Color = C>,
          R: ColorPicker + ?Sized
  {
    let size = self.viewing.canvas_size()?;
    tracing::info!(
      size,
      direction = %self.direction,
      circles = circles.len(),
      "rendering stimulus"
    );
    canvas.resize(size, size);
    canvas.clear_to_color(B::BLACK);
    canvas.set_transform(establish_coordinate_frame(size));
    self.classify_and_draw(circles, canvas, picker);
    Ok(())
  }

  /// Paint tiles in input order, later ones over earlier ones.
  /// Each tile gets its own independent pick from its region's palette.
  pub fn classify_and_draw<B, R>(&self, circles: &[Circle], canvas: &mut B, picker: &mut R)
    where B: Canvas<Color = C>,
          R: ColorPicker + ?Sized
  {
    let (mut ring, mut field) = (0usize, 0usize);
    circles.iter()
      .copied()
      .zip(self.classify_all(circles))
      .for_each(|(circle, region)| {
        let color = match region {
          Region::Field => { field += 1; self.field_colors.pick(picker) },
          Region::Ring => { ring += 1; self.ring_colors.pick(picker) },
        };
        circle.texture(color).draw(canvas);
      });
    tracing::debug!(ring, field, "classified tiles");
  }
}

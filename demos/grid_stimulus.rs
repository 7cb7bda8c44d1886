/// Render a stimulus over a hexagonal lattice of equal circles.
/// Real layouts come from a circle packer; the lattice only stands in for one here.

use {
  landolt_stimulus::{
    drawing::ImageCanvas,
    geometry::Circle,
    stimulus::{Direction, Stimulus, ViewingParameters}
  },
  anyhow::Result,
  image::Rgba,
  rand::SeedableRng
};

fn hex_lattice(r: f64) -> impl Iterator<Item = Circle> {
  let dy = r * 3f64.sqrt();
  let rows = (1.0 / dy).ceil() as i64;
  let cols = (1.0 / r).ceil() as i64;
  itertools::iproduct!(-rows..=rows, -cols..=cols)
    .map(move |(row, col)| {
      let shift = if row % 2 == 0 { 0.0 } else { r };
      Circle::new(col as f64 * 2.0 * r + shift, row as f64 * dy, r * 0.9)
    })
    // keep the tiles fully inside the unit disc
    .filter(|c| c.distance_from_origin() + c.r <= 1.0)
}

fn main() -> Result<()> {
  let path = "grid_stimulus.png";
  let stimulus = Stimulus::new(
    vec![Rgba([140, 122, 60, 255]), Rgba([160, 138, 70, 255]), Rgba([122, 106, 52, 255])],
    vec![Rgba([94, 140, 60, 255]), Rgba([106, 160, 70, 255]), Rgba([82, 122, 52, 255])],
    Direction::Right,
    // 6 meters from a 96 dpi display
    ViewingParameters::new(6.0, 96.0 / 0.0254)?
  )?;
  let circles = hex_lattice(0.02).collect::<Vec<_>>();

  let mut canvas = ImageCanvas::new();
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  stimulus.render(&circles, &mut canvas, &mut rng)?;

  canvas.into_image().save(path)?;
  open::that(path)?;
  Ok(())
}

//! Landolt-C acuity stimulus, painted over a pre-packed layout of circles.
//!
//! The layout is a list of [`Circle`](geometry::Circle)s in normalized disc coordinates
//! (the whole stimulus is the unit disc). Tiles whose centers fall into the annulus
//! `1/3 <= |p| <= 2/3` are painted from the ring palette and form a C; the gap of the C, the
//! inner disc and the outer ring are painted from the field palette. The canvas is sized so
//! that the disc spans 2° of visual angle at the given viewing distance.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   landolt_stimulus::{
//! #     error::Result,
//! #     geometry::Circle,
//! #     stimulus::{Direction, Stimulus, ViewingParameters},
//! #     drawing::ImageCanvas
//! #   },
//! #   image::Rgba,
//! #   rand::SeedableRng
//! # };
//! # fn layout() -> Vec<Circle> { vec![] }
//! # fn main() -> Result<()> {
//! let stimulus = Stimulus::new(
//!   vec![Rgba([140, 122, 60, 255]), Rgba([160, 138, 70, 255])], // field
//!   vec![Rgba([94, 140, 60, 255]), Rgba([106, 160, 70, 255])],  // ring
//!   Direction::Up,
//!   // 2 meters away from a 96 dpi display
//!   ViewingParameters::new(2.0, 96.0 / 0.0254)?
//! )?;
//!
//! let mut canvas = ImageCanvas::new();
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! stimulus.render(&layout(), &mut canvas, &mut rng)?;
//! canvas.into_image().save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! Any surface implementing [`Canvas`](drawing::Canvas) can be painted on, and any
//! [`rand::Rng`] (or a custom [`ColorPicker`](stimulus::ColorPicker)) supplies the colors.

#![allow(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod sdf;
pub mod geometry;
pub mod stimulus;
pub mod drawing;
pub mod config;

//! .
//!
//! Every variant is a precondition violation, reported before the canvas is touched.
//! I/O and image variants only occur at the edges (config loading, PNG encoding).
use std::fmt;

/// Which of the two palettes a color belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteKind {
  /// Inner disc, outer ring and the gap.
  Field,
  /// The annulus forming the C.
  Ring,
}

impl fmt::Display for PaletteKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PaletteKind::Field => f.write_str("field"),
      PaletteKind::Ring => f.write_str("ring"),
    }
  }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("invalid parameter {name} = {value}: must be finite and positive")]
  InvalidParameter { name: &'static str, value: f64 },

  #[error("invalid direction {0:?}, expected one of: up, down, left, right")]
  InvalidDirection(String),

  #[error("{0} palette is empty")]
  EmptyPalette(PaletteKind),

  #[error("invalid color {0:?}, expected #rrggbb")]
  InvalidColor(String),

  #[error("config: {0}")]
  Config(#[from] toml::de::Error),

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[cfg(feature = "image")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

use {
  crate::error::{Error, PaletteKind, Result},
  rand::Rng
};

/// Source of palette indices.
pub trait ColorPicker {
  /// Index in `0..len`, `len > 0`.
  fn pick(&mut self, len: usize) -> usize;
}

/// Uniform pick from any random number generator.
impl<R: Rng> ColorPicker for R {
  fn pick(&mut self, len: usize) -> usize {
    self.gen_range(0..len)
  }
}

/// Non-empty, ordered set of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<C> {
  kind: PaletteKind,
  colors: Vec<C>
}

impl<C: Copy> Palette<C> {
  pub fn new(kind: PaletteKind, colors: Vec<C>) -> Result<Self> {
    if colors.is_empty() {
      return Err(Error::EmptyPalette(kind));
    }
    Ok(Self { kind, colors })
  }

  pub fn kind(&self) -> PaletteKind { self.kind }

  pub fn colors(&self) -> &[C] { &self.colors }

  /// Out of range indices wrap around in release builds.
  pub fn pick<R: ColorPicker + ?Sized>(&self, picker: &mut R) -> C {
    let len = self.colors.len();
    let i = picker.pick(len);
    debug_assert!(i < len, "{} palette: picked index {} of {}", self.kind, i, len);
    self.colors[i % len]
  }
}

use {
  super::Canvas,
  crate::geometry::{Frame, P2}
};

/// One call received by a [`RecordingCanvas`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Op {
  Resize { width: u32, height: u32 },
  Clear(u32),
  SetTransform(Frame),
  SetFill(u32),
  FillCircle { center: P2, diameter: f64 },
}

/// Canvas that rasterizes nothing and keeps the call log instead.
/// Colors are packed `0xRRGGBB`.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
  pub ops: Vec<Op>
}

impl RecordingCanvas {
  pub fn new() -> Self { Self::default() }

  /// Fill colors in the order the circles were painted.
  pub fn fills(&self) -> Vec<u32> {
    let mut current = None;
    self.ops.iter()
      .filter_map(|op| match *op {
        Op::SetFill(color) => { current = Some(color); None },
        Op::FillCircle { .. } => current,
        _ => None
      })
      .collect()
  }
}

impl Canvas for RecordingCanvas {
  type Color = u32;
  const BLACK: u32 = 0x000000;

  fn resize(&mut self, width: u32, height: u32) { self.ops.push(Op::Resize { width, height }); }
  fn clear_to_color(&mut self, color: u32) { self.ops.push(Op::Clear(color)); }
  fn set_transform(&mut self, frame: Frame) { self.ops.push(Op::SetTransform(frame)); }
  fn set_fill_color(&mut self, color: u32) { self.ops.push(Op::SetFill(color)); }
  fn fill_circle(&mut self, center: P2, diameter: f64) {
    self.ops.push(Op::FillCircle { center, diameter });
  }
}

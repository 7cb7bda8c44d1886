use {
  super::*,
  crate::{
    error::Result,
    geometry::Shape,
    stimulus::establish_coordinate_frame
  }
};

#[test] fn texture_draws_fill_then_circle() {
  let mut canvas = RecordingCanvas::new();
  Circle::new(0.25, -0.5, 0.1)
    .texture(0xff0000u32)
    .draw(&mut canvas);
  assert_eq!(canvas.ops, vec![
    Op::SetFill(0xff0000),
    Op::FillCircle { center: P2::new(0.25, -0.5), diameter: 0.2 },
  ]);
  assert_eq!(canvas.fills(), vec![0xff0000]);
}

#[cfg(feature = "drawing")]
mod image_canvas {
  use {
    super::*,
    image::Rgba
  };

  const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
  const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

  fn canvas(size: u32) -> ImageCanvas {
    let mut canvas = ImageCanvas::new();
    canvas.resize(size, size);
    canvas.clear_to_color(ImageCanvas::BLACK);
    canvas.set_transform(establish_coordinate_frame(size));
    canvas
  }

  #[test] fn fill_circle_in_center() -> Result<()> {
    let mut canvas = canvas(128);
    Circle::new(0.0, 0.0, 0.5)
      .texture(RED)
      .draw(&mut canvas);
    let image = canvas.image();
    assert_eq!(image.dimensions(), (128, 128));
    assert_eq!(*image.get_pixel(64, 64), RED);
    assert_eq!(*image.get_pixel(64, 40), RED);
    assert_eq!(*image.get_pixel(0, 0), ImageCanvas::BLACK);
    assert_eq!(*image.get_pixel(127, 127), ImageCanvas::BLACK);
    assert_eq!(*image.get_pixel(64, 5), ImageCanvas::BLACK);
    Ok(())
  }

  #[test] fn y_grows_downward() {
    let mut canvas = canvas(100);
    Circle::new(0.0, -0.5, 0.1)
      .texture(RED)
      .draw(&mut canvas);
    let image = canvas.into_image();
    // normalized y = -0.5 is a quarter of the way down
    assert_eq!(*image.get_pixel(50, 25), RED);
    assert_eq!(*image.get_pixel(50, 75), ImageCanvas::BLACK);
  }

  #[test] fn later_circles_paint_over() {
    let mut canvas = canvas(64);
    Circle::new(0.0, 0.0, 0.5).texture(RED).draw(&mut canvas);
    Circle::new(0.0, 0.0, 0.25).texture(BLUE).draw(&mut canvas);
    let image = canvas.image();
    assert_eq!(*image.get_pixel(32, 32), BLUE);
    assert_eq!(*image.get_pixel(32, 22), RED);
  }

  #[test] fn off_canvas_circle_is_ignored() {
    let mut canvas = canvas(32);
    Circle::new(3.0, 3.0, 0.5).texture(RED).draw(&mut canvas);
    assert!(canvas.image().pixels().all(|p| *p == ImageCanvas::BLACK));
  }

  #[test] fn resize_reallocates() {
    let mut canvas = canvas(32);
    canvas.resize(10, 10);
    assert_eq!(canvas.image().dimensions(), (10, 10));
  }
}

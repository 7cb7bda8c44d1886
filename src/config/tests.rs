use {
  super::*,
  crate::{
    drawing::RecordingCanvas,
    error::PaletteKind,
    stimulus::Region
  },
  rand::SeedableRng
};

const CONFIG: &str = r##"
seed = 42

[viewing]
distance_meters = 2.0
pixels_per_meter = 3780.0

[stimulus]
direction = "Up"
field_colors = ["#8c7a3c", "#A08A46"]
ring_colors = ["5e8c3c"]

[[circles]]
x = 0.0
y = -0.5
r = 0.05

[[circles]]
x = 0.0
y = 0.5
r = 0.05
"##;

#[test] fn parse_full_config() -> Result<()> {
  let config = Config::from_toml(CONFIG)?;
  assert_eq!(config.seed, Some(42));
  assert_eq!(config.output, PathBuf::from("stimulus.png"));
  assert_eq!(config.circles, vec![Circle::new(0.0, -0.5, 0.05), Circle::new(0.0, 0.5, 0.05)]);
  assert_eq!(config.direction()?, Direction::Up);

  let stimulus = config.stimulus(pack_rgb)?;
  assert_eq!(stimulus.field_colors.colors(), &[0x8c7a3c, 0xa08a46]);
  assert_eq!(stimulus.ring_colors.colors(), &[0x5e8c3c]);
  assert_eq!(stimulus.classify_all(&config.circles), vec![Region::Field, Region::Ring]);
  Ok(())
}

#[test] fn configured_render_is_reproducible() -> Result<()> {
  let config = Config::from_toml(CONFIG)?;
  let stimulus = config.stimulus(pack_rgb)?;
  let render = || -> Result<RecordingCanvas> {
    let mut canvas = RecordingCanvas::new();
    let mut rng = rand_pcg::Pcg64::seed_from_u64(config.seed.unwrap_or_default());
    stimulus.render(&config.circles, &mut canvas, &mut rng)?;
    Ok(canvas)
  };
  let (a, b) = (render()?, render()?);
  assert_eq!(a.ops, b.ops);
  assert_eq!(a.fills().len(), 2);
  assert_eq!(a.fills()[1], 0x5e8c3c);
  Ok(())
}

#[test] fn invalid_direction() -> Result<()> {
  let config = Config::from_toml(&CONFIG.replace("\"Up\"", "\"north\""))?;
  assert!(matches!(config.stimulus(pack_rgb), Err(Error::InvalidDirection(_))));
  Ok(())
}

#[test] fn invalid_color() -> Result<()> {
  for bad in &["\"#8c7a3\"", "\"#gg7a3c\"", "\"#8c7a3c00\"", "\"\""] {
    let config = Config::from_toml(&CONFIG.replace("\"5e8c3c\"", bad))?;
    assert!(matches!(config.stimulus(pack_rgb), Err(Error::InvalidColor(_))), "{}", bad);
  }
  Ok(())
}

#[test] fn empty_palette() -> Result<()> {
  let config = Config::from_toml(&CONFIG.replace("[\"5e8c3c\"]", "[]"))?;
  assert!(matches!(config.stimulus(pack_rgb), Err(Error::EmptyPalette(PaletteKind::Ring))));
  Ok(())
}

#[test] fn non_positive_distance() -> Result<()> {
  let config = Config::from_toml(&CONFIG.replace("distance_meters = 2.0", "distance_meters = 0.0"))?;
  assert!(matches!(config.stimulus(pack_rgb), Err(Error::InvalidParameter { name: "distance_meters", .. })));
  Ok(())
}

#[test] fn missing_section_is_config_error() {
  let text = CONFIG.replace("[viewing]", "[viewport]");
  assert!(matches!(Config::from_toml(&text), Err(Error::Config(_))));
}

#[test] fn hex_colors() -> Result<()> {
  assert_eq!(parse_hex("#000000")?, [0, 0, 0]);
  assert_eq!(parse_hex("ffFF10")?, [255, 255, 16]);
  assert_eq!(pack_rgb(parse_hex("#5e8c3c")?), 0x5e8c3c);
  assert!(parse_hex("#ééé").is_err());
  // from_str_radix alone would take a sign
  assert!(matches!(parse_hex("#+f+f+f"), Err(Error::InvalidColor(_))));
  assert!(matches!(parse_hex("##abcdef"), Err(Error::InvalidColor(_))));
  assert!(parse_hex("#-10203").is_err());
  Ok(())
}

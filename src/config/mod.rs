//! TOML description of a stimulus: viewing geometry, gap direction, palettes, seed and layout.
//!
//! ```toml
//! seed = 42
//! output = "stimulus.png"
//!
//! [viewing]
//! distance_meters = 2.0
//! pixels_per_meter = 3780.0
//!
//! [stimulus]
//! direction = "up"
//! field_colors = ["#8c7a3c", "#a08a46"]
//! ring_colors = ["#5e8c3c", "#6aa046"]
//!
//! [[circles]]
//! x = 0.0
//! y = -0.5
//! r = 0.05
//! ```

use {
  crate::{
    error::{Error, Result},
    geometry::Circle,
    stimulus::{Direction, Stimulus, ViewingParameters}
  },
  serde::{Deserialize, Serialize},
  std::path::{Path, PathBuf}
};

#[cfg(test)] mod tests;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Seed of the color picker. Random if absent.
  #[serde(default)]
  pub seed: Option<u64>,
  #[serde(default = "default_output")]
  pub output: PathBuf,
  pub viewing: ViewingParameters,
  pub stimulus: StimulusConfig,
  #[serde(default)]
  pub circles: Vec<Circle>,
  /// File holding additional `[[circles]]`, relative to the config file.
  #[serde(default)]
  pub circles_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StimulusConfig {
  pub direction: String,
  pub field_colors: Vec<String>,
  pub ring_colors: Vec<String>,
}

/// Contents of a `circles_path` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Layout {
  #[serde(default)]
  circles: Vec<Circle>,
}

fn default_output() -> PathBuf {
  PathBuf::from("stimulus.png")
}

impl Config {
  /// Read a config file, resolving `circles_path` against its directory.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let mut config = Self::from_toml(&std::fs::read_to_string(path)?)?;
    if let Some(layout) = &config.circles_path {
      let layout = path.parent()
        .map(|dir| dir.join(layout))
        .unwrap_or_else(|| layout.clone());
      let layout: Layout = toml::from_str(&std::fs::read_to_string(&layout)?)?;
      config.circles.extend(layout.circles);
    }
    tracing::debug!(path = %path.display(), circles = config.circles.len(), "loaded config");
    Ok(config)
  }

  pub fn from_toml(text: &str) -> Result<Self> {
    Ok(toml::from_str(text)?)
  }

  pub fn direction(&self) -> Result<Direction> {
    self.stimulus.direction.parse()
  }

  /// Validated stimulus; `color` converts parsed `[r, g, b]` into the canvas' color type.
  pub fn stimulus<C: Copy>(&self, color: impl Fn([u8; 3]) -> C) -> Result<Stimulus<C>> {
    let palette = |hex: &[String]| hex.iter()
      .map(|s| parse_hex(s).map(&color))
      .collect::<Result<Vec<_>>>();
    Stimulus::new(
      palette(&self.stimulus.field_colors[..])?,
      palette(&self.stimulus.ring_colors[..])?,
      self.direction()?,
      self.viewing
    )
  }
}

/// Parse `#rrggbb` or `rrggbb`.
pub fn parse_hex(hex: &str) -> Result<[u8; 3]> {
  let invalid = || Error::InvalidColor(hex.to_string());
  let hex_trimmed = hex.trim();
  let digits = hex_trimmed.strip_prefix('#').unwrap_or(hex_trimmed);
  if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(invalid());
  }
  let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
  Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// `[r, g, b]` as `0xRRGGBB`.
pub fn pack_rgb([r, g, b]: [u8; 3]) -> u32 {
  (r as u32) << 16 | (g as u32) << 8 | b as u32
}

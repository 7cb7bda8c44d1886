use {
  landolt_stimulus::{
    config::Config,
    drawing::ImageCanvas
  },
  anyhow::{Context, Result},
  clap::Parser,
  image::Rgba,
  rand::SeedableRng,
  std::path::PathBuf,
  tracing::info,
  tracing_subscriber::EnvFilter
};

#[derive(Parser, Debug)]
#[command(name = "landolt")]
#[command(version, about = "Render a Landolt-C acuity stimulus from a circle layout")]
struct Args {
  /// Stimulus config file (TOML)
  config: PathBuf,

  /// Side the gap opens to: up, down, left, right
  #[arg(short, long)]
  direction: Option<String>,

  /// Observer distance from the screen, in meters
  #[arg(long)]
  distance: Option<f64>,

  /// Screen width in pixels divided by its width in meters
  #[arg(long)]
  pixels_per_meter: Option<f64>,

  /// Seed of the color picker
  #[arg(short, long)]
  seed: Option<u64>,

  /// Output PNG
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Open the output in the default viewer
  #[arg(long)]
  open: bool,
}

/// `RUST_LOG` when set, info for this crate otherwise.
fn log_filter() -> EnvFilter {
  EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG))
}

const DEFAULT_LOG: &str = "landolt=info,landolt_stimulus=info";

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(log_filter())
    .init();

  let args = Args::parse();
  let mut config = Config::load(&args.config)
    .with_context(|| format!("loading {}", args.config.display()))?;

  if let Some(direction) = args.direction { config.stimulus.direction = direction; }
  if let Some(distance) = args.distance { config.viewing.distance_meters = distance; }
  if let Some(density) = args.pixels_per_meter { config.viewing.pixels_per_meter = density; }
  if let Some(output) = args.output { config.output = output; }
  let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);

  let stimulus = config.stimulus(|[r, g, b]| Rgba([r, g, b, 255]))?;
  info!(
    seed,
    pixels_per_degree = stimulus.viewing.pixels_per_degree(),
    "stimulus ready"
  );

  let mut canvas = ImageCanvas::new();
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
  stimulus.render(&config.circles, &mut canvas, &mut rng)?;
  canvas.into_image().save(&config.output)
    .with_context(|| format!("writing {}", config.output.display()))?;

  let size = {
    use humansize::{FileSize, file_size_opts as options};
    std::fs::metadata(&config.output)?.len()
      .file_size(options::BINARY)
      .map_err(anyhow::Error::msg)?
  };
  info!(path = %config.output.display(), %size, "saved");

  if args.open {
    open::that(&config.output)?;
  }
  Ok(())
}

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use genoviz::config::AppConfig;
use genoviz::tracks::{TRACK_LABELS, assemble_image, generation_tracks, render_track_chart};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the synthetic generation-track visualization")]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// RNG seed; omit for a fresh seed per run
    #[arg(long)]
    seed: Option<u64>,

    /// Output PNG path; overrides config
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config);

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&cfg.tracks.output));

    if cfg.tracks.segments % 2 != 0 {
        warn!(
            "segments = {} is odd; preserved halves truncate to {}",
            cfg.tracks.segments,
            cfg.tracks.segments / 2
        );
    }

    // Unseeded runs stay non-reproducible; the seed is logged so any run can
    // be replayed with --seed.
    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    info!("track seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let tracks = generation_tracks(cfg.tracks.segments, &mut rng);
    let image = assemble_image(&tracks, cfg.tracks.chunk_size, cfg.tracks.separator_height);
    render_track_chart(&output, &image, &TRACK_LABELS)?;
    Ok(())
}

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genoviz::complexity::{load_cost_table, render_complexity_chart, sort_by_size};
use genoviz::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the C vs Rust runtime-complexity comparison chart")]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Input CSV (columns d, C_complexity, Rust_complexity); overrides config
    #[arg(long)]
    input: Option<PathBuf>,

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

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&cfg.complexity.input));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&cfg.complexity.output));

    let mut rows = load_cost_table(&input).map_err(std::io::Error::other)?;
    sort_by_size(&mut rows);
    info!("loaded {} cost rows from {}", rows.len(), input.display());

    render_complexity_chart(&output, &rows, cfg.complexity.x_limit)?;
    Ok(())
}

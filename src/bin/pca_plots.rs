use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use genoviz::config::AppConfig;
use genoviz::pca::run_pca_plots;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render scree and PC scatter plots for one results folder")]
struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    config: String,

    /// Results root directory; overrides config
    #[arg(long)]
    root: Option<PathBuf>,

    /// Results subfolder, e.g. a timestamped run id like 20250113133005_3k
    #[arg(value_name = "SUBFOLDER")]
    subfolder: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config);

    let root = args
        .root
        .unwrap_or_else(|| PathBuf::from(&cfg.pca.results_root));
    run_pca_plots(&root, &args.subfolder)
}

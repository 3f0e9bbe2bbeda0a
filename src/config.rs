use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexityConfig {
    /// Input CSV with columns `d`, `C_complexity`, `Rust_complexity`.
    #[serde(default = "ComplexityConfig::default_input")]
    pub input: String,
    #[serde(default = "ComplexityConfig::default_output")]
    pub output: String,
    /// Fixed upper x-axis bound of the comparison chart.
    #[serde(default = "ComplexityConfig::default_x_limit")]
    pub x_limit: f64,
}

impl ComplexityConfig {
    fn default_input() -> String {
        "complexity_data.csv".to_string()
    }
    fn default_output() -> String {
        "complexity_comparison.png".to_string()
    }
    fn default_x_limit() -> f64 {
        300.0
    }
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            input: Self::default_input(),
            output: Self::default_output(),
            x_limit: Self::default_x_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksConfig {
    /// Color chunks per track. Expected to be even; an odd value truncates
    /// the preserved half (see `tracks::create_track`).
    #[serde(default = "TracksConfig::default_segments")]
    pub segments: usize,
    /// Pixels per color chunk.
    #[serde(default = "TracksConfig::default_chunk_size")]
    pub chunk_size: usize,
    /// Blank rows between consecutive tracks.
    #[serde(default = "TracksConfig::default_separator_height")]
    pub separator_height: usize,
    #[serde(default = "TracksConfig::default_output")]
    pub output: String,
}

impl TracksConfig {
    fn default_segments() -> usize {
        500
    }
    fn default_chunk_size() -> usize {
        20
    }
    fn default_separator_height() -> usize {
        1
    }
    fn default_output() -> String {
        "genomic_tracks.png".to_string()
    }
}

impl Default for TracksConfig {
    fn default() -> Self {
        Self {
            segments: Self::default_segments(),
            chunk_size: Self::default_chunk_size(),
            separator_height: Self::default_separator_height(),
            output: Self::default_output(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PcaConfig {
    /// Directory holding per-run result subfolders (eigenvalues.csv, results.csv).
    #[serde(default = "PcaConfig::default_results_root")]
    pub results_root: String,
}

impl PcaConfig {
    fn default_results_root() -> String {
        "results".to_string()
    }
}

impl Default for PcaConfig {
    fn default() -> Self {
        Self {
            results_root: Self::default_results_root(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub complexity: ComplexityConfig,
    #[serde(default)]
    pub tracks: TracksConfig,
    #[serde(default)]
    pub pca: PcaConfig,
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        eprintln!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    eprintln!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        let default_cfg = Self::default();
        match toml::to_string_pretty(&default_cfg) {
            Ok(text) => {
                if let Err(err) = fs::write(path_obj, text) {
                    eprintln!("Failed to write default config to {path}: {err}");
                }
            }
            Err(_) => {
                eprintln!("Failed to serialize default config; continuing with defaults");
            }
        }
        default_cfg
    }
}

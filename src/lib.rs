//! genoviz — static chart rendering for the genomic-analysis project.
//!
//! Three independent pipelines, one binary each:
//! - `complexity_plot`: C vs Rust runtime-complexity comparison chart.
//! - `genomic_tracks`: synthetic generation tracks rendered as a pixel image.
//! - `pca_plots`: scree plot and principal-component scatter plots.
//!
//! All pipelines are single-pass: load (or generate) a table, compute a few
//! derived values, render a PNG with `plotters`.

pub mod complexity;
pub mod config;
pub mod pca;
pub mod table;
pub mod tracks;

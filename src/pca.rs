//! Scree and principal-component scatter plots.
//!
//! Reads the analysis pipeline's `eigenvalues.csv` and `results.csv` from a
//! per-run results folder and writes the PNGs alongside the inputs. Every
//! score row is labeled `ind1..indN` in file order.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use crate::table::load_matrix;

/// The scree chart shows at most the leading four components.
pub const SCREE_BAR_LIMIT: usize = 4;

/// Parse component indices (column 0) and eigenvalues (column 1).
pub fn load_eigenvalues(path: &Path) -> Result<(Vec<f64>, Vec<f64>), String> {
    let rows = load_matrix(path, 2)?;
    let components = rows.iter().map(|r| r[0]).collect();
    let eigenvalues = rows.iter().map(|r| r[1]).collect();
    Ok((components, eigenvalues))
}

/// Parse the full score table (one row per individual, one column per
/// principal component; at least two columns).
pub fn load_pca_results(path: &Path) -> Result<Vec<Vec<f64>>, String> {
    load_matrix(path, 2)
}

/// Pair components with eigenvalues, truncated to the scree bar limit.
pub fn scree_series(components: &[f64], eigenvalues: &[f64]) -> Vec<(f64, f64)> {
    components
        .iter()
        .zip(eigenvalues)
        .take(SCREE_BAR_LIMIT)
        .map(|(&c, &e)| (c, e))
        .collect()
}

/// Synthesized point labels: `ind1`, `ind2`, ... in row order.
pub fn point_labels(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("ind{i}")).collect()
}

fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    let pad = ((hi - lo) * 0.05).max(1e-3);
    (lo - pad, hi + pad)
}

/// Bar chart of the leading eigenvalues, x ticks labeled `PC1..PCk`.
pub fn plot_scree(
    components: &[f64],
    eigenvalues: &[f64],
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let series = scree_series(components, eigenvalues);
    if series.is_empty() {
        return Err("scree plot needs at least one eigenvalue".into());
    }

    let mut y_max = series.iter().map(|&(_, e)| e).fold(0.0f64, f64::max);
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }
    let x_min = series.first().map(|&(c, _)| c).unwrap_or(0.0) - 0.75;
    let x_max = series.last().map(|&(c, _)| c).unwrap_or(0.0) + 0.75;

    let root = BitMapBackend::new(out_path, (600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Scree Plot", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0f64..(y_max * 1.05))?;

    chart
        .configure_mesh()
        .x_desc("Principal Component")
        .y_desc("Eigenvalue")
        .x_labels(series.len())
        .x_label_formatter(&|x| {
            let nearest = x.round();
            if (x - nearest).abs() < 0.25 && nearest >= 0.0 {
                format!("PC{}", nearest as usize + 1)
            } else {
                String::new()
            }
        })
        .draw()?;

    chart.draw_series(series.iter().map(|&(c, e)| {
        Rectangle::new([(c - 0.25, 0.0), (c + 0.25, e)], BLUE.filled())
    }))?;

    root.present()?;
    info!("wrote scree plot to {}", out_path.display());
    Ok(())
}

fn render_score_scatter(
    out_path: &Path,
    points: &[(f64, f64)],
    labels: &[String],
    axis_names: (&str, &str),
    color: RGBColor,
) -> Result<(), Box<dyn Error>> {
    let (x_lo, x_hi) = axis_range(points.iter().map(|&(x, _)| x));
    let (y_lo, y_hi) = axis_range(points.iter().map(|&(_, y)| y));

    let root = BitMapBackend::new(out_path, (600, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{} vs {}", axis_names.0, axis_names.1),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(axis_names.0)
        .y_desc(axis_names.1)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
    )?;

    // Annotations sit just left of their point.
    let annotation_style = TextStyle::from(("sans-serif", 12))
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    chart.draw_series(points.iter().zip(labels).map(|(&(x, y), label)| {
        Text::new(label.clone(), (x, y), annotation_style.clone())
    }))?;

    root.present()?;
    info!("wrote scatter plot to {}", out_path.display());
    Ok(())
}

/// Scatter PC1 vs PC2 to `{prefix}_pc1_pc2.png`; when the score table has
/// four or more columns also scatter PC3 vs PC4 to `{prefix}_pc3_pc4.png`.
/// With fewer than four columns the second plot is silently skipped.
pub fn plot_pca(scores: &[Vec<f64>], output_prefix: &Path) -> Result<(), Box<dyn Error>> {
    if scores.is_empty() {
        return Err("score table has no rows".into());
    }
    let labels = point_labels(scores.len());

    let pc12: Vec<(f64, f64)> = scores.iter().map(|r| (r[0], r[1])).collect();
    let out12 = suffixed(output_prefix, "_pc1_pc2.png");
    render_score_scatter(&out12, &pc12, &labels, ("PC1", "PC2"), RED)?;

    if scores[0].len() >= 4 {
        let pc34: Vec<(f64, f64)> = scores.iter().map(|r| (r[2], r[3])).collect();
        let out34 = suffixed(output_prefix, "_pc3_pc4.png");
        render_score_scatter(&out34, &pc34, &labels, ("PC3", "PC4"), GREEN)?;
    }
    Ok(())
}

fn suffixed(prefix: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{suffix}", prefix.display()))
}

/// Full pipeline for one results folder: read
/// `<root>/<subfolder>/eigenvalues.csv` and `results.csv`, write
/// `scree_plot.png` and the `pc_*` scatter PNGs alongside them.
pub fn run_pca_plots(root: &Path, subfolder: &str) -> Result<(), Box<dyn Error>> {
    let folder = root.join(subfolder);

    let (components, eigenvalues) =
        load_eigenvalues(&folder.join("eigenvalues.csv")).map_err(std::io::Error::other)?;
    info!(
        "loaded {} eigenvalues from {}",
        eigenvalues.len(),
        folder.display()
    );
    plot_scree(&components, &eigenvalues, &folder.join("scree_plot.png"))?;

    let scores = load_pca_results(&folder.join("results.csv")).map_err(std::io::Error::other)?;
    info!("loaded {} score rows", scores.len());
    plot_pca(&scores, &folder.join("pc"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scree_series_truncates_to_four() {
        let components = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let eigenvalues = [9.0, 7.0, 4.0, 2.0, 1.0, 0.5];
        let series = scree_series(&components, &eigenvalues);
        assert_eq!(series.len(), 4);
        assert_eq!(series[3], (3.0, 2.0));
    }

    #[test]
    fn scree_series_keeps_short_tables() {
        let series = scree_series(&[0.0, 1.0, 2.0], &[5.0, 3.0, 0.5]);
        assert_eq!(series, vec![(0.0, 5.0), (1.0, 3.0), (2.0, 0.5)]);
    }

    #[test]
    fn labels_are_one_based_in_row_order() {
        assert_eq!(point_labels(3), vec!["ind1", "ind2", "ind3"]);
        assert!(point_labels(0).is_empty());
    }

    #[test]
    fn axis_range_pads_and_handles_flat_data() {
        let (lo, hi) = axis_range([1.0, 2.0, 3.0].into_iter());
        assert!(lo < 1.0 && hi > 3.0);
        let (lo, hi) = axis_range([2.0, 2.0].into_iter());
        assert!(lo < hi);
    }
}

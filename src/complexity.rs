//! Runtime-complexity comparison chart: C implementation vs Rust
//! implementation cost over input size.
//!
//! The input table is a headered CSV; rows are sorted by input size before
//! any derived value is computed. The chart shades the plane around the
//! diagonal into sub-linear and super-linear regions and extrapolates each
//! series back to the origin with a dotted lead-in segment.

use std::collections::HashMap;
use std::error::Error;
use std::fs::read_to_string;
use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::info;

pub const C_SERIES_COLOR: RGBColor = RGBColor(0x00, 0xaa, 0xff);
pub const RUST_SERIES_COLOR: RGBColor = RGBColor(0xff, 0x11, 0x00);

/// One measurement: input size `d` and the observed cost of each implementation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostRow {
    pub d: f64,
    pub c_cost: f64,
    pub rust_cost: f64,
}

fn parse_f64_required(cols: &[&str], idx: usize, name: &str, line_no: usize) -> Result<f64, String> {
    let value = cols
        .get(idx)
        .ok_or_else(|| format!("line {line_no} missing column `{name}`"))?
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("line {line_no}: invalid {name}: {e}"))?;
    if !value.is_finite() {
        return Err(format!("line {line_no}: non-finite {name}"));
    }
    Ok(value)
}

/// Read and parse the cost table from `path`.
pub fn load_cost_table(path: &Path) -> Result<Vec<CostRow>, String> {
    let text = read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse_cost_table(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Parse a headered CSV with columns `d`, `C_complexity`, `Rust_complexity`.
/// Column order is free; extra columns are ignored.
pub fn parse_cost_table(text: &str) -> Result<Vec<CostRow>, String> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = lines.next().ok_or_else(|| "empty CSV".to_string())?;
    let mut col_idx = HashMap::new();
    for (i, c) in header.split(',').enumerate() {
        col_idx.insert(c.trim().to_string(), i);
    }
    for name in ["d", "C_complexity", "Rust_complexity"] {
        if !col_idx.contains_key(name) {
            return Err(format!("missing required column `{name}` in input CSV"));
        }
    }
    let d_i = *col_idx.get("d").unwrap_or(&0);
    let c_i = *col_idx.get("C_complexity").unwrap_or(&0);
    let rust_i = *col_idx.get("Rust_complexity").unwrap_or(&0);

    let mut out = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let cols: Vec<&str> = line.split(',').collect();
        let line_no = line_no + 2;
        out.push(CostRow {
            d: parse_f64_required(&cols, d_i, "d", line_no)?,
            c_cost: parse_f64_required(&cols, c_i, "C_complexity", line_no)?,
            rust_cost: parse_f64_required(&cols, rust_i, "Rust_complexity", line_no)?,
        });
    }
    if out.is_empty() {
        return Err("no data rows in input CSV".to_string());
    }
    Ok(out)
}

/// Sort rows ascending by input size.
pub fn sort_by_size(rows: &mut [CostRow]) {
    rows.sort_by(|a, b| a.d.total_cmp(&b.d));
}

/// Maximum cost across both implementations.
pub fn cost_ceiling(rows: &[CostRow]) -> f64 {
    rows.iter()
        .flat_map(|r| [r.c_cost, r.rust_cost])
        .fold(0.0f64, f64::max)
}

/// Dotted lead-in endpoints: origin to the first (smallest-size) point of
/// each series, C first. Rows must already be sorted.
pub fn lead_in_segments(rows: &[CostRow]) -> Option<[[(f64, f64); 2]; 2]> {
    let first = rows.first()?;
    Some([
        [(0.0, 0.0), (first.d, first.c_cost)],
        [(0.0, 0.0), (first.d, first.rust_cost)],
    ])
}

/// Render the comparison chart to `out_path`. Rows must be sorted by size.
///
/// The sub/super-linear region fill spans `[0, y_max]` on both axes; the
/// cost ceiling, not the size ceiling, bounds the region (see DESIGN.md,
/// open questions).
pub fn render_complexity_chart(
    out_path: &Path,
    rows: &[CostRow],
    x_limit: f64,
) -> Result<(), Box<dyn Error>> {
    let mut y_max = cost_ceiling(rows);
    if !y_max.is_finite() || y_max <= 0.0 {
        y_max = 1.0;
    }

    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Algorithm Performance: C vs Rust", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..x_limit, 0.0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("String length n")
        .y_desc("Complexity O(f(n))")
        .draw()?;

    chart
        .draw_series(std::iter::once(Polygon::new(
            vec![(0.0, 0.0), (y_max, y_max), (y_max, 0.0)],
            GREEN.mix(0.1).filled(),
        )))?
        .label("Sub-linear")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], GREEN.mix(0.2).filled()));

    chart
        .draw_series(std::iter::once(Polygon::new(
            vec![(0.0, 0.0), (y_max, y_max), (0.0, y_max)],
            RED.mix(0.1).filled(),
        )))?
        .label("Super-linear")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 16, y + 5)], RED.mix(0.2).filled()));

    if let Some([c_lead, rust_lead]) = lead_in_segments(rows) {
        chart.draw_series(DashedLineSeries::new(
            c_lead,
            4,
            6,
            C_SERIES_COLOR.stroke_width(2),
        ))?;
        chart.draw_series(DashedLineSeries::new(
            rust_lead,
            4,
            6,
            RUST_SERIES_COLOR.stroke_width(2),
        ))?;
    }

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.d, r.c_cost)),
            C_SERIES_COLOR.stroke_width(2),
        ))?
        .label("C Implementation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], C_SERIES_COLOR.stroke_width(2)));

    chart
        .draw_series(LineSeries::new(
            rows.iter().map(|r| (r.d, r.rust_cost)),
            RUST_SERIES_COLOR.stroke_width(2),
        ))?
        .label("Rust Implementation")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], RUST_SERIES_COLOR.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("wrote complexity chart to {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "d,C_complexity,Rust_complexity\n200,40.0,20.0\n50,10.0,5.0\n100,30.0,8.0\n";

    #[test]
    fn parses_and_sorts_by_size() {
        let mut rows = parse_cost_table(SAMPLE).unwrap();
        sort_by_size(&mut rows);
        let sizes: Vec<f64> = rows.iter().map(|r| r.d).collect();
        assert_eq!(sizes, vec![50.0, 100.0, 200.0]);
    }

    #[test]
    fn handles_reordered_columns() {
        let text = "Rust_complexity,d,C_complexity\n2.0,10,4.0\n";
        let rows = parse_cost_table(text).unwrap();
        assert_eq!(
            rows[0],
            CostRow {
                d: 10.0,
                c_cost: 4.0,
                rust_cost: 2.0
            }
        );
    }

    #[test]
    fn missing_column_is_fatal() {
        let err = parse_cost_table("d,C_complexity\n1,2\n").unwrap_err();
        assert!(err.contains("Rust_complexity"), "{err}");
    }

    #[test]
    fn non_numeric_cost_is_fatal() {
        let err = parse_cost_table("d,C_complexity,Rust_complexity\n1,x,2\n").unwrap_err();
        assert!(err.contains("line 2"), "{err}");
    }

    #[test]
    fn ceiling_spans_both_series() {
        let mut rows = parse_cost_table(SAMPLE).unwrap();
        sort_by_size(&mut rows);
        assert_eq!(cost_ceiling(&rows), 40.0);
    }

    #[test]
    fn lead_in_starts_at_origin_and_ends_at_first_point() {
        let mut rows = parse_cost_table(SAMPLE).unwrap();
        sort_by_size(&mut rows);
        let [c_lead, rust_lead] = lead_in_segments(&rows).unwrap();
        assert_eq!(c_lead, [(0.0, 0.0), (50.0, 10.0)]);
        assert_eq!(rust_lead, [(0.0, 0.0), (50.0, 5.0)]);
    }

    #[test]
    fn lead_in_empty_for_no_rows() {
        assert!(lead_in_segments(&[]).is_none());
    }
}

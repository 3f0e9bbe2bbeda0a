//! Headerless comma-delimited numeric tables.
//!
//! The PCA result files carry no header row; every line is a comma-separated
//! list of floats and all lines must have the same width.

use std::fs::read_to_string;
use std::path::Path;

/// Read and parse a numeric matrix from `path`.
///
/// Blank lines are skipped. Fails on a missing file, a non-numeric field,
/// a ragged row, or any row with fewer than `min_cols` columns.
pub fn load_matrix(path: &Path, min_cols: usize) -> Result<Vec<Vec<f64>>, String> {
    let text = read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse_matrix(&text, min_cols).map_err(|e| format!("{}: {e}", path.display()))
}

pub fn parse_matrix(text: &str, min_cols: usize) -> Result<Vec<Vec<f64>>, String> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut width: Option<usize> = None;
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() < min_cols {
            return Err(format!(
                "line {}: expected at least {min_cols} columns, got {}",
                line_no + 1,
                cols.len()
            ));
        }
        match width {
            None => width = Some(cols.len()),
            Some(w) if w != cols.len() => {
                return Err(format!(
                    "line {}: ragged row ({} columns, expected {w})",
                    line_no + 1,
                    cols.len()
                ));
            }
            Some(_) => {}
        }
        let mut row = Vec::with_capacity(cols.len());
        for (col_no, col) in cols.iter().enumerate() {
            let value = col.trim().parse::<f64>().map_err(|e| {
                format!("line {}: column {}: {e}", line_no + 1, col_no + 1)
            })?;
            row.push(value);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err("empty table".to_string());
    }
    Ok(rows)
}

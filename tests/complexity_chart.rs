use std::fs;
use std::path::PathBuf;

use genoviz::complexity::{
    cost_ceiling, lead_in_segments, load_cost_table, render_complexity_chart, sort_by_size,
};

fn unique_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "genoviz_complexity_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

#[test]
fn unsorted_input_renders_sorted_series() {
    let dir = unique_dir("render");
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("complexity_data.csv");
    fs::write(
        &input,
        "d,C_complexity,Rust_complexity\n250,80.0,30.0\n10,4.0,2.0\n120,35.0,12.0\n",
    )
    .unwrap();

    let mut rows = load_cost_table(&input).expect("load should succeed");
    sort_by_size(&mut rows);

    let sizes: Vec<f64> = rows.iter().map(|r| r.d).collect();
    assert_eq!(sizes, vec![10.0, 120.0, 250.0]);
    assert_eq!(cost_ceiling(&rows), 80.0);
    let [c_lead, rust_lead] = lead_in_segments(&rows).unwrap();
    assert_eq!(c_lead, [(0.0, 0.0), (10.0, 4.0)]);
    assert_eq!(rust_lead, [(0.0, 0.0), (10.0, 2.0)]);

    let output = dir.join("complexity_comparison.png");
    render_complexity_chart(&output, &rows, 300.0).expect("render should succeed");
    assert!(fs::metadata(&output).unwrap().len() > 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = unique_dir("missing");
    let err = load_cost_table(&dir.join("absent.csv")).unwrap_err();
    assert!(err.contains("absent.csv"), "{err}");
}

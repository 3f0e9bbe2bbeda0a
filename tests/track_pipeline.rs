use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use genoviz::tracks::{TRACK_LABELS, assemble_image, generation_tracks, render_track_chart};

fn unique_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "genoviz_tracks_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

#[test]
fn full_pipeline_writes_track_image() {
    let dir = unique_dir("pipeline");
    fs::create_dir_all(&dir).unwrap();

    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let tracks = generation_tracks(500, &mut rng);
    let image = assemble_image(&tracks, 20, 1);

    assert_eq!(image.width, 500 * 20);
    assert_eq!(image.height, 4 + 3);
    assert_eq!(image.track_rows.len(), TRACK_LABELS.len());

    let output = dir.join("genomic_tracks.png");
    render_track_chart(&output, &image, &TRACK_LABELS).expect("render should succeed");
    assert!(fs::metadata(&output).unwrap().len() > 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn seeded_pipeline_is_reproducible() {
    let mut a = StdRng::seed_from_u64(77);
    let mut b = StdRng::seed_from_u64(77);
    let image_a = assemble_image(&generation_tracks(32, &mut a), 4, 1);
    let image_b = assemble_image(&generation_tracks(32, &mut b), 4, 1);
    assert_eq!(image_a.rows, image_b.rows);
}

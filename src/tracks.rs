//! Synthetic generation tracks.
//!
//! A track is a fixed-length sequence of palette shades. Each generation
//! after the first keeps half of its parent's shades (sampled without
//! replacement) and introduces one new shade for the other half, then
//! shuffles. The four tracks are expanded into a stacked pixel image with
//! white separator rows and rendered as a PNG.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::info;

/// Closed palette of track shades.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shade {
    Black,
    Red,
    Green,
    Blue,
}

impl Shade {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Shade::Black => [0, 0, 0],
            Shade::Red => [255, 0, 0],
            Shade::Green => [0, 255, 0],
            Shade::Blue => [0, 0, 255],
        }
    }
}

pub const SEPARATOR_RGB: [u8; 3] = [255, 255, 255];
pub const TRACK_LABELS: [&str; 4] = ["GEN0", "GEN1", "GEN2", "GEN3"];

pub type Track = Vec<Shade>;

/// Derive a child track: `n / 2` elements sampled uniformly without
/// replacement from `base` (values kept, positions not), the remainder set
/// to `new_shade`, then the whole track shuffled.
///
/// `n` odd is defined, not an error: the preserved half truncates to `n / 2`
/// and `new_shade` fills the extra slot.
pub fn create_track(base: &[Shade], new_shade: Shade, rng: &mut impl Rng) -> Track {
    let n = base.len();
    let mut combined: Track = base.choose_multiple(rng, n / 2).copied().collect();
    combined.resize(n, new_shade);
    combined.shuffle(rng);
    combined
}

/// Build the four generation tracks:
/// GEN0 all black, GEN1 an even black/red split shuffled, GEN2 and GEN3
/// derived from their predecessor via [`create_track`].
pub fn generation_tracks(segments: usize, rng: &mut impl Rng) -> [Track; 4] {
    let track1 = vec![Shade::Black; segments];

    let mut track2 = vec![Shade::Black; segments];
    for shade in track2[segments / 2..].iter_mut() {
        *shade = Shade::Red;
    }
    track2.shuffle(rng);

    let track3 = create_track(&track2, Shade::Green, rng);
    let track4 = create_track(&track3, Shade::Blue, rng);
    [track1, track2, track3, track4]
}

/// Stacked pixel image: one row per track plus white separator rows.
#[derive(Clone, Debug)]
pub struct TrackImage {
    pub width: usize,
    pub height: usize,
    /// Row-major RGB pixels; `rows.len() == height`, each row `width` long.
    pub rows: Vec<Vec<[u8; 3]>>,
    /// Row index of each track's pixel row.
    pub track_rows: Vec<usize>,
}

/// Expand each track element into `chunk_size` identical pixels and stack
/// the tracks with `separator_height` white rows between consecutive tracks.
pub fn assemble_image(tracks: &[Track], chunk_size: usize, separator_height: usize) -> TrackImage {
    let width = tracks.first().map_or(0, |t| t.len() * chunk_size);
    let mut rows: Vec<Vec<[u8; 3]>> = Vec::new();
    let mut track_rows = Vec::with_capacity(tracks.len());

    for (i, track) in tracks.iter().enumerate() {
        let mut row = Vec::with_capacity(width);
        for shade in track {
            for _ in 0..chunk_size {
                row.push(shade.rgb());
            }
        }
        track_rows.push(rows.len());
        rows.push(row);

        if i + 1 < tracks.len() {
            for _ in 0..separator_height {
                rows.push(vec![SEPARATOR_RGB; width]);
            }
        }
    }

    TrackImage {
        width,
        height: rows.len(),
        rows,
        track_rows,
    }
}

/// Render the pixel image stretched to the full plot area, with one label
/// per track on the left margin and no x axis.
pub fn render_track_chart(
    out_path: &Path,
    image: &TrackImage,
    labels: &[&str],
) -> Result<(), Box<dyn Error>> {
    if image.width == 0 || image.height == 0 {
        return Err("empty track image".into());
    }

    let root = BitMapBackend::new(out_path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (label_area, plot_area) = root.split_horizontally(70);

    let (plot_w, plot_h) = plot_area.dim_in_pixel();
    let x_scale = plot_w as f64 / image.width as f64;
    let y_scale = plot_h as f64 / image.height as f64;

    for (r, row) in image.rows.iter().enumerate() {
        let y0 = (r as f64 * y_scale).round() as i32;
        let y1 = ((r + 1) as f64 * y_scale).round() as i32;
        // Runs of identical pixels collapse into one rectangle per chunk.
        let mut col = 0usize;
        while col < row.len() {
            let rgb = row[col];
            let mut end = col + 1;
            while end < row.len() && row[end] == rgb {
                end += 1;
            }
            let x0 = (col as f64 * x_scale).round() as i32;
            let x1 = (end as f64 * x_scale).round() as i32;
            plot_area.draw(&Rectangle::new(
                [(x0, y0), (x1, y1)],
                RGBColor(rgb[0], rgb[1], rgb[2]).filled(),
            ))?;
            col = end;
        }
    }

    let label_style = TextStyle::from(("sans-serif", 16)).color(&BLACK);
    for (label, &row) in labels.iter().zip(&image.track_rows) {
        let y = ((row as f64 + 0.5) * y_scale).round() as i32;
        label_area.draw(&Text::new(*label, (8, y - 8), label_style.clone()))?;
    }

    root.present()?;
    info!("wrote track image to {}", out_path.display());
    Ok(())
}

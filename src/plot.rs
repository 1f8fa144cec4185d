//! Scatter-plot rendering of a generated catalog.
//!
//! Renders declination against right ascension as a square raster image
//! with point markers, matching the catalog CSV companion artifact.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::star::StarPosition;

/// Edge length of the square output image, in pixels.
const PLOT_SIZE_PX: u32 = 800;

/// Render a catalog as a scatter plot and write it to `path`.
///
/// Axis ranges are fitted to the data with a small margin; an empty
/// catalog falls back to a unit range so the axes still render.
pub fn plot_catalog<P: AsRef<Path>>(
    path: P,
    stars: &[StarPosition],
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, (PLOT_SIZE_PX, PLOT_SIZE_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let (ra_range, dec_range) = axis_ranges(stars);

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(ra_range, dec_range)?;

    chart
        .configure_mesh()
        .x_desc("RA")
        .y_desc("DEC")
        .draw()?;

    chart.draw_series(
        stars
            .iter()
            .map(|star| Circle::new((star.ra_deg, star.dec_deg), 2, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

fn axis_ranges(stars: &[StarPosition]) -> (Range<f64>, Range<f64>) {
    if stars.is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }

    let mut ra_min = f64::INFINITY;
    let mut ra_max = f64::NEG_INFINITY;
    let mut dec_min = f64::INFINITY;
    let mut dec_max = f64::NEG_INFINITY;
    for star in stars {
        ra_min = ra_min.min(star.ra_deg);
        ra_max = ra_max.max(star.ra_deg);
        dec_min = dec_min.min(star.dec_deg);
        dec_max = dec_max.max(star.dec_deg);
    }

    (padded(ra_min, ra_max), padded(dec_min, dec_max))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    // Keep a visible span even for a single point.
    let pad = (0.05 * (max - min)).max(0.05);
    (min - pad)..(max + pad)
}

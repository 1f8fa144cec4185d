//! Synthetic catalog generation and CSV serialization.
//!
//! Candidate positions are drawn uniformly from a fixed ±1° box around
//! the reference point, then clipped to a circular region (classic
//! rejection sampling). The catalog is written as a flat CSV file with a
//! zero-padded sequential id per retained star.

use std::path::Path;

use anyhow::Context;
use rand::Rng;
use tracing::debug;

use crate::star::StarPosition;

/// Half-width in degrees of the uniform sampling box around the
/// reference point.
///
/// The box is fixed: the clip radius does not change it. A radius above
/// 1° under-fills the circle, and a radius well below 1° rejects most
/// candidates. Downstream consumers depend on this exact behavior.
pub const BOX_HALF_WIDTH_DEG: f64 = 1.0;

/// Generate a clipped catalog of synthetic star positions.
///
/// Draws `nsrc` candidates uniformly from the sampling box centered on
/// `(ref_ra_deg, ref_dec_deg)`, then keeps only those strictly inside
/// the circle of `radius_deg`. The result length is at most `nsrc`, in
/// generation order; an empty result is valid output, not an error.
///
/// The random source is injected so callers can seed it for
/// reproducible catalogs.
pub fn make_stars<R: Rng + ?Sized>(
    ref_ra_deg: f64,
    ref_dec_deg: f64,
    nsrc: usize,
    radius_deg: f64,
    rng: &mut R,
) -> Vec<StarPosition> {
    debug!(nsrc, radius_deg, "generating synthetic star positions");

    let mut stars = Vec::with_capacity(nsrc);
    for _ in 0..nsrc {
        stars.push(StarPosition {
            ra_deg: ref_ra_deg + rng.gen_range(-BOX_HALF_WIDTH_DEG..BOX_HALF_WIDTH_DEG),
            dec_deg: ref_dec_deg + rng.gen_range(-BOX_HALF_WIDTH_DEG..BOX_HALF_WIDTH_DEG),
        });
    }

    clip_to_radius(stars, ref_ra_deg, ref_dec_deg, radius_deg)
}

/// Keep only positions strictly inside the clip circle, preserving order.
pub fn clip_to_radius(
    stars: Vec<StarPosition>,
    ref_ra_deg: f64,
    ref_dec_deg: f64,
    radius_deg: f64,
) -> Vec<StarPosition> {
    let total = stars.len();
    let kept: Vec<StarPosition> = stars
        .into_iter()
        .filter(|star| star.within_radius(ref_ra_deg, ref_dec_deg, radius_deg))
        .collect();
    debug!(total, kept = kept.len(), radius_deg, "clipped positions to radius");
    kept
}

/// Write a catalog as CSV: header `id,ra,dec`, one row per star.
///
/// Ids are sequential from 0, zero-padded to 7 digits; coordinates are
/// fixed-point with 6 decimal places.
pub fn write_catalog<P: AsRef<Path>>(path: P, stars: &[StarPosition]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create catalog file {}", path.display()))?;

    wtr.write_record(["id", "ra", "dec"])?;
    for (id, star) in stars.iter().enumerate() {
        wtr.write_record([
            format!("{id:07}"),
            format!("{:.6}", star.ra_deg),
            format!("{:.6}", star.dec_deg),
        ])?;
    }
    wtr.flush()
        .with_context(|| format!("failed to write catalog file {}", path.display()))?;

    debug!(n = stars.len(), path = %path.display(), "catalog written");
    Ok(())
}

/// Read a catalog written by [`write_catalog`].
///
/// The id column is ignored; only the coordinate columns are restored.
pub fn read_catalog<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<StarPosition>> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open catalog file {}", path.display()))?;

    let mut stars = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let ra_deg: f64 = record
            .get(1)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("bad ra field in {}", path.display()))?;
        let dec_deg: f64 = record
            .get(2)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("bad dec field in {}", path.display()))?;
        stars.push(StarPosition { ra_deg, dec_deg });
    }
    Ok(stars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Converted Andromeda reference point.
    const REF_RA: f64 = 14.215420962967535;
    const REF_DEC: f64 = 41.269166666666667;

    #[test]
    fn zero_count_gives_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        let stars = make_stars(REF_RA, REF_DEC, 0, 1.0, &mut rng);
        assert!(stars.is_empty());
    }

    #[test]
    fn never_more_than_requested() {
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let stars = make_stars(REF_RA, REF_DEC, 1000, 2.5, &mut rng);
            assert!(stars.len() <= 1000);
        }
    }

    #[test]
    fn all_entries_inside_clip_circle() {
        let mut rng = StdRng::seed_from_u64(42);
        let stars = make_stars(REF_RA, REF_DEC, 1000, 0.7, &mut rng);
        for star in &stars {
            assert!(star.dist2_from(REF_RA, REF_DEC) < 0.7 * 0.7);
        }
    }

    #[test]
    fn unit_radius_keeps_roughly_pi_over_four() {
        // Circle area over box area is π/4 ≈ 0.785, so out of 1000
        // candidates roughly 785 survive. Bounds are several sigma wide.
        let mut rng = StdRng::seed_from_u64(7);
        let stars = make_stars(REF_RA, REF_DEC, 1000, 1.0, &mut rng);
        assert!(stars.len() < 1000);
        assert!(stars.len() > 700);
        assert!(stars.len() < 870);
    }

    #[test]
    fn tight_radius_rejects_most_candidates() {
        // Expected yield is π * 0.1² / 4 ≈ 0.8% of candidates.
        let mut rng = StdRng::seed_from_u64(11);
        let stars = make_stars(REF_RA, REF_DEC, 1000, 0.1, &mut rng);
        assert!(stars.len() < 50);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = make_stars(REF_RA, REF_DEC, 200, 1.0, &mut a);
        let second = make_stars(REF_RA, REF_DEC, 200, 1.0, &mut b);
        assert_eq!(first, second);
    }

    #[test]
    fn clip_preserves_order_and_drops_outsiders() {
        let inside_a = StarPosition {
            ra_deg: 0.1,
            dec_deg: 0.1,
        };
        let outside = StarPosition {
            ra_deg: 2.0,
            dec_deg: 0.0,
        };
        let inside_b = StarPosition {
            ra_deg: -0.3,
            dec_deg: 0.2,
        };
        let kept = clip_to_radius(vec![inside_a, outside, inside_b], 0.0, 0.0, 1.0);
        assert_eq!(kept, vec![inside_a, inside_b]);
    }

    #[test]
    fn csv_round_trip_preserves_coordinates() {
        let mut rng = StdRng::seed_from_u64(5);
        let stars = make_stars(REF_RA, REF_DEC, 100, 1.0, &mut rng);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        write_catalog(&path, &stars).unwrap();

        // One header line plus one row per star.
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), stars.len() + 1);

        let restored = read_catalog(&path).unwrap();
        assert_eq!(restored.len(), stars.len());
        for (orig, read) in stars.iter().zip(&restored) {
            assert!((orig.ra_deg - read.ra_deg).abs() < 5e-7);
            assert!((orig.dec_deg - read.dec_deg).abs() < 5e-7);
        }
    }

    #[test]
    fn csv_ids_are_zero_padded_from_zero() {
        let stars = vec![
            StarPosition {
                ra_deg: 14.0,
                dec_deg: 41.0,
            },
            StarPosition {
                ra_deg: 14.5,
                dec_deg: 41.5,
            },
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        write_catalog(&path, &stars).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,ra,dec"));
        assert_eq!(lines.next(), Some("0000000,14.000000,41.000000"));
        assert_eq!(lines.next(), Some("0000001,14.500000,41.500000"));
    }

    #[test]
    fn writing_empty_catalog_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        write_catalog(&path, &[]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(read_catalog(&path).unwrap().is_empty());
    }
}

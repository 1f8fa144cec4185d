//! Simulate a star catalog near a reference sky position, write it as
//! CSV, and plot the distribution.
//!
//! With no arguments the reference point is the built-in Andromeda
//! coordinate pair; pass both `--ra` and `--dec` (decimal degrees) to
//! override it. Set `RUST_LOG=debug` for per-stage diagnostics.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skysim::{make_stars, plot_catalog, radec_degrees, write_catalog};
use skysim::{ANDROMEDA_DEC, ANDROMEDA_RA};

#[derive(Parser, Debug)]
#[command(
    name = "skysim",
    about = "Simulate a catalog of stars near a reference sky position"
)]
struct Args {
    /// Central ra (degrees) for the simulation location; only takes
    /// effect together with --dec
    #[arg(long)]
    ra: Option<f64>,

    /// Central dec (degrees) for the simulation location; only takes
    /// effect together with --ra
    #[arg(long)]
    dec: Option<f64>,

    /// Destination for the output catalog
    #[arg(long, default_value = "catalog.csv")]
    out: PathBuf,

    /// Destination for the scatter-plot image
    #[arg(long, default_value = "skysim_distrib.png")]
    plot: PathBuf,

    /// Number of candidate positions to draw
    #[arg(long, default_value_t = 1000)]
    nsrc: usize,

    /// Clip radius in degrees
    #[arg(long, default_value_t = 1.0)]
    radius: f64,

    /// RNG seed for reproducible catalogs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if !(args.radius > 0.0) {
        return Err(anyhow::anyhow!("--radius must be positive, got {}", args.radius).into());
    }

    // An override requires both flags; otherwise both fall back to the
    // converted Andromeda reference.
    let (ref_ra, ref_dec) = match (args.ra, args.dec) {
        (Some(ra), Some(dec)) => (ra, dec),
        _ => radec_degrees(ANDROMEDA_RA, ANDROMEDA_DEC)?,
    };
    info!(ref_ra, ref_dec, "simulation reference point");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stars = make_stars(ref_ra, ref_dec, args.nsrc, args.radius, &mut rng);

    write_catalog(&args.out, &stars)?;
    info!(n = stars.len(), out = %args.out.display(), "wrote catalog");

    plot_catalog(&args.plot, &stars)?;
    info!(plot = %args.plot.display(), "plotted the distribution");

    Ok(())
}

//! # skysim
//!
//! Simulate a small catalog of stars scattered around a reference sky
//! position.
//!
//! The library does two things:
//!
//! - **Coordinate conversion** — resolve sexagesimal RA/DEC strings into
//!   decimal degrees, applying the declination-dependent RA stretch
//!   ([`coords`])
//! - **Catalog generation** — draw candidate positions uniformly in a
//!   fixed ±1° box around the reference point and keep those inside a
//!   circular clip radius ([`catalog`])
//!
//! Catalogs serialize to CSV (`id,ra,dec`), and with the default `plot`
//! feature a scatter-plot image of the distribution can be rendered.
//! The `skysim` binary wires these together behind a small CLI.
//!
//! Generation takes an injected [`rand::Rng`], so catalogs are
//! reproducible when the caller seeds the source; the binary only falls
//! back to an entropy-seeded generator when no seed is given.
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use skysim::{make_stars, radec_degrees, ANDROMEDA_DEC, ANDROMEDA_RA};
//!
//! let (ref_ra, ref_dec) = radec_degrees(ANDROMEDA_RA, ANDROMEDA_DEC)?;
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let stars = make_stars(ref_ra, ref_dec, 1000, 1.0, &mut rng);
//! assert!(stars.len() <= 1000);
//! for star in &stars {
//!     assert!(star.within_radius(ref_ra, ref_dec, 1.0));
//! }
//! # Ok::<(), skysim::ParseError>(())
//! ```
//!
//! Diagnostics go through [`tracing`]; the library never installs a
//! subscriber of its own.

pub mod catalog;
pub mod coords;
pub mod errors;
#[cfg(feature = "plot")]
pub mod plot;
pub mod star;

pub use catalog::{clip_to_radius, make_stars, read_catalog, write_catalog, BOX_HALF_WIDTH_DEG};
pub use coords::{parse_sexagesimal, radec_degrees, ANDROMEDA_DEC, ANDROMEDA_RA};
pub use errors::ParseError;
#[cfg(feature = "plot")]
pub use plot::plot_catalog;
pub use star::StarPosition;

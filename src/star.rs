/// A single synthetic catalog entry, in decimal degrees.
///
/// Positions are planar offsets from a reference point; no spherical
/// wrap-around handling is applied at catalog scale (a couple of degrees
/// around the reference).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPosition {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl StarPosition {
    /// Squared planar offset from a reference point, in square degrees.
    pub fn dist2_from(&self, ref_ra_deg: f64, ref_dec_deg: f64) -> f64 {
        let dra = self.ra_deg - ref_ra_deg;
        let ddec = self.dec_deg - ref_dec_deg;
        dra * dra + ddec * ddec
    }

    /// True when the entry lies strictly inside the clip circle.
    pub fn within_radius(&self, ref_ra_deg: f64, ref_dec_deg: f64, radius_deg: f64) -> bool {
        self.dist2_from(ref_ra_deg, ref_dec_deg) < radius_deg * radius_deg
    }
}

use nalgebra::{Unit, Vector3};

/// The local normal triad [p, q, r] at ICRS coordinates (alpha, delta).
///
/// p points east (increasing right ascension), q points north (increasing
/// declination), and r points along the line of sight towards the source.
/// The triad is orthonormal and right-handed for any input; at the celestial
/// poles p and q are still well-defined by continuity in alpha.
#[derive(Debug, Clone, Copy)]
pub struct NormalTriad {
    pub p: Unit<Vector3<f64>>,
    pub q: Unit<Vector3<f64>>,
    pub r: Unit<Vector3<f64>>,
}

impl NormalTriad {
    pub fn from_icrs(right_ascension: f64, declination: f64) -> Self {
        let (sin_ra, cos_ra) = right_ascension.sin_cos();
        let (sin_dec, cos_dec) = declination.sin_cos();

        NormalTriad {
            p: Unit::new_unchecked(Vector3::new(-sin_ra, cos_ra, 0.0)),
            q: Unit::new_unchecked(Vector3::new(
                -sin_dec * cos_ra,
                -sin_dec * sin_ra,
                cos_dec,
            )),
            r: Unit::new_unchecked(Vector3::new(
                cos_dec * cos_ra,
                cos_dec * sin_ra,
                sin_dec,
            )),
        }
    }
}

use crate::astro::{OrbitPoint, OrbitalElements};

/// The four Thiele-Innes constants (A, B, F, G): the linear map from
/// orbital-plane coordinates to sky-plane coordinates for an orbit oriented
/// by (i, Omega, omega).
///
/// These are the upper-left 2x2 block of the orientation rotation
/// Rz(Omega) Rx(i) Rz(omega) -- the projection onto the sky plane with the
/// line-of-sight component dropped. Each entry is a sum of products of sines
/// and cosines, so each lies in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThieleInnes {
    pub a: f64,
    pub b: f64,
    pub f: f64,
    pub g: f64,
}

/// Projected position in the sky plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPoint {
    pub xi: f64,
    pub eta: f64,
}

impl ThieleInnes {
    pub fn from_angles(incl: f64, lan: f64, argp: f64) -> Self {
        let (sin_argp, cos_argp) = argp.sin_cos();
        let (sin_lan, cos_lan) = lan.sin_cos();
        let cos_incl = incl.cos();

        ThieleInnes {
            a: cos_argp * cos_lan - sin_argp * sin_lan * cos_incl,
            b: cos_argp * sin_lan + sin_argp * cos_lan * cos_incl,
            f: -(sin_argp * cos_lan + cos_argp * sin_lan * cos_incl),
            g: -(sin_argp * sin_lan - cos_argp * cos_lan * cos_incl),
        }
    }

    pub fn from_elements(elements: &OrbitalElements) -> Self {
        Self::from_angles(
            elements.inclination(),
            elements.long_asc_node(),
            elements.arg_periapse(),
        )
    }

    /// Applies xi = A x + F y, eta = B x + G y.
    pub fn project(&self, point: OrbitPoint) -> SkyPoint {
        SkyPoint {
            xi: self.a * point.x + self.f * point.y,
            eta: self.b * point.x + self.g * point.y,
        }
    }

    /// A G - B F, which works out to cos(i). Face-on orbits project with
    /// determinant 1, edge-on orbits collapse the map to rank one.
    pub fn determinant(&self) -> f64 {
        self.a * self.g - self.b * self.f
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::geometry::rotation_from_angles;

    #[test]
    fn test_face_on_is_identity() {
        let ti = ThieleInnes::from_angles(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(ti.a, 1.0);
        assert_abs_diff_eq!(ti.b, 0.0);
        assert_abs_diff_eq!(ti.f, 0.0);
        assert_abs_diff_eq!(ti.g, 1.0);
    }

    #[test]
    fn test_edge_on_collapses_second_axis() {
        let ti = ThieleInnes::from_angles(PI / 2.0, 0.0, 0.0);
        assert_abs_diff_eq!(ti.a, 1.0);
        assert_abs_diff_eq!(ti.b, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(ti.f, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(ti.g, 0.0, epsilon = 1e-15);

        // Everything lands on the xi-axis
        let projected = ti.project(OrbitPoint { x: 0.3, y: 0.9 });
        assert_abs_diff_eq!(projected.xi, 0.3);
        assert_abs_diff_eq!(projected.eta, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_determinant_is_cos_inclination() {
        for i in 0..13 {
            let incl = i as f64 * PI / 12.0;
            for j in 0..8 {
                let lan = j as f64 * PI / 4.0;
                let argp = 0.37 + j as f64;
                let ti = ThieleInnes::from_angles(incl, lan, argp);
                assert_abs_diff_eq!(ti.determinant(), incl.cos(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_matches_rotation_block() {
        // (A F; B G) is the upper-left block of the orientation rotation
        let (incl, lan, argp) = (0.7, 2.3, 4.1);
        let ti = ThieleInnes::from_angles(incl, lan, argp);
        let matrix = rotation_from_angles(incl, lan, argp).into_inner();

        assert_abs_diff_eq!(ti.a, matrix[(0, 0)], epsilon = 1e-15);
        assert_abs_diff_eq!(ti.f, matrix[(0, 1)], epsilon = 1e-15);
        assert_abs_diff_eq!(ti.b, matrix[(1, 0)], epsilon = 1e-15);
        assert_abs_diff_eq!(ti.g, matrix[(1, 1)], epsilon = 1e-15);
    }

    #[test]
    fn test_face_on_depends_only_on_angle_sum() {
        // At zero inclination only Omega + omega is observable
        let ti_1 = ThieleInnes::from_angles(0.0, 0.5, 1.7);
        let ti_2 = ThieleInnes::from_angles(0.0, 2.0, 0.2);
        assert_abs_diff_eq!(ti_1.a, ti_2.a, epsilon = 1e-12);
        assert_abs_diff_eq!(ti_1.b, ti_2.b, epsilon = 1e-12);
        assert_abs_diff_eq!(ti_1.f, ti_2.f, epsilon = 1e-12);
        assert_abs_diff_eq!(ti_1.g, ti_2.g, epsilon = 1e-12);
    }

    #[test]
    fn test_coefficients_bounded() {
        for i in 0..10 {
            for j in 0..10 {
                let ti = ThieleInnes::from_angles(0.31 * i as f64, 0.63 * j as f64, 1.1);
                for value in [ti.a, ti.b, ti.f, ti.g] {
                    assert!(value.abs() <= 1.0 + 1e-15);
                }
            }
        }
    }
}

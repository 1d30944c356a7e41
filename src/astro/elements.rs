use std::f64::consts::PI;

use nalgebra::{Rotation3, Unit, Vector3};

use crate::error::Error;
use crate::math::geometry::rotation_from_angles;
use crate::math::kepler::{self, KeplerSolution};

/// Classical orbital elements of a bound (elliptical) orbit.
///
/// The shape is (a, e); the orientation relative to the reference plane is
/// the Euler-like triple (i, Omega, omega). All angles in radians. Validated
/// at construction, so every method can assume a legal ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semimajor_axis: f64,
    eccentricity: f64,
    inclination: f64,
    long_asc_node: f64,
    arg_periapse: f64,
}

/// Position in the orbital plane, with the focus at the origin and periapsis
/// on the positive x-axis at x = a(1 - e).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPoint {
    pub x: f64,
    pub y: f64,
}

impl OrbitalElements {
    pub fn new(
        semimajor_axis: f64,
        eccentricity: f64,
        inclination: f64,
        long_asc_node: f64,
        arg_periapse: f64,
    ) -> Result<Self, Error> {
        if !(semimajor_axis > 0.0) {
            return Err(Error::InvalidSemimajorAxis(semimajor_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(Error::InvalidEccentricity(eccentricity));
        }

        Ok(Self {
            semimajor_axis,
            eccentricity,
            inclination,
            long_asc_node,
            arg_periapse,
        })
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn long_asc_node(&self) -> f64 {
        self.long_asc_node
    }

    pub fn arg_periapse(&self) -> f64 {
        self.arg_periapse
    }

    pub fn semiminor_axis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity * self.eccentricity).sqrt()
    }

    pub fn semilatus_rectum(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    pub fn periapsis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        self.semimajor_axis * (1.0 + self.eccentricity)
    }

    // -- Orientation --

    /// Moves the xy plane to the orbital plane and x to point at periapsis.
    pub fn rotation(&self) -> Rotation3<f64> {
        rotation_from_angles(self.inclination, self.long_asc_node, self.arg_periapse)
    }

    pub fn periapse_vector(&self) -> Unit<Vector3<f64>> {
        self.rotation() * Vector3::x_axis()
    }

    pub fn normal_vector(&self) -> Unit<Vector3<f64>> {
        self.rotation() * Vector3::z_axis()
    }

    pub fn asc_node_vector(&self) -> Unit<Vector3<f64>> {
        let v = Vector3::z().cross(&self.normal_vector());
        // Face-on orbits have no line of nodes; fall back to periapsis
        Unit::try_new(v, 1e-20).unwrap_or_else(|| self.periapse_vector())
    }

    /// True when the orbital and reference planes coincide, making Omega and
    /// omega individually meaningless (only their sum or difference is
    /// observable).
    pub fn is_face_on(&self) -> bool {
        // sin(PI) is not exactly zero in floats, so test with a tolerance
        self.inclination.sin().abs() < 1e-12
    }

    // -- Positions on the ellipse --

    pub fn position_at_eccentric(&self, eccentric_anomaly: f64) -> OrbitPoint {
        OrbitPoint {
            x: self.semimajor_axis * (eccentric_anomaly.cos() - self.eccentricity),
            y: self.semiminor_axis() * eccentric_anomaly.sin(),
        }
    }

    pub fn position_at_true(&self, true_anomaly: f64) -> OrbitPoint {
        let radius =
            self.semilatus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos());
        OrbitPoint {
            x: radius * true_anomaly.cos(),
            y: radius * true_anomaly.sin(),
        }
    }

    /// Runs the Kepler solver and evaluates the ellipse at the result. The
    /// solution is returned alongside so the caller can check convergence.
    pub fn position_at_mean(&self, mean_anomaly: f64) -> (OrbitPoint, KeplerSolution) {
        let solution = kepler::mean_to_eccentric(mean_anomaly, self.eccentricity)
            .expect("eccentricity was validated at construction");
        (
            self.position_at_eccentric(solution.eccentric_anomaly),
            solution,
        )
    }

    /// Endpoints of the line of nodes: the points on the ellipse at true
    /// anomaly -omega (ascending) and pi - omega (descending). Undefined for
    /// face-on orbits, where the orbit never crosses the reference plane.
    pub fn line_of_nodes(&self) -> Option<(OrbitPoint, OrbitPoint)> {
        if self.is_face_on() {
            return None;
        }
        let ascending = self.position_at_true(-self.arg_periapse);
        let descending = self.position_at_true(PI - self.arg_periapse);
        Some((ascending, descending))
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::geometry::directed_angle;

    fn demo_elements() -> OrbitalElements {
        OrbitalElements::new(2.0, 0.6, 0.5, 1.2, 0.8).unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            OrbitalElements::new(-1.0, 0.5, 0.0, 0.0, 0.0),
            Err(Error::InvalidSemimajorAxis(-1.0))
        );
        assert_eq!(
            OrbitalElements::new(2.0, 1.0, 0.0, 0.0, 0.0),
            Err(Error::InvalidEccentricity(1.0))
        );
        assert_eq!(
            OrbitalElements::new(2.0, -0.1, 0.0, 0.0, 0.0),
            Err(Error::InvalidEccentricity(-0.1))
        );
        assert!(OrbitalElements::new(2.0, 0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_derived_shape_quantities() {
        let elements = demo_elements();
        assert_relative_eq!(elements.semiminor_axis(), 1.6);
        assert_relative_eq!(elements.semilatus_rectum(), 1.28);
        assert_relative_eq!(elements.periapsis(), 0.8);
        assert_relative_eq!(elements.apoapsis(), 3.2);
    }

    #[test]
    fn test_positions_at_apses() {
        let elements = demo_elements();

        let periapsis = elements.position_at_eccentric(0.0);
        assert_relative_eq!(periapsis.x, elements.periapsis());
        assert_relative_eq!(periapsis.y, 0.0);

        let apoapsis = elements.position_at_eccentric(PI);
        assert_relative_eq!(apoapsis.x, -elements.apoapsis());
        assert_abs_diff_eq!(apoapsis.y, 0.0, epsilon = 1e-15);

        // True-anomaly parameterization agrees at the apses
        let periapsis2 = elements.position_at_true(0.0);
        assert_relative_eq!(periapsis2.x, periapsis.x);
        assert_relative_eq!(periapsis2.y, periapsis.y);
    }

    #[test]
    fn test_parameterizations_agree() {
        let elements = demo_elements();
        let e = elements.eccentricity();
        for i in 0..24 {
            let ecc_anomaly = -PI + i as f64 * PI / 12.0 + 0.01;
            let theta = kepler::eccentric_to_true(ecc_anomaly, e);

            let from_ecc = elements.position_at_eccentric(ecc_anomaly);
            let from_true = elements.position_at_true(theta);
            assert_abs_diff_eq!(from_ecc.x, from_true.x, epsilon = 1e-12);
            assert_abs_diff_eq!(from_ecc.y, from_true.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_orientation_vectors() {
        let elements = demo_elements();

        assert_relative_eq!(
            elements.normal_vector().angle(&Vector3::z()),
            elements.inclination(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            directed_angle(&Vector3::x(), &elements.asc_node_vector(), &Vector3::z()),
            elements.long_asc_node(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            directed_angle(
                &elements.asc_node_vector(),
                &elements.periapse_vector(),
                &elements.normal_vector(),
            ),
            elements.arg_periapse(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_line_of_nodes_lies_in_reference_plane() {
        let elements = demo_elements();
        let (ascending, descending) = elements.line_of_nodes().unwrap();

        // Mapped into 3D by the orientation rotation, the node endpoints
        // must land back in the reference plane (z = 0).
        let rotation = elements.rotation();
        for point in [ascending, descending] {
            let in_space = rotation * Vector3::new(point.x, point.y, 0.0);
            assert_abs_diff_eq!(in_space.z, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_line_of_nodes_degenerate_cases() {
        let face_on = OrbitalElements::new(2.0, 0.6, 0.0, 1.0, 2.0).unwrap();
        assert!(face_on.is_face_on());
        assert_eq!(face_on.line_of_nodes(), None);

        let retrograde = OrbitalElements::new(2.0, 0.6, PI, 1.0, 2.0).unwrap();
        assert!(retrograde.is_face_on());
        assert_eq!(retrograde.line_of_nodes(), None);

        let inclined = OrbitalElements::new(2.0, 0.6, 0.01, 1.0, 2.0).unwrap();
        assert!(!inclined.is_face_on());
        assert!(inclined.line_of_nodes().is_some());
    }

    #[test]
    fn test_position_at_mean_reports_solver_outcome() {
        let elements = demo_elements();
        let (point, solution) = elements.position_at_mean(1.0);
        assert!(solution.converged);

        let expected = elements.position_at_eccentric(solution.eccentric_anomaly);
        assert_relative_eq!(point.x, expected.x);
        assert_relative_eq!(point.y, expected.y);
    }
}

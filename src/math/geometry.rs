use std::f64::consts::PI;

use nalgebra::{Rotation3, Vector3};

pub fn directed_angle(u: &Vector3<f64>, v: &Vector3<f64>, up: &Vector3<f64>) -> f64 {
    // Returns the angle between u and v, measured as a positive angle around 'up'.
    let theta = u.angle(v);
    if u.cross(v).dot(up) >= 0.0 {
        theta
    } else {
        2.0 * PI - theta
    }
}

/// Builds the rotation that carries the orbital plane into its orientation
/// relative to the reference (sky) plane.
///
/// The orbit starts in the xy plane with periapsis along x. Rotating around z
/// by the argument of periapsis puts the ascending node on the x-axis, tilting
/// around x applies the inclination, and a final turn around z moves the node
/// to its longitude.
pub fn rotation_from_angles(incl: f64, lan: f64, argp: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), lan)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), incl)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), argp)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_directed_angle() {
        let quarter_turn = directed_angle(&Vector3::x(), &Vector3::y(), &Vector3::z());
        assert_relative_eq!(quarter_turn, PI / 2.0);

        // Same pair of vectors, other way around the axis
        let three_quarters = directed_angle(&Vector3::y(), &Vector3::x(), &Vector3::z());
        assert_relative_eq!(three_quarters, 3.0 * PI / 2.0);
    }

    #[test]
    fn test_rotation_identity_at_zero_angles() {
        let rotation = rotation_from_angles(0.0, 0.0, 0.0);
        assert_relative_eq!(rotation, Rotation3::identity());
    }

    #[test]
    fn test_rotation_sends_axes_where_expected() {
        // Edge-on orbit with the node on the x-axis: the orbit normal tips
        // over onto -y, periapsis stays on x.
        let rotation = rotation_from_angles(PI / 2.0, 0.0, 0.0);
        assert_relative_eq!(rotation * Vector3::x(), Vector3::x(), epsilon = 1e-15);
        assert_relative_eq!(rotation * Vector3::z(), -Vector3::y(), epsilon = 1e-15);

        // With no inclination, node longitude and periapsis argument just add
        let rotation = rotation_from_angles(0.0, 0.3, 0.5);
        let expected = rotation_from_angles(0.0, 0.8, 0.0);
        assert_relative_eq!(rotation, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_angles_recoverable() {
        let (incl, lan, argp) = (0.4, 2.1, 5.5);
        let rotation = rotation_from_angles(incl, lan, argp);

        let normal = rotation * Vector3::z();
        let periapse = rotation * Vector3::x();
        let asc_node = Vector3::z().cross(&normal);

        assert_relative_eq!(normal.angle(&Vector3::z()), incl, epsilon = 1e-12);
        assert_relative_eq!(
            directed_angle(&Vector3::x(), &asc_node, &Vector3::z()),
            lan,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            directed_angle(&asc_node, &periapse, &normal),
            argp,
            epsilon = 1e-12
        );
    }
}

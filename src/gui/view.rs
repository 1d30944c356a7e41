use std::f64::consts::PI;
use std::time::Instant;

use kiss3d::camera::{ArcBall, Camera};
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Rotation3, Vector3};

use super::controller::Controller;
use crate::astro::{OrbitPoint, OrbitalElements, ThieleInnes};
use crate::consts::ANIMATION_PERIOD_SECONDS;

const ELLIPSE_SEGMENTS: usize = 180;
const GRID_LINES_PER_SIDE: i32 = 8;

// Colors roughly following the matplotlib tab10 palette
const COLOR_TRIAD: [f32; 3] = [0.0, 0.0, 0.0];
const COLOR_ORBIT: [f32; 3] = [0.12, 0.47, 0.71];
const COLOR_APSES: [f32; 3] = [1.0, 0.5, 0.05];
const COLOR_NODES: [f32; 3] = [0.84, 0.15, 0.16];
const COLOR_PROJECTION: [f32; 3] = [0.3, 0.3, 0.3];
const COLOR_GRID: [f32; 3] = [0.6, 0.6, 0.6];
const COLOR_TEXT: [f32; 3] = [0.0, 0.0, 0.0];

pub struct View {
    camera: ArcBall,
    epoch: Instant,
}

impl View {
    pub fn new() -> Self {
        View {
            camera: ArcBall::new(Point3::new(-9.0, -6.0, 5.0), Point3::origin()),
            epoch: Instant::now(),
        }
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, None, None)
    }

    pub fn draw_scene(&mut self, window: &mut Window, controller: &Controller) {
        let elements = controller.elements();
        let thiele_innes = ThieleInnes::from_elements(&elements);

        self.draw_sky_plane(window, &elements);
        self.draw_triad(window, &elements);
        self.draw_orbit(window, &elements);
        self.draw_line_of_nodes(window, &elements);

        if controller.show_projection() && !elements.is_face_on() {
            self.draw_projected_orbit(window, &elements, &thiele_innes);
        }

        if controller.animate() {
            self.draw_orbiting_body(window, &elements, &thiele_innes);
        }

        self.draw_overlay(window, &elements, &thiele_innes);
    }

    /// A square grid in the reference plane, sized to contain the orbit.
    fn draw_sky_plane(&self, window: &mut Window, elements: &OrbitalElements) {
        let extent = elements.apoapsis() as f32;
        let spacing = extent / GRID_LINES_PER_SIDE as f32;
        let color = Point3::from(COLOR_GRID);
        for i in -GRID_LINES_PER_SIDE..=GRID_LINES_PER_SIDE {
            let coord = i as f32 * spacing;
            window.draw_line(
                &Point3::new(-extent, coord, 0.0),
                &Point3::new(extent, coord, 0.0),
                &color,
            );
            window.draw_line(
                &Point3::new(coord, -extent, 0.0),
                &Point3::new(coord, extent, 0.0),
                &color,
            );
        }
    }

    /// The sky-frame axes: x north, y east, z towards the observer.
    fn draw_triad(&self, window: &mut Window, elements: &OrbitalElements) {
        let reach = 0.8 * elements.apoapsis() as f32;
        let color = Point3::from(COLOR_TRIAD);
        for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
            let tip = Point3::from(axis * reach);
            window.draw_line(&Point3::origin(), &tip, &color);
        }
    }

    fn draw_orbit(&self, window: &mut Window, elements: &OrbitalElements) {
        let rotation = elements.rotation();

        // The ellipse, traced over eccentric anomaly and carried into its
        // 3-D orientation
        let points = path_iter_parametric(
            |ecc_anomaly: f64| in_plane_point(elements, rotation, ecc_anomaly),
            0.0,
            2.0 * PI,
            ELLIPSE_SEGMENTS,
        );
        draw_path(window, points, &Point3::from(COLOR_ORBIT));

        // Major axis through the focus, periapsis to apoapsis
        let periapsis = in_plane_point(elements, rotation, 0.0);
        let apoapsis = in_plane_point(elements, rotation, PI);
        window.draw_line(&periapsis, &apoapsis, &Point3::from(COLOR_APSES));

        // Orbit normal, along the angular momentum vector
        let normal_tip: Vector3<f32> =
            nalgebra::convert(elements.normal_vector().into_inner() * elements.semimajor_axis());
        window.draw_line(
            &Point3::origin(),
            &Point3::from(normal_tip),
            &Point3::from(COLOR_APSES),
        );
    }

    fn draw_line_of_nodes(&self, window: &mut Window, elements: &OrbitalElements) {
        // None for face-on orbits, which never cross the reference plane
        let (ascending, descending) = match elements.line_of_nodes() {
            Some(endpoints) => endpoints,
            None => return,
        };

        let rotation = elements.rotation();
        let to_scene = |point: OrbitPoint| -> Point3<f32> {
            let v: Vector3<f32> = nalgebra::convert(rotation * Vector3::new(point.x, point.y, 0.0));
            Point3::from(v)
        };
        window.draw_line(
            &to_scene(ascending),
            &to_scene(descending),
            &Point3::from(COLOR_NODES),
        );
    }

    /// The orbit as seen by the observer: the Thiele-Innes image of the
    /// ellipse, drawn flat in the sky plane.
    fn draw_projected_orbit(
        &self,
        window: &mut Window,
        elements: &OrbitalElements,
        thiele_innes: &ThieleInnes,
    ) {
        let points = path_iter_parametric(
            |ecc_anomaly: f64| sky_point(elements, thiele_innes, ecc_anomaly),
            0.0,
            2.0 * PI,
            ELLIPSE_SEGMENTS,
        );
        draw_path(window, points, &Point3::from(COLOR_PROJECTION));
    }

    fn draw_orbiting_body(
        &self,
        window: &mut Window,
        elements: &OrbitalElements,
        thiele_innes: &ThieleInnes,
    ) {
        // Time maps linearly to mean anomaly; the solver does the rest
        let elapsed = self.epoch.elapsed().as_secs_f64();
        let mean_anomaly = (elapsed / ANIMATION_PERIOD_SECONDS * 2.0 * PI) % (2.0 * PI);
        let (point, _) = elements.position_at_mean(mean_anomaly);

        let rotation = elements.rotation();
        let in_orbit: Vector3<f32> =
            nalgebra::convert(rotation * Vector3::new(point.x, point.y, 0.0));
        draw_body_marker(window, Point3::from(in_orbit), &Point3::from(COLOR_ORBIT));

        let projected = thiele_innes.project(point);
        draw_body_marker(
            window,
            Point3::new(projected.xi as f32, projected.eta as f32, 0.0),
            &Point3::from(COLOR_TRIAD),
        );
    }

    fn draw_overlay(
        &self,
        window: &mut Window,
        elements: &OrbitalElements,
        thiele_innes: &ThieleInnes,
    ) {
        let default_font = kiss3d::text::Font::default();
        let text = format!(
            "Inclination: {:.0} deg [I/K]
Ascending node: {:.0} deg [O/L]
Arg periapsis: {:.0} deg [U/J]
Thiele-Innes: A = {:+.3}  B = {:+.3}  F = {:+.3}  G = {:+.3}
Space: animate   P: toggle projection   R: reset",
            elements.inclination().to_degrees(),
            elements.long_asc_node().to_degrees(),
            elements.arg_periapse().to_degrees(),
            thiele_innes.a,
            thiele_innes.b,
            thiele_innes.f,
            thiele_innes.g,
        );
        window.draw_text(
            &text,
            &Point2::origin(),
            50.0,
            &default_font,
            &Point3::from(COLOR_TEXT),
        );
    }
}

fn in_plane_point(
    elements: &OrbitalElements,
    rotation: Rotation3<f64>,
    ecc_anomaly: f64,
) -> Point3<f32> {
    let point = elements.position_at_eccentric(ecc_anomaly);
    let v: Vector3<f32> = nalgebra::convert(rotation * Vector3::new(point.x, point.y, 0.0));
    Point3::from(v)
}

fn sky_point(
    elements: &OrbitalElements,
    thiele_innes: &ThieleInnes,
    ecc_anomaly: f64,
) -> Point3<f32> {
    let projected = thiele_innes.project(elements.position_at_eccentric(ecc_anomaly));
    Point3::new(projected.xi as f32, projected.eta as f32, 0.0)
}

/// Samples a parametric path at evenly spaced parameter values.
pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(num_segments >= 1, "num_segments was {}", num_segments);
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        // u sweeps 0 to 1 inclusive, so closed curves actually close
        .map(move |i| convert(i) / convert(num_segments))
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

fn draw_path<I: Iterator<Item = Point3<f32>>>(
    window: &mut Window,
    points: I,
    color: &Point3<f32>,
) {
    let mut prev_pt = None;
    for pt in points {
        if let Some(prev_pt) = prev_pt {
            window.draw_line(&prev_pt, &pt, color);
        }
        prev_pt = Some(pt);
    }
}

/// A point with a small cross through it, so the body reads at any zoom.
fn draw_body_marker(window: &mut Window, center: Point3<f32>, color: &Point3<f32>) {
    const HALF_SIZE: f32 = 0.06;
    window.draw_point(&center, color);
    for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
        let offset = axis * HALF_SIZE;
        window.draw_line(&(center - offset), &(center + offset), color);
    }
}

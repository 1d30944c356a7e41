use kiss3d::event::{Action, Event, Key, WindowEvent};

use crate::astro::OrbitalElements;
use crate::consts::{DEMO_ECCENTRICITY, DEMO_SEMIMAJOR_AXIS};

// Key config, all in one place
const KEY_INCL_UP: Key = Key::I;
const KEY_INCL_DOWN: Key = Key::K;
const KEY_NODE_UP: Key = Key::O;
const KEY_NODE_DOWN: Key = Key::L;
const KEY_ARGP_UP: Key = Key::U;
const KEY_ARGP_DOWN: Key = Key::J;
const KEY_TOGGLE_ANIMATION: Key = Key::Space;
const KEY_TOGGLE_PROJECTION: Key = Key::P;
const KEY_RESET: Key = Key::R;

// One keypress moves an angle by this much. Coarser than a slider, but
// 1-degree steps make for a lot of key mashing.
const ANGLE_STEP_DEGREES: f64 = 5.0;

/// Keyboard-adjustable parameters: the three orientation angles plus a
/// couple of toggles. Angles are kept in whole-ish degrees, slider style,
/// and converted to radians when building elements.
pub struct Controller {
    inclination_deg: f64,
    ascending_node_deg: f64,
    arg_periapse_deg: f64,
    animate: bool,
    show_projection: bool,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            inclination_deg: 0.0,
            ascending_node_deg: 0.0,
            arg_periapse_deg: 0.0,
            animate: false,
            show_projection: true,
        }
    }

    pub fn process_event(&mut self, event: Event) {
        match event.value {
            WindowEvent::Key(KEY_INCL_UP, Action::Press, _) => {
                self.inclination_deg = (self.inclination_deg + ANGLE_STEP_DEGREES).min(180.0);
                println!("Inclination = {} deg", self.inclination_deg);
            }
            WindowEvent::Key(KEY_INCL_DOWN, Action::Press, _) => {
                self.inclination_deg = (self.inclination_deg - ANGLE_STEP_DEGREES).max(0.0);
                println!("Inclination = {} deg", self.inclination_deg);
            }
            WindowEvent::Key(KEY_NODE_UP, Action::Press, _) => {
                self.ascending_node_deg =
                    (self.ascending_node_deg + ANGLE_STEP_DEGREES).rem_euclid(360.0);
                println!("Longitude ascending node = {} deg", self.ascending_node_deg);
            }
            WindowEvent::Key(KEY_NODE_DOWN, Action::Press, _) => {
                self.ascending_node_deg =
                    (self.ascending_node_deg - ANGLE_STEP_DEGREES).rem_euclid(360.0);
                println!("Longitude ascending node = {} deg", self.ascending_node_deg);
            }
            WindowEvent::Key(KEY_ARGP_UP, Action::Press, _) => {
                self.arg_periapse_deg =
                    (self.arg_periapse_deg + ANGLE_STEP_DEGREES).rem_euclid(360.0);
                println!("Argument periapsis = {} deg", self.arg_periapse_deg);
            }
            WindowEvent::Key(KEY_ARGP_DOWN, Action::Press, _) => {
                self.arg_periapse_deg =
                    (self.arg_periapse_deg - ANGLE_STEP_DEGREES).rem_euclid(360.0);
                println!("Argument periapsis = {} deg", self.arg_periapse_deg);
            }
            WindowEvent::Key(KEY_TOGGLE_ANIMATION, Action::Press, _) => {
                self.animate = !self.animate;
            }
            WindowEvent::Key(KEY_TOGGLE_PROJECTION, Action::Press, _) => {
                self.show_projection = !self.show_projection;
            }
            WindowEvent::Key(KEY_RESET, Action::Press, _) => {
                self.inclination_deg = 0.0;
                self.ascending_node_deg = 0.0;
                self.arg_periapse_deg = 0.0;
                println!("Orientation angles reset");
            }
            _ => {}
        }
    }

    /// The demo orbit in its current orientation.
    pub fn elements(&self) -> OrbitalElements {
        OrbitalElements::new(
            DEMO_SEMIMAJOR_AXIS,
            DEMO_ECCENTRICITY,
            self.inclination_deg.to_radians(),
            self.ascending_node_deg.to_radians(),
            self.arg_periapse_deg.to_radians(),
        )
        .expect("demo shape constants are a valid ellipse")
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn show_projection(&self) -> bool {
        self.show_projection
    }
}

use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use self::controller::Controller;
use self::view::View;

mod controller;
mod view;

/// The interactive sketch: a 3-D scene showing an orbit, the sky plane, and
/// the orbit's Thiele-Innes projection onto it, with keyboard-adjustable
/// orientation angles.
pub struct OrbitDemo {
    view: View,
    controller: Controller,
}

impl OrbitDemo {
    pub fn new() -> Self {
        Self {
            view: View::new(),
            controller: Controller::new(),
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        for event in events.iter() {
            self.controller.process_event(event);
        }
    }
}

impl Default for OrbitDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl State for OrbitDemo {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        self.view.draw_scene(window, &self.controller);
    }
}

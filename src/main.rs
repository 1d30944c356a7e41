use kiss3d::light::Light;
use kiss3d::window::Window;

use sky_orbit::consts::BACKGROUND_COLOR;
use sky_orbit::gui::OrbitDemo;

fn main() {
    let mut window = Window::new("Binary orbit on the sky");
    window.set_light(Light::StickToCamera);
    window.set_framerate_limit(Some(60));
    window.set_background_color(
        BACKGROUND_COLOR[0],
        BACKGROUND_COLOR[1],
        BACKGROUND_COLOR[2],
    );

    window.render_loop(OrbitDemo::new());
}

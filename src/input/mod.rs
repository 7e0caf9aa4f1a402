pub mod prompt;

use macroquad::prelude::*;
use crate::application::{Camera, Simulation};

pub use prompt::{prompt_generations, prompt_rule, prompt_seed, prompt_until};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag.
/// `last_pos` carries the previous drag position between frames.
pub fn handle_pan(camera: &mut Camera, last_pos: &mut Option<(f32, f32)>, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = *last_pos {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        *last_pos = Some(mouse_pos);
    } else {
        *last_pos = None;
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(simulation: Simulation, camera: &mut Camera) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::Right, Simulation::single_step),
        (KeyCode::R, Simulation::restart),
        (KeyCode::N, Simulation::randomize_rule),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let simulation = actions.iter().fold(simulation, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    simulation
}

use macroquad::prelude::*;
use crate::application::{Camera, Simulation};
use crate::domain::{State, WORLD_SIZE};
use super::text::rule_digits;

pub const PANEL_WIDTH: f32 = 200.0;
pub const CELL_SIZE: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the diagram area
pub fn diagram_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

fn state_color(state: State) -> Color {
    match state {
        State::Empty => Color::from_rgba(15, 15, 15, 255),
        State::Low => Color::from_rgba(0, 160, 255, 255),
        State::High => Color::from_rgba(0, 255, 150, 255),
    }
}

/// Draw the space-time diagram: one row per generation, one square per cell
pub fn draw_diagram(simulation: &Simulation, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = diagram_area_width();
    let area_height = screen_height();
    let draw_grid_lines = cell_size >= 6.0;
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    for generation in &simulation.history {
        for (column, state) in generation.states.iter().enumerate() {
            let (x, y) = camera.cell_to_screen(column, generation.index, CELL_SIZE);

            // Skip if outside viewport
            if x + cell_size < 0.0 || x > area_width || y + cell_size < 0.0 || y > area_height {
                continue;
            }

            if state.is_active() || draw_grid_lines {
                draw_rectangle(x, y, cell_size, cell_size, state_color(*state));
            }
            if draw_grid_lines {
                draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, grid_line_color);
            }
        }
    }

    // Outline the ring so the wrap edges are visible
    let (x, y) = camera.cell_to_screen(0, 0, CELL_SIZE);
    draw_rectangle_lines(
        x,
        y,
        WORLD_SIZE as f32 * cell_size,
        simulation.generations as f32 * cell_size,
        2.0,
        Color::from_rgba(255, 255, 0, 120),
    );
}

/// Draw the side panel with run info and key help
pub fn draw_panel(simulation: &Simulation) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let latest = simulation.history.last().map_or(0, |g| g.active_sum);
    let info = [
        (format!("Rule #{}", simulation.table.code()), 20.0, 18.0, WHITE),
        (format!("Digits {}", rule_digits(&simulation.table)), 40.0, 14.0, GRAY),
        (
            format!("Seed {}", simulation.seed.state().value()),
            58.0,
            14.0,
            GRAY,
        ),
        (
            format!("Gen {}/{}", simulation.generation() + 1, simulation.generations),
            76.0,
            14.0,
            GRAY,
        ),
        (format!("Active sum {latest}"), 94.0, 14.0, GRAY),
        (
            format!("{} | {:.2}ms", simulation.algorithm.name(), simulation.last_step_time_ms),
            112.0,
            12.0,
            Color::from_rgba(100, 200, 255, 255),
        ),
        (
            format!("{:.0} gen/s | FPS {:.0}", simulation.updates_per_second, get_fps()),
            128.0,
            12.0,
            GRAY,
        ),
    ];
    for (text, y, size, color) in &info {
        draw_text(text, px + 8.0, *y, *size, *color);
    }

    let controls = [
        "Controls:",
        "Space: Play/Pause",
        "Right: Step",
        "R: Restart",
        "N: Random rule",
        "Up/Down: Speed",
        "Wheel: Zoom",
        "Mid-drag: Pan",
        "H: Reset view",
    ];
    for (i, line) in controls.iter().enumerate() {
        let (size, color) = if i == 0 { (14.0, WHITE) } else { (12.0, GRAY) };
        draw_text(line, px + 8.0, 160.0 + i as f32 * 14.0, size, color);
    }

    if simulation.is_finished() {
        draw_text("Finished", px + 8.0, 300.0, 16.0, Color::from_rgba(255, 165, 0, 255));
    }
}

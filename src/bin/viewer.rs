//! Space-time diagram viewer

use clap::Parser;
use macroquad::prelude::*;
use totalistic_ca::{
    Camera, Simulation,
    cli::{RunArgs, init_logging},
    input, rendering,
};

/// Draw the automaton's generations as a growing space-time diagram.
#[derive(Parser)]
#[command(name = "viewer", about)]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Totalistic Cellular Automaton".to_owned(),
        window_width: 900,
        window_height: 700,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.run.verbose) {
        eprintln!("logging disabled: {err}");
    }
    let config = match cli.run.to_config_or_default() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    let mut simulation = Simulation::new(&config).toggle_running();
    let mut camera = Camera::new();
    let mut last_pan = None;

    loop {
        let mouse_pos = mouse_position();

        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, &mut last_pan, mouse_pos);
        simulation = input::process_keyboard_input(simulation, &mut camera);
        simulation = simulation.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_diagram(&simulation, &camera);
        rendering::draw_panel(&simulation);

        next_frame().await;
    }
}

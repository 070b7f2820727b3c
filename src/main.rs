use macroquad::prelude::*;
use terrarium::simulation::params::Params;
use terrarium::simulation::world::World;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod graphics;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Terrarium".to_owned(),
        window_width: 1200,
        window_height: 700,
        high_dpi: true,
        ..Default::default()
    }
}

/// Parameters come from the JSON file named by the first argument, if any.
fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };
    match Params::load_from_file(&path) {
        Ok(params) => {
            info!(%path, "loaded parameters");
            params
        }
        Err(e) => {
            error!(%path, "failed to load parameters, using defaults: {e}");
            Params::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut world = World::new(load_params());
    let mut ui_state = ui::UIState::new();
    ui_state.controls = world.controls();

    info!("Starting terrarium");

    loop {
        // Panel commands never interleave with a tick
        let requests = ui_state.take_requests();
        if requests.toggle_running {
            world.toggle_running();
        }
        if requests.add_food {
            world.spawn_food(world.params().food_batch_size);
        }
        if requests.add_predator {
            world.spawn_predator();
        }
        if requests.reset {
            world.reset();
            ui_state.clear_history();
        }

        // Sliders apply even while paused
        world.set_controls(ui_state.controls);

        if world.tick_if_running(ui_state.controls) {
            ui_state.update_history(&world);
        }

        clear_background(Color::from_rgba(30, 30, 36, 255));
        let viewport = graphics::Viewport::fit(world.params(), ui_state.stats_panel_width);
        graphics::draw_world(&world, &viewport);

        if is_mouse_button_pressed(MouseButton::Left) && !ui_state.pointer_over_ui {
            let (mx, my) = mouse_position();
            if viewport.contains(mx, my) {
                let (x, y) = viewport.to_world(mx, my);
                world.select_at(x, y);
            }
        }

        ui::draw_ui(&mut ui_state, &world);
        ui::process_egui();

        next_frame().await;
    }
}

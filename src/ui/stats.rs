use egui_macroquad::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use std::collections::VecDeque;
use terrarium::simulation::world::World;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, world: &World) {
    let stats = world.stats();

    egui::SidePanel::right("stats_panel")
        .exact_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Ecosystem");
            ui.separator();

            ui.horizontal(|ui| {
                let run_label = if world.is_running() { "⏸ Stop" } else { "▶ Start" };
                if ui.button(run_label).clicked() {
                    state.requests.toggle_running = true;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.requests.reset = true;
                }
            });
            ui.horizontal(|ui| {
                let batch = world.params().food_batch_size;
                if ui.button(format!("🌱 Add Food ({batch})")).clicked() {
                    state.requests.add_food = true;
                }
                if ui.button("🦈 Add Predator").clicked() {
                    state.requests.add_predator = true;
                }
            });

            ui.separator();

            ui.label("Environment");
            ui.add(egui::Slider::new(&mut state.controls.temperature, 0..=100).text("Temperature"));
            ui.add(egui::Slider::new(&mut state.controls.humidity, 0..=100).text("Humidity"));
            ui.add(
                egui::Slider::new(&mut state.controls.mutation_rate, 0.0..=1.0)
                    .text("Mutation Rate"),
            );

            ui.separator();

            ui.label(format!("Generation: {}", stats.generation));
            ui.label(format!("Population: {}", stats.population));
            ui.label(format!("Avg Speed: {}", stats.avg_speed_label()));
            ui.label(format!("Avg Size: {}", stats.avg_size_label()));
            ui.label(format!("Food: {}", stats.food));
            ui.label(format!("Predators: {}", stats.predators));
            ui.label(format!("Tick: {}", stats.tick));

            ui.collapsing("Lifetime Counts", |ui| {
                let census = &stats.census;
                ui.label(format!("Births: {}", census.births));
                ui.label(format!("Starved: {}", census.starvations));
                ui.label(format!("Old age: {}", census.old_age_deaths));
                ui.label(format!("Caught: {}", census.predations));
                ui.label(format!("Food eaten: {}", census.food_eaten));
                ui.label(format!("Reseeds: {}", census.reseeds));
            });

            ui.separator();

            ui.heading("Population Over Time");
            draw_series_plot(
                ui,
                "population_plot",
                &[
                    ("Creatures", Color32::from_rgb(100, 150, 255), &state.population_history),
                    ("Food", Color32::from_rgb(100, 200, 100), &state.food_history),
                ],
            );

            ui.heading("Average Speed");
            draw_series_plot(
                ui,
                "avg_speed_plot",
                &[("Speed", Color32::from_rgb(240, 170, 80), &state.avg_speed_history)],
            );
        });
}

type Series<'a> = (&'a str, Color32, &'a VecDeque<(f64, f64)>);

fn draw_series_plot(ui: &mut egui::Ui, id: &str, series: &[Series<'_>]) {
    if series.iter().all(|(_, _, data)| data.is_empty()) {
        ui.label("Collecting data...");
        return;
    }

    Plot::new(id)
        .height(130.0)
        .allow_drag(false)
        .allow_scroll(false)
        .legend(Legend::default())
        .label_formatter(|name, value| format!("{name}\ntick {:.0}: {:.2}", value.x, value.y))
        .show(ui, |plot_ui| {
            for &(name, color, data) in series {
                let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(Line::new(points).color(color).name(name));
            }
        });
}

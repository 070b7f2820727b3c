use egui_macroquad::egui;
use terrarium::simulation::world::World;

pub(super) fn draw_selected_panel(egui_ctx: &egui::Context, world: &World) {
    egui::Window::new("Selected Creature")
        .default_pos([20.0, 20.0])
        .resizable(false)
        .show(egui_ctx, |ui| match world.selected_detail() {
            Some(detail) => {
                ui.label(format!("Creature {}", detail.id));
                ui.label("Click elsewhere to deselect");
                ui.separator();
                ui.label(format!("Energy: {:.1}", detail.energy));
                ui.label(format!("Speed: {:.2}", detail.speed));
                ui.label(format!("Size: {:.2}", detail.size));
                ui.label(format!("Age: {:.1}", detail.age));
                ui.label(format!("Generation: {}", detail.generation));
            }
            None => {
                ui.label("Not selected");
            }
        });
}

use egui_macroquad::egui::{self, Color32, RichText};
use terrarium::simulation::event_log::EventColor;
use terrarium::simulation::world::World;

const PANEL_SIZE: egui::Vec2 = egui::vec2(320.0, 240.0);

fn event_color(color: EventColor) -> Color32 {
    match color {
        EventColor::Birth => Color32::from_rgb(110, 230, 110),
        EventColor::Death => Color32::from_rgb(160, 160, 160),
        EventColor::Food => Color32::from_rgb(240, 200, 90),
        EventColor::Predator => Color32::from_rgb(240, 90, 90),
        EventColor::Generation => Color32::from_rgb(110, 190, 250),
    }
}

/// Semi-transparent window in the bottom left corner listing recent events.
pub(super) fn draw_events_panel(egui_ctx: &egui::Context, world: &World) {
    let bottom = egui_ctx.screen_rect().height();

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, bottom - PANEL_SIZE.y - 10.0))
        .fixed_size(PANEL_SIZE)
        .collapsible(true)
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(Color32::from_rgba_premultiplied(18, 20, 28, 210))
                .stroke(egui::Stroke::new(1.0, Color32::from_gray(90))),
        )
        .show(egui_ctx, |ui| {
            let events = world.event_log().events();
            if events.is_empty() {
                ui.label(RichText::new("Nothing happened yet").weak());
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("recent_events")
                    .num_columns(2)
                    .spacing([8.0, 3.0])
                    .show(ui, |ui| {
                        for event in events {
                            ui.label(
                                RichText::new(format!("{:>6}", event.tick))
                                    .monospace()
                                    .size(11.0)
                                    .color(Color32::from_gray(170)),
                            );
                            ui.label(
                                RichText::new(&event.description)
                                    .size(11.0)
                                    .color(event_color(event.color)),
                            );
                            ui.end_row();
                        }
                    });
            });
        });
}

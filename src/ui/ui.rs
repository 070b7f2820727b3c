use egui_macroquad::egui;
use std::collections::VecDeque;
use terrarium::simulation::controls::Controls;
use terrarium::simulation::world::World;

const MAX_HISTORY_POINTS: usize = 500;

/// Commands raised by the panel, applied by the main loop between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Requests {
    pub toggle_running: bool,
    pub add_food: bool,
    pub add_predator: bool,
    pub reset: bool,
}

pub struct UIState {
    /// Slider values, handed to the world as one snapshot per tick.
    pub controls: Controls,
    pub requests: Requests,
    pub stats_panel_width: f32,
    pub pointer_over_ui: bool,
    pub population_history: VecDeque<(f64, f64)>,
    pub food_history: VecDeque<(f64, f64)>,
    pub avg_speed_history: VecDeque<(f64, f64)>,
    last_update_tick: u64,
    update_interval: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            controls: Controls::default(),
            requests: Requests::default(),
            stats_panel_width: 300.0,
            pointer_over_ui: false,
            population_history: VecDeque::new(),
            food_history: VecDeque::new(),
            avg_speed_history: VecDeque::new(),
            last_update_tick: 0,
            update_interval: 30, // Sample every 30 ticks
        }
    }

    /// Returns the pending requests and clears them.
    pub fn take_requests(&mut self) -> Requests {
        std::mem::take(&mut self.requests)
    }

    pub fn clear_history(&mut self) {
        self.population_history.clear();
        self.food_history.clear();
        self.avg_speed_history.clear();
        self.last_update_tick = 0;
    }

    pub fn update_history(&mut self, world: &World) {
        let tick = world.tick();
        if tick < self.last_update_tick + self.update_interval {
            return;
        }
        self.last_update_tick = tick;

        let stats = world.stats();
        let t = tick as f64;
        push_bounded(&mut self.population_history, (t, stats.population as f64));
        push_bounded(&mut self.food_history, (t, stats.food as f64));
        if let Some(avg_speed) = stats.avg_speed {
            push_bounded(&mut self.avg_speed_history, (t, avg_speed as f64));
        }
    }
}

fn push_bounded(history: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    history.push_back(point);
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &mut UIState, world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        visuals.widgets.inactive.fg_stroke.color = egui::Color32::from_rgb(200, 200, 200);
        visuals.widgets.hovered.fg_stroke.color = egui::Color32::WHITE;
        visuals.widgets.active.fg_stroke.color = egui::Color32::WHITE;
        egui_ctx.set_visuals(visuals);

        // Right-side stats panel
        super::stats::draw_stats_panel(egui_ctx, state, world);

        super::creatures::draw_selected_panel(egui_ctx, world);
        super::events::draw_events_panel(egui_ctx, world);

        state.pointer_over_ui = egui_ctx.is_pointer_over_area() || egui_ctx.wants_pointer_input();
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}

use macroquad::prelude::*;
use ndarray::Array1;
use terrarium::simulation::color::Hsl;
use terrarium::simulation::params::Params;
use terrarium::simulation::world::World;

/// Maps world coordinates onto the part of the window left of the side panel.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    scale: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    /// Largest uniform scale that fits the world beside a panel of `panel_width`.
    pub fn fit(params: &Params, panel_width: f32) -> Self {
        let available_w = (screen_width() - panel_width).max(1.0);
        let scale = (available_w / params.world_width).min(screen_height() / params.world_height);
        Self {
            scale,
            width: params.world_width * scale,
            height: params.world_height * scale,
        }
    }

    /// Whether a window point lies on the drawn world.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    /// Converts a window point back into world coordinates.
    pub fn to_world(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.scale, y / self.scale)
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for Array1<f32> {
    type Output = (f32, f32);
    fn to_screen(&self, viewport: &Viewport) -> (f32, f32) {
        (self[0] * viewport.scale, self[1] * viewport.scale)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, viewport: &Viewport) -> f32 {
        self * viewport.scale
    }
}

fn creature_color(color: &Hsl) -> Color {
    let (h, s, l) = color.normalized();
    macroquad::color::hsl_to_rgb(h, s, l)
}

pub fn draw_world(world: &World, viewport: &Viewport) {
    draw_rectangle(
        0.0,
        0.0,
        viewport.width,
        viewport.height,
        Color::from_rgba(12, 14, 20, 255),
    );

    for food in world.food() {
        let (x, y) = food.pos.to_screen(viewport);
        draw_circle(x, y, food.radius.to_screen(viewport), Color::from_rgba(0, 255, 0, 255));
    }

    for predator in world.predators() {
        let (x, y) = predator.pos.to_screen(viewport);
        draw_circle(
            x,
            y,
            predator.radius.to_screen(viewport),
            Color::from_rgba(255, 0, 0, 255),
        );
    }

    for creature in world.creatures() {
        let (x, y) = creature.pos.to_screen(viewport);
        draw_circle(
            x,
            y,
            creature.size.to_screen(viewport),
            creature_color(&creature.color),
        );
    }

    // selection ring on top of everything else
    if let Some(creature) = world.selected() {
        let (x, y) = creature.pos.to_screen(viewport);
        let radius = creature.size.to_screen(viewport) + 3.0;
        draw_circle_lines(x, y, radius, 1.5, WHITE);
    }
}

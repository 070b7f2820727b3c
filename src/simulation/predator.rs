//! Predators roaming the world.
//!
//! Predators never die and never eat; their only effect is on the creatures that
//! come near them, which is resolved from the creature's side.

use ndarray::Array1;
use rand::Rng;
use std::f32::consts::TAU;

use super::geometric_utils::{advance_mut, point, reflect_off_walls_mut};
use super::locatable::Locatable;
use super::params::Params;

/// A predator wandering the world on a jittered random walk.
#[derive(Debug, Clone)]
pub struct Predator {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Heading in radians.
    pub heading: f32,
    /// Collision radius.
    pub radius: f32,
    /// Distance covered per tick.
    pub speed: f32,
}

impl Predator {
    /// Creates a predator at `pos` with the given heading.
    pub fn new(pos: Array1<f32>, heading: f32, params: &Params) -> Self {
        Self {
            pos,
            heading,
            radius: params.predator_radius,
            speed: params.predator_speed,
        }
    }

    /// Creates a predator at a random position with a random heading.
    pub fn new_random(rng: &mut impl Rng, params: &Params) -> Self {
        let pos = point(
            rng.random_range(0.0..=params.world_width),
            rng.random_range(0.0..=params.world_height),
        );
        Self::new(pos, rng.random_range(0.0..TAU), params)
    }

    /// Advances the predator by one tick: heading jitter, movement, wall reflection.
    pub fn update(&mut self, rng: &mut impl Rng, params: &Params) {
        let jitter = params.predator_heading_jitter;
        self.heading += rng.random_range(-jitter..=jitter);

        advance_mut(&mut self.pos, self.heading, self.speed);
        self.heading = reflect_off_walls_mut(
            &mut self.pos,
            self.heading,
            params.world_width,
            params.world_height,
        );
    }
}

impl Locatable for Predator {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

//! Creature behavior, state, and lifecycle management.
//!
//! Creatures wander on a jittered random walk, burn energy at a rate set by the
//! temperature, eat food they touch, flee predators they notice and die of
//! starvation, old age or predation.

use ndarray::Array1;
use rand::Rng;
use serde::Serialize;
use std::f32::consts::TAU;
use std::fmt;

use super::color::Hsl;
use super::controls::Controls;
use super::food::Food;
use super::geometric_utils::{advance_mut, heading_away, point, reflect_off_walls_mut};
use super::locatable::Locatable;
use super::params::{Params, clamp_size, clamp_speed};
use super::predator::Predator;

/// Stable identifier of a creature, unique for the lifetime of a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Why a creature left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeathCause {
    /// Energy ran out.
    Starvation,
    /// Age exceeded the lifespan.
    OldAge,
    /// Touched a predator.
    Predation,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Starvation => "starved",
            Self::OldAge => "died of old age",
            Self::Predation => "was caught by a predator",
        };
        f.write_str(label)
    }
}

/// A simulated creature.
///
/// Creatures can:
/// - Move along a jittered heading and bounce off the world walls
/// - Eat food within reach to gain energy
/// - Flee predators inside the awareness radius
/// - Reproduce once they have stored enough energy
/// - Die when energy is exhausted, when too old, or when caught
#[derive(Debug, Clone)]
pub struct Creature {
    /// Unique identifier for this creature.
    pub id: CreatureId,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Radius, always within [`super::params::SIZE_RANGE`].
    pub size: f32,
    /// Distance covered per tick, always within [`super::params::SPEED_RANGE`].
    pub speed: f32,
    /// Direction of travel in radians.
    pub heading: f32,
    /// Body color. Only the hue drifts between generations.
    pub color: Hsl,
    /// Current energy (dies when <= 0).
    pub energy: f32,
    /// Age in ticks scaled by `age_per_tick`.
    pub age: f32,
    /// Lineage depth since the last reseed, starting at 1.
    pub generation: u32,
}

impl Creature {
    /// Creates a new creature with random position, heading, speed and hue.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique identifier
    /// * `size` - Radius of the new creature, clamped into bounds
    /// * `rng` - Random source
    /// * `params` - Simulation parameters
    pub fn new_random(id: CreatureId, size: f32, rng: &mut impl Rng, params: &Params) -> Self {
        let (min_speed, max_speed) = params.initial_speed;

        Self {
            id,
            pos: point(
                rng.random_range(0.0..=params.world_width),
                rng.random_range(0.0..=params.world_height),
            ),
            size: clamp_size(size),
            speed: clamp_speed(rng.random_range(min_speed..=max_speed)),
            heading: rng.random_range(0.0..TAU),
            color: Hsl::random(rng, params.color_saturation, params.color_lightness),
            energy: params.initial_energy,
            age: 0.0,
            generation: 1,
        }
    }

    /// Checks if the creature is alive.
    ///
    /// # Returns
    ///
    /// `true` if energy > 0 and the age has not passed `max_age`.
    pub fn is_alive(&self, max_age: f32) -> bool {
        self.death_cause(max_age).is_none()
    }

    /// Cause of death if the creature can no longer live, checking energy first.
    pub fn death_cause(&self, max_age: f32) -> Option<DeathCause> {
        if self.energy <= 0.0 {
            Some(DeathCause::Starvation)
        } else if self.age > max_age {
            Some(DeathCause::OldAge)
        } else {
            None
        }
    }

    /// Reduces the creature's energy.
    pub fn consume_energy(&mut self, amount: f32) {
        self.energy -= amount;
    }

    /// Increases the creature's energy. There is no upper cap.
    pub fn gain_energy(&mut self, amount: f32) {
        self.energy += amount;
    }

    /// Increments the creature's age.
    pub fn age_by(&mut self, amount: f32) {
        self.age += amount;
    }

    /// Sets the size, clamped into bounds.
    pub fn set_size(&mut self, size: f32) {
        self.size = clamp_size(size);
    }

    /// Jitters the heading, moves by `speed` and bounces off the walls.
    pub fn wander(&mut self, rng: &mut impl Rng, params: &Params) {
        let jitter = params.creature_heading_jitter;
        self.heading += rng.random_range(-jitter..=jitter);

        advance_mut(&mut self.pos, self.heading, self.speed);
        self.heading = reflect_off_walls_mut(
            &mut self.pos,
            self.heading,
            params.world_width,
            params.world_height,
        );
    }

    /// Energy lost this tick: `base_decay * (1 + (T - 50) / 100)`.
    pub fn energy_decay(controls: &Controls, params: &Params) -> f32 {
        params.base_energy_decay * controls.decay_factor()
    }

    /// Burns this tick's energy and ages the creature.
    pub fn metabolize(&mut self, controls: &Controls, params: &Params) {
        self.consume_energy(Self::energy_decay(controls, params));
        self.age_by(params.age_per_tick);
    }

    /// Eats every unconsumed food item within reach.
    ///
    /// # Returns
    ///
    /// The number of items eaten.
    pub fn eat(&mut self, food: &mut [Food]) -> usize {
        let mut eaten = 0;
        for item in food.iter_mut() {
            if !item.is_consumed() && self.touches(&*item) {
                let energy = item.consume();
                self.gain_energy(energy);
                eaten += 1;
            }
        }
        eaten
    }

    /// Checks predators in order: contact is fatal, awareness turns the creature away.
    ///
    /// When several predators are within the awareness radius the last one checked
    /// sets the heading.
    ///
    /// # Returns
    ///
    /// `true` if a predator caught the creature.
    pub fn evade(&mut self, predators: &[Predator], awareness_radius: f32) -> bool {
        for predator in predators {
            let dist = self.distance_to(predator);
            if dist < self.radius() + predator.radius() {
                return true;
            }
            if dist < awareness_radius {
                self.heading = heading_away(&self.pos, &predator.pos);
            }
        }
        false
    }
}

impl Locatable for Creature {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }

    fn radius(&self) -> f32 {
        self.size
    }
}

//! Food items that creatures can consume for energy.

use ndarray::Array1;
use rand::Rng;

use super::geometric_utils::point;
use super::locatable::Locatable;
use super::params::Params;

/// A food item that creatures can consume for energy.
///
/// Food items have a position, a radius and an energy value. When a creature
/// touches a food item it gains the food's energy and the item is consumed.
#[derive(Debug, Clone)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Energy granted on consumption. Zero once consumed.
    pub energy: f32,
    /// Collision radius.
    pub radius: f32,
}

impl Food {
    /// Creates a food item at `pos` with the energy and radius from `params`.
    pub fn new(pos: Array1<f32>, params: &Params) -> Self {
        Self {
            pos,
            energy: params.food_energy,
            radius: params.food_radius,
        }
    }

    /// Creates a new food item at a uniformly random position in the world.
    pub fn new_random(rng: &mut impl Rng, params: &Params) -> Self {
        let pos = point(
            rng.random_range(0.0..=params.world_width),
            rng.random_range(0.0..=params.world_height),
        );
        Self::new(pos, params)
    }

    /// Checks if this food item has been consumed.
    ///
    /// # Returns
    ///
    /// `true` if energy is <= 0, `false` otherwise.
    pub fn is_consumed(&self) -> bool {
        self.energy <= 0.0
    }

    /// Consumes the food, returning the energy it held.
    ///
    /// A second call returns zero, which is what keeps one item from feeding two
    /// creatures in the same tick.
    pub fn consume(&mut self) -> f32 {
        std::mem::take(&mut self.energy)
    }
}

impl Locatable for Food {
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

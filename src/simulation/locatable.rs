//! Trait for entities that occupy a circle in the world.
//!
//! This trait provides a common interface for collision and hit tests between
//! creatures, food and predators.

use ndarray::Array1;

use super::geometric_utils::distance;

/// Trait for entities with a position and a collision radius.
///
/// Any type that implements this trait:
/// - Has a position in 2D space
/// - Occupies a circle of [`Locatable::radius`] around that position
pub trait Locatable {
    /// Returns a reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A reference to the 2D position vector.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A mutable reference to the 2D position vector.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Collision radius of the entity.
    fn radius(&self) -> f32;

    /// Euclidean distance between the centers of two entities.
    fn distance_to(&self, other: &dyn Locatable) -> f32 {
        distance(self.pos(), other.pos())
    }

    /// Whether the two circles overlap (`distance < r1 + r2`, strictly).
    fn touches(&self, other: &dyn Locatable) -> bool {
        self.distance_to(other) < self.radius() + other.radius()
    }

    /// Whether the point lies strictly inside the entity's circle.
    fn contains_point(&self, point: &Array1<f32>) -> bool {
        distance(self.pos(), point) < self.radius()
    }
}

//! Geometric utility functions for distances, movement and wall reflection.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;
use std::f32::consts::PI;

/// Calculates the Euclidean distance between two positions.
///
/// # Arguments
///
/// * `a` - First position
/// * `b` - Second position
///
/// # Returns
///
/// The straight-line distance between `a` and `b`.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Builds a 2D position vector.
pub fn point(x: f32, y: f32) -> Array1<f32> {
    Array1::from_vec(vec![x, y])
}

/// Moves a position by `speed` along `heading`.
///
/// # Arguments
///
/// * `pos` - Mutable position vector to advance
/// * `heading` - Direction of travel in radians
/// * `speed` - Distance covered this tick
pub fn advance_mut(pos: &mut Array1<f32>, heading: f32, speed: f32) {
    pos[0] += heading.cos() * speed;
    pos[1] += heading.sin() * speed;
}

/// Reflects a heading off the walls of the world rectangle.
///
/// Leaving through the left or right wall maps the heading to `π - h`, leaving
/// through the top or bottom wall maps it to `-h`. The position is clamped back
/// inside the rectangle so the entity does not keep reflecting outside it.
///
/// # Arguments
///
/// * `pos` - Mutable position vector, clamped into the rectangle
/// * `heading` - Current heading in radians
/// * `box_width` - Width of the world rectangle
/// * `box_height` - Height of the world rectangle
///
/// # Returns
///
/// The reflected heading (unchanged when no wall was crossed).
pub fn reflect_off_walls_mut(
    pos: &mut Array1<f32>,
    heading: f32,
    box_width: f32,
    box_height: f32,
) -> f32 {
    let mut heading = heading;

    if pos[0] < 0.0 || pos[0] > box_width {
        heading = PI - heading;
        pos[0] = pos[0].clamp(0.0, box_width);
    }
    if pos[1] < 0.0 || pos[1] > box_height {
        heading = -heading;
        pos[1] = pos[1].clamp(0.0, box_height);
    }

    heading
}

/// Heading pointing from `threat` towards `pos`, i.e. directly away from the threat.
pub fn heading_away(pos: &Array1<f32>, threat: &Array1<f32>) -> f32 {
    (pos[1] - threat[1]).atan2(pos[0] - threat[0])
}

//! Offspring creation with inheritance and mutation.
//!
//! A child copies its parent's traits with a little drift: a small speed wobble,
//! a hue shift and a jittered birth position inside the world. With probability equal to the
//! mutation rate, speed and size also receive a larger independent kick.

use rand::Rng;
use std::f32::consts::TAU;

use super::creature::{Creature, CreatureId};
use super::params::{Params, clamp_size, clamp_speed};

/// Whether `parent` has stored enough energy to reproduce.
pub fn is_eligible(parent: &Creature, params: &Params) -> bool {
    parent.energy > params.reproduction_threshold
}

/// Rolls the per-tick reproduction chance and, on success, creates a child.
///
/// The parent pays [`Params::reproduction_cost`] only when a child is produced.
///
/// # Arguments
///
/// * `parent` - The reproducing creature, charged the energy cost
/// * `child_id` - Identifier for the child
/// * `mutation_rate` - Probability in [0, 1] of a mutation on speed and size
/// * `rng` - Random source
/// * `params` - Simulation parameters
///
/// # Returns
///
/// The child, or `None` if the parent is not eligible or the roll failed.
pub fn try_reproduce(
    parent: &mut Creature,
    child_id: CreatureId,
    mutation_rate: f32,
    rng: &mut impl Rng,
    params: &Params,
) -> Option<Creature> {
    if !is_eligible(parent, params) || rng.random::<f32>() >= params.reproduction_chance {
        return None;
    }

    parent.consume_energy(params.reproduction_cost);
    Some(spawn_child(parent, child_id, mutation_rate, rng, params))
}

/// Builds a child from `parent` without any eligibility check or energy cost.
pub fn spawn_child(
    parent: &Creature,
    child_id: CreatureId,
    mutation_rate: f32,
    rng: &mut impl Rng,
    params: &Params,
) -> Creature {
    let offset = params.offspring_offset;
    let hue_jitter = params.hue_jitter;
    let speed_jitter = params.inherited_speed_jitter;

    let mut pos = parent.pos.clone();
    pos[0] = (pos[0] + rng.random_range(-offset..=offset)).clamp(0.0, params.world_width);
    pos[1] = (pos[1] + rng.random_range(-offset..=offset)).clamp(0.0, params.world_height);

    let mut speed = parent.speed + rng.random_range(-speed_jitter..=speed_jitter);
    let mut size = parent.size;

    if rng.random::<f32>() < mutation_rate {
        let speed_delta = params.mutation_speed_delta;
        let size_delta = params.mutation_size_delta;
        speed += rng.random_range(-speed_delta..=speed_delta);
        size += rng.random_range(-size_delta..=size_delta);
    }

    Creature {
        id: child_id,
        pos,
        size: clamp_size(size),
        speed: clamp_speed(speed),
        heading: rng.random_range(0.0..TAU),
        color: parent.color.shifted(rng.random_range(-hue_jitter..=hue_jitter)),
        energy: params.initial_energy,
        age: 0.0,
        generation: parent.generation + 1,
    }
}

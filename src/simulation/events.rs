//! Events collected during the update pass and applied once it completes.
//!
//! Removing creatures while the pass is still iterating over them would skip or
//! revisit entries. Instead the pass records deaths and births as events, and
//! [`apply_events`] applies them all at once, so every creature alive at the
//! start of a tick is evaluated exactly once.

use ndarray::Array1;
use std::collections::HashSet;
use tracing::debug;

use super::creature::{Creature, CreatureId, DeathCause};
use super::event_log::EventColor;
use super::world::World;

/// Events that modify simulation state.
///
/// Collected during the update pass and applied afterwards.
#[derive(Debug, Clone)]
pub enum SimulationEvent {
    /// A creature ate one or more food items.
    FoodEaten {
        /// ID of the creature that ate.
        creature_id: CreatureId,
        /// Number of items eaten this tick.
        count: usize,
    },
    /// A creature died and should be removed.
    CreatureDied {
        /// ID of the creature that died.
        creature_id: CreatureId,
        /// Why it died.
        cause: DeathCause,
        /// Position where the creature died.
        pos: Array1<f32>,
    },
    /// A creature produced a child.
    CreatureBorn {
        /// ID of the parent.
        parent_id: CreatureId,
        /// The newborn, inserted after the pass.
        child: Creature,
    },
}

/// Queue for collecting simulation events during a tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimulationEvent>,
}

impl EventQueue {
    /// Creates an empty event queue.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Adds an event to the queue.
    pub fn push(&mut self, event: SimulationEvent) {
        self.events.push(event);
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drains all events from the queue.
    pub fn drain(&mut self) -> std::vec::Drain<'_, SimulationEvent> {
        self.events.drain(..)
    }
}

/// Applies all queued events to the world.
///
/// Dead creatures are removed in one pass, consumed food is dropped, newborns are
/// appended and a selection pointing at a removed creature is cleared.
pub fn apply_events(world: &mut World, mut queue: EventQueue) {
    let tick = world.tick;
    let mut dead: HashSet<CreatureId> = HashSet::new();
    let mut newborns: Vec<Creature> = Vec::new();

    for event in queue.drain() {
        match event {
            SimulationEvent::FoodEaten { creature_id, count } => {
                world.census.food_eaten += count as u64;
                debug!(tick, creature = %creature_id, count, "food eaten");
            }
            SimulationEvent::CreatureDied {
                creature_id,
                cause,
                pos,
            } => {
                world.census.record_death(cause);
                debug!(
                    tick,
                    creature = %creature_id,
                    ?cause,
                    x = pos[0],
                    y = pos[1],
                    "creature died"
                );
                world.event_log.log(
                    tick,
                    format!("{} {}", creature_id, cause),
                    EventColor::Death,
                );
                dead.insert(creature_id);
            }
            SimulationEvent::CreatureBorn { parent_id, child } => {
                world.census.births += 1;
                debug!(
                    tick,
                    parent = %parent_id,
                    child = %child.id,
                    generation = child.generation,
                    "creature born"
                );
                world.event_log.log(
                    tick,
                    format!("{} was born to {} (gen {})", child.id, parent_id, child.generation),
                    EventColor::Birth,
                );
                newborns.push(child);
            }
        }
    }

    if !dead.is_empty() {
        world.creatures.retain(|c| !dead.contains(&c.id));
        if world.selected.is_some_and(|id| dead.contains(&id)) {
            world.selected = None;
        }
    }

    world.food.retain(|f| !f.is_consumed());
    world.creatures.extend(newborns);
}

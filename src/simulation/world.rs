//! World state and the per-tick update pass.
//!
//! The world owns every creature, food item and predator. One call to
//! [`World::advance_tick`] runs a full step:
//! - advance predators
//! - move, age and feed each creature, resolve predator contact, roll reproduction
//! - apply all deaths and births at once
//! - maybe spawn food
//! - reseed the population if it died out

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use super::controls::Controls;
use super::creature::{Creature, CreatureId, DeathCause};
use super::event_log::{EventColor, EventLog};
use super::events::{EventQueue, SimulationEvent, apply_events};
use super::food::Food;
use super::geometric_utils::point;
use super::locatable::Locatable;
use super::params::Params;
use super::predator::Predator;
use super::reproduction;
use super::stats::{Census, SelectedDetail, Stats, mean_of};

/// The complete simulation state.
///
/// Collections are only reachable read-only from outside; every change goes
/// through a method so the tick driver remains the single writer.
#[derive(Debug, Clone)]
pub struct World {
    pub(super) params: Params,
    pub(super) controls: Controls,
    pub(super) creatures: Vec<Creature>,
    pub(super) food: Vec<Food>,
    pub(super) predators: Vec<Predator>,
    pub(super) generation: u32,
    pub(super) tick: u64,
    pub(super) running: bool,
    pub(super) selected: Option<CreatureId>,
    pub(super) census: Census,
    pub(super) event_log: EventLog,
    next_id: u64,
    rng: StdRng,
}

impl World {
    /// Creates a world seeded from the operating system's entropy source.
    pub fn new(params: Params) -> Self {
        Self::from_rng(params, StdRng::from_os_rng())
    }

    /// Creates a world whose random source is seeded with `seed`.
    pub fn with_seed(params: Params, seed: u64) -> Self {
        Self::from_rng(params, StdRng::seed_from_u64(seed))
    }

    /// Invalid parameters are replaced by the defaults.
    fn from_rng(params: Params, rng: StdRng) -> Self {
        let params = match params.validate() {
            Ok(()) => params,
            Err(e) => {
                warn!("{e}, falling back to default parameters");
                Params::default()
            }
        };
        let event_log = EventLog::new(params.event_log_size);
        let mut world = Self {
            params,
            controls: Controls::default(),
            creatures: Vec::new(),
            food: Vec::new(),
            predators: Vec::new(),
            generation: 1,
            tick: 0,
            running: true,
            selected: None,
            census: Census::default(),
            event_log,
            next_id: 0,
            rng,
        };
        world.seed_population();
        info!(
            creatures = world.creatures.len(),
            width = world.params.world_width,
            height = world.params.world_height,
            "world created"
        );
        world
    }

    /// Simulation parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Controls read by the most recent tick.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Live creatures.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// Mutable access to live creatures. The collection itself cannot change size.
    pub fn creatures_mut(&mut self) -> &mut [Creature] {
        &mut self.creatures
    }

    /// Food items on the ground.
    pub fn food(&self) -> &[Food] {
        &self.food
    }

    /// Predators in the world.
    pub fn predators(&self) -> &[Predator] {
        &self.predators
    }

    /// Current generation counter.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Ticks advanced since creation or the last reset.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Lifetime counters.
    pub fn census(&self) -> &Census {
        &self.census
    }

    /// Recent notable events, newest first.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Whether the caller should keep scheduling ticks.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sets the running flag. Never interrupts a tick.
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flips the running flag and returns the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Installs new controls, sanitizing them first.
    ///
    /// A humidity change resizes every living creature to the size that humidity
    /// dictates.
    pub fn set_controls(&mut self, controls: Controls) {
        let controls = controls.sanitized();
        if controls.humidity != self.controls.humidity {
            let size = controls.creature_size();
            for creature in &mut self.creatures {
                creature.set_size(size);
            }
            debug!(humidity = controls.humidity, size, "creatures resized");
        }
        self.controls = controls;
    }

    /// Applies `controls` and advances the world by one tick.
    pub fn advance_tick(&mut self, controls: Controls) {
        self.set_controls(controls);
        self.step();
    }

    /// Advances one tick only if the running flag is set.
    ///
    /// # Returns
    ///
    /// `true` if a tick was advanced.
    pub fn tick_if_running(&mut self, controls: Controls) -> bool {
        if self.running {
            self.advance_tick(controls);
        }
        self.running
    }

    fn step(&mut self) {
        self.tick += 1;
        let controls = self.controls;

        for predator in &mut self.predators {
            predator.update(&mut self.rng, &self.params);
        }

        let mut queue = EventQueue::new();

        for creature in &mut self.creatures {
            creature.wander(&mut self.rng, &self.params);
            creature.metabolize(&controls, &self.params);

            if let Some(cause) = creature.death_cause(self.params.max_age) {
                queue.push(SimulationEvent::CreatureDied {
                    creature_id: creature.id,
                    cause,
                    pos: creature.pos.clone(),
                });
                continue;
            }

            let count = creature.eat(&mut self.food);
            if count > 0 {
                queue.push(SimulationEvent::FoodEaten {
                    creature_id: creature.id,
                    count,
                });
            }

            if creature.evade(&self.predators, self.params.awareness_radius) {
                queue.push(SimulationEvent::CreatureDied {
                    creature_id: creature.id,
                    cause: DeathCause::Predation,
                    pos: creature.pos.clone(),
                });
                continue;
            }

            let child_id = CreatureId(self.next_id);
            if let Some(child) = reproduction::try_reproduce(
                creature,
                child_id,
                controls.mutation_rate,
                &mut self.rng,
                &self.params,
            ) {
                self.next_id += 1;
                queue.push(SimulationEvent::CreatureBorn {
                    parent_id: creature.id,
                    child,
                });
            }
        }

        let events = queue.len();
        if !queue.is_empty() {
            apply_events(self, queue);
        }

        if self.rng.random::<f32>() < self.params.food_spawn_chance {
            let food = Food::new_random(&mut self.rng, &self.params);
            self.food.push(food);
            self.census.food_spawned += 1;
        }

        if self.creatures.is_empty() {
            self.reseed();
        }

        trace!(
            tick = self.tick,
            events,
            creatures = self.creatures.len(),
            food = self.food.len(),
            "tick complete"
        );
    }

    /// Adds `count` food items at random positions.
    pub fn spawn_food(&mut self, count: usize) {
        for _ in 0..count {
            let food = Food::new_random(&mut self.rng, &self.params);
            self.food.push(food);
        }
        self.census.food_spawned += count as u64;
        debug!(count, total = self.food.len(), "food spawned");
        self.event_log
            .log(self.tick, format!("{count} food added"), EventColor::Food);
    }

    /// Adds one predator at a random position.
    pub fn spawn_predator(&mut self) {
        let predator = Predator::new_random(&mut self.rng, &self.params);
        debug!(x = predator.pos[0], y = predator.pos[1], "predator spawned");
        self.predators.push(predator);
        self.event_log.log(
            self.tick,
            format!("predator #{} released", self.predators.len()),
            EventColor::Predator,
        );
    }

    /// Inserts a creature as is. Its id must come from [`World::next_creature_id`].
    pub fn insert_creature(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Inserts a food item as is.
    pub fn insert_food(&mut self, food: Food) {
        self.food.push(food);
    }

    /// Inserts a predator as is.
    pub fn insert_predator(&mut self, predator: Predator) {
        self.predators.push(predator);
    }

    /// Allocates a fresh creature identifier.
    pub fn next_creature_id(&mut self) -> CreatureId {
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes every creature without counting deaths. The next tick reseeds.
    pub fn clear_creatures(&mut self) {
        self.creatures.clear();
        self.selected = None;
    }

    /// Clears every collection, resets the generation to 1 and reseeds.
    ///
    /// Controls and the running flag are kept.
    pub fn reset(&mut self) {
        self.creatures.clear();
        self.food.clear();
        self.predators.clear();
        self.generation = 1;
        self.tick = 0;
        self.selected = None;
        self.census = Census::default();
        self.event_log.clear();
        self.seed_population();

        info!(creatures = self.creatures.len(), "world reset");
        self.event_log
            .log(self.tick, "world reset".to_string(), EventColor::Generation);
    }

    fn reseed(&mut self) {
        self.generation += 1;
        self.census.reseeds += 1;
        self.seed_population();

        info!(
            generation = self.generation,
            tick = self.tick,
            "population died out, reseeding"
        );
        self.event_log.log(
            self.tick,
            format!("generation {} begins", self.generation),
            EventColor::Generation,
        );
    }

    fn seed_population(&mut self) {
        let size = self.controls.creature_size();
        for _ in 0..self.params.base_population {
            let id = self.next_creature_id();
            let creature = Creature::new_random(id, size, &mut self.rng, &self.params);
            self.creatures.push(creature);
        }
    }

    /// Selects the first creature whose circle contains `(x, y)`.
    ///
    /// Clicking empty space clears the selection.
    ///
    /// # Returns
    ///
    /// The newly selected creature, if any.
    pub fn select_at(&mut self, x: f32, y: f32) -> Option<CreatureId> {
        let target = point(x, y);
        self.selected = self
            .creatures
            .iter()
            .find(|c| c.contains_point(&target))
            .map(|c| c.id);
        self.selected
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected creature, resolved against the live collection.
    pub fn selected(&self) -> Option<&Creature> {
        let id = self.selected?;
        self.creatures.iter().find(|c| c.id == id)
    }

    /// Inspection details of the selected creature, `None` when nothing is selected.
    pub fn selected_detail(&self) -> Option<SelectedDetail> {
        self.selected().map(SelectedDetail::from)
    }

    /// Aggregates population statistics over the live creatures.
    pub fn stats(&self) -> Stats {
        Stats {
            tick: self.tick,
            generation: self.generation,
            population: self.creatures.len(),
            food: self.food.len(),
            predators: self.predators.len(),
            avg_speed: mean_of(&self.creatures, |c| c.speed),
            avg_size: mean_of(&self.creatures, |c| c.size),
            census: self.census.clone(),
        }
    }
}

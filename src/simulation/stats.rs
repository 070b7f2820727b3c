use serde::Serialize;

use super::creature::{Creature, CreatureId, DeathCause};

/// Label shown in place of an average when there are no creatures.
pub const NO_DATA: &str = "N/A";

/// Lifetime counters, reset together with the world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Census {
    /// Children born through reproduction.
    pub births: u64,
    /// Deaths from exhausted energy.
    pub starvations: u64,
    /// Deaths from exceeding the lifespan.
    pub old_age_deaths: u64,
    /// Deaths from predator contact.
    pub predations: u64,
    /// Food items eaten.
    pub food_eaten: u64,
    /// Food items spawned, by chance or on request.
    pub food_spawned: u64,
    /// Times the population died out and was reseeded.
    pub reseeds: u64,
}

impl Census {
    /// Counts one death of the given cause.
    pub fn record_death(&mut self, cause: DeathCause) {
        match cause {
            DeathCause::Starvation => self.starvations += 1,
            DeathCause::OldAge => self.old_age_deaths += 1,
            DeathCause::Predation => self.predations += 1,
        }
    }

    /// Deaths of any cause.
    pub fn deaths(&self) -> u64 {
        self.starvations + self.old_age_deaths + self.predations
    }
}

/// Population summary of the world after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Ticks advanced since the last reset.
    pub tick: u64,
    /// Current generation counter.
    pub generation: u32,
    /// Live creatures.
    pub population: usize,
    /// Food items on the ground.
    pub food: usize,
    /// Predators in the world.
    pub predators: usize,
    /// Mean creature speed, `None` without creatures.
    pub avg_speed: Option<f32>,
    /// Mean creature size, `None` without creatures.
    pub avg_size: Option<f32>,
    /// Lifetime counters.
    pub census: Census,
}

impl Stats {
    /// Average speed formatted with two decimals, or [`NO_DATA`].
    pub fn avg_speed_label(&self) -> String {
        format_average(self.avg_speed)
    }

    /// Average size formatted with two decimals, or [`NO_DATA`].
    pub fn avg_size_label(&self) -> String {
        format_average(self.avg_size)
    }
}

fn format_average(value: Option<f32>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.2}"))
}

/// Arithmetic mean of `f` over `creatures`, guarded against an empty slice.
pub fn mean_of(creatures: &[Creature], f: impl Fn(&Creature) -> f32) -> Option<f32> {
    if creatures.is_empty() {
        None
    } else {
        Some(creatures.iter().map(f).sum::<f32>() / creatures.len() as f32)
    }
}

/// Inspection view of the selected creature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedDetail {
    /// Identifier of the selected creature.
    pub id: CreatureId,
    /// Current energy.
    pub energy: f32,
    /// Current speed.
    pub speed: f32,
    /// Current size.
    pub size: f32,
    /// Current age.
    pub age: f32,
    /// Lineage depth.
    pub generation: u32,
}

impl From<&Creature> for SelectedDetail {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            energy: creature.energy,
            speed: creature.speed,
            size: creature.size,
            age: creature.age,
            generation: creature.generation,
        }
    }
}

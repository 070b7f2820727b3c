use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// Lower and upper bound of creature speed.
pub const SPEED_RANGE: (f32, f32) = (0.5, 5.0);
/// Lower and upper bound of creature size (radius).
pub const SIZE_RANGE: (f32, f32) = (3.0, 8.0);

/// Simulation parameters that control ecosystem behavior.
///
/// Every field has a default, so a configuration file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// World rectangle width.
    pub world_width: f32,
    /// World rectangle height.
    pub world_height: f32,
    /// Creatures seeded at start, on reset and on every reseed.
    pub base_population: usize,
    /// Energy of a freshly seeded creature.
    pub initial_energy: f32,
    /// Speed range of a freshly seeded creature.
    pub initial_speed: (f32, f32),
    /// Saturation of seeded creature colors, in percent.
    pub color_saturation: f32,
    /// Lightness of seeded creature colors, in percent.
    pub color_lightness: f32,
    /// Energy lost per tick at the neutral temperature.
    pub base_energy_decay: f32,
    /// Age gained per tick.
    pub age_per_tick: f32,
    /// Creatures older than this die.
    pub max_age: f32,
    /// Maximum heading change per tick for creatures (radians, symmetric).
    pub creature_heading_jitter: f32,
    /// Distance within which a creature flees a predator.
    pub awareness_radius: f32,
    /// Energy a creature must exceed before it can reproduce.
    pub reproduction_threshold: f32,
    /// Energy paid by the parent for each child.
    pub reproduction_cost: f32,
    /// Per-tick probability that an eligible creature reproduces.
    pub reproduction_chance: f32,
    /// Maximum child offset from the parent on each axis.
    pub offspring_offset: f32,
    /// Maximum hue drift between parent and child, in degrees.
    pub hue_jitter: f32,
    /// Maximum speed drift applied to every child.
    pub inherited_speed_jitter: f32,
    /// Maximum speed change applied on mutation.
    pub mutation_speed_delta: f32,
    /// Maximum size change applied on mutation.
    pub mutation_size_delta: f32,
    /// Energy granted by one food item.
    pub food_energy: f32,
    /// Food collision radius.
    pub food_radius: f32,
    /// Per-tick probability of spawning one food item.
    pub food_spawn_chance: f32,
    /// Food items added by one manual spawn request.
    pub food_batch_size: usize,
    /// Predator collision radius.
    pub predator_radius: f32,
    /// Predator speed per tick.
    pub predator_speed: f32,
    /// Maximum heading change per tick for predators (radians, symmetric).
    pub predator_heading_jitter: f32,
    /// Capacity of the recent events log.
    pub event_log_size: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            base_population: 20,
            initial_energy: 100.0,
            initial_speed: (1.0, 3.0),
            color_saturation: 100.0,
            color_lightness: 50.0,
            base_energy_decay: 0.1,
            age_per_tick: 0.1,
            max_age: 200.0,
            creature_heading_jitter: 0.25,
            awareness_radius: 100.0,
            reproduction_threshold: 150.0,
            reproduction_cost: 50.0,
            reproduction_chance: 0.01,
            offspring_offset: 10.0,
            hue_jitter: 15.0,
            inherited_speed_jitter: 0.05,
            mutation_speed_delta: 0.5,
            mutation_size_delta: 0.5,
            food_energy: 20.0,
            food_radius: 2.0,
            food_spawn_chance: 0.02,
            food_batch_size: 10,
            predator_radius: 10.0,
            predator_speed: 1.5,
            predator_heading_jitter: 0.15,
            event_log_size: 20,
        }
    }
}

impl Params {
    /// Checks that every value is inside its domain.
    pub fn validate(&self) -> Result<()> {
        check_positive("world_width", self.world_width)?;
        check_positive("world_height", self.world_height)?;
        check_positive("max_age", self.max_age)?;

        for (field, value) in [
            ("reproduction_chance", self.reproduction_chance),
            ("food_spawn_chance", self.food_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(field, format!("{value} is not a probability")));
            }
        }

        for (field, value) in [
            ("base_energy_decay", self.base_energy_decay),
            ("age_per_tick", self.age_per_tick),
            ("creature_heading_jitter", self.creature_heading_jitter),
            ("awareness_radius", self.awareness_radius),
            ("reproduction_cost", self.reproduction_cost),
            ("offspring_offset", self.offspring_offset),
            ("hue_jitter", self.hue_jitter),
            ("inherited_speed_jitter", self.inherited_speed_jitter),
            ("mutation_speed_delta", self.mutation_speed_delta),
            ("mutation_size_delta", self.mutation_size_delta),
            ("food_energy", self.food_energy),
            ("food_radius", self.food_radius),
            ("predator_radius", self.predator_radius),
            ("predator_speed", self.predator_speed),
            ("predator_heading_jitter", self.predator_heading_jitter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(field, format!("{value} must be >= 0")));
            }
        }

        let (lo, hi) = self.initial_speed;
        if !(lo.is_finite() && hi.is_finite()) || lo > hi {
            return Err(ConfigError::invalid(
                "initial_speed",
                format!("({lo}, {hi}) is not an ordered range"),
            ));
        }

        Ok(())
    }

    /// Loads parameters from a JSON file and validates them.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be > 0")))
    }
}

/// Clamps a speed into [`SPEED_RANGE`].
pub fn clamp_speed(speed: f32) -> f32 {
    speed.clamp(SPEED_RANGE.0, SPEED_RANGE.1)
}

/// Clamps a size into [`SIZE_RANGE`].
pub fn clamp_size(size: f32) -> f32 {
    size.clamp(SIZE_RANGE.0, SIZE_RANGE.1)
}

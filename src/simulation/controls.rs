//! Viewer-supplied control parameters.
//!
//! Controls arrive from outside the core (sliders, command line flags) and are
//! sanitized before the world reads them.

use serde::{Deserialize, Serialize};

use super::params::clamp_size;

/// Temperature at which energy decay runs at its base rate.
pub const NEUTRAL_TEMPERATURE: i32 = 50;
/// Humidity at which creatures have their base size.
pub const NEUTRAL_HUMIDITY: i32 = 50;
/// Creature size at the neutral humidity.
pub const BASE_SIZE: f32 = 5.0;

/// Global environment controls read once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Temperature, nominally in [0, 100]. Scales energy decay.
    pub temperature: i32,
    /// Humidity, nominally in [0, 100]. Sets creature size.
    pub humidity: i32,
    /// Probability in [0, 1] that a birth mutates speed and size.
    pub mutation_rate: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            temperature: NEUTRAL_TEMPERATURE,
            humidity: NEUTRAL_HUMIDITY,
            mutation_rate: 0.1,
        }
    }
}

impl Controls {
    /// Builds sanitized controls from raw values.
    pub fn new(temperature: i32, humidity: i32, mutation_rate: f32) -> Self {
        Self {
            temperature,
            humidity,
            mutation_rate,
        }
        .sanitized()
    }

    /// Returns a copy with every value forced into its domain.
    ///
    /// Temperature and humidity are clamped to [0, 100]; a non-finite mutation
    /// rate falls back to the default, a finite one is clamped to [0, 1].
    #[must_use]
    pub fn sanitized(self) -> Self {
        let mutation_rate = if self.mutation_rate.is_finite() {
            self.mutation_rate.clamp(0.0, 1.0)
        } else {
            Self::default().mutation_rate
        };

        Self {
            temperature: self.temperature.clamp(0, 100),
            humidity: self.humidity.clamp(0, 100),
            mutation_rate,
        }
    }

    /// Multiplier applied to the base energy decay: `1 + (T - 50) / 100`.
    pub fn decay_factor(&self) -> f32 {
        1.0 + (self.temperature - NEUTRAL_TEMPERATURE) as f32 / 100.0
    }

    /// Creature size dictated by the humidity: `clamp(3, 8, 5 + (H - 50) / 10)`.
    pub fn creature_size(&self) -> f32 {
        clamp_size(BASE_SIZE + (self.humidity - NEUTRAL_HUMIDITY) as f32 / 10.0)
    }
}

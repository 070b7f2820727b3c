//! # Terrarium - Real-Time Creature Ecosystem
//!
//! A 2D ecosystem of autonomous creatures that wander, eat food, flee predators,
//! reproduce with trait mutation, age and die. A viewer steers the world through a
//! handful of global controls (temperature, humidity, mutation rate) and watches the
//! population statistics evolve.
//!
//! ## Features
//!
//! - Jittered random-walk movement with wall reflection
//! - Temperature-scaled energy decay and a fixed lifespan
//! - Food consumption with first-come-first-served exclusivity
//! - Predator evasion inside an awareness radius, death on contact
//! - Reproduction with hue drift and mutation of speed and size
//! - Generation reseeding when the population dies out
//! - Deferred removal so every creature is evaluated exactly once per tick
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - World state and the tick driver
//! - [`simulation::creature`] - Creature state and per-tick behavior
//! - [`simulation::predator`] - Autonomous predators
//! - [`simulation::reproduction`] - Offspring creation and mutation
//! - [`simulation::stats`] - Population statistics
//! - [`simulation::params`] - Tunable constants and configuration files

/// Core simulation logic and data structures.
pub mod simulation {
    /// Structured HSL colors for creatures.
    pub mod color;
    /// Viewer-supplied control parameters.
    pub mod controls;
    /// Creature state, movement and energy bookkeeping.
    pub mod creature;
    /// Error types for configuration handling.
    pub mod error;
    /// Bounded log of recent events for display.
    pub mod event_log;
    /// Events collected during a tick and applied once the pass completes.
    pub mod events;
    /// Food items that creatures can consume.
    pub mod food;
    /// Geometric helpers for distances, movement and wall reflection.
    pub mod geometric_utils;
    /// Trait for entities that occupy a circle in the world.
    ///
    /// The [`locatable::Locatable`] trait is implemented by all entities that have
    /// a position and a radius (Creature, Food, Predator).
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Predators roaming the world.
    pub mod predator;
    /// Offspring creation with inheritance and mutation.
    pub mod reproduction;
    /// Population statistics and lifetime counters.
    pub mod stats;
    /// World state and the per-tick update pass.
    pub mod world;
}

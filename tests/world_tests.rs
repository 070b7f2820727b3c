#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::f32::consts::PI;
use terrarium::simulation::color::Hsl;
use terrarium::simulation::controls::Controls;
use terrarium::simulation::creature::Creature;
use terrarium::simulation::food::Food;
use terrarium::simulation::geometric_utils::point;
use terrarium::simulation::params::{Params, SIZE_RANGE, SPEED_RANGE};
use terrarium::simulation::predator::Predator;
use terrarium::simulation::world::World;

/// Defaults with every source of randomness that would disturb a scripted
/// scenario switched off.
fn create_test_params() -> Params {
    Params {
        creature_heading_jitter: 0.0,
        predator_heading_jitter: 0.0,
        reproduction_chance: 0.0,
        food_spawn_chance: 0.0,
        ..Params::default()
    }
}

/// A world holding no creatures yet, so a test can place its own.
fn create_empty_world(params: Params) -> World {
    let mut world = World::with_seed(params, 42);
    world.clear_creatures();
    world
}

fn place_creature(world: &mut World, x: f32, y: f32, heading: f32, speed: f32, energy: f32) {
    let id = world.next_creature_id();
    world.insert_creature(Creature {
        id,
        pos: point(x, y),
        size: 5.0,
        speed,
        heading,
        color: Hsl::new(120.0, 100.0, 50.0),
        energy,
        age: 0.0,
        generation: 1,
    });
}

fn neutral() -> Controls {
    Controls::new(50, 50, 0.0)
}

#[test]
fn test_world_creation() {
    let params = create_test_params();
    let world = World::with_seed(params.clone(), 7);

    assert_eq!(world.creatures().len(), params.base_population);
    assert!(world.food().is_empty());
    assert!(world.predators().is_empty());
    assert_eq!(world.generation(), 1);
    assert_eq!(world.tick(), 0);
    assert!(world.is_running());

    for creature in world.creatures() {
        assert_eq!(creature.energy, params.initial_energy);
        assert_eq!(creature.age, 0.0);
        assert_eq!(creature.size, 5.0);
        assert!(creature.speed >= params.initial_speed.0 && creature.speed <= params.initial_speed.1);
        assert!(creature.pos[0] >= 0.0 && creature.pos[0] <= params.world_width);
        assert!(creature.pos[1] >= 0.0 && creature.pos[1] <= params.world_height);
    }
}

#[test]
fn test_creature_eats_food_in_reach() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 100.0, 100.0, 0.0, 2.0, 160.0);
    world.insert_food(Food::new(point(100.0, 100.0), world.params()));

    world.advance_tick(neutral());

    let creature = &world.creatures()[0];
    assert!((creature.energy - 179.9).abs() < 1e-3);
    assert!((creature.pos[0] - 102.0).abs() < 1e-4);
    assert!((creature.pos[1] - 100.0).abs() < 1e-4);
    assert!(world.food().is_empty());
    assert_eq!(world.census().food_eaten, 1);
}

#[test]
fn test_energy_decay_scales_with_temperature() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 400.0, 300.0, 0.0, 1.0, 100.0);

    world.advance_tick(Controls::new(80, 50, 0.0));
    assert!((world.creatures()[0].energy - 99.87).abs() < 1e-4);

    world.advance_tick(Controls::new(20, 50, 0.0));
    assert!((world.creatures()[0].energy - 99.80).abs() < 1e-4);

    assert!((world.creatures()[0].age - 0.2).abs() < 1e-5);
}

#[test]
fn test_starved_creature_is_removed() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 100.0, 100.0, 0.0, 1.0, 0.05);
    place_creature(&mut world, 500.0, 300.0, 0.0, 1.0, 100.0);
    let survivor = world.creatures()[1].id;

    world.advance_tick(neutral());

    assert_eq!(world.creatures().len(), 1);
    assert_eq!(world.creatures()[0].id, survivor);
    assert_eq!(world.census().starvations, 1);
    assert_eq!(world.generation(), 1);
}

#[test]
fn test_old_creature_dies() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 100.0, 100.0, 0.0, 1.0, 100.0);
    place_creature(&mut world, 500.0, 300.0, 0.0, 1.0, 100.0);
    world.creatures_mut()[0].age = 199.95;

    world.advance_tick(neutral());

    assert_eq!(world.creatures().len(), 1);
    assert_eq!(world.census().old_age_deaths, 1);
}

#[test]
fn test_food_feeds_only_one_creature() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 200.0, 200.0, 0.0, 1.0, 100.0);
    place_creature(&mut world, 201.0, 200.0, 0.0, 1.0, 100.0);
    world.insert_food(Food::new(point(203.0, 200.0), world.params()));

    world.advance_tick(neutral());

    let total: f32 = world.creatures().iter().map(|c| c.energy).sum();
    assert!((total - (2.0 * 99.9 + 20.0)).abs() < 1e-3);
    // iteration order decides who eats
    assert!((world.creatures()[0].energy - 119.9).abs() < 1e-3);
    assert!(world.food().is_empty());
    assert_eq!(world.census().food_eaten, 1);
}

#[test]
fn test_creature_bounces_off_wall() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 799.0, 300.0, 0.0, 3.0, 100.0);

    world.advance_tick(neutral());

    let creature = &world.creatures()[0];
    assert!((creature.heading - PI).abs() < 1e-5);
    assert!(creature.pos[0] <= 800.0);

    world.advance_tick(neutral());
    let creature = &world.creatures()[0];
    assert!((creature.pos[0] - 797.0).abs() < 1e-3);
}

#[test]
fn test_predator_contact_kills() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 300.0, 300.0, 0.0, 2.0, 100.0);
    place_creature(&mut world, 700.0, 550.0, 0.0, 1.0, 100.0);
    let predator = Predator::new(point(300.0, 300.0), 0.0, world.params());
    world.insert_predator(predator);

    world.advance_tick(neutral());

    assert_eq!(world.creatures().len(), 1);
    assert_eq!(world.census().predations, 1);
    assert_eq!(world.predators().len(), 1);
}

#[test]
fn test_creature_flees_predator() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 380.0, 300.0, PI, 2.0, 100.0);
    let predator = Predator::new(point(300.0, 300.0), 0.0, world.params());
    world.insert_predator(predator);

    world.advance_tick(neutral());

    let creature = &world.creatures()[0];
    assert!(creature.heading.abs() < 1e-5, "heading {}", creature.heading);

    world.advance_tick(neutral());
    let creature = &world.creatures()[0];
    assert!((creature.pos[0] - 380.0).abs() < 1e-3);
}

#[test]
fn test_last_predator_in_range_sets_heading() {
    let params = Params {
        predator_speed: 0.0,
        ..create_test_params()
    };
    let mut world = create_empty_world(params);
    place_creature(&mut world, 400.0, 300.0, 0.0, 0.0, 100.0);
    let west = Predator::new(point(350.0, 300.0), 0.0, world.params());
    let south = Predator::new(point(400.0, 350.0), 0.0, world.params());
    world.insert_predator(west);
    world.insert_predator(south);

    world.advance_tick(neutral());

    // both are in range, the second one checked wins
    let creature = &world.creatures()[0];
    let expected = (300.0f32 - 350.0).atan2(400.0 - 400.0);
    assert!((creature.heading - expected).abs() < 1e-5, "heading {}", creature.heading);
    assert!((creature.heading + PI / 2.0).abs() < 1e-5);
}

#[test]
fn test_reseed_when_population_dies_out() {
    let params = create_test_params();
    let mut world = create_empty_world(params.clone());

    world.advance_tick(neutral());

    assert_eq!(world.creatures().len(), params.base_population);
    assert_eq!(world.generation(), 2);
    assert_eq!(world.census().reseeds, 1);

    let mut ids: Vec<_> = world.creatures().iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), params.base_population);
}

#[test]
fn test_last_death_triggers_reseed() {
    let params = create_test_params();
    let mut world = create_empty_world(params.clone());
    place_creature(&mut world, 100.0, 100.0, 0.0, 1.0, 0.01);

    world.advance_tick(neutral());

    assert_eq!(world.census().starvations, 1);
    assert_eq!(world.generation(), 2);
    assert_eq!(world.creatures().len(), params.base_population);
    assert!(world.creatures().iter().all(|c| c.energy == params.initial_energy));
}

#[test]
fn test_reproduction_in_tick() {
    let params = Params {
        reproduction_chance: 1.0,
        ..create_test_params()
    };
    let mut world = create_empty_world(params);
    place_creature(&mut world, 400.0, 300.0, 0.0, 2.0, 160.0);
    let parent_id = world.creatures()[0].id;

    world.advance_tick(Controls::new(50, 50, 0.0));

    assert_eq!(world.creatures().len(), 2);
    assert_eq!(world.census().births, 1);

    let parent = world.creatures().iter().find(|c| c.id == parent_id).unwrap();
    assert!((parent.energy - 109.9).abs() < 1e-3);

    let child = world.creatures().iter().find(|c| c.id != parent_id).unwrap();
    assert_eq!(child.generation, 2);
    assert_eq!(child.energy, 100.0);
    // newborns sit out the tick that created them
    assert_eq!(child.age, 0.0);
    assert!((child.speed - parent.speed).abs() <= 0.05 + 1e-6);
    assert_eq!(child.size, parent.size);
}

#[test]
fn test_humidity_resizes_creatures() {
    let mut world = World::with_seed(create_test_params(), 3);

    world.advance_tick(Controls::new(50, 90, 0.1));
    assert!(world.creatures().iter().all(|c| c.size == 8.0));

    world.advance_tick(Controls::new(50, 10, 0.1));
    assert!(world.creatures().iter().all(|c| c.size == 3.0));

    world.reset();
    assert!(world.creatures().iter().all(|c| c.size == 3.0));
}

#[test]
fn test_humidity_resizes_paused_world() {
    let mut world = World::with_seed(create_test_params(), 3);
    world.set_running(false);

    world.set_controls(Controls::new(50, 90, 0.1));

    assert_eq!(world.tick(), 0);
    assert!(world.creatures().iter().all(|c| c.size == 8.0));
    assert_eq!(world.stats().avg_size_label(), "8.00");
}

#[test]
fn test_invalid_params_fall_back_to_defaults() {
    let params = Params {
        world_width: -1.0,
        ..create_test_params()
    };
    let world = World::with_seed(params, 1);

    assert_eq!(world.params(), &Params::default());
    assert_eq!(world.creatures().len(), Params::default().base_population);
}

#[test]
fn test_out_of_range_controls_are_sanitized() {
    let mut world = World::with_seed(create_test_params(), 5);
    world.advance_tick(Controls {
        temperature: 400,
        humidity: -20,
        mutation_rate: f32::NAN,
    });

    let controls = world.controls();
    assert_eq!(controls.temperature, 100);
    assert_eq!(controls.humidity, 0);
    assert_eq!(controls.mutation_rate, 0.1);
}

#[test]
fn test_select_and_stale_selection() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 400.0, 300.0, 0.0, 1.0, 0.05);
    place_creature(&mut world, 100.0, 100.0, 0.0, 1.0, 100.0);
    let target = world.creatures()[0].id;

    assert_eq!(world.select_at(402.0, 301.0), Some(target));
    let detail = world.selected_detail().unwrap();
    assert_eq!(detail.id, target);
    assert_eq!(detail.generation, 1);

    // dies this tick, selection must not dangle
    world.advance_tick(neutral());
    assert!(world.selected().is_none());
    assert!(world.selected_detail().is_none());
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 400.0, 300.0, 0.0, 1.0, 100.0);

    assert!(world.select_at(400.0, 300.0).is_some());
    assert!(world.select_at(10.0, 10.0).is_none());
    assert!(world.selected().is_none());
}

#[test]
fn test_stats_without_creatures() {
    let world = create_empty_world(create_test_params());
    let stats = world.stats();

    assert_eq!(stats.population, 0);
    assert!(stats.avg_speed.is_none());
    assert_eq!(stats.avg_speed_label(), "N/A");
    assert_eq!(stats.avg_size_label(), "N/A");
}

#[test]
fn test_stats_averages() {
    let mut world = create_empty_world(create_test_params());
    place_creature(&mut world, 100.0, 100.0, 0.0, 1.0, 100.0);
    place_creature(&mut world, 300.0, 100.0, 0.0, 2.0, 100.0);

    let stats = world.stats();
    assert_eq!(stats.population, 2);
    assert_eq!(stats.avg_speed_label(), "1.50");
    assert_eq!(stats.avg_size_label(), "5.00");
}

#[test]
fn test_paused_world_does_not_tick() {
    let mut world = World::with_seed(create_test_params(), 11);
    world.set_running(false);
    let before: Vec<_> = world.creatures().iter().map(|c| c.pos.clone()).collect();

    assert!(!world.tick_if_running(neutral()));
    assert_eq!(world.tick(), 0);
    let after: Vec<_> = world.creatures().iter().map(|c| c.pos.clone()).collect();
    assert_eq!(before, after);

    assert!(world.toggle_running());
    assert!(world.tick_if_running(neutral()));
    assert_eq!(world.tick(), 1);
}

#[test]
fn test_spawn_commands() {
    let mut world = World::with_seed(create_test_params(), 13);
    world.spawn_food(10);
    world.spawn_predator();

    assert_eq!(world.food().len(), 10);
    assert_eq!(world.predators().len(), 1);
    assert_eq!(world.census().food_spawned, 10);
    assert!(!world.event_log().events().is_empty());
}

#[test]
fn test_reset() {
    let mut world = World::with_seed(create_test_params(), 17);
    world.spawn_food(5);
    world.spawn_predator();
    world.clear_creatures();
    world.advance_tick(Controls::new(70, 50, 0.3));
    assert_eq!(world.generation(), 2);

    world.reset();

    assert_eq!(world.generation(), 1);
    assert_eq!(world.tick(), 0);
    assert!(world.food().is_empty());
    assert!(world.predators().is_empty());
    assert_eq!(world.creatures().len(), world.params().base_population);
    assert_eq!(world.census().reseeds, 0);
    assert_eq!(world.controls().temperature, 70);
}

#[test]
fn test_same_seed_same_history() {
    let params = Params::default();
    let mut a = World::with_seed(params.clone(), 99);
    let mut b = World::with_seed(params, 99);
    a.spawn_predator();
    b.spawn_predator();

    let controls = Controls::new(60, 40, 0.5);
    for _ in 0..300 {
        a.advance_tick(controls);
        b.advance_tick(controls);
    }

    assert_eq!(a.stats(), b.stats());
}

#[test]
fn test_long_run_keeps_invariants() {
    let params = Params {
        reproduction_chance: 0.2,
        food_spawn_chance: 0.5,
        ..Params::default()
    };
    let mut world = World::with_seed(params.clone(), 2024);
    world.spawn_predator();
    world.spawn_predator();
    world.spawn_food(50);

    let controls = Controls::new(30, 70, 0.8);
    for _ in 0..2000 {
        world.advance_tick(controls);

        assert!(!world.creatures().is_empty());
        assert!(world.food().iter().all(|f| !f.is_consumed()));
        for creature in world.creatures() {
            assert!(creature.pos[0] >= 0.0 && creature.pos[0] <= params.world_width);
            assert!(creature.pos[1] >= 0.0 && creature.pos[1] <= params.world_height);
            assert!(creature.speed >= SPEED_RANGE.0 && creature.speed <= SPEED_RANGE.1);
            assert!(creature.size >= SIZE_RANGE.0 && creature.size <= SIZE_RANGE.1);
            assert!(creature.is_alive(params.max_age));
        }
    }
}

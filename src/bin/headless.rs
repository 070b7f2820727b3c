//! Runs the ecosystem without a window and reports statistics as it goes.

use clap::Parser;
use std::path::PathBuf;
use terrarium::simulation::controls::Controls;
use terrarium::simulation::error::Result;
use terrarium::simulation::params::Params;
use terrarium::simulation::world::World;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u64,

    /// JSON parameter file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Temperature in [0, 100]
    #[arg(long, default_value_t = 50)]
    temperature: i32,

    /// Humidity in [0, 100]
    #[arg(long, default_value_t = 50)]
    humidity: i32,

    /// Mutation rate in [0, 1]
    #[arg(long, default_value_t = 0.1)]
    mutation_rate: f32,

    /// Predators released before the first tick
    #[arg(short, long, default_value_t = 0)]
    predators: usize,

    /// Report statistics every N ticks (0 reports only at the end)
    #[arg(short, long, default_value_t = 1000)]
    report_every: u64,

    /// Print reports as JSON lines on stdout instead of log records
    #[arg(long)]
    json: bool,

    /// Write the effective parameters to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn report(world: &World, json: bool) -> Result<()> {
    let stats = world.stats();
    if json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        info!(
            tick = stats.tick,
            generation = stats.generation,
            population = stats.population,
            food = stats.food,
            predators = stats.predators,
            avg_speed = %stats.avg_speed_label(),
            avg_size = %stats.avg_size_label(),
            births = stats.census.births,
            deaths = stats.census.deaths(),
            "report"
        );
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let params = match &args.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };

    if let Some(path) = &args.write_config {
        params.save_to_file(path)?;
        info!(path = %path.display(), "parameters written");
        return Ok(());
    }

    let mut world = match args.seed {
        Some(seed) => World::with_seed(params, seed),
        None => World::new(params),
    };
    for _ in 0..args.predators {
        world.spawn_predator();
    }

    let controls = Controls::new(args.temperature, args.humidity, args.mutation_rate);
    info!(
        ticks = args.ticks,
        temperature = controls.temperature,
        humidity = controls.humidity,
        mutation_rate = controls.mutation_rate,
        "Running headless simulation"
    );

    for _ in 0..args.ticks {
        world.advance_tick(controls);
        if args.report_every > 0 && world.tick() % args.report_every == 0 {
            report(&world, args.json)?;
        }
    }

    if args.report_every == 0 || world.tick() % args.report_every != 0 {
        report(&world, args.json)?;
    }
    info!("Headless simulation finished");
    Ok(())
}

fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

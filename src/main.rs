//! optiroute - Genetic route selection over a fixed candidate catalog
//!
//! Loads a CSV catalog of candidate travel routes, runs a generational
//! genetic search balancing speed, traffic, weather impact, and distance,
//! prints the winning route, and writes a GeoJSON handoff artifact with the
//! winner's endpoints for the downstream map renderer.
//!
//! ## Usage
//! ```bash
//! # Run with defaults (population 10, 20 generations, mutation rate 0.3)
//! optiroute --catalog routes.csv
//!
//! # Reproducible run
//! optiroute --catalog routes.csv --seed 42
//!
//! # Run configuration from a TOML file, flags override file values
//! optiroute --catalog routes.csv --config run.toml --generations 50
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optiroute_catalog::RouteCatalog;
use optiroute_genetics::{EvolutionEngine, GaConfig, GaError};

use optiroute::render;
use optiroute::run_config::RunFileConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "optiroute")]
#[command(about = "Pick the best candidate travel route with a genetic search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Route catalog CSV path
    #[arg(short, long)]
    catalog: PathBuf,

    /// Optional TOML run configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed population size (distinct routes drawn from the catalog)
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<usize>,

    /// Probability in [0, 1] that a child is replaced by a fresh catalog draw
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// RNG seed; drawn from entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the GeoJSON handoff for the map renderer
    #[arg(long, default_value = "best_route.geojson")]
    map: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let file_config = match &args.config {
        Some(path) => RunFileConfig::load(path)?,
        None => RunFileConfig::default(),
    };

    let defaults = GaConfig::default();
    let config = GaConfig {
        population_size: args
            .population_size
            .or(file_config.population_size)
            .unwrap_or(defaults.population_size),
        generations: args
            .generations
            .or(file_config.generations)
            .unwrap_or(defaults.generations),
        mutation_rate: args
            .mutation_rate
            .or(file_config.mutation_rate)
            .unwrap_or(defaults.mutation_rate),
    };

    let catalog = RouteCatalog::from_csv_path(&args.catalog)
        .with_context(|| format!("failed to load route catalog {}", args.catalog.display()))?;
    tracing::info!(routes = catalog.len(), "route catalog loaded");

    // logged so any run can be replayed with --seed
    let seed = args.seed.or(file_config.seed).unwrap_or_else(rand::random);
    tracing::info!(seed, ?config, "starting evolution");

    let engine = EvolutionEngine::new(config, seed)?;
    let best = match engine.run(&catalog) {
        Ok(best) => best,
        Err(GaError::NoViableRoute) => {
            anyhow::bail!(
                "no viable route found in {}: every candidate scored as unfit",
                args.catalog.display()
            );
        }
        Err(err) => return Err(err.into()),
    };

    let record = catalog
        .get(&best.route_id)
        .context("winning route id missing from catalog")?;

    println!("Optimal route: {}", best.route_id);
    println!("Best fitness score: {:.4}", best.score);

    render::write_route_map(record, best.score, &args.map)
        .with_context(|| format!("failed to write route map {}", args.map.display()))?;
    tracing::info!(path = %args.map.display(), "route map handoff written");

    Ok(())
}

/// Initialize tracing with proper configuration
fn init_tracing(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("optiroute={level},optiroute_catalog={level},optiroute_genetics={level}")
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

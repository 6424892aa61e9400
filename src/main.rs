use anyhow::Context;
use clap::Parser;
use log::info;

use grid_pathfinder::config::{AlgorithmSelection, Config};
use grid_pathfinder::simulation::Simulation;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    info!("Starting pathfinding search...");
    match &config.grid {
        Some(path) => info!("Grid file: {}", path.display()),
        None => info!(
            "Random grid: {}x{}, obstacles: {}",
            config.width, config.height, config.num_obstacles
        ),
    }
    if config.no_visualization {
        info!("Visualization disabled - running in fast mode");
    } else {
        info!("Visualization enabled with {}ms delay", config.delay_ms);
    }

    let mut simulation = Simulation::from_config(&config).context("failed to set up the grid")?;
    println!("{}", simulation.grid());

    if config.algorithm == AlgorithmSelection::All {
        let results = simulation
            .run_all_algorithms()
            .context("failed to run the algorithm comparison")?;
        Simulation::print_comparison_results(&results);
    } else {
        for algorithm in config.algorithm.algorithms() {
            let stats = simulation
                .run(algorithm)
                .with_context(|| format!("{} search failed", algorithm))?;

            println!("\n=== FINAL RESULTS ===");
            println!("{}", stats);
            if let Some(extra) = stats.extra_steps().filter(|&extra| extra > 0) {
                println!("Extra steps over the shortest path: {}", extra);
            }
            if config.no_visualization {
                println!("{}", simulation.grid());
            }
        }
    }

    Ok(())
}

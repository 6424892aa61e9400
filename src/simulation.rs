use crate::algorithms::Algorithm;
use crate::config::Config;
use crate::engine::{EngineError, PathfindingEngine};
use crate::grid::{Cell, Grid, GridError};
use crate::observer::SearchObserver;
use crate::reference::optimal_path_length;
use crate::statistics::SearchStatistics;
use log::info;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("the grid has no start cell")]
    MissingStart,

    #[error("the grid has no goal cell")]
    MissingGoal,

    #[error("failed to read grid file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Redraws the grid after every expansion and waits `delay` between frames.
struct AnimatedObserver<'g> {
    grid: &'g Grid,
    algorithm: Algorithm,
    delay: Duration,
    expanded: usize,
}

impl SearchObserver for AnimatedObserver<'_> {
    fn on_expand(&mut self, cell: Cell, is_goal: bool) {
        self.expanded += 1;
        clear_screen();
        println!("=== PATHFINDING SIMULATION ===");
        println!(
            "Algorithm: {} | Expanded: {} | Current: {}{}",
            self.algorithm,
            self.expanded,
            cell,
            if is_goal { " (goal)" } else { "" }
        );
        self.grid.print_grid(Some(cell));
        thread::sleep(self.delay);
    }
}

/// The caller side of the engine: owns the grid, keeps the engine in sync
/// with it, and renders whatever the engine reports.
pub struct Simulation {
    grid: Grid,
    engine: PathfindingEngine,
    delay: Duration,
    visualize: bool,
}

impl Simulation {
    pub fn new(grid: Grid, delay_ms: u64, visualize: bool) -> Self {
        let engine = PathfindingEngine::with_grid(&grid);
        Simulation {
            grid,
            engine,
            delay: Duration::from_millis(delay_ms),
            visualize,
        }
    }

    /// Loads the grid file named in `config`, or generates a random grid.
    pub fn from_config(config: &Config) -> Result<Self, SimulationError> {
        let grid = match &config.grid {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| SimulationError::Io {
                    path: path.clone(),
                    source,
                })?;
                text.parse::<Grid>()?
            }
            None => {
                let seed = config.seed.unwrap_or_else(rand::random);
                info!("Environment seed: {} (for reproducibility)", seed);
                Grid::random(
                    usize::from(config.width),
                    usize::from(config.height),
                    config.num_obstacles,
                    Some(seed),
                )?
            }
        };
        Ok(Simulation::new(grid, config.delay_ms, !config.no_visualization))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing; the engine is re-synced on the next run.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    fn endpoints(&self) -> Result<(Cell, Cell), SimulationError> {
        let start = self.grid.start().ok_or(SimulationError::MissingStart)?;
        let goal = self.grid.goal().ok_or(SimulationError::MissingGoal)?;
        Ok((start, goal))
    }

    /// Runs one algorithm on the current grid and paints the path it finds.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<SearchStatistics, SimulationError> {
        self.grid.clear_path();
        self.engine.configure_from_grid(&self.grid);
        let (start, goal) = self.endpoints()?;

        let optimal = self
            .engine
            .view()
            .and_then(|view| optimal_path_length(view, start, goal));

        let started = Instant::now();
        let mut search = self.engine.start_search(algorithm, start, goal)?;
        info!("{}: searching from {} to {}", search.algorithm(), search.start(), search.goal());
        if self.visualize {
            let mut observer = AnimatedObserver {
                grid: &self.grid,
                algorithm,
                delay: self.delay,
                expanded: 0,
            };
            search.run(Some(&mut observer));
        } else {
            search.run(None);
        }
        let elapsed = started.elapsed();
        let expansions = search.expansions();
        let came_from = search.into_predecessors();

        let path = came_from.reconstruct_path(start, goal);
        match &path {
            Some(path) => info!("{}: path of {} steps after {} expansions", algorithm, path.len(), expansions),
            None => info!("{}: no path found after {} expansions", algorithm, expansions),
        }
        if let Some(path) = &path {
            self.grid.mark_path(path);
        }

        if self.visualize {
            clear_screen();
            println!("=== SEARCH COMPLETE ===");
            match &path {
                Some(_) => println!("{}: path found!", algorithm),
                None => println!("{}: no path found!", algorithm),
            }
            self.grid.print_grid(None);
        }

        Ok(SearchStatistics {
            algorithm,
            expansions,
            path_length: path.map(|p| p.len()),
            optimal_path_length: optimal,
            elapsed,
        })
    }

    /// Runs every algorithm on the same grid.
    pub fn run_all_algorithms(&mut self) -> Result<Vec<SearchStatistics>, SimulationError> {
        let mut results = Vec::with_capacity(Algorithm::ALL.len());
        for (i, algorithm) in Algorithm::ALL.into_iter().enumerate() {
            info!("Running algorithm {} of {}: {}", i + 1, Algorithm::ALL.len(), algorithm);
            results.push(self.run(algorithm)?);
        }
        Ok(results)
    }

    /// Print comparison results in a table.
    pub fn print_comparison_results(results: &[SearchStatistics]) {
        println!("\n=== ALGORITHM COMPARISON RESULTS ===");
        println!();
        println!(
            "{:<10} {:<8} {:<10} {:<8} {:<8} {:<12} {:<12}",
            "Algorithm", "Found", "Expanded", "Length", "Optimal", "Efficiency", "Time"
        );
        println!("{}", "-".repeat(72));

        for result in results {
            let found = if result.found() { "✓" } else { "✗" };
            let length = result
                .path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            let optimal = result
                .optimal_path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            let efficiency = result
                .efficiency()
                .map_or_else(|| "-".to_string(), |e| format!("{:.3}", e));
            println!(
                "{:<10} {:<8} {:<10} {:<8} {:<8} {:<12} {:<12}",
                result.algorithm,
                found,
                result.expansions,
                length,
                optimal,
                efficiency,
                format!("{:.2?}", result.elapsed)
            );
        }

        let found: Vec<_> = results.iter().filter(|r| r.found()).collect();
        if found.is_empty() {
            println!("\nNo algorithm found a path.");
            return;
        }

        println!("\n=== PERFORMANCE ANALYSIS ===");
        if let Some(fewest) = found.iter().min_by_key(|r| r.expansions) {
            println!("Fewest expansions: {} ({} cells)", fewest.algorithm, fewest.expansions);
        }
        for result in &found {
            if let Some(extra) = result.extra_steps().filter(|&extra| extra > 0) {
                println!("{} took {} extra steps over the shortest path", result.algorithm, extra);
            }
        }
    }
}

/// Clear the terminal screen (only used when visualization is enabled)
fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    const WALLED: &str = "\
S.#.G
..#..
..#..
..#..
.....";

    #[test]
    fn run_marks_path_and_reports_optimum() {
        let grid: Grid = WALLED.parse().unwrap();
        let mut simulation = Simulation::new(grid, 0, false);
        let stats = simulation.run(Algorithm::Bfs).unwrap();

        assert_eq!(stats.path_length, Some(12));
        assert_eq!(stats.optimal_path_length, Some(12));
        assert_eq!(stats.efficiency(), Some(1.0));
        assert_eq!(simulation.grid().get(Cell::new(4, 2)), Some(crate::grid::CellKind::Path));
        // Path cells are cleared before the next run.
        let stats = simulation.run(Algorithm::AStar).unwrap();
        assert_eq!(stats.path_length, Some(12));
    }

    #[test]
    fn edits_are_picked_up_on_the_next_run() {
        let grid: Grid = WALLED.parse().unwrap();
        let mut simulation = Simulation::new(grid, 0, false);
        simulation.grid_mut().toggle_obstacle(Cell::new(4, 2)).unwrap();

        let results = simulation.run_all_algorithms().unwrap();
        assert_eq!(results.len(), 4);
        for stats in &results {
            assert!(!stats.found(), "{}", stats.algorithm);
            assert_eq!(stats.optimal_path_length, None);
        }
    }

    #[test]
    fn missing_markers_are_reported() {
        let mut simulation = Simulation::new(Grid::new(3, 3), 0, false);
        assert!(matches!(
            simulation.run(Algorithm::Dfs),
            Err(SimulationError::MissingStart)
        ));
    }

    #[test]
    fn single_row_config_builds_a_searchable_grid() {
        let config = Config::parse_from([
            "grid_pathfinder", "--width", "3", "--height", "1", "--num-obstacles", "0",
            "--seed", "7", "--no-visualization",
        ]);
        let mut simulation = Simulation::from_config(&config).unwrap();
        let stats = simulation.run(Algorithm::Bfs).unwrap();
        assert!(stats.found());
    }

    #[test]
    fn single_cell_config_is_rejected() {
        let config = Config::parse_from([
            "grid_pathfinder", "--width", "1", "--height", "1", "--no-visualization",
        ]);
        assert!(matches!(
            Simulation::from_config(&config),
            Err(SimulationError::Grid(GridError::TooSmall { width: 1, height: 1 }))
        ));
    }
}

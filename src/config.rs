use crate::algorithms::Algorithm;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmSelection {
    Bfs,
    Dfs,
    Dijkstra,
    #[value(aliases = ["a_star", "astar"])]
    AStar,
    All,
}

impl AlgorithmSelection {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmSelection::Bfs => vec![Algorithm::Bfs],
            AlgorithmSelection::Dfs => vec![Algorithm::Dfs],
            AlgorithmSelection::Dijkstra => vec![Algorithm::Dijkstra],
            AlgorithmSelection::AStar => vec![Algorithm::AStar],
            AlgorithmSelection::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Grid pathfinding explorer", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=20))]
    pub width: u16,

    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=20))]
    pub height: u16,

    #[arg(long, default_value_t = 20)]
    pub num_obstacles: usize,

    #[arg(long, value_enum, default_value = "a-star")]
    pub algorithm: AlgorithmSelection,

    /// Seed for the random grid; a fresh one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Char map to search instead of a random grid (`.` free, `#` obstacle,
    /// `S` start, `G` goal).
    #[arg(long)]
    pub grid: Option<PathBuf>,

    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,
}

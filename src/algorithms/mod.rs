pub mod a_star;
pub mod bfs;
mod best_first;
pub mod common;
pub mod dfs;
pub mod dijkstra;

use crate::grid::Cell;
use std::fmt;
use std::str::FromStr;

pub use a_star::AStar;
pub use bfs::Bfs;
pub use common::{Expansion, SearchAlgorithm};
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "a_star",
        }
    }

    /// Whether the reported path is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Creates a fresh frontier seeded with `start`.
    pub fn create(self, start: Cell, goal: Cell) -> Box<dyn SearchAlgorithm> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new(start, goal)),
            Algorithm::Dfs => Box::new(Dfs::new(start, goal)),
            Algorithm::Dijkstra => Box::new(Dijkstra::new(start, goal)),
            Algorithm::AStar => Box::new(AStar::new(start, goal)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm {0:?}, expected one of bfs, dfs, dijkstra, a_star")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a_star" | "a-star" | "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(UnknownAlgorithm("greedy".to_string()))
        );
    }
}

use crate::algorithms::best_first::BestFirst;
use crate::algorithms::common::{Expansion, SearchAlgorithm};
use crate::engine::GridView;
use crate::grid::Cell;
use crate::path::PredecessorMap;

/// Dijkstra's algorithm: a min-heap keyed by accumulated cost.
///
/// Every step costs 1 today, so the expansion order matches a BFS layer by
/// layer, but the heap keeps room for weighted moves.
pub struct Dijkstra {
    frontier: BestFirst,
}

impl Dijkstra {
    pub fn new(start: Cell, goal: Cell) -> Self {
        Dijkstra {
            frontier: BestFirst::new(start, goal, |_, _| 0),
        }
    }

    /// Best known cost from the start, if the cell has been discovered.
    pub fn cost_to(&self, cell: Cell) -> Option<usize> {
        self.frontier.cost_to(cell)
    }
}

impl SearchAlgorithm for Dijkstra {
    fn step(&mut self, view: &GridView) -> Option<Expansion> {
        self.frontier.step(view)
    }

    fn is_done(&self) -> bool {
        self.frontier.is_done()
    }

    fn goal_reached(&self) -> bool {
        self.frontier.goal_reached()
    }

    fn came_from(&self) -> &PredecessorMap {
        self.frontier.came_from()
    }

    fn into_came_from(self: Box<Self>) -> PredecessorMap {
        self.frontier.into_came_from()
    }
}

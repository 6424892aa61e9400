use crate::algorithms::best_first::BestFirst;
use crate::algorithms::common::{Expansion, SearchAlgorithm};
use crate::engine::GridView;
use crate::grid::Cell;
use crate::path::PredecessorMap;

/// Manhattan distance; admissible and consistent on a four-connected grid
/// with unit steps.
pub fn manhattan(from: Cell, to: Cell) -> usize {
    from.manhattan(to)
}

/// A*: a min-heap keyed by `g + h` with the Manhattan heuristic.
pub struct AStar {
    frontier: BestFirst,
}

impl AStar {
    pub fn new(start: Cell, goal: Cell) -> Self {
        AStar {
            frontier: BestFirst::new(start, goal, manhattan),
        }
    }

    /// Best known `g` score, if the cell has been discovered.
    pub fn cost_to(&self, cell: Cell) -> Option<usize> {
        self.frontier.cost_to(cell)
    }
}

impl SearchAlgorithm for AStar {
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

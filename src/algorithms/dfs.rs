use crate::algorithms::common::{Expansion, SearchAlgorithm};
use crate::engine::GridView;
use crate::grid::Cell;
use crate::path::PredecessorMap;
use rustc_hash::FxHashSet;

/// Depth-first search over a LIFO stack.
///
/// Cells are marked visited when popped, not when pushed. A cell can sit on
/// the stack several times and its predecessor is whichever push came last
/// before its first pop. Every pop is reported, including the repeated pops
/// of cells that were already visited.
pub struct Dfs {
    goal: Cell,
    stack: Vec<Cell>,
    visited: FxHashSet<Cell>,
    came_from: PredecessorMap,
    found: bool,
}

impl Dfs {
    pub fn new(start: Cell, goal: Cell) -> Self {
        Dfs {
            goal,
            stack: vec![start],
            visited: FxHashSet::default(),
            came_from: PredecessorMap::new(),
            found: false,
        }
    }
}

impl SearchAlgorithm for Dfs {
    fn step(&mut self, view: &GridView) -> Option<Expansion> {
        if self.found {
            return None;
        }
        let current = self.stack.pop()?;

        if current == self.goal {
            self.found = true;
            return Some(Expansion { cell: current, is_goal: true });
        }

        if self.visited.insert(current) {
            for neighbor in view.neighbors(current) {
                if !self.visited.contains(&neighbor) {
                    self.came_from.insert(neighbor, current);
                    self.stack.push(neighbor);
                }
            }
        }

        Some(Expansion { cell: current, is_goal: false })
    }

    fn is_done(&self) -> bool {
        self.found || self.stack.is_empty()
    }

    fn goal_reached(&self) -> bool {
        self.found
    }

    fn came_from(&self) -> &PredecessorMap {
        &self.came_from
    }

    fn into_came_from(self: Box<Self>) -> PredecessorMap {
        self.came_from
    }
}

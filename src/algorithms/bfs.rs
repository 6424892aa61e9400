use crate::algorithms::common::{Expansion, SearchAlgorithm};
use crate::engine::GridView;
use crate::grid::Cell;
use crate::path::PredecessorMap;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Breadth-first search over a FIFO queue.
///
/// Cells are marked reached when enqueued, so the first writer wins and
/// every cell gets exactly one predecessor.
pub struct Bfs {
    goal: Cell,
    queue: VecDeque<Cell>,
    reached: FxHashSet<Cell>,
    came_from: PredecessorMap,
    found: bool,
}

impl Bfs {
    pub fn new(start: Cell, goal: Cell) -> Self {
        let mut reached = FxHashSet::default();
        reached.insert(start);
        Bfs {
            goal,
            queue: VecDeque::from([start]),
            reached,
            came_from: PredecessorMap::new(),
            found: false,
        }
    }
}

impl SearchAlgorithm for Bfs {
    fn step(&mut self, view: &GridView) -> Option<Expansion> {
        if self.found {
            return None;
        }
        let current = self.queue.pop_front()?;

        if current == self.goal {
            self.found = true;
            return Some(Expansion { cell: current, is_goal: true });
        }

        for neighbor in view.neighbors(current) {
            if self.reached.insert(neighbor) {
                self.came_from.insert(neighbor, current);
                self.queue.push_back(neighbor);
            }
        }

        Some(Expansion { cell: current, is_goal: false })
    }

    fn is_done(&self) -> bool {
        self.found || self.queue.is_empty()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_in_layers_with_fixed_direction_order() {
        let view = GridView::open(3, 3);
        let mut bfs = Bfs::new(Cell::new(1, 1), Cell::new(2, 2));
        let order: Vec<Cell> = std::iter::from_fn(|| bfs.step(&view))
            .map(|e| e.cell)
            .collect();
        assert_eq!(
            &order[..5],
            &[
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(1, 0),
            ]
        );
        assert_eq!(order.last(), Some(&Cell::new(2, 2)));
        assert!(bfs.goal_reached());
        assert!(bfs.is_done());
    }

    #[test]
    fn first_writer_wins() {
        let view = GridView::open(3, 3);
        let mut bfs = Bfs::new(Cell::new(0, 0), Cell::new(2, 2));
        while bfs.step(&view).is_some() {}
        // (1,1) is reachable from (0,1) and (1,0); (0,1) is expanded first.
        assert_eq!(bfs.came_from().get(Cell::new(1, 1)), Some(Cell::new(0, 1)));
    }
}

use crate::algorithms::common::Expansion;
use crate::engine::GridView;
use crate::grid::Cell;
use crate::path::PredecessorMap;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered so that `BinaryHeap` pops the lowest priority first,
/// breaking ties on the cell's row-major order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct QueueEntry {
    pub priority: usize,
    pub cell: Cell,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap behavior
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => other.cell.cmp(&self.cell),
            other => other,
        }
    }
}

/// Shared frontier for Dijkstra and A*: a min-heap keyed by `g + h` with
/// relax-on-discovery.
///
/// Entries superseded by a cheaper push stay in the heap. They are still
/// popped and reported, and expanding them again relaxes nothing because
/// their neighbors already carry costs at least as good.
pub(crate) struct BestFirst {
    goal: Cell,
    heuristic: fn(Cell, Cell) -> usize,
    open: BinaryHeap<QueueEntry>,
    cost_so_far: FxHashMap<Cell, usize>,
    came_from: PredecessorMap,
    found: bool,
}

impl BestFirst {
    pub fn new(start: Cell, goal: Cell, heuristic: fn(Cell, Cell) -> usize) -> Self {
        let mut cost_so_far = FxHashMap::default();
        cost_so_far.insert(start, 0);
        let mut open = BinaryHeap::new();
        open.push(QueueEntry {
            priority: heuristic(start, goal),
            cell: start,
        });
        BestFirst {
            goal,
            heuristic,
            open,
            cost_so_far,
            came_from: PredecessorMap::new(),
            found: false,
        }
    }

    pub fn step(&mut self, view: &GridView) -> Option<Expansion> {
        if self.found {
            return None;
        }
        let QueueEntry { cell: current, .. } = self.open.pop()?;

        if current == self.goal {
            self.found = true;
            return Some(Expansion { cell: current, is_goal: true });
        }

        let current_cost = self.cost_so_far.get(&current).copied().unwrap_or_default();
        for neighbor in view.neighbors(current) {
            let new_cost = current_cost + 1;
            let improved = self
                .cost_so_far
                .get(&neighbor)
                .map_or(true, |&known| new_cost < known);
            if improved {
                self.cost_so_far.insert(neighbor, new_cost);
                self.came_from.insert(neighbor, current);
                self.open.push(QueueEntry {
                    priority: new_cost + (self.heuristic)(neighbor, self.goal),
                    cell: neighbor,
                });
            }
        }

        Some(Expansion { cell: current, is_goal: false })
    }

    pub fn is_done(&self) -> bool {
        self.found || self.open.is_empty()
    }

    pub fn goal_reached(&self) -> bool {
        self.found
    }

    pub fn came_from(&self) -> &PredecessorMap {
        &self.came_from
    }

    pub fn into_came_from(self) -> PredecessorMap {
        self.came_from
    }

    pub fn cost_to(&self, cell: Cell) -> Option<usize> {
        self.cost_so_far.get(&cell).copied()
    }
}

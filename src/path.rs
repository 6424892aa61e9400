use crate::grid::Cell;
use rustc_hash::FxHashMap;

/// Maps each discovered cell to the cell it was reached from.
///
/// The start cell never has an entry, so the map forms a tree rooted
/// implicitly at the start. A missing goal means no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredecessorMap {
    came_from: FxHashMap<Cell, Cell>,
}

impl PredecessorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, cell: Cell, from: Cell) {
        self.came_from.insert(cell, from);
    }

    pub fn get(&self, cell: Cell) -> Option<Cell> {
        self.came_from.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.came_from.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.came_from.len()
    }

    pub fn is_empty(&self) -> bool {
        self.came_from.is_empty()
    }

    /// Iterates `(cell, predecessor)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.came_from.iter().map(|(&cell, &from)| (cell, from))
    }

    /// Walks back from `goal` to `start` and returns the path in forward
    /// order, excluding `start` and including `goal`.
    ///
    /// Returns `Some(vec![])` when `start == goal` and `None` when the goal
    /// was never reached. A chain that does not lead back to `start` within
    /// `len()` steps also yields `None`.
    pub fn reconstruct_path(&self, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        if start == goal {
            return Some(Vec::new());
        }
        if !self.contains(goal) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = goal;
        while current != start {
            if path.len() > self.len() {
                return None;
            }
            path.push(current);
            current = self.get(current)?;
        }
        path.reverse();
        Some(path)
    }
}

impl FromIterator<(Cell, Cell)> for PredecessorMap {
    fn from_iter<I: IntoIterator<Item = (Cell, Cell)>>(iter: I) -> Self {
        PredecessorMap {
            came_from: iter.into_iter().collect(),
        }
    }
}

/// Free-function form of [`PredecessorMap::reconstruct_path`].
pub fn reconstruct_path(map: &PredecessorMap, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    map.reconstruct_path(start, goal)
}

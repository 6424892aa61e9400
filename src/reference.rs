use crate::engine::GridView;
use crate::grid::Cell;
use pathfinding::prelude::astar;

/// Shortest path length in steps, computed independently with the
/// `pathfinding` crate. Used as the optimal baseline when reporting results.
pub fn optimal_path_length(view: &GridView, start: Cell, goal: Cell) -> Option<usize> {
    if !view.is_traversable(start) || !view.is_traversable(goal) {
        return None;
    }
    astar(
        &start,
        |&cell| view.neighbors(cell).map(|next| (next, 1usize)).collect::<Vec<_>>(),
        |cell| cell.manhattan(goal),
        |&cell| cell == goal,
    )
    .map(|(_, cost)| cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_is_manhattan() {
        let view = GridView::open(6, 4);
        assert_eq!(optimal_path_length(&view, Cell::new(0, 0), Cell::new(3, 5)), Some(8));
        assert_eq!(optimal_path_length(&view, Cell::new(2, 2), Cell::new(2, 2)), Some(0));
    }

    #[test]
    fn walled_off_goal_has_no_length() {
        let view = GridView::from_fn(3, 3, |cell| cell.col != 1);
        assert_eq!(optimal_path_length(&view, Cell::new(0, 0), Cell::new(0, 2)), None);
    }
}

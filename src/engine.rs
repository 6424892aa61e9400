use crate::algorithms::{Algorithm, Expansion, SearchAlgorithm};
use crate::grid::{Cell, Grid};
use crate::observer::SearchObserver;
use crate::path::PredecessorMap;
use log::{debug, trace, warn};
use thiserror::Error;

/// Up, right, down, left. Every algorithm inspects neighbors in this order,
/// which fixes the tie-break between equally good neighbors.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("search requested before the engine was configured")]
    Misconfigured,

    #[error("{role} {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("{role} {cell} is an obstacle")]
    Blocked { role: &'static str, cell: Cell },
}

/// Read-only traversability snapshot the engine searches over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    width: usize,
    height: usize,
    traversable: Vec<bool>,
}

impl GridView {
    /// Evaluates `is_traversable` once for every cell, row-major.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut is_traversable: impl FnMut(Cell) -> bool,
    ) -> Self {
        let mut traversable = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                traversable.push(is_traversable(Cell::new(row, col)));
            }
        }
        GridView {
            width,
            height,
            traversable,
        }
    }

    /// A view with no obstacles.
    pub fn open(width: usize, height: usize) -> Self {
        GridView {
            width,
            height,
            traversable: vec![true; width * height],
        }
    }

    pub fn from_grid(grid: &Grid) -> Self {
        GridView::from_fn(grid.width(), grid.height(), |cell| grid.is_traversable(cell))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.traversable[cell.row * self.width + cell.col]
    }

    fn offset(&self, cell: Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell::new(row, col);
        self.in_bounds(next).then_some(next)
    }

    /// In-bounds, traversable neighbors in [`DIRECTIONS`] order.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        DIRECTIONS
            .into_iter()
            .filter_map(move |dir| self.offset(cell, dir))
            .filter(move |&next| self.is_traversable(next))
    }
}

/// Holds the current grid snapshot and runs searches over it.
///
/// Searches borrow the engine, so `configure` cannot run while one is in
/// flight.
#[derive(Debug, Clone, Default)]
pub struct PathfindingEngine {
    view: Option<GridView>,
}

impl PathfindingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: &Grid) -> Self {
        let mut engine = Self::new();
        engine.configure_from_grid(grid);
        engine
    }

    /// Replaces the grid view with a fresh snapshot of `is_traversable`.
    pub fn configure(
        &mut self,
        width: usize,
        height: usize,
        is_traversable: impl FnMut(Cell) -> bool,
    ) {
        debug!("Configuring engine for a {}x{} grid", width, height);
        self.view = Some(GridView::from_fn(width, height, is_traversable));
    }

    pub fn configure_from_grid(&mut self, grid: &Grid) {
        self.configure(grid.width(), grid.height(), |cell| grid.is_traversable(cell));
    }

    pub fn is_configured(&self) -> bool {
        self.view.is_some()
    }

    /// `(width, height)` of the configured grid.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.view.as_ref().map(|v| (v.width, v.height))
    }

    pub fn view(&self) -> Option<&GridView> {
        self.view.as_ref()
    }

    fn validate(view: &GridView, role: &'static str, cell: Cell) -> Result<(), EngineError> {
        if !view.in_bounds(cell) {
            warn!("Rejected {} {}: out of bounds", role, cell);
            return Err(EngineError::OutOfBounds {
                role,
                cell,
                width: view.width,
                height: view.height,
            });
        }
        if !view.is_traversable(cell) {
            warn!("Rejected {} {}: obstacle", role, cell);
            return Err(EngineError::Blocked { role, cell });
        }
        Ok(())
    }

    /// Validates the endpoints and returns a search that has not expanded
    /// anything yet.
    pub fn start_search(
        &self,
        algorithm: Algorithm,
        start: Cell,
        goal: Cell,
    ) -> Result<Search<'_>, EngineError> {
        let view = self.view.as_ref().ok_or(EngineError::Misconfigured)?;
        Self::validate(view, "start", start)?;
        Self::validate(view, "goal", goal)?;

        debug!("Starting {} search from {} to {}", algorithm, start, goal);
        Ok(Search {
            view,
            algorithm,
            start,
            goal,
            frontier: algorithm.create(start, goal),
            expansions: 0,
        })
    }

    /// Runs `algorithm` to completion, reporting each expansion to `observer`.
    pub fn search(
        &self,
        algorithm: Algorithm,
        start: Cell,
        goal: Cell,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<PredecessorMap, EngineError> {
        let mut search = self.start_search(algorithm, start, goal)?;
        search.run(observer);
        Ok(search.into_predecessors())
    }

    pub fn bfs(
        &self,
        start: Cell,
        goal: Cell,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<PredecessorMap, EngineError> {
        self.search(Algorithm::Bfs, start, goal, observer)
    }

    pub fn dfs(
        &self,
        start: Cell,
        goal: Cell,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<PredecessorMap, EngineError> {
        self.search(Algorithm::Dfs, start, goal, observer)
    }

    pub fn dijkstra(
        &self,
        start: Cell,
        goal: Cell,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<PredecessorMap, EngineError> {
        self.search(Algorithm::Dijkstra, start, goal, observer)
    }

    pub fn a_star(
        &self,
        start: Cell,
        goal: Cell,
        observer: Option<&mut dyn SearchObserver>,
    ) -> Result<PredecessorMap, EngineError> {
        self.search(Algorithm::AStar, start, goal, observer)
    }
}

/// An in-flight search that advances one expansion per [`Search::step`].
pub struct Search<'e> {
    view: &'e GridView,
    algorithm: Algorithm,
    start: Cell,
    goal: Cell,
    frontier: Box<dyn SearchAlgorithm>,
    expansions: usize,
}

impl Search<'_> {
    pub fn step(&mut self) -> Option<Expansion> {
        let expansion = self.frontier.step(self.view)?;
        self.expansions += 1;
        trace!("{} expanded {} (goal: {})", self.algorithm, expansion.cell, expansion.is_goal);
        if self.frontier.is_done() {
            debug!(
                "{} finished after {} expansions, goal reached: {}",
                self.algorithm,
                self.expansions,
                self.frontier.goal_reached()
            );
        }
        Some(expansion)
    }

    /// Steps until the goal is popped or the frontier runs dry.
    pub fn run(&mut self, mut observer: Option<&mut dyn SearchObserver>) {
        while let Some(Expansion { cell, is_goal }) = self.step() {
            if let Some(observer) = observer.as_deref_mut() {
                observer.on_expand(cell, is_goal);
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.frontier.is_done()
    }

    pub fn goal_reached(&self) -> bool {
        self.frontier.goal_reached()
    }

    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        self.frontier.came_from()
    }

    pub fn into_predecessors(self) -> PredecessorMap {
        self.frontier.into_came_from()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::ExpansionRecorder;

    #[test]
    fn neighbors_follow_up_right_down_left() {
        let view = GridView::open(3, 3);
        let around: Vec<Cell> = view.neighbors(Cell::new(1, 1)).collect();
        assert_eq!(
            around,
            vec![Cell::new(0, 1), Cell::new(1, 2), Cell::new(2, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn neighbors_skip_edges_and_obstacles() {
        let view = GridView::from_fn(3, 2, |cell| cell != Cell::new(0, 1));
        let around: Vec<Cell> = view.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(around, vec![Cell::new(1, 0)]);
        let corner: Vec<Cell> = view.neighbors(Cell::new(1, 2)).collect();
        assert_eq!(corner, vec![Cell::new(0, 2), Cell::new(1, 1)]);
    }

    #[test]
    fn unconfigured_engine_is_rejected() {
        let engine = PathfindingEngine::new();
        assert!(!engine.is_configured());
        assert_eq!(
            engine.bfs(Cell::new(0, 0), Cell::new(0, 1), None),
            Err(EngineError::Misconfigured)
        );
    }

    #[test]
    fn bad_endpoints_are_rejected_before_any_expansion() {
        let mut engine = PathfindingEngine::new();
        engine.configure(3, 3, |cell| cell != Cell::new(1, 1));
        let mut recorder = ExpansionRecorder::new();

        let err = engine
            .search(Algorithm::AStar, Cell::new(0, 0), Cell::new(3, 0), Some(&mut recorder))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfBounds {
                role: "goal",
                cell: Cell::new(3, 0),
                width: 3,
                height: 3
            }
        );

        let err = engine
            .search(Algorithm::Dfs, Cell::new(1, 1), Cell::new(0, 0), Some(&mut recorder))
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::Blocked {
                role: "start",
                cell: Cell::new(1, 1)
            }
        );
        assert!(recorder.is_empty());
    }

    #[test]
    fn reconfigure_replaces_the_snapshot() {
        let mut grid: Grid = "S.G".parse().unwrap();
        let mut engine = PathfindingEngine::with_grid(&grid);
        let start = Cell::new(0, 0);
        let goal = Cell::new(0, 2);
        assert!(engine.bfs(start, goal, None).unwrap().contains(goal));

        grid.toggle_obstacle(Cell::new(0, 1)).unwrap();
        // The old snapshot is still in use until the owner re-syncs.
        assert!(engine.bfs(start, goal, None).unwrap().contains(goal));
        engine.configure_from_grid(&grid);
        assert!(!engine.bfs(start, goal, None).unwrap().contains(goal));
        assert_eq!(engine.dimensions(), Some((3, 1)));
    }

    #[test]
    fn stepping_matches_eager_search() {
        let grid: Grid = "S..#.\n.#...\n...#G".parse().unwrap();
        let engine = PathfindingEngine::with_grid(&grid);
        let start = grid.start().unwrap();
        let goal = grid.goal().unwrap();

        for algorithm in Algorithm::ALL {
            let mut recorder = ExpansionRecorder::new();
            let eager = engine.search(algorithm, start, goal, Some(&mut recorder)).unwrap();

            let mut search = engine.start_search(algorithm, start, goal).unwrap();
            assert_eq!(search.algorithm(), algorithm);
            assert_eq!((search.start(), search.goal()), (start, goal));
            let mut stepped = Vec::new();
            while !search.is_done() {
                let expansion = search.step().unwrap();
                stepped.push((expansion.cell, expansion.is_goal));
            }
            assert_eq!(search.step(), None);
            assert!(search.goal_reached());
            assert_eq!(search.expansions(), stepped.len());
            assert_eq!(stepped, recorder.expansions, "{}", algorithm);
            assert_eq!(search.into_predecessors(), eager, "{}", algorithm);
        }
    }

    #[test]
    fn closure_observer_sees_goal_last() {
        let engine = PathfindingEngine::with_grid(&Grid::new(4, 4));
        let mut seen = Vec::new();
        let mut observer = |cell: Cell, is_goal: bool| seen.push((cell, is_goal));
        engine
            .dijkstra(Cell::new(0, 0), Cell::new(3, 3), Some(&mut observer))
            .unwrap();
        assert_eq!(seen.last(), Some(&(Cell::new(3, 3), true)));
        assert_eq!(seen.iter().filter(|(_, is_goal)| *is_goal).count(), 1);
    }
}

use crate::engine::GridView;
use crate::grid::Cell;
use crate::path::PredecessorMap;

/// One frontier pop: the cell being expanded and whether it is the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expansion {
    pub cell: Cell,
    pub is_goal: bool,
}

/// A search that can be advanced one expansion at a time.
///
/// Running `step` until it returns `None` is the eager search; the engine
/// drives both modes through this trait so they cannot diverge.
pub trait SearchAlgorithm {
    /// Pops the next frontier cell, expands it and reports it. Returns
    /// `None` once the goal has been popped or the frontier is empty.
    fn step(&mut self, view: &GridView) -> Option<Expansion>;

    fn is_done(&self) -> bool;

    /// True once the goal has been popped.
    fn goal_reached(&self) -> bool;

    fn came_from(&self) -> &PredecessorMap;

    fn into_came_from(self: Box<Self>) -> PredecessorMap;
}

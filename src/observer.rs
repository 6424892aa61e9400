use crate::grid::Cell;

/// Receives every expansion a search performs, in order.
///
/// Observers are informational only. Pacing (sleeping, redrawing) is the
/// observer's business; nothing it does feeds back into the search.
pub trait SearchObserver {
    fn on_expand(&mut self, cell: Cell, is_goal: bool);
}

impl<F> SearchObserver for F
where
    F: FnMut(Cell, bool),
{
    fn on_expand(&mut self, cell: Cell, is_goal: bool) {
        self(cell, is_goal)
    }
}

/// Records the expansion sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionRecorder {
    pub expansions: Vec<(Cell, bool)>,
}

impl ExpansionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.expansions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.expansions.iter().map(|&(cell, _)| cell)
    }
}

impl SearchObserver for ExpansionRecorder {
    fn on_expand(&mut self, cell: Cell, is_goal: bool) {
        self.expansions.push((cell, is_goal));
    }
}

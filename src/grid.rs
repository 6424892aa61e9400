use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A grid location. Ordering is row-major, which is also the tie-break
/// the priority queues fall back on when two entries share a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(&self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Free,
    Obstacle,
    Start,
    Goal,
    Path,
}

impl CellKind {
    /// Everything except an obstacle can be walked through.
    pub fn is_traversable(self) -> bool {
        self != CellKind::Obstacle
    }

    pub fn to_char(self) -> char {
        match self {
            CellKind::Free => '.',
            CellKind::Obstacle => '#',
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
            CellKind::Path => '*',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(CellKind::Free),
            '#' => Some(CellKind::Obstacle),
            'S' => Some(CellKind::Start),
            'G' => Some(CellKind::Goal),
            '*' => Some(CellKind::Path),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell character {found:?} at {cell}")]
    UnknownChar { cell: Cell, found: char },

    #[error("more than one {0:?} cell")]
    DuplicateMarker(CellKind),

    #[error("cell {cell} is outside a {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("cell {0} is an obstacle")]
    Blocked(Cell),

    #[error("a {width}x{height} grid has no room for both a start and a goal")]
    TooSmall { width: usize, height: usize },
}

/// The grid owner. It holds the cell classifications the user edits; the
/// engine only ever sees a traversability snapshot taken from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellKind>>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![vec![CellKind::Free; width]; height],
        }
    }

    /// Builds a grid with a start in the top-left quadrant, a goal in the
    /// bottom-right quadrant and up to `num_obstacles` random obstacles.
    ///
    /// The quadrants share the middle row or column when a dimension is odd;
    /// the goal is redrawn until it differs from the start. Grids with fewer
    /// than two cells cannot hold both markers and are rejected.
    pub fn random(
        width: usize,
        height: usize,
        num_obstacles: usize,
        seed: Option<u64>,
    ) -> Result<Self, GridError> {
        if width.saturating_mul(height) < 2 {
            return Err(GridError::TooSmall { width, height });
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut grid = Grid::new(width, height);

        let start = Cell::new(
            rng.gen_range(0..height.div_ceil(2)),
            rng.gen_range(0..width.div_ceil(2)),
        );
        let goal = loop {
            let goal = Cell::new(
                rng.gen_range(height / 2..height),
                rng.gen_range(width / 2..width),
            );
            if goal != start {
                break goal;
            }
        };
        grid.cells[start.row][start.col] = CellKind::Start;
        grid.cells[goal.row][goal.col] = CellKind::Goal;

        let mut placed = 0;
        let mut attempts = 0;
        let num_obstacles = num_obstacles.min(width * height - 2);
        let max_attempts = num_obstacles.saturating_mul(3);
        while placed < num_obstacles && attempts < max_attempts {
            let cell = Cell::new(rng.gen_range(0..height), rng.gen_range(0..width));
            if grid.get(cell) == Some(CellKind::Free) {
                grid.cells[cell.row][cell.col] = CellKind::Obstacle;
                placed += 1;
            }
            attempts += 1;
        }

        Ok(grid)
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

    pub fn get(&self, cell: Cell) -> Option<CellKind> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.get(cell).is_some_and(CellKind::is_traversable)
    }

    fn find(&self, kind: CellKind) -> Option<Cell> {
        self.cells.iter().enumerate().find_map(|(row, line)| {
            line.iter()
                .position(|&k| k == kind)
                .map(|col| Cell::new(row, col))
        })
    }

    pub fn start(&self) -> Option<Cell> {
        self.find(CellKind::Start)
    }

    pub fn goal(&self) -> Option<Cell> {
        self.find(CellKind::Goal)
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Flips a free cell to an obstacle and back. Start and goal markers are
    /// left untouched; returns the resulting classification.
    pub fn toggle_obstacle(&mut self, cell: Cell) -> Result<CellKind, GridError> {
        self.check_bounds(cell)?;
        let slot = &mut self.cells[cell.row][cell.col];
        *slot = match *slot {
            CellKind::Free | CellKind::Path => CellKind::Obstacle,
            CellKind::Obstacle => CellKind::Free,
            other => other,
        };
        Ok(*slot)
    }

    fn place_marker(&mut self, cell: Cell, kind: CellKind) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        if self.cells[cell.row][cell.col] == CellKind::Obstacle {
            return Err(GridError::Blocked(cell));
        }
        if let Some(previous) = self.find(kind) {
            self.cells[previous.row][previous.col] = CellKind::Free;
        }
        self.cells[cell.row][cell.col] = kind;
        Ok(())
    }

    /// Moves the start marker, so at most one start exists.
    pub fn set_start(&mut self, cell: Cell) -> Result<(), GridError> {
        self.place_marker(cell, CellKind::Start)
    }

    /// Moves the goal marker, so at most one goal exists.
    pub fn set_goal(&mut self, cell: Cell) -> Result<(), GridError> {
        self.place_marker(cell, CellKind::Goal)
    }

    pub fn clear_path(&mut self) {
        for kind in self.cells.iter_mut().flatten() {
            if *kind == CellKind::Path {
                *kind = CellKind::Free;
            }
        }
    }

    /// Paints a reconstructed path. Start, goal and obstacles keep their kind.
    pub fn mark_path(&mut self, path: &[Cell]) {
        for &cell in path {
            if self.get(cell) == Some(CellKind::Free) {
                self.cells[cell.row][cell.col] = CellKind::Path;
            }
        }
    }

    /// Print a visual representation of the grid, highlighting `cursor`.
    pub fn print_grid(&self, cursor: Option<Cell>) {
        println!("Legend: S=Start, G=Goal, @=Expanding, #=Obstacle, *=Path, .=Free");

        print!("   ");
        for col in 0..self.width {
            print!("{:2}", col % 10);
        }
        println!();

        for (row, line) in self.cells.iter().enumerate() {
            print!("{:2} ", row);
            for (col, kind) in line.iter().enumerate() {
                let c = if cursor == Some(Cell::new(row, col)) {
                    '@'
                } else {
                    kind.to_char()
                };
                print!(" {}", c);
            }
            println!();
        }
        println!();
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let row: String = line.iter().map(|k| k.to_char()).collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a char map, one row per non-blank line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells: Vec<Vec<CellKind>> = Vec::new();
        let mut seen_start = false;
        let mut seen_goal = false;

        for line in s.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = cells.len();
            let mut parsed = Vec::with_capacity(line.len());
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                let kind =
                    CellKind::from_char(c).ok_or(GridError::UnknownChar { cell, found: c })?;
                let seen = match kind {
                    CellKind::Start => Some(&mut seen_start),
                    CellKind::Goal => Some(&mut seen_goal),
                    _ => None,
                };
                if let Some(seen) = seen {
                    if *seen {
                        return Err(GridError::DuplicateMarker(kind));
                    }
                    *seen = true;
                }
                parsed.push(kind);
            }
            if let Some(first) = cells.first() {
                if first.len() != parsed.len() {
                    return Err(GridError::RaggedRow {
                        row,
                        expected: first.len(),
                        found: parsed.len(),
                    });
                }
            }
            cells.push(parsed);
        }

        let width = cells.first().map(Vec::len).ok_or(GridError::Empty)?;
        Ok(Grid {
            width,
            height: cells.len(),
            cells,
        })
    }
}

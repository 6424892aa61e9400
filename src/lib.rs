pub mod algorithms;
pub mod config;
pub mod engine;
pub mod grid;
pub mod observer;
pub mod path;
pub mod reference;
pub mod simulation;
pub mod statistics;

pub use algorithms::{Algorithm, Expansion};
pub use engine::{EngineError, GridView, PathfindingEngine, Search};
pub use grid::{Cell, CellKind, Grid, GridError};
pub use observer::{ExpansionRecorder, SearchObserver};
pub use path::{reconstruct_path, PredecessorMap};

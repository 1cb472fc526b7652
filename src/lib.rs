//! A* solver for "Rush Hour" style sliding-vehicle puzzles.
//!
//! A puzzle is an N×N grid of straight vehicles that can only slide along
//! their own axis. The goal is to bring the target vehicle `X` to the right
//! edge of the grid. [`solve`] returns the sequence of states from the initial
//! layout to the goal, one single-cell slide apart, or an empty path when the
//! puzzle cannot be solved.

pub mod board;
pub mod config;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod key;
pub mod moves;
pub mod playback;
pub mod puzzle;
pub mod search;

pub use board::{Orientation, State, Vehicle};
pub use config::SolverConfig;
pub use error::{ParseError, PathError, PuzzleError, SolveError};
pub use key::StateKey;
pub use playback::{move_log, Direction, Step};
pub use puzzle::Puzzle;
pub use search::{solve, solve_shortest, SearchStats, Solution, Solver};

/// Id of the vehicle that has to reach the right edge.
pub const TARGET_ID: &str = "X";

pub const MIN_GRID_SIZE: usize = 4;

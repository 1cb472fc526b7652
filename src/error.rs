use std::sync::Arc;

use thiserror::Error;

/// The initial layout handed to the solver is not a legal puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("grid size {0} is smaller than the minimum of {min}", min = crate::MIN_GRID_SIZE)]
    GridTooSmall(usize),
    #[error("no target vehicle `{}` on the board", crate::TARGET_ID)]
    MissingTarget,
    #[error("target vehicle `{}` must be horizontal", crate::TARGET_ID)]
    VerticalTarget,
    #[error("vehicle id `{0}` appears more than once")]
    DuplicateId(Arc<str>),
    #[error("vehicle `{0}` has zero length")]
    ZeroLength(Arc<str>),
    #[error("vehicle `{id}` extends outside the {size}x{size} grid")]
    OutOfBounds { id: Arc<str>, size: usize },
    #[error("vehicles `{0}` and `{1}` overlap")]
    Overlap(Arc<str>, Arc<str>),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("invalid puzzle: {0}")]
    PuzzleInvalid(#[from] PuzzleError),
    #[error("search stopped after expanding {expanded} states (budget exhausted)")]
    BudgetExhausted { expanded: usize },
    #[error("search cancelled after expanding {expanded} states")]
    Cancelled { expanded: usize },
}

/// Failure to read a puzzle from its text or JSON form.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("puzzle text is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("whitespace inside the grid at row {row}, column {col}")]
    Whitespace { row: usize, col: usize },
    #[error("vehicle `{0}` is a single cell")]
    SingleCell(char),
    #[error("vehicle `{0}` is not a straight contiguous run of cells")]
    NotStraight(char),
    #[error("malformed JSON puzzle: {0}")]
    Json(#[from] serde_json::Error),
}

/// A solution path that does not consist of single-cell slides.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("step {step}: no vehicle moved")]
    NoMove { step: usize },
    #[error("step {step}: more than one vehicle moved")]
    MultipleMoves { step: usize },
    #[error("step {step}: vehicle `{id}` did not slide by one cell along its axis")]
    IllegalSlide { step: usize, id: Arc<str> },
    #[error("step {step}: the set of vehicles changed")]
    VehiclesChanged { step: usize },
}

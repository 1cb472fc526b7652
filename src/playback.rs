//! Turning a solution path back into a list of slides.

use std::fmt::{self, Display};
use std::sync::Arc;

use itertools::Itertools;

use crate::board::{Orientation, State};
use crate::error::PathError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

/// One slide of one vehicle by one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: Arc<str>,
    pub direction: Direction,
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.direction)
    }
}

/// `Some(true)` for one step up the axis, `Some(false)` for one step down.
fn shift(from: usize, to: usize) -> Option<bool> {
    if from.checked_add(1) == Some(to) {
        Some(true)
    } else if to.checked_add(1) == Some(from) {
        Some(false)
    } else {
        None
    }
}

fn diff(step: usize, before: &State, after: &State) -> Result<Step, PathError> {
    if before.vehicles().len() != after.vehicles().len() {
        return Err(PathError::VehiclesChanged { step });
    }

    let mut moved = None;
    for old in before.vehicles() {
        let new = after.get(&old.id).ok_or(PathError::VehiclesChanged { step })?;
        if new == old {
            continue;
        }
        if moved.is_some() {
            return Err(PathError::MultipleMoves { step });
        }
        moved = Some((old, new));
    }

    let (old, new) = moved.ok_or(PathError::NoMove { step })?;
    let illegal = || PathError::IllegalSlide {
        step,
        id: old.id.clone(),
    };
    if new.length != old.length || new.orientation != old.orientation {
        return Err(illegal());
    }

    let direction = match old.orientation {
        Orientation::Horizontal if new.row == old.row => match shift(old.col, new.col) {
            Some(true) => Direction::Right,
            Some(false) => Direction::Left,
            None => return Err(illegal()),
        },
        Orientation::Vertical if new.col == old.col => match shift(old.row, new.row) {
            Some(true) => Direction::Down,
            Some(false) => Direction::Up,
            None => return Err(illegal()),
        },
        _ => return Err(illegal()),
    };

    Ok(Step {
        id: old.id.clone(),
        direction,
    })
}

/// One [`Step`] per consecutive pair of states. Vehicles are matched by id, so
/// the states need not list them in the same order.
pub fn move_log(path: &[State]) -> Result<Vec<Step>, PathError> {
    path.iter()
        .tuple_windows()
        .enumerate()
        .map(|(ix, (before, after))| diff(ix + 1, before, after))
        .collect()
}

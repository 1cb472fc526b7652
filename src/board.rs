//! Vehicles, states and the legality predicates over them.

use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display, Write};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::{MIN_GRID_SIZE, TARGET_ID};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

/// A vehicle anchored at its top-left cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Arc<str>,
    pub row: usize,
    pub col: usize,
    pub length: usize,
    #[serde(rename = "dir")]
    pub orientation: Orientation,
}

impl Vehicle {
    pub fn new(
        id: impl Into<Arc<str>>,
        row: usize,
        col: usize,
        length: usize,
        orientation: Orientation,
    ) -> Vehicle {
        Vehicle {
            id: id.into(),
            row,
            col,
            length,
            orientation,
        }
    }

    pub fn horizontal(id: impl Into<Arc<str>>, row: usize, col: usize, length: usize) -> Vehicle {
        Vehicle::new(id, row, col, length, Orientation::Horizontal)
    }

    pub fn vertical(id: impl Into<Arc<str>>, row: usize, col: usize, length: usize) -> Vehicle {
        Vehicle::new(id, row, col, length, Orientation::Vertical)
    }

    pub fn is_target(&self) -> bool {
        &*self.id == TARGET_ID
    }

    /// Cells covered by the vehicle, from the anchor outwards. The run stops
    /// short at `usize::MAX`, so only in-bounds vehicles are fully listed.
    #[auto_enums::auto_enum(Iterator)]
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col) = (self.row, self.col);
        match self.orientation {
            Orientation::Horizontal => (col..col.saturating_add(self.length)).map(move |c| (row, c)),
            Orientation::Vertical => (row..row.saturating_add(self.length)).map(move |r| (r, col)),
        }
    }

    pub fn occupies_cell(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => row == self.row && col >= self.col && col - self.col < self.length,
            Orientation::Vertical => col == self.col && row >= self.row && row - self.row < self.length,
        }
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        if self.length == 0 || self.length > size {
            return false;
        }

        match self.orientation {
            Orientation::Horizontal => self.row < size && self.col <= size - self.length,
            Orientation::Vertical => self.col < size && self.row <= size - self.length,
        }
    }

    /// The same vehicle with its anchor moved; nothing is checked here.
    pub(crate) fn moved_to(&self, row: usize, col: usize) -> Vehicle {
        Vehicle {
            id: self.id.clone(),
            row,
            col,
            length: self.length,
            orientation: self.orientation,
        }
    }
}

/// An immutable snapshot of every vehicle on the board.
///
/// Vehicle order is whatever the state was built with and is kept across
/// moves. Two states holding the same placements in a different order are
/// different values here but share a [`crate::StateKey`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    vehicles: Vec<Vehicle>,
}

impl State {
    pub fn new(vehicles: impl IntoIterator<Item = Vehicle>) -> State {
        State {
            vehicles: vehicles.into_iter().collect(),
        }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &*v.id == id)
    }

    pub fn target(&self) -> Option<&Vehicle> {
        self.get(TARGET_ID)
    }

    /// The target's rightmost cell sits in the last column.
    pub fn is_goal(&self, size: usize) -> bool {
        self.target()
            .map_or(false, |x| x.col.checked_add(x.length) == Some(size))
    }

    /// A copy of this state with vehicle `index` replaced by `vehicle`.
    pub(crate) fn with_vehicle(&self, index: usize, vehicle: Vehicle) -> State {
        let mut vehicles = self.vehicles.clone();
        vehicles[index] = vehicle;
        State { vehicles }
    }

    /// First pair of vehicles found sharing a cell.
    pub fn first_overlap(&self) -> Option<(&Vehicle, &Vehicle)> {
        let mut owners: HashMap<(usize, usize), usize> = HashMap::new();
        for (ix, vehicle) in self.vehicles.iter().enumerate() {
            for cell in vehicle.cells() {
                if let Some(&other) = owners.get(&cell) {
                    return Some((&self.vehicles[other], vehicle));
                }
                owners.insert(cell, ix);
            }
        }

        None
    }

    pub fn overlaps(&self) -> bool {
        self.first_overlap().is_some()
    }

    /// Checks everything the search relies on before it starts.
    pub fn validate(&self, size: usize) -> Result<(), PuzzleError> {
        if size < MIN_GRID_SIZE {
            return Err(PuzzleError::GridTooSmall(size));
        }

        let mut seen = HashSet::new();
        for vehicle in &self.vehicles {
            if !seen.insert(&vehicle.id) {
                return Err(PuzzleError::DuplicateId(vehicle.id.clone()));
            }
            if vehicle.length == 0 {
                return Err(PuzzleError::ZeroLength(vehicle.id.clone()));
            }
            if !vehicle.in_bounds(size) {
                return Err(PuzzleError::OutOfBounds {
                    id: vehicle.id.clone(),
                    size,
                });
            }
        }

        if let Some((a, b)) = self.first_overlap() {
            return Err(PuzzleError::Overlap(a.id.clone(), b.id.clone()));
        }

        match self.target() {
            None => Err(PuzzleError::MissingTarget),
            Some(x) if x.orientation == Orientation::Vertical => Err(PuzzleError::VerticalTarget),
            Some(_) => Ok(()),
        }
    }

    /// Text-grid rendering, `.` for empty cells and the first character of
    /// each id elsewhere. Cells outside the grid are not drawn.
    pub fn display(&self, size: usize) -> Rendered<'_> {
        Rendered { state: self, size }
    }
}

pub struct Rendered<'a> {
    state: &'a State,
    size: usize,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut grid = vec![EMPTY; self.size * self.size];
        for vehicle in self.state.vehicles() {
            let c = vehicle.id.chars().next().unwrap_or('?');
            for (row, col) in vehicle.cells() {
                if row < self.size && col < self.size {
                    grid[row * self.size + col] = c;
                }
            }
        }

        let mut first = true;
        for line in grid.chunks(self.size.max(1)) {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for &c in line {
                f.write_char(c)?;
            }
        }

        Ok(())
    }
}

pub(crate) const EMPTY: char = '.';

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn occupied_cells_follow_orientation() {
        let h = Vehicle::horizontal("A", 1, 2, 3);
        assert_eq!(h.cells().collect::<Vec<_>>(), vec![(1, 2), (1, 3), (1, 4)]);
        assert!(h.occupies_cell(1, 4));
        assert!(!h.occupies_cell(1, 5));
        assert!(!h.occupies_cell(2, 2));

        let v = Vehicle::vertical("B", 0, 5, 2);
        assert_eq!(v.cells().collect::<Vec<_>>(), vec![(0, 5), (1, 5)]);
        assert!(v.occupies_cell(1, 5));
        assert!(!v.occupies_cell(2, 5));
    }

    #[test]
    fn bounds_check_uses_far_end() {
        assert!(Vehicle::horizontal("X", 2, 4, 2).in_bounds(6));
        assert!(!Vehicle::horizontal("X", 2, 5, 2).in_bounds(6));
        assert!(!Vehicle::vertical("A", 4, 0, 3).in_bounds(6));
        assert!(!Vehicle::vertical("A", 0, 6, 2).in_bounds(6));
        assert!(!Vehicle::vertical("A", 0, 0, 0).in_bounds(6));
    }

    #[test]
    fn huge_anchors_do_not_overflow() {
        let far = Vehicle::vertical("A", usize::MAX, 3, 2);
        assert!(!far.in_bounds(4));
        assert!(far.occupies_cell(usize::MAX, 3));
        assert!(!far.occupies_cell(0, 3));
        assert_eq!(far.cells().count(), 0);
        assert!(!Vehicle::horizontal("B", 0, usize::MAX - 1, usize::MAX).in_bounds(4));

        let state = State::new([Vehicle::horizontal("X", 1, 0, 2), far]);
        assert_eq!(
            state.validate(4),
            Err(PuzzleError::OutOfBounds {
                id: "A".into(),
                size: 4
            })
        );
        assert!(!State::new([Vehicle::horizontal("X", 1, usize::MAX, 2)]).is_goal(4));
    }

    #[test]
    fn overlap_detection() {
        let clear = State::new([Vehicle::horizontal("X", 1, 0, 2), Vehicle::vertical("A", 0, 2, 3)]);
        assert!(!clear.overlaps());

        let crossing = State::new([Vehicle::horizontal("X", 1, 1, 2), Vehicle::vertical("A", 0, 2, 3)]);
        let (a, b) = crossing.first_overlap().unwrap();
        assert_eq!((&*a.id, &*b.id), ("X", "A"));
    }

    #[test]
    fn validation_errors() {
        let x = Vehicle::horizontal("X", 1, 0, 2);

        assert_eq!(State::new([x.clone()]).validate(3), Err(PuzzleError::GridTooSmall(3)));
        assert_eq!(
            State::new([Vehicle::vertical("A", 0, 0, 2)]).validate(4),
            Err(PuzzleError::MissingTarget)
        );
        assert_eq!(
            State::new([Vehicle::vertical("X", 0, 0, 2)]).validate(4),
            Err(PuzzleError::VerticalTarget)
        );
        assert_eq!(
            State::new([x.clone(), Vehicle::vertical("X", 2, 3, 2)]).validate(4),
            Err(PuzzleError::DuplicateId("X".into()))
        );
        assert_eq!(
            State::new([x.clone(), Vehicle::vertical("A", 3, 3, 2)]).validate(4),
            Err(PuzzleError::OutOfBounds {
                id: "A".into(),
                size: 4
            })
        );
        assert_eq!(
            State::new([x.clone(), Vehicle::vertical("A", 0, 1, 3)]).validate(4),
            Err(PuzzleError::Overlap("X".into(), "A".into()))
        );
        assert_eq!(State::new([x]).validate(4), Ok(()));
    }

    #[test]
    fn goal_predicate() {
        assert!(State::new([Vehicle::horizontal("X", 1, 2, 2)]).is_goal(4));
        assert!(!State::new([Vehicle::horizontal("X", 1, 1, 2)]).is_goal(4));
        assert!(!State::new([Vehicle::horizontal("A", 1, 2, 2)]).is_goal(4));
    }

    #[test]
    fn renders_grid() {
        let state = State::new([Vehicle::horizontal("X", 1, 0, 2), Vehicle::vertical("A", 0, 3, 3)]);
        assert_eq!(state.display(4).to_string(), "...A\nXX.A\n...A\n....");
    }
}

//! Single-cell slides and successor generation.

use smallvec::SmallVec;

use crate::board::{Orientation, State};

/// Successor buffer; a standard 6x6 card has at most 16 vehicles.
pub type Successors = SmallVec<[State; 16]>;

/// Direction of a slide along a vehicle's own axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Towards higher row/column.
    Forward,
    /// Towards lower row/column.
    Backward,
}

const SHIFTS: [Shift; 2] = [Shift::Forward, Shift::Backward];

/// Which vehicle owns each cell of the grid.
struct Occupancy {
    size: usize,
    cells: Vec<Option<usize>>,
}

impl Occupancy {
    fn of(state: &State, size: usize) -> Occupancy {
        let mut cells = vec![None; size * size];
        for (ix, vehicle) in state.vehicles().iter().enumerate() {
            for (row, col) in vehicle.cells() {
                if row < size && col < size {
                    cells[row * size + col] = Some(ix);
                }
            }
        }

        Occupancy { size, cells }
    }

    /// Whether `owner` may stand on (row, col).
    fn free_for(&self, row: usize, col: usize, owner: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }

        match self.cells[row * self.size + col] {
            None => true,
            Some(ix) => ix == owner,
        }
    }
}

fn slide_with(occupancy: &Occupancy, state: &State, index: usize, shift: Shift) -> Option<State> {
    let vehicle = state.vehicles().get(index)?;
    let (row, col) = match (vehicle.orientation, shift) {
        (Orientation::Horizontal, Shift::Forward) => (vehicle.row, vehicle.col.checked_add(1)?),
        (Orientation::Horizontal, Shift::Backward) => (vehicle.row, vehicle.col.checked_sub(1)?),
        (Orientation::Vertical, Shift::Forward) => (vehicle.row.checked_add(1)?, vehicle.col),
        (Orientation::Vertical, Shift::Backward) => (vehicle.row.checked_sub(1)?, vehicle.col),
    };

    let moved = vehicle.moved_to(row, col);
    if moved.cells().all(|(r, c)| occupancy.free_for(r, c, index)) {
        Some(state.with_vehicle(index, moved))
    } else {
        None
    }
}

/// Slides vehicle `index` one cell, if that is legal on a `size` grid.
pub fn slide(state: &State, size: usize, index: usize, shift: Shift) -> Option<State> {
    slide_with(&Occupancy::of(state, size), state, index, shift)
}

/// Every state one slide away, in vehicle order, forward before backward.
pub fn successors(state: &State, size: usize) -> Successors {
    let occupancy = Occupancy::of(state, size);
    let mut out = Successors::new();
    for index in 0..state.vehicles().len() {
        for shift in SHIFTS {
            if let Some(next) = slide_with(&occupancy, state, index, shift) {
                out.push(next);
            }
        }
    }

    out
}

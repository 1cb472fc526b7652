//! Loading puzzles from text grids and JSON records.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Orientation, State, Vehicle, EMPTY};
use crate::error::{ParseError, SolveError};

/// A grid size together with the starting layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub size: usize,
    pub state: State,
}

#[derive(Serialize, Deserialize)]
struct PuzzleRecord {
    size: usize,
    vehicles: Vec<Vehicle>,
}

impl Puzzle {
    pub fn new(size: usize, state: State) -> Puzzle {
        Puzzle { size, state }
    }

    /// Reads `{"size": N, "vehicles": [{"id", "row", "col", "length", "dir"}]}`
    /// where `dir` is `"H"` or `"V"`.
    pub fn from_json(json: &str) -> Result<Puzzle, ParseError> {
        let record: PuzzleRecord = serde_json::from_str(json)?;
        Ok(Puzzle::new(record.size, State::new(record.vehicles)))
    }

    pub fn to_json(&self) -> Result<String, ParseError> {
        let record = PuzzleRecord {
            size: self.size,
            vehicles: self.state.vehicles().to_vec(),
        };
        Ok(serde_json::to_string_pretty(&record)?)
    }

    pub fn solve(&self) -> Result<Vec<State>, SolveError> {
        crate::solve(self.size, &self.state)
    }
}

/// Parses a square grid: `.` is empty, any other non-whitespace character is
/// a cell of the vehicle with that id. Leading and trailing blank lines and
/// whitespace around each row are ignored.
impl FromStr for Puzzle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s.trim().lines().map(|row| row.trim().chars().collect()).collect();
        let size = rows.len();
        if size == 0 || rows[0].is_empty() {
            return Err(ParseError::Empty);
        }

        // (id, cells) in order of first appearance, cells in row-major order
        let mut runs: Vec<(char, Vec<(usize, usize)>)> = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(ParseError::RaggedRow {
                    row: r,
                    found: row.len(),
                    expected: size,
                });
            }

            for (c, &ch) in row.iter().enumerate() {
                if ch == EMPTY {
                    continue;
                }
                if ch.is_whitespace() {
                    return Err(ParseError::Whitespace { row: r, col: c });
                }

                match runs.iter_mut().find(|(id, _)| *id == ch) {
                    Some((_, cells)) => cells.push((r, c)),
                    None => runs.push((ch, vec![(r, c)])),
                }
            }
        }

        let vehicles = runs
            .into_iter()
            .map(|(id, cells)| vehicle_from_cells(id, &cells))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Puzzle::new(size, State::new(vehicles)))
    }
}

fn vehicle_from_cells(id: char, cells: &[(usize, usize)]) -> Result<Vehicle, ParseError> {
    let (row, col) = cells[0];
    if cells.len() < 2 {
        return Err(ParseError::SingleCell(id));
    }

    let orientation = if cells[1] == (row, col + 1) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };

    let vehicle = Vehicle::new(id.to_string(), row, col, cells.len(), orientation);
    if vehicle.cells().eq(cells.iter().copied()) {
        Ok(vehicle)
    } else {
        Err(ParseError::NotStraight(id))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.display(self.size).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CARD: &str = "
......
..A...
XXA...
...BBB
......
......
";

    #[test]
    fn parses_grid() {
        let puzzle: Puzzle = CARD.parse().unwrap();
        assert_eq!(puzzle.size, 6);
        assert_eq!(
            puzzle.state,
            State::new([
                Vehicle::vertical("A", 1, 2, 2),
                Vehicle::horizontal("X", 2, 0, 2),
                Vehicle::horizontal("B", 3, 3, 3),
            ])
        );
        assert_eq!(puzzle.to_string(), CARD.trim());
    }

    #[test]
    fn rejects_malformed_grids() {
        assert!(matches!("".parse::<Puzzle>(), Err(ParseError::Empty)));
        assert!(matches!(
            "....\n...\n....\n....".parse::<Puzzle>(),
            Err(ParseError::RaggedRow {
                row: 1,
                found: 3,
                expected: 4
            })
        ));
        assert!(matches!(
            "....\n.A..\n....\n....".parse::<Puzzle>(),
            Err(ParseError::SingleCell('A'))
        ));
        assert!(matches!(
            "AA..\n.A..\n....\n....".parse::<Puzzle>(),
            Err(ParseError::NotStraight('A'))
        ));
        assert!(matches!(
            "A.A.\n....\n....\n....".parse::<Puzzle>(),
            Err(ParseError::NotStraight('A'))
        ));
        assert!(matches!(
            "....\nXX .\n....\n....".parse::<Puzzle>(),
            Err(ParseError::Whitespace { row: 1, col: 2 })
        ));
        assert!(matches!(
            "....\nXX\t.\n....\n....".parse::<Puzzle>(),
            Err(ParseError::Whitespace { row: 1, col: 2 })
        ));
    }

    #[test]
    fn rows_may_be_indented() {
        let puzzle: Puzzle = "  ....\n  XX..\n  ....\n  ....  ".parse().unwrap();
        assert_eq!(puzzle.state, State::new([Vehicle::horizontal("X", 1, 0, 2)]));
    }

    #[test]
    fn json_matches_grid() {
        let json = r#"{
            "size": 6,
            "vehicles": [
                { "id": "A", "row": 1, "col": 2, "length": 2, "dir": "V" },
                { "id": "X", "row": 2, "col": 0, "length": 2, "dir": "H" },
                { "id": "B", "row": 3, "col": 3, "length": 3, "dir": "H" }
            ]
        }"#;
        let from_json = Puzzle::from_json(json).unwrap();
        assert_eq!(from_json, CARD.parse::<Puzzle>().unwrap());

        let again = Puzzle::from_json(&from_json.to_json().unwrap()).unwrap();
        assert_eq!(again, from_json);
    }

    #[test]
    fn far_away_anchor_is_out_of_bounds() {
        let json = r#"{
            "size": 4,
            "vehicles": [
                { "id": "X", "row": 1, "col": 0, "length": 2, "dir": "H" },
                { "id": "A", "row": 18446744073709551615, "col": 3, "length": 2, "dir": "V" }
            ]
        }"#;
        let puzzle = Puzzle::from_json(json).unwrap();
        assert_eq!(
            puzzle.solve(),
            Err(SolveError::PuzzleInvalid(crate::PuzzleError::OutOfBounds {
                id: "A".into(),
                size: 4
            }))
        );
    }

    #[test]
    fn bad_json() {
        let err = Puzzle::from_json(r#"{"size": 6, "vehicles": [{"id": "X", "dir": "D"}]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}

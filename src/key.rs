use std::fmt::{self, Display};

use itertools::Itertools;

use crate::board::State;

/// Order-independent identity of a [`State`]: `id:row,col` entries sorted by
/// id and joined with `|`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateKey(String);

impl StateKey {
    pub fn of(state: &State) -> StateKey {
        let key = state
            .vehicles()
            .iter()
            .map(|v| (&v.id, v.row, v.col))
            .sorted()
            .map(|(id, row, col)| format!("{}:{},{}", id, row, col))
            .join("|");

        StateKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&State> for StateKey {
    fn from(state: &State) -> Self {
        StateKey::of(state)
    }
}

impl Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use crate::board::{Orientation, State};

/// Distance of the target from the right edge plus one per vertical vehicle
/// standing in its row ahead of it.
///
/// Each blocker counts once however far it has to travel, so this may both
/// under- and overestimate; it is not admissible.
pub fn estimate(state: &State, size: usize) -> usize {
    let target = match state.target() {
        Some(x) => x,
        None => return 0,
    };

    let front = target.col.saturating_add(target.length);
    let blockers = state
        .vehicles()
        .iter()
        .filter(|v| !v.is_target())
        .filter(|v| v.orientation == Orientation::Vertical && v.col >= front)
        .filter(|v| v.row <= target.row && target.row - v.row < v.length)
        .count();

    size.saturating_sub(front) + blockers
}

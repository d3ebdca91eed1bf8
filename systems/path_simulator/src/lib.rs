#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure path reconstruction from edge-count vectors.
//!
//! Given a start room and the number of times each camera should fire, the
//! simulator greedily walks the hallway graph, consuming one count per
//! traversal, and reports the rooms the walker visits. The only decision
//! point is the branching room [`Room::C`], where the tie-break avoids
//! stranding the walker in [`Room::D`] once camera C5 is exhausted.

use hallways_core::{EdgeCountVector, Room, RoomGraph, TransitionId};

/// Maximum number of traversals a single simulation performs.
pub const STEP_LIMIT: usize = 1000;

/// Walk reconstructed from an edge-count vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedPath {
    rooms: Vec<Room>,
    transitions: Vec<TransitionId>,
    truncated: bool,
}

impl SimulatedPath {
    /// Rooms visited in order, starting with the start room.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Hallways taken in order; one shorter than [`SimulatedPath::rooms`].
    #[must_use]
    pub fn transitions(&self) -> &[TransitionId] {
        &self.transitions
    }

    /// Room the walker finishes in.
    #[must_use]
    pub fn end(&self) -> Room {
        self.rooms.last().copied().unwrap_or(Room::A)
    }

    /// Whether the walk stopped at [`STEP_LIMIT`] while traversals remained.
    ///
    /// A truncated path is still a legitimate, merely partial, walk.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.truncated
    }

    /// Consumes the path, yielding the visited rooms.
    #[must_use]
    pub fn into_rooms(self) -> Vec<Room> {
        self.rooms
    }
}

/// Reconstructs the walk a player would trace from `start` using `counts`.
///
/// The function is deterministic and side-effect free. Counters `<= 0` are
/// treated as exhausted.
#[must_use]
pub fn simulate(start: Room, counts: &EdgeCountVector) -> SimulatedPath {
    let graph = RoomGraph;
    let mut remaining = *counts;
    let mut rooms = vec![start];
    let mut transitions = Vec::new();
    let mut current = start;

    while transitions.len() < STEP_LIMIT {
        let Some(next) = next_transition(&graph, current, &remaining) else {
            return SimulatedPath {
                rooms,
                transitions,
                truncated: false,
            };
        };

        remaining.increment(next, -1);
        current = graph.transition(next).to;
        rooms.push(current);
        transitions.push(next);
    }

    let truncated = next_transition(&graph, current, &remaining).is_some();
    SimulatedPath {
        rooms,
        transitions,
        truncated,
    }
}

fn next_transition(
    graph: &RoomGraph,
    current: Room,
    remaining: &EdgeCountVector,
) -> Option<TransitionId> {
    if current == Room::C {
        return branch_from_c(remaining);
    }

    graph
        .transitions_from(current)
        .map(|transition| transition.id)
        .find(|&id| remaining.has_remaining(id))
}

// Prefer C->A when C->D is exhausted, or when D->A is exhausted and A or B
// still have work; otherwise take C->D.
fn branch_from_c(remaining: &EdgeCountVector) -> Option<TransitionId> {
    let to_d = remaining.has_remaining(TransitionId::C_TO_D);
    let to_a = remaining.has_remaining(TransitionId::C_TO_A);
    let d_exhausted = !remaining.has_remaining(TransitionId::D_TO_A);
    let work_from_a = remaining.has_remaining(TransitionId::A_TO_B)
        || remaining.has_remaining(TransitionId::B_TO_C);

    if to_a && (!to_d || (d_exhausted && work_from_a)) {
        Some(TransitionId::C_TO_A)
    } else if to_d {
        Some(TransitionId::C_TO_D)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::branch_from_c;
    use hallways_core::{EdgeCountVector, TransitionId};

    #[test]
    fn branch_prefers_d_while_d_can_return() {
        let counts = EdgeCountVector::new([1, 1, 1, 1, 1]);
        assert_eq!(branch_from_c(&counts), Some(TransitionId::C_TO_D));
    }

    #[test]
    fn branch_falls_back_to_d_without_work_from_a() {
        let counts = EdgeCountVector::new([0, 0, 1, 1, 0]);
        assert_eq!(branch_from_c(&counts), Some(TransitionId::C_TO_D));
    }

    #[test]
    fn branch_stops_when_both_exits_are_exhausted() {
        let counts = EdgeCountVector::new([3, 3, 0, -1, 3]);
        assert_eq!(branch_from_c(&counts), None);
    }
}

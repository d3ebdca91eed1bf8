//! Static room graph shared by every level.
//!
//! The hallways connect four rooms through five directed, camera-instrumented
//! transitions. Every room has exactly one outgoing hallway except
//! [`Room::C`], which branches towards [`Room::D`] and back to [`Room::A`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rooms in the hallway graph.
pub const ROOM_COUNT: usize = 4;

/// Number of directed transitions (and therefore cameras) in the graph.
pub const TRANSITION_COUNT: usize = 5;

/// One of the four rooms connected by the hallways.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Room {
    /// Art room, where every level starts.
    A,
    /// Biology room.
    B,
    /// Civics room, the only branching room.
    C,
    /// Drama room.
    D,
}

impl Room {
    /// All rooms in index order.
    pub const ALL: [Room; ROOM_COUNT] = [Room::A, Room::B, Room::C, Room::D];

    /// Zero-based index of the room, aligned with [`Room::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Resolves a room from its single-letter label, ignoring case.
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter.trim() {
            "A" | "a" => Some(Self::A),
            "B" | "b" => Some(Self::B),
            "C" | "c" => Some(Self::C),
            "D" | "d" => Some(Self::D),
            _ => None,
        }
    }

    /// Single-letter label shown on the board.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Subject name painted on the room.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "Art",
            Self::B => "Biology",
            Self::C => "Civics",
            Self::D => "Drama",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Identifier of a transition, equal to the index of the camera that counts it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionId(u8);

impl TransitionId {
    /// Camera C1, hallway A to B.
    pub const A_TO_B: Self = Self(0);
    /// Camera C2, hallway B to C.
    pub const B_TO_C: Self = Self(1);
    /// Camera C3, hallway C to D.
    pub const C_TO_D: Self = Self(2);
    /// Camera C4, the diagonal hallway C to A.
    pub const C_TO_A: Self = Self(3);
    /// Camera C5, hallway D to A.
    pub const D_TO_A: Self = Self(4);

    /// All transitions in counter order.
    pub const ALL: [TransitionId; TRANSITION_COUNT] = [
        Self::A_TO_B,
        Self::B_TO_C,
        Self::C_TO_D,
        Self::C_TO_A,
        Self::D_TO_A,
    ];

    /// Resolves a transition from its zero-based counter index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < TRANSITION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based counter index of the transition.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Camera label (`C1` through `C5`) shown next to the counter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            0 => "C1",
            1 => "C2",
            2 => "C3",
            3 => "C4",
            _ => "C5",
        }
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Directed hallway between two rooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Room the walker leaves.
    pub from: Room,
    /// Room the walker enters.
    pub to: Room,
    /// Camera counting traversals of this hallway.
    pub id: TransitionId,
}

const TRANSITIONS: [Transition; TRANSITION_COUNT] = [
    Transition {
        from: Room::A,
        to: Room::B,
        id: TransitionId::A_TO_B,
    },
    Transition {
        from: Room::B,
        to: Room::C,
        id: TransitionId::B_TO_C,
    },
    Transition {
        from: Room::C,
        to: Room::D,
        id: TransitionId::C_TO_D,
    },
    Transition {
        from: Room::C,
        to: Room::A,
        id: TransitionId::C_TO_A,
    },
    Transition {
        from: Room::D,
        to: Room::A,
        id: TransitionId::D_TO_A,
    },
];

/// Read-only view of the fixed hallway table.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoomGraph;

impl RoomGraph {
    /// Every transition in counter order.
    #[must_use]
    pub const fn transitions(&self) -> &'static [Transition; TRANSITION_COUNT] {
        &TRANSITIONS
    }

    /// Transition counted by the provided camera.
    #[must_use]
    pub const fn transition(&self, id: TransitionId) -> Transition {
        TRANSITIONS[id.index()]
    }

    /// Outgoing transitions of `room`, in counter order.
    pub fn transitions_from(&self, room: Room) -> impl Iterator<Item = Transition> {
        TRANSITIONS
            .into_iter()
            .filter(move |transition| transition.from == room)
    }

    /// Reports whether the walker standing in `room` may take `id`.
    #[must_use]
    pub fn leaves(&self, room: Room, id: TransitionId) -> bool {
        self.transition(id).from == room
    }
}

#[cfg(test)]
mod tests {
    use super::{Room, RoomGraph, TransitionId, TRANSITION_COUNT};

    #[test]
    fn every_room_has_an_exit() {
        let graph = RoomGraph;
        for room in Room::ALL {
            assert!(
                graph.transitions_from(room).count() >= 1,
                "room {room} has no outgoing hallway"
            );
        }
    }

    #[test]
    fn only_room_c_branches() {
        let graph = RoomGraph;
        let exits: Vec<_> = graph.transitions_from(Room::C).map(|t| t.to).collect();
        assert_eq!(exits, vec![Room::D, Room::A]);

        for room in [Room::A, Room::B, Room::D] {
            assert_eq!(graph.transitions_from(room).count(), 1);
        }
    }

    #[test]
    fn transition_ids_are_index_aligned() {
        let graph = RoomGraph;
        for (index, transition) in graph.transitions().iter().enumerate() {
            assert_eq!(transition.id.index(), index);
            assert_eq!(TransitionId::from_index(index), Some(transition.id));
        }
        assert_eq!(TransitionId::from_index(TRANSITION_COUNT), None);
    }

    #[test]
    fn room_letters_round_trip() {
        for room in Room::ALL {
            assert_eq!(Room::from_letter(room.letter()), Some(room));
        }
        assert_eq!(Room::from_letter("d"), Some(Room::D));
        assert_eq!(Room::from_letter("E"), None);
    }
}

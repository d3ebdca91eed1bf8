//! Session-scoped save slots for edge-count vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vector::EdgeCountVector;

/// Number of save slots offered by the session.
pub const SLOT_COUNT: usize = 4;

/// Zero-based index of a save slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// All slots in display order.
    pub const ALL: [SlotIndex; SLOT_COUNT] = [Self(0), Self(1), Self(2), Self(3)];

    /// Resolves a slot from its zero-based index.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < SLOT_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Zero-based index of the slot.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.0 + 1)
    }
}

/// Four slots holding previously captured vectors.
///
/// The store lives for the whole session and survives level switches. Slots
/// are only ever changed by an explicit overwrite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedVectorStore {
    slots: [Option<EdgeCountVector>; SLOT_COUNT],
}

impl SavedVectorStore {
    /// Creates a store with every slot empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
        }
    }

    /// Copies `vector` into `slot`, replacing any previous contents.
    pub fn save(&mut self, slot: SlotIndex, vector: EdgeCountVector) {
        self.slots[slot.get()] = Some(vector);
    }

    /// Returns a copy of the vector stored in `slot`, if any.
    #[must_use]
    pub const fn load(&self, slot: SlotIndex) -> Option<EdgeCountVector> {
        self.slots[slot.get()]
    }

    /// Copy of every slot in display order.
    #[must_use]
    pub const fn all(&self) -> [Option<EdgeCountVector>; SLOT_COUNT] {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::{SavedVectorStore, SlotIndex, SLOT_COUNT};
    use crate::vector::EdgeCountVector;

    #[test]
    fn saved_vectors_are_copied_out() {
        let mut store = SavedVectorStore::new();
        let slot = SlotIndex::new(1).expect("slot in range");
        let vector = EdgeCountVector::new([1, 1, 1, 0, 1]);
        store.save(slot, vector);

        let mut loaded = store.load(slot).expect("slot filled");
        loaded.set(crate::TransitionId::A_TO_B, 9);
        assert_eq!(store.load(slot), Some(vector));
    }

    #[test]
    fn out_of_range_slots_are_not_constructible() {
        assert!(SlotIndex::new(SLOT_COUNT).is_none());
        assert_eq!(SlotIndex::ALL.len(), SLOT_COUNT);
    }
}

//! Fixed-size vectors exchanged between levels, slots and the display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::{Room, TransitionId, ROOM_COUNT, TRANSITION_COUNT};

/// Per-camera traversal counts, index-aligned with [`TransitionId`].
///
/// Entries are nominally non-negative. The input surface accepts negative
/// text, so negative entries are representable; consumers treat any value
/// `<= 0` as "no remaining traversals".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeCountVector([i32; TRANSITION_COUNT]);

impl EdgeCountVector {
    /// Vector with every counter at zero.
    pub const ZERO: Self = Self([0; TRANSITION_COUNT]);

    /// Creates a vector from raw counter values in camera order.
    #[must_use]
    pub const fn new(values: [i32; TRANSITION_COUNT]) -> Self {
        Self(values)
    }

    /// Raw counter values in camera order.
    #[must_use]
    pub const fn values(&self) -> [i32; TRANSITION_COUNT] {
        self.0
    }

    /// Counter recorded for the provided camera.
    #[must_use]
    pub const fn get(&self, id: TransitionId) -> i32 {
        self.0[id.index()]
    }

    /// Overwrites the counter recorded for the provided camera.
    pub fn set(&mut self, id: TransitionId, value: i32) {
        self.0[id.index()] = value;
    }

    /// Adds `amount` to the counter of the provided camera, saturating at the bounds.
    pub fn increment(&mut self, id: TransitionId, amount: i32) {
        let slot = &mut self.0[id.index()];
        *slot = slot.saturating_add(amount);
    }

    /// Reports whether the counter still allows at least one traversal.
    #[must_use]
    pub const fn has_remaining(&self, id: TransitionId) -> bool {
        self.0[id.index()] > 0
    }

    /// Multiplies every entry by `scalar`.
    #[must_use]
    pub fn scaled(&self, scalar: i32) -> Self {
        Self(self.0.map(|value| value.saturating_mul(scalar)))
    }

    /// Computes `a * left + b * right` entry by entry.
    #[must_use]
    pub fn linear_combination(a: i32, left: &Self, b: i32, right: &Self) -> Self {
        let mut result = [0; TRANSITION_COUNT];
        for (index, slot) in result.iter_mut().enumerate() {
            *slot = a
                .saturating_mul(left.0[index])
                .saturating_add(b.saturating_mul(right.0[index]));
        }
        Self(result)
    }

    /// Number of traversals each counter stands for when one traversal adds
    /// `increment`; partial traversals are dropped.
    #[must_use]
    pub fn traversals(&self, increment: i32) -> Self {
        let increment = increment.max(1);
        Self(self.0.map(|value| value / increment))
    }
}

impl fmt::Display for EdgeCountVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, &self.0)
    }
}

/// Number of people in each room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Populations([u32; ROOM_COUNT]);

impl Populations {
    /// Every room empty.
    pub const EMPTY: Self = Self([0; ROOM_COUNT]);

    /// Creates populations from per-room counts in room order.
    #[must_use]
    pub const fn new(counts: [u32; ROOM_COUNT]) -> Self {
        Self(counts)
    }

    /// Places the same number of people in every room.
    #[must_use]
    pub const fn uniform(count: u32) -> Self {
        Self([count; ROOM_COUNT])
    }

    /// Number of people currently in `room`.
    #[must_use]
    pub const fn get(&self, room: Room) -> u32 {
        self.0[room.index()]
    }

    /// Overwrites the number of people in `room`.
    pub fn set(&mut self, room: Room, count: u32) {
        self.0[room.index()] = count;
    }

    /// Total number of people across all rooms.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&count| u64::from(count)).sum()
    }
}

impl fmt::Display for Populations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, &self.0)
    }
}

/// Signed per-room population change, index-aligned with [`Room::ALL`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeltaVector([i32; ROOM_COUNT]);

impl DeltaVector {
    /// No change in any room.
    pub const ZERO: Self = Self([0; ROOM_COUNT]);

    /// Creates a delta vector from raw per-room values.
    #[must_use]
    pub const fn new(values: [i32; ROOM_COUNT]) -> Self {
        Self(values)
    }

    /// Change recorded for `room`.
    #[must_use]
    pub const fn get(&self, room: Room) -> i32 {
        self.0[room.index()]
    }

    /// Overwrites the change recorded for `room`.
    pub fn set(&mut self, room: Room, value: i32) {
        self.0[room.index()] = value;
    }
}

impl fmt::Display for DeltaVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, &self.0)
    }
}

fn write_bracketed<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            f.write_str(",")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::{EdgeCountVector, Populations};
    use crate::graph::TransitionId;

    #[test]
    fn linear_combination_matches_hand_computation() {
        let left = EdgeCountVector::new([1, 2, 3, 4, 5]);
        let right = EdgeCountVector::new([5, 4, 3, 2, 1]);
        let result = EdgeCountVector::linear_combination(2, &left, 3, &right);
        assert_eq!(result, EdgeCountVector::new([17, 16, 15, 14, 13]));
    }

    #[test]
    fn non_positive_counters_have_no_remaining_traversals() {
        let counts = EdgeCountVector::new([0, -3, 1, 0, 0]);
        assert!(!counts.has_remaining(TransitionId::A_TO_B));
        assert!(!counts.has_remaining(TransitionId::B_TO_C));
        assert!(counts.has_remaining(TransitionId::C_TO_D));
    }

    #[test]
    fn traversals_undo_the_per_step_increment() {
        let counts = EdgeCountVector::new([4, 2, 3, 0, -2]);
        assert_eq!(counts.traversals(2), EdgeCountVector::new([2, 1, 1, 0, -1]));
        assert_eq!(counts.traversals(0), counts, "increments below one leave counts alone");
    }

    #[test]
    fn display_uses_brackets() {
        assert_eq!(
            EdgeCountVector::new([3, 3, 3, 0, 3]).to_string(),
            "[3,3,3,0,3]"
        );
        assert_eq!(Populations::uniform(8).to_string(), "[8,8,8,8]");
    }
}

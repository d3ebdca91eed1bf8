//! Step-by-step playback of a simulated walk.

use hallways_core::{RoomGraph, Transition};
use hallways_system_path_simulator::SimulatedPath;

/// Replay in flight: the walker is animating towards the destination of
/// [`Replay::pending`] and the step is applied once the move completes.
#[derive(Clone, Debug)]
pub(crate) struct Replay {
    path: SimulatedPath,
    next_step: usize,
}

impl Replay {
    /// Wraps `path`, or returns `None` when the walk has no steps.
    pub(crate) fn start(path: SimulatedPath) -> Option<Self> {
        if path.transitions().is_empty() {
            return None;
        }
        Some(Self { path, next_step: 0 })
    }

    /// Step whose animation is currently playing.
    pub(crate) fn pending(&self) -> Option<Transition> {
        self.path
            .transitions()
            .get(self.next_step)
            .map(|&id| RoomGraph.transition(id))
    }

    /// Marks the pending step applied and returns the next one, if any.
    pub(crate) fn advance(&mut self) -> Option<Transition> {
        self.next_step += 1;
        self.pending()
    }

    /// Number of steps already applied.
    pub(crate) const fn applied(&self) -> usize {
        self.next_step
    }
}

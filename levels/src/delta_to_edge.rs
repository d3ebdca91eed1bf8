//! Puzzle in which the player turns a per-room delta into camera counts.

use hallways_core::{
    DeltaVector, EdgeCountVector, Event, PuzzleVector, Room, SavedVectorStore, SlotIndex,
    Transition, TransitionId, ValidationOutcome,
};
use hallways_system_path_simulator::simulate;

use crate::{
    controller::{
        announce_walker, hide_generic_matrix, present_board, restore_generic_matrix, Controller,
        LevelState, ReplayPlan, WalkerMotion,
    },
    descriptor::LevelDescriptor,
};

/// Room deltas shown to the player.
pub const GIVEN_DELTA: DeltaVector = DeltaVector::new([6, 2, -6, -2]);

/// Controller of the delta-to-edge puzzle.
#[derive(Debug)]
pub struct DeltaToEdgeController {
    descriptor: &'static LevelDescriptor,
    state: LevelState,
}

impl DeltaToEdgeController {
    /// Creates a controller for `descriptor`; call [`Controller::enter`] before use.
    #[must_use]
    pub fn new(descriptor: &'static LevelDescriptor) -> Self {
        Self {
            descriptor,
            state: LevelState::from_descriptor(descriptor),
        }
    }

    fn emit_counts(&self, out: &mut Vec<Event>) {
        out.push(Event::EdgeCountsChanged {
            counts: self.state.edge_counts,
        });
    }
}

impl Controller for DeltaToEdgeController {
    fn descriptor(&self) -> &'static LevelDescriptor {
        self.descriptor
    }

    fn state(&self) -> LevelState {
        self.state
    }

    fn enter(&mut self, out: &mut Vec<Event>) {
        self.state = LevelState::from_descriptor(self.descriptor);

        out.push(Event::PromptShown {
            text: self.descriptor.prompt,
        });
        hide_generic_matrix(out, true);
        out.push(Event::MatrixEnabled {
            enabled: self.descriptor.matrix_enabled,
        });
        out.push(Event::SaveUiVisible {
            visible: self.descriptor.show_save_ui,
        });
        out.push(Event::ScalarUiVisible { visible: false });
        out.push(Event::PuzzleVectorShown {
            vector: PuzzleVector::GivenDelta(GIVEN_DELTA),
        });
        self.emit_counts(out);
        present_board(self.descriptor, &self.state, out);
    }

    fn exit(&mut self, out: &mut Vec<Event>) {
        out.push(Event::PromptHidden);
        restore_generic_matrix(out);
    }

    fn validate(&self, _saved_vectors: &SavedVectorStore) -> ValidationOutcome {
        log::debug!(
            "{} accepts counts {}",
            self.descriptor.name,
            self.state.edge_counts
        );
        ValidationOutcome::Valid
    }

    fn edge_enabled(&self, _id: TransitionId) -> bool {
        self.descriptor.arrows_enabled
    }

    fn on_edge_traversed(
        &mut self,
        transition: Transition,
        motion: WalkerMotion,
        out: &mut Vec<Event>,
    ) {
        out.push(Event::EdgePulsed {
            transition: transition.id,
        });
        if announce_walker(&self.state, transition, motion, out) {
            self.on_room_changed(transition.to, out);
        }
    }

    fn on_room_changed(&mut self, room: Room, _out: &mut Vec<Event>) {
        self.state.current_room = room;
    }

    fn on_vector_edited(&mut self, id: TransitionId, value: i32, out: &mut Vec<Event>) {
        self.state.edge_counts.set(id, value);
        self.emit_counts(out);
    }

    fn on_slot_loaded(&mut self, _slot: SlotIndex, vector: EdgeCountVector, out: &mut Vec<Event>) {
        self.state.edge_counts = vector;
        self.emit_counts(out);
    }

    fn save_candidate(&self) -> Option<EdgeCountVector> {
        Some(self.state.edge_counts)
    }

    // The entered counts are the answer, so the replay keeps them.
    fn begin_replay(&mut self, out: &mut Vec<Event>) -> Option<ReplayPlan> {
        let source = self.state.edge_counts;
        self.state = LevelState {
            edge_counts: source,
            ..LevelState::from_descriptor(self.descriptor)
        };
        present_board(self.descriptor, &self.state, out);
        Some(ReplayPlan {
            source,
            path: simulate(self.descriptor.start_room, &source),
        })
    }
}

//! Puzzle in which the player turns camera counts into a per-room delta.

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

/// Camera counts shown to the player.
pub const GIVEN_EDGE_COUNTS: EdgeCountVector = EdgeCountVector::new([5, 3, 5, 4, 7]);

/// Controller of the inverse-delta puzzle.
///
/// The arrows only move the walker; the answer cells are free-form and the
/// level always lets the player advance.
#[derive(Debug)]
pub struct InverseDeltaController {
    descriptor: &'static LevelDescriptor,
    state: LevelState,
    answer: DeltaVector,
}

impl InverseDeltaController {
    /// Creates a controller for `descriptor`; call [`Controller::enter`] before use.
    #[must_use]
    pub fn new(descriptor: &'static LevelDescriptor) -> Self {
        Self {
            descriptor,
            state: LevelState::from_descriptor(descriptor),
            answer: DeltaVector::ZERO,
        }
    }

    /// Delta cells entered by the player.
    #[must_use]
    pub const fn answer(&self) -> DeltaVector {
        self.answer
    }
}

impl Controller for InverseDeltaController {
    fn descriptor(&self) -> &'static LevelDescriptor {
        self.descriptor
    }

    fn state(&self) -> LevelState {
        self.state
    }

    fn enter(&mut self, out: &mut Vec<Event>) {
        self.state = LevelState::from_descriptor(self.descriptor);
        self.answer = DeltaVector::ZERO;

        out.push(Event::PromptShown {
            text: self.descriptor.prompt,
        });
        hide_generic_matrix(out, false);
        out.push(Event::MatrixEnabled { enabled: false });
        out.push(Event::SaveUiVisible { visible: false });
        out.push(Event::ScalarUiVisible { visible: false });
        out.push(Event::PuzzleVectorShown {
            vector: PuzzleVector::GivenEdgeCounts(GIVEN_EDGE_COUNTS),
        });
        out.push(Event::DeltaInputChanged {
            values: self.answer,
        });
        present_board(self.descriptor, &self.state, out);
    }

    fn exit(&mut self, out: &mut Vec<Event>) {
        out.push(Event::PromptHidden);
        restore_generic_matrix(out);
    }

    fn validate(&self, _saved_vectors: &SavedVectorStore) -> ValidationOutcome {
        log::debug!("{} accepts answer {}", self.descriptor.name, self.answer);
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

    fn on_vector_edited(&mut self, id: TransitionId, value: i32, _out: &mut Vec<Event>) {
        log::debug!(
            "{} hides the camera matrix; ignoring {id}={value}",
            self.descriptor.name
        );
    }

    fn on_delta_edited(&mut self, room: Room, value: i32, out: &mut Vec<Event>) {
        self.answer.set(room, value);
        out.push(Event::DeltaInputChanged {
            values: self.answer,
        });
    }

    fn on_slot_loaded(&mut self, slot: SlotIndex, _vector: EdgeCountVector, _out: &mut Vec<Event>) {
        log::debug!("{} has no slot target; ignoring {slot}", self.descriptor.name);
    }

    fn save_candidate(&self) -> Option<EdgeCountVector> {
        None
    }

    fn begin_replay(&mut self, out: &mut Vec<Event>) -> Option<ReplayPlan> {
        self.state = LevelState::from_descriptor(self.descriptor);
        present_board(self.descriptor, &self.state, out);
        Some(ReplayPlan {
            source: GIVEN_EDGE_COUNTS,
            path: simulate(self.descriptor.start_room, &GIVEN_EDGE_COUNTS),
        })
    }
}

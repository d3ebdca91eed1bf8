//! Puzzle combining two saved vectors with integer scalars.

use hallways_core::{
    EdgeCountVector, Event, Operand, Room, SavedVectorStore, SlotIndex, Transition, TransitionId,
    ValidationOutcome,
};

use crate::{
    controller::{
        announce_walker, hide_generic_matrix, present_board, restore_generic_matrix, Controller,
        LevelState, ReplayPlan, WalkerMotion,
    },
    descriptor::LevelDescriptor,
};

/// Controller of the linear-combination puzzle.
///
/// Computes `a * left + b * right`. Slot clicks fill whichever operand is
/// active.
#[derive(Debug)]
pub struct LinearCombinationController {
    descriptor: &'static LevelDescriptor,
    state: LevelState,
    left: EdgeCountVector,
    right: EdgeCountVector,
    a: i32,
    b: i32,
    active: Operand,
}

impl LinearCombinationController {
    /// Creates a controller for `descriptor`; call [`Controller::enter`] before use.
    #[must_use]
    pub fn new(descriptor: &'static LevelDescriptor) -> Self {
        Self {
            descriptor,
            state: LevelState::from_descriptor(descriptor),
            left: EdgeCountVector::ZERO,
            right: EdgeCountVector::ZERO,
            a: 1,
            b: 1,
            active: Operand::Left,
        }
    }

    /// Operand that receives slot loads.
    #[must_use]
    pub const fn active(&self) -> Operand {
        self.active
    }

    /// Vector currently held by `operand`.
    #[must_use]
    pub const fn operand(&self, operand: Operand) -> EdgeCountVector {
        match operand {
            Operand::Left => self.left,
            Operand::Right => self.right,
        }
    }

    /// Current `a * left + b * right`.
    #[must_use]
    pub fn result(&self) -> EdgeCountVector {
        EdgeCountVector::linear_combination(self.a, &self.left, self.b, &self.right)
    }

    fn emit_combination(&self, out: &mut Vec<Event>) {
        out.push(Event::CombinationChanged {
            left: self.left,
            a: self.a,
            right: self.right,
            b: self.b,
            result: self.result(),
            active: self.active,
        });
    }
}

impl Controller for LinearCombinationController {
    fn descriptor(&self) -> &'static LevelDescriptor {
        self.descriptor
    }

    fn state(&self) -> LevelState {
        self.state
    }

    fn enter(&mut self, out: &mut Vec<Event>) {
        self.state = LevelState::from_descriptor(self.descriptor);
        self.left = EdgeCountVector::ZERO;
        self.right = EdgeCountVector::ZERO;
        self.a = 1;
        self.b = 1;
        self.active = Operand::Left;

        out.push(Event::PromptShown {
            text: self.descriptor.prompt,
        });
        hide_generic_matrix(out, false);
        out.push(Event::MatrixEnabled { enabled: false });
        out.push(Event::SaveUiVisible {
            visible: self.descriptor.show_save_ui,
        });
        out.push(Event::ScalarUiVisible { visible: false });
        self.emit_combination(out);
        present_board(self.descriptor, &self.state, out);
    }

    fn exit(&mut self, out: &mut Vec<Event>) {
        out.push(Event::PromptHidden);
        restore_generic_matrix(out);
    }

    fn validate(&self, _saved_vectors: &SavedVectorStore) -> ValidationOutcome {
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

    fn on_operand_selected(&mut self, operand: Operand, out: &mut Vec<Event>) {
        self.active = operand;
        self.emit_combination(out);
    }

    fn on_operand_scalar_edited(&mut self, operand: Operand, value: i32, out: &mut Vec<Event>) {
        match operand {
            Operand::Left => self.a = value,
            Operand::Right => self.b = value,
        }
        self.emit_combination(out);
    }

    fn on_slot_loaded(&mut self, slot: SlotIndex, vector: EdgeCountVector, out: &mut Vec<Event>) {
        log::debug!("{} loads {slot} into {:?}", self.descriptor.name, self.active);
        match self.active {
            Operand::Left => self.left = vector,
            Operand::Right => self.right = vector,
        }
        self.emit_combination(out);
    }

    fn slot_click_always_loads(&self) -> bool {
        true
    }

    fn save_candidate(&self) -> Option<EdgeCountVector> {
        None
    }

    fn begin_replay(&mut self, _out: &mut Vec<Event>) -> Option<ReplayPlan> {
        None
    }
}

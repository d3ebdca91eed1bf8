//! Lifecycle contract shared by every level controller.

use std::time::Duration;

use hallways_core::{
    DeltaVector, EdgeCountVector, Event, Operand, Populations, Room, SavedVectorStore, SlotIndex,
    Transition, TransitionId, ValidationOutcome,
};
use hallways_system_path_simulator::SimulatedPath;

use crate::{
    delta_to_edge::DeltaToEdgeController,
    descriptor::{LevelDescriptor, LevelKind, LevelStateView},
    generic::GenericController,
    inverse_delta::InverseDeltaController,
    linear_combination::LinearCombinationController,
};

/// Mutable runtime state, re-created every time a level is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelState {
    /// Room the walker occupies.
    pub current_room: Room,
    /// People per room.
    pub populations: Populations,
    /// Current edge-count vector.
    pub edge_counts: EdgeCountVector,
    /// Current level scalar.
    pub scalar: i32,
}

impl LevelState {
    /// Fresh state built from the descriptor's start room and populations.
    #[must_use]
    pub fn from_descriptor(descriptor: &LevelDescriptor) -> Self {
        Self {
            current_room: descriptor.start_room,
            populations: descriptor.initial_populations,
            edge_counts: EdgeCountVector::ZERO,
            scalar: descriptor.initial_scalar(),
        }
    }

    pub(crate) fn view(
        &self,
        descriptor: &LevelDescriptor,
        saved_vectors: &SavedVectorStore,
    ) -> LevelStateView {
        LevelStateView {
            level: descriptor.id,
            current_room: self.current_room,
            populations: self.populations,
            edge_counts: self.edge_counts,
            scalar: self.scalar,
            saved_vectors: *saved_vectors,
        }
    }
}

/// Walk prepared by a controller for an animated replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayPlan {
    /// Vector the walk was reconstructed from.
    pub source: EdgeCountVector,
    /// Reconstructed walk.
    pub path: SimulatedPath,
}

/// How the walker marker should follow a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkerMotion {
    /// Animate the marker towards the destination.
    Animate,
    /// The marker already sits in the destination; snap it there.
    AlreadyPlaced,
}

impl WalkerMotion {
    pub(crate) const fn animate(self) -> bool {
        matches!(self, Self::Animate)
    }
}

/// Runtime driver of a single level.
///
/// Controllers never talk to the renderer directly; every presentation change
/// is pushed into `out` as an [`Event`].
pub trait Controller {
    /// Descriptor the controller was built from.
    fn descriptor(&self) -> &'static LevelDescriptor;

    /// Snapshot of the runtime state.
    fn state(&self) -> LevelState;

    /// Re-creates the runtime state and configures the presentation.
    fn enter(&mut self, out: &mut Vec<Event>);

    /// Tears down level-specific presentation.
    fn exit(&mut self, out: &mut Vec<Event>);

    /// Per-frame hook used only for display refresh.
    fn update(&mut self, _dt: Duration) {}

    /// Returns the level to its entry state.
    fn reset(&mut self, out: &mut Vec<Event>) {
        self.enter(out);
    }

    /// Decides whether the player may advance.
    fn validate(&self, saved_vectors: &SavedVectorStore) -> ValidationOutcome;

    /// Reports whether the arrow of `id` currently accepts clicks.
    fn edge_enabled(&self, id: TransitionId) -> bool;

    /// Handles a traversal of `transition`.
    fn on_edge_traversed(
        &mut self,
        transition: Transition,
        motion: WalkerMotion,
        out: &mut Vec<Event>,
    );

    /// Handles the walker settling in `room`.
    fn on_room_changed(&mut self, room: Room, out: &mut Vec<Event>);

    /// Handles an edit of one matrix cell.
    fn on_vector_edited(&mut self, id: TransitionId, value: i32, out: &mut Vec<Event>);

    /// Handles an edit of the level scalar.
    fn on_scalar_edited(&mut self, value: i32, _out: &mut Vec<Event>) {
        log::debug!(
            "{} ignores scalar edit to {value}",
            self.descriptor().name
        );
    }

    /// Handles an edit of the inverse-delta answer vector.
    fn on_delta_edited(&mut self, room: Room, value: i32, _out: &mut Vec<Event>) {
        log::debug!(
            "{} ignores delta edit {room}={value}",
            self.descriptor().name
        );
    }

    /// Handles a click on an operand display.
    fn on_operand_selected(&mut self, operand: Operand, _out: &mut Vec<Event>) {
        log::debug!(
            "{} ignores operand selection {operand:?}",
            self.descriptor().name
        );
    }

    /// Handles an edit of an operand scalar.
    fn on_operand_scalar_edited(&mut self, operand: Operand, value: i32, _out: &mut Vec<Event>) {
        log::debug!(
            "{} ignores {operand:?} scalar edit to {value}",
            self.descriptor().name
        );
    }

    /// Loads a saved vector into the level.
    fn on_slot_loaded(&mut self, slot: SlotIndex, vector: EdgeCountVector, out: &mut Vec<Event>);

    /// Whether a slot click loads a vector even while a save is armed.
    fn slot_click_always_loads(&self) -> bool {
        false
    }

    /// Vector captured when the player presses save, if the level offers one.
    fn save_candidate(&self) -> Option<EdgeCountVector>;

    /// Prepares an animated replay, resetting whatever the replay re-applies.
    fn begin_replay(&mut self, out: &mut Vec<Event>) -> Option<ReplayPlan>;
}

/// Closed set of controllers, one variant per [`LevelKind`].
#[derive(Debug)]
pub enum LevelController {
    /// Descriptor-driven controller.
    Generic(GenericController),
    /// Camera counts to room delta puzzle.
    InverseDelta(InverseDeltaController),
    /// Room delta to camera counts puzzle.
    DeltaToEdge(DeltaToEdgeController),
    /// Two-operand linear combination puzzle.
    LinearCombination(LinearCombinationController),
}

impl LevelController {
    /// Builds the controller family named by the descriptor.
    #[must_use]
    pub fn for_descriptor(descriptor: &'static LevelDescriptor) -> Self {
        match descriptor.kind {
            LevelKind::Generic => Self::Generic(GenericController::new(descriptor)),
            LevelKind::InverseDelta => {
                Self::InverseDelta(InverseDeltaController::new(descriptor))
            }
            LevelKind::DeltaToEdge => Self::DeltaToEdge(DeltaToEdgeController::new(descriptor)),
            LevelKind::LinearCombination => {
                Self::LinearCombination(LinearCombinationController::new(descriptor))
            }
        }
    }

    fn inner(&self) -> &dyn Controller {
        match self {
            Self::Generic(controller) => controller,
            Self::InverseDelta(controller) => controller,
            Self::DeltaToEdge(controller) => controller,
            Self::LinearCombination(controller) => controller,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Controller {
        match self {
            Self::Generic(controller) => controller,
            Self::InverseDelta(controller) => controller,
            Self::DeltaToEdge(controller) => controller,
            Self::LinearCombination(controller) => controller,
        }
    }

    /// Answer cells of the inverse-delta puzzle, when that puzzle is active.
    #[must_use]
    pub fn delta_answer(&self) -> Option<DeltaVector> {
        match self {
            Self::InverseDelta(controller) => Some(controller.answer()),
            _ => None,
        }
    }
}

impl Controller for LevelController {
    fn descriptor(&self) -> &'static LevelDescriptor {
        self.inner().descriptor()
    }

    fn state(&self) -> LevelState {
        self.inner().state()
    }

    fn enter(&mut self, out: &mut Vec<Event>) {
        self.inner_mut().enter(out);
    }

    fn exit(&mut self, out: &mut Vec<Event>) {
        self.inner_mut().exit(out);
    }

    fn update(&mut self, dt: Duration) {
        self.inner_mut().update(dt);
    }

    fn reset(&mut self, out: &mut Vec<Event>) {
        self.inner_mut().reset(out);
    }

    fn validate(&self, saved_vectors: &SavedVectorStore) -> ValidationOutcome {
        self.inner().validate(saved_vectors)
    }

    fn edge_enabled(&self, id: TransitionId) -> bool {
        self.inner().edge_enabled(id)
    }

    fn on_edge_traversed(
        &mut self,
        transition: Transition,
        motion: WalkerMotion,
        out: &mut Vec<Event>,
    ) {
        self.inner_mut().on_edge_traversed(transition, motion, out);
    }

    fn on_room_changed(&mut self, room: Room, out: &mut Vec<Event>) {
        self.inner_mut().on_room_changed(room, out);
    }

    fn on_vector_edited(&mut self, id: TransitionId, value: i32, out: &mut Vec<Event>) {
        self.inner_mut().on_vector_edited(id, value, out);
    }

    fn on_scalar_edited(&mut self, value: i32, out: &mut Vec<Event>) {
        self.inner_mut().on_scalar_edited(value, out);
    }

    fn on_delta_edited(&mut self, room: Room, value: i32, out: &mut Vec<Event>) {
        self.inner_mut().on_delta_edited(room, value, out);
    }

    fn on_operand_selected(&mut self, operand: Operand, out: &mut Vec<Event>) {
        self.inner_mut().on_operand_selected(operand, out);
    }

    fn on_operand_scalar_edited(&mut self, operand: Operand, value: i32, out: &mut Vec<Event>) {
        self.inner_mut()
            .on_operand_scalar_edited(operand, value, out);
    }

    fn on_slot_loaded(&mut self, slot: SlotIndex, vector: EdgeCountVector, out: &mut Vec<Event>) {
        self.inner_mut().on_slot_loaded(slot, vector, out);
    }

    fn slot_click_always_loads(&self) -> bool {
        self.inner().slot_click_always_loads()
    }

    fn save_candidate(&self) -> Option<EdgeCountVector> {
        self.inner().save_candidate()
    }

    fn begin_replay(&mut self, out: &mut Vec<Event>) -> Option<ReplayPlan> {
        self.inner_mut().begin_replay(out)
    }
}

/// Emits the chrome a specialized puzzle hides on entry.
pub(crate) fn hide_generic_matrix(out: &mut Vec<Event>, keep_cells: bool) {
    out.push(Event::MatrixChromeChanged {
        brackets_visible: false,
        labels_visible: false,
    });
    out.push(Event::MatrixCellsVisible {
        visible: keep_cells,
    });
}

/// Emits the chrome a specialized puzzle restores on exit.
pub(crate) fn restore_generic_matrix(out: &mut Vec<Event>) {
    out.push(Event::MatrixCellsVisible { visible: true });
    out.push(Event::MatrixChromeChanged {
        brackets_visible: true,
        labels_visible: true,
    });
}

/// Emits the board setup shared by every controller.
pub(crate) fn present_board(descriptor: &LevelDescriptor, state: &LevelState, out: &mut Vec<Event>) {
    out.push(Event::AllEdgesEnabled {
        enabled: descriptor.arrows_enabled,
    });
    out.push(Event::WalkerMoved {
        room: state.current_room,
        animate: false,
    });
    out.push(Event::PopulationsChanged {
        populations: state.populations,
    });
}

/// Moves the walker marker if it stands at the transition's source.
///
/// Returns `true` when the walker follows the traversal; the caller then
/// reports the new room through [`Controller::on_room_changed`].
pub(crate) fn announce_walker(
    state: &LevelState,
    transition: Transition,
    motion: WalkerMotion,
    out: &mut Vec<Event>,
) -> bool {
    if state.current_room != transition.from {
        return false;
    }
    out.push(Event::WalkerMoved {
        room: transition.to,
        animate: motion.animate(),
    });
    true
}

//! Controller that drives a level purely from its descriptor.

use hallways_core::{
    EdgeCountVector, Event, Populations, Room, RoomGraph, SavedVectorStore, SlotIndex,
    Transition, TransitionId, ValidationFailure, ValidationOutcome,
};
use hallways_system_path_simulator::simulate;

use crate::{
    controller::{announce_walker, present_board, Controller, LevelState, ReplayPlan, WalkerMotion},
    descriptor::{LevelDescriptor, TransferPolicy},
};

/// Descriptor-driven controller used by every non-specialized level.
#[derive(Debug)]
pub struct GenericController {
    descriptor: &'static LevelDescriptor,
    state: LevelState,
}

impl GenericController {
    /// Creates a controller for `descriptor`; call [`Controller::enter`] before use.
    #[must_use]
    pub fn new(descriptor: &'static LevelDescriptor) -> Self {
        Self {
            descriptor,
            state: LevelState::from_descriptor(descriptor),
        }
    }

    fn emit_result_vector(&self, out: &mut Vec<Event>) {
        if self.descriptor.show_scalar_ui {
            out.push(Event::ResultVectorChanged {
                result: self.state.edge_counts.scaled(self.state.scalar),
            });
        }
    }

    fn emit_counts(&self, out: &mut Vec<Event>) {
        out.push(Event::EdgeCountsChanged {
            counts: self.state.edge_counts,
        });
        self.emit_result_vector(out);
    }

    fn refresh_arrows(&self, out: &mut Vec<Event>) {
        if !self.descriptor.restrict_arrows_to_current_room {
            return;
        }
        for id in TransitionId::ALL {
            out.push(Event::EdgeEnabled {
                transition: id,
                enabled: self.edge_enabled(id),
            });
        }
    }

    fn present_runtime_state(&self, out: &mut Vec<Event>) {
        self.emit_counts(out);
        present_board(self.descriptor, &self.state, out);
        self.refresh_arrows(out);
    }
}

impl Controller for GenericController {
    fn descriptor(&self) -> &'static LevelDescriptor {
        self.descriptor
    }

    fn state(&self) -> LevelState {
        self.state
    }

    fn enter(&mut self, out: &mut Vec<Event>) {
        let descriptor = self.descriptor;
        self.state = LevelState::from_descriptor(descriptor);

        out.push(Event::PromptShown {
            text: descriptor.prompt,
        });
        out.push(Event::MatrixChromeChanged {
            brackets_visible: descriptor.show_matrix_brackets,
            labels_visible: descriptor.show_counter_labels,
        });
        out.push(Event::MatrixCellsVisible { visible: true });
        out.push(Event::SaveUiVisible {
            visible: descriptor.show_save_ui,
        });
        out.push(Event::ScalarUiVisible {
            visible: descriptor.show_scalar_ui,
        });
        if descriptor.show_scalar_ui {
            out.push(Event::ScalarChanged {
                value: self.state.scalar,
            });
        }
        out.push(Event::MatrixEnabled {
            enabled: descriptor.matrix_enabled,
        });
        self.present_runtime_state(out);
    }

    fn exit(&mut self, out: &mut Vec<Event>) {
        out.push(Event::PromptHidden);
    }

    fn validate(&self, saved_vectors: &SavedVectorStore) -> ValidationOutcome {
        let descriptor = self.descriptor;
        if let Some(custom) = descriptor.custom_validate {
            return custom(&self.state.view(descriptor, saved_vectors));
        }

        if let Some(target) = descriptor.target_vector {
            if let Some(failure) = compare_to_target(&self.state.edge_counts, &target) {
                return ValidationOutcome::Invalid(failure);
            }
        }

        match descriptor.target_end_room {
            Some(expected) if self.state.current_room != expected => {
                ValidationOutcome::Invalid(ValidationFailure::WrongEndRoom { expected })
            }
            _ => ValidationOutcome::Valid,
        }
    }

    fn edge_enabled(&self, id: TransitionId) -> bool {
        if !self.descriptor.arrows_enabled {
            return false;
        }
        !self.descriptor.restrict_arrows_to_current_room
            || RoomGraph.leaves(self.state.current_room, id)
    }

    fn on_edge_traversed(
        &mut self,
        transition: Transition,
        motion: WalkerMotion,
        out: &mut Vec<Event>,
    ) {
        let descriptor = self.descriptor;
        self.state
            .edge_counts
            .increment(transition.id, descriptor.counter_increment());
        transfer_population(
            &mut self.state.populations,
            transition,
            descriptor.movement_multiplier,
            descriptor.transfer_policy,
        );

        out.push(Event::EdgePulsed {
            transition: transition.id,
        });
        self.emit_counts(out);
        out.push(Event::PopulationsChanged {
            populations: self.state.populations,
        });

        if announce_walker(&self.state, transition, motion, out) {
            self.on_room_changed(transition.to, out);
        }
    }

    fn on_room_changed(&mut self, room: Room, out: &mut Vec<Event>) {
        self.state.current_room = room;
        self.refresh_arrows(out);
    }

    fn on_vector_edited(&mut self, id: TransitionId, value: i32, out: &mut Vec<Event>) {
        if !self.descriptor.matrix_enabled {
            log::debug!("{} matrix is read-only; ignoring {id} edit", self.descriptor.name);
            return;
        }
        self.state.edge_counts.set(id, value);
        self.emit_counts(out);
    }

    fn on_scalar_edited(&mut self, value: i32, out: &mut Vec<Event>) {
        if !self.descriptor.show_scalar_ui {
            log::debug!("{} has no scalar; ignoring {value}", self.descriptor.name);
            return;
        }
        self.state.scalar = value;
        out.push(Event::ScalarChanged { value });
        self.emit_result_vector(out);
    }

    fn on_slot_loaded(&mut self, slot: SlotIndex, vector: EdgeCountVector, out: &mut Vec<Event>) {
        log::debug!("{} loads {vector} from {slot}", self.descriptor.name);
        self.state.edge_counts = vector;
        self.emit_counts(out);
    }

    fn save_candidate(&self) -> Option<EdgeCountVector> {
        Some(self.state.edge_counts)
    }

    fn begin_replay(&mut self, out: &mut Vec<Event>) -> Option<ReplayPlan> {
        let source = self.state.edge_counts;
        let scalar = self.state.scalar;
        self.state = LevelState {
            scalar,
            ..LevelState::from_descriptor(self.descriptor)
        };
        self.present_runtime_state(out);

        let steps = source.traversals(self.descriptor.counter_increment());
        Some(ReplayPlan {
            source,
            path: simulate(self.descriptor.start_room, &steps),
        })
    }
}

/// First element-wise mismatch between `actual` and `target`.
///
/// Overshooting any counter takes precedence over falling short of another.
pub(crate) fn compare_to_target(
    actual: &EdgeCountVector,
    target: &EdgeCountVector,
) -> Option<ValidationFailure> {
    let pairs = || actual.values().into_iter().zip(target.values());
    if pairs().any(|(value, goal)| value > goal) {
        Some(ValidationFailure::TraveledTooFar)
    } else if pairs().any(|(value, goal)| value < goal) {
        Some(ValidationFailure::ValuesDontMatch)
    } else {
        None
    }
}

/// Moves people along `transition`, never driving the source below zero.
pub(crate) fn transfer_population(
    populations: &mut Populations,
    transition: Transition,
    multiplier: u32,
    policy: TransferPolicy,
) {
    let available = populations.get(transition.from);
    let moved = available.min(multiplier);
    let gained = match policy {
        TransferPolicy::Unbacked if available == 0 => multiplier,
        TransferPolicy::Clipped | TransferPolicy::Unbacked => moved,
    };

    if moved < multiplier {
        log::debug!(
            "transfer {} clipped: {available} available, {multiplier} requested",
            transition.id
        );
    }

    populations.set(transition.from, available - moved);
    let destination = populations.get(transition.to);
    populations.set(transition.to, destination.saturating_add(gained));
}

#[cfg(test)]
mod tests {
    use super::{compare_to_target, transfer_population};
    use crate::descriptor::TransferPolicy;
    use hallways_core::{
        EdgeCountVector, Populations, Room, RoomGraph, TransitionId, ValidationFailure,
    };

    #[test]
    fn overshoot_wins_over_shortfall() {
        let target = EdgeCountVector::new([3, 3, 3, 0, 3]);
        let actual = EdgeCountVector::new([4, 2, 3, 0, 3]);
        assert_eq!(
            compare_to_target(&actual, &target),
            Some(ValidationFailure::TraveledTooFar)
        );
    }

    #[test]
    fn clipped_transfer_from_an_empty_room_moves_nothing() {
        let mut populations = Populations::new([0, 5, 5, 5]);
        let transition = RoomGraph.transition(TransitionId::A_TO_B);
        transfer_population(&mut populations, transition, 1, TransferPolicy::Clipped);
        assert_eq!(populations, Populations::new([0, 5, 5, 5]));
    }

    #[test]
    fn clipped_transfer_moves_only_what_the_source_holds() {
        let mut populations = Populations::new([2, 0, 0, 0]);
        let transition = RoomGraph.transition(TransitionId::A_TO_B);
        transfer_population(&mut populations, transition, 5, TransferPolicy::Clipped);
        assert_eq!(populations.get(Room::A), 0);
        assert_eq!(populations.get(Room::B), 2);
        assert_eq!(populations.total(), 2);
    }

    #[test]
    fn unbacked_transfer_only_differs_when_the_source_is_empty() {
        let transition = RoomGraph.transition(TransitionId::C_TO_A);

        let mut backed = Populations::new([0, 0, 3, 0]);
        transfer_population(&mut backed, transition, 2, TransferPolicy::Unbacked);
        assert_eq!(backed.get(Room::C), 1);
        assert_eq!(backed.get(Room::A), 2);

        let mut empty = Populations::EMPTY;
        transfer_population(&mut empty, transition, 2, TransferPolicy::Unbacked);
        assert_eq!(empty.get(Room::C), 0);
        assert_eq!(empty.get(Room::A), 2);
    }
}

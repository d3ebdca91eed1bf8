use hallways_core::{
    EdgeCountVector, Event, LevelId, Populations, Room, RoomGraph, SavedVectorStore, SlotIndex,
    TransitionId, ValidationFailure, ValidationOutcome,
};
use hallways_levels::{
    Controller, GenericController, LevelCatalog, LevelDescriptor, TransferPolicy, WalkerMotion,
};

fn descriptor(id: u8) -> &'static LevelDescriptor {
    LevelCatalog::builtin()
        .get(LevelId::new(id))
        .expect("level exists in the catalog")
}

fn entered(id: u8) -> GenericController {
    let mut controller = GenericController::new(descriptor(id));
    let mut events = Vec::new();
    controller.enter(&mut events);
    controller
}

fn traverse(controller: &mut GenericController, id: TransitionId) -> Vec<Event> {
    let mut events = Vec::new();
    controller.on_edge_traversed(RoomGraph.transition(id), WalkerMotion::Animate, &mut events);
    events
}

fn walk(controller: &mut GenericController, ids: &[TransitionId]) {
    for &id in ids {
        let _ = traverse(controller, id);
    }
}

const LOOP_VIA_D: [TransitionId; 4] = [
    TransitionId::A_TO_B,
    TransitionId::B_TO_C,
    TransitionId::C_TO_D,
    TransitionId::D_TO_A,
];

#[test]
fn enter_resets_runtime_state_and_shows_the_prompt() {
    let mut controller = entered(1);
    walk(&mut controller, &LOOP_VIA_D[..2]);

    let mut events = Vec::new();
    controller.enter(&mut events);

    let state = controller.state();
    assert_eq!(state.current_room, Room::A);
    assert_eq!(state.populations, Populations::uniform(5));
    assert_eq!(state.edge_counts, EdgeCountVector::ZERO);
    assert_eq!(
        events.first(),
        Some(&Event::PromptShown {
            text: descriptor(1).prompt
        }),
        "the prompt is the first thing a level shows"
    );
    assert!(events.contains(&Event::WalkerMoved {
        room: Room::A,
        animate: false
    }));
}

#[test]
fn matching_target_vector_validates() {
    let mut controller = entered(1);
    for _ in 0..3 {
        walk(&mut controller, &LOOP_VIA_D);
    }

    assert_eq!(
        controller.state().edge_counts,
        EdgeCountVector::new([3, 3, 3, 0, 3])
    );
    assert_eq!(
        controller.validate(&SavedVectorStore::new()),
        ValidationOutcome::Valid
    );
}

#[test]
fn overshooting_the_target_reports_too_far() {
    let mut controller = entered(1);
    for _ in 0..3 {
        walk(&mut controller, &LOOP_VIA_D);
    }
    walk(&mut controller, &[TransitionId::A_TO_B]);

    assert_eq!(
        controller.validate(&SavedVectorStore::new()),
        ValidationOutcome::Invalid(ValidationFailure::TraveledTooFar)
    );
}

#[test]
fn falling_short_of_the_target_reports_a_mismatch() {
    let mut controller = entered(1);
    for _ in 0..2 {
        walk(&mut controller, &LOOP_VIA_D);
    }
    walk(&mut controller, &LOOP_VIA_D[1..]);

    assert_eq!(
        controller.state().edge_counts,
        EdgeCountVector::new([2, 3, 3, 0, 3])
    );
    assert_eq!(
        controller.validate(&SavedVectorStore::new()),
        ValidationOutcome::Invalid(ValidationFailure::ValuesDontMatch)
    );
}

#[test]
fn end_room_levels_require_the_target_room() {
    let mut controller = entered(3);
    walk(&mut controller, &LOOP_VIA_D[..2]);
    assert_eq!(
        controller.validate(&SavedVectorStore::new()),
        ValidationOutcome::Invalid(ValidationFailure::WrongEndRoom { expected: Room::D })
    );

    walk(&mut controller, &[TransitionId::C_TO_D]);
    assert_eq!(controller.state().current_room, Room::D);
    assert!(controller.validate(&SavedVectorStore::new()).is_valid());
}

#[test]
fn multiplier_scales_counters_and_transfers() {
    let mut controller = entered(3);
    walk(&mut controller, &[TransitionId::A_TO_B]);

    let state = controller.state();
    assert_eq!(state.edge_counts.get(TransitionId::A_TO_B), 2);
    assert_eq!(state.populations, Populations::new([3, 7, 5, 5]));
}

#[test]
fn transfers_never_drive_a_room_negative() {
    let mut controller = entered(3);
    walk(&mut controller, &[TransitionId::A_TO_B, TransitionId::A_TO_B]);
    let after_two = controller.state().populations;
    assert_eq!(after_two.get(Room::A), 1);

    walk(&mut controller, &[TransitionId::A_TO_B]);
    let state = controller.state();
    assert_eq!(state.populations.get(Room::A), 0, "only one person was left to move");
    assert_eq!(state.populations.get(Room::B), 10);
    assert_eq!(state.populations.total(), 20, "clipped transfers conserve people");
}

#[test]
fn sandbox_credits_the_destination_even_from_an_empty_room() {
    let sandbox = descriptor(0);
    assert_eq!(sandbox.transfer_policy, TransferPolicy::Unbacked);

    let mut controller = entered(0);
    walk(&mut controller, &[TransitionId::A_TO_B]);

    let state = controller.state();
    assert_eq!(state.populations.get(Room::A), 0);
    assert_eq!(state.populations.get(Room::B), 1);
}

#[test]
fn restricted_arrows_follow_the_walker() {
    let mut controller = entered(1);
    assert!(controller.edge_enabled(TransitionId::A_TO_B));
    assert!(!controller.edge_enabled(TransitionId::B_TO_C));

    let events = traverse(&mut controller, TransitionId::A_TO_B);

    assert!(events.contains(&Event::EdgeEnabled {
        transition: TransitionId::B_TO_C,
        enabled: true,
    }));
    assert!(events.contains(&Event::EdgeEnabled {
        transition: TransitionId::A_TO_B,
        enabled: false,
    }));
    assert!(controller.edge_enabled(TransitionId::B_TO_C));
}

#[test]
fn traversal_away_from_the_walker_only_counts() {
    let mut controller = entered(4);
    let events = traverse(&mut controller, TransitionId::C_TO_D);

    assert_eq!(controller.state().current_room, Room::A);
    assert_eq!(controller.state().edge_counts.get(TransitionId::C_TO_D), 1);
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, Event::WalkerMoved { .. })),
        "the walker stays put when it is not at the source room"
    );
}

#[test]
fn read_only_matrix_ignores_edits_but_accepts_slot_loads() {
    let mut controller = entered(6);
    let mut events = Vec::new();

    controller.on_vector_edited(TransitionId::A_TO_B, 4, &mut events);
    assert!(events.is_empty());

    let saved = EdgeCountVector::new([1, 1, 1, 0, 1]);
    let slot = SlotIndex::new(0).expect("slot");
    controller.on_slot_loaded(slot, saved, &mut events);
    assert_eq!(controller.state().edge_counts, saved);
}

#[test]
fn scaled_levels_use_their_custom_validator() {
    let mut level_five = entered(5);
    assert_eq!(level_five.state().scalar, 2, "level 5 starts doubled");

    let mut events = Vec::new();
    for id in [
        TransitionId::A_TO_B,
        TransitionId::B_TO_C,
        TransitionId::C_TO_D,
        TransitionId::D_TO_A,
    ] {
        level_five.on_vector_edited(id, 3, &mut events);
    }
    assert!(events.contains(&Event::ResultVectorChanged {
        result: EdgeCountVector::new([6, 6, 6, 0, 6])
    }));
    assert!(level_five.validate(&SavedVectorStore::new()).is_valid());

    level_five.on_scalar_edited(3, &mut events);
    assert_eq!(
        level_five.validate(&SavedVectorStore::new()),
        ValidationOutcome::Invalid(ValidationFailure::ValuesDontMatch)
    );
}

#[test]
fn replay_restarts_from_the_descriptor_and_plans_the_walk() {
    let mut controller = entered(4);
    walk(&mut controller, &LOOP_VIA_D);

    let mut events = Vec::new();
    let plan = controller.begin_replay(&mut events).expect("generic levels replay");

    assert_eq!(plan.source, EdgeCountVector::new([1, 1, 1, 0, 1]));
    assert_eq!(
        plan.path.rooms(),
        &[Room::A, Room::B, Room::C, Room::D, Room::A]
    );
    let state = controller.state();
    assert_eq!(state.edge_counts, EdgeCountVector::ZERO);
    assert_eq!(state.populations, Populations::uniform(5));
}

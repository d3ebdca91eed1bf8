use hallways_core::{
    DeltaVector, EdgeCountVector, Event, LevelId, Operand, PuzzleVector, Room, RoomGraph,
    SavedVectorStore, SlotIndex, TransitionId,
};
use hallways_levels::{
    Controller, LevelCatalog, LevelController, WalkerMotion, GIVEN_DELTA, GIVEN_EDGE_COUNTS,
};

fn controller_for(id: u8) -> (LevelController, Vec<Event>) {
    let descriptor = LevelCatalog::builtin()
        .get(LevelId::new(id))
        .expect("level exists in the catalog");
    let mut controller = LevelController::for_descriptor(descriptor);
    let mut events = Vec::new();
    controller.enter(&mut events);
    (controller, events)
}

fn chrome_hidden(events: &[Event]) -> bool {
    events.contains(&Event::MatrixChromeChanged {
        brackets_visible: false,
        labels_visible: false,
    })
}

fn chrome_restored(events: &[Event]) -> bool {
    events.contains(&Event::MatrixChromeChanged {
        brackets_visible: true,
        labels_visible: true,
    }) && events.contains(&Event::MatrixCellsVisible { visible: true })
}

#[test]
fn factory_picks_the_controller_family_from_the_descriptor() {
    assert!(matches!(controller_for(1).0, LevelController::Generic(_)));
    assert!(matches!(controller_for(7).0, LevelController::InverseDelta(_)));
    assert!(matches!(controller_for(8).0, LevelController::DeltaToEdge(_)));
    assert!(matches!(
        controller_for(9).0,
        LevelController::LinearCombination(_)
    ));
}

#[test]
fn specialized_puzzles_hide_and_restore_the_matrix_chrome() {
    for id in 7..=9 {
        let (mut controller, entered) = controller_for(id);
        assert!(chrome_hidden(&entered), "level {id} hides the chrome");

        let mut exited = Vec::new();
        controller.exit(&mut exited);
        assert!(chrome_restored(&exited), "level {id} restores the chrome");
        assert!(exited.contains(&Event::PromptHidden));
    }
}

#[test]
fn specialized_puzzles_always_allow_advancing() {
    for id in 7..=9 {
        let (controller, _) = controller_for(id);
        assert!(
            controller.validate(&SavedVectorStore::new()).is_valid(),
            "level {id} has no pass/fail check"
        );
    }
}

#[test]
fn inverse_delta_shows_the_counts_and_records_answers() {
    let (mut controller, entered) = controller_for(7);
    assert!(entered.contains(&Event::PuzzleVectorShown {
        vector: PuzzleVector::GivenEdgeCounts(EdgeCountVector::new([5, 3, 5, 4, 7])),
    }));
    assert!(entered.contains(&Event::MatrixCellsVisible { visible: false }));

    let mut events = Vec::new();
    for (room, value) in Room::ALL.into_iter().zip([6, 2, -6, -2]) {
        controller.on_delta_edited(room, value, &mut events);
    }

    assert_eq!(
        controller.delta_answer(),
        Some(DeltaVector::new([6, 2, -6, -2]))
    );
    assert_eq!(controller.save_candidate(), None);
}

#[test]
fn inverse_delta_arrows_only_move_the_walker() {
    let (mut controller, _) = controller_for(7);
    let before = controller.state();

    let mut events = Vec::new();
    controller.on_edge_traversed(
        RoomGraph.transition(TransitionId::A_TO_B),
        WalkerMotion::Animate,
        &mut events,
    );

    let after = controller.state();
    assert_eq!(after.current_room, Room::B);
    assert_eq!(after.populations, before.populations);
    assert_eq!(after.edge_counts, EdgeCountVector::ZERO);
}

#[test]
fn delta_to_edge_keeps_the_cells_and_accepts_edits() {
    let (mut controller, entered) = controller_for(8);
    assert!(entered.contains(&Event::PuzzleVectorShown {
        vector: PuzzleVector::GivenDelta(GIVEN_DELTA),
    }));
    assert!(entered.contains(&Event::MatrixCellsVisible { visible: true }));
    assert!(entered.contains(&Event::MatrixEnabled { enabled: true }));

    let mut events = Vec::new();
    for (id, value) in TransitionId::ALL.into_iter().zip([5, 3, 5, 4, 7]) {
        controller.on_vector_edited(id, value, &mut events);
    }
    assert_eq!(controller.state().edge_counts, GIVEN_EDGE_COUNTS);
    assert_eq!(controller.save_candidate(), Some(GIVEN_EDGE_COUNTS));
}

#[test]
fn delta_to_edge_replay_keeps_the_entered_counts() {
    let (mut controller, _) = controller_for(8);
    let mut events = Vec::new();
    controller.on_vector_edited(TransitionId::A_TO_B, 1, &mut events);
    controller.on_vector_edited(TransitionId::B_TO_C, 1, &mut events);

    let plan = controller
        .begin_replay(&mut events)
        .expect("delta puzzle replays the entered counts");

    assert_eq!(plan.path.rooms(), &[Room::A, Room::B, Room::C]);
    assert_eq!(
        controller.state().edge_counts,
        EdgeCountVector::new([1, 1, 0, 0, 0])
    );
}

#[test]
fn linear_combination_matches_hand_computation() {
    let (mut controller, _) = controller_for(9);
    let mut events = Vec::new();
    let slot = |index| SlotIndex::new(index).expect("slot");

    controller.on_slot_loaded(slot(0), EdgeCountVector::new([1, 2, 3, 4, 5]), &mut events);
    controller.on_operand_selected(Operand::Right, &mut events);
    controller.on_slot_loaded(slot(1), EdgeCountVector::new([5, 4, 3, 2, 1]), &mut events);
    controller.on_operand_scalar_edited(Operand::Left, 2, &mut events);
    controller.on_operand_scalar_edited(Operand::Right, 3, &mut events);

    assert_eq!(
        events.last(),
        Some(&Event::CombinationChanged {
            left: EdgeCountVector::new([1, 2, 3, 4, 5]),
            a: 2,
            right: EdgeCountVector::new([5, 4, 3, 2, 1]),
            b: 3,
            result: EdgeCountVector::new([17, 16, 15, 14, 13]),
            active: Operand::Right,
        })
    );
}

#[test]
fn linear_combination_disables_arrows_and_offers_no_replay() {
    let (mut controller, entered) = controller_for(9);
    assert!(entered.contains(&Event::AllEdgesEnabled { enabled: false }));
    assert!(TransitionId::ALL
        .into_iter()
        .all(|id| !controller.edge_enabled(id)));
    assert!(controller.slot_click_always_loads());

    let mut events = Vec::new();
    assert_eq!(controller.begin_replay(&mut events), None);
    assert_eq!(controller.save_candidate(), None);
}

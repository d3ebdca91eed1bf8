use hallways_core::{EdgeCountVector, Room, TransitionId};
use hallways_system_path_simulator::{simulate, STEP_LIMIT};

#[test]
fn full_loops_return_to_the_start() {
    let path = simulate(Room::A, &EdgeCountVector::new([3, 3, 3, 0, 3]));

    assert_eq!(path.rooms().len(), 13);
    assert_eq!(path.end(), Room::A);
    assert!(!path.truncated());
    assert_eq!(
        &path.rooms()[..5],
        &[Room::A, Room::B, Room::C, Room::D, Room::A]
    );
}

#[test]
fn simulation_is_deterministic() {
    let counts = EdgeCountVector::new([5, 5, 3, 2, 3]);
    let first = simulate(Room::A, &counts);
    let second = simulate(Room::A, &counts);

    assert_eq!(first, second, "same inputs must reconstruct the same walk");
}

#[test]
fn branch_takes_c_to_a_when_d_would_strand_the_walker() {
    let path = simulate(Room::C, &EdgeCountVector::new([1, 1, 1, 1, 0]));

    assert_eq!(
        path.rooms()[1],
        Room::A,
        "with C5 exhausted and work left at A, the walker must leave C via C4"
    );
    assert_eq!(path.transitions()[0], TransitionId::C_TO_A);
    assert_eq!(
        path.into_rooms(),
        vec![Room::C, Room::A, Room::B, Room::C, Room::D]
    );
}

#[test]
fn mixed_vector_consumes_every_counter() {
    let counts = EdgeCountVector::new([5, 5, 3, 2, 3]);
    let path = simulate(Room::A, &counts);

    let mut taken = EdgeCountVector::ZERO;
    for &id in path.transitions() {
        taken.increment(id, 1);
    }
    assert_eq!(taken, counts);
    assert_eq!(path.end(), Room::A);
}

#[test]
fn walk_stops_when_the_current_room_has_no_counts() {
    let path = simulate(Room::B, &EdgeCountVector::new([4, 0, 4, 0, 4]));

    assert_eq!(path.rooms(), &[Room::B]);
    assert!(path.transitions().is_empty());
    assert!(!path.truncated());
}

#[test]
fn negative_counters_are_inert() {
    let path = simulate(Room::A, &EdgeCountVector::new([-2, 1, 0, 0, 0]));

    assert_eq!(path.rooms(), &[Room::A]);
}

#[test]
fn step_guard_truncates_long_walks() {
    let path = simulate(Room::A, &EdgeCountVector::new([600, 600, 600, 0, 600]));

    assert_eq!(path.transitions().len(), STEP_LIMIT);
    assert_eq!(path.rooms().len(), STEP_LIMIT + 1);
    assert!(path.truncated(), "guard-triggered stops are reported as truncated");
}

#[test]
fn walk_of_exactly_the_limit_is_not_truncated() {
    let path = simulate(Room::A, &EdgeCountVector::new([250, 250, 250, 0, 250]));

    assert_eq!(path.transitions().len(), STEP_LIMIT);
    assert!(!path.truncated());
}

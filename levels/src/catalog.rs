//! Ordered store of every level in the progression.

use hallways_core::{
    EdgeCountVector, LevelId, Populations, Room, ValidationFailure, ValidationOutcome,
};

use crate::descriptor::{LevelDescriptor, LevelKind, LevelStateView, TransferPolicy};

const STANDARD_POPULATIONS: Populations = Populations::uniform(5);
const ELEVATED_POPULATIONS: Populations = Populations::uniform(8);

/// Level the session enters when it boots.
pub const FIRST_LEVEL: LevelId = LevelId::new(1);

static LEVELS: [LevelDescriptor; 10] = [
    LevelDescriptor {
        initial_populations: Populations::EMPTY,
        matrix_enabled: true,
        show_matrix_brackets: true,
        show_counter_labels: true,
        show_save_ui: true,
        transfer_policy: TransferPolicy::Unbacked,
        ..LevelDescriptor::base(
            LevelId::SANDBOX,
            "Sandbox",
            "Sandbox Mode\n\nExperiment freely! Click arrows to move the green circle. \
             Edit vector values directly or use the Save button to store presets.",
        )
    },
    LevelDescriptor {
        initial_populations: STANDARD_POPULATIONS,
        show_counter_labels: true,
        restrict_arrows_to_current_room: true,
        target_vector: Some(EdgeCountVector::new([3, 3, 3, 0, 3])),
        ..LevelDescriptor::base(
            LevelId::new(1),
            "Level 1",
            "Level 1:\n\nClick the red arrows to move the green circle. Every time the circle \
             crosses a security camera, the camera increments its counter.\n\nCan you trace a \
             path that matches the counters below:\n\nC1 : 3\nC2 : 3\nC3 : 3\nC4 : 0\nC5 : 3",
        )
    },
    LevelDescriptor {
        initial_populations: STANDARD_POPULATIONS,
        show_counter_labels: true,
        restrict_arrows_to_current_room: true,
        target_vector: Some(EdgeCountVector::new([5, 5, 3, 2, 3])),
        ..LevelDescriptor::base(
            LevelId::new(2),
            "Level 2",
            "Level 2:\n\nClick the red arrows to move the green circle. Every time the circle \
             crosses a security camera, the camera increments its counter.\n\nCan you trace a \
             path that matches the counters below:\n\nC1 : 5\nC2 : 5\nC3 : 3\nC4 : 2\nC5 : 3",
        )
    },
    LevelDescriptor {
        initial_populations: STANDARD_POPULATIONS,
        show_counter_labels: true,
        restrict_arrows_to_current_room: true,
        movement_multiplier: 2,
        target_end_room: Some(Room::D),
        ..LevelDescriptor::base(
            LevelId::new(3),
            "Level 3",
            "Level 3:\n\nCan you help Ella and Jack reach the Drama Room from the Art room, \
             using any path?\n\nNotice how the camera values change as they cross the camera \
             paths in the hallways.",
        )
    },
    LevelDescriptor {
        initial_populations: STANDARD_POPULATIONS,
        matrix_enabled: true,
        show_matrix_brackets: true,
        show_counter_labels: true,
        show_save_ui: true,
        ..LevelDescriptor::base(
            LevelId::new(4),
            "Level 4",
            "Save a vector that represents one round of the hallways, starting from Room A, \
             visiting all the rooms and then ending up at Room A.\n\nMove the green circle to \
             trace the path. When done, press Save and choose a slot.",
        )
    },
    LevelDescriptor {
        initial_populations: STANDARD_POPULATIONS,
        matrix_enabled: true,
        show_matrix_brackets: true,
        show_counter_labels: true,
        show_save_ui: true,
        show_scalar_ui: true,
        default_scalar: Some(2),
        custom_validate: Some(scaled_matches_six),
        ..LevelDescriptor::base(
            LevelId::new(5),
            "Level 5",
            "For this level, every time you move someone from a room, 1 of their friends also \
             tag along.\n\nCan you match the resulting values with [6,6,6,0,6]?",
        )
    },
    LevelDescriptor {
        initial_populations: ELEVATED_POPULATIONS,
        show_matrix_brackets: true,
        show_counter_labels: true,
        show_save_ui: true,
        show_scalar_ui: true,
        default_scalar: Some(1),
        custom_validate: Some(scaled_matches_eight),
        ..LevelDescriptor::base(
            LevelId::new(6),
            "Level 6",
            "Use your saved vector to trace the path [8,8,8,0,8]. You can change the \
             multiplier. To edit the saved vector, go to a previous level.",
        )
    },
    LevelDescriptor {
        kind: LevelKind::InverseDelta,
        initial_populations: ELEVATED_POPULATIONS,
        ..LevelDescriptor::base(
            LevelId::new(7),
            "Level 7",
            "Level 7:\n\nIf the camera vector captures the following data, what would be the \
             delta vector for this scenario?\n\nThe delta vector represents the change in \
             population for each room (A, B, C, D).",
        )
    },
    LevelDescriptor {
        kind: LevelKind::DeltaToEdge,
        initial_populations: ELEVATED_POPULATIONS,
        matrix_enabled: true,
        ..LevelDescriptor::base(
            LevelId::new(8),
            "Level 8",
            "Level 8:\n\nFor the following delta vector (change in room populations), \
             determine the camera vector that would produce this result.\n\nThe delta vector \
             shows: A gained 6, B gained 2, C lost 6, D lost 2.",
        )
    },
    LevelDescriptor {
        kind: LevelKind::LinearCombination,
        initial_populations: ELEVATED_POPULATIONS,
        arrows_enabled: false,
        show_save_ui: true,
        ..LevelDescriptor::base(
            LevelId::new(9),
            "Level 9",
            "Level 9:\n\nUse two saved vectors to create a linear combination:\n\n\
             a \u{d7} Left + b \u{d7} Right = Result\n\nClick a slot to fill the highlighted \
             vector. Click a vector to switch which one is active.",
        )
    },
];

fn scaled_matches(view: &LevelStateView, target: EdgeCountVector) -> ValidationOutcome {
    if view.edge_counts.scaled(view.scalar) == target {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::Invalid(ValidationFailure::ValuesDontMatch)
    }
}

fn scaled_matches_six(view: &LevelStateView) -> ValidationOutcome {
    scaled_matches(view, EdgeCountVector::new([6, 6, 6, 0, 6]))
}

fn scaled_matches_eight(view: &LevelStateView) -> ValidationOutcome {
    scaled_matches(view, EdgeCountVector::new([8, 8, 8, 0, 8]))
}

/// Ordered list of level descriptors.
#[derive(Clone, Copy, Debug)]
pub struct LevelCatalog {
    levels: &'static [LevelDescriptor],
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LevelCatalog {
    /// The built-in hallways progression, sandbox first.
    #[must_use]
    pub fn builtin() -> Self {
        Self { levels: &LEVELS }
    }

    /// Looks up the descriptor of `id`.
    #[must_use]
    pub fn get(&self, id: LevelId) -> Option<&'static LevelDescriptor> {
        self.levels.iter().find(|descriptor| descriptor.id == id)
    }

    /// Level that follows `id` in the progression, or `None` after the last one.
    #[must_use]
    pub fn next(&self, id: LevelId) -> Option<LevelId> {
        let position = self
            .levels
            .iter()
            .position(|descriptor| descriptor.id == id)?;
        self.levels.get(position + 1).map(|descriptor| descriptor.id)
    }

    /// Iterates over every descriptor in progression order.
    pub fn iter(&self) -> impl Iterator<Item = &'static LevelDescriptor> {
        self.levels.iter()
    }
}

//! Immutable per-level configuration.

use hallways_core::{
    EdgeCountVector, LevelId, Populations, Room, SavedVectorStore, ValidationOutcome,
};

/// Custom validation hook for levels whose goal is not a plain target.
pub type CustomValidator = fn(&LevelStateView) -> ValidationOutcome;

/// Controller family that drives a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LevelKind {
    /// Driven entirely by the descriptor.
    Generic,
    /// Given camera counts, the player derives the per-room delta.
    InverseDelta,
    /// Given a per-room delta, the player derives the camera counts.
    DeltaToEdge,
    /// The player combines two saved vectors with scalars.
    LinearCombination,
}

/// How population moves when the walker crosses a hallway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferPolicy {
    /// Move at most the source population; an empty source moves nothing.
    Clipped,
    /// Like [`TransferPolicy::Clipped`], except an empty source still credits
    /// the destination with the full multiplier.
    ///
    /// Only the sandbox uses this; the unmatched gain is kept on purpose
    /// until product decides otherwise.
    Unbacked,
}

/// Read-only state handed to custom validators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStateView {
    /// Level being validated.
    pub level: LevelId,
    /// Room the walker occupies.
    pub current_room: Room,
    /// People per room.
    pub populations: Populations,
    /// Current edge-count vector.
    pub edge_counts: EdgeCountVector,
    /// Current level scalar.
    pub scalar: i32,
    /// Contents of the session save slots.
    pub saved_vectors: SavedVectorStore,
}

/// Immutable configuration of a single level.
#[derive(Clone, Copy, Debug)]
pub struct LevelDescriptor {
    /// Identifier of the level.
    pub id: LevelId,
    /// Title shown above the board.
    pub name: &'static str,
    /// Prompt shown in the side panel.
    pub prompt: &'static str,
    /// Controller family that drives the level.
    pub kind: LevelKind,
    /// Room the walker starts in.
    pub start_room: Room,
    /// People per room when the level is entered.
    pub initial_populations: Populations,
    /// Whether the 5-cell matrix accepts edits.
    pub matrix_enabled: bool,
    /// Whether the hallway arrows accept clicks.
    pub arrows_enabled: bool,
    /// Whether only the arrows leaving the walker's room are enabled.
    pub restrict_arrows_to_current_room: bool,
    /// Whether the matrix brackets are drawn.
    pub show_matrix_brackets: bool,
    /// Whether the `C1`..`C5` labels are drawn.
    pub show_counter_labels: bool,
    /// Whether the save button and slots are drawn.
    pub show_save_ui: bool,
    /// Counter increment and transfer size per traversal.
    pub movement_multiplier: u32,
    /// Whether the scalar widget and result vector are drawn.
    pub show_scalar_ui: bool,
    /// Scalar applied when the level is entered.
    pub default_scalar: Option<i32>,
    /// Counters the player must reproduce exactly.
    pub target_vector: Option<EdgeCountVector>,
    /// Room the walker must finish in.
    pub target_end_room: Option<Room>,
    /// Validation that replaces the target checks entirely.
    pub custom_validate: Option<CustomValidator>,
    /// How population moves on traversal.
    pub transfer_policy: TransferPolicy,
}

impl LevelDescriptor {
    /// Baseline descriptor: generic, starting in room A with every optional
    /// feature switched off.
    #[must_use]
    pub const fn base(id: LevelId, name: &'static str, prompt: &'static str) -> Self {
        Self {
            id,
            name,
            prompt,
            kind: LevelKind::Generic,
            start_room: Room::A,
            initial_populations: Populations::EMPTY,
            matrix_enabled: false,
            arrows_enabled: true,
            restrict_arrows_to_current_room: false,
            show_matrix_brackets: false,
            show_counter_labels: false,
            show_save_ui: false,
            movement_multiplier: 1,
            show_scalar_ui: false,
            default_scalar: None,
            target_vector: None,
            target_end_room: None,
            custom_validate: None,
            transfer_policy: TransferPolicy::Clipped,
        }
    }

    /// Scalar the level starts with.
    #[must_use]
    pub fn initial_scalar(&self) -> i32 {
        self.default_scalar.unwrap_or(1)
    }

    /// Counter increment per traversal as a signed amount.
    #[must_use]
    pub fn counter_increment(&self) -> i32 {
        i32::try_from(self.movement_multiplier).unwrap_or(i32::MAX)
    }
}

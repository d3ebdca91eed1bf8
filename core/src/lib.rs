#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hallways level engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and the level controllers. Adapters submit
//! [`Command`] values describing player input, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that presentation adapters turn into renderer and display calls.

mod graph;
mod slots;
mod vector;

use std::{fmt, time::Duration};

use serde::{Deserialize, Serialize};

pub use graph::{Room, RoomGraph, Transition, TransitionId, ROOM_COUNT, TRANSITION_COUNT};
pub use slots::{SavedVectorStore, SlotIndex, SLOT_COUNT};
pub use vector::{DeltaVector, EdgeCountVector, Populations};

/// Identifier of a level in the fixed progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(u8);

impl LevelId {
    /// Free-play level whose transfers are not backed by the source room.
    pub const SANDBOX: Self = Self(0);

    /// Creates a level identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}", self.0)
    }
}

/// One of the two operand slots of the linear-combination puzzle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operand {
    /// Operand multiplied by `a`.
    #[default]
    Left,
    /// Operand multiplied by `b`.
    Right,
}

impl Operand {
    /// The other operand.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Exits the active level and enters the requested one.
    ChangeLevel {
        /// Level to enter.
        level: LevelId,
    },
    /// Re-enters the active level from its descriptor.
    ResetLevel,
    /// Validates the active level and advances to the next one on success.
    AdvanceLevel,
    /// Freezes the clock and suspends animations.
    Pause,
    /// Unfreezes the clock and resumes animations.
    Resume,
    /// Pauses a running session or resumes a paused one.
    TogglePause,
    /// Advances wall-clock time by the provided delta.
    Tick {
        /// Time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Reports that the player clicked the arrow of a hallway.
    TraverseEdge {
        /// Hallway whose arrow was clicked.
        transition: TransitionId,
    },
    /// Overwrites one cell of the edge-count vector.
    EditCell {
        /// Camera whose cell was edited.
        transition: TransitionId,
        /// Sanitized cell value.
        value: i32,
    },
    /// Overwrites the level scalar.
    SetScalar {
        /// Sanitized scalar value.
        value: i32,
    },
    /// Overwrites one cell of the inverse-delta puzzle's answer vector.
    EditDeltaCell {
        /// Room whose delta cell was edited.
        room: Room,
        /// Sanitized cell value.
        value: i32,
    },
    /// Makes the provided operand the target of slot loads.
    SelectOperand {
        /// Operand whose display was clicked.
        operand: Operand,
    },
    /// Overwrites the scalar attached to one operand.
    SetOperandScalar {
        /// Operand whose scalar was edited.
        operand: Operand,
        /// Sanitized scalar value.
        value: i32,
    },
    /// Captures the current vector so the next slot click stores it.
    ArmSave,
    /// Reports a click on a save slot.
    ClickSlot {
        /// Slot that was clicked.
        slot: SlotIndex,
    },
    /// Replays the current edge-count vector as an animated walk.
    StartReplay,
    /// Reports that the walker finished its current animated move.
    WalkerArrived,
}

/// Reasons a level change may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum LevelChangeError {
    /// No descriptor exists for the requested level.
    #[error("level {0} does not exist")]
    UnknownLevel(u8),
}

/// Reasons an arrow click may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum TraversalError {
    /// The arrow is disabled for the current level or room.
    #[error("that hallway is not available right now")]
    EdgeDisabled,
    /// An animated replay owns the walker.
    #[error("wait for the replay to finish")]
    ReplayInFlight,
    /// The session is paused.
    #[error("the game is paused")]
    Paused,
    /// No level is active.
    #[error("no level is active")]
    NoActiveLevel,
}

/// Why a level refused to let the player advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
pub enum ValidationFailure {
    /// At least one counter exceeds the target.
    #[error("The circle traveled more than required.")]
    TraveledTooFar,
    /// At least one counter falls short of, or otherwise differs from, the target.
    #[error("The values don't match")]
    ValuesDontMatch,
    /// The walker did not finish in the required room.
    #[error("Not quite yet, end at {expected} to proceed.")]
    WrongEndRoom {
        /// Room the walker must end in.
        expected: Room,
    },
}

/// Result of validating the active level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// The level is solved.
    Valid,
    /// The level is not solved yet.
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    /// Reports whether the level is solved.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Player-facing message describing the failure, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(failure) => Some(failure.to_string()),
        }
    }
}

/// Fixed vector a specialized puzzle displays next to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PuzzleVector {
    /// Camera counts the player must translate into a delta vector.
    GivenEdgeCounts(EdgeCountVector),
    /// Room deltas the player must translate into camera counts.
    GivenDelta(DeltaVector),
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A level became active; the display should update its title.
    LevelEntered {
        /// Level that became active.
        level: LevelId,
        /// Title of the level.
        name: &'static str,
    },
    /// The previously active level was exited.
    LevelExited {
        /// Level that stopped being active.
        level: LevelId,
    },
    /// The prompt panel should show the provided text.
    PromptShown {
        /// Prompt text.
        text: &'static str,
    },
    /// The prompt panel should be hidden.
    PromptHidden,
    /// The 5-cell matrix accepts or refuses edits.
    MatrixEnabled {
        /// Whether the cells accept edits.
        enabled: bool,
    },
    /// Visibility of the matrix brackets and camera labels changed.
    MatrixChromeChanged {
        /// Whether the brackets are drawn.
        brackets_visible: bool,
        /// Whether the `C1`..`C5` labels are drawn.
        labels_visible: bool,
    },
    /// Visibility of the 5 matrix cells changed.
    MatrixCellsVisible {
        /// Whether the cells are drawn.
        visible: bool,
    },
    /// Visibility of the save button and slots changed.
    SaveUiVisible {
        /// Whether the save UI is drawn.
        visible: bool,
    },
    /// Visibility of the scalar widget and result vector changed.
    ScalarUiVisible {
        /// Whether the scalar UI is drawn.
        visible: bool,
    },
    /// The edge-count vector changed.
    EdgeCountsChanged {
        /// New counter values.
        counts: EdgeCountVector,
    },
    /// The level scalar changed.
    ScalarChanged {
        /// New scalar value.
        value: i32,
    },
    /// The scalar result vector changed.
    ResultVectorChanged {
        /// Counters multiplied by the scalar.
        result: EdgeCountVector,
    },
    /// Room populations changed.
    PopulationsChanged {
        /// New per-room populations.
        populations: Populations,
    },
    /// A specialized puzzle displays its fixed vector.
    PuzzleVectorShown {
        /// Vector to display.
        vector: PuzzleVector,
    },
    /// The inverse-delta puzzle's answer vector changed.
    DeltaInputChanged {
        /// Current answer cells.
        values: DeltaVector,
    },
    /// The linear-combination puzzle changed.
    CombinationChanged {
        /// Left operand.
        left: EdgeCountVector,
        /// Scalar applied to the left operand.
        a: i32,
        /// Right operand.
        right: EdgeCountVector,
        /// Scalar applied to the right operand.
        b: i32,
        /// `a * left + b * right`.
        result: EdgeCountVector,
        /// Operand that receives slot loads.
        active: Operand,
    },
    /// Every arrow was enabled or disabled.
    AllEdgesEnabled {
        /// Whether the arrows accept clicks.
        enabled: bool,
    },
    /// A single arrow was enabled or disabled.
    EdgeEnabled {
        /// Hallway whose arrow changed.
        transition: TransitionId,
        /// Whether the arrow accepts clicks.
        enabled: bool,
    },
    /// An arrow should pulse to acknowledge a traversal.
    EdgePulsed {
        /// Hallway that was traversed.
        transition: TransitionId,
    },
    /// The walker marker should move to a room.
    WalkerMoved {
        /// Destination room.
        room: Room,
        /// Whether the move is animated; animated moves are acknowledged with
        /// [`Command::WalkerArrived`] when they belong to a replay.
        animate: bool,
    },
    /// An arrow click was refused.
    TraversalRejected {
        /// Hallway whose arrow was clicked.
        transition: TransitionId,
        /// Why the click was refused.
        reason: TraversalError,
    },
    /// The active level refused to advance.
    ValidationFailed {
        /// Level that was validated.
        level: LevelId,
        /// Failure to surface to the player.
        failure: ValidationFailure,
    },
    /// The active level validated and the session moves on.
    LevelCompleted {
        /// Level that was solved.
        level: LevelId,
    },
    /// The last level validated; no levels remain.
    SessionCompleted,
    /// A level change request was refused.
    LevelChangeRejected {
        /// Level that was requested.
        requested: LevelId,
        /// Why the request was refused.
        reason: LevelChangeError,
    },
    /// The level clock was refreshed.
    TimeAdvanced {
        /// Elapsed running time of the active level.
        elapsed: Duration,
    },
    /// The session paused; animations must stop.
    Paused,
    /// The session resumed; animations may continue.
    Resumed,
    /// A vector was captured and the slots should be highlighted.
    SaveArmed {
        /// Vector waiting for a slot.
        vector: EdgeCountVector,
    },
    /// The pending save was committed or discarded; slot highlights end.
    SaveDisarmed,
    /// A vector was stored in a slot.
    SlotSaved {
        /// Slot that was written.
        slot: SlotIndex,
        /// Stored vector.
        vector: EdgeCountVector,
    },
    /// A stored vector was loaded into the active level.
    SlotLoaded {
        /// Slot that was read.
        slot: SlotIndex,
        /// Loaded vector.
        vector: EdgeCountVector,
    },
    /// An empty slot was clicked with nothing to save.
    SlotEmpty {
        /// Slot that was clicked.
        slot: SlotIndex,
    },
    /// An animated replay began.
    ReplayStarted {
        /// Rooms the walker will visit, including the start room.
        path: Vec<Room>,
        /// Whether the step guard cut the path short.
        truncated: bool,
    },
    /// The animated replay visited its final room.
    ReplayFinished,
    /// A replay request arrived while another replay was in flight.
    ReplayIgnored,
}

/// Lifecycle phase of the session state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No level has been entered yet.
    #[default]
    Idle,
    /// A level is active and its clock is running.
    LevelActive,
    /// A level is active and its clock is frozen.
    Paused,
    /// The final level validated.
    Finished,
}

/// Read-only aggregate of session state for the display layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Active level, if any.
    pub level: Option<LevelId>,
    /// Lifecycle phase of the session.
    pub phase: SessionPhase,
    /// Room the walker occupies.
    pub current_room: Room,
    /// People per room.
    pub populations: Populations,
    /// Current edge-count vector.
    pub edge_counts: EdgeCountVector,
    /// Current level scalar.
    pub scalar: i32,
    /// Contents of the save slots.
    pub saved_vectors: SavedVectorStore,
    /// Running time of the active level.
    pub elapsed: Duration,
    /// Whether the clock is frozen.
    pub paused: bool,
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Presentation contracts for the Hallways level engine.
//!
//! The world never draws anything. It broadcasts [`Event`] values, and the
//! [`Presenter`] routes them to the two collaborators an adapter provides:
//! a [`BoardRenderer`] for the rooms, hallways and walker, and a
//! [`DisplaySurface`] for the side panel (prompt, matrix, slots, timer).

mod input;

use hallways_core::{
    DeltaVector, EdgeCountVector, Event, LevelId, Operand, Populations, PuzzleVector, Room,
    SlotIndex, TransitionId,
};

pub use input::{format_timer, parse_cell, parse_operand_scalar, parse_scalar};

/// Board collaborator that visualizes rooms, hallways and the walker.
pub trait BoardRenderer {
    /// Moves the walker marker; animated moves must be acknowledged with
    /// `Command::WalkerArrived` once they complete.
    fn move_walker_to(&mut self, room: Room, animate: bool);

    /// Enables or disables the arrow of a single hallway.
    fn set_edge_enabled(&mut self, transition: TransitionId, enabled: bool);

    /// Enables or disables every arrow at once.
    fn set_all_edges_enabled(&mut self, enabled: bool);

    /// Briefly highlights a hallway that was just traversed.
    fn pulse_edge(&mut self, transition: TransitionId);

    /// Redraws the people markers inside each room.
    fn update_room_population_markers(&mut self, populations: &Populations);

    /// Halts or resumes every running animation.
    fn set_animations_suspended(&mut self, _suspended: bool) {}
}

/// Linear-combination state as shown next to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombinationView {
    /// Left operand.
    pub left: EdgeCountVector,
    /// Scalar of the left operand.
    pub a: i32,
    /// Right operand.
    pub right: EdgeCountVector,
    /// Scalar of the right operand.
    pub b: i32,
    /// `a * left + b * right`.
    pub result: EdgeCountVector,
    /// Operand that receives slot loads.
    pub active: Operand,
}

/// Side-panel collaborator: prompt, vector cells, widgets and read-only displays.
pub trait DisplaySurface {
    /// Shows the title of the level that just became active.
    fn set_title(&mut self, level: LevelId, name: &str);

    /// Shows the prompt panel.
    fn show_prompt(&mut self, text: &str);

    /// Hides the prompt panel.
    fn hide_prompt(&mut self);

    /// Writes every cell of the 5-cell matrix.
    fn set_cells(&mut self, counts: &EdgeCountVector);

    /// Lets the matrix accept or refuse edits.
    fn set_matrix_enabled(&mut self, enabled: bool);

    /// Shows or hides the matrix brackets and `C1`..`C5` labels.
    fn set_matrix_chrome(&mut self, brackets_visible: bool, labels_visible: bool);

    /// Shows or hides the matrix cells themselves.
    fn set_cells_visible(&mut self, visible: bool);

    /// Shows or hides the save button and slots.
    fn set_save_ui_visible(&mut self, visible: bool);

    /// Shows or hides the scalar widget and result vector.
    fn set_scalar_ui_visible(&mut self, visible: bool);

    /// Writes the scalar widget.
    fn set_scalar(&mut self, value: i32);

    /// Writes the scalar result vector.
    fn set_result_vector(&mut self, result: &EdgeCountVector);

    /// Writes the occupancy readout.
    fn update_occupancy(&mut self, populations: &Populations);

    /// Writes the `mm:ss` timer.
    fn update_timer(&mut self, text: &str);

    /// Shows the fixed vector of a specialized puzzle.
    fn show_puzzle_vector(&mut self, vector: &PuzzleVector);

    /// Writes the answer cells of the inverse-delta puzzle.
    fn set_delta_input(&mut self, values: &DeltaVector);

    /// Writes the operands and result of the linear-combination puzzle.
    fn show_combination(&mut self, combination: &CombinationView);

    /// Highlights the slots while a save waits for a target.
    fn highlight_slots(&mut self, highlighted: bool);

    /// Redraws one slot after it was written.
    fn update_slot(&mut self, slot: SlotIndex, vector: &EdgeCountVector);

    /// Shows or hides the pause overlay.
    fn set_paused(&mut self, paused: bool);

    /// Shows a transient message to the player.
    fn show_message(&mut self, message: &str);
}

/// Routes world events to the board and display collaborators.
#[derive(Debug, Default)]
pub struct Presenter {
    timer_text: Option<String>,
}

impl Presenter {
    /// Creates a presenter with no timer shown yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents every event in order.
    pub fn present<B, D>(&mut self, events: &[Event], board: &mut B, display: &mut D)
    where
        B: BoardRenderer + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        for event in events {
            self.present_one(event, board, display);
        }
    }

    fn present_one<B, D>(&mut self, event: &Event, board: &mut B, display: &mut D)
    where
        B: BoardRenderer + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        match event {
            Event::LevelEntered { level, name } => {
                self.timer_text = None;
                display.set_title(*level, name);
            }
            Event::LevelExited { level } => log::debug!("{level} left the screen"),
            Event::PromptShown { text } => display.show_prompt(text),
            Event::PromptHidden => display.hide_prompt(),
            Event::MatrixEnabled { enabled } => display.set_matrix_enabled(*enabled),
            Event::MatrixChromeChanged {
                brackets_visible,
                labels_visible,
            } => display.set_matrix_chrome(*brackets_visible, *labels_visible),
            Event::MatrixCellsVisible { visible } => display.set_cells_visible(*visible),
            Event::SaveUiVisible { visible } => display.set_save_ui_visible(*visible),
            Event::ScalarUiVisible { visible } => display.set_scalar_ui_visible(*visible),
            Event::EdgeCountsChanged { counts } => display.set_cells(counts),
            Event::ScalarChanged { value } => display.set_scalar(*value),
            Event::ResultVectorChanged { result } => display.set_result_vector(result),
            Event::PopulationsChanged { populations } => {
                board.update_room_population_markers(populations);
                display.update_occupancy(populations);
            }
            Event::PuzzleVectorShown { vector } => display.show_puzzle_vector(vector),
            Event::DeltaInputChanged { values } => display.set_delta_input(values),
            Event::CombinationChanged {
                left,
                a,
                right,
                b,
                result,
                active,
            } => display.show_combination(&CombinationView {
                left: *left,
                a: *a,
                right: *right,
                b: *b,
                result: *result,
                active: *active,
            }),
            Event::AllEdgesEnabled { enabled } => board.set_all_edges_enabled(*enabled),
            Event::EdgeEnabled {
                transition,
                enabled,
            } => board.set_edge_enabled(*transition, *enabled),
            Event::EdgePulsed { transition } => board.pulse_edge(*transition),
            Event::WalkerMoved { room, animate } => board.move_walker_to(*room, *animate),
            Event::TraversalRejected { transition, reason } => {
                display.show_message(&format!("{}: {reason}", transition.label()));
            }
            Event::ValidationFailed { failure, .. } => display.show_message(&failure.to_string()),
            Event::LevelCompleted { level } => {
                display.show_message(&format!("Completed {level}!"));
            }
            Event::SessionCompleted => display.show_message("Every level is complete. Well done!"),
            Event::LevelChangeRejected { reason, .. } => display.show_message(&reason.to_string()),
            Event::TimeAdvanced { elapsed } => {
                let text = format_timer(*elapsed);
                if self.timer_text.as_deref() != Some(text.as_str()) {
                    display.update_timer(&text);
                    self.timer_text = Some(text);
                }
            }
            Event::Paused => {
                board.set_animations_suspended(true);
                display.set_paused(true);
            }
            Event::Resumed => {
                board.set_animations_suspended(false);
                display.set_paused(false);
            }
            Event::SaveArmed { .. } => display.highlight_slots(true),
            Event::SaveDisarmed => display.highlight_slots(false),
            Event::SlotSaved { slot, vector } => display.update_slot(*slot, vector),
            Event::SlotLoaded { slot, vector } => {
                display.show_message(&format!("Loaded {vector} from {slot}"));
            }
            Event::SlotEmpty { slot } => display.show_message(&format!("{slot} is empty")),
            Event::ReplayStarted { truncated, .. } => {
                if *truncated {
                    display.show_message("The path is too long; replaying its beginning.");
                }
            }
            Event::ReplayFinished => log::debug!("replay finished on screen"),
            Event::ReplayIgnored => display.show_message("A replay is already running."),
        }
    }
}

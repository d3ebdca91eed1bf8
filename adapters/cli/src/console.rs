//! Text rendering of the board and side panel.

use hallways_core::{
    DeltaVector, EdgeCountVector, Event, LevelId, Operand, Populations, PuzzleVector, Room,
    SessionSnapshot, SlotIndex, TransitionId,
};
use hallways_levels::LevelCatalog;
use hallways_presentation::{format_timer, BoardRenderer, CombinationView, DisplaySurface, Presenter};

/// Board half of the console: walker and pending animation.
#[derive(Debug, Default)]
struct TextBoard {
    lines: Vec<String>,
    animating: bool,
    suspended: bool,
}

impl BoardRenderer for TextBoard {
    fn move_walker_to(&mut self, room: Room, animate: bool) {
        if animate {
            self.animating = true;
            self.lines.push(format!("walker ~> {room}"));
        } else {
            self.lines.push(format!("walker -> {room}"));
        }
    }

    fn set_edge_enabled(&mut self, transition: TransitionId, enabled: bool) {
        log::trace!("arrow {transition} enabled={enabled}");
    }

    fn set_all_edges_enabled(&mut self, enabled: bool) {
        log::trace!("all arrows enabled={enabled}");
    }

    fn pulse_edge(&mut self, transition: TransitionId) {
        self.lines.push(format!("camera {transition} fires"));
    }

    fn update_room_population_markers(&mut self, populations: &Populations) {
        log::trace!("markers {populations}");
    }

    fn set_animations_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }
}

/// Panel half of the console: prompt, matrix, widgets and messages.
#[derive(Debug, Default)]
struct TextPanel {
    lines: Vec<String>,
    matrix_enabled: bool,
    cells_visible: bool,
    save_ui: bool,
    scalar_ui: bool,
}

impl DisplaySurface for TextPanel {
    fn set_title(&mut self, _level: LevelId, name: &str) {
        self.lines.push(format!("== {name} =="));
    }

    fn show_prompt(&mut self, text: &str) {
        self.lines.push(format!("> {text}"));
    }

    fn hide_prompt(&mut self) {}

    fn set_cells(&mut self, counts: &EdgeCountVector) {
        if self.cells_visible {
            let mode = if self.matrix_enabled { "" } else { " (locked)" };
            self.lines.push(format!("cameras {counts}{mode}"));
        }
    }

    fn set_matrix_enabled(&mut self, enabled: bool) {
        self.matrix_enabled = enabled;
    }

    fn set_matrix_chrome(&mut self, brackets_visible: bool, labels_visible: bool) {
        log::trace!("matrix chrome brackets={brackets_visible} labels={labels_visible}");
    }

    fn set_cells_visible(&mut self, visible: bool) {
        self.cells_visible = visible;
    }

    fn set_save_ui_visible(&mut self, visible: bool) {
        self.save_ui = visible;
    }

    fn set_scalar_ui_visible(&mut self, visible: bool) {
        self.scalar_ui = visible;
    }

    fn set_scalar(&mut self, value: i32) {
        if self.scalar_ui {
            self.lines.push(format!("scalar {value}"));
        }
    }

    fn set_result_vector(&mut self, result: &EdgeCountVector) {
        if self.scalar_ui {
            self.lines.push(format!("result {result}"));
        }
    }

    fn update_occupancy(&mut self, populations: &Populations) {
        self.lines.push(format!("occupancy {populations}"));
    }

    fn update_timer(&mut self, text: &str) {
        self.lines.push(format!("time {text}"));
    }

    fn show_puzzle_vector(&mut self, vector: &PuzzleVector) {
        self.lines.push(match vector {
            PuzzleVector::GivenEdgeCounts(counts) => format!("given cameras {counts}"),
            PuzzleVector::GivenDelta(delta) => format!("given delta {delta}"),
        });
    }

    fn set_delta_input(&mut self, values: &DeltaVector) {
        self.lines.push(format!("delta answer {values}"));
    }

    fn show_combination(&mut self, combination: &CombinationView) {
        let marker = |operand: Operand| if combination.active == operand { "*" } else { "" };
        self.lines.push(format!(
            "{}{} {} + {}{} {} = {}",
            combination.a,
            marker(Operand::Left),
            combination.left,
            combination.b,
            marker(Operand::Right),
            combination.right,
            combination.result
        ));
    }

    fn highlight_slots(&mut self, highlighted: bool) {
        if highlighted {
            self.lines.push("pick a slot to save into".to_owned());
        }
    }

    fn update_slot(&mut self, slot: SlotIndex, vector: &EdgeCountVector) {
        if self.save_ui {
            self.lines.push(format!("{slot} <- {vector}"));
        }
    }

    fn set_paused(&mut self, paused: bool) {
        self.lines
            .push(if paused { "paused" } else { "resumed" }.to_owned());
    }

    fn show_message(&mut self, message: &str) {
        self.lines.push(format!("! {message}"));
    }
}

/// Board and display collaborators that write one line per visible change.
#[derive(Debug, Default)]
pub(crate) struct Console {
    board: TextBoard,
    panel: TextPanel,
    lines: Vec<String>,
}

impl Console {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Renders `events`, keeping their lines in event order.
    pub(crate) fn present(&mut self, presenter: &mut Presenter, events: &[Event]) {
        for event in events {
            presenter.present(std::slice::from_ref(event), &mut self.board, &mut self.panel);
            self.lines.append(&mut self.board.lines);
            self.lines.append(&mut self.panel.lines);
        }
    }

    /// Drains the lines produced since the previous call.
    pub(crate) fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Completes the pending walker animation, unless animations are halted.
    pub(crate) fn take_arrival(&mut self) -> bool {
        if self.board.suspended {
            return false;
        }
        std::mem::replace(&mut self.board.animating, false)
    }

    /// Prints the progression, marking the active level.
    pub(crate) fn show_levels(&mut self, catalog: &LevelCatalog, active: Option<LevelId>) {
        for descriptor in catalog.iter() {
            let marker = if Some(descriptor.id) == active { "*" } else { " " };
            self.lines
                .push(format!("{marker} {} {}", descriptor.id.get(), descriptor.name));
        }
    }

    /// Prints the full session state; `arrows` are the hallways that accept clicks.
    pub(crate) fn show_snapshot(&mut self, snapshot: &SessionSnapshot, arrows: &[TransitionId]) {
        let level = snapshot
            .level
            .map_or_else(|| "no level".to_owned(), |level| level.to_string());
        self.lines
            .push(format!("-- {level} ({:?}) --", snapshot.phase));
        self.lines.push(format!(
            "walker in {} ({})",
            snapshot.current_room,
            snapshot.current_room.name()
        ));
        self.lines
            .push(format!("occupancy {}", snapshot.populations));
        self.lines.push(format!("cameras {}", snapshot.edge_counts));
        self.lines.push(format!("scalar {}", snapshot.scalar));
        let arrows: Vec<&str> = arrows.iter().map(|id| id.label()).collect();
        self.lines.push(format!("arrows [{}]", arrows.join(",")));
        for (slot, vector) in SlotIndex::ALL.iter().zip(snapshot.saved_vectors.all()) {
            let text = vector.map_or_else(|| "empty".to_owned(), |vector| vector.to_string());
            self.lines.push(format!("{slot}: {text}"));
        }
        self.lines.push(format!(
            "time {}{}",
            format_timer(snapshot.elapsed),
            if snapshot.paused { " (paused)" } else { "" }
        ));
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative session state for the Hallways level engine.
//!
//! The [`World`] owns the active level controller, the level clock, the
//! session-wide save slots and any animated replay in flight. Adapters mutate
//! it exclusively through [`apply`] and read it through [`query`].

mod clock;
mod replay;

use std::time::Duration;

use hallways_core::{
    Command, EdgeCountVector, Event, LevelChangeError, LevelId, RoomGraph, SavedVectorStore,
    SessionPhase, SlotIndex, TransitionId, TraversalError, ValidationOutcome,
};
use hallways_levels::{Controller, LevelCatalog, LevelController, LevelDescriptor, WalkerMotion};

use crate::{clock::LevelClock, replay::Replay};

/// Represents the authoritative Hallways session state.
#[derive(Debug)]
pub struct World {
    catalog: LevelCatalog,
    active: Option<LevelController>,
    phase: SessionPhase,
    now: Duration,
    clock: LevelClock,
    saved_vectors: SavedVectorStore,
    pending_save: Option<EdgeCountVector>,
    replay: Option<Replay>,
    arrival_deferred: bool,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an idle session over the built-in level catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(LevelCatalog::builtin())
    }

    /// Creates an idle session over the provided catalog.
    #[must_use]
    pub fn with_catalog(catalog: LevelCatalog) -> Self {
        Self {
            catalog,
            active: None,
            phase: SessionPhase::Idle,
            now: Duration::ZERO,
            clock: LevelClock::default(),
            saved_vectors: SavedVectorStore::new(),
            pending_save: None,
            replay: None,
            arrival_deferred: false,
        }
    }

    fn paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    fn elapsed(&self) -> Duration {
        self.clock.elapsed(self.now)
    }

    fn cancel_replay(&mut self) {
        if self.replay.take().is_some() {
            log::info!("replay cancelled");
        }
        self.arrival_deferred = false;
    }

    fn disarm_save(&mut self, out_events: &mut Vec<Event>) {
        if self.pending_save.take().is_some() {
            out_events.push(Event::SaveDisarmed);
        }
    }

    fn restart_clock(&mut self, out_events: &mut Vec<Event>) {
        if self.paused() {
            out_events.push(Event::Resumed);
        }
        self.clock = LevelClock::started(self.now);
        self.phase = SessionPhase::LevelActive;
        out_events.push(Event::TimeAdvanced {
            elapsed: Duration::ZERO,
        });
    }

    fn enter_level(&mut self, descriptor: &'static LevelDescriptor, out_events: &mut Vec<Event>) {
        self.cancel_replay();
        self.disarm_save(out_events);
        if let Some(mut previous) = self.active.take() {
            let level = previous.descriptor().id;
            previous.exit(out_events);
            out_events.push(Event::LevelExited { level });
        }

        log::info!("entering {} ({})", descriptor.id, descriptor.name);
        out_events.push(Event::LevelEntered {
            level: descriptor.id,
            name: descriptor.name,
        });
        let mut controller = LevelController::for_descriptor(descriptor);
        controller.enter(out_events);
        self.active = Some(controller);
        self.restart_clock(out_events);
    }

    fn change_level(&mut self, level: LevelId, out_events: &mut Vec<Event>) {
        match self.catalog.get(level) {
            Some(descriptor) => self.enter_level(descriptor, out_events),
            None => {
                let reason = LevelChangeError::UnknownLevel(level.get());
                log::warn!("level change rejected: {reason}");
                out_events.push(Event::LevelChangeRejected {
                    requested: level,
                    reason,
                });
            }
        }
    }

    fn reset_level(&mut self, out_events: &mut Vec<Event>) {
        let Some(controller) = self.active.as_mut() else {
            log::debug!("reset ignored: no active level");
            return;
        };
        log::info!("resetting {}", controller.descriptor().id);
        controller.reset(out_events);
        self.cancel_replay();
        self.disarm_save(out_events);
        self.restart_clock(out_events);
    }

    fn try_advance(&mut self, out_events: &mut Vec<Event>) {
        if self.phase == SessionPhase::Finished {
            log::debug!("advance ignored: session already finished");
            return;
        }
        let Some(controller) = self.active.as_ref() else {
            log::debug!("advance ignored: no active level");
            return;
        };
        let level = controller.descriptor().id;

        match controller.validate(&self.saved_vectors) {
            ValidationOutcome::Invalid(failure) => {
                log::info!("{level} not solved: {failure}");
                out_events.push(Event::ValidationFailed { level, failure });
            }
            ValidationOutcome::Valid => {
                log::info!("{level} completed");
                out_events.push(Event::LevelCompleted { level });
                match self
                    .catalog
                    .next(level)
                    .and_then(|next| self.catalog.get(next))
                {
                    Some(descriptor) => self.enter_level(descriptor, out_events),
                    None => self.finish(out_events),
                }
            }
        }
    }

    fn finish(&mut self, out_events: &mut Vec<Event>) {
        log::info!("session completed after {:?}", self.elapsed());
        self.cancel_replay();
        self.disarm_save(out_events);
        self.clock.pause(self.now);
        self.phase = SessionPhase::Finished;
        out_events.push(Event::SessionCompleted);
    }

    fn pause(&mut self, out_events: &mut Vec<Event>) {
        if self.phase != SessionPhase::LevelActive {
            log::debug!("pause ignored in {:?}", self.phase);
            return;
        }
        self.clock.pause(self.now);
        self.phase = SessionPhase::Paused;
        out_events.push(Event::Paused);
    }

    fn resume(&mut self, out_events: &mut Vec<Event>) {
        if !self.paused() {
            log::debug!("resume ignored in {:?}", self.phase);
            return;
        }
        self.clock.resume(self.now);
        self.phase = SessionPhase::LevelActive;
        out_events.push(Event::Resumed);

        if std::mem::take(&mut self.arrival_deferred) {
            self.walker_arrived(out_events);
        }
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        self.now = self.now.saturating_add(dt);
        if let Some(controller) = self.active.as_mut() {
            controller.update(dt);
            out_events.push(Event::TimeAdvanced {
                elapsed: self.clock.elapsed(self.now),
            });
        }
    }

    // Gameplay input is frozen while paused; returns the controller otherwise.
    fn playable(&mut self, action: &str) -> Option<&mut LevelController> {
        if self.paused() {
            log::debug!("{action} ignored while paused");
            return None;
        }
        let controller = self.active.as_mut();
        if controller.is_none() {
            log::debug!("{action} ignored: no active level");
        }
        controller
    }

    fn traverse_edge(&mut self, transition: TransitionId, out_events: &mut Vec<Event>) {
        let rejection = if self.paused() {
            Some(TraversalError::Paused)
        } else if self.replay.is_some() {
            Some(TraversalError::ReplayInFlight)
        } else {
            match self.active.as_ref() {
                None => Some(TraversalError::NoActiveLevel),
                Some(controller) if !controller.edge_enabled(transition) => {
                    Some(TraversalError::EdgeDisabled)
                }
                Some(_) => None,
            }
        };

        if let Some(reason) = rejection {
            log::debug!("traversal of {transition} rejected: {reason}");
            out_events.push(Event::TraversalRejected { transition, reason });
            return;
        }
        if let Some(controller) = self.active.as_mut() {
            controller.on_edge_traversed(
                RoomGraph.transition(transition),
                WalkerMotion::Animate,
                out_events,
            );
        }
    }

    fn edit_cell(&mut self, transition: TransitionId, value: i32, out_events: &mut Vec<Event>) {
        if self.replay.is_some() {
            log::debug!("edit of {transition} ignored during replay");
            return;
        }
        if let Some(controller) = self.playable("cell edit") {
            controller.on_vector_edited(transition, value, out_events);
        }
    }

    fn save_ui_controller(&mut self, action: &str) -> Option<&mut LevelController> {
        let controller = self.playable(action)?;
        if controller.descriptor().show_save_ui {
            Some(controller)
        } else {
            log::debug!("{action} ignored: level has no save slots");
            None
        }
    }

    fn arm_save(&mut self, out_events: &mut Vec<Event>) {
        let Some(controller) = self.save_ui_controller("save") else {
            return;
        };
        let Some(vector) = controller.save_candidate() else {
            log::debug!("save ignored: level offers no vector to store");
            return;
        };
        self.pending_save = Some(vector);
        out_events.push(Event::SaveArmed { vector });
    }

    fn click_slot(&mut self, slot: SlotIndex, out_events: &mut Vec<Event>) {
        let Some(always_loads) = self
            .save_ui_controller("slot click")
            .map(|controller| controller.slot_click_always_loads())
        else {
            return;
        };

        if always_loads {
            self.disarm_save(out_events);
        } else if let Some(vector) = self.pending_save.take() {
            self.saved_vectors.save(slot, vector);
            log::debug!("stored {vector} in {slot}");
            out_events.push(Event::SlotSaved { slot, vector });
            out_events.push(Event::SaveDisarmed);
            return;
        }

        if self.replay.is_some() {
            log::debug!("loading {slot} ignored during replay");
            return;
        }
        let Some(vector) = self.saved_vectors.load(slot) else {
            out_events.push(Event::SlotEmpty { slot });
            return;
        };
        out_events.push(Event::SlotLoaded { slot, vector });
        if let Some(controller) = self.active.as_mut() {
            controller.on_slot_loaded(slot, vector, out_events);
        }
    }

    fn start_replay(&mut self, out_events: &mut Vec<Event>) {
        if self.replay.is_some() {
            log::debug!("replay request ignored: one is already in flight");
            out_events.push(Event::ReplayIgnored);
            return;
        }
        let Some(controller) = self.playable("replay") else {
            return;
        };
        let Some(plan) = controller.begin_replay(out_events) else {
            log::debug!("{} has nothing to replay", controller.descriptor().name);
            return;
        };

        let truncated = plan.path.truncated();
        if truncated {
            log::warn!("replay of {} stops at the step limit", plan.source);
        }
        log::info!(
            "replaying {} over {} steps",
            plan.source,
            plan.path.transitions().len()
        );
        out_events.push(Event::ReplayStarted {
            path: plan.path.rooms().to_vec(),
            truncated,
        });

        match Replay::start(plan.path) {
            Some(replay) => {
                if let Some(step) = replay.pending() {
                    out_events.push(Event::WalkerMoved {
                        room: step.to,
                        animate: true,
                    });
                }
                self.replay = Some(replay);
            }
            None => out_events.push(Event::ReplayFinished),
        }
    }

    fn walker_arrived(&mut self, out_events: &mut Vec<Event>) {
        if self.paused() {
            if self.replay.is_some() {
                self.arrival_deferred = true;
            }
            return;
        }
        let (Some(replay), Some(controller)) = (self.replay.as_mut(), self.active.as_mut()) else {
            return;
        };
        let Some(step) = replay.pending() else {
            self.replay = None;
            return;
        };

        controller.on_edge_traversed(step, WalkerMotion::AlreadyPlaced, out_events);
        match replay.advance() {
            Some(next) => out_events.push(Event::WalkerMoved {
                room: next.to,
                animate: true,
            }),
            None => {
                log::info!("replay finished after {} steps", replay.applied());
                self.replay = None;
                out_events.push(Event::ReplayFinished);
            }
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ChangeLevel { level } => world.change_level(level, out_events),
        Command::ResetLevel => world.reset_level(out_events),
        Command::AdvanceLevel => {
            if world.paused() {
                log::debug!("advance ignored while paused");
            } else {
                world.try_advance(out_events);
            }
        }
        Command::Pause => world.pause(out_events),
        Command::Resume => world.resume(out_events),
        Command::TogglePause => {
            if world.paused() {
                world.resume(out_events);
            } else {
                world.pause(out_events);
            }
        }
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::TraverseEdge { transition } => world.traverse_edge(transition, out_events),
        Command::EditCell { transition, value } => world.edit_cell(transition, value, out_events),
        Command::SetScalar { value } => {
            if let Some(controller) = world.playable("scalar edit") {
                controller.on_scalar_edited(value, out_events);
            }
        }
        Command::EditDeltaCell { room, value } => {
            if let Some(controller) = world.playable("delta edit") {
                controller.on_delta_edited(room, value, out_events);
            }
        }
        Command::SelectOperand { operand } => {
            if let Some(controller) = world.playable("operand selection") {
                controller.on_operand_selected(operand, out_events);
            }
        }
        Command::SetOperandScalar { operand, value } => {
            if let Some(controller) = world.playable("operand scalar edit") {
                controller.on_operand_scalar_edited(operand, value, out_events);
            }
        }
        Command::ArmSave => world.arm_save(out_events),
        Command::ClickSlot { slot } => world.click_slot(slot, out_events),
        Command::StartReplay => world.start_replay(out_events),
        Command::WalkerArrived => world.walker_arrived(out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use super::World;
    use hallways_core::{
        DeltaVector, EdgeCountVector, LevelId, Populations, Room, SavedVectorStore, SessionPhase,
        SessionSnapshot, TransitionId, ValidationOutcome,
    };
    use hallways_levels::{Controller, LevelCatalog, LevelState};

    /// Catalog the session progresses through.
    #[must_use]
    pub fn catalog(world: &World) -> &LevelCatalog {
        &world.catalog
    }

    /// Lifecycle phase of the session.
    #[must_use]
    pub fn phase(world: &World) -> SessionPhase {
        world.phase
    }

    /// Identifier of the active level, if any.
    #[must_use]
    pub fn active_level(world: &World) -> Option<LevelId> {
        world
            .active
            .as_ref()
            .map(|controller| controller.descriptor().id)
    }

    /// Runtime state of the active level, if any.
    #[must_use]
    pub fn level_state(world: &World) -> Option<LevelState> {
        world.active.as_ref().map(|controller| controller.state())
    }

    /// Running time of the active level.
    #[must_use]
    pub fn elapsed(world: &World) -> Duration {
        world.elapsed()
    }

    /// Contents of the session save slots.
    #[must_use]
    pub fn saved_vectors(world: &World) -> &SavedVectorStore {
        &world.saved_vectors
    }

    /// Vector waiting for a slot click, if a save is armed.
    #[must_use]
    pub fn pending_save(world: &World) -> Option<EdgeCountVector> {
        world.pending_save
    }

    /// Reports whether an animated replay owns the walker.
    #[must_use]
    pub fn replay_in_flight(world: &World) -> bool {
        world.replay.is_some()
    }

    /// Reports whether the arrow of `id` currently accepts clicks.
    #[must_use]
    pub fn edge_enabled(world: &World, id: TransitionId) -> bool {
        world
            .active
            .as_ref()
            .is_some_and(|controller| controller.edge_enabled(id))
    }

    /// Outcome the active level would report if the player tried to advance.
    #[must_use]
    pub fn validation(world: &World) -> Option<ValidationOutcome> {
        world
            .active
            .as_ref()
            .map(|controller| controller.validate(&world.saved_vectors))
    }

    /// Answer cells of the inverse-delta puzzle, when it is active.
    #[must_use]
    pub fn delta_answer(world: &World) -> Option<DeltaVector> {
        world
            .active
            .as_ref()
            .and_then(|controller| controller.delta_answer())
    }

    /// Captures the read-only aggregate the display layer renders.
    #[must_use]
    pub fn snapshot(world: &World) -> SessionSnapshot {
        let state = level_state(world);
        SessionSnapshot {
            level: active_level(world),
            phase: world.phase,
            current_room: state.map_or(Room::A, |state| state.current_room),
            populations: state.map_or(Populations::EMPTY, |state| state.populations),
            edge_counts: state.map_or(EdgeCountVector::ZERO, |state| state.edge_counts),
            scalar: state.map_or(1, |state| state.scalar),
            saved_vectors: world.saved_vectors,
            elapsed: world.elapsed(),
            paused: world.paused(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{apply, query, World};
    use hallways_core::{Command, Event, LevelId, SessionPhase};

    #[test]
    fn new_world_is_idle() {
        let world = World::new();
        assert_eq!(query::phase(&world), SessionPhase::Idle);
        assert_eq!(query::active_level(&world), None);
        assert_eq!(query::elapsed(&world), Duration::ZERO);
    }

    #[test]
    fn ticks_without_a_level_only_move_wall_time() {
        let mut world = World::new();
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::Tick {
                dt: Duration::from_millis(500),
            },
            &mut events,
        );
        assert!(events.is_empty());

        apply(
            &mut world,
            Command::ChangeLevel {
                level: LevelId::new(1),
            },
            &mut events,
        );
        assert_eq!(
            query::elapsed(&world),
            Duration::ZERO,
            "the level clock starts when the level is entered"
        );
        assert!(events.contains(&Event::TimeAdvanced {
            elapsed: Duration::ZERO
        }));
    }
}

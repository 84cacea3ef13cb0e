//! Dungeon progress store.
//!
//! Tracks which dungeon is being explored and on which floor. The store is a
//! two-state machine: [`DungeonState::Unset`] until a dungeon is started,
//! [`DungeonState::Active`] afterwards until it is reset. Reaching the last
//! floor does not end the run.

use crate::world::{DungeonId, DungeonProgress};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A single transition of dungeon progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DungeonAction {
    /// Overwrite any progress with a fresh run on floor 1.
    Start {
        dungeon_id: DungeonId,
        total_floors: u32,
    },

    /// Advance one floor. `remaining_floors` stops at 0 but
    /// `current_floor` keeps counting.
    ProgressFloor,

    /// Forget the current dungeon.
    Reset,
}

impl DungeonAction {
    pub fn kind(&self) -> &'static str {
        match self {
            DungeonAction::Start { .. } => "start",
            DungeonAction::ProgressFloor => "progress_floor",
            DungeonAction::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "progress", rename_all = "snake_case")]
pub enum DungeonState {
    #[default]
    Unset,
    Active(DungeonProgress),
}

impl DungeonState {
    pub fn current_dungeon(&self) -> Option<&DungeonId> {
        self.dungeon_progress().map(|p| &p.dungeon_id)
    }

    pub fn dungeon_progress(&self) -> Option<&DungeonProgress> {
        match self {
            DungeonState::Unset => None,
            DungeonState::Active(progress) => Some(progress),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, DungeonState::Active(_))
    }
}

/// Compute the state that results from applying `action` to `state`.
pub fn reduce(state: &DungeonState, action: DungeonAction) -> DungeonState {
    match action {
        DungeonAction::Start {
            dungeon_id,
            total_floors,
        } => DungeonState::Active(DungeonProgress::start(dungeon_id, total_floors)),
        DungeonAction::ProgressFloor => match state {
            DungeonState::Unset => {
                trace!("no active dungeon, progress ignored");
                DungeonState::Unset
            }
            DungeonState::Active(progress) => DungeonState::Active(DungeonProgress {
                current_floor: progress.current_floor.saturating_add(1),
                remaining_floors: progress.remaining_floors.saturating_sub(1),
                ..progress.clone()
            }),
        },
        DungeonAction::Reset => DungeonState::Unset,
    }
}

/// Owner of the dungeon progress.
#[derive(Debug, Clone, Default)]
pub struct DungeonStore {
    state: DungeonState,
}

impl DungeonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: DungeonAction) -> bool {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        let changed = next != self.state;
        match next.dungeon_progress() {
            Some(p) => debug!(
                action = kind,
                changed,
                dungeon_id = %p.dungeon_id,
                current_floor = p.current_floor,
                remaining_floors = p.remaining_floors,
                "dungeon transition"
            ),
            None => debug!(action = kind, changed, "dungeon transition"),
        }
        self.state = next;
        changed
    }

    pub fn state(&self) -> &DungeonState {
        &self.state
    }

    pub fn current_dungeon(&self) -> Option<&DungeonId> {
        self.state.current_dungeon()
    }

    pub fn dungeon_progress(&self) -> Option<&DungeonProgress> {
        self.state.dungeon_progress()
    }

    pub fn start_dungeon(&mut self, dungeon_id: impl Into<DungeonId>, total_floors: u32) {
        self.dispatch(DungeonAction::Start {
            dungeon_id: dungeon_id.into(),
            total_floors,
        });
    }

    pub fn progress_floor(&mut self) {
        self.dispatch(DungeonAction::ProgressFloor);
    }

    pub fn reset_dungeon(&mut self) {
        self.dispatch(DungeonAction::Reset);
    }
}

//! Dungeon exploration flow.
//!
//! Each floor offers a handful of action cards; picking one advances the
//! party a floor and yields what the card leads to. Once the last floor is
//! behind the party the dungeon is cleared and further picks are ignored
//! until the party exits.

use crate::catalog::{available_action_cards, get_dungeon};
use crate::config::GameConfig;
use crate::error::{ConfigError, StoreError};
use crate::store::GameStore;
use crate::world::{ActionCard, ActionCardKind, Dungeon, DungeonId, DungeonProgress};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// What picking an action card led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// An encounter on the floor that was just left.
    Battle { floor: u32 },
    /// A card kind with no outcome yet.
    Unimplemented(ActionCardKind),
}

/// Drives one game store through a dungeon run.
pub struct Exploration<'a> {
    store: &'a mut GameStore,
    config: &'a GameConfig,
}

impl<'a> Exploration<'a> {
    /// Fails if `config` does not validate.
    pub fn new(store: &'a mut GameStore, config: &'a GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// Enter a catalog dungeon.
    ///
    /// Starts a fresh run with the configured floor count unless this same
    /// dungeon is already in progress.
    pub fn enter(&mut self, dungeon_id: &DungeonId) -> Result<Dungeon, StoreError> {
        let dungeon = get_dungeon(dungeon_id.as_str())
            .ok_or_else(|| StoreError::UnknownDungeon(dungeon_id.clone()))?;

        if self.store.current_dungeon() != Some(dungeon_id) {
            info!(%dungeon_id, floors = self.config.default_total_floors, "entering dungeon");
            self.store
                .start_dungeon(dungeon_id.clone(), self.config.default_total_floors);
        }
        Ok(dungeon)
    }

    pub fn progress(&self) -> Option<&DungeonProgress> {
        self.store.dungeon_progress()
    }

    pub fn is_cleared(&self) -> bool {
        self.progress().is_some_and(DungeonProgress::is_cleared)
    }

    /// Cards to choose from on the current floor. Empty when no run is
    /// active or the dungeon is cleared.
    pub fn offer_action_cards<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ActionCard> {
        if self.progress().is_none() || self.is_cleared() {
            return Vec::new();
        }
        let pool = available_action_cards();
        (0..self.config.action_cards_per_floor)
            .filter_map(|_| pool.choose(rng).cloned())
            .collect()
    }

    /// Pick an action card. Returns `None` without touching the store when
    /// no run is active or the dungeon is already cleared.
    pub fn select_action(&mut self, card: &ActionCard) -> Option<ActionOutcome> {
        let floor = match self.progress() {
            Some(p) if !p.is_cleared() => p.current_floor,
            Some(_) => {
                debug!(card = %card.id, "action ignored, dungeon cleared");
                return None;
            }
            None => {
                debug!(card = %card.id, "action ignored, no active dungeon");
                return None;
            }
        };

        self.store.progress_floor();
        let outcome = match card.kind {
            ActionCardKind::Battle => ActionOutcome::Battle { floor },
            other => ActionOutcome::Unimplemented(other),
        };
        debug!(card = %card.id, floor, ?outcome, "action selected");
        Some(outcome)
    }

    /// Leave the dungeon and forget its progress.
    pub fn exit(&mut self) {
        info!(dungeon_id = ?self.store.current_dungeon(), "leaving dungeon");
        self.store.reset_dungeon();
    }
}

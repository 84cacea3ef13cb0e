//! Combined game store.
//!
//! [`GameStore`] is the composition root: it owns one [`PartyStore`] and one
//! [`DungeonStore`], forwards their mutators, and builds a fresh
//! [`GameState`] snapshot from both on every read. It holds no state of its
//! own.

use crate::config::GameConfig;
use crate::dungeon::{DungeonAction, DungeonState, DungeonStore};
use crate::error::{ConfigError, StoreError};
use crate::party::{PartyAction, PartyStore};
use crate::world::{Character, CharacterId, DungeonId, DungeonProgress, GameState, Party};
use tracing::warn;

/// Any action either store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    Party(PartyAction),
    Dungeon(DungeonAction),
}

impl From<PartyAction> for GameAction {
    fn from(action: PartyAction) -> Self {
        GameAction::Party(action)
    }
}

impl From<DungeonAction> for GameAction {
    fn from(action: DungeonAction) -> Self {
        GameAction::Dungeon(action)
    }
}

/// Facade over the party and dungeon stores.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    party: PartyStore,
    dungeon: DungeonStore,
}

impl GameStore {
    /// Compose explicitly provided stores.
    pub fn new(party: PartyStore, dungeon: DungeonStore) -> Self {
        Self { party, dungeon }
    }

    /// Fresh stores sized by `config`. Fails if `config` does not validate.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            PartyStore::with_capacity(config.party_capacity),
            DungeonStore::new(),
        ))
    }

    pub fn builder() -> GameStoreBuilder {
        GameStoreBuilder::default()
    }

    /// Snapshot of both stores as of the latest transition.
    pub fn state(&self) -> GameState {
        GameState {
            party: self.party.party().clone(),
            current_dungeon: self.dungeon.current_dungeon().cloned(),
            dungeon_progress: self.dungeon.dungeon_progress().cloned(),
        }
    }

    /// Route an action to the store that owns it. Returns whether it
    /// changed anything.
    pub fn dispatch(&mut self, action: impl Into<GameAction>) -> bool {
        match action.into() {
            GameAction::Party(action) => self.party.dispatch(action),
            GameAction::Dungeon(action) => self.dungeon.dispatch(action),
        }
    }

    pub fn party_store(&self) -> &PartyStore {
        &self.party
    }

    pub fn dungeon_store(&self) -> &DungeonStore {
        &self.dungeon
    }

    pub fn party(&self) -> &Party {
        self.party.party()
    }

    pub fn members(&self) -> &[Character] {
        self.party.members()
    }

    pub fn dungeon_state(&self) -> &DungeonState {
        self.dungeon.state()
    }

    pub fn current_dungeon(&self) -> Option<&DungeonId> {
        self.dungeon.current_dungeon()
    }

    pub fn dungeon_progress(&self) -> Option<&DungeonProgress> {
        self.dungeon.dungeon_progress()
    }

    // ------------------------------------------------------------------
    // Party
    // ------------------------------------------------------------------

    pub fn add_party_member(&mut self, character: Character) {
        self.party.add_party_member(character);
    }

    pub fn remove_party_member(&mut self, character_id: &CharacterId) {
        self.party.remove_party_member(character_id);
    }

    pub fn set_party_member(&mut self, index: usize, character: Option<Character>) {
        self.party.set_party_member(index, character);
    }

    pub fn swap_party_members(&mut self, from_index: usize, to_index: usize) {
        self.party.swap_party_members(from_index, to_index);
    }

    pub fn is_party_full(&self) -> bool {
        self.party.is_party_full()
    }

    pub fn get_party_size(&self) -> usize {
        self.party.get_party_size()
    }

    pub fn update_character_hp(&mut self, character_id: &CharacterId, new_hp: i32) {
        self.party.update_character_hp(character_id, new_hp);
    }

    pub fn heal_character(&mut self, character_id: &CharacterId, amount: i32) {
        self.party.heal_character(character_id, amount);
    }

    pub fn damage_character(&mut self, character_id: &CharacterId, amount: i32) {
        self.party.damage_character(character_id, amount);
    }

    pub fn get_character_is_alive(&self, character_id: &CharacterId) -> bool {
        self.party.get_character_is_alive(character_id)
    }

    // ------------------------------------------------------------------
    // Dungeon
    // ------------------------------------------------------------------

    pub fn start_dungeon(&mut self, dungeon_id: impl Into<DungeonId>, total_floors: u32) {
        self.dungeon.start_dungeon(dungeon_id, total_floors);
    }

    pub fn progress_floor(&mut self) {
        self.dungeon.progress_floor();
    }

    pub fn reset_dungeon(&mut self) {
        self.dungeon.reset_dungeon();
    }
}

/// Wires a [`GameStore`] from separately constructed stores.
#[derive(Debug, Default)]
pub struct GameStoreBuilder {
    party: Option<PartyStore>,
    dungeon: Option<DungeonStore>,
}

impl GameStoreBuilder {
    pub fn party(mut self, store: PartyStore) -> Self {
        self.party = Some(store);
        self
    }

    pub fn dungeon(mut self, store: DungeonStore) -> Self {
        self.dungeon = Some(store);
        self
    }

    /// Fails if either store was never provided.
    pub fn build(self) -> Result<GameStore, StoreError> {
        let party = self.party.ok_or_else(|| missing("party"))?;
        let dungeon = self.dungeon.ok_or_else(|| missing("dungeon"))?;
        Ok(GameStore::new(party, dungeon))
    }
}

fn missing(store: &'static str) -> StoreError {
    warn!(store, "game store built without a required store");
    StoreError::MissingStore(store)
}

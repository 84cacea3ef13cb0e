//! State core for a card-based dungeon crawler.
//!
//! This crate provides:
//! - A party store holding up to three characters (recruit, reorder, HP changes)
//! - A dungeon progress store tracking the current dungeon and floor counters
//! - A combined game store that composes both and hands out read-only snapshots
//! - Static catalogs, the party deck view, and the formation/exploration flows
//!   that front-ends drive the stores through
//!
//! # Quick Start
//!
//! ```
//! use dungeon_core::{catalog, GameStore};
//!
//! let mut store = GameStore::default();
//! if let Some(warrior) = catalog::get_character("warrior_001") {
//!     store.add_party_member(warrior);
//! }
//! store.start_dungeon("hajimari-no-meikyuu", 30);
//! store.progress_floor();
//!
//! let state = store.state();
//! assert_eq!(state.party.members.len(), 1);
//! assert_eq!(state.dungeon_progress.map(|p| p.current_floor), Some(2));
//! ```

pub mod catalog;
pub mod config;
pub mod deck;
pub mod dungeon;
pub mod error;
pub mod exploration;
pub mod formation;
pub mod party;
pub mod side_panel;
pub mod store;
pub mod testing;
pub mod world;

// Primary public API
pub use config::GameConfig;
pub use deck::{Deck, DeckStats};
pub use dungeon::{DungeonAction, DungeonState, DungeonStore};
pub use error::{ConfigError, StoreError};
pub use exploration::{ActionOutcome, Exploration};
pub use formation::FormationOutcome;
pub use party::{PartyAction, PartyStore, MAX_PARTY_SIZE};
pub use side_panel::{SidePanel, SidePanelTab, TabContent};
pub use store::{GameAction, GameStore, GameStoreBuilder};
pub use testing::TestHarness;
pub use world::{
    ActionCard, ActionCardKind, Card, CardEffect, CardId, CardRarity, CardType, Character,
    CharacterId, Dungeon, DungeonId, DungeonProgress, Enemy, EnemyId, GameState, Party,
};

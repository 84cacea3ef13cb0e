//! Testing utilities.
//!
//! - `TestHarness` for scripted store scenarios that record every snapshot
//! - Assertion helpers for roster order, HP and floor counters

use crate::catalog::get_character;
use crate::store::{GameAction, GameStore};
use crate::world::{Character, CharacterId, GameState};

/// A character with the given id and max HP, at full health.
pub fn sample_character(id: &str, max_hp: i32) -> Character {
    Character::new(id, format!("Sample {id}"), max_hp).with_job("Tester")
}

/// Runs actions against a store and keeps the snapshot taken after each one.
pub struct TestHarness {
    pub store: GameStore,
    /// Snapshots in dispatch order, starting with the initial state.
    pub history: Vec<GameState>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_store(GameStore::default())
    }

    pub fn with_store(store: GameStore) -> Self {
        let history = vec![store.state()];
        Self { store, history }
    }

    /// Recruit catalog characters in order. Unknown ids are skipped.
    pub fn with_party(ids: &[&str]) -> Self {
        let mut harness = Self::new();
        for id in ids {
            if let Some(character) = get_character(id) {
                harness.apply(crate::party::PartyAction::AddMember(character));
            }
        }
        harness
    }

    /// Dispatch one action and record the resulting snapshot.
    pub fn apply(&mut self, action: impl Into<GameAction>) -> bool {
        let changed = self.store.dispatch(action);
        self.history.push(self.store.state());
        changed
    }

    pub fn state(&self) -> GameState {
        self.store.state()
    }

    pub fn member_ids(&self) -> Vec<String> {
        self.store
            .members()
            .iter()
            .map(|m| m.id.to_string())
            .collect()
    }

    pub fn hp_of(&self, id: &str) -> Option<i32> {
        self.store
            .party()
            .get(&CharacterId::from(id))
            .map(|m| m.hp)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the roster holds exactly these ids, in order.
#[track_caller]
pub fn assert_roster(harness: &TestHarness, expected: &[&str]) {
    let actual = harness.member_ids();
    assert_eq!(actual, expected, "Unexpected party roster");
}

/// Assert a member's HP.
#[track_caller]
pub fn assert_member_hp(harness: &TestHarness, id: &str, hp: i32) {
    assert_eq!(
        harness.hp_of(id),
        Some(hp),
        "Expected {id} to have {hp} HP"
    );
}

/// Assert the floor counters as `(current, remaining, total)`.
#[track_caller]
pub fn assert_floors(harness: &TestHarness, current: u32, remaining: u32, total: u32) {
    let progress = harness
        .store
        .dungeon_progress()
        .expect("Expected an active dungeon");
    assert_eq!(
        (
            progress.current_floor,
            progress.remaining_floors,
            progress.total_floors
        ),
        (current, remaining, total),
        "Unexpected floor counters"
    );
}

/// Assert no snapshot ever held more than `capacity` members.
#[track_caller]
pub fn assert_roster_never_exceeded(harness: &TestHarness, capacity: usize) {
    for (step, state) in harness.history.iter().enumerate() {
        assert!(
            state.party.members.len() <= capacity,
            "Roster had {} members after step {step}",
            state.party.members.len()
        );
    }
}

/// Assert every recorded snapshot kept `current_dungeon` and the progress id
/// in agreement.
#[track_caller]
pub fn assert_dungeon_id_consistent(harness: &TestHarness) {
    for (step, state) in harness.history.iter().enumerate() {
        assert_eq!(
            state.current_dungeon.as_ref(),
            state.dungeon_progress.as_ref().map(|p| &p.dungeon_id),
            "Dungeon id mismatch after step {step}"
        );
    }
}

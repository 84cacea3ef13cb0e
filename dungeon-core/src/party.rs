//! Party roster store.
//!
//! Every structural and HP change to the party goes through a [`PartyAction`]
//! applied by [`reduce`]. The reducer is total: unknown ids and out-of-range
//! slots leave the roster untouched, and no action can grow the roster past
//! its capacity.

use crate::world::{Character, CharacterId, Party};
use tracing::{debug, trace};

/// Maximum number of characters in a party.
pub const MAX_PARTY_SIZE: usize = 3;

/// A single transition of the party roster.
#[derive(Debug, Clone, PartialEq)]
pub enum PartyAction {
    /// Append to the end of the roster; ignored when full.
    AddMember(Character),

    /// Remove the first member with this id.
    RemoveMember(CharacterId),

    /// `None` deletes the member at `index`. `Some` inserts at `index`
    /// (shifting later members right) or appends when `index` is past the end.
    SetMember {
        index: usize,
        character: Option<Character>,
    },

    /// Exchange two slots.
    SwapMembers { from_index: usize, to_index: usize },

    /// Set HP directly, clamped to `[0, max_hp]`.
    UpdateHp { character_id: CharacterId, hp: i32 },

    /// Restore HP, capped at `max_hp`.
    Heal {
        character_id: CharacterId,
        amount: i32,
    },

    /// Remove HP, floored at 0.
    Damage {
        character_id: CharacterId,
        amount: i32,
    },
}

impl PartyAction {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PartyAction::AddMember(_) => "add_member",
            PartyAction::RemoveMember(_) => "remove_member",
            PartyAction::SetMember { .. } => "set_member",
            PartyAction::SwapMembers { .. } => "swap_members",
            PartyAction::UpdateHp { .. } => "update_hp",
            PartyAction::Heal { .. } => "heal",
            PartyAction::Damage { .. } => "damage",
        }
    }
}

/// Compute the roster that results from applying `action` to `party`.
///
/// `capacity` bounds the roster length and is itself capped at
/// [`MAX_PARTY_SIZE`].
pub fn reduce(party: &Party, action: PartyAction, capacity: usize) -> Party {
    let capacity = capacity.min(MAX_PARTY_SIZE);
    match action {
        PartyAction::AddMember(character) => {
            if party.members.len() >= capacity {
                trace!(character_id = %character.id, "party full, add ignored");
                return party.clone();
            }
            let mut members = party.members.clone();
            members.push(character);
            Party { members }
        }
        PartyAction::RemoveMember(character_id) => {
            let mut members = party.members.clone();
            if let Some(pos) = members.iter().position(|m| m.id == character_id) {
                members.remove(pos);
            }
            Party { members }
        }
        PartyAction::SetMember { index, character } => {
            let mut members = party.members.clone();
            match character {
                None => {
                    if index < members.len() {
                        members.remove(index);
                    }
                }
                Some(character) => {
                    if index >= members.len() {
                        members.push(character);
                    } else {
                        members.insert(index, character);
                    }
                }
            }
            members.truncate(capacity);
            Party { members }
        }
        PartyAction::SwapMembers {
            from_index,
            to_index,
        } => {
            let len = party.members.len();
            if from_index >= len || to_index >= len {
                trace!(from_index, to_index, len, "swap out of bounds, ignored");
                return party.clone();
            }
            let mut members = party.members.clone();
            members.swap(from_index, to_index);
            Party { members }
        }
        PartyAction::UpdateHp { character_id, hp } => {
            map_member(party, &character_id, |m| hp.min(m.max_hp).max(0))
        }
        PartyAction::Heal {
            character_id,
            amount,
        } => map_member(party, &character_id, |m| {
            m.hp.saturating_add(amount).min(m.max_hp)
        }),
        PartyAction::Damage {
            character_id,
            amount,
        } => map_member(party, &character_id, |m| {
            m.hp.saturating_sub(amount).max(0)
        }),
    }
}

/// Rewrite the HP of every member carrying `id`.
fn map_member(party: &Party, id: &CharacterId, new_hp: impl Fn(&Character) -> i32) -> Party {
    if !party.contains(id) {
        trace!(character_id = %id, "no party member with id, hp change ignored");
    }
    Party {
        members: party
            .members
            .iter()
            .map(|m| {
                if &m.id == id {
                    Character {
                        hp: new_hp(m),
                        ..m.clone()
                    }
                } else {
                    m.clone()
                }
            })
            .collect(),
    }
}

/// Owner of the party roster.
#[derive(Debug, Clone)]
pub struct PartyStore {
    party: Party,
    capacity: usize,
}

impl Default for PartyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartyStore {
    /// Empty roster with the standard capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_PARTY_SIZE)
    }

    /// Empty roster holding at most `capacity` members, clamped to
    /// `1..=MAX_PARTY_SIZE`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            party: Party::new(),
            capacity: capacity.clamp(1, MAX_PARTY_SIZE),
        }
    }

    /// Apply an action. Returns whether the roster changed.
    pub fn dispatch(&mut self, action: PartyAction) -> bool {
        let kind = action.kind();
        let next = reduce(&self.party, action, self.capacity);
        let changed = next != self.party;
        debug!(action = kind, changed, size = next.len(), "party transition");
        self.party = next;
        changed
    }

    pub fn party(&self) -> &Party {
        &self.party
    }

    pub fn members(&self) -> &[Character] {
        &self.party.members
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn add_party_member(&mut self, character: Character) {
        self.dispatch(PartyAction::AddMember(character));
    }

    pub fn remove_party_member(&mut self, character_id: &CharacterId) {
        self.dispatch(PartyAction::RemoveMember(character_id.clone()));
    }

    pub fn set_party_member(&mut self, index: usize, character: Option<Character>) {
        self.dispatch(PartyAction::SetMember { index, character });
    }

    pub fn swap_party_members(&mut self, from_index: usize, to_index: usize) {
        self.dispatch(PartyAction::SwapMembers {
            from_index,
            to_index,
        });
    }

    pub fn is_party_full(&self) -> bool {
        self.party.len() == self.capacity
    }

    pub fn get_party_size(&self) -> usize {
        self.party.len()
    }

    pub fn update_character_hp(&mut self, character_id: &CharacterId, new_hp: i32) {
        self.dispatch(PartyAction::UpdateHp {
            character_id: character_id.clone(),
            hp: new_hp,
        });
    }

    /// Negative amounts are not rejected and act as damage.
    pub fn heal_character(&mut self, character_id: &CharacterId, amount: i32) {
        self.dispatch(PartyAction::Heal {
            character_id: character_id.clone(),
            amount,
        });
    }

    /// Negative amounts are not rejected and act as healing.
    pub fn damage_character(&mut self, character_id: &CharacterId, amount: i32) {
        self.dispatch(PartyAction::Damage {
            character_id: character_id.clone(),
            amount,
        });
    }

    /// False for unknown ids.
    pub fn get_character_is_alive(&self, character_id: &CharacterId) -> bool {
        self.party
            .get(character_id)
            .map(Character::is_alive)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, max_hp: i32) -> Character {
        Character::new(id, id.to_uppercase(), max_hp)
    }

    fn ids(store: &PartyStore) -> Vec<&str> {
        store.members().iter().map(|m| m.id.as_str()).collect()
    }

    fn store_with(names: &[&str]) -> PartyStore {
        let mut store = PartyStore::new();
        for name in names {
            store.add_party_member(member(name, 100));
        }
        store
    }

    #[test]
    fn test_add_rejects_fourth_member() {
        let store = store_with(&["a", "b", "c", "d"]);
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert!(store.is_party_full());
        assert_eq!(store.get_party_size(), 3);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let store = store_with(&["a", "a"]);
        assert_eq!(ids(&store), vec!["a", "a"]);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut store = store_with(&["a", "b", "a"]);
        store.remove_party_member(&CharacterId::from("a"));
        assert_eq!(ids(&store), vec!["b", "a"]);

        store.remove_party_member(&CharacterId::from("zzz"));
        assert_eq!(ids(&store), vec!["b", "a"]);
    }

    #[test]
    fn test_set_member_inserts() {
        let mut store = store_with(&["a", "b"]);
        store.set_party_member(1, Some(member("c", 100)));
        assert_eq!(ids(&store), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_set_member_appends_past_end() {
        let mut store = store_with(&["a"]);
        store.set_party_member(7, Some(member("b", 100)));
        assert_eq!(ids(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_set_member_on_full_party_drops_last() {
        let mut store = store_with(&["a", "b", "c"]);
        store.set_party_member(0, Some(member("d", 100)));
        assert_eq!(ids(&store), vec!["d", "a", "b"]);

        // Appending to a full roster is truncated away.
        store.set_party_member(3, Some(member("e", 100)));
        assert_eq!(ids(&store), vec!["d", "a", "b"]);
    }

    #[test]
    fn test_set_member_none_removes() {
        let mut store = store_with(&["a", "b", "c"]);
        store.set_party_member(1, None);
        assert_eq!(ids(&store), vec!["a", "c"]);

        store.set_party_member(5, None);
        assert_eq!(ids(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_swap() {
        let mut store = store_with(&["a", "b", "c"]);
        store.swap_party_members(0, 2);
        assert_eq!(ids(&store), vec!["c", "b", "a"]);

        store.swap_party_members(1, 1);
        assert_eq!(ids(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_swap_out_of_bounds_is_noop() {
        let mut store = store_with(&["a", "b"]);
        let changed = store.dispatch(PartyAction::SwapMembers {
            from_index: 0,
            to_index: 5,
        });
        assert!(!changed);
        assert_eq!(ids(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_update_hp_clamps() {
        let mut store = PartyStore::new();
        store.add_party_member(member("a", 50));
        let id = CharacterId::from("a");

        store.update_character_hp(&id, 80);
        assert_eq!(store.members()[0].hp, 50);

        store.update_character_hp(&id, -10);
        assert_eq!(store.members()[0].hp, 0);

        store.update_character_hp(&id, 25);
        assert_eq!(store.members()[0].hp, 25);
    }

    #[test]
    fn test_damage_and_heal_clamp() {
        let mut store = PartyStore::new();
        store.add_party_member(member("a", 50));
        let id = CharacterId::from("a");

        store.damage_character(&id, 20);
        assert_eq!(store.members()[0].hp, 30);

        store.heal_character(&id, 100);
        assert_eq!(store.members()[0].hp, 50);

        store.damage_character(&id, 999);
        assert_eq!(store.members()[0].hp, 0);
        assert!(!store.get_character_is_alive(&id));
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        let mut store = PartyStore::new();
        store.add_party_member(member("a", 50));
        let id = CharacterId::from("a");

        store.update_character_hp(&id, 10);
        store.heal_character(&id, -25);
        assert_eq!(store.members()[0].hp, -15);

        store.update_character_hp(&id, 40);
        store.damage_character(&id, -30);
        assert_eq!(store.members()[0].hp, 70);
    }

    #[test]
    fn test_hp_changes_for_unknown_id_are_noops() {
        let mut store = store_with(&["a"]);
        let before = store.party().clone();
        let ghost = CharacterId::from("ghost");

        assert!(!store.dispatch(PartyAction::Damage {
            character_id: ghost.clone(),
            amount: 10,
        }));
        store.heal_character(&ghost, 10);
        store.update_character_hp(&ghost, 1);
        assert_eq!(store.party(), &before);
        assert!(!store.get_character_is_alive(&ghost));
    }

    #[test]
    fn test_reduced_capacity() {
        let mut store = PartyStore::with_capacity(2);
        store.add_party_member(member("a", 10));
        store.add_party_member(member("b", 10));
        store.add_party_member(member("c", 10));
        assert_eq!(ids(&store), vec!["a", "b"]);
        assert!(store.is_party_full());
    }

    #[test]
    fn test_capacity_never_exceeds_max() {
        let store = PartyStore::with_capacity(10);
        assert_eq!(store.capacity(), MAX_PARTY_SIZE);
    }

    #[test]
    fn test_zero_capacity_still_holds_one() {
        let mut store = PartyStore::with_capacity(0);
        assert_eq!(store.capacity(), 1);
        assert!(!store.is_party_full());

        store.add_party_member(member("a", 10));
        store.add_party_member(member("b", 10));
        assert_eq!(ids(&store), vec!["a"]);
        assert!(store.is_party_full());
    }
}

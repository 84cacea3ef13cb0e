//! Party-builder gestures.
//!
//! Translates "drop this character on that slot" and "drop this character
//! back on the standby bench" into party store calls.

use crate::store::GameStore;
use crate::world::{Character, CharacterId, Party};
use tracing::debug;

/// What a drop gesture did to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationOutcome {
    /// Two party slots exchanged places.
    Swapped { from: usize, to: usize },
    /// A standby character joined the party at this slot.
    Inserted { slot: usize },
    /// A member went back to standby from this slot.
    Removed { slot: usize },
    /// Nothing happened.
    Ignored,
}

/// Catalog characters not currently in the party, in catalog order.
pub fn standby<'a>(catalog: &'a [Character], party: &Party) -> Vec<&'a Character> {
    catalog.iter().filter(|c| !party.contains(&c.id)).collect()
}

/// Drop `character` on party slot `slot`.
///
/// A party member is swapped with the occupant of `slot` (empty slots are
/// ignored). A standby character is inserted at `slot`, or appended when the
/// slot is past the end, provided the party has room.
pub fn drop_on_slot(store: &mut GameStore, character: &Character, slot: usize) -> FormationOutcome {
    let size = store.get_party_size();
    let outcome = match store.party().position(&character.id) {
        Some(from) => {
            if from != slot && slot < size {
                store.swap_party_members(from, slot);
                FormationOutcome::Swapped { from, to: slot }
            } else {
                FormationOutcome::Ignored
            }
        }
        None => {
            if store.is_party_full() {
                FormationOutcome::Ignored
            } else {
                let slot = slot.min(size);
                store.set_party_member(slot, Some(character.clone()));
                FormationOutcome::Inserted { slot }
            }
        }
    };
    debug!(character_id = %character.id, slot, ?outcome, "drop on party slot");
    outcome
}

/// Drop a character on the standby bench, removing it from the party.
pub fn drop_on_standby(store: &mut GameStore, character_id: &CharacterId) -> FormationOutcome {
    let outcome = match store.party().position(character_id) {
        Some(slot) => {
            store.set_party_member(slot, None);
            FormationOutcome::Removed { slot }
        }
        None => FormationOutcome::Ignored,
    };
    debug!(%character_id, ?outcome, "drop on standby");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{characters, get_character};

    fn ids(store: &GameStore) -> Vec<&str> {
        store.members().iter().map(|m| m.id.as_str()).collect()
    }

    fn recruit(store: &mut GameStore, id: &str, slot: usize) -> FormationOutcome {
        let character = get_character(id).unwrap();
        drop_on_slot(store, &character, slot)
    }

    #[test]
    fn test_standby_excludes_party_members() {
        let mut store = GameStore::default();
        recruit(&mut store, "mage_001", 0);
        let bench: Vec<&str> = standby(characters(), store.party())
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            bench,
            vec!["warrior_001", "cleric_001", "thief_001", "archer_001"]
        );
    }

    #[test]
    fn test_drop_from_standby_appends_past_end() {
        let mut store = GameStore::default();
        assert_eq!(
            recruit(&mut store, "warrior_001", 2),
            FormationOutcome::Inserted { slot: 0 }
        );
        assert_eq!(ids(&store), vec!["warrior_001"]);
    }

    #[test]
    fn test_drop_from_standby_inserts() {
        let mut store = GameStore::default();
        recruit(&mut store, "warrior_001", 0);
        recruit(&mut store, "mage_001", 1);
        assert_eq!(
            recruit(&mut store, "cleric_001", 0),
            FormationOutcome::Inserted { slot: 0 }
        );
        assert_eq!(ids(&store), vec!["cleric_001", "warrior_001", "mage_001"]);
    }

    #[test]
    fn test_drop_from_standby_on_full_party_is_ignored() {
        let mut store = GameStore::default();
        for id in ["warrior_001", "mage_001", "cleric_001"] {
            recruit(&mut store, id, 3);
        }
        assert_eq!(recruit(&mut store, "thief_001", 0), FormationOutcome::Ignored);
        assert_eq!(ids(&store), vec!["warrior_001", "mage_001", "cleric_001"]);
    }

    #[test]
    fn test_drop_member_on_other_slot_swaps() {
        let mut store = GameStore::default();
        for id in ["warrior_001", "mage_001", "cleric_001"] {
            recruit(&mut store, id, 3);
        }
        assert_eq!(
            recruit(&mut store, "cleric_001", 0),
            FormationOutcome::Swapped { from: 2, to: 0 }
        );
        assert_eq!(ids(&store), vec!["cleric_001", "mage_001", "warrior_001"]);
    }

    #[test]
    fn test_drop_member_on_own_or_empty_slot_is_ignored() {
        let mut store = GameStore::default();
        recruit(&mut store, "warrior_001", 0);
        recruit(&mut store, "mage_001", 1);
        assert_eq!(recruit(&mut store, "mage_001", 1), FormationOutcome::Ignored);
        assert_eq!(recruit(&mut store, "mage_001", 2), FormationOutcome::Ignored);
        assert_eq!(ids(&store), vec!["warrior_001", "mage_001"]);
    }

    #[test]
    fn test_drop_on_standby() {
        let mut store = GameStore::default();
        recruit(&mut store, "warrior_001", 0);
        recruit(&mut store, "mage_001", 1);
        assert_eq!(
            drop_on_standby(&mut store, &CharacterId::from("warrior_001")),
            FormationOutcome::Removed { slot: 0 }
        );
        assert_eq!(ids(&store), vec!["mage_001"]);
        assert_eq!(
            drop_on_standby(&mut store, &CharacterId::from("archer_001")),
            FormationOutcome::Ignored
        );
    }
}

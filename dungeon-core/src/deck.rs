//! The party's combined deck.
//!
//! Derived on demand from the members' card loadouts; nothing here is stored.

use crate::world::{Card, CardId, CardRarity, CardType, Character, CharacterId};
use serde::Serialize;
use std::collections::HashSet;

/// Per-type and per-rarity card counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeckStats {
    pub attack_cards: usize,
    pub skill_cards: usize,
    pub power_cards: usize,
    pub common_cards: usize,
    pub uncommon_cards: usize,
    pub rare_cards: usize,
    pub legendary_cards: usize,
}

/// All cards carried by a party, in member order.
#[derive(Debug, Clone)]
pub struct Deck<'a> {
    members: &'a [Character],
    cards: Vec<&'a Card>,
}

impl<'a> Deck<'a> {
    pub fn from_members(members: &'a [Character]) -> Self {
        let cards = members.iter().flat_map(|m| m.cards.iter()).collect();
        Self { members, cards }
    }

    pub fn cards(&self) -> &[&'a Card] {
        &self.cards
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Loadout of one member; empty if they are not in the party.
    pub fn cards_for_character(&self, id: &CharacterId) -> &'a [Card] {
        self.members
            .iter()
            .find(|m| &m.id == id)
            .map(|m| m.cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn cards_by_type(&self, card_type: CardType) -> Vec<&'a Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.card_type == card_type)
            .collect()
    }

    pub fn cards_by_rarity(&self, rarity: CardRarity) -> Vec<&'a Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.rarity == rarity)
            .collect()
    }

    /// One card per id, in the order each id first appears.
    pub fn unique_cards(&self) -> Vec<&'a Card> {
        let mut seen = HashSet::new();
        self.cards
            .iter()
            .copied()
            .filter(|c| seen.insert(&c.id))
            .collect()
    }

    pub fn card_count(&self, card_id: &CardId) -> usize {
        self.cards.iter().filter(|c| &c.id == card_id).count()
    }

    pub fn stats(&self) -> DeckStats {
        let mut stats = DeckStats::default();
        for card in &self.cards {
            match card.card_type {
                CardType::Attack => stats.attack_cards += 1,
                CardType::Skill => stats.skill_cards += 1,
                CardType::Power => stats.power_cards += 1,
            }
            match card.rarity {
                CardRarity::Common => stats.common_cards += 1,
                CardRarity::Uncommon => stats.uncommon_cards += 1,
                CardRarity::Rare => stats.rare_cards += 1,
                CardRarity::Legendary => stats.legendary_cards += 1,
            }
        }
        stats
    }
}

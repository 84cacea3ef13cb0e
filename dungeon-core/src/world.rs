//! Game entity types.
//!
//! Plain data records for characters, cards, enemies and dungeons, plus the
//! party roster, dungeon progress counters and the combined game state that
//! the stores hand out as read-only snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

catalog_id!(
    /// Catalog identifier for playable characters (e.g. `warrior_001`).
    CharacterId
);
catalog_id!(
    /// Catalog identifier for cards (e.g. `strike`).
    CardId
);
catalog_id!(
    /// Catalog identifier for enemies (e.g. `goblin-1`).
    EnemyId
);
catalog_id!(
    /// Catalog identifier for dungeons.
    DungeonId
);

// ============================================================================
// Cards
// ============================================================================

/// Broad category of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Attack,
    Skill,
    Power,
}

impl CardType {
    pub fn all() -> [CardType; 3] {
        [CardType::Attack, CardType::Skill, CardType::Power]
    }

    pub fn name(&self) -> &'static str {
        match self {
            CardType::Attack => "attack",
            CardType::Skill => "skill",
            CardType::Power => "power",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How rare a card is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardRarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl CardRarity {
    pub fn all() -> [CardRarity; 4] {
        [
            CardRarity::Common,
            CardRarity::Uncommon,
            CardRarity::Rare,
            CardRarity::Legendary,
        ]
    }
}

/// What a card effect does when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Heal,
    Block,
    Buff,
    Debuff,
    DrawCard,
    GainEnergy,
}

/// Who a card effect lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTarget {
    #[serde(rename = "self")]
    Caster,
    SingleEnemy,
    AllEnemies,
    RandomEnemy,
}

/// One step of a card's resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    pub value: i32,
    pub target: EffectTarget,
}

impl CardEffect {
    pub fn new(kind: EffectKind, value: i32, target: EffectTarget) -> Self {
        Self {
            kind,
            value,
            target,
        }
    }
}

/// A card definition from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub flavor: String,
    pub cost: u32,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub rarity: CardRarity,
    pub effects: Vec<CardEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgraded: Option<bool>,
}

impl Card {
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        card_type: CardType,
        rarity: CardRarity,
        cost: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            flavor: String::new(),
            cost,
            card_type,
            rarity,
            effects: Vec::new(),
            upgraded: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn is_upgraded(&self) -> bool {
        self.upgraded.unwrap_or(false)
    }
}

// ============================================================================
// Characters and Party
// ============================================================================

/// A playable character.
///
/// Copied by value into the party; only `hp` changes afterwards, and only
/// through the party store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub job: String,
    pub image: String,
    pub flavor: String,
    pub hp: i32,
    pub max_hp: i32,
    pub cards: Vec<Card>,
}

impl Character {
    /// Create a character at full health with no cards.
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>, max_hp: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            job: String::new(),
            image: String::new(),
            flavor: String::new(),
            hp: max_hp,
            max_hp,
            cards: Vec::new(),
        }
    }

    pub fn with_job(mut self, job: impl Into<String>) -> Self {
        self.job = job.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = flavor.into();
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn hp_ratio(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp as f32 / self.max_hp as f32).max(0.0)
    }
}

/// The active roster. Never longer than [`crate::party::MAX_PARTY_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    pub members: Vec<Character>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn position(&self, id: &CharacterId) -> Option<usize> {
        self.members.iter().position(|m| &m.id == id)
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.position(id).is_some()
    }
}

// ============================================================================
// Enemies
// ============================================================================

/// Behaviour profile an enemy picks its actions with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiPattern {
    Aggressive,
    Defensive,
    Random,
}

/// Who an enemy action hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyActionTarget {
    Single,
    All,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyAction {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    pub target: EnemyActionTarget,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub image: String,
    pub ai_pattern: AiPattern,
    pub actions: Vec<EnemyAction>,
}

// ============================================================================
// Dungeons
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub id: DungeonId,
    pub name: String,
    pub description: String,
    pub difficulty: String,
}

/// Floor counters for the dungeon currently being explored.
///
/// `current_floor + remaining_floors - 1 == total_floors` holds until the
/// floors run out; past that point `current_floor` keeps counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonProgress {
    pub dungeon_id: DungeonId,
    pub current_floor: u32,
    pub remaining_floors: u32,
    pub total_floors: u32,
}

impl DungeonProgress {
    /// Fresh progress standing on floor 1.
    pub fn start(dungeon_id: DungeonId, total_floors: u32) -> Self {
        Self {
            dungeon_id,
            current_floor: 1,
            remaining_floors: total_floors,
            total_floors,
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining_floors == 0
    }
}

/// Kinds of choice offered on each dungeon floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionCardKind {
    Battle,
    Treasure,
    Rest,
    Event,
    Shop,
    Boss,
}

/// A choice card shown while exploring a dungeon floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCard {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActionCardKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// ============================================================================
// Game State
// ============================================================================

/// Read model combining the party roster and dungeon progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub party: Party,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_dungeon: Option<DungeonId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dungeon_progress: Option<DungeonProgress>,
}

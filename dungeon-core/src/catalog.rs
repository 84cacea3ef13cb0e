//! Static game data.
//!
//! Characters, cards, enemies, dungeons and floor action cards that the
//! stores and flows look up by id. Nothing here is mutated at runtime;
//! characters are cloned into the party when recruited.

use crate::world::{
    ActionCard, ActionCardKind, AiPattern, Card, CardEffect, CardRarity, CardType, Character,
    CharacterId, Dungeon, DungeonId, EffectKind, EffectTarget, Enemy, EnemyAction,
    EnemyActionTarget, EnemyId,
};
use std::collections::HashMap;

/// Get a character template by id.
pub fn get_character(id: &str) -> Option<Character> {
    CHARACTERS.iter().find(|c| c.id == id).cloned()
}

/// All recruitable characters in display order.
pub fn characters() -> &'static [Character] {
    &CHARACTERS
}

/// Get a basic card by id.
pub fn get_card(id: &str) -> Option<Card> {
    BASIC_CARDS.iter().find(|c| c.id == id).cloned()
}

pub fn cards() -> &'static [Card] {
    &BASIC_CARDS
}

/// The starting loadout for a character, empty for unknown ids.
pub fn card_set_for(character_id: &CharacterId) -> &'static [Card] {
    CHARACTER_CARD_SETS
        .get(character_id.as_str())
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn get_enemy(id: &str) -> Option<Enemy> {
    ENEMIES.iter().find(|e| e.id == id).cloned()
}

pub fn enemies() -> &'static [Enemy] {
    &ENEMIES
}

pub fn get_dungeon(id: &str) -> Option<Dungeon> {
    DUNGEONS.iter().find(|d| d.id == id).cloned()
}

pub fn dungeons() -> &'static [Dungeon] {
    &DUNGEONS
}

/// The only action card with a working outcome today.
pub fn battle_card() -> ActionCard {
    ActionCard {
        id: "battle".to_string(),
        kind: ActionCardKind::Battle,
        title: "Battle".to_string(),
        description: "A fight breaks out. There is no telling what will appear...".to_string(),
        icon: Some("⚔️".to_string()),
    }
}

/// Action cards that may be offered on a floor.
pub fn available_action_cards() -> Vec<ActionCard> {
    // Treasure, rest and event pools are still empty.
    vec![battle_card()]
}

fn card(
    id: &str,
    name: &str,
    description: &str,
    card_type: CardType,
    rarity: CardRarity,
    cost: u32,
    effects: &[(EffectKind, i32, EffectTarget)],
) -> Card {
    effects.iter().fold(
        Card::new(id, name, card_type, rarity, cost).with_description(description),
        |card, &(kind, value, target)| card.with_effect(CardEffect::new(kind, value, target)),
    )
}

fn deck(ids: &[&str]) -> Vec<Card> {
    ids.iter().filter_map(|id| get_card(id)).collect()
}

fn character(id: &str, name: &str, job: &str, max_hp: i32, image: &str, flavor: &str) -> Character {
    let id = CharacterId::from(id);
    let cards = card_set_for(&id).to_vec();
    Character::new(id, name, max_hp)
        .with_job(job)
        .with_image(image)
        .with_flavor(flavor)
        .with_cards(cards)
}

fn enemy_action(
    id: &str,
    name: &str,
    damage: i32,
    target: EnemyActionTarget,
    description: &str,
) -> EnemyAction {
    EnemyAction {
        id: id.to_string(),
        name: name.to_string(),
        damage: Some(damage),
        target,
        description: description.to_string(),
    }
}

lazy_static::lazy_static! {
    /// Basic cards every loadout is assembled from.
    pub static ref BASIC_CARDS: Vec<Card> = {
        use CardRarity::*;
        use CardType::*;
        use EffectKind::*;
        use EffectTarget::*;
        vec![
            card("strike", "Strike", "Deal 6 damage to an enemy.", Attack, Common, 1,
                &[(Damage, 6, SingleEnemy)]),
            card("bash", "Bash", "Deal 8 damage and apply Vulnerable.", Attack, Common, 2,
                &[(Damage, 8, SingleEnemy), (Debuff, 2, SingleEnemy)]),
            card("defend", "Defend", "Gain 5 Block.", Skill, Common, 1,
                &[(Block, 5, Caster)]),
            card("pommel_strike", "Pommel Strike", "Deal 9 damage. Draw 1 card.", Skill, Common, 1,
                &[(Damage, 9, SingleEnemy), (DrawCard, 1, Caster)]),
            card("demon_form", "Demon Form", "At the start of each turn, gain 2 Strength.", Power, Rare, 3,
                &[(Buff, 2, Caster)]),
            card("inflame", "Inflame", "Gain 2 Strength.", Power, Uncommon, 1,
                &[(Buff, 2, Caster)]),
        ]
    };

    /// Five-card starting loadout per character.
    pub static ref CHARACTER_CARD_SETS: HashMap<&'static str, Vec<Card>> = {
        let mut sets = HashMap::new();
        sets.insert("warrior_001", deck(&["strike", "strike", "bash", "defend", "inflame"]));
        sets.insert("mage_001", deck(&["strike", "pommel_strike", "pommel_strike", "defend", "demon_form"]));
        sets.insert("cleric_001", deck(&["strike", "defend", "defend", "defend", "inflame"]));
        sets.insert("thief_001", deck(&["strike", "bash", "pommel_strike", "pommel_strike", "defend"]));
        sets.insert("archer_001", deck(&["strike", "strike", "bash", "pommel_strike", "defend"]));
        sets
    };

    pub static ref CHARACTERS: Vec<Character> = vec![
        character("warrior_001", "Allen the Warrior", "Warrior", 100,
            "/images/characters/warrior.svg",
            "A steadfast fighter devoted to sword and shield. Will take any blow meant for a friend."),
        character("mage_001", "Lina the Mage", "Mage", 70,
            "/images/characters/mage.svg",
            "A young scholar of ancient magic whose staff burns foes to ash."),
        character("cleric_001", "Mia the Cleric", "Cleric", 80,
            "/images/characters/cleric.svg",
            "A gentle servant of the goddess of light who mends her companions' wounds."),
        character("thief_001", "Kai the Thief", "Thief", 75,
            "/images/characters/thief.svg",
            "Moves fast and stays in the shadows. Locks and traps are his specialty."),
        character("archer_001", "Yu the Archer", "Archer", 85,
            "/images/characters/archer.svg",
            "A forest-raised marksman whose arrows find targets at any distance."),
    ];

    pub static ref ENEMIES: Vec<Enemy> = vec![
        Enemy {
            id: EnemyId::from("goblin-1"),
            name: "Goblin".to_string(),
            hp: 50,
            max_hp: 50,
            image: "/images/enemies/goblin.svg".to_string(),
            ai_pattern: AiPattern::Aggressive,
            actions: vec![
                enemy_action("goblin-attack", "Claw", 15, EnemyActionTarget::Single,
                    "Rakes a single target with sharp claws"),
                enemy_action("goblin-rage", "Raging Howl", 10, EnemyActionTarget::All,
                    "A furious howl that grazes the whole party"),
            ],
        },
        Enemy {
            id: EnemyId::from("orc-1"),
            name: "Orc".to_string(),
            hp: 80,
            max_hp: 80,
            image: "/images/enemies/orc.svg".to_string(),
            ai_pattern: AiPattern::Defensive,
            actions: vec![
                enemy_action("orc-club", "Club Smash", 25, EnemyActionTarget::Single,
                    "A heavy club blow against one target"),
                enemy_action("orc-intimidate", "Intimidate", 5, EnemyActionTarget::Random,
                    "Menaces a random target for light damage"),
            ],
        },
    ];

    pub static ref DUNGEONS: Vec<Dungeon> = vec![Dungeon {
        id: DungeonId::from("hajimari-no-meikyuu"),
        name: "Labyrinth of Beginnings".to_string(),
        description: "The first dungeon every adventurer attempts. Fairly safe, and a good place to learn the basics of battle.".to_string(),
        difficulty: "Beginner".to_string(),
    }];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_lookup() {
        let warrior = get_character("warrior_001").unwrap();
        assert_eq!(warrior.max_hp, 100);
        assert_eq!(warrior.hp, 100);
        assert_eq!(warrior.cards.len(), 5);
        assert!(get_character("nobody").is_none());
        assert_eq!(characters().len(), 5);
    }

    #[test]
    fn test_every_character_has_five_cards() {
        for c in characters() {
            assert_eq!(c.cards.len(), 5, "{} should have 5 cards", c.id);
            assert_eq!(c.cards, card_set_for(&c.id));
        }
    }

    #[test]
    fn test_card_set_for_unknown_is_empty() {
        assert!(card_set_for(&CharacterId::from("nobody")).is_empty());
    }

    #[test]
    fn test_card_lookup() {
        let bash = get_card("bash").unwrap();
        assert_eq!(bash.cost, 2);
        assert_eq!(bash.card_type, CardType::Attack);
        assert_eq!(bash.effects.len(), 2);
        assert_eq!(cards().len(), 6);
        assert!(get_card("fireball").is_none());
    }

    #[test]
    fn test_enemy_lookup() {
        let orc = get_enemy("orc-1").unwrap();
        assert_eq!(orc.max_hp, 80);
        assert_eq!(orc.ai_pattern, AiPattern::Defensive);
        assert_eq!(orc.actions.len(), 2);
        assert!(get_enemy("dragon").is_none());
        assert_eq!(enemies().len(), 2);
    }

    #[test]
    fn test_dungeon_lookup() {
        assert!(get_dungeon("hajimari-no-meikyuu").is_some());
        assert!(get_dungeon("missing").is_none());
        assert_eq!(dungeons().len(), 1);
    }

    #[test]
    fn test_action_cards() {
        let cards = available_action_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, ActionCardKind::Battle);
        assert_eq!(battle_card().id, "battle");
    }
}

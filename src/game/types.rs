//! Shared game vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Character class chosen at the start of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Front-line fighter.
    #[default]
    Warrior,
    /// Spellcaster with the deepest mana pool.
    Mage,
    /// Quick-handed scout.
    Rogue,
    /// Healer with a mana pool to match the mage.
    Cleric,
}

impl CharacterClass {
    /// Mana available to this class when the spellbook is compiled in.
    #[must_use]
    pub const fn max_mana(self) -> u32 {
        match self {
            Self::Mage | Self::Cleric => 60,
            Self::Warrior | Self::Rogue => 30,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
            Self::Cleric => "Cleric",
        };
        f.write_str(name)
    }
}

/// Item rarity, derived from gold value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rarity {
    /// Under 25 gold.
    Common,
    /// Under 100 gold.
    Uncommon,
    /// Under 500 gold.
    Rare,
    /// Under 1000 gold.
    Epic,
    /// Everything else.
    Legendary,
}

impl Rarity {
    /// Classify an item by its gold value.
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        match value {
            0..25 => Self::Common,
            25..100 => Self::Uncommon,
            100..500 => Self::Rare,
            500..1000 => Self::Epic,
            _ => Self::Legendary,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

/// What a spell does when cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellType {
    /// Hurts the enemy in the room.
    Damage,
    /// Restores the caster's health.
    Healing,
    /// Raises the caster's attack for the next fight.
    Buff,
    /// Weakens the enemy in the room.
    Debuff,
}

impl fmt::Display for SpellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Damage => "Damage",
            Self::Healing => "Healing",
            Self::Buff => "Buff",
            Self::Debuff => "Debuff",
        };
        f.write_str(name)
    }
}

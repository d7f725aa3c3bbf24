//! Player state management.

use serde::{Deserialize, Serialize};

use crate::game::CharacterClass;

/// Starting and maximum health.
pub const STARTING_HEALTH: u32 = 100;

/// Base attack before weapons and buffs.
pub const STARTING_ATTACK: u32 = 15;

/// The adventurer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Character class.
    pub class: CharacterClass,
    /// Current health.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Base attack.
    pub attack: u32,
    /// Gold collected.
    pub gold: u32,
    /// Experience level.
    pub level: u32,
    /// Current mana.
    pub mana: u32,
    /// Maximum mana.
    pub max_mana: u32,
}

impl Player {
    /// Create a fresh level-1 adventurer.
    #[must_use]
    pub fn new(name: &str, class: CharacterClass) -> Self {
        let max_mana = class.max_mana();
        Self {
            name: name.to_string(),
            class,
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            attack: STARTING_ATTACK,
            gold: 0,
            level: 1,
            mana: max_mana,
            max_mana,
        }
    }

    /// Whether the player is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Lose health, clamped at zero. Returns the damage actually taken.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    /// Restore health, clamped at the maximum. Returns the amount healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    /// Spend mana if enough is available.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.mana < amount {
            return false;
        }
        self.mana -= amount;
        true
    }

    /// Regain mana, clamped at the maximum.
    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    /// Collect gold.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Hero", CharacterClass::default())
    }
}

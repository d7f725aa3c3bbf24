//! Enemies that can be fought.
//!
//! Rooms hold `Box<dyn Entity>`. Without the `polymorphic-combat` session
//! every enemy is a plain [`Enemy`]; with it, the dungeon is populated with
//! [`Warrior`]s and [`Mage`]s that absorb and deal damage differently.

use serde::{Deserialize, Serialize};

use crate::rng::Rng;

/// A single enemy counter-attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// Damage dealt to the player.
    pub damage: u32,
    /// Flavour verb for the combat log ("attacks", "breathes fire").
    pub verb: &'static str,
}

/// Mutable part of an enemy, as stored in save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityState {
    /// Current health.
    pub health: u32,
    /// Remaining mana (zero for enemies without any).
    #[serde(default)]
    pub mana: u32,
    /// Accumulated strike weakening from debuffs.
    #[serde(default)]
    pub weakness: u32,
}

/// Something the player can fight.
pub trait Entity: std::fmt::Debug + Send + Sync {
    /// Display name.
    fn name(&self) -> &str;

    /// Type label shown in room descriptions.
    fn kind(&self) -> &'static str;

    /// Current health.
    fn health(&self) -> u32;

    /// Starting health.
    fn max_health(&self) -> u32;

    /// Defeating this entity ends the game in victory.
    fn is_boss(&self) -> bool;

    /// Apply incoming damage and return how much actually landed.
    fn take_damage(&mut self, amount: u32) -> u32;

    /// Roll a counter-attack against the player.
    fn strike(&mut self, rng: &mut Rng) -> Strike;

    /// Permanently lower this entity's strike damage.
    fn weaken(&mut self, amount: u32);

    /// Snapshot of the mutable state.
    fn state(&self) -> EntityState;

    /// Restore a snapshot. Health is clamped to `max_health`.
    fn restore(&mut self, state: EntityState);

    /// Whether the entity still stands.
    fn is_alive(&self) -> bool {
        self.health() > 0
    }
}

/// Shared health bookkeeping for every enemy type.
#[derive(Debug, Clone)]
struct Vitals {
    name: String,
    health: u32,
    max_health: u32,
    weakness: u32,
}

impl Vitals {
    fn new(name: &str, health: u32) -> Self {
        Self {
            name: name.to_string(),
            health,
            max_health: health,
            weakness: 0,
        }
    }

    fn lose(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.health);
        self.health -= dealt;
        dealt
    }

    fn restore(&mut self, state: EntityState) {
        self.health = state.health.min(self.max_health);
        self.weakness = state.weakness;
    }
}

/// Fallback enemy: takes damage directly, hits for `attack + 0..3`.
#[derive(Debug, Clone)]
pub struct Enemy {
    vitals: Vitals,
    attack: u32,
    boss: bool,
}

impl Enemy {
    /// Create a regular enemy.
    #[must_use]
    pub fn new(name: &str, health: u32, attack: u32) -> Self {
        Self {
            vitals: Vitals::new(name, health),
            attack,
            boss: false,
        }
    }

    /// Create a boss enemy.
    #[must_use]
    pub fn boss(name: &str, health: u32, attack: u32) -> Self {
        Self {
            boss: true,
            ..Self::new(name, health, attack)
        }
    }
}

impl Entity for Enemy {
    fn name(&self) -> &str {
        &self.vitals.name
    }

    fn kind(&self) -> &'static str {
        if self.boss { "Boss" } else { "Enemy" }
    }

    fn health(&self) -> u32 {
        self.vitals.health
    }

    fn max_health(&self) -> u32 {
        self.vitals.max_health
    }

    fn is_boss(&self) -> bool {
        self.boss
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        self.vitals.lose(amount)
    }

    fn strike(&mut self, rng: &mut Rng) -> Strike {
        let damage = (self.attack + rng.roll(3)).saturating_sub(self.vitals.weakness);
        Strike {
            damage,
            verb: "attacks",
        }
    }

    fn weaken(&mut self, amount: u32) {
        self.vitals.weakness = self.vitals.weakness.saturating_add(amount);
    }

    fn state(&self) -> EntityState {
        EntityState {
            health: self.vitals.health,
            mana: 0,
            weakness: self.vitals.weakness,
        }
    }

    fn restore(&mut self, state: EntityState) {
        self.vitals.restore(state);
    }
}

/// Base damage of a Warrior or Mage counter-attack, before the roll.
#[cfg(feature = "polymorphic-combat")]
const BASE_STRIKE: u32 = 10;

/// Mana a Mage spends on an empowered strike.
#[cfg(feature = "polymorphic-combat")]
const FIRE_COST: u32 = 25;

/// Extra damage of an empowered strike.
#[cfg(feature = "polymorphic-combat")]
const FIRE_DAMAGE: u32 = 5;

/// Armoured melee enemy. Armor is subtracted from every hit (minimum 1).
#[cfg(feature = "polymorphic-combat")]
#[derive(Debug, Clone)]
pub struct Warrior {
    vitals: Vitals,
    armor: u32,
}

#[cfg(feature = "polymorphic-combat")]
impl Warrior {
    /// Create a warrior.
    #[must_use]
    pub fn new(name: &str, health: u32, armor: u32) -> Self {
        Self {
            vitals: Vitals::new(name, health),
            armor,
        }
    }
}

#[cfg(feature = "polymorphic-combat")]
impl Entity for Warrior {
    fn name(&self) -> &str {
        &self.vitals.name
    }

    fn kind(&self) -> &'static str {
        "Warrior"
    }

    fn health(&self) -> u32 {
        self.vitals.health
    }

    fn max_health(&self) -> u32 {
        self.vitals.max_health
    }

    fn is_boss(&self) -> bool {
        false
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        let absorbed = amount.saturating_sub(self.armor).max(1);
        self.vitals.lose(absorbed)
    }

    fn strike(&mut self, rng: &mut Rng) -> Strike {
        let damage = (BASE_STRIKE + rng.roll(5)).saturating_sub(self.vitals.weakness);
        Strike {
            damage,
            verb: "swings its blade",
        }
    }

    fn weaken(&mut self, amount: u32) {
        self.vitals.weakness = self.vitals.weakness.saturating_add(amount);
    }

    fn state(&self) -> EntityState {
        EntityState {
            health: self.vitals.health,
            mana: 0,
            weakness: self.vitals.weakness,
        }
    }

    fn restore(&mut self, state: EntityState) {
        self.vitals.restore(state);
    }
}

/// Spellcasting enemy. Burns mana for stronger strikes until it runs dry.
#[cfg(feature = "polymorphic-combat")]
#[derive(Debug, Clone)]
pub struct Mage {
    vitals: Vitals,
    mana: u32,
    max_mana: u32,
    boss: bool,
}

#[cfg(feature = "polymorphic-combat")]
impl Mage {
    /// Create a mage.
    #[must_use]
    pub fn new(name: &str, health: u32, mana: u32) -> Self {
        Self {
            vitals: Vitals::new(name, health),
            mana,
            max_mana: mana,
            boss: false,
        }
    }

    /// Mark this mage as the dungeon boss.
    #[must_use]
    pub fn into_boss(mut self) -> Self {
        self.boss = true;
        self
    }

    /// Remaining mana.
    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }
}

#[cfg(feature = "polymorphic-combat")]
impl Entity for Mage {
    fn name(&self) -> &str {
        &self.vitals.name
    }

    fn kind(&self) -> &'static str {
        "Mage"
    }

    fn health(&self) -> u32 {
        self.vitals.health
    }

    fn max_health(&self) -> u32 {
        self.vitals.max_health
    }

    fn is_boss(&self) -> bool {
        self.boss
    }

    fn take_damage(&mut self, amount: u32) -> u32 {
        self.vitals.lose(amount)
    }

    fn strike(&mut self, rng: &mut Rng) -> Strike {
        let mut damage = BASE_STRIKE + rng.roll(5);
        let mut verb = "attacks";
        if self.mana >= FIRE_COST {
            self.mana -= FIRE_COST;
            damage += FIRE_DAMAGE;
            verb = "breathes fire";
        }
        Strike {
            damage: damage.saturating_sub(self.vitals.weakness),
            verb,
        }
    }

    fn weaken(&mut self, amount: u32) {
        self.vitals.weakness = self.vitals.weakness.saturating_add(amount);
    }

    fn state(&self) -> EntityState {
        EntityState {
            health: self.vitals.health,
            mana: self.mana,
            weakness: self.vitals.weakness,
        }
    }

    fn restore(&mut self, state: EntityState) {
        self.vitals.restore(state);
        self.mana = state.mana.min(self.max_mana);
    }
}

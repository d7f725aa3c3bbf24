//! Equippable weapons (session 04).

use serde::{Deserialize, Serialize};

/// Item name fragments that mark a weapon.
const WEAPON_WORDS: [&str; 2] = ["Sword", "Dagger"];

/// A wielded weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Weapon name.
    pub name: String,
    /// Damage added to every attack.
    pub damage: u32,
}

impl Weapon {
    /// Create a weapon.
    #[must_use]
    pub fn new(name: &str, damage: u32) -> Self {
        Self {
            name: name.to_string(),
            damage,
        }
    }

    /// Turn a looted item into a weapon if its name says it is one.
    ///
    /// Damage is a tenth of the item's gold value.
    #[must_use]
    pub fn from_loot(name: &str, value: u32) -> Option<Self> {
        WEAPON_WORDS
            .iter()
            .any(|w| name.contains(w))
            .then(|| Self::new(name, value / 10))
    }
}

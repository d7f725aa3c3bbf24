//! Spellbook (session 05).

use crate::game::SpellType;

/// Mana regained on entering a room.
pub const MANA_PER_MOVE: u32 = 5;

/// A learnable spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spell {
    /// Name typed after `cast`.
    pub name: &'static str,
    /// Effect category.
    pub kind: SpellType,
    /// Magnitude: damage, healing, attack bonus or weakening.
    pub power: u32,
    /// Mana spent per cast.
    pub cost: u32,
}

/// Every spell the player knows.
pub const SPELLBOOK: [Spell; 4] = [
    Spell {
        name: "Firebolt",
        kind: SpellType::Damage,
        power: 30,
        cost: 15,
    },
    Spell {
        name: "Heal",
        kind: SpellType::Healing,
        power: 25,
        cost: 10,
    },
    Spell {
        name: "Battle Cry",
        kind: SpellType::Buff,
        power: 5,
        cost: 10,
    },
    Spell {
        name: "Hex",
        kind: SpellType::Debuff,
        power: 5,
        cost: 12,
    },
];

/// Look up a spell by name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find(name: &str) -> Option<&'static Spell> {
    let name = name.trim();
    SPELLBOOK.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

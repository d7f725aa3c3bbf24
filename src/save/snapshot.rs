//! Full-game JSON snapshots.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SaveError, check_attack, read_file, write_file};
use crate::game::{EntityState, Inventory, Player, RoomId, Treasure, Weapon};
use crate::rng::Rng;

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Mutable state of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomState {
    /// Enemy state, if the room has an enemy.
    pub enemy: Option<EntityState>,
    /// Treasure still lying here.
    pub treasure: Vec<Treasure>,
    /// Whether the player has looked around.
    pub visited: bool,
}

/// Everything needed to resume a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version.
    pub version: u32,
    /// The player.
    pub player: Player,
    /// Current room.
    pub room: RoomId,
    /// Whether the boss is dead.
    pub boss_defeated: bool,
    /// Carried items.
    pub inventory: Inventory,
    /// Equipped weapon.
    #[serde(default)]
    pub weapon: Option<Weapon>,
    /// Pending attack bonus from buffs.
    #[serde(default)]
    pub buff: u32,
    /// Ids of finished quests.
    #[serde(default)]
    pub completed_quests: Vec<String>,
    /// Per-room state, indexed by room id.
    pub rooms: Vec<RoomState>,
    /// Combat RNG, so a reload replays the same rolls.
    pub rng: Rng,
    /// Commands executed so far.
    #[serde(default)]
    pub turns: u32,
}

impl Snapshot {
    /// Encode as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and validate JSON.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or any of the problems
    /// [`Snapshot::validate`] reports.
    pub fn from_json(text: &str) -> Result<Self, SaveError> {
        let snapshot: Self = serde_json::from_str(text)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that every value is one a running game could hold.
    ///
    /// # Errors
    ///
    /// Returns an error for a version mismatch, a room index outside the
    /// stored rooms, health or mana above its maximum, an overfull
    /// inventory, or an attack, weapon or buff past [`super::MAX_ATTACK`].
    pub fn validate(&self) -> Result<(), SaveError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SaveError::Version {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        if self.room >= self.rooms.len() {
            return Err(SaveError::Corrupt(format!(
                "room {} is outside the {} stored rooms",
                self.room,
                self.rooms.len()
            )));
        }
        if self.player.health > self.player.max_health {
            return Err(SaveError::Corrupt(format!(
                "health {} exceeds max health {}",
                self.player.health, self.player.max_health
            )));
        }
        if self.player.mana > self.player.max_mana {
            return Err(SaveError::Corrupt(format!(
                "mana {} exceeds max mana {}",
                self.player.mana, self.player.max_mana
            )));
        }
        if let Some(capacity) = self.inventory.capacity()
            && self.inventory.len() > capacity
        {
            return Err(SaveError::Corrupt(format!(
                "{} items in an inventory of {capacity}",
                self.inventory.len()
            )));
        }
        check_attack("attack", self.player.attack)?;
        if let Some(weapon) = &self.weapon {
            check_attack("weapon damage", weapon.damage)?;
        }
        check_attack("buff", self.buff)
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn write(&self, path: &Path) -> Result<(), SaveError> {
        write_file(path, &self.to_json()?)
    }

    /// Read from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or invalid.
    pub fn read(path: &Path) -> Result<Self, SaveError> {
        Self::from_json(&read_file(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Item;

    fn sample() -> Snapshot {
        let mut inventory = Inventory::new(Some(20));
        inventory.add(Item::new("Rusty Dagger", 10)).unwrap();
        Snapshot {
            version: SNAPSHOT_VERSION,
            player: Player::default(),
            room: 1,
            boss_defeated: false,
            inventory,
            weapon: Some(Weapon::new("Rusty Dagger", 1)),
            buff: 0,
            completed_quests: vec!["goblin".to_string()],
            rooms: vec![
                RoomState {
                    enemy: None,
                    treasure: Vec::new(),
                    visited: true,
                },
                RoomState {
                    enemy: Some(EntityState {
                        health: 0,
                        mana: 0,
                        weakness: 0,
                    }),
                    treasure: Vec::new(),
                    visited: true,
                },
            ],
            rng: Rng::new(9),
            turns: 4,
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        sample().write(&path).unwrap();
        assert_eq!(Snapshot::read(&path).unwrap(), sample());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let mut snapshot = sample();
        snapshot.version = 99;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(matches!(
            Snapshot::from_json(&json),
            Err(SaveError::Version { found: 99, expected: SNAPSHOT_VERSION })
        ));
    }

    #[test]
    fn test_room_out_of_range_rejected() {
        let mut snapshot = sample();
        snapshot.room = 5;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(matches!(Snapshot::from_json(&json), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn test_overfull_inventory_rejected() {
        let mut snapshot = sample();
        snapshot.inventory = Inventory::new(Some(0));
        let mut json: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
        json["inventory"]["items"] = serde_json::json!([{ "name": "Rock", "value": 1 }]);
        assert!(matches!(
            Snapshot::from_json(&json.to_string()),
            Err(SaveError::Corrupt(_))
        ));
    }

    #[test]
    fn test_attack_values_bounded() {
        let mut snapshot = sample();
        snapshot.player.attack = u32::MAX;
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(matches!(Snapshot::from_json(&json), Err(SaveError::Corrupt(_))));

        let mut snapshot = sample();
        snapshot.weapon = Some(Weapon::new("Godslayer", u32::MAX));
        assert!(snapshot.validate().is_err());

        let mut snapshot = sample();
        snapshot.buff = u32::MAX;
        assert!(snapshot.validate().is_err());

        let mut snapshot = sample();
        snapshot.turns = u32::MAX;
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            Snapshot::from_json("Hero\n100\n"),
            Err(SaveError::Json(_))
        ));
    }
}

//! Rooms, exits and the fixed dungeon layout.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::game::Entity;
#[cfg(not(feature = "polymorphic-combat"))]
use crate::game::Enemy;
#[cfg(feature = "polymorphic-combat")]
use crate::game::{Mage, Warrior};

/// Index of a room in the dungeon.
pub type RoomId = usize;

/// The room every run starts in, and where fleeing leads.
pub const ENTRANCE: RoomId = 0;

/// Compass direction of an exit.
///
/// Ordering is north, south, east, west, which is also the order exits are
/// listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Lowercase name as shown to the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" | "north" => Ok(Self::North),
            "s" | "south" => Ok(Self::South),
            "e" | "east" => Ok(Self::East),
            "w" | "west" => Ok(Self::West),
            _ => Err(()),
        }
    }
}

/// A lootable item lying in a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure {
    /// Item name.
    pub name: String,
    /// Worth in gold.
    pub value: u32,
}

impl Treasure {
    /// Create a treasure.
    #[must_use]
    pub fn new(name: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// A location in the dungeon.
#[derive(Debug)]
pub struct Room {
    /// Room name.
    pub name: String,
    /// Flavour text.
    pub description: String,
    /// Enemy guarding the room, alive or defeated.
    pub enemy: Option<Box<dyn Entity>>,
    /// Treasure still lying here.
    pub treasure: Vec<Treasure>,
    /// Whether the player has looked around here.
    pub visited: bool,
    /// Exits to other rooms.
    pub exits: BTreeMap<Direction, RoomId>,
}

impl Room {
    /// Create an empty room.
    #[must_use]
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            enemy: None,
            treasure: Vec::new(),
            visited: false,
            exits: BTreeMap::new(),
        }
    }

    /// Add an exit.
    #[must_use]
    pub fn exit(mut self, direction: Direction, to: RoomId) -> Self {
        self.exits.insert(direction, to);
        self
    }

    /// Place an enemy.
    #[must_use]
    pub fn guarded_by(mut self, enemy: impl Entity + 'static) -> Self {
        self.enemy = Some(Box::new(enemy));
        self
    }

    /// Add a piece of treasure.
    #[must_use]
    pub fn with_treasure(mut self, name: &str, value: u32) -> Self {
        self.treasure.push(Treasure::new(name, value));
        self
    }

    /// The enemy, if it is still alive.
    #[must_use]
    pub fn living_enemy(&self) -> Option<&dyn Entity> {
        self.enemy.as_deref().filter(|e| e.is_alive())
    }

    /// Mutable access to the enemy, if it is still alive.
    pub fn living_enemy_mut(&mut self) -> Option<&mut (dyn Entity + 'static)> {
        match self.enemy.as_deref_mut() {
            Some(enemy) if enemy.is_alive() => Some(enemy),
            _ => None,
        }
    }
}

/// The dungeon: a directed graph of rooms addressed by index.
#[derive(Debug)]
pub struct Dungeon {
    rooms: Vec<Room>,
}

impl Dungeon {
    /// Build a dungeon from rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the dungeon is empty or an exit points past the
    /// last room.
    pub fn new(rooms: Vec<Room>) -> Result<Self, LayoutError> {
        if rooms.is_empty() {
            return Err(LayoutError::Empty);
        }
        for (id, room) in rooms.iter().enumerate() {
            for (&direction, &to) in &room.exits {
                if to >= rooms.len() {
                    return Err(LayoutError::DanglingExit {
                        room: id,
                        direction,
                        to,
                    });
                }
            }
        }
        Ok(Self { rooms })
    }

    /// The fixed seven-room dungeon.
    #[must_use]
    pub fn standard() -> Self {
        match Self::new(standard_rooms()) {
            Ok(dungeon) => dungeon,
            Err(err) => unreachable!("built-in layout is invalid: {err}"),
        }
    }

    /// Number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always false for a constructed dungeon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Get a room by ID.
    #[must_use]
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Get a mutable room by ID.
    #[must_use]
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Iterate over all rooms in ID order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Iterate mutably over all rooms in ID order.
    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }

    /// Follow an exit.
    #[must_use]
    pub fn neighbor(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(from)?.exits.get(&direction).copied()
    }
}

/// Error for a malformed room graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// No rooms at all.
    #[error("a dungeon needs at least one room")]
    Empty,
    /// An exit leads nowhere.
    #[error("room {room} exit {direction} points to missing room {to}")]
    DanglingExit {
        /// Room holding the exit.
        room: RoomId,
        /// Exit direction.
        direction: Direction,
        /// Target that does not exist.
        to: RoomId,
    },
}

#[cfg(feature = "polymorphic-combat")]
fn goblin_scout() -> impl Entity {
    Warrior::new("Goblin Scout", 30, 5)
}

#[cfg(not(feature = "polymorphic-combat"))]
fn goblin_scout() -> impl Entity {
    Enemy::new("Goblin Scout", 30, 8)
}

#[cfg(feature = "polymorphic-combat")]
fn skeleton_warrior() -> impl Entity {
    Warrior::new("Skeleton Warrior", 50, 8)
}

#[cfg(not(feature = "polymorphic-combat"))]
fn skeleton_warrior() -> impl Entity {
    Enemy::new("Skeleton Warrior", 50, 12)
}

#[cfg(feature = "polymorphic-combat")]
fn ancient_dragon() -> impl Entity {
    Mage::new("Ancient Dragon", 150, 100).into_boss()
}

#[cfg(not(feature = "polymorphic-combat"))]
fn ancient_dragon() -> impl Entity {
    Enemy::boss("Ancient Dragon", 150, 25)
}

fn standard_rooms() -> Vec<Room> {
    use Direction::{East, North, South, West};

    vec![
        Room::new(
            "Dungeon Entrance",
            "You stand at the entrance of a dark dungeon. Torches flicker on the walls.",
        )
        .exit(North, 1),
        Room::new(
            "Grand Hall",
            "A vast hall with crumbling pillars. You hear echoes in the distance.",
        )
        .exit(South, 0)
        .exit(East, 2)
        .exit(West, 3)
        .exit(North, 4)
        .guarded_by(goblin_scout())
        .with_treasure("Rusty Dagger", 10),
        Room::new("Old Armory", "Broken weapons and armor litter the floor.")
            .exit(West, 1)
            .with_treasure("Iron Sword", 50)
            .with_treasure("Leather Armor", 40),
        Room::new("Storage Room", "Dusty crates and barrels fill this room.")
            .exit(East, 1)
            .with_treasure("Health Potion", 25)
            .with_treasure("Gold Coins", 100),
        Room::new(
            "Guard Room",
            "This room once housed the dungeon guards. Bones scatter the floor.",
        )
        .exit(South, 1)
        .exit(North, 5)
        .guarded_by(skeleton_warrior())
        .with_treasure("Steel Sword", 100),
        Room::new("Treasure Chamber", "Gold and jewels glitter in the torchlight!")
            .exit(South, 4)
            .exit(North, 6)
            .with_treasure("Magic Amulet", 200)
            .with_treasure("Gold Pile", 500),
        Room::new(
            "Dragon's Lair",
            "A massive chamber. The air is thick with smoke and the smell of sulfur.",
        )
        .exit(South, 5)
        .guarded_by(ancient_dragon())
        .with_treasure("Dragon Hoard", 5000),
    ]
}

//! Game rules for the dungeon crawler.
//!
//! - Fixed seven-room dungeon with exits, enemies and treasure
//! - Player, inventory, weapons, spells and quests
//! - Command parsing and the engine that runs one command at a time

mod command;
mod dungeon;
mod engine;
mod entity;
mod inventory;
mod invariants;
mod player;
pub mod quests;
pub mod spells;
mod types;
mod weapon;

pub use command::{Command, CommandError};
pub use dungeon::{Direction, Dungeon, ENTRANCE, LayoutError, Room, RoomId, Treasure};
pub use engine::{
    ATTACK_ROLL, DEFAULT_PLAYER_NAME, FLEE_PENALTY, GameConfig, GameEngine, GameStatus, Response,
};
pub use entity::{Enemy, Entity, EntityState, Strike};
#[cfg(feature = "polymorphic-combat")]
pub use entity::{Mage, Warrior};
pub use invariants::{InvariantViolation, check_invariants};
pub use inventory::{DEFAULT_CAPACITY, Inventory, InventoryFull, Item};
pub use player::{Player, STARTING_ATTACK, STARTING_HEALTH};
pub use quests::{Quest, QuestLog};
pub use types::{CharacterClass, Rarity, SpellType};
pub use weapon::Weapon;

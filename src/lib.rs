// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Quest: a text dungeon crawler assembled from course sessions.
//!
//! Each optional subsystem is a Cargo feature named after the session that
//! introduces it. Without a feature the game runs a simpler fallback.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (play / simulate / showcase)  │
//! ├─────────────────────────────────────┤
//! │   GameEngine  ──  render  ──  save  │
//! ├─────────────────────────────────────┤
//! │   dungeon, entities, player,        │
//! │   inventory, weapons, spells, quests│
//! └─────────────────────────────────────┘
//! ```

pub mod display;
pub mod game;
pub mod render;
pub mod rng;
pub mod save;
pub mod sessions;
pub mod sim;

// Re-export the types needed to run a game at crate root for convenience
pub use game::{
    CharacterClass, Command, CommandError, Direction, Dungeon, GameConfig, GameEngine, GameStatus,
    Player, Response,
};
pub use save::SaveError;

//! Autopilot runs for balance testing.
//!
//! The autopilot walks a fixed route that visits every room, fights every
//! enemy and loots everything, so the only variation between runs is the
//! combat dice. Running many seeds gives a win rate for the current build's
//! set of sessions.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::game::{CharacterClass, Command, Direction, GameConfig, GameEngine, GameStatus};

/// How one autopilot game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ending {
    /// The boss fell.
    Victory,
    /// The player fell.
    Defeat,
    /// The route ran out first.
    Unfinished,
}

/// Result of one autopilot game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Seed the game ran with.
    pub seed: u64,
    /// How it ended.
    pub ending: Ending,
    /// Commands executed.
    pub turns: u32,
    /// Gold collected.
    pub gold: u32,
    /// Health left.
    pub health: u32,
}

/// The autopilot's commands, in order.
///
/// With spells compiled in, the player heals and shouts a battle cry before
/// entering the dragon's lair.
#[must_use]
pub fn route() -> Vec<Command> {
    use Direction::{East, North, West};

    let mut commands = vec![
        Command::Move(North),
        Command::Fight,
        Command::Loot,
        Command::Move(East),
        Command::Loot,
        Command::Move(West),
        Command::Move(West),
        Command::Loot,
        Command::Move(East),
        Command::Move(North),
        Command::Fight,
        Command::Loot,
        Command::Move(North),
        Command::Loot,
    ];
    if cfg!(feature = "spells") {
        commands.push(Command::Cast("heal".to_string()));
        commands.push(Command::Cast("battle cry".to_string()));
    }
    commands.extend([Command::Move(North), Command::Fight, Command::Loot]);
    commands
}

/// Play one game on autopilot.
#[must_use]
pub fn play(seed: u64) -> Outcome {
    play_as(seed, CharacterClass::default())
}

/// Play one game on autopilot with the given class.
#[must_use]
pub fn play_as(seed: u64, class: CharacterClass) -> Outcome {
    let mut engine = GameEngine::new(GameConfig {
        player_name: "Autopilot".to_string(),
        class,
        seed: Some(seed),
        // The route never saves
        save_path: PathBuf::new(),
        ..GameConfig::default()
    });

    let mut status = GameStatus::Playing;
    for command in route() {
        status = engine.execute(command).status;
        if status.is_over() {
            break;
        }
    }

    let ending = match status {
        GameStatus::Victory => Ending::Victory,
        GameStatus::Defeat => Ending::Defeat,
        GameStatus::Playing | GameStatus::Quit => Ending::Unfinished,
    };
    debug!(seed, ?ending, turns = engine.turns(), "autopilot finished");

    Outcome {
        seed,
        ending,
        turns: engine.turns(),
        gold: engine.player().gold,
        health: engine.player().health,
    }
}

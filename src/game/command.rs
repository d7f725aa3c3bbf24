//! Player command parsing.

use std::str::FromStr;

use crate::game::Direction;

/// One player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through an exit.
    Move(Direction),
    /// Describe the current room.
    Look,
    /// Fight the enemy here.
    Fight,
    /// Run back to the entrance.
    Flee,
    /// Pick up all treasure here.
    Loot,
    /// Show the character sheet.
    Stats,
    /// List carried items.
    Inventory,
    /// Show the quest log.
    Quests,
    /// Cast a spell by name.
    Cast(String),
    /// Write a save file.
    Save,
    /// Read a save file.
    Load,
    /// List commands.
    Help,
    /// End the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    /// Nothing was typed.
    #[error("Unknown command. Type 'look' for help.")]
    Empty,
    /// The first word is not a command.
    #[error("Unknown command. Type 'look' for help.")]
    Unknown(String),
    /// `cast` without a spell name.
    #[error("Cast what? Try 'cast heal'.")]
    MissingSpell,
}

impl Command {
    /// Whether the session this command belongs to is compiled in.
    #[must_use]
    pub fn is_available(&self) -> bool {
        match self {
            Self::Quests => cfg!(feature = "quests"),
            Self::Cast(_) => cfg!(feature = "spells"),
            _ => true,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        let word = word.to_ascii_lowercase();
        if let Ok(direction) = word.parse::<Direction>() {
            return Ok(Self::Move(direction));
        }

        let command = match word.as_str() {
            "look" | "l" => Self::Look,
            "fight" | "attack" => Self::Fight,
            "flee" | "run" => Self::Flee,
            "loot" | "take" => Self::Loot,
            "stats" => Self::Stats,
            "inv" | "inventory" | "i" => Self::Inventory,
            "quests" => Self::Quests,
            "cast" if !cfg!(feature = "spells") => return Err(CommandError::Unknown(word)),
            "cast" if rest.is_empty() => return Err(CommandError::MissingSpell),
            "cast" => Self::Cast(rest.to_string()),
            "save" => Self::Save,
            "load" => Self::Load,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(word)),
        };
        if command.is_available() {
            Ok(command)
        } else {
            Err(CommandError::Unknown(word))
        }
    }
}

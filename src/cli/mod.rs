//! CLI command implementations for Quest.

pub(crate) mod play;
pub(crate) mod showcase;
pub(crate) mod simulate;

mod output;

use clap::ValueEnum;
use quest::CharacterClass;
use std::error::Error;
use std::fmt;

/// Output format for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Character class as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ClassArg {
    /// Front-line fighter.
    Warrior,
    /// Spellcaster.
    Mage,
    /// Scout.
    Rogue,
    /// Healer.
    Cleric,
}

impl From<ClassArg> for CharacterClass {
    fn from(class: ClassArg) -> Self {
        match class {
            ClassArg::Warrior => Self::Warrior,
            ClassArg::Mage => Self::Mage,
            ClassArg::Rogue => Self::Rogue,
            ClassArg::Cleric => Self::Cleric,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

//! Flat eight-line save format.
//!
//! ```text
//! Hero        name
//! 100         health
//! 100         max health
//! 15          attack
//! 0           gold
//! 1           level
//! 0           room index
//! 0           boss defeated (0 or 1)
//! ```

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use super::{SaveError, check_attack, read_file, write_file};

/// Player fields kept by the flat format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatSave {
    /// Player name.
    pub name: String,
    /// Current health.
    pub health: u32,
    /// Maximum health.
    pub max_health: u32,
    /// Base attack.
    pub attack: u32,
    /// Gold.
    pub gold: u32,
    /// Level.
    pub level: u32,
    /// Current room index.
    pub room: usize,
    /// Whether the boss is dead.
    pub boss_defeated: bool,
}

impl FlatSave {
    /// Render as file contents.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", self.name);
        let _ = writeln!(out, "{}", self.health);
        let _ = writeln!(out, "{}", self.max_health);
        let _ = writeln!(out, "{}", self.attack);
        let _ = writeln!(out, "{}", self.gold);
        let _ = writeln!(out, "{}", self.level);
        let _ = writeln!(out, "{}", self.room);
        let _ = writeln!(out, "{}", u8::from(self.boss_defeated));
        out
    }

    /// Parse file contents.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Corrupt`] if a line is missing or malformed, if
    /// health exceeds max health, or if attack is past [`super::MAX_ATTACK`].
    pub fn parse(text: &str) -> Result<Self, SaveError> {
        let mut lines = text.lines();
        let name = lines
            .next()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| SaveError::Corrupt("missing player name".to_string()))?
            .to_string();

        let health = number(&mut lines, "health")?;
        let max_health = number(&mut lines, "max health")?;
        let attack = number(&mut lines, "attack")?;
        let gold = number(&mut lines, "gold")?;
        let level = number(&mut lines, "level")?;
        let room = number(&mut lines, "room")?;
        let boss_defeated = match number::<u8>(&mut lines, "boss flag")? {
            0 => false,
            1 => true,
            other => {
                return Err(SaveError::Corrupt(format!("boss flag must be 0 or 1, got {other}")));
            }
        };

        if health > max_health {
            return Err(SaveError::Corrupt(format!(
                "health {health} exceeds max health {max_health}"
            )));
        }
        check_attack("attack", attack)?;

        Ok(Self {
            name,
            health,
            max_health,
            attack,
            gold,
            level,
            room,
            boss_defeated,
        })
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), SaveError> {
        write_file(path, &self.to_text())
    }

    /// Read from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn read(path: &Path) -> Result<Self, SaveError> {
        Self::parse(&read_file(path)?)
    }
}

fn number<'a, T: FromStr>(
    lines: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<T, SaveError> {
    let line = lines
        .next()
        .ok_or_else(|| SaveError::Corrupt(format!("missing {what}")))?;
    line.trim()
        .parse()
        .map_err(|_| SaveError::Corrupt(format!("invalid {what}: {line:?}")))
}

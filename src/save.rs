//! Save files.
//!
//! Two formats exist. The flat format is eight newline-separated fields and
//! is what a build without the `save-state` session writes. With the
//! session, the whole game is stored as a versioned JSON [`Snapshot`].

mod flat;
mod snapshot;

pub use flat::FlatSave;
pub use snapshot::{RoomState, SNAPSHOT_VERSION, Snapshot};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default save location, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "dungeon_save.txt";

/// Largest base attack, weapon damage or attack buff a save file may carry.
pub const MAX_ATTACK: u32 = 10_000;

/// Errors from reading or writing save files.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// There is no save file yet.
    #[error("no save file at {}", .0.display())]
    Missing(PathBuf),
    /// The file could not be read or written.
    #[error("could not access {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The file parsed but its contents make no sense.
    #[error("corrupt save file: {0}")]
    Corrupt(String),
    /// A snapshot was written by an incompatible version.
    #[error("save file version {found} is not supported (expected {expected})")]
    Version {
        /// Version in the file.
        found: u32,
        /// Version this build writes.
        expected: u32,
    },
    /// JSON encoding or decoding failed.
    #[error("invalid snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a whole save file.
pub(crate) fn read_file(path: &Path) -> Result<String, SaveError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SaveError::Missing(path.to_path_buf())
        } else {
            SaveError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Reject an attack value past [`MAX_ATTACK`].
pub(crate) fn check_attack(what: &str, value: u32) -> Result<(), SaveError> {
    if value > MAX_ATTACK {
        return Err(SaveError::Corrupt(format!(
            "{what} {value} exceeds the limit of {MAX_ATTACK}"
        )));
    }
    Ok(())
}

/// Write a whole save file.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), SaveError> {
    fs::write(path, contents).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nothing.txt");
        assert!(matches!(read_file(&path), Err(SaveError::Missing(p)) if p == path));
    }

    #[test]
    fn test_attack_limit() {
        assert!(check_attack("attack", MAX_ATTACK).is_ok());
        let err = check_attack("weapon damage", MAX_ATTACK + 1).unwrap_err();
        assert!(matches!(err, SaveError::Corrupt(msg) if msg.starts_with("weapon damage")));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/save.txt");
        assert!(matches!(write_file(&path, "x"), Err(SaveError::Io { .. })));
    }
}

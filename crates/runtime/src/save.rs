//! File-based player save repository.
//!
//! Stores one pretty-printed JSON file per player, keyed by a sanitized
//! form of the player name. A missing or corrupt save falls back to a
//! fresh character rather than propagating a fatal error: losing a save
//! is sad, refusing to start the game over it is sadder.

use std::fs;
use std::path::{Path, PathBuf};

use demon_core::PlayerState;

use crate::error::SaveError;

/// File-based save repository.
pub struct SaveRepository {
    base_dir: PathBuf,
}

impl SaveRepository {
    /// Create a repository rooted at the given directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, SaveError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Create a repository under the platform data directory.
    pub fn open_default() -> Result<Self, SaveError> {
        let dirs = directories::ProjectDirs::from("", "", "daily-demons")
            .ok_or(SaveError::NoDataDirectory)?;
        Self::new(dirs.data_dir().join("saves"))
    }

    /// Path of the save file for a player name.
    fn save_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize(name)))
    }

    /// Persists a player's durable state.
    pub fn save(&self, player: &PlayerState) -> Result<(), SaveError> {
        let path = self.save_path(&player.name);
        let temp_path = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(player)
            .map_err(|e| SaveError::Serialization(e.to_string()))?;

        // Write to temp file, then atomic rename
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", player.name, path.display());
        Ok(())
    }

    /// Loads a player by name, falling back to a fresh character when the
    /// save is missing or unreadable.
    pub fn load_or_create(&self, name: &str) -> PlayerState {
        let path = self.save_path(name);

        let Ok(bytes) = fs::read(&path) else {
            tracing::debug!("No save for {}, starting fresh", name);
            return PlayerState::new(name);
        };

        match serde_json::from_slice::<PlayerState>(&bytes) {
            Ok(player) => {
                tracing::debug!("Loaded {} from {}", player.name, path.display());
                player
            }
            Err(e) => {
                tracing::warn!(
                    "Corrupt save at {} ({}), starting fresh",
                    path.display(),
                    e
                );
                PlayerState::new(name)
            }
        }
    }

    /// True when a save exists for the name.
    pub fn exists(&self, name: &str) -> bool {
        self.save_path(name).exists()
    }

    /// Deletes a player's save, if present.
    pub fn delete(&self, name: &str) -> Result<(), SaveError> {
        let path = self.save_path(name);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted save for {}", name);
        }
        Ok(())
    }
}

/// Collapses a display name into a filesystem-safe key.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

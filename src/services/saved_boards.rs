//! Saved style card store.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::SavedBoard;
use crate::services::storage::{read_json_or_default, write_json_atomic};

/// Persistence for saved style cards.
pub trait SavedBoardStore {
    /// Persists a card.
    fn save(&self, board: &SavedBoard) -> Result<()>;

    /// Returns the user's cards, oldest first.
    fn list(&self, user_id: &str) -> Result<Vec<SavedBoard>>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedBoardsFile {
    #[serde(default)]
    boards: Vec<SavedBoard>,
}

/// Saved board store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSavedBoardStore {
    path: PathBuf,
}

impl JsonSavedBoardStore {
    /// Creates a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SavedBoardStore for JsonSavedBoardStore {
    fn save(&self, board: &SavedBoard) -> Result<()> {
        let mut file: SavedBoardsFile = read_json_or_default(&self.path)?;
        file.boards.push(board.clone());
        write_json_atomic(&file, &self.path)?;

        info!(id = %board.id, name = %board.name, items = board.item_ids.len(), "saved style card");
        Ok(())
    }

    fn list(&self, user_id: &str) -> Result<Vec<SavedBoard>> {
        let file: SavedBoardsFile = read_json_or_default(&self.path)?;
        let mut boards: Vec<SavedBoard> = file
            .boards
            .into_iter()
            .filter(|board| board.user_id == user_id)
            .collect();
        boards.sort_by_key(|board| board.created);
        Ok(boards)
    }
}

//! Wardrobe store.
//!
//! The composer never fetches items itself; it receives a wardrobe snapshot
//! from a [`WardrobeStore`]. [`JsonWardrobeStore`] keeps every user's items in
//! one JSON file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::WardrobeItem;
use crate::services::storage::{read_json_or_default, write_json_atomic};

/// Read access to a user's wardrobe.
pub trait WardrobeStore {
    /// Returns all items owned by `user_id`, newest first.
    fn list_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>>;
}

/// On-disk shape of the wardrobe file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct WardrobeFile {
    #[serde(default)]
    items: Vec<WardrobeItem>,
}

/// Wardrobe store backed by a JSON file.
///
/// A missing file is an empty wardrobe. Writes are atomic.
#[derive(Debug, Clone)]
pub struct JsonWardrobeStore {
    path: PathBuf,
}

impl JsonWardrobeStore {
    /// Creates a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if any user owns an item with this ID.
    pub fn contains(&self, id: &str) -> Result<bool> {
        let file: WardrobeFile = read_json_or_default(&self.path)?;
        Ok(file.items.iter().any(|item| item.id == id))
    }

    /// Adds an item to the wardrobe.
    ///
    /// # Errors
    ///
    /// Returns an error if an item with the same ID already exists or the
    /// file cannot be read or written.
    pub fn insert(&self, item: WardrobeItem) -> Result<()> {
        let mut file: WardrobeFile = read_json_or_default(&self.path)?;

        if file.items.iter().any(|existing| existing.id == item.id) {
            anyhow::bail!("Item with ID '{}' already exists", item.id);
        }

        info!(id = %item.id, user = %item.user_id, "adding wardrobe item");
        file.items.push(item);
        write_json_atomic(&file, &self.path)
    }

    /// Removes one of the user's items and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the user owns no item with that ID.
    pub fn remove(&self, user_id: &str, id: &str) -> Result<WardrobeItem> {
        let mut file: WardrobeFile = read_json_or_default(&self.path)?;

        let index = file
            .items
            .iter()
            .position(|item| item.id == id && item.user_id == user_id)
            .ok_or_else(|| anyhow::anyhow!("Item '{id}' not found in wardrobe"))?;

        let removed = file.items.remove(index);
        write_json_atomic(&file, &self.path)?;

        info!(id = %removed.id, user = %user_id, "removed wardrobe item");
        Ok(removed)
    }
}

impl WardrobeStore for JsonWardrobeStore {
    fn list_items(&self, user_id: &str) -> Result<Vec<WardrobeItem>> {
        let file: WardrobeFile = read_json_or_default(&self.path)?;
        let mut items: Vec<WardrobeItem> = file
            .items
            .into_iter()
            .rev()
            .filter(|item| item.user_id == user_id)
            .collect();
        // Later inserts win ties; undated items sort last
        items.sort_by(|a, b| b.created.cmp(&a.created));

        debug!(path = %self.path.display(), user = %user_id, count = items.len(), "listed wardrobe");
        Ok(items)
    }
}
